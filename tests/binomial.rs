use lazygen::{BinomialRow, Error, Generator};

#[test]
fn binomial_rows_sum_to_two_to_the_n() {
    for n in 0..=120i64 {
        let row = BinomialRow::row(n).unwrap();
        assert_eq!(row.len(), n as usize + 1);
        assert_eq!(row[0], 1);
        assert_eq!(*row.last().unwrap(), 1);
        let sum: u128 = row.iter().sum();
        assert_eq!(sum, 1u128 << n);
    }
}

#[test]
fn binomial_rows_are_symmetric() {
    for n in 0..=120i64 {
        let row = BinomialRow::row(n).unwrap();
        let len = row.len();
        for k in 0..len {
            assert_eq!(row[k], row[len - 1 - k]);
        }
    }
}

#[test]
fn binomial_row_ten() {
    let row = BinomialRow::row(10).unwrap();
    let sum: u128 = row.iter().sum();
    assert_eq!(sum, 1024);
    assert_eq!(
        row,
        vec![1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]
    );
}

#[test]
fn binomial_negative_rows_are_invalid() {
    for n in [-1i64, -5] {
        match BinomialRow::generate(n) {
            Err(Error::InvalidArgument(_)) => {}
            _ => panic!("row {} unexpectedly accepted", n),
        }
    }
}

#[test]
fn binomial_matches_the_additive_pascal_rule() {
    // C(n,k) = C(n-1,k-1) + C(n-1,k), computed without the recurrence
    // under test.
    let mut previous = BinomialRow::row(0).unwrap();
    for n in 1..=60i64 {
        let row = BinomialRow::row(n).unwrap();
        for k in 1..previous.len() {
            assert_eq!(row[k], previous[k - 1] + previous[k]);
        }
        previous = row;
    }
}

#[test]
fn binomial_generator_is_not_restartable() {
    let mut row = BinomialRow::generate(3).unwrap();
    let first: Vec<u128> = (0..4).map(|_| row.pull().unwrap()).collect();
    assert_eq!(first, vec![1, 3, 3, 1]);
    assert_eq!(row.pull(), Err(Error::Exhausted));

    // A fresh generate() call is the only way to produce the row again.
    let again: Vec<u128> = BinomialRow::generate(3).unwrap().collect();
    assert_eq!(again, first);
}
