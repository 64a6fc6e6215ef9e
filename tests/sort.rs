use lazygen::sort::{all_numbers, any_positive, insertion_sort, Value};
use rand::random;

#[test]
fn sort_matches_the_standard_sort() {
    for _ in 0..10 {
        let items: Vec<i32> =
            (0..(random::<usize>() % 100)).map(|_| random()).collect();
        let mut expected = items.clone();
        expected.sort_unstable();
        assert_eq!(insertion_sort(&items), expected);
    }
}

#[test]
fn sort_is_stable() {
    // Pair values compare on the first component only.
    #[derive(Clone, Debug, PartialEq)]
    struct Keyed(i32, usize);
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, o: &Keyed) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&o.0)
        }
    }

    let items = vec![Keyed(1, 0), Keyed(0, 1), Keyed(1, 2), Keyed(0, 3)];
    let sorted = insertion_sort(&items);
    assert_eq!(
        sorted,
        vec![Keyed(0, 1), Keyed(0, 3), Keyed(1, 0), Keyed(1, 2)]
    );
}

#[test]
fn demo_pipeline_over_parsed_input() {
    // The flow of the interactive demo: parse tokens, run both
    // predicates, sort only when everything is a number.
    let tokens = ["3", "-1.5", "2", "0"];
    let values: Vec<Value> =
        tokens.iter().map(|t| t.parse().unwrap()).collect();

    assert!(any_positive(&values));
    assert!(all_numbers(&values));
    let sorted = insertion_sort(&values);
    assert_eq!(
        sorted,
        vec![
            Value::Float(-1.5),
            Value::Int(0),
            Value::Int(2),
            Value::Int(3),
        ]
    );

    let mixed: Vec<Value> =
        ["1", "two", "3"].iter().map(|t| t.parse().unwrap()).collect();
    assert!(any_positive(&mixed));
    assert!(!all_numbers(&mixed));
}
