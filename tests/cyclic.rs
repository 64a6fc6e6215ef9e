use lazygen::{CyclicIterator, Error, Generator};
use rand::random;
use std::collections::{BTreeSet, HashSet};

#[test]
fn cyclic_empty_set_always_exhausted() {
    let mut it = CyclicIterator::from(BTreeSet::<u64>::new());
    for _ in 0..10 {
        assert_eq!(it.pull(), Err(Error::Exhausted));
    }
}

#[test]
fn cyclic_periodicity_over_random_sets() {
    for _ in 0..10 {
        let set: HashSet<u64> =
            (0..(1 + random::<usize>() % 32)).map(|_| random()).collect();
        let size = set.len();
        let mut it = CyclicIterator::from(set);

        // The first cycle fixes the captured order.
        let order: Vec<u64> =
            (0..size).map(|_| it.pull().unwrap()).collect();

        // Every later pull must follow the periodicity law.
        for m in size + 1..=size * 4 {
            assert_eq!(it.pull().unwrap(), order[(m - 1) % size]);
        }
        assert_eq!(it.state().cycle_count, 4);
        assert_eq!(it.state().cursor, 0);
    }
}

#[test]
fn cyclic_snapshot_ignores_source_mutation() {
    let mut source: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
    let mut it = CyclicIterator::new(source.iter().copied()).unwrap();
    source.insert(99);
    source.remove(&1);
    let drawn: Vec<u32> = (0..6).map(|_| it.pull().unwrap()).collect();
    assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn cyclic_state_is_a_pure_query() {
    let it = CyclicIterator::new(vec![1, 2, 3]).unwrap();
    let a = it.state();
    let b = it.state();
    assert_eq!(a, b);
    assert_eq!(a.cursor, 0);
    assert_eq!(a.cycle_count, 0);
    assert_eq!(a.total_elements, 3);
}

#[test]
fn cyclic_rejects_duplicate_input() {
    let err = CyclicIterator::new(vec!["a", "b", "a"]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
