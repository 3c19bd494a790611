use avl_index::avl_tree::{AvlSet, Error};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

fn height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2() - 0.328
}

#[test]
fn int_test_avl_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 10_000u32);

        if rng.gen::<bool>() {
            assert_eq!(set.insert(key), expected.insert(key));
        } else {
            assert_eq!(set.remove(&key), expected.take(&key));
        }

        assert_eq!(set.len(), expected.len());
        assert!(f64::from(set.height()) <= height_bound(set.len()));
    }

    assert!(set.check_invariant().is_ok());
    assert_eq!(set.find_min().ok(), expected.iter().next());
    assert_eq!(set.find_max().ok(), expected.iter().next_back());
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    for key in 0..10_000u32 {
        assert_eq!(set.contains(&key), expected.contains(&key));
    }
}

#[test]
fn int_test_invariant_after_every_operation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 3, 5, 7]);
    let mut set = AvlSet::new();

    for _ in 0..5_000 {
        let key = rng.gen_range(0, 200u32);
        if rng.gen_range(0, 3) == 0 {
            set.remove(&key);
        } else {
            set.insert(key);
        }
        assert_eq!(set.check_invariant(), Ok(()));
    }
}

#[test]
fn int_test_adversarial_height() {
    let mut set = AvlSet::new();
    for i in 0..(1 << 12) {
        set.insert(i);
        assert!(f64::from(set.height()) <= height_bound(set.len()));
    }
    for i in (0..(1 << 12)).filter(|i| i % 3 != 0) {
        set.remove(&i);
        assert!(f64::from(set.height()) <= height_bound(set.len()));
    }
    assert_eq!(set.check_invariant(), Ok(()));
}

#[test]
fn int_test_insert_is_idempotent() {
    let mut set = AvlSet::new();
    for i in &[8, 4, 12, 2, 6, 10, 14] {
        set.insert(*i);
    }
    let before = set.iter().cloned().collect::<Vec<u32>>();
    let height = set.height();

    for i in &[8, 4, 12, 2, 6, 10, 14] {
        assert!(!set.insert(*i));
    }

    assert_eq!(set.len(), 7);
    assert_eq!(set.height(), height);
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), before);
}

#[test]
fn int_test_remove_missing_is_noop() {
    let mut set = AvlSet::new();
    for i in 0..50u32 {
        set.insert(i * 2);
    }
    let before = set.iter().cloned().collect::<Vec<u32>>();
    let height = set.height();

    for i in 0..50u32 {
        assert_eq!(set.remove(&(i * 2 + 1)), None);
    }

    assert_eq!(set.len(), 50);
    assert_eq!(set.height(), height);
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), before);
    assert_eq!(set.check_invariant(), Ok(()));
}

#[test]
fn int_test_stepped_fill_then_remove_odd() {
    const NUMS: u32 = 1_000_000;
    const GAP: u32 = 37;

    let mut set = AvlSet::new();
    let mut i = GAP;
    while i != 0 {
        set.insert(i);
        i = (i + GAP) % NUMS;
    }
    assert_eq!(set.len(), (NUMS - 1) as usize);

    for i in (1..NUMS).step_by(2) {
        set.remove(&i);
    }

    assert_eq!(set.find_min(), Ok(&2));
    assert_eq!(set.find_max(), Ok(&(NUMS - 2)));
    for i in (2..NUMS).step_by(2) {
        assert!(set.contains(&i));
    }
    for i in (1..NUMS).step_by(2) {
        assert!(!set.contains(&i));
    }
    assert_eq!(set.check_invariant(), Ok(()));
}

#[test]
fn int_test_small_tree_in_order() {
    let mut set = AvlSet::new();
    for i in &[5, 3, 8, 1, 4, 7, 9] {
        set.insert(*i);
    }

    assert_eq!(
        set.iter().cloned().collect::<Vec<u32>>(),
        vec![1, 3, 4, 5, 7, 8, 9],
    );
    assert!(set.height() <= 3);
    assert_eq!(set.check_invariant(), Ok(()));
}

#[test]
fn int_test_ascending_inserts_rotate() {
    let mut set = AvlSet::new();
    for i in 1..=5u32 {
        set.insert(i);
        assert_eq!(set.check_invariant(), Ok(()));
    }
    assert_eq!(set.height(), 2);
}

#[test]
fn int_test_remove_root_with_two_children() {
    let mut set = AvlSet::new();
    for i in &[5, 3, 8, 1, 4, 7, 9] {
        set.insert(*i);
    }

    assert_eq!(set.remove(&5), Some(5));
    assert!(!set.contains(&5));
    assert_eq!(set.check_invariant(), Ok(()));
    assert_eq!(
        set.iter().cloned().collect::<Vec<u32>>(),
        vec![1, 3, 4, 7, 8, 9],
    );
    assert_eq!(set.height(), 2);
}

#[test]
fn int_test_empty_min_max() {
    let set: AvlSet<u32> = AvlSet::new();
    assert_eq!(set.find_min(), Err(Error::EmptyContainer));
    assert_eq!(set.find_max(), Err(Error::EmptyContainer));
}

#[test]
fn int_test_clear() {
    let mut set = AvlSet::new();
    for i in 0..1_000u32 {
        set.insert(i);
    }
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.height(), -1);
    assert_eq!(set.find_min(), Err(Error::EmptyContainer));
    assert!(!set.contains(&0));

    set.insert(1);
    assert_eq!(set.find_max(), Ok(&1));
}

#[test]
fn int_test_into_iter_drains_in_order() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([4, 4, 4, 4]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..1_000 {
        let key = rng.gen::<u32>();
        set.insert(key);
        expected.insert(key);
    }

    assert_eq!(
        set.into_iter().collect::<Vec<u32>>(),
        expected.into_iter().collect::<Vec<u32>>(),
    );
}
