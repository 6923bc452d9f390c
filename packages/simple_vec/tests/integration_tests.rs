//! Integration tests for the `simple_vec` package.
//!
//! These tests exercise `SimpleVec` through its public API only, covering the growth policy,
//! positional insertion and removal, value semantics and buffer invalidation.

use std::cell::Cell;
use std::mem;
use std::rc::Rc;
use std::thread;

use simple_vec::{DropPolicy, Error, OwnedBuffer, SimpleVec, reserve, simple_vec};

/// Counts how many times instances have been cloned, so tests can prove that an operation
/// performed no item-level copies.
#[derive(Debug)]
struct CloneCounter {
    value: u32,
    clones: Rc<Cell<usize>>,
}

impl CloneCounter {
    fn new(value: u32, clones: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            clones: Rc::clone(clones),
        }
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);

        Self {
            value: self.value,
            clones: Rc::clone(&self.clones),
        }
    }
}

#[test]
fn literal_push_erase_scenario() {
    let mut items = simple_vec![1, 2, 3];
    assert_eq!(items.len(), 3);
    assert_eq!(items.capacity(), 3);
    assert_eq!(items, [1, 2, 3]);

    items.push_back(4);
    assert_eq!(items.len(), 4);
    assert_eq!(items.capacity(), 7);
    assert_eq!(items, [1, 2, 3, 4]);

    let index = items.erase(1);
    assert_eq!(index, 1);
    assert_eq!(items, [1, 3, 4]);
    assert_eq!(items.len(), 3);
}

#[test]
fn capacity_grows_only_when_full() {
    let mut items = SimpleVec::new();
    let mut previous_capacity = items.capacity();
    let mut grown_at = Vec::new();

    for value in 0..100 {
        let len_before = items.len();
        items.push_back(value);

        assert!(items.capacity() >= previous_capacity);

        if items.capacity() != previous_capacity {
            grown_at.push(len_before);
            previous_capacity = items.capacity();
        }
    }

    assert_eq!(items.len(), 100);
    assert_eq!(grown_at, vec![0, 1, 3, 7, 15, 31, 63]);
}

#[test]
fn values_read_back_as_written() {
    let mut items = SimpleVec::<u64>::with_len(50);

    for index in 0..items.len() {
        items[index] = u64::try_from(index).unwrap() * 3;
    }

    for index in 0..items.len() {
        let expected = u64::try_from(index).unwrap() * 3;
        assert_eq!(items[index], expected);
        assert_eq!(*items.at(index).unwrap(), expected);
    }

    assert_eq!(items.at(50), Err(Error::OutOfRange { index: 50, len: 50 }));
    assert!(items.at(usize::MAX).is_err());
}

#[test]
fn resize_grows_with_defaults_and_keeps_prefix() {
    let mut items = simple_vec!["a".to_string(), "b".to_string()];

    items.resize(5);

    assert_eq!(items, ["a", "b", "", "", ""]);

    items.resize(1);
    assert_eq!(items, ["a"]);
    assert_eq!(items.capacity(), 5);
}

#[test]
fn insert_at_begin_middle_and_end() {
    let mut items = simple_vec![10, 20, 30];

    let begin = items.insert(0, 5);
    assert_eq!(items[begin], 5);
    assert_eq!(items, [5, 10, 20, 30]);

    let middle = items.insert(2, 15);
    assert_eq!(items[middle], 15);
    assert_eq!(items, [5, 10, 15, 20, 30]);

    let end = items.insert(items.len(), 35);
    assert_eq!(items[end], 35);
    assert_eq!(end, items.len() - 1);
    assert_eq!(items, [5, 10, 15, 20, 30, 35]);
}

#[test]
fn erase_each_position_preserves_order() {
    for erased in 0..5 {
        let mut items = simple_vec![0, 1, 2, 3, 4];

        let index = items.erase(erased);

        let expected: Vec<i32> = (0..5).filter(|value| *value != erased as i32).collect();
        assert_eq!(items, expected);
        assert_eq!(items.len(), 4);
        assert_eq!(items.capacity(), 5);
        assert_eq!(index, erased);
    }
}

#[test]
fn copy_is_isolated_from_original() {
    let original = simple_vec![1, 2, 3];

    let mut copy = original.clone();
    copy[0] = 100;
    copy.push_back(4);
    copy.erase(1);

    assert_eq!(original, [1, 2, 3]);
    assert_eq!(copy, [100, 3, 4]);
}

#[test]
fn copy_assign_replaces_contents() {
    let source = simple_vec![7, 8, 9];
    let mut target = simple_vec![1];

    target.clone_from(&source);

    assert_eq!(target, source);
    assert_eq!(target.capacity(), 3);
}

#[test]
fn move_leaves_source_empty() {
    let mut source = simple_vec![1, 2, 3];

    let destination = mem::take(&mut source);

    assert_eq!(destination, [1, 2, 3]);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert!(source.is_empty());
}

#[test]
fn swap_performs_no_item_copies() {
    let clones = Rc::new(Cell::new(0));

    let mut a: SimpleVec<CloneCounter> = (0..4).map(|value| CloneCounter::new(value, &clones)).collect();
    let mut b = SimpleVec::with_capacity(20);
    b.push_back(CloneCounter::new(99, &clones));

    a.swap(&mut b);

    assert_eq!(clones.get(), 0);
    assert_eq!(a.len(), 1);
    assert_eq!(a.capacity(), 20);
    assert_eq!(a[0].value, 99);
    assert_eq!(b.len(), 4);
    assert_eq!(b.iter().map(|item| item.value).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn growth_moves_instead_of_copying() {
    let clones = Rc::new(Cell::new(0));
    let mut items = SimpleVec::new();

    for value in 0..50 {
        items.push_back(CloneCounter::new(value, &clones));
    }
    items.reserve(1000);
    _ = items.insert(0, CloneCounter::new(1000, &clones));

    assert_eq!(clones.get(), 0);

    let copy = items.clone();
    assert_eq!(clones.get(), 51);
    assert_eq!(copy.len(), 51);
}

#[test]
fn relational_operators() {
    let a = simple_vec![1, 2];
    let b = simple_vec![1, 2, 3];
    let c = simple_vec![1, 3];
    let d = simple_vec![1, 2, 9];

    assert!(a < b);
    assert!(a != b);
    assert!(c > d);
    assert!(c >= d);
    assert!(d <= c);
    assert_eq!(a, simple_vec![1, 2]);
    assert!(a <= simple_vec![1, 2]);
    assert!(a >= simple_vec![1, 2]);
}

#[test]
fn reallocation_invalidates_positions() {
    let mut items = simple_vec![1, 2, 3];
    let before = items.as_ptr();

    // Full, so this reallocates.
    items.push_back(4);
    let after_growth = items.as_ptr();
    assert_ne!(before, after_growth);

    // Room for 3 more; none of these reallocate.
    _ = items.insert(1, 10);
    items.erase(0);
    items.resize(6);
    items.reserve(7);
    items.push_back(5);
    assert_eq!(items.as_ptr(), after_growth);

    // Beyond capacity again.
    items.reserve(100);
    assert_ne!(items.as_ptr(), after_growth);
}

#[test]
fn reserve_proxy_and_builder_construct_empty() {
    let from_proxy: SimpleVec<String> = reserve(8).into();
    assert!(from_proxy.is_empty());
    assert_eq!(from_proxy.capacity(), 8);

    let built = SimpleVec::<String>::builder()
        .capacity(8)
        .drop_policy(DropPolicy::MayDropItems)
        .build();
    assert!(built.is_empty());
    assert_eq!(built.capacity(), 8);
}

#[test]
fn failed_growth_leaves_container_unchanged() {
    let mut items = simple_vec![1_u64, 2, 3];

    assert!(items.try_reserve(usize::MAX).is_err());
    assert!(items.try_resize(usize::MAX).is_err());

    assert_eq!(items, [1, 2, 3]);
    assert_eq!(items.capacity(), 3);
}

#[test]
fn collect_and_iterate_by_value() {
    let items: SimpleVec<String> = ["x", "y", "z"].iter().map(ToString::to_string).collect();

    let joined: String = items.into_iter().rev().collect();

    assert_eq!(joined, "zyx");
}

#[test]
fn moves_between_threads() {
    let items = simple_vec![1, 2, 3];

    let sum = thread::spawn(move || items.iter().sum::<i32>()).join().unwrap();

    assert_eq!(sum, 6);
}

#[test]
fn owned_buffer_release_and_readopt() {
    let mut buffer = OwnedBuffer::<u32>::new(16);

    let (ptr, capacity) = buffer.release();
    assert!(buffer.is_empty());

    // SAFETY: We are re-adopting exactly the allocation that was just released.
    let buffer = unsafe { OwnedBuffer::from_raw_parts(ptr, capacity) };
    assert_eq!(buffer.capacity(), 16);
}
