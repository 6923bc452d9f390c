use std::any::type_name;
use std::iter::FusedIterator;
use std::{fmt, ptr, slice, thread};

use crate::{DropPolicy, OwnedBuffer, SimpleVec};

/// An iterator that moves items out of a [`SimpleVec`], created by its
/// [`IntoIterator`] implementation.
///
/// Items not yet yielded are dropped together with the iterator. The iterator inherits the
/// [`DropPolicy`] of the container, so with [`DropPolicy::MustNotDropItems`] it panics if it
/// is dropped before every item has been yielded.
pub struct IntoIter<T> {
    buffer: OwnedBuffer<T>,
    drop_policy: DropPolicy,

    /// Items at `[front, back)` have not yet been yielded and are still initialized.
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// The items that have not yet been yielded.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        let remaining = self
            .back
            .checked_sub(self.front)
            .expect("front never passes back");

        // SAFETY: The slots at `[front, back)` are initialized and owned by the iterator.
        unsafe { slice::from_raw_parts(self.buffer.slot(self.front).as_ptr(), remaining) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        let slot = self.buffer.slot(self.front);

        self.front = self
            .front
            .checked_add(1)
            .expect("guarded by front < back above");

        // SAFETY: The slot was in `[front, back)` so it is initialized, and it is no longer
        // counted as remaining, so ownership moves to the caller exactly once.
        Some(unsafe { slot.read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .back
            .checked_sub(self.front)
            .expect("front never passes back");

        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back = self
            .back
            .checked_sub(1)
            .expect("guarded by front < back above");

        // SAFETY: The slot was in `[front, back)` so it is initialized, and it is no longer
        // counted as remaining, so ownership moves to the caller exactly once.
        Some(unsafe { self.buffer.slot(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let was_exhausted = self.front == self.back;

        let remaining = ptr::slice_from_raw_parts_mut(
            self.buffer.slot(self.front).as_ptr(),
            self.back.saturating_sub(self.front),
        );

        // SAFETY: The slots at `[front, back)` are initialized and have not been yielded.
        // The buffer itself is released when the field is dropped.
        unsafe {
            ptr::drop_in_place(remaining);
        }

        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                was_exhausted,
                "dropped a partially consumed IntoIter of {} with a policy that says its items must not be dropped",
                type_name::<T>()
            );
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("drop_policy", &self.drop_policy)
            .field("remaining", &self.as_slice())
            .finish()
    }
}

// SAFETY: The iterator exclusively owns the remaining items, so it is as thread-mobile as they are.
unsafe impl<T: Send> Send for IntoIter<T> {}

// SAFETY: Shared access only hands out shared references to the remaining items.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // The container is left empty, so dropping it releases nothing.
        let drop_policy = self.drop_policy();
        let (buffer, len) = self.take_buffer();

        IntoIter {
            buffer,
            drop_policy,
            front: 0,
            back: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(IntoIter<u32>: Send, Sync);

    #[test]
    fn yields_items_in_order() {
        let items = SimpleVec::from(["a".to_string(), "b".to_string(), "c".to_string()]);

        let collected: Vec<String> = items.into_iter().collect();

        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn double_ended() {
        let mut iter = SimpleVec::from([1, 2, 3, 4]).into_iter();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn empty_container_yields_nothing() {
        let mut iter = SimpleVec::<String>::new().into_iter();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn partially_consumed_drops_rest() {
        struct Counted(Rc<Cell<usize>>);

        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let items: SimpleVec<Counted> = (0..5).map(|_| Counted(Rc::clone(&drops))).collect();

        let mut iter = items.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);

        drop(iter);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    #[should_panic]
    fn partially_consumed_with_must_not_drop_policy_panics() {
        let mut items = SimpleVec::<u32>::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();
        items.push_back(1);
        items.push_back(2);

        let mut iter = items.into_iter();
        assert_eq!(iter.next(), Some(1));

        drop(iter);
    }

    #[test]
    fn exhausted_with_must_not_drop_policy_is_fine() {
        let mut items = SimpleVec::<u32>::builder()
            .drop_policy(DropPolicy::MustNotDropItems)
            .build();
        items.push_back(1);
        items.push_back(2);

        let collected: Vec<u32> = items.into();

        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn by_reference_iteration() {
        let mut items = SimpleVec::from([1, 2, 3]);

        for item in &mut items {
            *item *= 10;
        }

        let mut sum = 0;
        for item in &items {
            sum += *item;
        }

        assert_eq!(sum, 60);
    }

    #[test]
    fn debug_shows_remaining() {
        let mut iter = SimpleVec::from([1, 2]).into_iter();
        _ = iter.next();

        let output = format!("{iter:?}");

        assert!(output.contains("remaining: [2]"));
    }
}
