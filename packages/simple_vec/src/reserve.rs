use crate::SimpleVec;

/// A request for an empty [`SimpleVec`] with a specific capacity, created by [`reserve()`].
///
/// # Examples
///
/// ```
/// use simple_vec::{SimpleVec, reserve};
///
/// let items: SimpleVec<String> = reserve(16).into();
///
/// assert!(items.is_empty());
/// assert_eq!(items.capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReserveCapacity {
    capacity: usize,
}

impl ReserveCapacity {
    /// The capacity the resulting container will be created with.
    #[must_use]
    pub fn capacity(self) -> usize {
        self.capacity
    }
}

/// Requests an empty [`SimpleVec`] with room for exactly `capacity` items.
///
/// Convert the returned value into a container via [`From`]/[`Into`].
#[must_use]
pub fn reserve(capacity: usize) -> ReserveCapacity {
    ReserveCapacity { capacity }
}

impl<T> From<ReserveCapacity> for SimpleVec<T> {
    fn from(value: ReserveCapacity) -> Self {
        Self::with_capacity(value.capacity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn reserve_creates_empty_with_exact_capacity() {
        let items = SimpleVec::<u64>::from(reserve(5));

        assert_eq!(items.len(), 0);
        assert_eq!(items.capacity(), 5);
    }

    #[test]
    fn reserve_zero_allocates_nothing() {
        let items = SimpleVec::<u64>::from(reserve(0));

        assert!(items.is_empty());
        assert_eq!(items.capacity(), 0);
    }

    #[test]
    fn reserved_capacity_is_used_before_growth() {
        let mut items = SimpleVec::<u64>::from(reserve(3));
        let ptr = items.as_ptr();

        items.push_back(1);
        items.push_back(2);
        items.push_back(3);

        assert_eq!(items.capacity(), 3);
        assert_eq!(items.as_ptr(), ptr);
    }

    #[test]
    fn capacity_accessor() {
        assert_eq!(reserve(42).capacity(), 42);
    }
}
