use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::{DropPolicy, OwnedBuffer, Result, SimpleVec};

/// Builder for creating an instance of [`SimpleVec`].
///
/// You only need to use this builder if you want to customize the container configuration.
/// [`SimpleVec::new()`][1] and [`SimpleVec::with_capacity()`][2] are sufficient for most use
/// cases.
///
/// # Examples
///
/// ```
/// use simple_vec::{DropPolicy, SimpleVec};
///
/// let items = SimpleVec::<u32>::builder()
///     .capacity(10)
///     .drop_policy(DropPolicy::MayDropItems)
///     .build();
///
/// assert_eq!(items.capacity(), 10);
/// ```
///
/// [1]: SimpleVec::new
/// [2]: SimpleVec::with_capacity
#[must_use]
pub struct SimpleVecBuilder<T> {
    capacity: usize,
    drop_policy: DropPolicy,

    _item: PhantomData<T>,
}

impl<T> fmt::Debug for SimpleVecBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVecBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &self.capacity)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}

impl<T> SimpleVecBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            drop_policy: DropPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the initial capacity of the container. Zero (the default) allocates nothing.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the container. This governs how
    /// to treat remaining items in the container when the container is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vec::{DropPolicy, SimpleVec};
    ///
    /// let items = SimpleVec::<u32>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the container with the specified configuration.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds the maximum allocation size for `T`. If the allocator
    /// fails, the global allocation error handler is invoked.
    #[must_use]
    pub fn build(self) -> SimpleVec<T> {
        SimpleVec::from_parts(OwnedBuffer::new(self.capacity), self.drop_policy)
    }

    /// Builds the container with the specified configuration, reporting allocation failure
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`][crate::Error::CapacityOverflow] if the capacity
    /// exceeds the maximum allocation size for `T` and
    /// [`Error::AllocationFailed`][crate::Error::AllocationFailed] if the allocator is unable
    /// to provide the memory.
    pub fn try_build(self) -> Result<SimpleVec<T>> {
        Ok(SimpleVec::from_parts(
            OwnedBuffer::try_new(self.capacity)?,
            self.drop_policy,
        ))
    }
}
