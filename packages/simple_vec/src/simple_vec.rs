use std::any::type_name;
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};
use std::slice::{self, SliceIndex};
use std::{fmt, mem, ptr, thread};

use tracing::trace;

use crate::{DropPolicy, Error, OwnedBuffer, Result, SimpleVecBuilder};

/// A growable, index-addressable sequence of items stored contiguously in a single heap buffer.
///
/// The container exclusively owns one [`OwnedBuffer`] at a time. Items at indexes `[0, len)` are
/// initialized; the remaining slots up to the capacity are allocated but hold no items.
///
/// # Growth
///
/// When an item is added to a full container, the buffer is reallocated to `2 * len + 1` slots
/// (so an empty container grows to 1, then 3, 7, 15 and so on), giving amortized constant time
/// per added item. [`resize()`][1] grows to at least twice the current length and
/// [`reserve()`][2] grows to exactly the requested capacity. The capacity never shrinks on its
/// own.
///
/// Every reallocation acquires the new buffer before touching the existing items. If the
/// allocation fails (observable via the `try_*` methods), the container is left exactly as it
/// was.
///
/// # Positions and invalidation
///
/// Items are addressed by index. Raw positions are available via [`as_ptr_range()`][3] and
/// friends. Any operation that reallocates (adding to a full container, resizing or reserving
/// beyond the capacity) invalidates all previously obtained raw positions. Operations that do not
/// reallocate keep the buffer in place, though the items at a given position may shift.
///
/// # Examples
///
/// ```
/// use simple_vec::SimpleVec;
///
/// let mut items = SimpleVec::from([1, 2, 3]);
/// assert_eq!(items.capacity(), 3);
///
/// items.push_back(4);
/// assert_eq!(items.capacity(), 7);
///
/// items.erase(1);
/// assert_eq!(items, [1, 3, 4]);
/// ```
///
/// [1]: Self::resize
/// [2]: Self::reserve
/// [3]: Self::as_ptr_range
pub struct SimpleVec<T> {
    buffer: OwnedBuffer<T>,

    /// Number of initialized items at the start of the buffer.
    len: usize,

    drop_policy: DropPolicy,
}

impl<T> SimpleVec<T> {
    /// Creates an empty container. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: OwnedBuffer::empty(),
            len: 0,
            drop_policy: DropPolicy::MayDropItems,
        }
    }

    /// Creates a builder for a container with a custom configuration.
    pub fn builder() -> SimpleVecBuilder<T> {
        SimpleVecBuilder::new()
    }

    pub(crate) fn from_parts(buffer: OwnedBuffer<T>, drop_policy: DropPolicy) -> Self {
        Self {
            buffer,
            len: 0,
            drop_policy,
        }
    }

    /// Creates an empty container with room for exactly `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds the maximum allocation size for `T`. If the allocator
    /// fails, the global allocation error handler is invoked.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(OwnedBuffer::new(capacity), DropPolicy::default())
    }

    /// Creates an empty container with room for exactly `capacity` items, reporting
    /// allocation failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailed`] if the storage
    /// cannot be acquired.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self::from_parts(
            OwnedBuffer::try_new(capacity)?,
            DropPolicy::default(),
        ))
    }

    /// Creates a container of `len` default-valued items, with capacity `len`.
    ///
    /// A length of zero creates an empty container that does not allocate.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Self::with_capacity(len);
        items.extend_with(len, T::default);
        items
    }

    /// Creates a container of `len` clones of `value`, with capacity `len`.
    #[must_use]
    pub fn filled(len: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut items = Self::with_capacity(len);
        items.extend_with(len, || value.clone());
        items
    }

    /// The number of items in the container.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of items the container can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the container holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The drop policy the container was created with.
    #[must_use]
    pub fn drop_policy(&self) -> DropPolicy {
        self.drop_policy
    }

    /// The items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The buffer pointer is non-null and aligned even when empty, and the first
        // `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// The items as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The buffer pointer is non-null and aligned even when empty, the first `len`
        // slots are initialized and we hold an exclusive reference to the container.
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    /// Pointer to the first item (the beginning of the contiguous range of items).
    ///
    /// For an empty container this is a dangling, non-null pointer. Do not use it to detect
    /// emptiness - use [`is_empty()`][Self::is_empty] for that.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Mutable pointer to the first item.
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr()
    }

    /// The half-open range of raw positions `[begin, end)` spanning the items.
    ///
    /// The positions are invalidated by any operation that reallocates the buffer.
    #[must_use]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// The half-open range of mutable raw positions `[begin, end)` spanning the items.
    #[must_use]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// Iterates over shared references to the items, in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over exclusive references to the items, in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// The item at `index`, or `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The item at `index` for modification, or `None` if the index is out of range.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The item at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index < self.len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: Forwarding the caller's guarantee.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// The item at `index` for modification, without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `index < self.len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: Forwarding the caller's guarantee.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// The item at `index`, with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than the length.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// The item at `index` for modification, with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` is not less than the length.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Removes all items. The capacity and the buffer are retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shortens the container to `len` items, dropping the rest. Has no effect if `len` is not
    /// less than the current length. The capacity is retained.
    pub fn truncate(&mut self, len: usize) {
        let Some(tail_len) = self.len.checked_sub(len).filter(|tail_len| *tail_len > 0) else {
            return;
        };

        let tail = ptr::slice_from_raw_parts_mut(self.buffer.slot(len).as_ptr(), tail_len);

        // The items are no longer considered live even if one of them panics when dropped.
        self.len = len;

        // SAFETY: The tail slots were initialized and are no longer counted as live,
        // so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(tail);
        }
    }

    /// Changes the length to `new_len`.
    ///
    /// If `new_len` is less than the current length, the excess items are dropped. Otherwise the
    /// new slots receive `T::default()`. If `new_len` exceeds the capacity, the buffer is
    /// reallocated to `max(new_len, 2 * len)` slots first.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds the maximum allocation size for `T`. If the
    /// allocator fails, the global allocation error handler is invoked.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.try_resize(new_len)
            .unwrap_or_else(|error| error.into_panic::<T>());
    }

    /// Changes the length to `new_len`, reporting allocation failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailed`] if more storage is
    /// needed and cannot be acquired. The container is unchanged in that case.
    pub fn try_resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        if new_len > self.capacity() {
            let doubled = self.len.checked_mul(2).ok_or(Error::CapacityOverflow {
                requested: usize::MAX,
            })?;

            self.reallocate(new_len.max(doubled))?;
        }

        self.extend_with(new_len, T::default);
        Ok(())
    }

    /// Ensures the capacity is at least `new_capacity`, reallocating to exactly that capacity
    /// if it is currently smaller. The length is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds the maximum allocation size for `T`. If the allocator
    /// fails, the global allocation error handler is invoked.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.try_reserve(new_capacity)
            .unwrap_or_else(|error| error.into_panic::<T>());
    }

    /// Ensures the capacity is at least `new_capacity`, reporting allocation failure instead
    /// of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailed`] if the storage
    /// cannot be acquired. The container is unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(new_capacity)
    }

    /// Appends an item to the end, growing the buffer to `2 * len + 1` slots if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds the maximum allocation size for `T`. If the
    /// allocator fails, the global allocation error handler is invoked.
    pub fn push_back(&mut self, value: T) {
        _ = self.insert(self.len, value);
    }

    /// Appends an item to the end, reporting allocation failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailed`] if the buffer is
    /// full and cannot grow. The container is unchanged and `value` is dropped in that case.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.try_insert(self.len, value).map(|_| ())
    }

    /// Removes the last item and returns it, or returns `None` if the container is empty.
    /// The capacity is retained.
    pub fn pop_back(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;

        // SAFETY: The slot at the old last index was initialized and is no longer counted as
        // live, so ownership moves to the caller exactly once.
        Some(unsafe { self.buffer.slot(self.len).read() })
    }

    /// Inserts an item at `index`, shifting all items after it one slot to the right.
    ///
    /// If the container is full, the buffer first grows to `2 * len + 1` slots. Returns the
    /// index of the inserted item, which is always `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if the required capacity exceeds the maximum allocation
    /// size for `T`. If the allocator fails, the global allocation error handler is invoked.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value)
            .unwrap_or_else(|error| error.into_panic::<T>())
    }

    /// Inserts an item at `index`, reporting allocation failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocationFailed`] if the buffer is
    /// full and cannot grow. The container is unchanged and `value` is dropped in that case.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize> {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds for length {} in SimpleVec of {}",
            self.len,
            type_name::<T>()
        );

        let tail_len = self
            .len
            .checked_sub(index)
            .expect("guarded by bounds assertion above");
        let after_index = index
            .checked_add(1)
            .expect("index is bounded by len which is bounded by capacity");

        if self.len == self.capacity() {
            let mut new_buffer = OwnedBuffer::try_new(grown_capacity(self.len)?)?;

            // SAFETY: The prefix slots are initialized in the old buffer and the new buffer has
            // room for `len + 1` items. The buffers are distinct allocations.
            unsafe {
                ptr::copy_nonoverlapping(
                    self.buffer.as_ptr(),
                    new_buffer.as_mut_ptr(),
                    index,
                );
            }

            // SAFETY: `index <= len < new capacity`, so the slot is valid for writes.
            unsafe {
                new_buffer.slot(index).write(value);
            }

            // SAFETY: The suffix slots are initialized in the old buffer and land at
            // `[index + 1, len + 1)`, which is within the new capacity.
            unsafe {
                ptr::copy_nonoverlapping(
                    self.buffer.slot(index).as_ptr(),
                    new_buffer.slot(after_index).as_ptr(),
                    tail_len,
                );
            }

            self.adopt(new_buffer);
        } else {
            let slot = self.buffer.slot(index);

            // SAFETY: `len < capacity`, so shifting `[index, len)` one slot right stays within
            // the buffer. The ranges may overlap, which `ptr::copy` permits.
            unsafe {
                ptr::copy(
                    slot.as_ptr(),
                    self.buffer.slot(after_index).as_ptr(),
                    tail_len,
                );
            }

            // SAFETY: The item previously in this slot was moved one slot right above, so we
            // overwrite without dropping.
            unsafe {
                slot.write(value);
            }
        }

        self.len = self
            .len
            .checked_add(1)
            .expect("len is bounded by capacity which is bounded by isize::MAX");

        Ok(index)
    }

    /// Removes the item at `index`, shifting all items after it one slot to the left.
    ///
    /// Returns the index that now holds the item that followed the removed one, which is
    /// always `index` (equal to the new length if the last item was removed). The capacity is
    /// retained.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index {index} out of bounds for length {} in SimpleVec of {}",
            self.len,
            type_name::<T>()
        );

        let slot = self.buffer.slot(index);
        let after_index = index
            .checked_add(1)
            .expect("guarded by bounds assertion above");
        let tail_len = self
            .len
            .checked_sub(after_index)
            .expect("guarded by bounds assertion above");

        // SAFETY: `index < len`, so the slot is initialized. The slot is overwritten by the
        // shift below, so the item is owned exactly once.
        let erased = unsafe { slot.read() };

        // SAFETY: Both ranges lie within `[0, len)`. They overlap, which `ptr::copy` permits.
        unsafe {
            ptr::copy(
                self.buffer.slot(after_index).as_ptr(),
                slot.as_ptr(),
                tail_len,
            );
        }

        self.len = self
            .len
            .checked_sub(1)
            .expect("guarded by bounds assertion above");

        // Dropped last so a panicking destructor leaves the container consistent.
        drop(erased);

        index
    }

    /// Exchanges the contents of two containers in constant time. No items are moved.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Appends clones of all `items` to the end.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds the maximum allocation size for `T`. If the
    /// allocator fails, the global allocation error handler is invoked.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.reserve_for_additional(items.len());

        for item in items {
            self.push_within_capacity(item.clone());
        }
    }

    /// Makes room for `additional` more items.
    ///
    /// If the buffer is too small, it grows to at least `2 * len + 1` slots, as with
    /// `push_back()`.
    fn reserve_for_additional(&mut self, additional: usize) {
        let required = self.len.checked_add(additional).unwrap_or_else(|| {
            Error::CapacityOverflow {
                requested: usize::MAX,
            }
            .into_panic::<T>()
        });

        if required <= self.capacity() {
            return;
        }

        let grown = grown_capacity(self.len).unwrap_or_else(|error| error.into_panic::<T>());
        self.reserve(required.max(grown));
    }

    /// Writes items produced by `f` into the free slots until the length reaches `new_len`.
    ///
    /// The length is bumped after every item, so a panic in `f` leaves the container valid.
    fn extend_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        while self.len < new_len {
            let value = f();
            self.push_within_capacity(value);
        }
    }

    fn push_within_capacity(&mut self, value: T) {
        assert!(
            self.len < self.capacity(),
            "no free slot for item in SimpleVec of {} (len {}, capacity {})",
            type_name::<T>(),
            self.len,
            self.capacity()
        );

        // SAFETY: Guarded by the capacity assertion above; the slot holds no live item.
        unsafe {
            self.buffer.slot(self.len).write(value);
        }

        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by capacity assertion above");
    }

    /// Moves the items into a new buffer of exactly `new_capacity` slots.
    ///
    /// The new buffer is acquired before anything else happens, so on failure the container
    /// is unchanged.
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.len);

        let mut new_buffer = OwnedBuffer::try_new(new_capacity)?;

        // SAFETY: The first `len` slots are initialized, the new buffer has room for at least
        // `len` items and the buffers are distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), new_buffer.as_mut_ptr(), self.len);
        }

        self.adopt(new_buffer);
        Ok(())
    }

    /// Replaces the buffer with one the items have already been moved into. The old buffer is
    /// released without dropping anything, as its items now live in the new one.
    fn adopt(&mut self, new_buffer: OwnedBuffer<T>) {
        trace!(
            item_type = type_name::<T>(),
            len = self.len,
            old_capacity = self.buffer.capacity(),
            new_capacity = new_buffer.capacity(),
            "reallocated buffer"
        );

        self.buffer = new_buffer;
    }

    pub(crate) fn take_buffer(&mut self) -> (OwnedBuffer<T>, usize) {
        (mem::take(&mut self.buffer), mem::take(&mut self.len))
    }
}

/// Capacity to grow to when a single item is added to a full container of length `len`.
fn grown_capacity(len: usize) -> Result<usize> {
    len.checked_mul(2)
        .and_then(|doubled| doubled.checked_add(1))
        .ok_or(Error::CapacityOverflow {
            requested: usize::MAX,
        })
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        let was_empty = self.is_empty();

        // SAFETY: The first `len` slots are initialized and nothing touches them after this.
        // The buffer itself is released when the field is dropped.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }

        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                was_empty,
                "dropped a non-empty SimpleVec of {} with a policy that says it must be empty when dropped",
                type_name::<T>()
            );
        }
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::from_parts(OwnedBuffer::new(self.len), self.drop_policy);
        copy.extend_from_slice(self.as_slice());
        copy
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// The copy is built separately and then swapped in, so if cloning an item panics
    /// the container is left untouched. The drop policy of `self` is retained. The replaced
    /// items are dropped as part of the assignment, like with [`clear()`][Self::clear], even
    /// under [`DropPolicy::MustNotDropItems`].
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        copy.drop_policy = self.drop_policy;
        self.swap(&mut copy);

        // Now holds the replaced items.
        copy.drop_policy = DropPolicy::MayDropItems;
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(value: [T; N]) -> Self {
        let mut items = Self::with_capacity(N);

        for item in value {
            items.push_within_capacity(item);
        }

        items
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(value: &[T]) -> Self {
        let mut items = Self::with_capacity(value.len());
        items.extend_from_slice(value);
        items
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> {
    fn from(value: Vec<T>) -> Self {
        let mut items = Self::with_capacity(value.len());

        for item in value {
            items.push_within_capacity(item);
        }

        items
    }
}

impl<T> From<SimpleVec<T>> for Vec<T> {
    fn from(value: SimpleVec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = Self::new();
        items.extend(iter);
        items
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower_bound, _) = iter.size_hint();

        self.reserve_for_additional(lower_bound);

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

// SAFETY: The container exclusively owns its items, so it is as thread-mobile as they are.
unsafe impl<T: Send> Send for SimpleVec<T> {}

// SAFETY: Shared access only hands out shared references to the items.
unsafe impl<T: Sync> Sync for SimpleVec<T> {}
