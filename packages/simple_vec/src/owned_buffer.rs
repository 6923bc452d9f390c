use std::alloc::{Layout, alloc, dealloc};
use std::any::type_name;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::{fmt, mem};

use tracing::debug;

use crate::{Error, Result};

/// Exclusive owner of a single contiguous heap allocation with room for `capacity` items of `T`.
///
/// The buffer is raw storage: it never constructs or drops items, it only acquires and releases
/// the memory. Whoever holds the buffer is responsible for tracking which slots contain
/// initialized items and for dropping them before the buffer goes away.
///
/// A buffer with zero capacity (and any buffer of a zero-sized `T`) performs no allocation. Its
/// pointer is dangling but non-null and well-aligned, so the pointer is never null regardless of
/// capacity. Use [`capacity()`][1] to determine whether there is any storage.
///
/// Only one `OwnedBuffer` ever points at a given allocation - the type is neither `Clone` nor
/// `Copy`. The allocation is released exactly once, when the buffer is dropped, unless ownership
/// was first transferred out via [`release()`][2].
///
/// # Examples
///
/// ```
/// use simple_vec::OwnedBuffer;
///
/// let mut buffer = OwnedBuffer::<u32>::new(4);
/// assert_eq!(buffer.capacity(), 4);
///
/// // SAFETY: The buffer has room for 4 items, so the first slot is valid for writes.
/// unsafe {
///     buffer.as_mut_ptr().write(42);
/// }
///
/// // SAFETY: We initialized the first slot above.
/// let value = unsafe { buffer.as_ptr().read() };
/// assert_eq!(value, 42);
/// ```
///
/// [1]: Self::capacity
/// [2]: Self::release
pub struct OwnedBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,

    _items: PhantomData<T>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer that owns no storage.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _items: PhantomData,
        }
    }

    /// Acquires storage for exactly `capacity` items. A capacity of zero allocates nothing.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds the maximum allocation size for `T`. If the allocator
    /// fails, the global allocation error handler is invoked.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|error| error.into_panic::<T>())
    }

    /// Acquires storage for exactly `capacity` items, reporting failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if the capacity exceeds the maximum allocation size
    /// for `T` and [`Error::AllocationFailed`] if the allocator is unable to provide the memory.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let layout = Self::layout(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _items: PhantomData,
            });
        }

        // SAFETY: The layout is valid for the item type (calculated by `Layout::array`) and is
        // not zero-sized (guarded above).
        let ptr = unsafe { alloc(layout) };

        let ptr = NonNull::new(ptr.cast::<T>()).ok_or(Error::AllocationFailed { capacity })?;

        Ok(Self {
            ptr,
            capacity,
            _items: PhantomData,
        })
    }

    /// Takes ownership of an allocation previously released via [`release()`][1].
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `ptr` and `capacity` are exactly the pair that was
    /// returned by an earlier [`release()`][1] of an `OwnedBuffer<T>`, and that no other
    /// `OwnedBuffer` has since adopted the same allocation.
    ///
    /// [1]: Self::release
    #[must_use]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        debug!(
            item_type = type_name::<T>(),
            capacity, "adopting released buffer"
        );

        Self {
            ptr,
            capacity,
            _items: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity)
            .ok()
            .ok_or(Error::CapacityOverflow {
                requested: capacity,
            })
    }

    /// The number of item slots this buffer has storage for.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer has no item slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Pointer to the first item slot. Never null, even for an empty buffer.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first item slot. Never null, even for an empty buffer.
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to the slot at `index`. One-past-the-end (`index == capacity`) is permitted,
    /// though such a pointer must never be read from or written to.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the capacity.
    #[must_use]
    pub(crate) fn slot(&self, index: usize) -> NonNull<T> {
        assert!(
            index <= self.capacity,
            "slot {index} out of bounds in buffer of {} with capacity {}",
            type_name::<T>(),
            self.capacity
        );

        // SAFETY: Guarded by the bounds check above, so the offset stays within the allocation
        // (or one past its end). For zero-sized items the offset is zero bytes.
        unsafe { self.ptr.add(index) }
    }

    /// Transfers ownership of the allocation to the caller, leaving this buffer empty.
    ///
    /// The caller becomes responsible for eventually returning the allocation to an
    /// `OwnedBuffer` via [`from_raw_parts()`][1] so it can be released; otherwise it leaks.
    ///
    /// [1]: Self::from_raw_parts
    #[must_use = "the released allocation leaks unless re-adopted via from_raw_parts()"]
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let ptr = mem::replace(&mut self.ptr, NonNull::dangling());
        let capacity = mem::take(&mut self.capacity);

        debug!(
            item_type = type_name::<T>(),
            capacity, "releasing buffer ownership"
        );

        (ptr, capacity)
    }

    /// Exchanges the allocations owned by two buffers. Constant time; no items are touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        let layout =
            Self::layout(self.capacity).expect("layout was calculable when the buffer was created");

        if layout.size() == 0 {
            return;
        }

        // SAFETY: The layout must match between alloc and dealloc. It does, since capacity is
        // only ever set together with the pointer it was allocated for.
        unsafe {
            dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

// SAFETY: The buffer is the exclusive owner of its allocation, so it is as thread-mobile as the
// items that may be stored in it.
unsafe impl<T: Send> Send for OwnedBuffer<T> {}

// SAFETY: Shared access only exposes const pointers, so sharing is fine as long as T is Sync.
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}
