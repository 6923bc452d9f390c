use std::alloc::{Layout, handle_alloc_error};

use thiserror::Error;

/// Errors that can occur when accessing or growing a [`SimpleVec`][crate::SimpleVec].
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The caller asked for an element at an index that is not less than the current length.
    ///
    /// The container is not modified when this error is returned.
    #[error("index {index} is out of range for a container of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,

        /// The length of the container at the time of the request.
        len: usize,
    },

    /// The requested capacity cannot be expressed as a memory layout for the element type,
    /// or the growth arithmetic that would produce it overflowed.
    #[error("capacity of {requested} items exceeds the maximum supported allocation size")]
    CapacityOverflow {
        /// The capacity that was requested, or `usize::MAX` if growth arithmetic overflowed.
        requested: usize,
    },

    /// The memory allocator was unable to provide storage of the requested capacity.
    ///
    /// The container is left exactly as it was before the failing operation.
    #[error("failed to allocate storage for {capacity} items")]
    AllocationFailed {
        /// The capacity that the failed allocation was for.
        capacity: usize,
    },
}

/// A specialized `Result` type for `simple_vec` operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Converts a growth failure into the behavior expected from infallible APIs: allocation
    /// failure is routed to the global allocation error handler, anything else panics.
    #[cfg_attr(test, mutants::skip)] // Diverges either way, no observable mutation.
    pub(crate) fn into_panic<T>(self) -> ! {
        match self {
            Self::AllocationFailed { capacity } => handle_alloc_error(
                Layout::array::<T>(capacity)
                    .expect("layout was calculable when the allocation was attempted"),
            ),
            other => panic!("{other}"),
        }
    }
}
