#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A growable contiguous array built on an exclusively owned heap buffer.
//!
//! This package provides two types:
//!
//! * [`SimpleVec<T>`] - a resizable, index-addressable sequence of items with a documented
//!   growth policy, bounds-checked and unchecked access, positional insertion/removal and
//!   value semantics (deep [`Clone`], constant-time [`swap()`][SimpleVec::swap]).
//! * [`OwnedBuffer<T>`] - the exclusive owner of a single raw heap allocation that the
//!   container is built on. All allocation and deallocation happens here; the container never
//!   calls the allocator directly.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Growth policy
//!
//! Adding an item to a full container grows the buffer to `2 * len + 1` slots, so pushing items
//! into an empty container reallocates at lengths 0, 1, 3, 7, 15 and so on. Growth always
//! acquires the new buffer first: if the allocation fails, the container is left exactly as it
//! was. Fallible `try_*` variants report such failures as [`Error`] values; the infallible
//! variants panic on capacity overflow and invoke the global allocation error handler on
//! allocation failure.
//!
//! # Example
//!
//! ```
//! use simple_vec::{SimpleVec, simple_vec};
//!
//! let mut items = simple_vec![1, 2, 3];
//! assert_eq!(items.len(), 3);
//! assert_eq!(items.capacity(), 3);
//!
//! items.push_back(4);
//! assert_eq!(items.capacity(), 7);
//!
//! let index = items.insert(0, 0);
//! assert_eq!(items[index], 0);
//!
//! items.erase(2);
//! assert_eq!(items, [0, 1, 3, 4]);
//!
//! // Bounds-checked access reports errors instead of panicking.
//! assert!(items.at(10).is_err());
//! ```
//!
//! # Logging
//!
//! Reallocations are reported as `tracing` events at the `TRACE` level. Transfer of raw buffer
//! ownership is reported at the `DEBUG` level. The package does not install a subscriber.

mod builder;
mod cmp;
mod drop_policy;
mod error;
mod iter;
mod owned_buffer;
mod reserve;
mod simple_vec;

pub use builder::*;
pub use drop_policy::*;
pub use error::Error;
pub(crate) use error::Result;
pub use iter::IntoIter;
pub use owned_buffer::OwnedBuffer;
pub use reserve::*;
pub use simple_vec::SimpleVec;

/// Creates a [`SimpleVec`] from a list of items or from an item and a count.
///
/// The capacity of the resulting container equals its length.
///
/// # Examples
///
/// ```
/// use simple_vec::simple_vec;
///
/// let items = simple_vec![1, 2, 3];
/// assert_eq!(items, [1, 2, 3]);
///
/// let repeated = simple_vec!["x".to_string(); 2];
/// assert_eq!(repeated, ["x", "x"]);
///
/// let empty = simple_vec![];
/// # let _: &simple_vec::SimpleVec<u8> = &empty;
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };
    ($value:expr; $len:expr) => {
        $crate::SimpleVec::filled($len, &$value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($item),+])
    };
}
