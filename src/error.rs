//! Error types for growvec.

use thiserror::Error;

/// The index passed to a checked accessor was not less than the length.
///
/// This is the only recoverable error in the crate, returned by
/// [`GrowVec::at`](crate::GrowVec::at) and
/// [`GrowVec::at_mut`](crate::GrowVec::at_mut). Every other misuse of the API
/// (out-of-bounds `insert`/`remove`, unchecked indexing) is a programmer error
/// and panics or is `unsafe` instead.
///
/// # Examples
///
/// ```
/// use growvec::{GrowVec, OutOfRange, growvec};
///
/// let vec: GrowVec<i32> = growvec![1, 2, 3];
/// assert_eq!(vec.at(5), Err(OutOfRange { index: 5, len: 3 }));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index out of range: index is {index} but length is {len}")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the container at the time of the call.
    pub len: usize,
}
