//! ## Intro
//!
//! A growable sequence container with explicit, never-shrinking capacity
//! control.
//!
//! [`GrowVec`] mirrors the familiar [`Vec`] surface (push, pop, insert,
//! remove, resize, iteration, comparisons) while keeping its capacity policy
//! simple and fully observable:
//!
//! - **Doubling growth**: a full vector doubles its capacity on `push` and
//!   `insert` (capacity 0 becomes 1). `resize` grows to
//!   `max(new_len, capacity * 2)`.
//! - **Exact reservation**: [`GrowVec::reserve`] allocates precisely the
//!   requested number of slots, and a request at or below the current
//!   capacity is guaranteed not to relocate anything.
//! - **Never shrinking**: no operation releases capacity short of dropping
//!   or swapping the vector itself.
//! - **Swap-committed growth**: every reallocation fully populates a fresh
//!   buffer before swapping it in, so a partially-grown vector is never
//!   observable and every allocation is released exactly once.
//!
//! ```
//! use growvec::{GrowVec, growvec};
//!
//! let mut vec: GrowVec<i32> = growvec![10, 20, 30];
//! assert_eq!(vec.capacity(), 3);
//!
//! vec.push(40);
//! assert_eq!(vec, [10, 20, 30, 40]);
//! assert_eq!(vec.capacity(), 6);
//!
//! vec.resize(2);
//! assert_eq!(vec, [10, 20]);
//! assert_eq!(vec.capacity(), 6); // capacity never shrinks
//! ```
//!
//! ## Storage model
//!
//! Elements live in an [`ArrayBuf`]: a single exclusively-owned heap
//! allocation of exactly `capacity` default-initialized slots. The vector's
//! length says how many of those slots are logically present; the rest are
//! slack, unreachable through the public API. Allocating paths therefore
//! require `T: Default`, and growth relocates elements by move, never by
//! clone.
//!
//! ## Reserved construction
//!
//! A sized constructor fills what it allocates. To allocate capacity while
//! keeping the length at zero, convert a [`CapacityRequest`] made by
//! [`reserve`]:
//!
//! ```
//! use growvec::{GrowVec, reserve};
//!
//! let vec: GrowVec<u64> = reserve(32).into();
//! assert_eq!((vec.len(), vec.capacity()), (0, 32));
//! ```
//!
//! ## Checked access
//!
//! Misusing a positional operation (`insert`/`remove` out of bounds, slice
//! indexing past the length) is a programmer error and panics. The one
//! recoverable error in the crate is checked access: [`GrowVec::at`] and
//! [`GrowVec::at_mut`] return [`OutOfRange`] instead.
//!
//! ## `no_std` support
//!
//! The crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! Implements [`serde::Serialize`] and [`serde::Deserialize`] for
//! [`GrowVec`], encoding it as a plain sequence.
//!
//! ### `std`
//!
//! Implements [`std::io::Write`] for `GrowVec<u8>`; writes append and grow.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`Vec`]: alloc::vec::Vec
#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod utils;

pub mod array_buf;
pub mod error;
pub mod grow_vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

#[doc(inline)]
pub use array_buf::ArrayBuf;
#[doc(inline)]
pub use error::OutOfRange;
#[doc(inline)]
pub use grow_vec::{CapacityRequest, GrowVec, reserve};
