use alloc::{boxed::Box, vec::Vec};
use core::mem;

use crate::array_buf::ArrayBuf;
use crate::error::OutOfRange;
use crate::utils::{cold_path, impl_common_traits};

/// A growable sequence container with explicit, never-shrinking capacity.
///
/// `GrowVec` stores its elements contiguously in a single heap allocation
/// owned by an [`ArrayBuf`], tracking separately how many slots are allocated
/// (the *capacity*) and how many are logically in use (the *length*). Capacity
/// only ever grows: `push` doubles it when full (starting at 1), `resize`
/// grows to at least double, and [`reserve`](GrowVec::reserve) jumps to an
/// exact target. Nothing ever shrinks an allocation.
///
/// Every growth path follows the same discipline: populate a fresh buffer
/// completely, swap it in, and let the old allocation die with the temporary.
/// A `GrowVec` is therefore never observable in a partially-grown state.
///
/// Allocating requires `T: Default`, because fresh slots are
/// default-initialized; operations that cannot allocate carry no bounds.
///
/// # Quick start
///
/// ```
/// use growvec::{GrowVec, growvec};
///
/// let mut vec: GrowVec<i32> = growvec![10, 20, 30];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 3);
///
/// vec.push(40);
/// assert_eq!(vec, [10, 20, 30, 40]);
/// assert_eq!(vec.capacity(), 6); // doubled, not grown by one
///
/// vec.remove(1);
/// assert_eq!(vec, [10, 30, 40]);
/// ```
///
/// # Checked and unchecked access
///
/// Indexing follows the usual slice rules (panics when out of bounds, via
/// `Index`/`IndexMut`). Two more access paths exist for the ends of the
/// spectrum:
///
/// - [`at`](GrowVec::at) / [`at_mut`](GrowVec::at_mut) return
///   `Err(`[`OutOfRange`]`)` instead of panicking, for callers that treat a bad
///   index as a recoverable condition.
/// - [`get_unchecked`](GrowVec::get_unchecked) /
///   [`get_unchecked_mut`](GrowVec::get_unchecked_mut) skip the bounds check
///   entirely and are `unsafe`.
///
/// ```
/// use growvec::{GrowVec, growvec};
///
/// let vec: GrowVec<i32> = growvec![1, 2, 3];
/// assert_eq!(vec.at(1), Ok(&2));
/// assert!(vec.at(3).is_err());
/// ```
///
/// # Positions are indices
///
/// Positional operations ([`insert`](GrowVec::insert),
/// [`remove`](GrowVec::remove)) take plain `usize` indices. Any operation that
/// grows the buffer or shifts elements invalidates the *meaning* of previously
/// computed indices, never memory safety.
pub struct GrowVec<T> {
    buf: ArrayBuf<T>,
    len: usize,
}

/// Creates a [`GrowVec`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
/// The resulting capacity equals the number of elements.
///
/// # Examples
///
/// ```
/// # use growvec::{growvec, GrowVec};
/// let vec: GrowVec<i32> = growvec![];
/// let vec: GrowVec<i64> = growvec![1; 5]; // needs `Clone`
/// let vec: GrowVec<_> = growvec![1, 2, 3, 4];
/// assert_eq!(vec.capacity(), 4);
/// ```
#[macro_export]
macro_rules! growvec {
    [] => { $crate::GrowVec::new() };
    [$elem:expr; $n:expr] => { $crate::GrowVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::GrowVec::from([ $($item),+ ]) };
}

impl<T> GrowVec<T> {
    /// Constructs a new, empty `GrowVec` with zero capacity.
    ///
    /// No heap allocation is performed until elements are added.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: ArrayBuf::empty(),
            len: 0,
        }
    }

    /// Builds a `GrowVec` from a vector, adopting its elements without copying
    /// them.
    ///
    /// The resulting capacity equals the vector's length, not its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let mut src = Vec::with_capacity(10);
    /// src.extend([1, 2, 3]);
    ///
    /// let vec = GrowVec::from_vec(src);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self {
            buf: ArrayBuf::from(vec),
            len,
        }
    }

    /// Returns the number of elements in the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let vec: GrowVec<_> = growvec![1, 2];
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::new();
    /// assert!(vec.is_empty());
    /// ```
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    ///
    /// The slots in `[len, capacity)` are allocated slack, unreachable through
    /// the public API until the vector grows into them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec: GrowVec<i32> = GrowVec::with_capacity(8);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Resets the length to zero, keeping the capacity.
    ///
    /// Elements are not dropped immediately; they are released when
    /// overwritten or when the vector's allocation is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![1, 2, 3];
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchanges the contents of two vectors in O(1).
    ///
    /// Only the owning pointers and lengths move; no element is copied.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut a: GrowVec<_> = growvec![1, 2];
    /// let mut b: GrowVec<_> = growvec![3, 4, 5];
    /// a.swap(&mut b);
    /// assert_eq!(a, [3, 4, 5]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a checked reference to the element at `index`.
    ///
    /// This is the recoverable counterpart of indexing: an out-of-range index
    /// yields [`OutOfRange`] instead of a panic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let vec: GrowVec<_> = growvec![10, 20, 30];
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert!(vec.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.as_slice().get(index).ok_or(OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns a checked mutable reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![10, 20, 30];
    /// *vec.at_mut(1).unwrap() = 21;
    /// assert_eq!(vec, [10, 21, 30]);
    /// ```
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index < len`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index should be < len");
        unsafe { self.buf.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    /// `index < len`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index should be < len");
        unsafe { self.buf.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Extracts a slice containing the logical range `[0, len)`.
    ///
    /// The slack slots beyond `len` are never part of the slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![1, 2, 3];
    /// vec.reserve(10);
    /// assert_eq!(vec.as_slice(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Extracts a mutable slice containing the logical range `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![1, 2, 3];
    /// vec.as_mut_slice()[0] = 9;
    /// assert_eq!(vec, [9, 2, 3]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Converts the vector into a [`Vec`], dropping the slack elements.
    ///
    /// The allocation is reused; live elements are not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let vec: GrowVec<_> = growvec![1, 2, 3];
    /// assert_eq!(vec.into_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        let len = self.len;
        let mut vec = self.buf.into_boxed_slice().into_vec();
        vec.truncate(len);
        vec
    }

    /// Converts the vector into a [`Box<[T]>`](Box) covering the logical
    /// range.
    ///
    /// Reallocates only when slack slots have to be cut off.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.into_vec().into_boxed_slice()
    }
}

impl<T: Default> GrowVec<T> {
    /// Constructs a vector of `n` default-valued elements, with
    /// `len == capacity == n`.
    ///
    /// When `n` is zero, no heap allocation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec: GrowVec<u8> = GrowVec::with_len(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3);
    ///
    /// let vec: GrowVec<u8> = GrowVec::with_len(0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub fn with_len(n: usize) -> Self {
        Self {
            buf: ArrayBuf::allocate(n),
            len: n,
        }
    }

    /// Constructs an empty vector with capacity for `n` elements.
    ///
    /// Shorthand for converting a [`reserve`](crate::reserve) request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec: GrowVec<u8> = GrowVec::with_capacity(6);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self::from(crate::reserve(n))
    }

    /// Grows the capacity to exactly `new_capacity` slots.
    ///
    /// A request at or below the current capacity is a no-op; elements are
    /// then guaranteed not to be relocated. Otherwise all `len` elements move
    /// into a fresh allocation of exactly `new_capacity` slots and the old
    /// allocation is released. The length never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![1, 2, 3];
    /// vec.reserve(10);
    /// assert_eq!(vec.capacity(), 10);
    ///
    /// vec.reserve(4); // below current capacity: nothing happens
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.regrow(new_capacity);
    }

    /// Resizes the vector to `new_len` elements.
    ///
    /// - Shrinking only moves the length; capacity and storage are untouched,
    ///   and the excluded elements become unreachable slack.
    /// - Growing within capacity assigns `T::default()` to the new slots.
    /// - Growing beyond capacity reallocates to
    ///   `max(new_len, capacity * 2)`. From capacity zero this degenerates to
    ///   exactly `new_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<i32> = GrowVec::new();
    /// vec.resize(3);
    /// assert_eq!(vec, [0, 0, 0]);
    /// assert_eq!(vec.capacity(), 3); // not doubled-from-zero
    ///
    /// vec.resize(4);
    /// assert_eq!(vec.capacity(), 6); // max(4, 3 * 2)
    ///
    /// vec.resize(1);
    /// assert_eq!(vec, [0]);
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.len {
            self.len = new_len;
            return;
        }
        if new_len > self.capacity() {
            // Fresh slots come out of the allocation already default-valued.
            self.regrow(new_len.max(self.capacity() * 2));
        } else {
            // Slack slots may hold stale values from earlier pops or shrinks.
            for slot in &mut self.buf.as_mut_slice()[self.len..new_len] {
                *slot = T::default();
            }
        }
        self.len = new_len;
    }

    /// Appends an element to the back of the vector.
    ///
    /// With spare capacity this writes in place. At capacity the vector
    /// doubles (a capacity of zero becomes 1), relocating all elements into
    /// the fresh allocation before the new one is written.
    ///
    /// # Time complexity
    /// Amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let mut vec: GrowVec<i32> = GrowVec::new();
    /// vec.push(1);
    /// assert_eq!(vec.capacity(), 1);
    /// vec.push(2);
    /// assert_eq!(vec.capacity(), 2);
    /// vec.push(3);
    /// assert_eq!(vec.capacity(), 4);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.regrow(self.doubled_capacity());
        }
        self.buf.as_mut_slice()[self.len] = value;
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty.
    ///
    /// Capacity is untouched; the vacated slot becomes slack.
    ///
    /// # Time complexity
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec![1, 2];
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// assert_eq!(vec.capacity(), 2);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            cold_path();
            None
        } else {
            self.len -= 1;
            Some(mem::take(&mut self.buf.as_mut_slice()[self.len]))
        }
    }

    /// Inserts `value` at position `index`, shifting all elements after it to
    /// the right, and returns a reference to its final location.
    ///
    /// Inserting at `index == len` appends. At capacity the vector doubles
    /// first (a capacity of zero becomes 1). The returned reference is valid
    /// until the next mutating operation.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec!['a', 'b', 'c'];
    /// vec.insert(1, 'd');
    /// assert_eq!(vec, ['a', 'd', 'b', 'c']);
    /// assert_eq!(vec.capacity(), 6); // was full at 3
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(index <= self.len, "insertion index should be <= len");

        if self.capacity() == 0 {
            self.push(value);
            return &mut self.buf.as_mut_slice()[0];
        }
        if self.len == self.capacity() {
            self.regrow(self.capacity() * 2);
        }

        let len = self.len;
        let slots = self.buf.as_mut_slice();
        // Pull the slack slot at `len` around to `index` in one pass.
        slots[index..=len].rotate_right(1);
        slots[index] = value;
        self.len += 1;
        &mut self.buf.as_mut_slice()[index]
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Time complexity
    /// O(len - index).
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut vec: GrowVec<_> = growvec!['a', 'b', 'c'];
    /// assert_eq!(vec.remove(1), 'b');
    /// assert_eq!(vec, ['a', 'c']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");

        let len = self.len;
        let slots = self.buf.as_mut_slice();
        // Rotate the victim to the back, then take it out of the slack slot.
        slots[index..len].rotate_left(1);
        self.len = len - 1;
        mem::take(&mut slots[len - 1])
    }

    /// Picks the post-growth capacity for a by-one append.
    #[inline(always)]
    fn doubled_capacity(&self) -> usize {
        if self.capacity() == 0 {
            1
        } else {
            self.capacity() * 2
        }
    }

    /// Replaces the buffer with a fresh allocation of `new_capacity` slots,
    /// moving the `len` live elements across in order.
    ///
    /// The new buffer is fully populated before the old one is discarded, so
    /// a caller observing the vector mid-operation is impossible and the old
    /// allocation is released exactly once, here.
    fn regrow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);

        let mut next = ArrayBuf::allocate(new_capacity);
        let live = &mut self.buf.as_mut_slice()[..self.len];
        for (dst, src) in next.as_mut_slice().iter_mut().zip(live) {
            mem::swap(dst, src);
        }
        self.buf.swap(&mut next);
    }
}

impl<T: Clone> GrowVec<T> {
    /// Constructs a vector of `n` elements equal to `value`, with
    /// `len == capacity == n`.
    ///
    /// This is what `growvec![value; n]` expands to.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::GrowVec;
    /// let vec = GrowVec::from_elem(7, 3);
    /// assert_eq!(vec, [7, 7, 7]);
    /// ```
    #[inline]
    pub fn from_elem(value: T, n: usize) -> Self {
        Self::from_vec(alloc::vec![value; n])
    }
}

impl<T> Default for GrowVec<T> {
    /// An empty vector with zero capacity, as [`GrowVec::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Deep copy with a capacity-tight allocation of exactly `len()` slots.
    ///
    /// ```
    /// # use growvec::{GrowVec, growvec};
    /// let mut a: GrowVec<_> = growvec![1, 2, 3];
    /// a.reserve(10);
    /// let b = a.clone();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!(b.capacity(), 3);
    /// ```
    fn clone(&self) -> Self {
        Self::from_vec(self.as_slice().to_vec())
    }

    /// Builds the complete copy first, then swaps it in, so `self` is never
    /// observable in a partially-assigned state.
    fn clone_from(&mut self, source: &Self) {
        let mut next = source.clone();
        self.swap(&mut next);
    }
}

/// Builds a vector with `len == capacity == K` holding the array's elements.
impl<T, const K: usize> From<[T; K]> for GrowVec<T> {
    #[inline]
    fn from(values: [T; K]) -> Self {
        let slots: Box<[T]> = Box::new(values);
        Self {
            buf: ArrayBuf::from(slots),
            len: K,
        }
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    #[inline]
    fn from(vec: GrowVec<T>) -> Self {
        vec.into_vec()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Default> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    /// Consumes the vector into an iterator over the logical range.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl_common_traits!(GrowVec);

/// A request to construct a vector with reserved capacity and length zero.
///
/// The sized constructor [`GrowVec::with_len`] fills what it allocates; this
/// marker selects the other construction: allocate `requested()` slots,
/// consider none of them present. Produced by [`reserve`] and consumed by the
/// `From` conversion (or the [`GrowVec::with_capacity`] shorthand).
///
/// # Examples
///
/// ```
/// use growvec::{GrowVec, reserve};
///
/// let vec = GrowVec::<u8>::from(reserve(16));
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRequest {
    requested: usize,
}

impl CapacityRequest {
    /// Wraps a capacity into a request.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self {
            requested: capacity,
        }
    }

    /// The number of slots the request asks for.
    #[inline]
    pub const fn requested(&self) -> usize {
        self.requested
    }
}

/// Produces a [`CapacityRequest`] for `capacity` slots.
///
/// # Examples
///
/// ```
/// use growvec::{GrowVec, reserve};
///
/// let vec: GrowVec<i32> = reserve(4).into();
/// assert_eq!((vec.len(), vec.capacity()), (0, 4));
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}

impl<T: Default> From<CapacityRequest> for GrowVec<T> {
    /// Allocates the requested slots with a logical length of zero.
    #[inline]
    fn from(request: CapacityRequest) -> Self {
        Self {
            buf: ArrayBuf::allocate(request.requested()),
            len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn with_len_zero_does_not_allocate() {
        let vec: GrowVec<u32> = GrowVec::with_len(0);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn with_len_fills_with_defaults() {
        let vec: GrowVec<u32> = GrowVec::with_len(4);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.capacity(), 4);
        assert_eq!(vec, [0, 0, 0, 0]);
    }

    #[test]
    fn capacity_request_reserves_without_filling() {
        let vec = GrowVec::<String>::from(reserve(5));
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 5);
        assert_eq!(GrowVec::<String>::with_capacity(5).capacity(), 5);
    }

    #[test]
    fn push_doubles_capacity_from_one() {
        let mut vec: GrowVec<usize> = GrowVec::new();
        let mut expected_caps = vec![];
        for i in 0..17 {
            vec.push(i);
            expected_caps.push(vec.capacity());
            assert!(vec.capacity() >= vec.len());
        }
        assert_eq!(
            expected_caps,
            [1, 2, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32]
        );
        assert_eq!(vec.len(), 17);
        assert_eq!(vec.as_slice(), (0..17).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn reserve_below_capacity_keeps_addresses() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        vec.reserve(8);
        let before = &vec[0] as *const i32;
        vec.reserve(8);
        vec.reserve(2);
        vec.reserve(0);
        assert_eq!(vec.capacity(), 8);
        assert_eq!(&vec[0] as *const i32, before);
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn reserve_allocates_exact_target() {
        let mut vec: GrowVec<String> = GrowVec::new();
        vec.push("a".to_string());
        vec.reserve(7);
        assert_eq!(vec.capacity(), 7);
        assert_eq!(vec.len(), 1);
        assert_eq!(vec[0], "a");
    }

    #[test]
    fn resize_from_zero_capacity_is_exact() {
        let mut vec: GrowVec<u8> = GrowVec::new();
        vec.resize(5);
        assert_eq!(vec.capacity(), 5); // max(5, 0 * 2), not a doubled value
        assert_eq!(vec, [0, 0, 0, 0, 0]);
    }

    #[test]
    fn resize_shrink_keeps_capacity_and_storage() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3, 4];
        vec.resize(2);
        assert_eq!(vec, [1, 2]);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn resize_within_capacity_defaults_new_slots() {
        let mut vec: GrowVec<i32> = GrowVec::with_capacity(6);
        vec.push(9);
        vec.push(8);
        vec.pop();
        // Grow back over the vacated slot: it must read as default, not 8.
        vec.resize(4);
        assert_eq!(vec, [9, 0, 0, 0]);
        assert_eq!(vec.capacity(), 6);
    }

    #[test]
    fn resize_beyond_capacity_takes_max_of_double() {
        let mut vec: GrowVec<i32> = GrowVec::with_len(4);
        vec.resize(5);
        assert_eq!(vec.capacity(), 8); // max(5, 4 * 2)

        let mut vec: GrowVec<i32> = GrowVec::with_len(4);
        vec.resize(20);
        assert_eq!(vec.capacity(), 20); // max(20, 4 * 2)
        assert_eq!(vec.len(), 20);
    }

    #[test]
    fn insert_with_spare_capacity_shifts_right() {
        let mut vec: GrowVec<_> = GrowVec::with_capacity(5);
        vec.extend([1, 2, 4]);
        let inserted = vec.insert(2, 3);
        assert_eq!(*inserted, 3);
        assert_eq!(vec, [1, 2, 3, 4]);
        assert_eq!(vec.capacity(), 5);
    }

    #[test]
    fn insert_at_front_of_full_vector_doubles() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        assert_eq!(vec.len(), vec.capacity());
        vec.insert(0, 0);
        assert_eq!(vec.capacity(), 6);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec, [0, 1, 2, 3]);
    }

    #[test]
    fn insert_into_empty_vector_behaves_like_push() {
        let mut vec: GrowVec<i32> = GrowVec::new();
        let inserted = vec.insert(0, 42);
        assert_eq!(*inserted, 42);
        assert_eq!(vec.capacity(), 1);
        assert_eq!(vec, [42]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut vec: GrowVec<_> = GrowVec::with_capacity(4);
        vec.extend([1, 2]);
        vec.insert(2, 3);
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "insertion index should be <= len")]
    fn insert_past_len_panics() {
        let mut vec: GrowVec<_> = growvec![1];
        vec.insert(2, 9);
    }

    #[test]
    fn remove_shifts_left_and_returns_value() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3, 4];
        assert_eq!(vec.remove(1), 2);
        assert_eq!(vec, [1, 3, 4]);
        assert_eq!(vec.capacity(), 4);

        assert_eq!(vec.remove(2), 4); // last element
        assert_eq!(vec, [1, 3]);
    }

    #[test]
    #[should_panic(expected = "removal index should be < len")]
    fn remove_at_len_panics() {
        let mut vec: GrowVec<_> = growvec![1, 2];
        vec.remove(2);
    }

    #[test]
    fn remove_then_insert_round_trips() {
        let mut vec: GrowVec<_> = growvec![10, 20, 30, 40];
        let taken = vec.remove(2);
        vec.insert(2, taken);
        assert_eq!(vec, [10, 20, 30, 40]);
    }

    #[test]
    fn pop_returns_back_and_keeps_capacity() {
        let mut vec: GrowVec<_> = growvec!["a".to_string(), "b".to_string()];
        assert_eq!(vec.pop().as_deref(), Some("b"));
        assert_eq!(vec.pop().as_deref(), Some("a"));
        assert_eq!(vec.pop(), None);
        assert_eq!(vec.capacity(), 2);
    }

    #[test]
    fn checked_access_errors_past_len() {
        let mut vec: GrowVec<_> = growvec![10, 20, 30];
        assert_eq!(vec.at(2), Ok(&30));
        assert_eq!(vec.at(3), Err(crate::OutOfRange { index: 3, len: 3 }));
        assert_eq!(vec.at(4), Err(crate::OutOfRange { index: 4, len: 3 }));
        assert!(vec.at_mut(3).is_err());
        *vec.at_mut(0).unwrap() = 11;
        assert_eq!(vec[0], 11);
    }

    #[test]
    fn checked_access_ignores_slack() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        vec.resize(1);
        // Capacity still covers index 1, but the logical range does not.
        assert!(vec.at(1).is_err());
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let vec: GrowVec<_> = growvec![1, 2];
        let _ = vec[2];
    }

    #[test]
    fn unchecked_access_reads_in_range() {
        let mut vec: GrowVec<_> = growvec![5, 6, 7];
        unsafe {
            assert_eq!(*vec.get_unchecked(1), 6);
            *vec.get_unchecked_mut(1) = 60;
        }
        assert_eq!(vec, [5, 60, 7]);
    }

    #[test]
    fn equality_is_an_equivalence() {
        let a: GrowVec<_> = growvec![1, 2, 3];
        let b: GrowVec<_> = growvec![1, 2, 3];
        let c: GrowVec<_> = growvec![1, 2, 3];
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);

        let mut longer = b.clone();
        longer.push(4);
        assert_ne!(a, longer);
    }

    #[test]
    fn equality_ignores_capacity() {
        let a: GrowVec<_> = growvec![1, 2];
        let mut b: GrowVec<_> = growvec![1, 2];
        b.reserve(32);
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let ab: GrowVec<_> = growvec![1, 2];
        let abc: GrowVec<_> = growvec![1, 2, 3];
        let ac: GrowVec<_> = growvec![1, 3];
        assert!(ab < abc);
        assert!(abc < ac);
        assert!(ab < ac);
        assert!(ab <= growvec![1, 2]);
        assert!(ac > abc);
        assert!(abc >= ab);
    }

    #[derive(Default, PartialEq, Debug)]
    struct CountsClones(u32);

    static CLONES: AtomicUsize = AtomicUsize::new(0);

    impl Clone for CountsClones {
        fn clone(&self) -> Self {
            CLONES.fetch_add(1, Ordering::Relaxed);
            Self(self.0)
        }
    }

    #[test]
    fn take_moves_storage_without_cloning() {
        let mut source: GrowVec<CountsClones> = GrowVec::new();
        for i in 0..3 {
            source.push(CountsClones(i));
        }
        let clones_before = CLONES.load(Ordering::Relaxed);

        let moved = mem::take(&mut source);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
        assert_eq!(moved.len(), 3);
        assert_eq!(
            moved.as_slice(),
            [CountsClones(0), CountsClones(1), CountsClones(2)]
        );
        assert_eq!(CLONES.load(Ordering::Relaxed), clones_before);
    }

    #[test]
    fn growth_relocates_by_move_not_clone() {
        let mut vec: GrowVec<CountsClones> = GrowVec::new();
        let clones_before = CLONES.load(Ordering::Relaxed);
        for i in 0..20 {
            vec.push(CountsClones(i));
        }
        vec.reserve(100);
        vec.resize(60);
        assert_eq!(CLONES.load(Ordering::Relaxed), clones_before);
    }

    #[test]
    fn clone_is_capacity_tight() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        vec.reserve(12);
        let copy = vec.clone();
        assert_eq!(copy, [1, 2, 3]);
        assert_eq!(copy.capacity(), 3);
        // Independent storage.
        assert_ne!(vec.as_slice().as_ptr(), copy.as_slice().as_ptr());
    }

    #[test]
    fn clone_from_replaces_whole_contents() {
        let source: GrowVec<_> = growvec![7, 8];
        let mut dest: GrowVec<_> = growvec![1, 2, 3, 4, 5];
        dest.clone_from(&source);
        assert_eq!(dest, [7, 8]);
        assert_eq!(dest.capacity(), 2);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 3);
        vec.push(9);
        assert_eq!(vec, [9]);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: GrowVec<_> = growvec![1];
        let mut b: GrowVec<_> = growvec![2, 3, 4];
        a.swap(&mut b);
        assert_eq!(a, [2, 3, 4]);
        assert_eq!(b, [1]);
    }

    #[test]
    fn macro_forms() {
        let empty: GrowVec<i32> = growvec![];
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 0);

        let filled: GrowVec<_> = growvec![7; 4];
        assert_eq!(filled, [7, 7, 7, 7]);
        assert_eq!(filled.capacity(), 4);

        let listed: GrowVec<_> = growvec![1, 2, 3];
        assert_eq!(listed.capacity(), 3);
    }

    #[test]
    fn iteration_covers_logical_range_only() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3, 4];
        vec.reserve(10);
        vec.pop();
        assert_eq!(vec.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

        for value in &mut vec {
            *value *= 10;
        }
        assert_eq!(vec, [10, 20, 30]);

        assert_eq!(vec.into_iter().collect::<Vec<_>>(), [10, 20, 30]);
    }

    #[test]
    fn conversions_are_length_tight() {
        let mut vec: GrowVec<_> = growvec![1, 2, 3];
        vec.reserve(10);
        let plain: Vec<_> = vec.into_vec();
        assert_eq!(plain, [1, 2, 3]);

        let boxed = GrowVec::from(plain).into_boxed_slice();
        assert_eq!(boxed.as_ref(), [1, 2, 3]);
    }

    #[test]
    fn from_iterator_and_extend() {
        let vec: GrowVec<_> = (0..5).collect();
        assert_eq!(vec, [0, 1, 2, 3, 4]);
        assert_eq!(vec.capacity(), 5);

        let mut vec: GrowVec<i32> = GrowVec::new();
        vec.extend([1, 2, 3]);
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn spec_scenario_walkthrough() {
        let mut vec: GrowVec<_> = growvec![10, 20, 30];
        assert_eq!(vec.at(1), Ok(&20));

        vec.push(40);
        assert_eq!(vec, [10, 20, 30, 40]);
        assert_eq!(vec.capacity(), 6);

        vec.remove(1);
        assert_eq!(vec, [10, 30, 40]);
        assert_eq!(vec.len(), 3);

        vec.resize(1);
        assert_eq!(vec, [10]);
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.capacity(), 6);
    }
}
