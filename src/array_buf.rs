use alloc::{boxed::Box, vec::Vec};
use core::{fmt, mem};

/// An exclusively owned, fixed-size heap buffer of element slots.
///
/// `ArrayBuf` is the storage backend of [`GrowVec`](crate::GrowVec): a single
/// heap allocation of exactly `len()` slots, released exactly once when the
/// buffer is dropped. It is deliberately minimal: it cannot grow, cannot be
/// cloned, and knows nothing about which slots are logically in use.
///
/// A zero-length buffer holds no allocation at all.
///
/// Two buffers can exchange their allocations in O(1) with [`swap`](ArrayBuf::swap),
/// which never touches the elements themselves. This is the primitive every
/// growth operation in the crate is built on: populate a fresh buffer, swap it
/// in, and let the old allocation die with the temporary.
///
/// # Examples
///
/// ```
/// use growvec::ArrayBuf;
///
/// let buf: ArrayBuf<u32> = ArrayBuf::allocate(4);
/// assert_eq!(buf.len(), 4);
/// assert_eq!(buf.as_slice(), [0, 0, 0, 0]);
///
/// let empty: ArrayBuf<u32> = ArrayBuf::allocate(0);
/// assert!(empty.is_empty());
/// ```
pub struct ArrayBuf<T> {
    slots: Box<[T]>,
}

impl<T: Default> ArrayBuf<T> {
    /// Allocates a buffer of exactly `n` default-initialized slots.
    ///
    /// When `n` is zero, no heap allocation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::ArrayBuf;
    /// let buf: ArrayBuf<i64> = ArrayBuf::allocate(3);
    /// assert_eq!(buf.as_slice(), [0, 0, 0]);
    /// ```
    pub fn allocate(n: usize) -> Self {
        let mut slots = Vec::with_capacity(n);
        slots.resize_with(n, T::default);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }
}

impl<T> ArrayBuf<T> {
    /// Creates a buffer with zero slots and no allocation.
    #[inline]
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Returns the number of slots the buffer was allocated with.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer holds no slots (and no allocation).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Exchanges the owned allocations of two buffers.
    ///
    /// No element is copied, cloned or dropped; only the owning pointers move.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growvec::ArrayBuf;
    /// let mut a: ArrayBuf<u8> = ArrayBuf::allocate(2);
    /// let mut b: ArrayBuf<u8> = ArrayBuf::allocate(5);
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(b.len(), 2);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Views every slot of the buffer, in-use or not.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutably views every slot of the buffer, in-use or not.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Releases the buffer, handing its allocation to the returned boxed slice.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T> Default for ArrayBuf<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Adopts an existing boxed slice as a buffer, without reallocating.
impl<T> From<Box<[T]>> for ArrayBuf<T> {
    #[inline]
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

/// Adopts a vector's elements, shrinking the allocation to the vector's length.
impl<T> From<Vec<T>> for ArrayBuf<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self {
            slots: vec.into_boxed_slice(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.slots, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_zero_holds_nothing() {
        let buf: ArrayBuf<u32> = ArrayBuf::allocate(0);
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.as_slice(), &[] as &[u32]);
    }

    #[test]
    fn allocate_default_initializes_every_slot() {
        let buf: ArrayBuf<alloc::string::String> = ArrayBuf::allocate(3);
        assert_eq!(buf.len(), 3);
        assert!(buf.as_slice().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn swap_exchanges_allocations_in_place() {
        let mut a: ArrayBuf<u8> = ArrayBuf::from(alloc::vec![1, 2, 3]);
        let mut b: ArrayBuf<u8> = ArrayBuf::empty();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(b.as_slice(), [1, 2, 3]);
    }

    #[test]
    fn from_vec_is_length_tight() {
        let mut vec = Vec::with_capacity(16);
        vec.extend([7u64, 8, 9]);
        let buf = ArrayBuf::from(vec);
        assert_eq!(buf.len(), 3);
    }
}
