//! The `GrowableBuffer` type - an exclusively owned element block.
//!
//! A buffer tracks two lengths:
//!
//! - `size()` - how many elements are logically valid
//! - `capacity()` - how many elements the current allocation holds
//!
//! Shrinking or regrowing within the existing capacity only moves the logical
//! size. The allocation itself changes when a request exceeds the capacity, or
//! when the growth target for a shrink falls below the current size. Targets
//! come from the [`GrowthPolicy`] selected by the `CACHE` const parameter.
//!
//! # Example
//!
//! ```
//! use growbuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new();
//! buf.allocate(10, true)?;
//! buf.append_slice(&[1, 2, 3, 4, 5])?;
//! assert_eq!(buf.size(), 15);
//!
//! // consume processed data from the front
//! buf.drain_front(3);
//! assert_eq!(buf.size(), 12);
//! assert_eq!(buf.capacity(), 15);
//! # Ok::<(), growbuf::BufferError>(())
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::config::GrowthPolicy;
use crate::element::Element;
use crate::error::BufferError;

/// A growable, exclusively owned buffer of `T` elements.
///
/// `CACHE` bounds how far a grow may over-allocate past the previous logical
/// size (see [`GrowthPolicy`]). With the default of 0 every grow is an exact
/// fit.
///
/// Ownership is never shared: copies duplicate the content into fresh
/// storage, and the storage is released exactly once, by
/// [`release`](Self::release) or when the buffer is dropped.
///
/// Elements between `size()` and `capacity()` keep whatever values they last
/// held. They are never exposed through [`as_slice`](Self::as_slice), but
/// [`at`](Self::at) and [`set_size`](Self::set_size) can reach them.
///
/// # Aliasing
///
/// Copying or appending a buffer onto itself is rejected at compile time:
///
/// ```compile_fail
/// use growbuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::from_slice(b"abc").unwrap();
/// buf.append(&buf).unwrap();
/// ```
pub struct GrowableBuffer<T, const CACHE: usize = 0> {
    /// Storage; its length is the capacity.
    data: Vec<T>,
    size: usize,
}

impl<T: Element, const CACHE: usize> GrowableBuffer<T, CACHE> {
    /// The growth policy of this buffer type.
    pub const POLICY: GrowthPolicy = GrowthPolicy::new(CACHE);

    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            size: 0,
        }
    }

    /// Creates a buffer of `size` elements, zero-filled if `zero` is set.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the storage cannot be
    /// allocated.
    pub fn with_size(size: usize, zero: bool) -> Result<Self, BufferError> {
        let mut buf = Self::new();
        buf.allocate(size, zero)?;
        Ok(buf)
    }

    /// Creates a buffer holding a copy of `data`.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from_slice(b"hello")?;
    /// assert_eq!(buf.as_slice(), b"hello");
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn from_slice(data: &[T]) -> Result<Self, BufferError> {
        let mut buf = Self::new();
        buf.copy_from_slice(data)?;
        Ok(buf)
    }

    /// Creates a buffer holding a copy of `other`'s logical content.
    ///
    /// `other` may use a different growth bound.
    pub fn from_buffer<const S: usize>(other: &GrowableBuffer<T, S>) -> Result<Self, BufferError> {
        let mut buf = Self::new();
        buf.copy_from(other)?;
        Ok(buf)
    }

    /// Discards the current content and allocates room for `size` elements.
    ///
    /// The new elements hold unspecified values unless `zero` is set. Returns
    /// the logical region.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the storage cannot be
    /// allocated. The buffer is empty afterwards.
    pub fn allocate(&mut self, size: usize, zero: bool) -> Result<&mut [T], BufferError> {
        self.release();
        self.alloc(size, zero)?;
        Ok(self.as_mut_slice())
    }

    /// Resizes the logical region to `size` elements, keeping the first
    /// `min(size, self.size())` elements.
    ///
    /// If `zero` is set the whole logical region is zero-filled afterwards,
    /// including the preserved part. Returns the logical region.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if a reallocation is needed and
    /// fails. The buffer is empty afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::GrowableBuffer;
    ///
    /// let mut buf = GrowableBuffer::<u8, 64>::from_slice(b"abc")?;
    /// buf.reallocate(4, false)?;
    /// assert_eq!(&buf.as_slice()[..3], b"abc");
    ///
    /// // shrinking within capacity keeps the allocation
    /// let capacity = buf.capacity();
    /// buf.reallocate(3, false)?;
    /// assert_eq!(buf.capacity(), capacity);
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn reallocate(&mut self, size: usize, zero: bool) -> Result<&mut [T], BufferError> {
        self.alloc(size, zero)?;
        Ok(self.as_mut_slice())
    }

    /// Frees the storage and returns to the empty state.
    ///
    /// Calling this on an empty buffer does nothing.
    pub fn release(&mut self) {
        if self.is_valid() {
            self.data = Vec::new();
        }
        self.size = 0;
    }

    /// Replaces the content with a copy of `other`'s logical content.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the storage cannot be
    /// allocated. The buffer is empty afterwards.
    pub fn copy_from<const S: usize>(
        &mut self,
        other: &GrowableBuffer<T, S>,
    ) -> Result<&mut Self, BufferError> {
        self.copy_from_slice(other.as_slice())
    }

    /// Replaces the content with a copy of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if the storage cannot be
    /// allocated. The buffer is empty afterwards.
    pub fn copy_from_slice(&mut self, data: &[T]) -> Result<&mut Self, BufferError> {
        self.allocate(data.len(), false)?.copy_from_slice(data);
        Ok(self)
    }

    /// Appends `other`'s logical content after the current logical end.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if growing fails. The buffer is
    /// empty afterwards.
    pub fn append<const S: usize>(
        &mut self,
        other: &GrowableBuffer<T, S>,
    ) -> Result<&mut Self, BufferError> {
        self.append_slice(other.as_slice())
    }

    /// Appends `data` after the current logical end.
    ///
    /// Growth goes through the growth policy, so repeated small appends
    /// reallocate rarely when `CACHE` is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if growing fails. The buffer is
    /// empty afterwards.
    pub fn append_slice(&mut self, data: &[T]) -> Result<&mut Self, BufferError> {
        let start = self.size;
        self.alloc(start.saturating_add(data.len()), false)?;
        self.data[start..self.size].copy_from_slice(data);
        Ok(self)
    }

    /// Appends a single element.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfMemory`] if growing fails. The buffer is
    /// empty afterwards.
    pub fn push(&mut self, value: T) -> Result<&mut Self, BufferError> {
        self.append_slice(&[value])
    }

    /// Consumes `count` elements from the front.
    ///
    /// - `count == 0` does nothing.
    /// - `count >= size()` zero-fills the logical region and empties it.
    /// - Otherwise the remaining elements move to the front and the size
    ///   shrinks by `count`. The vacated tail is not cleared.
    ///
    /// The capacity never changes.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from_slice(b"headerbody")?;
    /// buf.drain_front(6);
    /// assert_eq!(buf.as_slice(), b"body");
    /// assert_eq!(buf.capacity(), 10);
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn drain_front(&mut self, count: usize) -> &mut Self {
        if !self.is_valid() {
            return self;
        }

        if count >= self.size {
            self.data[..self.size].fill(T::ZERO);
            self.size = 0;
        } else if count > 0 {
            self.data.copy_within(count..self.size, 0);
            self.size -= count;
        }
        self
    }

    /// Sets the logical size without touching the storage and returns it.
    ///
    /// Values above the capacity clamp to the capacity. Growing the logical
    /// size exposes whatever values the storage held there.
    pub fn set_size(&mut self, size: usize) -> usize {
        self.size = size.min(self.capacity());
        self.size
    }

    /// Returns true if both buffers have the same logical content.
    ///
    /// The buffers may use different growth bounds.
    pub fn equals<const S: usize>(&self, other: &GrowableBuffer<T, S>) -> bool {
        if ptr::addr_eq(self as *const Self, other as *const GrowableBuffer<T, S>) {
            true
        } else if self.size != other.size() {
            false
        } else if self.size == 0 {
            true
        } else {
            self.as_slice() == other.as_slice()
        }
    }

    /// Compares the logical content against the start of `data`.
    ///
    /// An empty slice stands in for a null pointer: it equals an invalid
    /// buffer and nothing else. A slice pointing at this buffer's own storage
    /// is equal by identity. Otherwise the first `size()` elements of `data`
    /// are compared; a slice shorter than `size()` is never equal.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from_slice(b"abc")?;
    /// assert!(buf.equals_slice(b"abc"));
    /// assert!(buf.equals_slice(b"abcdef"));
    /// assert!(!buf.equals_slice(b"ab"));
    /// assert!(!buf.equals_slice(b""));
    /// assert!(ByteBuffer::new().equals_slice(b""));
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn equals_slice(&self, data: &[T]) -> bool {
        match (self.is_valid(), !data.is_empty()) {
            (false, false) => true,
            (true, true) => {
                ptr::eq(self.data.as_ptr(), data.as_ptr())
                    || data.get(..self.size) == Some(self.as_slice())
            }
            _ => false,
        }
    }

    /// Returns a pointer to the storage, null when the buffer is invalid.
    pub fn as_ptr(&self) -> *const T {
        if self.is_valid() {
            self.data.as_ptr()
        } else {
            ptr::null()
        }
    }

    /// Returns a mutable pointer to the storage, null when the buffer is
    /// invalid.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.is_valid() {
            self.data.as_mut_ptr()
        } else {
            ptr::null_mut()
        }
    }

    /// Returns the logical region.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Returns the logical region mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.size]
    }

    /// Returns the element at `index`.
    ///
    /// The index is not checked against `size()`; any slot of the allocation
    /// is reachable and slots past the logical end hold stale values.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn at(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// Returns the number of logically valid elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the allocation holds.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer owns storage.
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// Returns true if no element is logically valid.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the growth policy of this buffer.
    pub fn growth_policy(&self) -> GrowthPolicy {
        Self::POLICY
    }

    /// Returns a deep copy, or the allocation error.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::from_buffer(self)
    }

    /// Resizes the logical region to `requested` elements, reallocating only
    /// when the capacity must grow or the growth target drops below the
    /// current size.
    fn alloc(&mut self, requested: usize, zero: bool) -> Result<(), BufferError> {
        if requested != self.size {
            let target = Self::POLICY.target(self.size, requested);
            if requested > self.capacity() || target < self.size {
                self.resize_storage(target)?;
            }
            self.size = requested;
        }

        if zero && self.is_valid() {
            self.data[..self.size].fill(T::ZERO);
        }
        Ok(())
    }

    /// Resizes the storage to exactly `target` elements, keeping the prefix
    /// both allocations share.
    fn resize_storage(&mut self, target: usize) -> Result<(), BufferError> {
        let old_capacity = self.capacity();

        if target == 0 {
            self.release();
        } else if target > old_capacity {
            if let Err(e) = self.data.try_reserve_exact(target - old_capacity) {
                debug!(requested = target, old_capacity, error = %e, "buffer allocation failed");
                self.release();
                return Err(BufferError::OutOfMemory { requested: target });
            }
            self.data.resize(target, T::ZERO);
        } else {
            self.data.truncate(target);
            self.data.shrink_to_fit();
        }

        trace!(old_capacity, new_capacity = target, "buffer reallocated");
        Ok(())
    }
}

impl<const CACHE: usize> GrowableBuffer<u8, CACHE> {
    /// Copies the logical content into a [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }
}

impl<const CACHE: usize> From<GrowableBuffer<u8, CACHE>> for Bytes {
    /// Hands the storage over without copying. Stale elements past the
    /// logical end are cut off.
    fn from(buf: GrowableBuffer<u8, CACHE>) -> Self {
        let GrowableBuffer { mut data, size } = buf;
        data.truncate(size);
        Bytes::from(data)
    }
}

impl<T: Element, const CACHE: usize> Default for GrowableBuffer<T, CACHE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element + fmt::Debug, const CACHE: usize> fmt::Debug for GrowableBuffer<T, CACHE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Element, const CACHE: usize> Clone for GrowableBuffer<T, CACHE> {
    /// # Panics
    ///
    /// Panics if the copy cannot be allocated. Use
    /// [`try_clone`](GrowableBuffer::try_clone) to handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(buf) => buf,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Element, const C: usize, const S: usize> PartialEq<GrowableBuffer<T, S>>
    for GrowableBuffer<T, C>
{
    fn eq(&self, other: &GrowableBuffer<T, S>) -> bool {
        self.equals(other)
    }
}

impl<T: Element, const CACHE: usize> Eq for GrowableBuffer<T, CACHE> {}

impl<T: Element, const CACHE: usize> PartialEq<[T]> for GrowableBuffer<T, CACHE> {
    fn eq(&self, other: &[T]) -> bool {
        self.equals_slice(other)
    }
}

impl<T: Element, const CACHE: usize> PartialEq<&[T]> for GrowableBuffer<T, CACHE> {
    fn eq(&self, other: &&[T]) -> bool {
        self.equals_slice(other)
    }
}

impl<T: Element, const CACHE: usize> AsRef<[T]> for GrowableBuffer<T, CACHE> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element, const CACHE: usize> AsMut<[T]> for GrowableBuffer<T, CACHE> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Element, const CACHE: usize> Index<usize> for GrowableBuffer<T, CACHE> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T: Element, const CACHE: usize> IndexMut<usize> for GrowableBuffer<T, CACHE> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T: Element, const CACHE: usize> TryFrom<&[T]> for GrowableBuffer<T, CACHE> {
    type Error = BufferError;

    fn try_from(data: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}
