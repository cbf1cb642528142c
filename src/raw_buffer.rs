use crate::AllocError;
use std::{
    alloc::{self, Layout},
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ptr::NonNull,
    slice,
};

/// Uninitialized storage for a fixed number of `T`.
///
/// A `RawBuffer` owns a single allocation sized for [`capacity`] values of
/// `T` and releases it when dropped. It knows nothing about which slots hold
/// live values: it **never** constructs, moves, or drops a `T`. That is the
/// job of the owner, usually a [`DynArray`].
///
/// The buffer is move-only. Cloning it would leave two owners of the same
/// block, so no [`Clone`] implementation exists. Use [`take`] to move the
/// allocation out and leave an empty buffer behind.
///
/// A buffer with zero capacity holds no allocation, and neither does a
/// buffer of a zero-sized `T`.
///
/// [`capacity`]: RawBuffer::capacity
/// [`take`]: RawBuffer::take
/// [`DynArray`]: crate::DynArray
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T> Send for RawBuffer<T> where T: Send {}
unsafe impl<T> Sync for RawBuffer<T> where T: Sync {}

impl<T> RawBuffer<T> {
    /// Constructs an empty buffer without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::RawBuffer;
    /// let buffer = RawBuffer::<u32>::new();
    /// assert_eq!(buffer.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` values of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the size of the allocation exceeds `isize::MAX` bytes.
    /// Allocation failure is reported through [`handle_alloc_error`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::RawBuffer;
    /// let buffer = RawBuffer::<u32>::with_capacity(10);
    /// assert_eq!(buffer.capacity(), 10);
    /// ```
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.handle())
    }

    /// Allocates room for exactly `capacity` values of `T`, returning an
    /// error instead of aborting when the allocation cannot be made.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::{AllocError, RawBuffer};
    /// let buffer = RawBuffer::<u32>::try_with_capacity(4)?;
    /// assert_eq!(buffer.capacity(), 4);
    ///
    /// let too_big = RawBuffer::<u32>::try_with_capacity(usize::MAX);
    /// assert_eq!(too_big.unwrap_err(), AllocError::CapacityOverflow);
    /// # Ok::<(), AllocError>(())
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: The layout has a nonzero size
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr.cast::<T>()) else {
            return Err(AllocError::OutOfMemory { layout });
        };
        log::trace!("allocated {} bytes for {capacity} slots", layout.size());

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// The number of `T` slots in the buffer.
    ///
    /// This counts storage, not live values.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is dangling (but well-aligned and non-null) when nothing
    /// is allocated.
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end
    /// address, which must never be read or written as a `T`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `offset <= capacity`. This is checked by
    /// a debug assertion only.
    pub unsafe fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity, "offset out of bounds");
        // SAFETY: The caller ensures that the result stays within the
        // allocation or one past its end
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Returns the storage of slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < capacity`. This is checked by a
    /// debug assertion only.
    pub unsafe fn slot(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(index < self.capacity, "index out of bounds");
        // SAFETY: The caller ensures the slot lies within the allocation.
        // MaybeUninit<T> has the same layout as T.
        unsafe { &*self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Returns the mutable storage of slot `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < capacity`. This is checked by a
    /// debug assertion only.
    pub unsafe fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity, "index out of bounds");
        // SAFETY: As for slot, with exclusive access through &mut self
        unsafe { &mut *self.ptr.as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Views every slot of the buffer.
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: The pointer is valid for capacity slots, and any bit
        // pattern is a valid MaybeUninit
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// Mutably views every slot of the buffer.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: See as_uninit_slice
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) }
    }

    /// Exchanges the allocations of two buffers in O(1).
    ///
    /// No values are moved or dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::RawBuffer;
    /// let mut a = RawBuffer::<u8>::with_capacity(2);
    /// let mut b = RawBuffer::<u8>::new();
    /// a.swap(&mut b);
    /// assert_eq!((a.capacity(), b.capacity()), (0, 2));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the allocation out, leaving an empty buffer in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::RawBuffer;
    /// let mut a = RawBuffer::<u8>::with_capacity(3);
    /// let b = a.take();
    /// assert_eq!(a.capacity(), 0);
    /// assert_eq!(b.capacity(), 3);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn layout(&self) -> Layout {
        // SAFETY: The same layout was checked when the buffer was allocated
        unsafe {
            Layout::from_size_align_unchecked(
                mem::size_of::<T>() * self.capacity,
                mem::align_of::<T>(),
            )
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let layout = self.layout();
        if layout.size() == 0 {
            return;
        }
        // SAFETY: A nonzero layout means ptr came from alloc with this layout
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        log::trace!("released {} bytes", layout.size());
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use crate::AllocError;

    #[test]
    fn empty_does_not_allocate() {
        let buffer = RawBuffer::<u64>::with_capacity(0);
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.as_uninit_slice().is_empty());
    }

    #[test]
    fn slots_are_writable() {
        let mut buffer = RawBuffer::<u64>::with_capacity(3);
        for i in 0..3 {
            unsafe { buffer.slot_mut(i) }.write(i as u64 * 10);
        }
        let read: Vec<_> = (0..3)
            .map(|i| unsafe { buffer.slot(i).assume_init_read() })
            .collect();
        assert_eq!(read, [0, 10, 20]);
    }

    #[test]
    fn uninit_slice_covers_capacity() {
        let mut buffer = RawBuffer::<u8>::with_capacity(4);
        for (i, slot) in buffer.as_uninit_slice_mut().iter_mut().enumerate() {
            slot.write(i as u8);
        }
        let read: Vec<_> = buffer
            .as_uninit_slice()
            .iter()
            .map(|slot| unsafe { slot.assume_init() })
            .collect();
        assert_eq!(read, [0, 1, 2, 3]);
    }

    #[test]
    fn past_the_end_offset() {
        let buffer = RawBuffer::<u32>::with_capacity(4);
        let end = unsafe { buffer.offset(4) };
        assert_eq!(end as usize - buffer.as_ptr() as usize, 16);
    }

    #[test]
    fn take_leaves_empty() {
        let mut a = RawBuffer::<u16>::with_capacity(8);
        let ptr = a.as_ptr();
        let b = a.take();
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.as_ptr(), ptr);
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = RawBuffer::<u16>::with_capacity(1);
        let mut b = RawBuffer::<u16>::with_capacity(5);
        let (pa, pb) = (a.as_ptr(), b.as_ptr());
        a.swap(&mut b);
        assert_eq!((a.capacity(), a.as_ptr()), (5, pb));
        assert_eq!((b.capacity(), b.as_ptr()), (1, pa));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            RawBuffer::<u64>::try_with_capacity(usize::MAX / 4).unwrap_err(),
            AllocError::CapacityOverflow
        );
    }

    #[test]
    fn zero_sized_capacity() {
        let buffer = RawBuffer::<()>::with_capacity(usize::MAX);
        assert_eq!(buffer.capacity(), usize::MAX);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_overflow_panics() {
        let _ = RawBuffer::<u32>::with_capacity(usize::MAX);
    }
}
