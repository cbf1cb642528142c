use crate::{
    AllocError, RawBuffer,
    relocate::{relocate, shift_left, shift_right},
};
use std::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

/// A contiguous growable array.
///
/// `DynArray` owns a [`RawBuffer`] and keeps the first [`len`] slots of it
/// initialized. Everything past `len` up to [`capacity`] is raw storage.
/// When an insertion finds the buffer full, a new buffer of twice the
/// capacity (or a single slot, starting from empty) is allocated, the
/// elements are moved across and the old block is released.
///
/// Elements are dereferenced as a slice, so indexing, iteration and the
/// rest of the slice API are available directly. The borrow checker takes
/// care of iterator invalidation: no reference into the array survives a
/// call that may reallocate or shift elements.
///
/// # Examples
///
/// ```
/// # use dynarray::DynArray;
/// let mut array = DynArray::new();
/// array.push(1);
/// array.push(2);
/// array.push(3);
/// array.insert(1, 9);
/// assert_eq!(array, [1, 9, 2, 3]);
/// assert_eq!(array.erase(1), 1);
/// assert_eq!(array[1], 2);
/// ```
///
/// [`len`]: DynArray::len
/// [`capacity`]: DynArray::capacity
pub struct DynArray<T> {
    buffer: RawBuffer<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Constructs a new, empty `DynArray<T>`.
    ///
    /// The array will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let array = DynArray::<u32>::new();
    /// assert_eq!((array.len(), array.capacity()), (0, 0));
    /// ```
    pub const fn new() -> Self {
        Self {
            buffer: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `DynArray<T>` with room for exactly
    /// `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation would exceed `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Fallible version of [`with_capacity`].
    ///
    /// [`with_capacity`]: DynArray::with_capacity
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            buffer: RawBuffer::try_with_capacity(capacity)?,
            len: 0,
        })
    }

    /// Constructs an array of `len` default values.
    ///
    /// The capacity equals the length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let array = DynArray::<i32>::with_len(5);
    /// assert_eq!(array, [0; 5]);
    /// assert_eq!(array.capacity(), 5);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Constructs an array of `len` clones of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Constructs an array of `len` elements by calling `f` with each index
    /// in turn.
    ///
    /// If `f` panics, the elements built so far are dropped and the buffer
    /// is released before the panic continues.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let squares = DynArray::from_fn(4, |i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        let mut out = Self::with_capacity(len);
        for i in 0..len {
            let value = f(i);
            // SAFETY: i < len == capacity
            unsafe { out.push_unchecked(value) };
        }
        out
    }

    /// Constructs an array of `len` elements from a fallible constructor.
    ///
    /// The first error is returned after the elements built so far have
    /// been dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let parsed = DynArray::try_from_fn(3, |i| ["1", "2", "3"][i].parse::<u8>());
    /// assert_eq!(parsed.unwrap(), [1, 2, 3]);
    ///
    /// let failed = DynArray::try_from_fn(3, |i| ["1", "x", "3"][i].parse::<u8>());
    /// assert!(failed.is_err());
    /// ```
    pub fn try_from_fn<E, F>(len: usize, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut out = Self::with_capacity(len);
        for i in 0..len {
            let value = f(i)?;
            // SAFETY: i < len == capacity
            unsafe { out.push_unchecked(value) };
        }
        Ok(out)
    }

    /// Returns the number of elements in the array, also referred to as its
    /// length.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without
    /// reallocating.
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Sets the length without dropping or initializing anything.
    ///
    /// # Safety
    ///
    /// `new_len` must not exceed the capacity, and the first `new_len`
    /// slots must hold initialized values.
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Extracts a slice containing the entire array.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice containing the entire array.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first len slots are initialized
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is invalidated by any operation that reallocates.
    pub const fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_mut_ptr()
    }

    /// Makes sure the array can hold `new_capacity` elements in total.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity rather
    /// than an additional amount, and the capacity afterwards is exactly
    /// `new_capacity`. Nothing happens if the capacity is already large
    /// enough; in particular, no element moves.
    ///
    /// # Panics
    ///
    /// Panics if the allocation would exceed `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2];
    /// array.reserve(10);
    /// assert_eq!(array.capacity(), 10);
    /// array.reserve(3);
    /// assert_eq!(array.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            e.handle();
        }
    }

    /// Fallible version of [`reserve`]. The array is unchanged on error.
    ///
    /// [`reserve`]: DynArray::reserve
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut buffer = RawBuffer::<T>::try_with_capacity(new_capacity)?;
        // SAFETY: The first len slots are initialized, the new buffer has
        // room for more than len and the two blocks are distinct
        unsafe { relocate(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.len) };
        self.replace_buffer(buffer);
        Ok(())
    }

    /// Grows geometrically so that `additional` more elements fit.
    fn reserve_additional(&mut self, additional: usize) {
        let Some(needed) = self.len.checked_add(additional) else {
            AllocError::CapacityOverflow.handle();
        };
        if needed > self.capacity() {
            self.reserve(needed.max(self.capacity().saturating_mul(2)));
        }
    }

    /// Installs `buffer`, whose first `len` slots must already hold the
    /// elements, and releases the old block.
    fn replace_buffer(&mut self, mut buffer: RawBuffer<T>) {
        log::trace!(
            "reallocated from {} to {} slots",
            self.capacity(),
            buffer.capacity()
        );
        self.buffer.swap(&mut buffer);
    }

    /// Resizes the array in place so that `len` is equal to `new_len`.
    ///
    /// Growing appends default values, reserving exactly `new_len` slots if
    /// the capacity is too small. Shrinking drops the trailing elements and
    /// keeps the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// array.resize(5);
    /// assert_eq!(array, [1, 2, 3, 0, 0]);
    /// array.resize(1);
    /// assert_eq!(array, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the array in place, filling new slots with the values
    /// returned by `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if let Err(e) = self.try_resize_with(new_len, f) {
            e.handle();
        }
    }

    /// Fallible version of [`resize_with`]. The array is unchanged if the
    /// allocation fails.
    ///
    /// [`resize_with`]: DynArray::resize_with
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), AllocError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.try_reserve(new_len)?;
        while self.len < new_len {
            let value = f();
            // SAFETY: len < new_len <= capacity
            unsafe { self.push_unchecked(value) };
        }
        Ok(())
    }

    /// Shortens the array, keeping the first `len` elements and dropping
    /// the rest. Does nothing if `len` is not less than the current length.
    ///
    /// The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: len < self.len <= capacity
        let tail =
            ptr::slice_from_raw_parts_mut(unsafe { self.buffer.offset(len) }, self.len - len);
        // Length first, so a panicking destructor cannot cause a double drop
        self.len = len;
        // SAFETY: The tail is initialized and no longer covered by len
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends an element to the back of the array.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity would exceed `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let mut array = DynArray::new();
    /// array.push(1);
    /// array.push(2);
    /// assert_eq!(array, [1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.emplace_back_with(|| value);
    }

    /// Fallible version of [`push`]. On error the array is unchanged and
    /// `value` is dropped.
    ///
    /// [`push`]: DynArray::push
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        self.try_emplace_back_with(|| value).map(|_| ())
    }

    /// Removes the last element and returns it, or `None` if the array is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2];
    /// assert_eq!(array.pop(), Some(2));
    /// assert_eq!(array.pop(), Some(1));
    /// assert_eq!(array.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: The slot at the old len - 1 was initialized and is now
        // outside the live range
        Some(unsafe { self.buffer.offset(self.len).read() })
    }

    /// Builds a new element at the back of the array from the value
    /// returned by `f` and returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::DynArray;
    /// let mut names = DynArray::new();
    /// names.emplace_back_with(|| String::from("foo")).push_str("bar");
    /// assert_eq!(names, ["foobar"]);
    /// ```
    pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        self.emplace_at_with(len, f)
    }

    /// Fallible version of [`emplace_back_with`].
    ///
    /// [`emplace_back_with`]: DynArray::emplace_back_with
    pub fn try_emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, AllocError>
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        self.try_emplace_at_with(len, f)
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it to the right, and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// *array.insert(1, 9) += 1;
    /// assert_eq!(array, [1, 10, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_at_with(index, || value)
    }

    /// Fallible version of [`insert`].
    ///
    /// [`insert`]: DynArray::insert
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, AllocError> {
        self.try_emplace_at_with(index, || value)
    }

    /// Builds a new element at position `index` from the value returned by
    /// `f`, shifting all elements after it to the right.
    ///
    /// `f` runs before any element moves, so if it panics the array is left
    /// as it was.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn emplace_at_with<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.try_emplace_at_with(index, f) {
            Ok(element) => element,
            Err(e) => e.handle(),
        }
    }

    /// Fallible version of [`emplace_at_with`]. The array is unchanged on
    /// error and `f` is not called.
    ///
    /// [`emplace_at_with`]: DynArray::emplace_at_with
    pub fn try_emplace_at_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, AllocError>
    where
        F: FnOnce() -> T,
    {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        if self.len < self.capacity() {
            let value = f();
            let base = self.buffer.as_mut_ptr();
            // SAFETY: index <= len and there is a spare slot after len
            unsafe {
                shift_right(base, index, self.len);
                base.add(index).write(value);
            }
        } else {
            self.grow_and_emplace(index, f)?;
        }

        self.len += 1;
        // SAFETY: index < len and the slot was just written
        Ok(unsafe { &mut *self.buffer.offset(index) })
    }

    /// Moves everything into a buffer of twice the capacity with the value
    /// of `f` at `index`.
    fn grow_and_emplace<F>(&mut self, index: usize, f: F) -> Result<(), AllocError>
    where
        F: FnOnce() -> T,
    {
        let new_capacity = match self.capacity() {
            0 => 1,
            capacity => capacity.checked_mul(2).ok_or(AllocError::CapacityOverflow)?,
        };
        let mut buffer = RawBuffer::<T>::try_with_capacity(new_capacity)?;
        let src = self.buffer.as_ptr();
        let dst = buffer.as_mut_ptr();

        // The new element goes in before anything is relocated. If `f`
        // panics, `buffer` frees its block and `self` is untouched.
        //
        // SAFETY: index <= len < new_capacity, so the prefix, the new slot
        // and the shifted suffix all fit in the new block
        unsafe {
            dst.add(index).write(f());
            relocate(src, dst, index);
            relocate(src.add(index), dst.add(index + 1), self.len - index);
        }

        self.replace_buffer(buffer);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting all elements
    /// after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// assert_eq!(array.remove(0), 1);
    /// assert_eq!(array, [2, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );
        let base = self.buffer.as_mut_ptr();
        // SAFETY: index < len, so the slot is initialized. Once it is read
        // out, the remaining elements close the hole.
        unsafe {
            let out = base.add(index).read();
            shift_left(base, index, self.len);
            self.len -= 1;
            out
        }
    }

    /// Drops the element at `index`, shifting all elements after it to the
    /// left.
    ///
    /// Returns the position of the element that now occupies `index`,
    /// which equals the new length if the last element was erased. Erasing
    /// at `index == len` removes nothing and returns `len`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dynarray::dynarray;
    /// let mut array = dynarray![1, 9, 2, 3];
    /// let next = array.erase(1);
    /// assert_eq!(array, [1, 2, 3]);
    /// assert_eq!(array[next], 2);
    /// assert_eq!(array.erase(2), array.len());
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        if index != self.len {
            drop(self.remove(index));
        }
        index
    }

    /// Writes `value` into the first unused slot.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `len < capacity`.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: Guaranteed by the caller
        unsafe { self.buffer.offset(self.len).write(value) };
        self.len += 1;
    }

    /// Hands the buffer and length over to the caller, who becomes
    /// responsible for the elements.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut me = ManuallyDrop::new(self);
        (me.buffer.take(), me.len)
    }
}

impl<T> DynArray<T>
where
    T: Clone,
{
    /// Fallible version of [`clone`]. The result has no spare capacity.
    ///
    /// [`clone`]: Clone::clone
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut out = Self::try_with_capacity(self.len)?;
        for item in self.iter() {
            let value = item.clone();
            // SAFETY: out.len < self.len == out.capacity
            unsafe { out.push_unchecked(value) };
        }
        Ok(out)
    }

    /// Fallible version of [`clone_from`].
    ///
    /// If `source` does not fit in the current capacity, a full copy is
    /// built first and then swapped in, so an allocation failure or a
    /// panicking [`Clone`] leaves `self` unchanged. Otherwise elements are
    /// assigned in place: the common prefix with [`Clone::clone_from`],
    /// then surplus elements are dropped or missing ones cloned in. A
    /// panic on that path leaves the elements assigned so far in place.
    ///
    /// [`clone_from`]: Clone::clone_from
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        if source.len > self.capacity() {
            let mut copy = source.try_clone()?;
            mem::swap(self, &mut copy);
            return Ok(());
        }

        let common = self.len.min(source.len);
        for (dst, src) in self[..common].iter_mut().zip(&source[..common]) {
            dst.clone_from(src);
        }

        if source.len < self.len {
            self.truncate(source.len);
        } else {
            for item in &source[common..] {
                let value = item.clone();
                // SAFETY: len < source.len <= capacity
                unsafe { self.push_unchecked(value) };
            }
        }
        Ok(())
    }

    /// Clones and appends every element of `other`.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve_additional(other.len());
        for item in other {
            let value = item.clone();
            // SAFETY: Room for other.len() was reserved above
            unsafe { self.push_unchecked(value) };
        }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: The first len elements are initialized. The buffer
        // releases the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Clone for DynArray<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.handle())
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            e.handle();
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for DynArray<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, I> Index<I> for DynArray<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I> IndexMut<I> for DynArray<T>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> Eq for DynArray<T> where T: Eq {}

impl<T> PartialOrd for DynArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynArray<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynArray<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_additional(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> Extend<&'a T> for DynArray<T>
where
    T: 'a + Copy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(array: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for item in array {
            // SAFETY: At most N elements go into N slots
            unsafe { out.push_unchecked(item) };
        }
        out
    }
}

impl<T> From<&[T]> for DynArray<T>
where
    T: Clone,
{
    fn from(slice: &[T]) -> Self {
        Self::from_fn(slice.len(), |i| slice[i].clone())
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut out = Self::with_capacity(vec.len());
        out.extend(vec);
        out
    }
}

impl<T> From<DynArray<T>> for Vec<T> {
    fn from(array: DynArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
