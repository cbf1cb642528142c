use crate::{DynArray, RawBuffer};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ptr, slice,
};

/// An iterator that moves out of a [`DynArray`].
///
/// This struct is created by the [`into_iter`] method, provided by the
/// [`IntoIterator`] trait.
///
/// [`into_iter`]: crate::DynArray::into_iter
pub struct IntoIter<T> {
    buffer: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots [start, end) are initialized
        unsafe { slice::from_raw_parts(self.buffer.offset(self.start), self.end - self.start) }
    }

    /// Returns the remaining items as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Slots [start, end) are initialized
        unsafe { slice::from_raw_parts_mut(self.buffer.offset(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            // SAFETY: start < end, so the slot is initialized. Advancing
            // start gives up ownership of it.
            let out = unsafe { self.buffer.offset(self.start).read() };
            self.start += 1;
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            self.end -= 1;
            // SAFETY: The slot at the old end - 1 is initialized
            Some(unsafe { self.buffer.offset(self.end).read() })
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The items not yet yielded are still owned here. The buffer
        // releases the block afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Debug for IntoIter<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buffer, len) = self.into_raw_parts();
        IntoIter {
            buffer,
            start: 0,
            end: len,
        }
    }
}
