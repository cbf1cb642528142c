//! Bitwise element relocation.
//!
//! Elements leave their old slot by move when the move cannot fail, and by
//! copy otherwise. A Rust move is a bitwise copy that never fails and never
//! runs user code, so every relocation here is a move: the source slots are
//! treated as uninitialized afterwards and must not be dropped. No
//! [`Clone`] implementation is ever called while elements are in transit.

use std::ptr;

/// Moves `count` elements from `src` into the uninitialized slots at `dst`.
///
/// # Safety
///
/// - `src` must point to `count` initialized elements
/// - `dst` must be valid for `count` writes
/// - the two ranges must not overlap
///
/// The source slots are logically uninitialized afterwards.
pub(crate) unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    // SAFETY: Guaranteed by the caller
    unsafe { ptr::copy_nonoverlapping(src, dst, count) };
}

/// Opens a hole at `index` by moving `[index, len)` one slot to the right.
///
/// Elements move starting from the back so that no slot is overwritten
/// before it has been read.
///
/// # Safety
///
/// - `base` must point to `len` initialized elements followed by at least
///   one writable slot
/// - `index <= len`
///
/// Afterwards `[index + 1, len + 1)` is initialized and slot `index` is
/// logically uninitialized.
pub(crate) unsafe fn shift_right<T>(base: *mut T, index: usize, len: usize) {
    for i in (index..len).rev() {
        // SAFETY: Slots i and i + 1 are in bounds and distinct
        unsafe { ptr::copy_nonoverlapping(base.add(i), base.add(i + 1), 1) };
    }
}

/// Closes the hole at `index` by moving `[index + 1, len)` one slot to the
/// left.
///
/// Elements move front to back so that no slot is overwritten before it has
/// been read.
///
/// # Safety
///
/// - `base` must point to `len` slots of which all but `index` are
///   initialized
/// - `index < len`
///
/// Afterwards `[index, len - 1)` is initialized and slot `len - 1` is
/// logically uninitialized.
pub(crate) unsafe fn shift_left<T>(base: *mut T, index: usize, len: usize) {
    for i in index + 1..len {
        // SAFETY: Slots i - 1 and i are in bounds and distinct
        unsafe { ptr::copy_nonoverlapping(base.add(i), base.add(i - 1), 1) };
    }
}

#[cfg(test)]
mod tests {
    use super::{shift_left, shift_right};

    #[test]
    fn shifts_preserve_order() {
        let mut slots = [1, 2, 3, 4, 0];
        unsafe { shift_right(slots.as_mut_ptr(), 1, 4) };
        assert_eq!(slots, [1, 2, 2, 3, 4]);
        slots[1] = 9;
        unsafe { shift_left(slots.as_mut_ptr(), 1, 5) };
        assert_eq!(&slots[..4], [1, 2, 3, 4]);
    }
}
