//! A contiguous growable array built in two layers.
//!
//! [`RawBuffer`] owns a block of uninitialized storage for a fixed number of
//! slots. It allocates and releases memory and nothing else.
//!
//! [`DynArray`] owns a `RawBuffer` and a length. It constructs and drops
//! elements in the buffer, grows it by reallocating and moving elements
//! across, and exposes the usual vector API on top.
//!
//! ```
//! # use dynarray::{DynArray, dynarray};
//! let mut array = DynArray::with_len(2);
//! array[1] = 7;
//! array.push(3);
//! assert_eq!(array, [0, 7, 3]);
//! assert_eq!(array.capacity(), 4);
//!
//! let copy = array.clone();
//! assert_eq!(copy.capacity(), copy.len());
//! assert_eq!(copy, dynarray![0, 7, 3]);
//! ```
//!
//! Allocation failure either aborts through [`handle_alloc_error`], like
//! the standard collections, or is returned as an [`AllocError`] from the
//! `try_` methods.
//!
//! [`handle_alloc_error`]: std::alloc::handle_alloc_error

mod dyn_array;
mod eq_impl;
mod error;
mod into_iter;
mod macros;
mod raw_buffer;
mod relocate;

#[cfg(doctest)]
mod borrow_tests;

pub use dyn_array::DynArray;
pub use error::AllocError;
pub use into_iter::IntoIter;
pub use raw_buffer::RawBuffer;

#[cfg(test)]
mod tests {
    use crate::{DynArray, dynarray};

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    struct El {
        foo: u64,
        bar: u8,
        baz: [u32; 2],
    }

    const A: El = El {
        foo: 0,
        bar: 1,
        baz: [2, 3],
    };

    const B: El = El {
        foo: 4,
        bar: 5,
        baz: [6, 7],
    };

    const C: El = El {
        foo: 8,
        bar: 9,
        baz: [10, 11],
    };

    const D: El = El {
        foo: 12,
        bar: 13,
        baz: [14, 15],
    };

    const E: El = El {
        foo: 16,
        bar: 17,
        baz: [18, 19],
    };

    const ABCDE: [El; 5] = [A, B, C, D, E];
    const ALL_A: [El; 3] = [A, A, A];

    #[test]
    pub fn push_and_pop() {
        let mut array = DynArray::new();
        for element in ABCDE.into_iter() {
            array.push(element);
        }
        assert_eq!(array, ABCDE);
        for element in ABCDE.into_iter().rev() {
            assert_eq!(Some(element), array.pop());
        }
        assert_eq!(array.pop(), None);
    }

    #[test]
    pub fn insert() {
        test_insert(0, [B, A, A, A]);
        test_insert(1, [A, B, A, A]);
        test_insert(2, [A, A, B, A]);
        test_insert(3, [A, A, A, B]);
    }

    fn test_insert(index: usize, expected: [El; 4]) {
        // Full buffer, so the insert reallocates
        let mut array = DynArray::from(ALL_A);
        assert_eq!(array.capacity(), 3);
        assert_eq!(*array.insert(index, B), B);
        assert_eq!(array, expected);
        assert_eq!(array.capacity(), 6);

        // Spare capacity, so elements shift in place
        let mut array = DynArray::with_capacity(8);
        array.extend(ALL_A);
        let ptr = array.as_ptr();
        assert_eq!(*array.insert(index, B), B);
        assert_eq!(array, expected);
        assert_eq!(array.as_ptr(), ptr);
    }

    #[test]
    pub fn remove() {
        test_remove(0, A, [B, C, D, E]);
        test_remove(1, B, [A, C, D, E]);
        test_remove(2, C, [A, B, D, E]);
        test_remove(3, D, [A, B, C, E]);
        test_remove(4, E, [A, B, C, D]);
    }

    fn test_remove(index: usize, expected_return: El, expected_contents: [El; 4]) {
        let mut array = DynArray::from(ABCDE);
        assert_eq!(expected_return, array.remove(index));
        assert_eq!(array, expected_contents);
    }

    #[test]
    pub fn erase() {
        let mut array = DynArray::from(ABCDE);
        assert_eq!(array.erase(1), 1);
        assert_eq!(array[1], C);
        assert_eq!(array.erase(3), 3);
        assert_eq!(array, [A, C, D]);
        assert_eq!(array.erase(3), 3);
        assert_eq!(array, [A, C, D]);
    }

    #[test]
    #[should_panic(expected = "removal index (is 3) should be < len (is 3)")]
    pub fn remove_out_of_bounds() {
        let mut array = DynArray::from(ALL_A);
        array.remove(3);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    pub fn insert_out_of_bounds() {
        let mut array = DynArray::from(ALL_A);
        array.insert(4, B);
    }

    #[test]
    pub fn emplace_returns_new_element() {
        let mut array = DynArray::<El>::new();
        let el = array.emplace_back_with(El::default);
        el.bar = 42;
        array.emplace_at_with(0, || A).foo = 100;
        assert_eq!(array[0].foo, 100);
        assert_eq!(array[1].bar, 42);
    }

    #[test]
    pub fn growth_doubles() {
        let mut array = DynArray::new();
        let mut capacities = vec![];
        for i in 0..9 {
            array.push(i);
            capacities.push(array.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    pub fn reserve_smaller_is_noop() {
        let mut array = DynArray::from(ABCDE);
        array.reserve(10);
        let ptr = array.as_ptr();
        array.reserve(5);
        array.reserve(10);
        assert_eq!(array.capacity(), 10);
        assert_eq!(array.as_ptr(), ptr);
        assert_eq!(array, ABCDE);
    }

    #[test]
    pub fn resize() {
        let mut array = DynArray::from([A, B]);
        array.resize(4);
        assert_eq!(array, [A, B, El::default(), El::default()]);
        assert_eq!(array.capacity(), 4);
        array.resize(1);
        assert_eq!(array, [A]);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    pub fn clone_has_no_spare_capacity() {
        let mut original = DynArray::with_capacity(16);
        original.extend(ABCDE);
        let mut copy = original.clone();
        assert_eq!(copy.len(), 5);
        assert_eq!(copy.capacity(), 5);
        copy[0] = E;
        assert_eq!(original[0], A);
    }

    #[test]
    pub fn clone_from_in_place() {
        let mut target = DynArray::with_capacity(8);
        target.extend([E, E, E, E, E, E]);
        let ptr = target.as_ptr();

        target.clone_from(&DynArray::from(ALL_A));
        assert_eq!(target, ALL_A);
        assert_eq!(target.as_ptr(), ptr);

        target.clone_from(&DynArray::from(ABCDE));
        assert_eq!(target, ABCDE);
        assert_eq!(target.as_ptr(), ptr);
    }

    #[test]
    pub fn clone_from_reallocates() {
        let mut target = DynArray::from([E]);
        target.clone_from(&DynArray::from(ABCDE));
        assert_eq!(target, ABCDE);
        assert_eq!(target.capacity(), 5);
    }

    #[test]
    pub fn take_leaves_empty() {
        let mut source = DynArray::from(ABCDE);
        let moved = std::mem::take(&mut source);
        assert_eq!(source.len(), 0);
        assert_eq!(source.capacity(), 0);
        assert_eq!(moved, ABCDE);
    }

    #[test]
    pub fn into_iter_both_ends() {
        let mut iter = DynArray::from(ABCDE).into_iter();
        assert_eq!(iter.next(), Some(A));
        assert_eq!(iter.next_back(), Some(E));
        assert_eq!(iter.as_slice(), [B, C, D]);
        assert_eq!(iter.len(), 3);
    }

    #[test]
    pub fn scenario_a() {
        let mut a = DynArray::new();
        a.push(1);
        a.push(2);
        a.push(3);
        assert_eq!(a.len(), 3);
        assert_eq!((a[0], a[1], a[2]), (1, 2, 3));
    }

    #[test]
    pub fn scenario_b() {
        let a = DynArray::<i32>::with_len(5);
        assert_eq!(a.len(), 5);
        assert!(a.iter().all(|&x| x == 0));
    }

    #[test]
    pub fn scenario_c_and_d() {
        let mut a = dynarray![1, 2, 3];
        a.insert(1, 9);
        assert_eq!(a, [1, 9, 2, 3]);
        assert_eq!(a.len(), 4);

        let next = a.erase(1);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a[next], 2);
    }

    #[test]
    pub fn scenario_e() {
        let mut a = dynarray![1, 2, 3];
        for _ in 0..3 {
            assert!(a.pop().is_some());
        }
        assert_eq!(a.len(), 0);
        assert_eq!(a.pop(), None);
    }

    #[test]
    pub fn collect_and_compare() {
        let array: DynArray<_> = (0..4).collect();
        assert_eq!(array, vec![0, 1, 2, 3]);
        assert_eq!(vec![0, 1, 2, 3], array);
        assert_eq!(&array[1..3], [1, 2]);
        assert_eq!(Vec::from(array), [0, 1, 2, 3]);
    }

    #[test]
    pub fn debug_as_list() {
        assert_eq!(format!("{:?}", dynarray![1, 2]), "[1, 2]");
    }
}
