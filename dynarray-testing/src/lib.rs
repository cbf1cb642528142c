#![cfg(test)]

mod lifetimes;
mod properties;
mod tracked;

use dynarray::{AllocError, DynArray, dynarray};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct El {
    foo: u64,
    bar: u8,
}

const A: El = El { foo: 0, bar: 1 };
const B: El = El { foo: 4, bar: 5 };
const C: El = El { foo: 8, bar: 9 };
const D: El = El { foo: 12, bar: 13 };
const E: El = El { foo: 16, bar: 17 };

const ABCDE: [El; 5] = [A, B, C, D, E];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Unit;

#[test]
pub fn zero_sized() {
    let mut array = DynArray::<Unit>::new();
    for _ in 0..5 {
        array.push(Unit);
    }
    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 8);
    array.insert(2, Unit);
    assert_eq!(array.remove(0), Unit);
    for _ in 0..5 {
        assert_eq!(array.pop(), Some(Unit));
    }
    assert_eq!(array.pop(), None);
}

#[test]
pub fn zero_sized_with_len() {
    let array = DynArray::<()>::with_len(1000);
    assert_eq!(array.len(), 1000);
    assert_eq!(array.into_iter().count(), 1000);
}

#[test]
pub fn move_only_elements() {
    let mut array = DynArray::new();
    for i in 0..10 {
        array.push(Box::new(i));
    }
    array.insert(0, Box::new(-1));
    array.reserve(100);
    array.insert(5, Box::new(100));
    let values: Vec<i32> = array.into_iter().map(|b| *b).collect();
    assert_eq!(values, [-1, 0, 1, 2, 3, 100, 4, 5, 6, 7, 8, 9]);
}

#[test]
pub fn with_capacity() {
    let mut array = DynArray::<El>::with_capacity(5);
    assert_eq!(array.capacity(), 5);
    assert_eq!(array.len(), 0);
    for element in ABCDE.into_iter() {
        array.push(element);
    }
    assert_eq!(array.capacity(), 5);
    assert_eq!(array.len(), 5);
}

#[test]
pub fn from_iter() {
    let array: DynArray<_> = ABCDE.into_iter().collect();
    assert!(array.into_iter().eq(ABCDE.into_iter()));
}

#[test]
pub fn from_impls() {
    let expected: DynArray<_> = ABCDE.into_iter().collect();
    assert_eq!(expected, DynArray::from(ABCDE));
    assert_eq!(expected, DynArray::from(&ABCDE[..]));
    assert_eq!(expected, DynArray::from(ABCDE.to_vec()));
}

#[test]
pub fn extend() {
    let mut array: DynArray<_> = [A, B].into();
    array.extend([C, D]);
    array.extend(&[E]);
    assert_eq!(array, ABCDE);
    array.extend_from_slice(&[A]);
    assert_eq!(array.last(), Some(&A));
}

#[test]
pub fn iter_mut() {
    let mut array: DynArray<_> = ABCDE.into();
    for el in array.iter_mut() {
        el.foo += 1;
        el.bar += 2;
    }
    for (borrowed, owned) in array.iter().zip(ABCDE.into_iter()) {
        assert_eq!(borrowed.foo, owned.foo + 1);
        assert_eq!(borrowed.bar, owned.bar + 2);
    }
}

#[test]
pub fn iteration_range_is_contiguous() {
    let array: DynArray<_> = ABCDE.into();
    let range = array.as_ptr_range();
    assert_eq!(range.start, array.as_ptr());
    assert_eq!(unsafe { range.end.offset_from(range.start) }, 5);
}

#[test]
pub fn clone() {
    let expected: DynArray<_> = ABCDE.into();
    let actual = expected.clone();
    assert_eq!(expected, actual);
}

#[test]
pub fn clone_from() {
    let mut dst: DynArray<_> = ABCDE.into();
    let src: DynArray<_> = [A, A, A].into();
    dst.clone_from(&src);
    assert_eq!(dst, src);
    assert_eq!(dst.capacity(), 5);
}

#[test]
pub fn ordering() {
    let cases = [
        (&[][..], &[][..]),
        (&[A, B, C][..], &[A, B, C][..]),
        (&[A, B, B][..], &[A, B, C][..]),
        (&[A, B, D][..], &[A, B, C][..]),
        (&[A, B, C][..], &[A, B, C, A][..]),
        (&[A, B, C, A][..], &[A, B, C][..]),
    ];

    for (l, r) in cases {
        let expected = l.cmp(r);
        let l: DynArray<_> = l.into();
        let r: DynArray<_> = r.into();
        assert_eq!(l.cmp(&r), expected);
        assert_eq!(l.partial_cmp(&r), Some(expected));
        assert_eq!(l == r, expected.is_eq());
    }
}

#[test]
pub fn debug() {
    let slice = format!("{:?}", ABCDE);
    let array = format!("{:?}", DynArray::from(ABCDE));
    assert_eq!(slice, array);
}

#[test]
pub fn hashing() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut expected = DefaultHasher::new();
    ABCDE[..].hash(&mut expected);

    let mut actual = DefaultHasher::new();
    let array: DynArray<_> = ABCDE.into();
    array.hash(&mut actual);

    assert_eq!(actual.finish(), expected.finish());
}

#[test]
pub fn checked_and_unchecked_access() {
    let array: DynArray<_> = ABCDE.into();
    assert_eq!(array.get(2), Some(&C));
    assert_eq!(array.get(5), None);
    assert_eq!(unsafe { *array.get_unchecked(4) }, E);
}

#[test]
#[should_panic]
pub fn index_out_of_bounds() {
    let array: DynArray<_> = ABCDE.into();
    let _el = array[5];
}

#[test]
pub fn macro_no_elements() {
    let a: DynArray<El> = DynArray::new();
    let b: DynArray<El> = dynarray![];
    assert_eq!(a, b);
    assert_eq!(b.capacity(), 0);
}

#[test]
pub fn macro_repeat() {
    let array = dynarray![A; 3];
    assert_eq!(array, [A, A, A]);
}

#[test]
pub fn try_reserve_overflow_leaves_array() {
    let mut array: DynArray<_> = ABCDE.into();
    let ptr = array.as_ptr();
    assert_eq!(
        array.try_reserve(usize::MAX),
        Err(AllocError::CapacityOverflow)
    );
    assert_eq!(array, ABCDE);
    assert_eq!(array.capacity(), 5);
    assert_eq!(array.as_ptr(), ptr);
}

#[test]
pub fn failed_growth_leaves_array() {
    let full = usize::MAX / 2 + 1;
    let mut array = DynArray::<()>::with_capacity(full);
    // SAFETY: () needs no initialization and full == capacity
    unsafe { array.set_len(full) };

    let mut called = false;
    let result = array.try_emplace_back_with(|| called = true).map(|_| ());
    assert_eq!(result, Err(AllocError::CapacityOverflow));
    assert_eq!(array.try_push(()), Err(AllocError::CapacityOverflow));
    let result = array.try_emplace_at_with(0, || called = true).map(|_| ());
    assert_eq!(result, Err(AllocError::CapacityOverflow));
    assert_eq!(array.try_insert(0, ()).map(|_| ()), Err(AllocError::CapacityOverflow));

    assert!(!called);
    assert_eq!(array.len(), full);
    assert_eq!(array.capacity(), full);
}

#[test]
pub fn slice_conversions() {
    use std::borrow::{Borrow, BorrowMut};

    let mut array: DynArray<_> = ABCDE.into();
    let slice: &[El] = array.as_ref();
    assert_eq!(slice, ABCDE);
    array.as_mut()[0] = E;
    let borrowed: &mut [El] = array.borrow_mut();
    borrowed[4] = A;
    let slice: &[El] = array.borrow();
    assert_eq!(slice, [E, B, C, D, A]);
}

#[test]
pub fn try_push_and_insert() {
    let mut array = DynArray::new();
    array.try_push(B).unwrap();
    *array.try_insert(0, A).unwrap() = A;
    array.try_resize_with(4, || C).unwrap();
    assert_eq!(array, [A, B, C, C]);
}

#[test]
pub fn clear_keeps_capacity() {
    let mut array: DynArray<_> = ABCDE.into();
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 5);
}

#[test]
pub fn send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DynArray<El>>();
    assert_send_sync::<dynarray::RawBuffer<El>>();
    assert_send_sync::<dynarray::IntoIter<El>>();
}
