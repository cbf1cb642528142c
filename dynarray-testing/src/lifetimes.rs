//! Every value built inside a `DynArray` is dropped exactly once, including
//! when a constructor or clone panics partway through an operation.

use crate::tracked::{Counter, Tracked};
use dynarray::DynArray;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn tracked(values: &[u32], counter: &std::rc::Rc<Counter>) -> DynArray<Tracked> {
    values.iter().map(|&v| Tracked::new(v, counter)).collect()
}

#[test]
pub fn every_operation_balances() {
    let counter = Counter::new();
    {
        let mut array = DynArray::new();
        for i in 0..100 {
            array.push(Tracked::new(i, &counter));
        }
        array.insert(0, Tracked::new(1000, &counter));
        array.insert(50, Tracked::new(1001, &counter));
        drop(array.remove(10));
        array.erase(20);
        array.pop();
        array.reserve(1000);
        array.truncate(60);
        array.resize_with(70, || Tracked::new(7, &counter));
        assert_eq!(counter.live(), 70);

        let mut iter = array.into_iter();
        iter.next();
        iter.next_back();
        assert_eq!(counter.live(), 68);
    }
    assert_eq!(counter.live(), 0);
}

#[test]
pub fn from_fn_panic_drops_built_elements() {
    let counter = Counter::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        DynArray::from_fn(5, |i| {
            if i == 3 {
                panic!("constructor failed");
            }
            Tracked::new(i as u32, &counter)
        })
    }));
    assert!(result.is_err());
    assert_eq!(counter.live(), 0);
}

#[test]
pub fn try_from_fn_error_drops_built_elements() {
    let counter = Counter::new();
    let result = DynArray::try_from_fn(5, |i| {
        if i == 2 {
            Err(i)
        } else {
            Ok(Tracked::new(i as u32, &counter))
        }
    });
    assert_eq!(result.map(|a| a.len()), Err(2));
    assert_eq!(counter.live(), 0);
}

#[test]
pub fn clone_panic_drops_partial_copy() {
    let counter = Counter::new();
    let original = tracked(&[1, 2, 3, 4, 5], &counter);
    counter.arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| original.clone()));
    counter.disarm();
    assert!(result.is_err());
    assert_eq!(counter.live(), 5);
    assert_eq!(original, [1, 2, 3, 4, 5]);
}

#[test]
pub fn clone_from_panic_leaves_target_untouched() {
    let counter = Counter::new();
    let source = tracked(&[1, 2, 3, 4, 5], &counter);
    let mut target = tracked(&[9, 8], &counter);
    let ptr = target.as_ptr();

    counter.arm(3);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    counter.disarm();

    assert!(result.is_err());
    assert_eq!(target, [9, 8]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!(counter.live(), 7);
}

#[test]
pub fn clone_from_in_place_panic_stays_consistent() {
    let counter = Counter::new();
    let source = tracked(&[1, 2, 3, 4], &counter);
    let mut target = DynArray::with_capacity(8);
    target.push(Tracked::new(9, &counter));

    counter.arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    counter.disarm();

    // The prefix was assigned and one element appended before the panic
    assert!(result.is_err());
    assert_eq!(target, [1, 2]);
    drop(target);
    drop(source);
    assert_eq!(counter.live(), 0);
}

#[test]
pub fn emplace_panic_without_reallocation() {
    let counter = Counter::new();
    let mut array = DynArray::with_capacity(8);
    array.extend([1, 2, 3].map(|v| Tracked::new(v, &counter)));

    let result = catch_unwind(AssertUnwindSafe(|| {
        array.emplace_at_with(1, || panic!("constructor failed"));
    }));

    assert!(result.is_err());
    assert_eq!(array, [1, 2, 3]);
    assert_eq!(array.capacity(), 8);
    assert_eq!(counter.live(), 3);
}

#[test]
pub fn emplace_panic_with_reallocation() {
    let counter = Counter::new();
    let mut array = tracked(&[1, 2, 3], &counter);
    let ptr = array.as_ptr();

    let result = catch_unwind(AssertUnwindSafe(|| {
        array.emplace_at_with(1, || panic!("constructor failed"));
    }));

    assert!(result.is_err());
    assert_eq!(array, [1, 2, 3]);
    assert_eq!(array.capacity(), 3);
    assert_eq!(array.as_ptr(), ptr);
    assert_eq!(counter.live(), 3);
}

#[test]
pub fn growth_never_clones() {
    let counter = Counter::new();
    let mut array = tracked(&[1, 2, 3], &counter);
    counter.arm(0);
    array.push(Tracked::new(4, &counter));
    array.insert(0, Tracked::new(0, &counter));
    array.reserve(64);
    array.resize_with(10, || Tracked::new(5, &counter));
    counter.disarm();
    assert_eq!(array[..5], [0, 1, 2, 3, 4]);
    assert_eq!(counter.live(), 10);
}
