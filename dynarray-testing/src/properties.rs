use dynarray::DynArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
    Insert(usize, u32),
    Erase(usize),
    Reserve(usize),
    Resize(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..64).prop_map(Op::Resize),
    ]
}

/// Applies `op` to the array and to a `Vec` model. Positions are wrapped
/// into the valid range.
fn apply(array: &mut DynArray<u32>, model: &mut Vec<u32>, op: Op) {
    match op {
        Op::Push(v) => {
            array.push(v);
            model.push(v);
        }
        Op::Pop => assert_eq!(array.pop(), model.pop()),
        Op::Insert(i, v) => {
            let i = i % (model.len() + 1);
            assert_eq!(*array.insert(i, v), v);
            model.insert(i, v);
        }
        Op::Erase(i) => {
            if model.is_empty() {
                return;
            }
            let i = i % model.len();
            assert_eq!(array.erase(i), i);
            model.remove(i);
        }
        Op::Reserve(n) => {
            let before = array.capacity();
            array.reserve(n);
            assert_eq!(array.capacity(), before.max(n));
        }
        Op::Resize(n) => {
            array.resize(n);
            model.resize(n, 0);
        }
    }
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut array = DynArray::new();
        let mut model = Vec::new();
        for op in ops {
            apply(&mut array, &mut model, op);
            prop_assert_eq!(array.len(), model.len());
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(&array, &model);
        }
    }

    #[test]
    fn push_pop_counts(pushes in prop::collection::vec(any::<u16>(), 0..300), pops in 0usize..300) {
        let mut array = DynArray::new();
        for &v in &pushes {
            array.push(v);
        }
        let mut popped = 0;
        for _ in 0..pops {
            if array.pop().is_some() {
                popped += 1;
            }
        }
        prop_assert_eq!(array.len(), pushes.len() - popped);
        prop_assert_eq!(&array[..], &pushes[..array.len()]);
    }

    #[test]
    fn growth_is_geometric(n in 1usize..2000) {
        let mut array = DynArray::new();
        let mut relocated = 0;
        for i in 0..n {
            let before = array.capacity();
            array.push(i);
            if array.capacity() != before {
                relocated += array.len() - 1;
                let expected = if before == 0 { 1 } else { before * 2 };
                prop_assert_eq!(array.capacity(), expected);
            }
        }
        prop_assert_eq!(array.capacity(), n.next_power_of_two());
        prop_assert!(relocated < 2 * n);
    }

    #[test]
    fn clone_is_independent(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let original: DynArray<_> = values.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), original.len());
        prop_assert_eq!(&copy, &original);
        for v in copy.iter_mut() {
            *v = v.wrapping_add(1);
        }
        prop_assert_eq!(&original, &values);
    }

    #[test]
    fn take_moves_everything(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut source: DynArray<_> = values.iter().copied().collect();
        let ptr = source.as_ptr();
        let destination = std::mem::take(&mut source);
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(destination.as_ptr(), ptr);
        prop_assert_eq!(&destination, &values);
    }
}
