/// Creates a [`DynArray`] containing the arguments.
///
/// Works like [`vec!`]: either a list of elements or a single element and a
/// length. The capacity of the result equals its length.
///
/// # Examples
///
/// ```
/// # use dynarray::{DynArray, dynarray};
/// let empty: DynArray<u8> = dynarray![];
/// assert!(empty.is_empty());
///
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
///
/// let zeros = dynarray![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// assert_eq!(zeros.capacity(), 4);
/// ```
///
/// [`DynArray`]: crate::DynArray
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };

    ($elem:expr; $n:expr) => {
        $crate::DynArray::from_elem($elem, $n)
    };

    ($($x:expr),+ $(,)?) => {
        $crate::DynArray::from([$($x),+])
    };
}
