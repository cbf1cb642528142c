use crate::DynArray;

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T, U $(, $($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$u) -> bool {
                self[..] == other[..]
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        uni!($t, $u $(, $($b)+)?);

        impl<T, U $(, $($b)+)?> PartialEq<$t> for $u
        where
            U: PartialEq<T>,
        {
            fn eq(&self, other: &$t) -> bool {
                self[..] == other[..]
            }
        }
    };
}

uni!(DynArray<T>, DynArray<U>);
bi!(DynArray<T>, Vec<U>);
bi!(DynArray<T>, [U]);
bi!(DynArray<T>, &[U]);
bi!(DynArray<T>, &mut [U]);
bi!(DynArray<T>, [U; N], const N: usize);
uni!(DynArray<T>, &[U; N], const N: usize);
