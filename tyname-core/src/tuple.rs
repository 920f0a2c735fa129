use crate::ConstStr;

/// Splits a [`ConstStr`] into a tuple with one `u8` per byte.
///
/// Implemented for lengths 0 through 12.
///
/// ```
/// use tyname_core::{IntoTuple, const_str};
///
/// let (a, b) = const_str!("ok").into_tuple();
/// assert_eq!((a, b), (b'o', b'k'));
/// ```
pub trait IntoTuple {
    /// `(u8, u8, ...)` with one element per byte.
    type Tuple;

    /// Performs the conversion.
    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! impl_into_tuple {
    (@byte $idx:tt) => { u8 };
    ($($len:literal => ($($idx:tt)*);)*) => {
        $(
            impl IntoTuple for ConstStr<$len> {
                type Tuple = ($(impl_into_tuple!(@byte $idx),)*);

                #[inline]
                #[allow(unused_variables)]
                fn into_tuple(self) -> Self::Tuple {
                    let bytes = self.into_array();
                    ($(bytes[$idx],)*)
                }
            }
        )*
    };
}

impl_into_tuple! {
    0 => ();
    1 => (0);
    2 => (0 1);
    3 => (0 1 2);
    4 => (0 1 2 3);
    5 => (0 1 2 3 4);
    6 => (0 1 2 3 4 5);
    7 => (0 1 2 3 4 5 6);
    8 => (0 1 2 3 4 5 6 7);
    9 => (0 1 2 3 4 5 6 7 8);
    10 => (0 1 2 3 4 5 6 7 8 9);
    11 => (0 1 2 3 4 5 6 7 8 9 10);
    12 => (0 1 2 3 4 5 6 7 8 9 10 11);
}
