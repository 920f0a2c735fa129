//! Qualifier strings for compound types, built while compiling.
//!
//! A type such as `&mut [[u8; 3]; 2]` is split into a base (`u8`) and a
//! qualifier string (`[2][3]&mut`). The base is named at run time; the
//! qualifiers are a constant assembled from the structure of the type.
//!
//! Qualifiers read from the base outwards, east-style: array extents come
//! first, outermost extent leftmost, and references or pointers follow
//! whatever they point at. When an array or slice element is itself a
//! reference or pointer, the element's qualifiers are parenthesized.
//!
//! | type                  | base | qualifiers  |
//! |-----------------------|------|-------------|
//! | `[[[u8; 3]; 2]; 1]`   | `u8` | `[1][2][3]` |
//! | `&mut [u8; 4]`        | `u8` | `[4]&mut`   |
//! | `[&u8; 2]`            | `u8` | `[2](&)`    |
//! | `*const [i32]`        | `i32`| `[]*const`  |

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::ConstStrBuf;

/// Room for qualifier strings. Enough for eight nested extents of
/// ten digits each with several layers of pointers on top.
pub const QUALIFIER_CAPACITY: usize = 128;

/// A qualifier string.
pub type Qualifiers = ConstStrBuf<QUALIFIER_CAPACITY>;

/// Splits a type into a base and its qualifiers.
///
/// Implemented for primitives, `str`, common standard containers, arrays,
/// slices, references and raw pointers. Other types opt in with
/// [`impl_unqualified!`](crate::impl_unqualified).
pub trait Qualified {
    /// The type left once every qualifier is peeled off.
    type Base: ?Sized;

    /// The qualifiers around [`Self::Base`].
    const QUALIFIERS: Qualifiers;

    /// Whether the outermost layer is a reference or raw pointer.
    const INDIRECT: bool;
}

/// Qualifiers of an element inside an array or slice.
const fn element<T: Qualified + ?Sized>(outer: Qualifiers) -> Qualifiers {
    if T::INDIRECT {
        outer.push_str("(").push_buf(&T::QUALIFIERS).push_str(")")
    } else {
        outer.push_buf(&T::QUALIFIERS)
    }
}

impl<T: Qualified, const N: usize> Qualified for [T; N] {
    type Base = T::Base;
    const QUALIFIERS: Qualifiers =
        element::<T>(Qualifiers::from_literal("[").push_decimal(N).push_str("]"));
    const INDIRECT: bool = false;
}

impl<T: Qualified> Qualified for [T] {
    type Base = T::Base;
    const QUALIFIERS: Qualifiers = element::<T>(Qualifiers::from_literal("[]"));
    const INDIRECT: bool = false;
}

macro_rules! indirect {
    ($($ty:ty => $text:literal;)*) => {
        $(
            impl<T: Qualified + ?Sized> Qualified for $ty {
                type Base = T::Base;
                const QUALIFIERS: Qualifiers = T::QUALIFIERS.push_str($text);
                const INDIRECT: bool = true;
            }
        )*
    };
}

indirect! {
    &T => "&";
    &mut T => "&mut";
    *const T => "*const";
    *mut T => "*mut";
}

/// Declares types as bases with no qualifiers.
///
/// ```
/// use tyname_core::{impl_unqualified, type_name};
///
/// struct Meters(f64);
/// struct Tagged<T>(T);
///
/// impl_unqualified!(Meters);
/// impl_unqualified!(impl<T> Tagged<T>);
///
/// assert_eq!(type_name::<[Meters; 2]>().qualifiers(), "[2]");
/// assert!(!type_name::<Tagged<u8>>().has_qualifiers());
/// ```
#[macro_export]
macro_rules! impl_unqualified {
    (impl<$($param:ident),+ $(,)?> $ty:ty) => {
        impl<$($param),+> $crate::Qualified for $ty {
            type Base = Self;
            const QUALIFIERS: $crate::Qualifiers = $crate::Qualifiers::new();
            const INDIRECT: bool = false;
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Qualified for $ty {
                type Base = Self;
                const QUALIFIERS: $crate::Qualifiers = $crate::Qualifiers::new();
                const INDIRECT: bool = false;
            }
        )+
    };
}

impl_unqualified!(
    (), bool, char, str, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, String,
);

impl_unqualified!(impl<T> Vec<T>);
impl_unqualified!(impl<T> VecDeque<T>);
impl_unqualified!(impl<T> BTreeSet<T>);
impl_unqualified!(impl<K, V> BTreeMap<K, V>);
impl_unqualified!(impl<T> Option<T>);
impl_unqualified!(impl<T, E> Result<T, E>);
impl_unqualified!(impl<T> PhantomData<T>);

impl<T: ?Sized> Qualified for Box<T> {
    type Base = Self;
    const QUALIFIERS: Qualifiers = Qualifiers::new();
    const INDIRECT: bool = false;
}

impl<T: ?Sized> Qualified for Rc<T> {
    type Base = Self;
    const QUALIFIERS: Qualifiers = Qualifiers::new();
    const INDIRECT: bool = false;
}

impl<T: ?Sized> Qualified for Arc<T> {
    type Base = Self;
    const QUALIFIERS: Qualifiers = Qualifiers::new();
    const INDIRECT: bool = false;
}

impl<T: ?Sized + ToOwned> Qualified for Cow<'_, T> {
    type Base = Self;
    const QUALIFIERS: Qualifiers = Qualifiers::new();
    const INDIRECT: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Of<T: ?Sized>(PhantomData<T>);

    impl<T: Qualified + ?Sized> Of<T> {
        const QUALS: &'static Qualifiers = &T::QUALIFIERS;
    }

    fn quals<T: Qualified + ?Sized>() -> &'static str {
        Of::<T>::QUALS.as_str()
    }

    #[tyname_testhelpers::test]
    fn bases_are_unqualified() {
        assert_eq!(quals::<u8>(), "");
        assert_eq!(quals::<str>(), "");
        assert_eq!(quals::<Vec<[u8; 4]>>(), "");
        assert_eq!(quals::<Box<dyn core::any::Any>>(), "");
    }

    #[tyname_testhelpers::test]
    fn nested_arrays_list_outermost_first() {
        assert_eq!(quals::<[u8; 7]>(), "[7]");
        assert_eq!(quals::<[[[u8; 3]; 2]; 1]>(), "[1][2][3]");
        assert_eq!(quals::<[[bool; 1000]; 0]>(), "[0][1000]");
    }

    #[tyname_testhelpers::test]
    fn indirection_follows_its_target() {
        assert_eq!(quals::<&u8>(), "&");
        assert_eq!(quals::<&mut [[[u8; 3]; 2]; 1]>(), "[1][2][3]&mut");
        assert_eq!(quals::<*const [i32]>(), "[]*const");
        assert_eq!(quals::<&&mut *mut str>(), "*mut&mut&");
    }

    #[tyname_testhelpers::test]
    fn indirect_elements_are_grouped() {
        assert_eq!(quals::<[&u8; 2]>(), "[2](&)");
        assert_eq!(quals::<[[*mut u8; 2]; 3]>(), "[3][2](*mut)");
        assert_eq!(quals::<&[&[u16]]>(), "[]([]&)&");
    }

    #[tyname_testhelpers::test]
    fn extents_render_in_decimal() {
        assert_eq!(quals::<[(); usize::MAX]>(), format!("[{}]", usize::MAX));
    }

    #[tyname_testhelpers::test]
    fn qualifiers_are_constants() {
        const Q: Qualifiers = <&mut [[u16; 10]; 4] as Qualified>::QUALIFIERS;
        static_assertions::const_assert!(Q.len() == "[4][10]&mut".len());
        assert_eq!(Q, "[4][10]&mut");
    }
}
