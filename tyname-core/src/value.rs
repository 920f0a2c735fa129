//! Constants carried as types, so their values show up in signatures.
//!
//! Each primitive gets a carrier with a const generic parameter:
//! `U8<5>` carries `5u8`, `Char<'x'>` carries `'x'`. Resolving a carrier's
//! name with [`value_name_pt`](crate::value_name_pt) yields the text the
//! compiler prints for the value.

use core::fmt;

/// The primitive type behind a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ValueKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    Bool,
    Char,
}

impl ValueKind {
    /// Number of kinds.
    pub const COUNT: usize = 14;

    /// Dense index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the integer kinds.
    pub const fn is_integer(self) -> bool {
        !matches!(self, ValueKind::Bool | ValueKind::Char)
    }

    /// How the probe value of this kind is printed in a signature.
    pub const fn probe_text(self) -> &'static str {
        match self {
            ValueKind::Bool => "true",
            ValueKind::Char => "'1'",
            _ => "1",
        }
    }
}

/// A type that stands for a single constant.
pub trait ConstValue: 'static {
    /// The carried value's type. Its `Display` output is used for integers
    /// the compiler prints as a path (`u8::MAX`) instead of digits.
    type Value: Copy + fmt::Display + 'static;

    /// The carried value.
    const VALUE: Self::Value;

    /// Which primitive this carrier holds.
    const KIND: ValueKind;

    /// The same carrier instantiated with the probe value (`1`, `'1'` or
    /// `true`), used to measure signature boilerplate.
    type Probe: ConstValue<Value = Self::Value>;
}

macro_rules! carriers {
    ($($name:ident($ty:ty) = $kind:ident, probe $probe:literal;)*) => {
        $(
            #[doc = concat!("Carries a `", stringify!($ty), "` constant as a type.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name<const V: $ty>;

            impl<const V: $ty> ConstValue for $name<V> {
                type Value = $ty;
                const VALUE: $ty = V;
                const KIND: ValueKind = ValueKind::$kind;
                type Probe = $name<{ $probe }>;
            }
        )*
    };
}

carriers! {
    I8(i8) = I8, probe 1;
    I16(i16) = I16, probe 1;
    I32(i32) = I32, probe 1;
    I64(i64) = I64, probe 1;
    I128(i128) = I128, probe 1;
    Isize(isize) = Isize, probe 1;
    U8(u8) = U8, probe 1;
    U16(u16) = U16, probe 1;
    U32(u32) = U32, probe 1;
    U64(u64) = U64, probe 1;
    U128(u128) = U128, probe 1;
    Usize(usize) = Usize, probe 1;
    Bool(bool) = Bool, probe true;
    Char(char) = Char, probe '1';
}

/// Names a constant through the default signature format.
///
/// The first argument is the primitive type, the second a constant
/// expression of that type.
///
/// ```
/// assert_eq!(tyname_core::value_name!(u8, 42), "42");
/// assert_eq!(tyname_core::value_name!(bool, false), "false");
/// ```
#[macro_export]
macro_rules! value_name {
    (i8, $v:expr) => { $crate::value_name_pt::<$crate::value::I8<{ $v }>>() };
    (i16, $v:expr) => { $crate::value_name_pt::<$crate::value::I16<{ $v }>>() };
    (i32, $v:expr) => { $crate::value_name_pt::<$crate::value::I32<{ $v }>>() };
    (i64, $v:expr) => { $crate::value_name_pt::<$crate::value::I64<{ $v }>>() };
    (i128, $v:expr) => { $crate::value_name_pt::<$crate::value::I128<{ $v }>>() };
    (isize, $v:expr) => { $crate::value_name_pt::<$crate::value::Isize<{ $v }>>() };
    (u8, $v:expr) => { $crate::value_name_pt::<$crate::value::U8<{ $v }>>() };
    (u16, $v:expr) => { $crate::value_name_pt::<$crate::value::U16<{ $v }>>() };
    (u32, $v:expr) => { $crate::value_name_pt::<$crate::value::U32<{ $v }>>() };
    (u64, $v:expr) => { $crate::value_name_pt::<$crate::value::U64<{ $v }>>() };
    (u128, $v:expr) => { $crate::value_name_pt::<$crate::value::U128<{ $v }>>() };
    (usize, $v:expr) => { $crate::value_name_pt::<$crate::value::Usize<{ $v }>>() };
    (bool, $v:expr) => { $crate::value_name_pt::<$crate::value::Bool<{ $v }>>() };
    (char, $v:expr) => { $crate::value_name_pt::<$crate::value::Char<{ $v }>>() };
}
