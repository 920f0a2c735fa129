//! Names sliced out of signature strings.
//!
//! A signature is a string the compiler produces for a generic item, with
//! the generic argument spelled out somewhere inside it. The text around the
//! argument is never searched for: its length is measured once from a probe
//! instantiation (`i32` for types, `1` for values) and the real signature is
//! cut at those offsets.
//!
//! The boilerplate format is compiler- and version-specific. If it ever
//! changes shape between the probe and the real argument the offsets are
//! wrong; slices are clamped so the result is then a garbled or empty name,
//! never a panic. The `try_` functions report the mismatch instead.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;
use core::marker::PhantomData;
use std::sync::{PoisonError, RwLock};

use crate::NameError;
use crate::tracing_macros::debug;
use crate::value::ConstValue;

mod format;
pub use format::*;

/// Bytes to cut from the front and back of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    /// Boilerplate before the name.
    pub prefix: usize,
    /// Boilerplate after the name.
    pub suffix: usize,
}

impl Offsets {
    /// Derives offsets from a probe signature of `probe_len` bytes that ends
    /// with a `tail_len`-byte tail, of which the last `suffix_len` bytes are
    /// boilerplate.
    #[inline]
    pub const fn measure(probe_len: usize, tail_len: usize, suffix_len: usize) -> Self {
        Self {
            prefix: probe_len.saturating_sub(tail_len),
            suffix: suffix_len,
        }
    }

    /// The name inside `signature`, or `None` if the offsets overrun it or
    /// split a character.
    pub fn apply(self, signature: &str) -> Option<&str> {
        let end = signature.len().checked_sub(self.suffix)?;
        signature.get(self.prefix..end)
    }

    /// Like [`apply`](Self::apply), but clamps the range into `signature`
    /// and yields an empty name where it cannot be cut cleanly.
    pub fn clamp(self, signature: &str) -> &str {
        let start = self.prefix.min(signature.len());
        let end = signature.len().saturating_sub(self.suffix).max(start);
        signature.get(start..end).unwrap_or_default()
    }
}

/// Name extraction through the signature format `F`.
pub struct Signature<F = DefaultSignature>(PhantomData<F>);

impl<F: SignatureFormat> Signature<F> {
    /// The name of `T`.
    ///
    /// ```
    /// use tyname_core::{FnItemSignature, Signature, TupleSignature};
    ///
    /// assert_eq!(Signature::<FnItemSignature>::type_name::<char>(), "char");
    /// assert_eq!(Signature::<TupleSignature>::type_name::<&str>(), "&str");
    /// ```
    pub fn type_name<T: ?Sized>() -> &'static str {
        let signature = F::type_signature::<T>();
        let offsets = F::type_offsets();
        let name = offsets.clamp(signature);
        if offsets.apply(signature).is_none() {
            debug!(signature, ?offsets, "type signature does not fit the measured offsets");
        }
        name
    }

    /// The name of `T`, or why it does not fit the measured boilerplate.
    pub fn try_type_name<T: ?Sized>() -> Result<&'static str, NameError> {
        let signature = F::type_signature::<T>();
        Self::cut(signature, F::type_offsets())
    }

    /// The text of the value carried by `C`.
    ///
    /// Integers always come out as decimal digits, even where the compiler
    /// spells an extreme value as a path such as `u8::MAX`.
    pub fn value_name<C: ConstValue>() -> &'static str {
        let signature = F::value_signature::<C>();
        let offsets = F::value_offsets::<C>();
        let name = offsets.clamp(signature);
        if offsets.apply(signature).is_none() {
            debug!(signature, ?offsets, "value signature does not fit the measured offsets");
        }
        integer_digits::<C>(name)
    }

    /// The text of the value carried by `C`, or why it does not fit.
    pub fn try_value_name<C: ConstValue>() -> Result<&'static str, NameError> {
        let signature = F::value_signature::<C>();
        Self::cut(signature, F::value_offsets::<C>()).map(integer_digits::<C>)
    }

    /// The name of an enumerator, in this format's [`EnumeratorStyle`].
    pub fn enumerator_name<E: Enumerator>(value: E) -> String {
        match F::TABLE.enumerators {
            EnumeratorStyle::Name => alloc::format!("{value:?}"),
            EnumeratorStyle::OrdinalFallback => {
                alloc::format!("({}){}", Self::type_name::<E>(), value.ordinal())
            }
        }
    }

    fn cut(signature: &'static str, offsets: Offsets) -> Result<&'static str, NameError> {
        offsets.apply(signature).ok_or(NameError::SignatureMismatch {
            signature,
            prefix: offsets.prefix,
            suffix: offsets.suffix,
        })
    }
}

/// Whether `text` is an optionally negative run of decimal digits.
fn is_decimal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `text` itself, unless `C` carries an integer that was not printed as
/// digits; then `C::VALUE` in decimal, leaked once per carrier.
fn integer_digits<C: ConstValue>(text: &'static str) -> &'static str {
    static RENDERED: RwLock<BTreeMap<TypeId, &'static str>> = RwLock::new(BTreeMap::new());

    if !C::KIND.is_integer() || is_decimal(text) {
        return text;
    }

    let key = TypeId::of::<C>();
    if let Some(digits) = RENDERED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return *digits;
    }

    let mut rendered = RENDERED.write().unwrap_or_else(PoisonError::into_inner);
    *rendered.entry(key).or_insert_with(|| {
        debug!(text, "integer constant not printed as digits, rendering its value");
        let digits: &'static str = Box::leak(alloc::format!("{}", C::VALUE).into_boxed_str());
        digits
    })
}

/// A field-less enum whose values can be named.
///
/// Implement it with [`impl_enumerator!`](crate::impl_enumerator).
///
/// Rust never spells an enum variant inside a signature, so formats with
/// [`EnumeratorStyle::Name`] take the variant name from the
/// [`Debug`](fmt::Debug) output. Derive `Debug`: a hand-written impl is
/// reported verbatim, whatever it prints. [`EnumeratorStyle::OrdinalFallback`]
/// does not look at `Debug` at all.
pub trait Enumerator: Copy + fmt::Debug + 'static {
    /// The discriminant.
    fn ordinal(self) -> i128;
}

/// Implements [`Enumerator`] for field-less enums.
///
/// ```
/// #[derive(Debug, Clone, Copy)]
/// enum Axis { X, Y }
/// tyname_core::impl_enumerator!(Axis);
///
/// use tyname_core::{FnItemSignature, Signature};
/// assert_eq!(Signature::<FnItemSignature>::enumerator_name(Axis::Y), "Y");
/// ```
#[macro_export]
macro_rules! impl_enumerator {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Enumerator for $ty {
                #[inline]
                fn ordinal(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

/// The name of `T` from the default signature format.
///
/// ```
/// assert_eq!(tyname_core::type_name_pt::<&i32>(), "&i32");
/// ```
#[inline]
pub fn type_name_pt<T: ?Sized>() -> &'static str {
    Signature::<DefaultSignature>::type_name::<T>()
}

/// The text of the value carried by `C` from the default signature format.
///
/// See also [`value_name!`](crate::value_name).
#[inline]
pub fn value_name_pt<C: ConstValue>() -> &'static str {
    Signature::<DefaultSignature>::value_name::<C>()
}

/// The name of an enumerator from the default signature format.
#[inline]
pub fn enumerator_name<E: Enumerator>(value: E) -> String {
    Signature::<DefaultSignature>::enumerator_name(value)
}
