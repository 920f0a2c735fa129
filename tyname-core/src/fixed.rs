//! Fixed-length byte strings whose length is part of the type.
//!
//! Everything here is a `const fn`, so strings can be assembled while the
//! compiler evaluates constants. Length mismatches are assertion failures,
//! which surface as compile errors in const context.

use core::fmt::{self, Write as _};
use core::ops::Index;
use core::str::Utf8Error;

/// An immutable, value-semantic sequence of exactly `N` bytes.
///
/// There is no implicit NUL terminator; use [`ConstStr::with_nul`] and
/// [`ConstStr::strip_nul`] to add or remove one explicitly.
///
/// ```
/// use tyname_core::{ConstStr, concat_const, const_str};
///
/// const HELLO: ConstStr<5> = const_str!("hello");
/// const GREETING: ConstStr<11> = concat_const!(HELLO, const_str!(", "), const_str!("you!"));
/// assert_eq!(GREETING, "hello, you!");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> ConstStr<N> {
    /// Length of every value of this type.
    pub const LEN: usize = N;

    /// `N` zero bytes.
    #[inline]
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Wraps an array of bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Copies a string literal whose length must be exactly `N`.
    pub const fn from_literal(s: &str) -> Self {
        assert!(s.len() == N, "literal length does not match ConstStr length");
        Self::from_offset(s.as_bytes(), 0)
    }

    /// Copies `src[start..start + N]`, one index at a time.
    pub const fn from_offset(src: &[u8], start: usize) -> Self {
        assert!(
            start <= src.len() && N <= src.len() - start,
            "ConstStr::from_offset reads past the end of the source"
        );
        let mut bytes = [0u8; N];
        let mut i = 0;
        while i < N {
            bytes[i] = src[start + i];
            i += 1;
        }
        Self { bytes }
    }

    /// Number of bytes, always `N`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for `ConstStr<0>`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The byte at `index`. Panics when `index >= N`.
    #[inline]
    pub const fn get(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// Borrows the underlying array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Unwraps the underlying array.
    #[inline]
    pub const fn into_array(self) -> [u8; N] {
        self.bytes
    }

    /// Views the bytes as UTF-8.
    #[inline]
    pub const fn to_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.bytes)
    }

    /// Appends `other`, producing a string of length `C`, which must be `N + B`.
    ///
    /// See [`concat_const!`](crate::concat_const) for a form that works out `C`.
    pub const fn concat<const B: usize, const C: usize>(self, other: ConstStr<B>) -> ConstStr<C> {
        assert!(C == N + B, "concatenated length must be the sum of both lengths");
        if N == 0 {
            return ConstStr::from_offset(&other.bytes, 0);
        }
        if B == 0 {
            return ConstStr::from_offset(&self.bytes, 0);
        }
        let mut bytes = [0u8; C];
        let mut i = 0;
        while i < N {
            bytes[i] = self.bytes[i];
            i += 1;
        }
        let mut j = 0;
        while j < B {
            bytes[N + j] = other.bytes[j];
            j += 1;
        }
        ConstStr { bytes }
    }

    /// The `M` bytes starting at `start`.
    #[inline]
    pub const fn slice<const M: usize>(self, start: usize) -> ConstStr<M> {
        ConstStr::from_offset(&self.bytes, start)
    }

    /// Whether the last byte is NUL.
    #[inline]
    pub const fn is_nul_terminated(&self) -> bool {
        N > 0 && self.bytes[N - 1] == 0
    }

    /// Drops the trailing NUL. `M` must be `N - 1`.
    pub const fn strip_nul<const M: usize>(self) -> ConstStr<M> {
        assert!(M + 1 == N, "strip_nul must shorten the string by exactly one byte");
        assert!(self.is_nul_terminated(), "strip_nul on a string without a NUL terminator");
        ConstStr::from_offset(&self.bytes, 0)
    }

    /// Appends a NUL. `M` must be `N + 1`.
    pub const fn with_nul<const M: usize>(self) -> ConstStr<M> {
        assert!(M == N + 1, "with_nul must lengthen the string by exactly one byte");
        let mut bytes = [0u8; M];
        let mut i = 0;
        while i < N {
            bytes[i] = self.bytes[i];
            i += 1;
        }
        ConstStr { bytes }
    }
}

impl<const D: usize> ConstStr<D> {
    /// Decimal rendering of `n`, most significant digit first.
    ///
    /// `D` must equal [`decimal_digits(n)`](decimal_digits); see
    /// [`decimal_str!`](crate::decimal_str).
    pub const fn decimal(n: usize) -> Self {
        assert!(D == decimal_digits(n), "ConstStr length must match the digit count");
        let mut bytes = [0u8; D];
        let mut i = 0;
        while i < D {
            bytes[i] = b'0' + ((n / pow10(D - 1 - i)) % 10) as u8;
            i += 1;
        }
        Self { bytes }
    }
}

/// Number of decimal digits in `n`; `0` has one digit.
pub const fn decimal_digits(n: usize) -> usize {
    let mut digits = 1;
    let mut rest = n;
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    digits
}

const fn pow10(exp: usize) -> usize {
    let mut value = 1;
    let mut i = 0;
    while i < exp {
        value *= 10;
        i += 1;
    }
    value
}

impl<const N: usize> Default for ConstStr<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for ConstStr<N> {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl<const N: usize> AsRef<[u8]> for ConstStr<N> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> From<ConstStr<N>> for [u8; N] {
    #[inline]
    fn from(s: ConstStr<N>) -> Self {
        s.bytes
    }
}

impl<const N: usize> PartialEq<str> for ConstStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.bytes[..] == *other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for ConstStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes[..] == *other.as_bytes()
    }
}

impl<const N: usize> fmt::Display for ConstStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for ConstStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Ok(s) => fmt::Debug::fmt(s, f),
            Err(_) => fmt::Debug::fmt(&self.bytes[..], f),
        }
    }
}

/// Builds a [`ConstStr`] from a string literal, inferring its length.
///
/// ```
/// use tyname_core::{ConstStr, const_str};
///
/// const QUAL: ConstStr<6> = const_str!(" const");
/// assert_eq!(QUAL.len(), 6);
/// ```
#[macro_export]
macro_rules! const_str {
    ($lit:expr $(,)?) => {{
        const __TYNAME_LIT: &str = $lit;
        $crate::ConstStr::<{ __TYNAME_LIT.len() }>::from_literal(__TYNAME_LIT)
    }};
}

/// Concatenates constant [`ConstStr`] expressions, working out the lengths.
///
/// Operands must be constant expressions (literals via [`const_str!`],
/// `const` items, or other const-evaluable calls).
#[macro_export]
macro_rules! concat_const {
    ($a:expr $(,)?) => {
        $a
    };
    ($a:expr, $b:expr $(,)?) => {{
        const __TYNAME_A_LEN: usize = $crate::ConstStr::len(&$a);
        const __TYNAME_B_LEN: usize = $crate::ConstStr::len(&$b);
        const __TYNAME_A: $crate::ConstStr<__TYNAME_A_LEN> = $a;
        const __TYNAME_B: $crate::ConstStr<__TYNAME_B_LEN> = $b;
        __TYNAME_A.concat::<__TYNAME_B_LEN, { __TYNAME_A_LEN + __TYNAME_B_LEN }>(__TYNAME_B)
    }};
    ($a:expr, $b:expr, $($rest:expr),+ $(,)?) => {
        $crate::concat_const!($crate::concat_const!($a, $b), $($rest),+)
    };
}

/// Renders a constant `usize` as a [`ConstStr`] of decimal digits.
///
/// ```
/// use tyname_core::decimal_str;
///
/// assert_eq!(decimal_str!(4096), "4096");
/// assert_eq!(decimal_str!(0), "0");
/// ```
#[macro_export]
macro_rules! decimal_str {
    ($n:expr $(,)?) => {{
        const __TYNAME_N: usize = $n;
        $crate::ConstStr::<{ $crate::decimal_digits(__TYNAME_N) }>::decimal(__TYNAME_N)
    }};
}
