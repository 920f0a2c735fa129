use core::fmt;

use crate::{ConstStr, decimal_digits};

/// A bounded string builder usable in const context.
///
/// Stable Rust cannot spell `ConstStr<{ A + B }>` when `A` and `B` are
/// generic parameters, so strings whose length depends on generics (such as
/// the qualifier suffix of `[T; N]`) are built into a buffer of fixed
/// capacity instead. Exceeding `CAP` is an assertion failure.
#[derive(Clone, Copy)]
pub struct ConstStrBuf<const CAP: usize> {
    bytes: [u8; CAP],
    len: usize,
}

impl<const CAP: usize> ConstStrBuf<CAP> {
    /// An empty buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            bytes: [0; CAP],
            len: 0,
        }
    }

    /// A buffer holding `s`.
    #[inline]
    pub const fn from_literal(s: &str) -> Self {
        Self::new().push_str(s)
    }

    /// Appends a string slice.
    #[inline]
    pub const fn push_str(self, s: &str) -> Self {
        self.push_bytes(s.as_bytes())
    }

    /// Appends the contents of another buffer.
    #[inline]
    pub const fn push_buf<const OTHER: usize>(self, other: &ConstStrBuf<OTHER>) -> Self {
        self.push_bytes(other.as_bytes())
    }

    /// Appends a [`ConstStr`], which must hold UTF-8.
    pub const fn push_const_str<const N: usize>(self, s: &ConstStr<N>) -> Self {
        match s.to_str() {
            Ok(s) => self.push_str(s),
            Err(_) => panic!("ConstStrBuf only accepts UTF-8"),
        }
    }

    /// Appends `n` in decimal.
    pub const fn push_decimal(mut self, n: usize) -> Self {
        let digits = decimal_digits(n);
        assert!(self.len + digits <= CAP, "ConstStrBuf capacity exceeded");
        let mut rest = n;
        let mut i = digits;
        while i > 0 {
            i -= 1;
            self.bytes[self.len + i] = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        self.len += digits;
        self
    }

    const fn push_bytes(mut self, src: &[u8]) -> Self {
        assert!(self.len + src.len() <= CAP, "ConstStrBuf capacity exceeded");
        let mut i = 0;
        while i < src.len() {
            self.bytes[self.len + i] = src[i];
            i += 1;
        }
        self.len += src.len();
        self
    }

    /// Bytes written so far.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        self.bytes.split_at(self.len).0
    }

    /// Contents as a string slice.
    #[inline]
    pub const fn as_str(&self) -> &str {
        // every push goes through `&str` or decimal digits
        match core::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(_) => "",
        }
    }

    /// Number of bytes written.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<const CAP: usize> Default for ConstStrBuf<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const A: usize, const B: usize> PartialEq<ConstStrBuf<B>> for ConstStrBuf<A> {
    fn eq(&self, other: &ConstStrBuf<B>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> Eq for ConstStrBuf<CAP> {}

impl<const CAP: usize> PartialEq<str> for ConstStrBuf<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const CAP: usize> PartialEq<&str> for ConstStrBuf<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const CAP: usize> fmt::Display for ConstStrBuf<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const CAP: usize> fmt::Debug for ConstStrBuf<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
