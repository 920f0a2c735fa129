//! Turning implementation-defined identifiers into readable names.

use alloc::borrow::Cow;
use alloc::string::String;

#[cfg(feature = "demangle")]
use crate::tracing_macros::debug;

/// Maps an identifier to a readable name.
///
/// `None` means the identifier could not be demangled. Implementations
/// borrow from the input when it is already readable and allocate only
/// when they produce new text.
pub trait Demangler {
    /// Demangles `identifier`.
    fn demangle<'a>(&self, identifier: &'a str) -> Option<Cow<'a, str>>;
}

/// Treats every identifier as already readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Demangler for Passthrough {
    #[inline]
    fn demangle<'a>(&self, identifier: &'a str) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(identifier))
    }
}

/// Demangles Rust symbols (legacy `_ZN...E` and v0 `_R...`), dropping the
/// trailing hash.
#[cfg(feature = "demangle")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustcDemangler;

#[cfg(feature = "demangle")]
impl Demangler for RustcDemangler {
    fn demangle<'a>(&self, identifier: &'a str) -> Option<Cow<'a, str>> {
        match rustc_demangle::try_demangle(identifier) {
            Ok(demangled) => Some(Cow::Owned(alloc::format!("{demangled:#}"))),
            Err(_) => {
                debug!(identifier, "not a mangled rust symbol");
                None
            }
        }
    }
}

impl<D: Demangler + ?Sized> Demangler for &D {
    #[inline]
    fn demangle<'a>(&self, identifier: &'a str) -> Option<Cow<'a, str>> {
        (**self).demangle(identifier)
    }
}

/// The demangler used for type identifiers.
///
/// `core::any::type_name` already yields readable names, so there is
/// nothing to undo.
pub type PlatformDemangler = Passthrough;

/// Whether a symbol demangler was compiled in (the `demangle` feature).
pub const HAS_SYMBOL_DEMANGLER: bool = cfg!(feature = "demangle");

/// Demangles a symbol name.
///
/// Returns an empty string when the symbol is not a mangled Rust symbol.
/// Without the `demangle` feature the symbol is returned unchanged.
pub fn demangle_symbol(symbol: &str) -> String {
    #[cfg(feature = "demangle")]
    {
        RustcDemangler
            .demangle(symbol)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "demangle"))]
    {
        symbol.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tyname_testhelpers::test]
    fn passthrough_borrows() {
        let name = Passthrough.demangle("alloc::string::String");
        assert!(matches!(name, Some(Cow::Borrowed("alloc::string::String"))));
    }

    #[cfg(feature = "demangle")]
    #[tyname_testhelpers::test]
    fn rustc_symbols() {
        assert_eq!(
            demangle_symbol("_ZN4core3fmt5write17h0123456789abcdefE"),
            "core::fmt::write"
        );
        assert_eq!(demangle_symbol("alloc::string::String"), "");
    }

    #[cfg(not(feature = "demangle"))]
    #[tyname_testhelpers::test]
    fn symbols_pass_through_without_demangler() {
        assert!(!HAS_SYMBOL_DEMANGLER);
        let symbol = "_ZN4core3fmt5write17h0123456789abcdefE";
        assert_eq!(demangle_symbol(symbol), symbol);
    }
}
