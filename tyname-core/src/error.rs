//! Errors reported by the `try_` resolver entry points.

use alloc::string::String;
use core::fmt;

/// Why a name could not be extracted.
///
/// The plain resolver functions never return this: they signal failure with
/// an empty (or clamped) name instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NameError {
    /// The demangler rejected the identifier.
    DemangleFailed {
        /// The identifier handed to the demangler.
        identifier: String,
    },

    /// The measured boilerplate does not fit the signature, so the name
    /// cannot be sliced out of it.
    SignatureMismatch {
        /// The full signature string.
        signature: &'static str,
        /// Bytes to drop from the front.
        prefix: usize,
        /// Bytes to drop from the back.
        suffix: usize,
    },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::DemangleFailed { identifier } => {
                write!(f, "could not demangle `{identifier}`")
            }
            NameError::SignatureMismatch {
                signature,
                prefix,
                suffix,
            } => write!(
                f,
                "signature `{signature}` ({} bytes) does not fit a {prefix}-byte prefix and {suffix}-byte suffix",
                signature.len()
            ),
        }
    }
}

impl core::error::Error for NameError {}
