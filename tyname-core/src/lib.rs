#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod tracing_macros;

// Fixed-length strings and const string building
mod fixed;
pub use fixed::*;

mod buf;
pub use buf::*;

mod tuple;
pub use tuple::*;

mod error;
pub use error::*;

// Runtime resolver: type identifier, demangler, prefix cut
mod demangle;
pub use demangle::*;

mod runtime;
pub use runtime::*;

// Signature resolver: names sliced from compiler-generated signatures
pub mod value;

pub mod signature;
pub use signature::{
    DefaultSignature, Enumerator, EnumeratorStyle, FnItemSignature, FormatTable, Offsets,
    Signature, SignatureFormat, TupleSignature, enumerator_name, type_name_pt, value_name_pt,
};

// Base name plus compile-time qualifiers
mod qualifiers;
pub use qualifiers::*;

mod type_name;
pub use type_name::*;
