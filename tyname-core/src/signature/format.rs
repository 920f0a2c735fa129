use alloc::collections::BTreeMap;
use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use super::Offsets;
use crate::tracing_macros::trace;
use crate::value::ConstValue;

/// How enumerators come out of a signature format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratorStyle {
    /// The bare variant name, e.g. `Red`.
    Name,
    /// The enum's type name in parentheses followed by the ordinal, e.g.
    /// `(my_crate::Color)0`.
    OrdinalFallback,
}

/// The boilerplate a signature format wraps around a name.
///
/// Only lengths matter: the offsets are derived by measuring a probe
/// signature and subtracting the length of the probe's known tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTable {
    /// Human-readable name of the format.
    pub name: &'static str,
    /// What the type probe signature ends with: the probe type `i32`
    /// followed by the type suffix.
    pub type_probe_tail: &'static str,
    /// What follows a type name in its signature.
    pub type_suffix: &'static str,
    /// What follows a value in its signature. The probe tail for values is
    /// [`ValueKind::probe_text`] followed by this.
    pub value_suffix: &'static str,
    /// How enumerators are named.
    pub enumerators: EnumeratorStyle,
}

/// Per-format memo of measured offsets.
///
/// Value offsets are keyed by the probe carrier they were measured from,
/// so carriers defined outside this crate never share an entry with the
/// built-in ones.
pub struct OffsetCache {
    pub(crate) types: OnceLock<Offsets>,
    pub(crate) values: RwLock<BTreeMap<TypeId, Offsets>>,
}

impl OffsetCache {
    /// An empty cache.
    pub const fn new() -> Self {
        Self {
            types: OnceLock::new(),
            values: RwLock::new(BTreeMap::new()),
        }
    }

    /// Offsets measured from the probe carrier `P`, if any.
    pub(crate) fn value_entry<P: ConstValue>(&self) -> Option<Offsets> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<P>())
            .copied()
    }
}

/// A source of signature strings that embed a type or constant.
///
/// Implementations supply the signature functions, the boilerplate table
/// and a static cache; offset measurement is shared.
pub trait SignatureFormat: 'static {
    /// Boilerplate lengths for this format.
    const TABLE: FormatTable;

    /// The signature with `T` embedded.
    fn type_signature<T: ?Sized>() -> &'static str;

    /// The signature with the value carried by `C` embedded.
    fn value_signature<C: ConstValue>() -> &'static str;

    /// Where measured offsets are kept.
    fn cache() -> &'static OffsetCache;

    /// Offsets around a type name, measured once from `i32`.
    fn type_offsets() -> Offsets {
        *Self::cache().types.get_or_init(|| {
            let table = Self::TABLE;
            let probe = Self::type_signature::<i32>();
            let offsets = Offsets::measure(
                probe.len(),
                table.type_probe_tail.len(),
                table.type_suffix.len(),
            );
            trace!(format = table.name, probe, ?offsets, "measured type offsets");
            offsets
        })
    }

    /// Offsets around a value of `C`, measured once per probe carrier.
    fn value_offsets<C: ConstValue>() -> Offsets {
        let cache = Self::cache();
        if let Some(offsets) = cache.value_entry::<C::Probe>() {
            return offsets;
        }

        let table = Self::TABLE;
        let kind = <C::Probe as ConstValue>::KIND;
        let probe = Self::value_signature::<C::Probe>();
        let offsets = Offsets::measure(
            probe.len(),
            kind.probe_text().len() + table.value_suffix.len(),
            table.value_suffix.len(),
        );
        trace!(format = table.name, ?kind, probe, ?offsets, "measured value offsets");
        *cache
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<C::Probe>())
            .or_insert(offsets)
    }
}

/// Instantiated by [`FnItemSignature`] to get a signature for `T`.
pub fn type_probe<T: ?Sized>() {}

/// Instantiated by [`FnItemSignature`] to get a signature for a constant.
pub fn value_probe<C: ConstValue>() {}

/// Signatures of generic function items, e.g.
/// `tyname_core::signature::format::type_probe<i32>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnItemSignature;

impl SignatureFormat for FnItemSignature {
    const TABLE: FormatTable = FormatTable {
        name: "fn-item",
        type_probe_tail: "i32>",
        type_suffix: ">",
        value_suffix: ">>",
        enumerators: EnumeratorStyle::Name,
    };

    fn type_signature<T: ?Sized>() -> &'static str {
        core::any::type_name_of_val(&type_probe::<T>)
    }

    fn value_signature<C: ConstValue>() -> &'static str {
        core::any::type_name_of_val(&value_probe::<C>)
    }

    fn cache() -> &'static OffsetCache {
        static CACHE: OffsetCache = OffsetCache::new();
        &CACHE
    }
}

/// Signatures of one-element tuples, e.g. `(i32,)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleSignature;

impl SignatureFormat for TupleSignature {
    const TABLE: FormatTable = FormatTable {
        name: "tuple",
        type_probe_tail: "i32,)",
        type_suffix: ",)",
        value_suffix: ">,)",
        enumerators: EnumeratorStyle::OrdinalFallback,
    };

    fn type_signature<T: ?Sized>() -> &'static str {
        core::any::type_name::<(T,)>()
    }

    fn value_signature<C: ConstValue>() -> &'static str {
        core::any::type_name::<(C,)>()
    }

    fn cache() -> &'static OffsetCache {
        static CACHE: OffsetCache = OffsetCache::new();
        &CACHE
    }
}

/// The format used by [`type_name_pt`](crate::type_name_pt) and friends.
#[cfg(not(feature = "tuple-signature"))]
pub type DefaultSignature = FnItemSignature;

/// The format used by [`type_name_pt`](crate::type_name_pt) and friends.
#[cfg(feature = "tuple-signature")]
pub type DefaultSignature = TupleSignature;
