//! Type names resolved at run time from the runtime type identifier.
//!
//! The identifier of `IdT<T>` is demangled, then the boilerplate around `T`
//! is cut away. The length of that boilerplate is measured once, from the
//! probe `IdT<i32>`, by subtracting the length of `"i32>"`.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::any::TypeId;
use core::marker::PhantomData;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::demangle::{Demangler, Passthrough, PlatformDemangler};
use crate::tracing_macros::{debug, trace};
use crate::NameError;

/// Wraps `T` as a generic argument so its identifier keeps references,
/// mutability and unsized-ness intact.
///
/// The name is three characters on purpose; any three would do.
pub struct IdT<T: ?Sized>(PhantomData<T>);

/// Tail of the probe identifier: the probe type and the closing bracket.
const PROBE_TAIL: &str = "i32>";

/// Resolves names from `core::any::type_name::<IdT<T>>()` through a
/// [`Demangler`].
///
/// The prefix length and the view cache live inside the resolver; the
/// global one behind [`type_name_rt`] and [`type_name_str`] keeps them for
/// the whole process.
pub struct RuntimeResolver<D = PlatformDemangler> {
    demangler: D,
    prefix: OnceLock<usize>,
    views: RwLock<BTreeMap<TypeId, &'static str>>,
}

static GLOBAL: RuntimeResolver = RuntimeResolver::new(Passthrough);

/// The process-wide resolver.
#[inline]
pub fn resolver() -> &'static RuntimeResolver {
    &GLOBAL
}

impl<D: Demangler> RuntimeResolver<D> {
    /// A resolver with empty caches.
    pub const fn new(demangler: D) -> Self {
        Self {
            demangler,
            prefix: OnceLock::new(),
            views: RwLock::new(BTreeMap::new()),
        }
    }

    /// The demangler in use.
    pub fn demangler(&self) -> &D {
        &self.demangler
    }

    /// The raw, implementation-defined identifier of `IdT<T>`.
    #[inline]
    pub fn identifier<T: ?Sized>() -> &'static str {
        core::any::type_name::<IdT<T>>()
    }

    /// Length of the demangled boilerplate in front of `T`.
    ///
    /// Measured on first call and cached. A demangler that rejects the
    /// probe yields `0`.
    pub fn prefix_len(&self) -> usize {
        *self.prefix.get_or_init(|| {
            let probe = Self::identifier::<i32>();
            let len = match self.demangler.demangle(probe) {
                Some(demangled) => demangled.len().saturating_sub(PROBE_TAIL.len()),
                None => {
                    debug!(probe, "demangler rejected the probe identifier");
                    0
                }
            };
            trace!(probe, len, "measured runtime prefix length");
            len
        })
    }

    /// Cuts the prefix and the closing `>` off a demangled identifier.
    ///
    /// Empty when the identifier is too short or the cut would split a
    /// character.
    fn slice<'s>(&self, demangled: &'s str) -> &'s str {
        let end = demangled.len().saturating_sub(1);
        demangled.get(self.prefix_len()..end).unwrap_or_default()
    }

    /// Resolves an arbitrary identifier in the `IdT<...>` shape.
    ///
    /// Returns an empty name if the demangler fails.
    pub fn resolve_identifier<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        match self.demangler.demangle(identifier) {
            Some(Cow::Borrowed(demangled)) => Cow::Borrowed(self.slice(demangled)),
            Some(Cow::Owned(demangled)) => Cow::Owned(self.slice(&demangled).into()),
            None => {
                debug!(identifier, "demangle failed, resolving to an empty name");
                Cow::Borrowed("")
            }
        }
    }

    /// An owned copy of `T`'s name. Any demangle buffer is dropped before
    /// returning. Empty on failure.
    pub fn name_copy<T: ?Sized>(&self) -> String {
        self.resolve_identifier(Self::identifier::<T>()).into_owned()
    }

    /// Like [`name_copy`](Self::name_copy), but reports a demangle failure.
    pub fn try_name_copy<T: ?Sized>(&self) -> Result<String, NameError> {
        let identifier = Self::identifier::<T>();
        match self.demangler.demangle(identifier) {
            Some(demangled) => Ok(self.slice(&demangled).into()),
            None => Err(NameError::DemangleFailed {
                identifier: identifier.into(),
            }),
        }
    }

    /// A view of `T`'s name that stays valid for the rest of the process.
    ///
    /// Borrowed demangler output is sliced in place. Owned output is leaked
    /// once per distinct `T` and remembered, so repeated calls neither
    /// allocate nor leak again. Empty on failure.
    pub fn name_view<T: ?Sized>(&self) -> &'static str {
        let key = typeid::of::<T>();
        if let Some(view) = self
            .views
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return *view;
        }

        let identifier = Self::identifier::<T>();
        let view = match self.demangler.demangle(identifier) {
            Some(Cow::Borrowed(demangled)) => self.slice(demangled),
            Some(Cow::Owned(demangled)) => {
                let sliced = self.slice(&demangled);
                let mut views = self.views.write().unwrap_or_else(PoisonError::into_inner);
                return *views.entry(key).or_insert_with(|| {
                    trace!(identifier, name = sliced, "leaking demangled name view");
                    let leaked: &'static str = Box::leak(Box::<str>::from(sliced));
                    leaked
                });
            }
            None => {
                debug!(identifier, "demangle failed, resolving to an empty name");
                return "";
            }
        };

        self.views
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, view);
        view
    }

    /// Number of names held by the view cache.
    pub fn cached_views(&self) -> usize {
        self.views.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<D: Demangler + Default> Default for RuntimeResolver<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

/// A process-lifetime view of `T`'s name, from the global resolver.
///
/// ```
/// assert_eq!(tyname_core::type_name_rt::<&mut [u8]>(), "&mut [u8]");
/// ```
#[inline]
pub fn type_name_rt<T: ?Sized>() -> &'static str {
    resolver().name_view::<T>()
}

/// An owned copy of `T`'s name, from the global resolver.
#[inline]
pub fn type_name_str<T: ?Sized>() -> String {
    resolver().name_copy::<T>()
}
