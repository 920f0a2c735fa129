use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::marker::PhantomData;

use crate::{Qualified, Qualifiers, type_name_rt};

/// The name of `T` as a run-time base name plus compile-time qualifiers.
///
/// ```
/// use tyname_core::type_name;
///
/// let name = type_name::<&mut [[[u8; 3]; 2]; 1]>();
/// assert_eq!(name.base(), "u8");
/// assert_eq!(name.qualifiers(), "[1][2][3]&mut");
/// assert_eq!(name.to_string(), "u8[1][2][3]&mut");
/// ```
pub struct TypeName<T: ?Sized>(PhantomData<T>);

impl<T: Qualified + ?Sized> TypeName<T> {
    const QUALIFIERS: &'static Qualifiers = &T::QUALIFIERS;

    /// The name of the base type, from the runtime resolver.
    pub fn base(&self) -> &'static str {
        type_name_rt::<T::Base>()
    }

    /// The qualifiers, fixed at compile time.
    pub fn qualifiers(&self) -> &'static str {
        Self::QUALIFIERS.as_str()
    }

    /// Whether there are any qualifiers at all.
    pub fn has_qualifiers(&self) -> bool {
        !Self::QUALIFIERS.is_empty()
    }

    /// Base followed by qualifiers. Borrows the base when there is nothing
    /// to append.
    pub fn composed(&self) -> Cow<'static, str> {
        let base = self.base();
        if !self.has_qualifiers() {
            return Cow::Borrowed(base);
        }
        let qualifiers = self.qualifiers();
        let mut name = String::with_capacity(base.len() + qualifiers.len());
        name.push_str(base);
        name.push_str(qualifiers);
        Cow::Owned(name)
    }
}

impl<T: Qualified + ?Sized> fmt::Display for TypeName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())?;
        f.write_str(self.qualifiers())
    }
}

impl<T: Qualified + ?Sized> fmt::Debug for TypeName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeName")
            .field("base", &self.base())
            .field("qualifiers", &self.qualifiers())
            .finish()
    }
}

impl<T: ?Sized> Clone for TypeName<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeName<T> {}

/// The [`TypeName`] of `T`.
#[inline]
pub const fn type_name<T: Qualified + ?Sized>() -> TypeName<T> {
    TypeName(PhantomData)
}
