//! Null and missing values.

/// A value that may be present, explicitly null, or missing.
///
/// `Nullable<T>` models the two distinct absence markers that dynamic data
/// often carries: `Null` (an explicit "no value") and `Undefined` (the key or
/// slot does not exist at all).
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, Nullable};
///
/// let present = Maybe::some(Nullable::Value(3));
/// assert_eq!(present.not_nullable().unwrap(), 3);
///
/// let null: Maybe<Nullable<i32>> = Maybe::some(Nullable::Null);
/// assert_eq!(null.clone().not_undefined().unwrap(), None);
/// assert!(null.not_null().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Nullable<T> {
    /// A present value.
    Value(T),
    /// An explicit null.
    Null,
    /// A missing value.
    #[default]
    Undefined,
}

impl<T> Nullable<T> {
    /// Returns `true` for [`Nullable::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Nullable::Undefined`].
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for either absence marker.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    /// Converts into an `Option`, merging both absence markers into `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null | Self::Undefined => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Values that may be null or missing.
///
/// Used by [`Maybe::from_non_nullable`](crate::Maybe::from_non_nullable) and
/// [`Maybe::not_nullable`](crate::Maybe::not_nullable) to strip every
/// absence marker from a value.
pub trait Nullish {
    /// The value type once absence markers are removed.
    type NonNull;

    /// Returns the present value, or `None` for any absence marker.
    fn into_non_null(self) -> Option<Self::NonNull>;
}

impl<T> Nullish for Option<T> {
    type NonNull = T;

    #[inline]
    fn into_non_null(self) -> Option<T> {
        self
    }
}

impl<T> Nullish for Nullable<T> {
    type NonNull = T;

    #[inline]
    fn into_non_null(self) -> Option<T> {
        self.into_option()
    }
}
