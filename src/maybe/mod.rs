//! The `Maybe` container.
//!
//! This module provides [`Maybe<T>`], a value that is either `Some` (holding
//! exactly one `T`) or `None` (holding nothing). The variant is carried by an
//! explicit discriminant, [`Tag`], which every operator inspects before it
//! touches the payload.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::{Maybe, Tag, some};
//!
//! let present = some(5);
//! assert_eq!(present.tag(), Tag::Some);
//! assert_eq!(present.map(|x| x * 2).unwrap(), 10);
//!
//! let absent: Maybe<i32> = Maybe::from(None);
//! assert_eq!(absent.tag(), Tag::None);
//! assert_eq!(absent.map(|x| x * 2).unwrap_or(0), 0);
//! ```

mod catch;
mod combinator;
mod raise;
mod transform;

pub use combinator::{Branches, Contenders};
pub use raise::ErrorLike;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::access::SequenceCache;
use crate::error::MaybeError;
use crate::value::{Nullable, Nullish, Truthy};

/// The discriminant of a [`Maybe`].
///
/// Exactly two tokens exist. Narrowing is always done by comparing tags,
/// never by inspecting the payload.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, Tag};
///
/// assert_eq!(Maybe::some(0).tag(), Tag::Some);
/// assert_eq!(Maybe::<i32>::none().tag(), Tag::None);
/// assert_eq!(Tag::Some.to_string(), "some");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// The container holds a value.
    Some,
    /// The container is empty.
    None,
}

impl Tag {
    /// Returns the lowercase name of the tag.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Some => "some",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An immutable optional value with a chainable combinator surface.
///
/// `Maybe<T>` is either `Some`, holding one `T`, or `None`. Presence is a
/// property of the variant, not of the value: `Maybe::some(0)`,
/// `Maybe::some("")` and `Maybe::some(false)` are all `Some`.
///
/// Operators never mutate a container; they return new ones. Every operator
/// invoked on `None` returns `None` (or the empty analogue of its output)
/// without calling any user callback.
///
/// Besides the payload, a container memoises the sequence view used by
/// [`at`](Maybe::at) for values that are iterable but not random-access,
/// so such a value is iterated at most once per container.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, some};
///
/// let name = some("  Ada  ").trim().filter(|name| !name.is_empty());
/// assert_eq!(name.unwrap(), "Ada");
///
/// let blank = some("   ").trim().filter(|name| !name.is_empty());
/// assert!(blank.is_none());
/// ```
pub struct Maybe<T> {
    value: Option<T>,
    sequence: SequenceCache,
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

/// Creates a `Some` container holding `value`.
///
/// Shorthand for [`Maybe::some`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::some;
///
/// assert!(some(()).is_some());
/// ```
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// Creates an empty container.
///
/// Shorthand for [`Maybe::none`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, none};
///
/// let empty: Maybe<i32> = none();
/// assert!(empty.is_none());
/// ```
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::none()
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Some` container, whatever the value is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::some(0).is_some());
    /// assert!(Maybe::some(None::<i32>).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            value: Some(value),
            sequence: SequenceCache::new(),
        }
    }

    /// Creates an empty container.
    ///
    /// `None` carries no state, so any two empty containers are
    /// interchangeable.
    #[inline]
    pub const fn none() -> Self {
        Self {
            value: None,
            sequence: SequenceCache::new(),
        }
    }

    /// Creates a `Some` container. Alias of [`Maybe::some`].
    #[inline]
    pub const fn to_some(value: T) -> Self {
        Self::some(value)
    }

    /// Creates a container that is `None` when the value is null or missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, Nullable};
    ///
    /// assert!(Maybe::from_non_nullable(Nullable::<i32>::Null).is_none());
    /// assert!(Maybe::from_non_nullable(Nullable::<i32>::Undefined).is_none());
    /// assert_eq!(Maybe::from_non_nullable(Nullable::Value(0)).unwrap(), 0);
    /// assert_eq!(Maybe::from_non_nullable(Some(0)).unwrap(), 0);
    /// ```
    #[inline]
    pub fn from_non_nullable<V>(value: V) -> Self
    where
        V: Nullish<NonNull = T>,
    {
        value.into_non_null().into()
    }

    /// Creates a container that is `None` when the value is falsy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::from_truthy(0).is_none());
    /// assert!(Maybe::from_truthy(false).is_none());
    /// assert!(Maybe::from_truthy("").is_none());
    /// assert_eq!(Maybe::from_truthy(1).unwrap(), 1);
    /// ```
    #[inline]
    pub fn from_truthy(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() {
            Self::some(value)
        } else {
            Self::none()
        }
    }

    // =========================================================================
    // Tag Inspection
    // =========================================================================

    /// Returns the discriminant of this container.
    #[inline]
    pub const fn tag(&self) -> Tag {
        if self.value.is_some() {
            Tag::Some
        } else {
            Tag::None
        }
    }

    /// Returns `true` if this container holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if this container is empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Returns a reference to the held value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Converts the container into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Returns a container borrowing the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let word = some(String::from("hello"));
    /// assert_eq!(word.as_ref().map(|text| text.len()).unwrap(), 5);
    /// assert_eq!(word.unwrap(), "hello");
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        self.value.as_ref().into()
    }

    /// Returns an iterator over the held value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the held value, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with [`MaybeError::EmptyUnwrap`] if the container is `None`.
    /// Check the variant with [`is_some`](Maybe::is_some) first, or use
    /// [`try_unwrap`](Maybe::try_unwrap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(false).unwrap(), false);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic!("{}", MaybeError::EmptyUnwrap),
        }
    }

    /// Returns the held value, or [`MaybeError::EmptyUnwrap`] for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::EmptyUnwrap`] when the container is empty.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, MaybeError> {
        self.value.ok_or(MaybeError::EmptyUnwrap)
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the held value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(function)
    }

    // -------------------------------------------------------------------------
    // Crate internals
    // -------------------------------------------------------------------------

    /// Splits the container into its payload and memoised sequence view.
    #[inline]
    pub(crate) fn into_parts(self) -> (Option<T>, SequenceCache) {
        (self.value, self.sequence)
    }

    /// Reassembles a container, keeping an already computed sequence view.
    #[inline]
    pub(crate) const fn from_parts(value: Option<T>, sequence: SequenceCache) -> Self {
        Self { value, sequence }
    }

    #[inline]
    pub(crate) const fn sequence(&self) -> &SequenceCache {
        &self.sequence
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the held value, or `T::default()` for `None`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.value.unwrap_or_default()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            sequence: self.sequence.clone(),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: PartialOrd> PartialOrd for Maybe<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Maybe<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Some({value})"),
            None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Creates a container that is `None` only when the value is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::from(None::<i32>).is_none());
    /// assert_eq!(Maybe::from(Some(0)).unwrap(), 0);
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self {
            value,
            sequence: SequenceCache::new(),
        }
    }
}

impl<T> From<Nullable<T>> for Maybe<Option<T>> {
    /// Creates a container that is `None` only for `Undefined`.
    ///
    /// A `Null` stays present as `Some(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, Nullable};
    ///
    /// assert!(Maybe::from(Nullable::<i32>::Undefined).is_none());
    /// assert_eq!(Maybe::from(Nullable::<i32>::Null).unwrap(), None);
    /// ```
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        match value {
            Nullable::Value(value) => Self::some(Some(value)),
            Nullable::Null => Self::some(None),
            Nullable::Undefined => Self::none(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_some_construction() {
        let value = Maybe::some(5);
        assert!(value.is_some());
        assert!(!value.is_none());
        assert_eq!(value.tag(), Tag::Some);
    }

    #[rstest]
    fn test_none_construction() {
        let value: Maybe<i32> = Maybe::none();
        assert!(value.is_none());
        assert_eq!(value.tag(), Tag::None);
        assert_eq!(value.value(), None);
    }

    #[rstest]
    #[case(Some(0), true)]
    #[case(None, false)]
    fn test_from_option(#[case] input: Option<i32>, #[case] expected_some: bool) {
        assert_eq!(Maybe::from(input).is_some(), expected_some);
    }

    #[rstest]
    fn test_clone_keeps_sequence_view() {
        let original = Maybe::some(vec![1, 2, 3]);
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(copy.unwrap(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::some(42)), "Some(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
    }

    #[rstest]
    fn test_display_format() {
        assert_eq!(format!("{}", Maybe::some("hi")), "Some(hi)");
        assert_eq!(format!("{}", Maybe::<&str>::none()), "None");
    }

    #[rstest]
    fn test_ordering_matches_option() {
        assert!(Maybe::<i32>::none() < Maybe::some(i32::MIN));
        assert!(Maybe::some(1) < Maybe::some(2));
    }

    #[rstest]
    #[should_panic(expected = "called `Maybe::unwrap()` on a `None` value")]
    fn test_unwrap_none_panics() {
        let _ = Maybe::<i32>::none().unwrap();
    }

    #[rstest]
    fn test_parts_roundtrip() {
        let (value, sequence) = Maybe::some(7).into_parts();
        assert_eq!(Maybe::from_parts(value, sequence).unwrap(), 7);
    }
}
