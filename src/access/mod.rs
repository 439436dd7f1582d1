//! Typed accessors: indexed access (`at`) and keyed access (`pluck`, `has`).
//!
//! # Indexing
//!
//! [`Maybe::at`] works on three kinds of values:
//!
//! - random-access sequences (`Vec`, slices, arrays, `VecDeque`): indexed
//!   directly;
//! - iterables that are not random-access (sets, maps, strings): materialised
//!   into a sequence once per container, then indexed;
//! - plain values (numbers, booleans, user structs): treated as a
//!   one-element sequence, so index `0` or `-1` yields the value itself.
//!
//! Negative indices count from the end; `-1` is the last element.
//!
//! ```rust
//! use maybe_chain::some;
//! use std::collections::BTreeSet;
//!
//! let numbers = some(vec![1, 2, 3]);
//! assert_eq!(numbers.at(0).unwrap(), 1);
//! assert_eq!(numbers.at(-1).unwrap(), 3);
//! assert!(numbers.at(3).is_none());
//! assert!(numbers.at(-4).is_none());
//!
//! let set = some(BTreeSet::from([30, 10, 20]));
//! assert_eq!(set.at(1).unwrap(), 20);
//!
//! let plain = some(42_u8);
//! assert_eq!(plain.at(-1).unwrap(), 42);
//! assert!(plain.at(1).is_none());
//! ```
//!
//! # Keyed access
//!
//! ```rust
//! use maybe_chain::some;
//! use std::collections::HashMap;
//!
//! let object = some(HashMap::from([("def", Some("hi")), ("undef", None)]));
//! assert_eq!(object.pluck("def").unwrap(), Some("hi"));
//! assert_eq!(object.pluck("undef").unwrap(), None);
//! assert!(object.pluck("missing").is_none());
//! ```

mod keyed;
mod sequence;

pub use sequence::SequenceCache;

use crate::maybe::Maybe;

/// Values that can be indexed by [`Maybe::at`].
///
/// Implementations receive the container's [`SequenceCache`] so that
/// iterables which are not random-access are materialised at most once per
/// container.
///
/// Plain values implement this trait with `Item = Self` and delegate to
/// [`scalar_at`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::access::{AtIndex, SequenceCache, scalar_at};
/// use maybe_chain::some;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl AtIndex for Point {
///     type Item = Self;
///
///     fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<Self> {
///         scalar_at(self, index)
///     }
/// }
///
/// let point = some(Point { x: 1, y: 2 });
/// assert_eq!(point.at(0).unwrap(), Point { x: 1, y: 2 });
/// assert!(point.at(1).is_none());
/// ```
pub trait AtIndex {
    /// The type of the elements.
    type Item;

    /// Returns the element at `index`, counting from the end when negative.
    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<Self::Item>;
}

/// Values that can be read by key with [`Maybe::pluck`].
///
/// Presence of the key is what matters: a key mapped to an "empty" value
/// (for example `None`) is still present.
pub trait Pluck<Q: ?Sized> {
    /// The type of the values.
    type Value;

    /// Returns `true` if `key` is present.
    fn has_key(&self, key: &Q) -> bool;

    /// Returns a copy of the value stored under `key`, if the key is present.
    fn pluck_key(&self, key: &Q) -> Option<Self::Value>;
}

/// Resolves a possibly negative index against a sequence of `length` elements.
///
/// Returns `None` when the index is out of bounds in either direction.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::access::resolve_index;
///
/// assert_eq!(resolve_index(3, 0), Some(0));
/// assert_eq!(resolve_index(3, -1), Some(2));
/// assert_eq!(resolve_index(3, 3), None);
/// assert_eq!(resolve_index(3, -4), None);
/// ```
#[inline]
pub fn resolve_index(length: usize, index: isize) -> Option<usize> {
    if index >= 0 {
        let position = index.unsigned_abs();
        (position < length).then_some(position)
    } else {
        length.checked_sub(index.unsigned_abs())
    }
}

/// Indexes a plain value as a one-element sequence.
///
/// Index `0` and `-1` yield a copy of the value; every other index is out of
/// bounds.
#[inline]
pub fn scalar_at<T: Clone>(value: &T, index: isize) -> Option<T> {
    matches!(index, 0 | -1).then(|| value.clone())
}

impl<T> Maybe<T> {
    /// Returns the element at `index` of the held value.
    ///
    /// `None` when the container is empty or the index is out of bounds.
    /// Negative indices count from the end. Plain values behave as a
    /// one-element sequence.
    ///
    /// Iterables that are not random-access are materialised on the first
    /// call and the view is reused by later calls on the same container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let letters = some("abc");
    /// assert_eq!(letters.at(1).unwrap(), "b");
    /// assert_eq!(letters.at(-1).unwrap(), "c");
    ///
    /// let empty: Maybe<Vec<i32>> = Maybe::none();
    /// assert!(empty.at(0).is_none());
    /// ```
    pub fn at(&self, index: isize) -> Maybe<T::Item>
    where
        T: AtIndex,
    {
        self.value()
            .and_then(|value| value.item_at(index, self.sequence()))
            .into()
    }

    /// Reads the value stored under `key`.
    ///
    /// `Some` only if the key is present, even when the stored value is
    /// itself empty. Rust structs expose their fields statically; use
    /// [`map`](Maybe::map) for those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    /// use std::collections::BTreeMap;
    ///
    /// let scores = some(BTreeMap::from([("ada", 3), ("bob", 5)]));
    /// assert_eq!(scores.pluck("bob").unwrap(), 5);
    /// assert!(scores.pluck("eve").is_none());
    /// ```
    pub fn pluck<Q>(&self, key: &Q) -> Maybe<T::Value>
    where
        T: Pluck<Q>,
        Q: ?Sized,
    {
        self.value().and_then(|value| value.pluck_key(key)).into()
    }

    /// Keeps the container only if the held value has `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    /// use std::collections::HashMap;
    ///
    /// let headers = some(HashMap::from([("host", "example.org")]));
    /// assert!(headers.clone().has("host").is_some());
    /// assert!(headers.has("accept").is_none());
    /// ```
    pub fn has<Q>(self, key: &Q) -> Self
    where
        T: Pluck<Q>,
        Q: ?Sized,
    {
        self.filter(|value| value.has_key(key))
    }

    /// Keeps the container only if the held value has `key` as its own
    /// entry.
    ///
    /// Rust values carry no inherited keys, so this is the same check as
    /// [`has`](Maybe::has).
    #[inline]
    pub fn has_own<Q>(self, key: &Q) -> Self
    where
        T: Pluck<Q>,
        Q: ?Sized,
    {
        self.has(key)
    }
}
