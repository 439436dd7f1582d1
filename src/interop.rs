//! Structural interoperability between container implementations.
//!
//! Several independently built copies of an optional container can coexist
//! in one program. Instead of requiring nominal identity with [`Maybe`],
//! every operator that accepts a container accepts anything implementing
//! [`MaybeLike`]: a discriminant [`Tag`] plus access to the payload. On the
//! way out, foreign containers are *re-homed*, that is rebuilt as a local
//! [`Maybe`] keeping only the variant and the value.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::{Maybe, MaybeLike, Tag, some};
//!
//! // A container from some other library.
//! enum Legacy<T> {
//!     Present(T),
//!     Absent,
//! }
//!
//! impl<T> MaybeLike for Legacy<T> {
//!     type Value = T;
//!
//!     fn tag(&self) -> Tag {
//!         match self {
//!             Self::Present(_) => Tag::Some,
//!             Self::Absent => Tag::None,
//!         }
//!     }
//!
//!     fn value(&self) -> Option<&T> {
//!         match self {
//!             Self::Present(value) => Some(value),
//!             Self::Absent => None,
//!         }
//!     }
//!
//!     fn into_value(self) -> Option<T> {
//!         match self {
//!             Self::Present(value) => Some(value),
//!             Self::Absent => None,
//!         }
//!     }
//! }
//!
//! let doubled = some(21).flat_map(|x| Legacy::Present(x * 2));
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let nested = some(Legacy::Present("inner"));
//! assert_eq!(nested.flat().unwrap(), "inner");
//!
//! assert!(Maybe::rehome(Legacy::<i32>::Absent).is_none());
//! ```

use crate::maybe::{Maybe, Tag};

/// The structural interface of an optional container.
///
/// Implementations must keep [`tag`](MaybeLike::tag) consistent with the
/// payload: `Tag::Some` exactly when [`value`](MaybeLike::value) returns
/// `Some`. Re-homing treats a `Tag::Some` container without a payload as
/// `None` and logs a warning.
pub trait MaybeLike {
    /// The type of the held value.
    type Value;

    /// Returns the discriminant.
    fn tag(&self) -> Tag;

    /// Returns `true` if the container holds a value.
    #[inline]
    fn is_some(&self) -> bool {
        self.tag() == Tag::Some
    }

    /// Returns `true` if the container is empty.
    #[inline]
    fn is_none(&self) -> bool {
        self.tag() == Tag::None
    }

    /// Returns a reference to the held value, if any.
    fn value(&self) -> Option<&Self::Value>;

    /// Consumes the container, returning the held value, if any.
    fn into_value(self) -> Option<Self::Value>;

    /// Converts the container into a local [`Maybe`].
    #[inline]
    fn into_maybe(self) -> Maybe<Self::Value>
    where
        Self: Sized,
    {
        Maybe::rehome(self)
    }
}

impl<T> MaybeLike for Maybe<T> {
    type Value = T;

    #[inline]
    fn tag(&self) -> Tag {
        Self::tag(self)
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        Self::value(self)
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into_option()
    }

    /// Already local: returned as is, memoised state included.
    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T> MaybeLike for Option<T> {
    type Value = T;

    #[inline]
    fn tag(&self) -> Tag {
        if Self::is_some(self) {
            Tag::Some
        } else {
            Tag::None
        }
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

/// `Ok` is present; `Err` is absent and its error is discarded.
impl<T, E> MaybeLike for Result<T, E> {
    type Value = T;

    #[inline]
    fn tag(&self) -> Tag {
        if self.is_ok() { Tag::Some } else { Tag::None }
    }

    #[inline]
    fn value(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    #[inline]
    fn into_value(self) -> Option<T> {
        self.ok()
    }
}

impl<T> Maybe<T> {
    /// Rebuilds any [`MaybeLike`] container as a local `Maybe`.
    ///
    /// Only the variant and the value are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::rehome(Ok::<_, ()>(3)).unwrap(), 3);
    /// assert!(Maybe::rehome(Err::<i32, _>("boom")).is_none());
    /// ```
    pub fn rehome<M>(like: M) -> Self
    where
        M: MaybeLike<Value = T>,
    {
        let tag = like.tag();
        match (tag, like.into_value()) {
            (Tag::Some, Some(value)) => Self::some(value),
            (Tag::Some, None) => {
                tracing::warn!(
                    container = std::any::type_name::<M>(),
                    "container tagged some has no value, treating it as none"
                );
                Self::none()
            }
            (Tag::None, _) => Self::none(),
        }
    }
}

/// Values that [`Maybe::flat`] can collapse.
///
/// Every [`MaybeLike`] collapses into its value; plain values implement this
/// trait with `Flat = Self` and are returned wrapped as they were.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::some;
///
/// assert_eq!(some(some(1)).flat().unwrap(), 1);
/// assert!(some(maybe_chain::none::<i32>()).flat().is_none());
/// assert_eq!(some(1).flat().unwrap(), 1);
/// ```
pub trait Nested {
    /// The type after one level of nesting has been removed.
    type Flat;

    /// Removes one level of nesting.
    fn flatten_into(self) -> Maybe<Self::Flat>;
}

impl<M: MaybeLike> Nested for M {
    type Flat = M::Value;

    #[inline]
    fn flatten_into(self) -> Maybe<M::Value> {
        self.into_maybe()
    }
}

/// Returns `true` if `maybe` holds a value.
///
/// Accepts any [`MaybeLike`], not only [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{is_some, some};
///
/// assert!(is_some(&some(0)));
/// assert!(is_some(&Some(0)));
/// assert!(!is_some(&Err::<i32, _>(())));
/// ```
#[inline]
pub fn is_some<M: MaybeLike + ?Sized>(maybe: &M) -> bool {
    maybe.is_some()
}

/// Returns `true` if `maybe` is empty.
///
/// Accepts any [`MaybeLike`], not only [`Maybe`].
#[inline]
pub fn is_none<M: MaybeLike + ?Sized>(maybe: &M) -> bool {
    maybe.is_none()
}
