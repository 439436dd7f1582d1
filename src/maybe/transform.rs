//! Transformation operators.
//!
//! Every operator here follows the same rule: on `None` it returns `None`
//! (or passes the container through) without invoking any callback; on
//! `Some` it invokes the callback and re-wraps the result. The `*_none`
//! operators mirror this for the empty side.

use super::Maybe;
use crate::interop::{MaybeLike, Nested};
use crate::value::{Nullable, Nullish, Truthy};

impl<T> Maybe<T> {
    // =========================================================================
    // Functor
    // =========================================================================

    /// Applies `function` to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// assert_eq!(some(2).map(|x| x + 1).unwrap(), 3);
    /// assert!(Maybe::<i32>::none().map(|x| x + 1).is_none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.into_option().map(function).into()
    }

    /// Passes the whole container to `function` and returns its result.
    ///
    /// Runs on both variants. Used to leave the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let label = some(3).map_self(|maybe| format!("{} items", maybe.unwrap_or(0)));
    /// assert_eq!(label, "3 items");
    /// ```
    #[inline]
    pub fn map_self<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    /// Replaces `None` with `Some(function())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// assert_eq!(Maybe::<i32>::none().map_none(|| 7).unwrap(), 7);
    /// assert_eq!(some(1).map_none(|| 7).unwrap(), 1);
    /// ```
    pub fn map_none<F>(self, function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if self.is_some() {
            self
        } else {
            Self::some(function())
        }
    }

    /// Maps both variants to `Some`.
    ///
    /// `on_some` receives the held value; `on_none` runs for an empty
    /// container. The result is always `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.bimap(|x| x.to_string(), || "nothing".to_string());
    /// assert_eq!(describe(some(4)).unwrap(), "4");
    /// assert_eq!(describe(Maybe::none()).unwrap(), "nothing");
    /// ```
    pub fn bimap<U, S, N>(self, on_some: S, on_none: N) -> Maybe<U>
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        Maybe::some(self.into_option().map_or_else(on_none, on_some))
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Applies `function`, which returns a container, to the held value.
    ///
    /// The returned container may come from any [`MaybeLike`]
    /// implementation; it is re-homed into a local `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let half = |x: i32| if x % 2 == 0 { some(x / 2) } else { maybe_chain::none() };
    /// assert_eq!(some(8).flat_map(half).unwrap(), 4);
    /// assert!(some(7).flat_map(half).is_none());
    ///
    /// assert_eq!(some("12").flat_map(|text| text.parse::<u8>()).unwrap(), 12);
    /// ```
    pub fn flat_map<M, F>(self, function: F) -> Maybe<M::Value>
    where
        M: MaybeLike,
        F: FnOnce(T) -> M,
    {
        match self.into_option() {
            Some(value) => function(value).into_maybe(),
            None => Maybe::none(),
        }
    }

    /// Replaces `None` with the container returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let fallback = Maybe::<i32>::none().flat_map_none(|| Some(3));
    /// assert_eq!(fallback.unwrap(), 3);
    /// assert_eq!(some(1).flat_map_none(|| Some(3)).unwrap(), 1);
    /// ```
    pub fn flat_map_none<M, F>(self, function: F) -> Self
    where
        M: MaybeLike<Value = T>,
        F: FnOnce() -> M,
    {
        if self.is_some() {
            self
        } else {
            function().into_maybe()
        }
    }

    /// Like [`bimap`](Maybe::bimap), but both callbacks return containers.
    ///
    /// The result is the re-homed container of whichever callback ran.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let positive = |maybe: Maybe<i32>| maybe.flat_bimap(|x| (x > 0).then_some(x), || Some(1));
    /// assert_eq!(positive(some(5)).unwrap(), 5);
    /// assert!(positive(some(-5)).is_none());
    /// assert_eq!(positive(Maybe::none()).unwrap(), 1);
    /// ```
    pub fn flat_bimap<M, S, N>(self, on_some: S, on_none: N) -> Maybe<M::Value>
    where
        M: MaybeLike,
        S: FnOnce(T) -> M,
        N: FnOnce() -> M,
    {
        self.into_option().map_or_else(on_none, on_some).into_maybe()
    }

    /// Removes one level of nesting.
    ///
    /// A held [`MaybeLike`] collapses into its own variant and value; any
    /// other value stays wrapped as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, none, some};
    ///
    /// assert_eq!(some(some(3)).flat().unwrap(), 3);
    /// assert!(some(none::<i32>()).flat().is_none());
    /// assert!(Maybe::<Maybe<i32>>::none().flat().is_none());
    /// assert_eq!(some(3).flat().unwrap(), 3);
    /// ```
    pub fn flat(self) -> Maybe<T::Flat>
    where
        T: Nested,
    {
        self.into_option()
            .map_or_else(Maybe::none, Nested::flatten_into)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Calls `function` with the held value and returns the container
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let mut seen = Vec::new();
    /// let value = some(3).tap(|x| seen.push(*x)).unwrap();
    /// assert_eq!((value, seen), (3, vec![3]));
    /// ```
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value() {
            function(value);
        }
        self
    }

    /// Calls `function` if the container is empty and returns the container
    /// unchanged.
    pub fn tap_none<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            function();
        }
        self
    }

    /// Calls `function` with the whole container, whatever its variant, and
    /// returns the container unchanged.
    pub fn tap_self<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Calls exactly one of the callbacks, depending on the variant, and
    /// returns the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let mut log = Vec::new();
    /// let _ = some(1).tap_both(|x| log.push(format!("some {x}")), || {});
    /// let _ = Maybe::<i32>::none().tap_both(|_| {}, || log.push("none".to_string()));
    /// assert_eq!(log, ["some 1", "none"]);
    /// ```
    pub fn tap_both<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match self.value() {
            Some(value) => on_some(value),
            None => on_none(),
        }
        self
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Keeps the held value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(4).filter(|x| x % 2 == 0).unwrap(), 4);
    /// assert!(some(3).filter(|x| x % 2 == 0).is_none());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        let (value, sequence) = self.into_parts();
        match value {
            Some(value) if predicate(&value) => Self::from_parts(Some(value), sequence),
            _ => Self::none(),
        }
    }

    /// Drops the held value if it equals `excluded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert!(some("n/a").exclude(&"n/a").is_none());
    /// assert_eq!(some("ok").exclude(&"n/a").unwrap(), "ok");
    /// ```
    #[inline]
    pub fn exclude(self, excluded: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter(|value| value != excluded)
    }

    /// Drops a falsy held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert!(some(0).compact().is_none());
    /// assert!(some("").compact().is_none());
    /// assert_eq!(some("x").compact().unwrap(), "x");
    /// ```
    #[inline]
    pub fn compact(self) -> Self
    where
        T: Truthy,
    {
        self.filter(Truthy::is_truthy)
    }
}

// =============================================================================
// Absence markers
// =============================================================================

impl<T: Nullish> Maybe<T> {
    /// Drops a held value that is null or missing, unwrapping the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Nullable, some};
    ///
    /// assert_eq!(some(Some(1)).not_nullable().unwrap(), 1);
    /// assert!(some(None::<i32>).not_nullable().is_none());
    /// assert!(some(Nullable::<i32>::Null).not_nullable().is_none());
    /// ```
    pub fn not_nullable(self) -> Maybe<T::NonNull> {
        self.into_option()
            .and_then(Nullish::into_non_null)
            .into()
    }

    /// Alias of [`not_nullable`](Maybe::not_nullable).
    #[inline]
    pub fn defined(self) -> Maybe<T::NonNull> {
        self.not_nullable()
    }
}

impl<T> Maybe<Nullable<T>> {
    /// Drops a missing held value.
    ///
    /// An explicit null stays present, as the inner `None`.
    pub fn not_undefined(self) -> Maybe<Option<T>> {
        self.into_option()
            .and_then(|value| match value {
                Nullable::Value(value) => Some(Some(value)),
                Nullable::Null => Some(None),
                Nullable::Undefined => None,
            })
            .into()
    }

    /// Drops an explicitly null held value.
    ///
    /// A missing value stays present, as the inner `None`.
    pub fn not_null(self) -> Maybe<Option<T>> {
        self.into_option()
            .and_then(|value| match value {
                Nullable::Value(value) => Some(Some(value)),
                Nullable::Undefined => Some(None),
                Nullable::Null => None,
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::some;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_none_never_invokes_callbacks() {
        let calls = Cell::new(0);
        let bump = || calls.set(calls.get() + 1);
        let empty = Maybe::<i32>::none();

        let _ = empty
            .clone()
            .map(|x| {
                bump();
                x
            })
            .filter(|_| {
                bump();
                true
            })
            .tap(|_| bump())
            .flat_map(|x| {
                bump();
                Some(x)
            });
        assert_eq!(calls.get(), 0);

        let _ = empty.tap_none(bump);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_filter_keeps_sequence_view() {
        let set = some(std::collections::BTreeSet::from([2, 1]));
        assert_eq!(set.at(0).unwrap(), 1);
        let kept = set.filter(|values| values.len() == 2);
        assert!(kept.sequence().is_materialized());
    }

    #[rstest]
    #[case(Nullable::Value(1), Some(Some(1)), Some(Some(1)))]
    #[case(Nullable::Null, Some(None), None)]
    #[case(Nullable::Undefined, None, Some(None))]
    fn test_absence_narrowing(
        #[case] value: Nullable<i32>,
        #[case] not_undefined: Option<Option<i32>>,
        #[case] not_null: Option<Option<i32>>,
    ) {
        assert_eq!(some(value).not_undefined().into_option(), not_undefined);
        assert_eq!(some(value).not_null().into_option(), not_null);
        assert_eq!(
            some(value).not_nullable().into_option(),
            value.into_option()
        );
    }

    #[rstest]
    fn test_flat_bimap_rehomes_result() {
        let ok: Maybe<i32> = some(2).flat_bimap(|x| Ok::<_, ()>(x * 10), || Err(()));
        assert_eq!(ok.unwrap(), 20);
    }
}
