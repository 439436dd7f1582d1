//! Combinators over several branches: `all`, `all_obj` and `race`.
//!
//! A branch is a function that receives the root container (not its
//! value) and returns any [`MaybeLike`]. Branches can therefore reuse the
//! root and chain further operators before producing their own result.
//!
//! Branches run sequentially in declaration order. Tuples of up to twelve
//! branches, arrays, `Vec`s and (for `all`) `BTreeMap`s are accepted.

use std::collections::BTreeMap;

use super::Maybe;
use crate::interop::MaybeLike;

/// A collection of branches that [`Maybe::all`] evaluates.
///
/// The output has the same shape as the input: a tuple of values for a
/// tuple of branches, a map with the same keys for a map of branches.
pub trait Branches<T> {
    /// The collected values.
    type Output;

    /// Runs the branches against `root`, stopping at the first `None`.
    fn evaluate(self, root: &Maybe<T>) -> Maybe<Self::Output>;
}

/// A collection of branches that [`Maybe::race`] evaluates.
///
/// Every branch must produce the same value type.
pub trait Contenders<T> {
    /// The value type shared by the branches.
    type Output;

    /// Runs the branches against `root`, stopping at the first `Some`.
    fn first_some(self, root: &Maybe<T>) -> Maybe<Self::Output>;
}

impl<T> Maybe<T> {
    /// Runs every branch and collects their values, or `None` as soon as one
    /// branch yields `None`.
    ///
    /// Later branches are not invoked once a branch yields `None`. On an
    /// empty container no branch is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let point = some("3,4").all((
    ///     |text: &Maybe<&str>| text.slice(0, Some(1)).parse_int(10),
    ///     |text: &Maybe<&str>| text.slice(2, None).parse_int(10),
    /// ));
    /// assert_eq!(point.unwrap(), (3.0, 4.0));
    ///
    /// let partial = some("3").all((
    ///     |text: &Maybe<&str>| text.parse_int(10),
    ///     |_: &Maybe<&str>| None::<f64>,
    /// ));
    /// assert!(partial.is_none());
    /// ```
    pub fn all<B>(&self, branches: B) -> Maybe<B::Output>
    where
        B: Branches<T>,
    {
        if self.is_none() {
            return Maybe::none();
        }
        branches.evaluate(self)
    }

    /// Keyed form of [`all`](Maybe::all): the result is a map with the keys
    /// of `branches`.
    ///
    /// Branches run in the order `branches` yields them, so a `Vec` or an
    /// array of `(key, branch)` pairs runs in declaration order and a
    /// `BTreeMap` runs in key order. Later branches are not invoked once a
    /// branch yields `None`. A repeated key keeps the value of its last
    /// branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// type Branch = fn(&Maybe<i32>) -> Maybe<i32>;
    ///
    /// let branches: [(&str, Branch); 2] = [
    ///     ("square", |m: &Maybe<i32>| m.clone().map(|x| x * x)),
    ///     ("double", |m: &Maybe<i32>| m.clone().map(|x| x * 2)),
    /// ];
    /// let results = some(3).all_obj(branches).unwrap();
    /// assert_eq!(results["double"], 6);
    /// assert_eq!(results["square"], 9);
    /// ```
    pub fn all_obj<K, F, M, I>(&self, branches: I) -> Maybe<BTreeMap<K, M::Value>>
    where
        I: IntoIterator<Item = (K, F)>,
        K: Ord,
        F: FnOnce(&Self) -> M,
        M: MaybeLike,
    {
        if self.is_none() {
            return Maybe::none();
        }
        branches
            .into_iter()
            .map(|(key, branch)| branch(self).into_maybe().into_option().map(|value| (key, value)))
            .collect::<Option<BTreeMap<_, _>>>()
            .into()
    }

    /// Returns the first branch result that is `Some`.
    ///
    /// Later branches are not invoked once one yields `Some`. `None` if
    /// every branch yields `None` or the container itself is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let port = some("http").race((
    ///     |scheme: &Maybe<&str>| scheme.clone().exclude(&"http").map(|_| 8443),
    ///     |scheme: &Maybe<&str>| scheme.clone().map(|_| 80),
    /// ));
    /// assert_eq!(port.unwrap(), 80);
    /// ```
    pub fn race<C>(&self, contenders: C) -> Maybe<C::Output>
    where
        C: Contenders<T>,
    {
        if self.is_none() {
            return Maybe::none();
        }
        contenders.first_some(self)
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_tuple_combinators {
    ($(($function:ident, $like:ident)),+ $(,)?) => {
        paste::paste! {
            impl<T, $($function, $like),+> Branches<T> for ($($function,)+)
            where
                $(
                    $function: FnOnce(&Maybe<T>) -> $like,
                    $like: MaybeLike,
                )+
            {
                type Output = ($($like::Value,)+);

                fn evaluate(self, root: &Maybe<T>) -> Maybe<Self::Output> {
                    let ($([<$function:lower>],)+) = self;
                    $(
                        let Some([<$like:lower>]) = [<$function:lower>](root).into_maybe().into_option() else {
                            return Maybe::none();
                        };
                    )+
                    Maybe::some(($([<$like:lower>],)+))
                }
            }

            impl<T, U, $($function, $like),+> Contenders<T> for ($($function,)+)
            where
                $(
                    $function: FnOnce(&Maybe<T>) -> $like,
                    $like: MaybeLike<Value = U>,
                )+
            {
                type Output = U;

                fn first_some(self, root: &Maybe<T>) -> Maybe<U> {
                    let ($([<$function:lower>],)+) = self;
                    $(
                        let candidate = [<$function:lower>](root).into_maybe();
                        if candidate.is_some() {
                            return candidate;
                        }
                    )+
                    Maybe::none()
                }
            }
        }
    };
}

impl_tuple_combinators!((F0, M0));
impl_tuple_combinators!((F0, M0), (F1, M1));
impl_tuple_combinators!((F0, M0), (F1, M1), (F2, M2));
impl_tuple_combinators!((F0, M0), (F1, M1), (F2, M2), (F3, M3));
impl_tuple_combinators!((F0, M0), (F1, M1), (F2, M2), (F3, M3), (F4, M4));
impl_tuple_combinators!((F0, M0), (F1, M1), (F2, M2), (F3, M3), (F4, M4), (F5, M5));
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6)
);
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6),
    (F7, M7)
);
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6),
    (F7, M7),
    (F8, M8)
);
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6),
    (F7, M7),
    (F8, M8),
    (F9, M9)
);
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6),
    (F7, M7),
    (F8, M8),
    (F9, M9),
    (F10, M10)
);
impl_tuple_combinators!(
    (F0, M0),
    (F1, M1),
    (F2, M2),
    (F3, M3),
    (F4, M4),
    (F5, M5),
    (F6, M6),
    (F7, M7),
    (F8, M8),
    (F9, M9),
    (F10, M10),
    (F11, M11)
);

// =============================================================================
// Homogeneous collections
// =============================================================================

fn collect_values<T, F, M, I>(branches: I, root: &Maybe<T>) -> Option<Vec<M::Value>>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    branches
        .into_iter()
        .map(|branch| branch(root).into_maybe().into_option())
        .collect()
}

fn first_some_of<T, F, M, I>(contenders: I, root: &Maybe<T>) -> Maybe<M::Value>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    contenders
        .into_iter()
        .map(|contender| contender(root).into_maybe())
        .find(Maybe::is_some)
        .unwrap_or_default()
}

impl<T, F, M, const N: usize> Branches<T> for [F; N]
where
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    type Output = [M::Value; N];

    fn evaluate(self, root: &Maybe<T>) -> Maybe<Self::Output> {
        collect_values(self, root)
            .and_then(|values| values.try_into().ok())
            .into()
    }
}

impl<T, F, M> Branches<T> for Vec<F>
where
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    type Output = Vec<M::Value>;

    fn evaluate(self, root: &Maybe<T>) -> Maybe<Self::Output> {
        collect_values(self, root).into()
    }
}

impl<T, K, F, M> Branches<T> for BTreeMap<K, F>
where
    K: Ord,
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    type Output = BTreeMap<K, M::Value>;

    fn evaluate(self, root: &Maybe<T>) -> Maybe<Self::Output> {
        self.into_iter()
            .map(|(key, branch)| branch(root).into_maybe().into_option().map(|value| (key, value)))
            .collect::<Option<BTreeMap<_, _>>>()
            .into()
    }
}

impl<T, F, M, const N: usize> Contenders<T> for [F; N]
where
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    type Output = M::Value;

    fn first_some(self, root: &Maybe<T>) -> Maybe<M::Value> {
        first_some_of(self, root)
    }
}

impl<T, F, M> Contenders<T> for Vec<F>
where
    F: FnOnce(&Maybe<T>) -> M,
    M: MaybeLike,
{
    type Output = M::Value;

    fn first_some(self, root: &Maybe<T>) -> Maybe<M::Value> {
        first_some_of(self, root)
    }
}
