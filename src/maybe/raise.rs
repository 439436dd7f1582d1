//! Turning held failures back into errors.
//!
//! The `throw` family is the bridge from a `Maybe` chain to ordinary Rust
//! error handling: a held value of a failure shape becomes the `Err` of a
//! `Result`, anything else continues as a container. An empty container
//! always passes through as `Ok`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::error::Error;
use std::hash::{BuildHasher, Hash};
use std::num::{ParseFloatError, ParseIntError};

use super::Maybe;
use crate::error::MaybeError;

/// Values that are errors, or that look like one.
///
/// A value is error-like when it is an error instance, or when it is a
/// record carrying a string `message` field.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::maybe::ErrorLike;
/// use std::collections::HashMap;
///
/// let record = HashMap::from([("message", "disk full")]);
/// assert!(record.is_error_like());
///
/// let other = HashMap::from([("status", "ok")]);
/// assert!(!other.is_error_like());
/// ```
pub trait ErrorLike {
    /// Returns `true` if the value should be raised by
    /// [`Maybe::throw_error_like`].
    fn is_error_like(&self) -> bool;
}

macro_rules! impl_error_like_for_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl ErrorLike for $error {
                #[inline]
                fn is_error_like(&self) -> bool {
                    true
                }
            }
        )+
    };
}

impl_error_like_for_error!(
    Box<dyn Error>,
    Box<dyn Error + Send + Sync>,
    std::io::Error,
    std::fmt::Error,
    ParseIntError,
    ParseFloatError,
    MaybeError,
);

impl ErrorLike for str {
    #[inline]
    fn is_error_like(&self) -> bool {
        false
    }
}

impl ErrorLike for String {
    #[inline]
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for &T {
    #[inline]
    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}

impl<K, V, S> ErrorLike for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn is_error_like(&self) -> bool {
        self.contains_key("message")
    }
}

impl<K, V> ErrorLike for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn is_error_like(&self) -> bool {
        self.contains_key("message")
    }
}

impl<T> Maybe<T> {
    /// Returns the held error as `Err`; an empty container passes as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the held value when the container is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Maybe, some};
    ///
    /// let failure = "x".parse::<i32>().unwrap_err();
    /// assert!(some(failure).throw().is_err());
    ///
    /// let nothing: Maybe<std::fmt::Error> = Maybe::none();
    /// assert!(nothing.throw().is_ok());
    /// ```
    #[inline]
    pub fn throw(self) -> Result<Maybe<Infallible>, T>
    where
        T: Error,
    {
        self.throw_w()
    }

    /// Like [`throw`](Maybe::throw), but for any held value.
    ///
    /// # Errors
    ///
    /// Returns the held value when the container is `Some`.
    pub fn throw_w(self) -> Result<Maybe<Infallible>, T> {
        match self.into_option() {
            Some(value) => Err(value),
            None => Ok(Maybe::none()),
        }
    }

    /// Returns an error-like held value as `Err`, passing anything else
    /// through.
    ///
    /// # Errors
    ///
    /// Returns the held value when it is [`ErrorLike`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    /// use std::collections::HashMap;
    ///
    /// let failure = some(HashMap::from([("message", "timeout")]));
    /// assert!(failure.throw_error_like().is_err());
    ///
    /// let record = some(HashMap::from([("id", "7")]));
    /// assert!(record.throw_error_like().unwrap().is_some());
    /// ```
    pub fn throw_error_like(self) -> Result<Self, T>
    where
        T: ErrorLike,
    {
        match self.into_parts() {
            (Some(value), _) if value.is_error_like() => Err(value),
            (value, sequence) => Ok(Self::from_parts(value, sequence)),
        }
    }
}

impl<V, E> Maybe<Result<V, E>> {
    /// Returns a held `Err` as `Err`; a held `Ok` continues unwrapped.
    ///
    /// # Errors
    ///
    /// Returns the held error when the container holds `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let parsed = some("42".parse::<i32>()).throw_error();
    /// assert_eq!(parsed.unwrap().unwrap(), 42);
    ///
    /// let failed = some("4x".parse::<i32>()).throw_error();
    /// assert!(failed.is_err());
    /// ```
    pub fn throw_error(self) -> Result<Maybe<V>, E> {
        match self.into_option() {
            Some(Ok(value)) => Ok(Maybe::some(value)),
            Some(Err(error)) => Err(error),
            None => Ok(Maybe::none()),
        }
    }
}
