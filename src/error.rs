//! Error types for the `Maybe` container.
//!
//! The container itself never fails to construct. The only failure the
//! library reports on its own is unwrapping an empty container.

use thiserror::Error;

/// Represents errors raised by [`Maybe`](crate::Maybe) operations.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{Maybe, MaybeError};
///
/// let empty: Maybe<i32> = Maybe::none();
/// assert_eq!(empty.try_unwrap(), Err(MaybeError::EmptyUnwrap));
/// assert_eq!(
///     MaybeError::EmptyUnwrap.to_string(),
///     "called `Maybe::unwrap()` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MaybeError {
    /// A `None` container was unwrapped.
    #[error("called `Maybe::unwrap()` on a `None` value")]
    EmptyUnwrap,
}
