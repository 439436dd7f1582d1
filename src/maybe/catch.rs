//! Constructors that swallow failures.
//!
//! A failure becomes `None` and its detail is discarded, apart from a
//! `debug` event naming the error type.

use std::future::IntoFuture;
use std::panic::{self, AssertUnwindSafe};

use super::Maybe;

impl<T> Maybe<T> {
    /// Runs `function`; `Ok` becomes `Some`, `Err` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::catch(|| "12".parse::<u8>()).unwrap(), 12);
    /// assert!(Maybe::catch(|| "300".parse::<u8>()).is_none());
    /// ```
    pub fn catch<E, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::settle(function())
    }

    /// Runs `function`; a panic becomes `None`.
    ///
    /// The panic hook still runs, so the panic message is printed as usual.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let divisor = std::hint::black_box(0);
    /// let quotient = Maybe::catch_unwind(|| 10 / divisor);
    /// assert!(quotient.is_none());
    /// assert_eq!(Maybe::catch_unwind(|| 10 / 2).unwrap(), 5);
    /// ```
    pub fn catch_unwind<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::some(value),
            Err(_) => {
                tracing::debug!("discarded a panic caught by Maybe::catch_unwind");
                Self::none()
            }
        }
    }

    /// Awaits `operation`; `Ok` becomes `Some`, `Err` becomes `None`.
    ///
    /// Accepts anything that can be awaited into a `Result`, such as an
    /// `async` block or a task handle. A cancelled task surfaces as an error
    /// and therefore as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let value = Maybe::catch_async(async { "7".parse::<i32>() }).await;
    /// assert_eq!(value.unwrap(), 7);
    /// # });
    /// ```
    pub async fn catch_async<E, F>(operation: F) -> Self
    where
        F: IntoFuture<Output = Result<T, E>>,
    {
        Self::settle(operation.await)
    }

    fn settle<E>(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(value) => Self::some(value),
            Err(_) => {
                tracing::debug!(
                    error_type = std::any::type_name::<E>(),
                    "discarded a failure caught by Maybe"
                );
                Self::none()
            }
        }
    }
}
