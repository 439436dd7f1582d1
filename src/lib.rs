//! # maybe-chain
//!
//! A chainable optional-value container for Rust.
//!
//! ## Overview
//!
//! [`Maybe<T>`] is a two-variant container: it either holds exactly one value
//! (`Some`) or nothing (`None`). On top of that sits a large combinator
//! surface so that potentially missing values, parse results and indexed
//! accesses can be handled in one fluent chain:
//!
//! - **Core**: construction, tag inspection, unwrapping
//! - **Transformations**: `map`, `flat_map`, `filter`, `bimap`, the `tap` family
//! - **Combinators**: `all`, `all_obj`, `race`
//! - **Accessors and coercions**: `at`, `pluck`, numeric and string helpers,
//!   regular-expression matching
//! - **Interoperability**: the [`MaybeLike`] trait lets containers produced by
//!   other implementations flow through every chain
//!
//! Every operator short-circuits on `None`: callbacks are never invoked and
//! absence propagates unchanged.
//!
//! ## Feature Flags
//!
//! - `pattern` (default): regular-expression operators
//! - `serde`: `Serialize`/`Deserialize` for `Maybe<T>`
//! - `json`: `serde_json::Value` support for every value trait
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_chain::prelude::*;
//!
//! let port = some(" 8080 ")
//!     .trim()
//!     .parse_int(10)
//!     .gt(1023)
//!     .unwrap_or(80.0);
//! assert_eq!(port, 8080.0);
//!
//! let missing = Maybe::from(None::<&str>).trim().parse_int(10);
//! assert!(missing.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its constructors and the value traits.
///
/// # Usage
///
/// ```rust
/// use maybe_chain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::{AtIndex, Pluck};
    pub use crate::coerce::{Case, Search, Slice};
    pub use crate::error::MaybeError;
    pub use crate::interop::{MaybeLike, Nested, is_none, is_some};
    pub use crate::maybe::{Branches, Contenders, ErrorLike, Maybe, Tag, none, some};
    pub use crate::value::{Nullable, Nullish, ToNumber, ToText, Truthy};

    #[cfg(feature = "pattern")]
    pub use crate::pattern::{MatchArray, Pattern};
}

pub mod access;
pub mod coerce;
pub mod error;
pub mod interop;
pub mod maybe;
pub mod value;

#[cfg(feature = "pattern")]
pub mod pattern;

#[cfg(feature = "json")]
mod json;

pub use coerce::Case;
pub use error::MaybeError;
pub use interop::{MaybeLike, Nested, is_none, is_some};
pub use maybe::{Maybe, Tag, none, some};
pub use value::{Nullable, Nullish, ToNumber, ToText, Truthy};
