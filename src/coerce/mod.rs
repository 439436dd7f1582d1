//! Coercing operators: numbers, strings and sequences.
//!
//! These operators convert the held value (with [`ToNumber`], [`ToText`]
//! or [`Truthy`]) before applying the usual numeric or string operation,
//! and wrap the result in a new container. Filters such as [`Maybe::gt`]
//! keep the original value instead.
//!
//! ```rust
//! use maybe_chain::{Case, some};
//!
//! let price = some(" 19.999 ").trim().parse_float().to_fixed(2);
//! assert_eq!(price.unwrap(), "20.00");
//!
//! let tag = some("Release").lc().start_with("#", Case::Sensitive);
//! assert_eq!(tag.unwrap(), "#release");
//! ```
//!
//! [`ToNumber`]: crate::value::ToNumber
//! [`ToText`]: crate::value::ToText
//! [`Truthy`]: crate::value::Truthy
//! [`Maybe::gt`]: crate::Maybe::gt

mod decimal;
mod numeric;
mod text;

pub use text::{Case, Search, Slice};
