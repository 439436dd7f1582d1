//! `serde_json::Value` support.
//!
//! Dynamic JSON documents take part in every value trait, so a parsed
//! document can be navigated and coerced in one chain:
//!
//! ```rust
//! use maybe_chain::some;
//! use serde_json::json;
//!
//! let document = some(json!({ "ports": ["80", "8080"], "name": null }));
//! let port = document.pluck("ports").at(-1).num();
//! assert_eq!(port.unwrap(), 8080.0);
//! assert!(document.pluck("name").compact().is_none());
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::access::{AtIndex, Pluck, SequenceCache, resolve_index, scalar_at};
use crate::interop::Nested;
use crate::maybe::{ErrorLike, Maybe};
use crate::value::{ToNumber, ToText, Truthy, joined_text, number_to_text};

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(number) => number.as_f64().is_some_and(|number| number.is_truthy()),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl ToNumber for Value {
    /// `null` is `0`; an array converts through its single element, or is
    /// `0` when empty; objects are `NaN`.
    fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(value) => value.to_number(),
            Self::Number(number) => number.as_f64().unwrap_or(f64::NAN),
            Self::String(text) => text.to_number(),
            Self::Array(items) => match items.as_slice() {
                [] => 0.0,
                [item] => item.to_number(),
                _ => f64::NAN,
            },
            Self::Object(_) => f64::NAN,
        }
    }
}

impl ToText for Value {
    /// Strings render without quotes, numbers like any `f64`, arrays as
    /// their joined elements and objects as `[object Object]`.
    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(value) => value.to_text(),
            Self::Number(number) => {
                Cow::Owned(number.as_f64().map_or_else(|| number.to_string(), number_to_text))
            }
            Self::String(text) => Cow::Borrowed(text),
            Self::Array(items) => Cow::Owned(joined_text(items)),
            Self::Object(_) => Cow::Borrowed("[object Object]"),
        }
    }

    fn to_element_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            _ => self.to_text(),
        }
    }
}

impl AtIndex for Value {
    type Item = Self;

    /// Arrays are indexed by element and strings by character. Any other
    /// value, the empty string included, is a one-element sequence.
    fn item_at(&self, index: isize, cache: &SequenceCache) -> Option<Self> {
        match self {
            Self::Array(items) => {
                resolve_index(items.len(), index).and_then(|position| items.get(position).cloned())
            }
            Self::String(text) if !text.is_empty() => {
                text.item_at(index, cache).map(Self::String)
            }
            _ => scalar_at(self, index),
        }
    }
}

impl Pluck<str> for Value {
    type Value = Self;

    fn has_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains_key(key))
    }

    fn pluck_key(&self, key: &str) -> Option<Self> {
        self.as_object()?.get(key).cloned()
    }
}

impl ErrorLike for Value {
    /// An object with a string `message` field.
    fn is_error_like(&self) -> bool {
        self.get("message").is_some_and(Self::is_string)
    }
}

impl Nested for Value {
    type Flat = Self;

    #[inline]
    fn flatten_into(self) -> Maybe<Self> {
        Maybe::some(self)
    }
}
