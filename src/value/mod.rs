//! Value-level coercions used by the operators of [`Maybe`](crate::Maybe).
//!
//! Dynamic data needs four conversions that Rust types do not carry on
//! their own:
//!
//! - [`Truthy`]: boolean coercion (`from_truthy`, `compact`, `bool`)
//! - [`ToNumber`]: numeric coercion (`gt`, `min`, `round`, `not_nan`, ...)
//! - [`ToText`]: string coercion (`str`, `trim`, `parse_int`, `match_pattern`, ...)
//! - [`Nullish`]: stripping the absence markers of [`Nullable`] and `Option`
//!   (`from_non_nullable`, `not_nullable`)

mod nullable;
mod number;
mod text;
mod truthy;

pub use nullable::{Nullable, Nullish};
pub use number::ToNumber;
pub use text::ToText;
pub use truthy::Truthy;

pub(crate) use number::{
    exponential_text, is_js_whitespace, non_finite_text, number_to_text, parse_float_prefix,
};
pub(crate) use text::joined_text;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::time::{Duration, SystemTime};

use crate::access::{AtIndex, SequenceCache, scalar_at};
use crate::interop::Nested;
use crate::maybe::Maybe;

/// Implements [`Nested`] as "nothing to collapse" for non-container values.
macro_rules! impl_nested_for_plain {
    ($($plain:ty => [$($parameter:tt)*]),+ $(,)?) => {
        $(
            impl<$($parameter)*> Nested for $plain {
                type Flat = Self;

                #[inline]
                fn flatten_into(self) -> Maybe<Self> {
                    Maybe::some(self)
                }
            }
        )+
    };
}

/// Scalars: not nested, and indexed as a one-element sequence.
macro_rules! plain_values {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl_nested_for_plain!($scalar => []);

            impl AtIndex for $scalar {
                type Item = Self;

                #[inline]
                fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<Self> {
                    scalar_at(self, index)
                }
            }
        )+
    };
}

plain_values!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    SystemTime, Duration,
);

impl_nested_for_plain!(
    String => [],
    &'a str => ['a],
    Vec<T> => [T],
    VecDeque<T> => [T],
    BTreeSet<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    HashMap<K, V, S> => [K, V, S],
    Nullable<T> => [T],
);
