//! Numeric coercion of values.
//!
//! [`ToNumber`] follows the rules of the JavaScript `Number(x)` conversion,
//! which is what the numeric operators of [`Maybe`](crate::Maybe) compare and
//! compute with. The string scanners defined here are shared with
//! [`Maybe::parse_float`](crate::Maybe::parse_float).

use std::fmt::{Display, LowerExp};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::Nullable;

/// Conversion of a value to an `f64`, JavaScript `Number(x)` style.
///
/// | value | number |
/// |-------|--------|
/// | integers and floats | themselves (nearest `f64`) |
/// | `bool` | `0` or `1` |
/// | strings | the decimal, `Infinity`, `0x`/`0o`/`0b` literal they spell, `0` when blank, otherwise `NaN` |
/// | `SystemTime` | milliseconds since the Unix epoch |
/// | `Duration` | milliseconds |
/// | `Nullable::Null` | `0` |
/// | `()`, `Option::None`, `Nullable::Undefined` | `NaN` |
///
/// # Examples
///
/// ```rust
/// use maybe_chain::ToNumber;
///
/// assert_eq!(" 42 ".to_number(), 42.0);
/// assert_eq!("0x1f".to_number(), 31.0);
/// assert_eq!("".to_number(), 0.0);
/// assert!("42px".to_number().is_nan());
/// assert_eq!(true.to_number(), 1.0);
/// ```
pub trait ToNumber {
    /// Returns the numeric value, `NaN` when there is none.
    fn to_number(&self) -> f64;
}

macro_rules! impl_to_number_lossless {
    ($($number:ty),+ $(,)?) => {
        $(
            impl ToNumber for $number {
                #[inline]
                fn to_number(&self) -> f64 {
                    f64::from(*self)
                }
            }
        )+
    };
}

impl_to_number_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_to_number_nearest {
    ($($number:ty),+ $(,)?) => {
        $(
            impl ToNumber for $number {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )+
    };
}

impl_to_number_nearest!(i64, i128, isize, u64, u128, usize);

impl ToNumber for bool {
    #[inline]
    fn to_number(&self) -> f64 {
        f64::from(u8::from(*self))
    }
}

impl ToNumber for char {
    fn to_number(&self) -> f64 {
        string_to_number(self.encode_utf8(&mut [0; 4]))
    }
}

impl ToNumber for str {
    #[inline]
    fn to_number(&self) -> f64 {
        string_to_number(self)
    }
}

impl ToNumber for String {
    #[inline]
    fn to_number(&self) -> f64 {
        string_to_number(self)
    }
}

impl ToNumber for () {
    #[inline]
    fn to_number(&self) -> f64 {
        f64::NAN
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    #[inline]
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, ToNumber::to_number)
    }
}

impl<T: ToNumber> ToNumber for Nullable<T> {
    fn to_number(&self) -> f64 {
        match self {
            Self::Value(value) => value.to_number(),
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
        }
    }
}

impl ToNumber for SystemTime {
    #[allow(clippy::cast_precision_loss)]
    fn to_number(&self) -> f64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as f64,
            Err(error) => -(error.duration().as_millis() as f64),
        }
    }
}

impl ToNumber for Duration {
    #[inline]
    fn to_number(&self) -> f64 {
        self.as_secs_f64() * 1000.0
    }
}

impl<T: ToNumber + ?Sized> ToNumber for &T {
    #[inline]
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

impl<T: ToNumber + ?Sized> ToNumber for Box<T> {
    #[inline]
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

// =============================================================================
// String scanning
// =============================================================================

const INFINITY: &str = "Infinity";

/// Whitespace as trimmed by the JavaScript string-to-number conversions.
#[inline]
pub(crate) fn is_js_whitespace(character: char) -> bool {
    character.is_whitespace() || character == '\u{feff}'
}

/// Byte length of the longest decimal literal at the start of `text`.
///
/// Accepts `[sign] (digits [. [digits]] | . digits) [(e|E) [sign] digits]`.
/// An exponent marker without digits is not part of the literal.
pub(crate) fn decimal_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let is_digit_at = |position: usize| bytes.get(position).is_some_and(u8::is_ascii_digit);

    let mut position = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_start = position;
    while is_digit_at(position) {
        position += 1;
    }
    let mut digits = position - integer_start;

    if bytes.get(position) == Some(&b'.') {
        let fraction_start = position + 1;
        let mut end = fraction_start;
        while is_digit_at(end) {
            end += 1;
        }
        if digits + (end - fraction_start) > 0 {
            digits += end - fraction_start;
            position = end;
        }
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        let mut end = position + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exponent_start = end;
        while is_digit_at(end) {
            end += 1;
        }
        if end > exponent_start {
            position = end;
        }
    }
    position
}

/// A signed `Infinity` at the start of `text`, with its byte length.
fn infinity_prefix(text: &str) -> Option<(f64, usize)> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    rest.starts_with(INFINITY)
        .then(|| (sign * f64::INFINITY, text.len() - rest.len() + INFINITY.len()))
}

/// An unsigned `0x`, `0o` or `0b` literal spanning all of `text`.
fn radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |accumulator, character| {
        character
            .to_digit(radix)
            .map(|digit| accumulator.mul_add(f64::from(radix), f64::from(digit)))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// `Number(text)`: the whole trimmed string must be a numeric literal.
pub(crate) fn string_to_number(text: &str) -> f64 {
    let text = text.trim_matches(is_js_whitespace);
    if text.is_empty() {
        return 0.0;
    }
    if let Some(value) = radix_literal(text) {
        return value;
    }
    if let Some((value, length)) = infinity_prefix(text) {
        return if length == text.len() { value } else { f64::NAN };
    }
    let length = decimal_prefix_len(text);
    if length == 0 || length != text.len() {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// `parseFloat(text)`: the longest numeric prefix after leading whitespace.
pub(crate) fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start_matches(is_js_whitespace);
    if let Some((value, _)) = infinity_prefix(text) {
        return value;
    }
    match decimal_prefix_len(text) {
        0 => f64::NAN,
        length => text[..length].parse().unwrap_or(f64::NAN),
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Smallest magnitude rendered without an exponent by [`number_to_text`].
const PLAIN_LOWER: f64 = 1e-6;

/// Magnitude from which [`number_to_text`] switches to an exponent.
const PLAIN_UPPER: f64 = 1e21;

/// Renders `NaN` and the infinities, `None` for finite values.
pub(crate) fn non_finite_text(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { INFINITY.to_string() } else { format!("-{INFINITY}") })
    } else {
        None
    }
}

/// Shortest round-trip rendering in exponential notation, `1.5e+21` style.
pub(crate) fn exponential_text<F: LowerExp>(value: F) -> String {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// `Number.prototype.toString()`: the shortest digits that read back as
/// `value`, with an exponent below `1e-6` and from `1e21` up.
///
/// Both zeros render as `0`.
pub(crate) fn number_to_text<F>(value: F) -> String
where
    F: Copy + Into<f64> + Display + LowerExp,
{
    let wide: f64 = value.into();
    if let Some(rendered) = non_finite_text(wide) {
        return rendered;
    }
    if wide == 0.0 {
        return "0".to_string();
    }
    if (PLAIN_LOWER..PLAIN_UPPER).contains(&wide.abs()) {
        value.to_string()
    } else {
        exponential_text(value)
    }
}
