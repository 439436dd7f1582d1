//! Decimal rendering of numbers: fixed-point and significant-digit
//! notation, and the integer parser behind `parse_int`.
//!
//! Rounding works on the exact decimal expansion of the `f64`, so ties are
//! real ties and are resolved upward in magnitude.

use crate::value::{exponential_text, non_finite_text};

/// Largest magnitude rendered in fixed-point notation by [`to_fixed`].
const FIXED_LIMIT: f64 = 1e21;

/// Maximum number of digits accepted by [`to_fixed`] and [`to_precision`].
pub(crate) const MAX_DIGITS: usize = 100;

/// Every finite `f64` has at most this many fractional decimal digits.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// The exact decimal digits of `|value|` and the number of integer digits.
fn exact_digits(value: f64) -> (Vec<u8>, usize) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let integer_len = exact.find('.').unwrap_or(exact.len());
    let digits = exact.bytes().filter(u8::is_ascii_digit).collect();
    (digits, integer_len)
}

fn push_digits(rendered: &mut String, digits: &[u8]) {
    rendered.extend(digits.iter().copied().map(char::from));
}

/// Adds one unit in the last place; returns `true` if a digit was prepended.
fn increment(digits: &mut Vec<u8>) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// Truncates `digits` to `keep` digits, rounding half up on the first
/// dropped digit. Returns `true` if rounding carried into a new leading
/// digit.
fn round_to(digits: &mut Vec<u8>, keep: usize) -> bool {
    let round_up = digits.get(keep).is_some_and(|digit| *digit >= b'5');
    digits.resize(keep, b'0');
    round_up && increment(digits)
}

/// `Number.prototype.toFixed`: `digits` digits after the decimal point.
///
/// `None` when `digits` exceeds [`MAX_DIGITS`]. Magnitudes of `1e21` and
/// above are rendered in exponential notation.
pub(crate) fn to_fixed(value: f64, digits: usize) -> Option<String> {
    if digits > MAX_DIGITS {
        return None;
    }
    if let Some(rendered) = non_finite_text(value) {
        return Some(rendered);
    }
    if value.abs() >= FIXED_LIMIT {
        return Some(exponential_text(value));
    }

    let (mut all_digits, integer_len) = exact_digits(value);
    let carried = round_to(&mut all_digits, integer_len + digits);
    let integer_len = integer_len + usize::from(carried);

    let mut rendered = String::with_capacity(all_digits.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    push_digits(&mut rendered, &all_digits[..integer_len]);
    if digits > 0 {
        rendered.push('.');
        push_digits(&mut rendered, &all_digits[integer_len..]);
    }
    Some(rendered)
}

/// `Number.prototype.toPrecision`: `precision` significant digits.
///
/// `None` when `precision` is outside `1..=MAX_DIGITS`.
pub(crate) fn to_precision(value: f64, precision: usize) -> Option<String> {
    if !(1..=MAX_DIGITS).contains(&precision) {
        return None;
    }
    if let Some(rendered) = non_finite_text(value) {
        return Some(rendered);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (significand, exponent) = if value == 0.0 {
        (vec![b'0'; precision], 0_isize)
    } else {
        let (mut all_digits, integer_len) = exact_digits(value);
        let leading = all_digits
            .iter()
            .position(|digit| *digit != b'0')
            .unwrap_or_default();
        let mut exponent = integer_len.cast_signed() - leading.cast_signed() - 1;
        let mut significand = all_digits.split_off(leading);
        if round_to(&mut significand, precision) {
            significand.truncate(precision);
            exponent += 1;
        }
        (significand, exponent)
    };

    let precision_signed = precision.cast_signed();
    let body: String = if exponent < -6 || exponent >= precision_signed {
        let (first, rest) = significand.split_at(1);
        let mut mantissa = String::new();
        push_digits(&mut mantissa, first);
        if !rest.is_empty() {
            mantissa.push('.');
            push_digits(&mut mantissa, rest);
        }
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{exponent_sign}{}", exponent.unsigned_abs())
    } else if exponent >= 0 {
        let integer_len = exponent.unsigned_abs() + 1;
        let (integer, fraction) = significand.split_at(integer_len);
        let mut fixed = String::new();
        push_digits(&mut fixed, integer);
        if !fraction.is_empty() {
            fixed.push('.');
            push_digits(&mut fixed, fraction);
        }
        fixed
    } else {
        let zeros = exponent.unsigned_abs() - 1;
        let mut fixed = String::from("0.");
        fixed.extend(std::iter::repeat_n('0', zeros));
        push_digits(&mut fixed, &significand);
        fixed
    };
    Some(format!("{sign}{body}"))
}

/// `parseInt`: the longest integer prefix of `text` in `radix`.
///
/// Radix `0` auto-detects: a `0x`/`0X` prefix selects 16, anything else 10.
/// A radix outside `2..=36` yields `None`, as does a missing digit prefix.
/// Digit strings too long for an exact `f64` read as the nearest one.
pub(crate) fn parse_int(text: &str, radix: u32) -> Option<f64> {
    let text = text.trim_start_matches(crate::value::is_js_whitespace);
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let has_hex_prefix = matches!(text.get(..2), Some("0x" | "0X"));
    let (radix, text) = match radix {
        0 if has_hex_prefix => (16, &text[2..]),
        0 => (10, text),
        16 if has_hex_prefix => (16, &text[2..]),
        2..=36 => (radix, text),
        _ => return None,
    };

    let length = text
        .find(|character: char| !character.is_digit(radix))
        .unwrap_or(text.len());
    if length == 0 {
        return None;
    }
    let digits = &text[..length];
    let magnitude = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|character| character.to_digit(radix))
            .fold(0.0_f64, |accumulator, digit| {
                accumulator.mul_add(f64::from(radix), f64::from(digit))
            })
    };
    Some(if negative { -magnitude } else { magnitude })
}
