//! Numeric operators.


use super::decimal;
use crate::maybe::Maybe;
use crate::value::{ToNumber, ToText, parse_float_prefix};

/// `Math.min` / `Math.max` style: `NaN` wins over any number.
fn propagate_nan(left: f64, right: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        pick(left, right)
    }
}

/// Rounds half up, toward positive infinity.
fn round_half_up(number: f64) -> f64 {
    let floor = number.floor();
    if number - floor >= 0.5 { floor + 1.0 } else { floor }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Comparisons
    // =========================================================================

    /// Keeps the held value if its numeric value is greater than `bound`.
    ///
    /// Both sides are converted with [`ToNumber`], so numbers, numeric
    /// strings and times can be compared with each other. `NaN` never
    /// compares.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// assert_eq!(some(5).gt(3).unwrap(), 5);
    /// assert!(some("2").gt(3).is_none());
    ///
    /// let deadline = UNIX_EPOCH + Duration::from_secs(60);
    /// assert!(some(UNIX_EPOCH + Duration::from_secs(61)).gt(deadline).is_some());
    /// ```
    #[inline]
    pub fn gt<N: ToNumber>(self, bound: N) -> Self
    where
        T: ToNumber,
    {
        let bound = bound.to_number();
        self.filter(|value| value.to_number() > bound)
    }

    /// Keeps the held value if its numeric value is at least `bound`.
    #[inline]
    pub fn gte<N: ToNumber>(self, bound: N) -> Self
    where
        T: ToNumber,
    {
        let bound = bound.to_number();
        self.filter(|value| value.to_number() >= bound)
    }

    /// Keeps the held value if its numeric value is less than `bound`.
    #[inline]
    pub fn lt<N: ToNumber>(self, bound: N) -> Self
    where
        T: ToNumber,
    {
        let bound = bound.to_number();
        self.filter(|value| value.to_number() < bound)
    }

    /// Keeps the held value if its numeric value is at most `bound`.
    #[inline]
    pub fn lte<N: ToNumber>(self, bound: N) -> Self
    where
        T: ToNumber,
    {
        let bound = bound.to_number();
        self.filter(|value| value.to_number() <= bound)
    }

    // =========================================================================
    // Numeric validity
    // =========================================================================

    /// Converts the held value to a number.
    ///
    /// The conversion never fails; a value without a numeric meaning becomes
    /// `Some(NaN)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("1e3").num().unwrap(), 1000.0);
    /// assert!(some("abc").num().unwrap().is_nan());
    /// ```
    #[inline]
    pub fn num(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.value().map(ToNumber::to_number).into()
    }

    /// Alias of [`num`](Maybe::num).
    #[inline]
    pub fn number(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num()
    }

    /// The numeric value, if it is not `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("12").not_nan().unwrap(), 12.0);
    /// assert!(some("twelve").not_nan().is_none());
    /// ```
    #[inline]
    pub fn not_nan(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().filter(|number| !number.is_nan())
    }

    /// The numeric value, if it is finite.
    #[inline]
    pub fn finite(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().filter(|number| number.is_finite())
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// The smaller of the numeric value and `other`; `NaN` if either is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(7).min(5).unwrap(), 5.0);
    /// assert!(some("x").min(5).unwrap().is_nan());
    /// ```
    pub fn min<N: ToNumber>(self, other: N) -> Maybe<f64>
    where
        T: ToNumber,
    {
        let other = other.to_number();
        self.num().map(|number| propagate_nan(number, other, f64::min))
    }

    /// The larger of the numeric value and `other`; `NaN` if either is.
    pub fn max<N: ToNumber>(self, other: N) -> Maybe<f64>
    where
        T: ToNumber,
    {
        let other = other.to_number();
        self.num().map(|number| propagate_nan(number, other, f64::max))
    }

    /// The absolute numeric value.
    #[inline]
    pub fn abs(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().map(f64::abs)
    }

    /// The numeric value rounded to the nearest integer, halves rounding up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(2.5).round().unwrap(), 3.0);
    /// assert_eq!(some(-2.5).round().unwrap(), -2.0);
    /// ```
    #[inline]
    pub fn round(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().map(round_half_up)
    }

    /// The numeric value rounded down.
    #[inline]
    pub fn floor(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().map(f64::floor)
    }

    /// The numeric value rounded up.
    #[inline]
    pub fn ceil(&self) -> Maybe<f64>
    where
        T: ToNumber,
    {
        self.num().map(f64::ceil)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Formats the numeric value with `digits` digits after the decimal
    /// point.
    ///
    /// `None` when `digits` is greater than 100. Magnitudes of `1e21` and
    /// above use exponential notation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(3.14159).to_fixed(2).unwrap(), "3.14");
    /// assert_eq!(some("2.5").to_fixed(0).unwrap(), "3");
    /// assert!(some(1).to_fixed(101).is_none());
    /// ```
    pub fn to_fixed(&self, digits: usize) -> Maybe<String>
    where
        T: ToNumber,
    {
        self.num()
            .flat_map(|number| decimal::to_fixed(number, digits))
    }

    /// Formats the numeric value with `precision` significant digits.
    ///
    /// `None` when `precision` is not in `1..=100`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(123.456).to_precision(4).unwrap(), "123.5");
    /// assert_eq!(some(1234.5).to_precision(2).unwrap(), "1.2e+3");
    /// assert!(some(1).to_precision(0).is_none());
    /// ```
    pub fn to_precision(&self, precision: usize) -> Maybe<String>
    where
        T: ToNumber,
    {
        self.num()
            .flat_map(|number| decimal::to_precision(number, precision))
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parses the leading integer of the string form of the held value.
    ///
    /// `radix` `0` detects the base: `0x` selects hexadecimal, anything else
    /// decimal. A radix outside `2..=36` or a missing digit prefix yields
    /// `None`. Integers beyond the exact `f64` range read as the nearest
    /// `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("42px").parse_int(10).unwrap(), 42.0);
    /// assert_eq!(some("ff").parse_int(16).unwrap(), 255.0);
    /// assert_eq!(some("0x10").parse_int(0).unwrap(), 16.0);
    /// assert_eq!(some("99999999999999999999").parse_int(10).unwrap(), 1e20);
    /// assert_eq!(some(1e21).parse_int(10).unwrap(), 1.0);
    /// assert!(some("px").parse_int(10).is_none());
    /// ```
    pub fn parse_int(&self, radix: u32) -> Maybe<f64>
    where
        T: ToText,
    {
        self.value()
            .and_then(|value| decimal::parse_int(&value.to_text(), radix))
            .into()
    }

    /// Parses the leading decimal number of the string form of the held
    /// value; `None` when there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(" 3.5kg").parse_float().unwrap(), 3.5);
    /// assert_eq!(some("-Infinity").parse_float().unwrap(), f64::NEG_INFINITY);
    /// assert!(some("kg").parse_float().is_none());
    /// ```
    pub fn parse_float(&self) -> Maybe<f64>
    where
        T: ToText,
    {
        self.value()
            .map(|value| parse_float_prefix(&value.to_text()))
            .filter(|number| !number.is_nan())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::some;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 1.0)]
    #[case(-0.5, 0.0)]
    #[case(1.4, 1.0)]
    #[case(-1.6, -2.0)]
    fn test_round_half_up(#[case] number: f64, #[case] expected: f64) {
        assert_eq!(round_half_up(number), expected);
    }

    #[rstest]
    fn test_round_keeps_non_finite() {
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[rstest]
    fn test_comparisons_with_nan_drop_value() {
        assert!(some("abc").gt(0).is_none());
        assert!(some("abc").lte(0).is_none());
        assert!(some(1).lt(f64::NAN).is_none());
    }

    #[rstest]
    fn test_finite() {
        assert!(some(f64::INFINITY).finite().is_none());
        assert_eq!(some("8").finite().unwrap(), 8.0);
    }

    #[rstest]
    fn test_max_propagates_nan() {
        assert!(some(1).max(f64::NAN).unwrap().is_nan());
        assert_eq!(some(1).max(4_u64).unwrap(), 4.0);
    }
}
