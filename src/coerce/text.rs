//! String operators.

use std::ops::Range;

use crate::maybe::Maybe;
use crate::value::{ToText, Truthy, is_js_whitespace};

/// Case sensitivity of the affix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Case {
    /// Characters must match exactly.
    #[default]
    Sensitive,
    /// Characters are compared after lowercasing.
    Insensitive,
}

impl Case {
    fn matches(self, left: &str, right: &str) -> bool {
        match self {
            Self::Sensitive => left == right,
            Self::Insensitive => left.to_lowercase() == right.to_lowercase(),
        }
    }
}

/// Returns the rest of `text` if it starts with `affix`.
fn strip_affix_start<'a>(text: &'a str, affix: &str, case: Case) -> Option<&'a str> {
    let count = affix.chars().count();
    let split = text
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(position, _)| position);
    if text[..split].chars().count() < count {
        return None;
    }
    case.matches(&text[..split], affix).then(|| &text[split..])
}

/// Returns the beginning of `text` if it ends with `affix`.
fn strip_affix_end<'a>(text: &'a str, affix: &str, case: Case) -> Option<&'a str> {
    let count = affix.chars().count();
    if count == 0 {
        return Some(text);
    }
    let split = text
        .char_indices()
        .rev()
        .nth(count - 1)
        .map(|(position, _)| position)?;
    case.matches(&text[split..], affix).then(|| &text[..split])
}

// =============================================================================
// Search
// =============================================================================

/// Search arguments of [`Maybe::replace`] and [`Maybe::replace_all`].
///
/// Implemented for string slices, `String`, `char` and, with the `pattern`
/// feature, [`regex::Regex`]. Replacement strings are inserted literally for
/// literal searches; regular expressions expand `$1` and `$name`.
pub trait Search {
    /// Replaces the first occurrence in `haystack`.
    fn replace_first(&self, haystack: &str, replacement: &str) -> String;

    /// Replaces every occurrence in `haystack`.
    fn replace_every(&self, haystack: &str, replacement: &str) -> String;
}

impl Search for str {
    fn replace_first(&self, haystack: &str, replacement: &str) -> String {
        haystack.replacen(self, replacement, 1)
    }

    fn replace_every(&self, haystack: &str, replacement: &str) -> String {
        haystack.replace(self, replacement)
    }
}

impl Search for String {
    fn replace_first(&self, haystack: &str, replacement: &str) -> String {
        self.as_str().replace_first(haystack, replacement)
    }

    fn replace_every(&self, haystack: &str, replacement: &str) -> String {
        self.as_str().replace_every(haystack, replacement)
    }
}

impl Search for char {
    fn replace_first(&self, haystack: &str, replacement: &str) -> String {
        haystack.replacen(*self, replacement, 1)
    }

    fn replace_every(&self, haystack: &str, replacement: &str) -> String {
        haystack.replace(*self, replacement)
    }
}

impl<S: Search + ?Sized> Search for &S {
    fn replace_first(&self, haystack: &str, replacement: &str) -> String {
        (**self).replace_first(haystack, replacement)
    }

    fn replace_every(&self, haystack: &str, replacement: &str) -> String {
        (**self).replace_every(haystack, replacement)
    }
}

#[cfg(feature = "pattern")]
impl Search for regex::Regex {
    fn replace_first(&self, haystack: &str, replacement: &str) -> String {
        self.replace(haystack, replacement).into_owned()
    }

    fn replace_every(&self, haystack: &str, replacement: &str) -> String {
        self.replace_all(haystack, replacement).into_owned()
    }
}

// =============================================================================
// Slice
// =============================================================================

/// Resolves `start..end` the way `Array.prototype.slice` does.
///
/// Negative bounds count from the end; both bounds are clamped to
/// `0..=length` and an inverted range is empty.
fn clamp_range(length: usize, start: isize, end: Option<isize>) -> Range<usize> {
    let resolve = |bound: isize| {
        if bound < 0 {
            length.saturating_sub(bound.unsigned_abs())
        } else {
            bound.unsigned_abs().min(length)
        }
    };
    let start = resolve(start);
    let end = end.map_or(length, resolve);
    start..end.max(start)
}

/// Values that [`Maybe::slice`] can cut.
///
/// Strings are sliced by characters, sequences by elements.
pub trait Slice {
    /// The owned type of a slice.
    type Output;

    /// Returns the part between `start` (inclusive) and `end` (exclusive,
    /// defaulting to the length). Negative bounds count from the end.
    fn slice_range(&self, start: isize, end: Option<isize>) -> Self::Output;
}

impl Slice for str {
    type Output = String;

    fn slice_range(&self, start: isize, end: Option<isize>) -> String {
        let range = clamp_range(self.chars().count(), start, end);
        self.chars().skip(range.start).take(range.len()).collect()
    }
}

impl Slice for String {
    type Output = String;

    fn slice_range(&self, start: isize, end: Option<isize>) -> String {
        self.as_str().slice_range(start, end)
    }
}

impl<T: Clone> Slice for [T] {
    type Output = Vec<T>;

    fn slice_range(&self, start: isize, end: Option<isize>) -> Vec<T> {
        self[clamp_range(self.len(), start, end)].to_vec()
    }
}

impl<T: Clone> Slice for Vec<T> {
    type Output = Vec<T>;

    fn slice_range(&self, start: isize, end: Option<isize>) -> Vec<T> {
        self.as_slice().slice_range(start, end)
    }
}

impl<T: Clone, const N: usize> Slice for [T; N] {
    type Output = Vec<T>;

    fn slice_range(&self, start: isize, end: Option<isize>) -> Vec<T> {
        self.as_slice().slice_range(start, end)
    }
}

impl<A: Slice + ?Sized> Slice for &A {
    type Output = A::Output;

    fn slice_range(&self, start: isize, end: Option<isize>) -> A::Output {
        (**self).slice_range(start, end)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T> Maybe<T> {
    /// The string form of the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(12.5).str().unwrap(), "12.5");
    /// assert_eq!(some('x').str().unwrap(), "x");
    /// ```
    #[inline]
    pub fn str(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.value().map(|value| value.to_text().into_owned()).into()
    }

    /// Alias of [`str`](Maybe::str).
    #[inline]
    pub fn string(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.str()
    }

    /// The truthiness of the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some(0).bool().unwrap(), false);
    /// assert_eq!(some("0").bool().unwrap(), true);
    /// ```
    #[inline]
    pub fn bool(&self) -> Maybe<bool>
    where
        T: Truthy,
    {
        self.value().map(Truthy::is_truthy).into()
    }

    /// Alias of [`bool`](Maybe::bool).
    #[inline]
    pub fn boolean(&self) -> Maybe<bool>
    where
        T: Truthy,
    {
        self.bool()
    }

    fn map_text<F>(&self, function: F) -> Maybe<String>
    where
        T: ToText,
        F: FnOnce(&str) -> String,
    {
        self.value()
            .map(|value| function(&value.to_text()))
            .into()
    }

    /// The string form with leading and trailing whitespace removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("\u{feff} padded\n").trim().unwrap(), "padded");
    /// ```
    #[inline]
    pub fn trim(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| text.trim_matches(is_js_whitespace).to_string())
    }

    /// The string form with leading whitespace removed.
    #[inline]
    pub fn trim_start(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| text.trim_start_matches(is_js_whitespace).to_string())
    }

    /// The string form with trailing whitespace removed.
    #[inline]
    pub fn trim_end(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| text.trim_end_matches(is_js_whitespace).to_string())
    }

    /// The string form in lowercase.
    #[inline]
    pub fn lc(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(str::to_lowercase)
    }

    /// The string form in uppercase.
    #[inline]
    pub fn uc(&self) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(str::to_uppercase)
    }

    // =========================================================================
    // Affixes
    // =========================================================================

    /// The string form, with `prefix` prepended unless it is already there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Case, some};
    ///
    /// assert_eq!(some("example.org").start_with("https://", Case::Sensitive).unwrap(), "https://example.org");
    /// assert_eq!(some("HTTPS://x.org").start_with("https://", Case::Insensitive).unwrap(), "HTTPS://x.org");
    /// ```
    pub fn start_with(&self, prefix: &str, case: Case) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| match strip_affix_start(text, prefix, case) {
            Some(_) => text.to_string(),
            None => format!("{prefix}{text}"),
        })
    }

    /// The string form, with `prefix` removed once if it is there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Case, some};
    ///
    /// assert_eq!(some("#ff0000").dont_start_with("#", Case::Sensitive).unwrap(), "ff0000");
    /// assert_eq!(some("ff0000").dont_start_with("#", Case::Sensitive).unwrap(), "ff0000");
    /// ```
    pub fn dont_start_with(&self, prefix: &str, case: Case) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| strip_affix_start(text, prefix, case).unwrap_or(text).to_string())
    }

    /// The string form, with `suffix` appended unless it is already there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Case, some};
    ///
    /// assert_eq!(some("/api").end_with("/", Case::Sensitive).unwrap(), "/api/");
    /// assert_eq!(some("/api/").end_with("/", Case::Sensitive).unwrap(), "/api/");
    /// ```
    pub fn end_with(&self, suffix: &str, case: Case) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| match strip_affix_end(text, suffix, case) {
            Some(_) => text.to_string(),
            None => format!("{text}{suffix}"),
        })
    }

    /// The string form, with `suffix` removed once if it is there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Case, some};
    ///
    /// assert_eq!(some("report.PDF").dont_end_with(".pdf", Case::Insensitive).unwrap(), "report");
    /// ```
    pub fn dont_end_with(&self, suffix: &str, case: Case) -> Maybe<String>
    where
        T: ToText,
    {
        self.map_text(|text| strip_affix_end(text, suffix, case).unwrap_or(text).to_string())
    }

    // =========================================================================
    // Sequences
    // =========================================================================

    /// The part of the held string or sequence between `start` and `end`.
    ///
    /// Negative bounds count from the end; `None` as `end` means the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("#ff1188").slice(1, Some(3)).unwrap(), "ff");
    /// assert_eq!(some("#ff1188").slice(-2, None).unwrap(), "88");
    /// assert_eq!(some(vec![1, 2, 3]).slice(1, None).unwrap(), vec![2, 3]);
    /// ```
    #[inline]
    pub fn slice(&self, start: isize, end: Option<isize>) -> Maybe<T::Output>
    where
        T: Slice,
    {
        self.value()
            .map(|value| value.slice_range(start, end))
            .into()
    }

    /// The held string repeated `count` times.
    ///
    /// `None` if the result would not fit in memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("ab").repeat(3).unwrap(), "ababab");
    /// assert_eq!(some("ab").repeat(0).unwrap(), "");
    /// assert!(some("ab").repeat(usize::MAX).is_none());
    /// ```
    pub fn repeat(&self, count: usize) -> Maybe<String>
    where
        T: AsRef<str>,
    {
        self.value()
            .map(AsRef::<str>::as_ref)
            .filter(|text| {
                text.len()
                    .checked_mul(count)
                    .is_some_and(|total| total <= isize::MAX.unsigned_abs())
            })
            .map(|text| text.repeat(count))
            .into()
    }

    /// The held string with the first match of `search` replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("a-b-c").replace("-", "+").unwrap(), "a+b-c");
    /// assert_eq!(some("a-b-c").replace('-', "").unwrap(), "ab-c");
    /// ```
    pub fn replace<S>(&self, search: S, replacement: &str) -> Maybe<String>
    where
        T: AsRef<str>,
        S: Search,
    {
        self.value()
            .map(|value| search.replace_first(value.as_ref(), replacement))
            .into()
    }

    /// The held string with every match of `search` replaced.
    ///
    /// Regular expressions replace every match too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// assert_eq!(some("a-b-c").replace_all("-", "+").unwrap(), "a+b+c");
    /// ```
    pub fn replace_all<S>(&self, search: S, replacement: &str) -> Maybe<String>
    where
        T: AsRef<str>,
        S: Search,
    {
        self.value()
            .map(|value| search.replace_every(value.as_ref(), replacement))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::some;
    use rstest::rstest;

    #[rstest]
    #[case(0, None, 0..5)]
    #[case(-2, None, 3..5)]
    #[case(-10, Some(2), 0..2)]
    #[case(3, Some(1), 3..3)]
    #[case(7, None, 5..5)]
    #[case(1, Some(-1), 1..4)]
    fn test_clamp_range(#[case] start: isize, #[case] end: Option<isize>, #[case] expected: Range<usize>) {
        assert_eq!(clamp_range(5, start, end), expected);
    }

    #[rstest]
    #[case("Hello", "he", Case::Insensitive, Some("llo"))]
    #[case("Hello", "he", Case::Sensitive, None)]
    #[case("hi", "hello", Case::Sensitive, None)]
    #[case("héllo", "hé", Case::Sensitive, Some("llo"))]
    #[case("any", "", Case::Sensitive, Some("any"))]
    fn test_strip_affix_start(
        #[case] text: &str,
        #[case] affix: &str,
        #[case] case: Case,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(strip_affix_start(text, affix, case), expected);
    }

    #[rstest]
    #[case("file.TXT", ".txt", Case::Insensitive, Some("file"))]
    #[case("file.txt", ".md", Case::Sensitive, None)]
    #[case("t", ".txt", Case::Sensitive, None)]
    #[case("any", "", Case::Sensitive, Some("any"))]
    fn test_strip_affix_end(
        #[case] text: &str,
        #[case] affix: &str,
        #[case] case: Case,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(strip_affix_end(text, affix, case), expected);
    }

    #[rstest]
    fn test_slice_by_characters() {
        assert_eq!("héllo".slice_range(1, Some(3)), "él");
    }

    #[rstest]
    fn test_dont_start_with_strips_once() {
        assert_eq!(some("##a").dont_start_with("#", Case::Sensitive).unwrap(), "#a");
    }
}
