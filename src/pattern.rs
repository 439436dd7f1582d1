//! Regular-expression operators.
//!
//! Patterns are [`regex::Regex`] values or strings compiled on use. A string
//! that fails to compile makes the operator return `None` and logs a
//! warning.
//!
//! ```rust
//! use maybe_chain::some;
//! use regex::Regex;
//!
//! let greeting = some("hi there");
//! let found = greeting.match_pattern(&Regex::new("i (th)").unwrap());
//! assert_eq!(found.at(0).defined().unwrap(), "i th");
//! assert_eq!(found.at(1).defined().unwrap(), "th");
//!
//! assert!(greeting.clone().matching("^hi").is_some());
//! assert!(greeting.not_matching("^hi").is_none());
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display};

use regex::{Captures, Regex};

use crate::access::{AtIndex, Pluck, SequenceCache, resolve_index};
use crate::interop::Nested;
use crate::maybe::Maybe;
use crate::value::{ToText, Truthy};

/// Arguments accepted as a regular expression.
pub trait Pattern {
    /// Returns the compiled expression, or `None` if it does not compile.
    fn to_regex(&self) -> Option<Cow<'_, Regex>>;
}

impl Pattern for Regex {
    #[inline]
    fn to_regex(&self) -> Option<Cow<'_, Regex>> {
        Some(Cow::Borrowed(self))
    }
}

impl Pattern for str {
    fn to_regex(&self) -> Option<Cow<'_, Regex>> {
        match Regex::new(self) {
            Ok(regex) => Some(Cow::Owned(regex)),
            Err(error) => {
                tracing::warn!(pattern = self, %error, "pattern does not compile");
                None
            }
        }
    }
}

impl Pattern for String {
    #[inline]
    fn to_regex(&self) -> Option<Cow<'_, Regex>> {
        self.as_str().to_regex()
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    #[inline]
    fn to_regex(&self) -> Option<Cow<'_, Regex>> {
        (**self).to_regex()
    }
}

// =============================================================================
// MatchArray
// =============================================================================

/// The owned result of one regular-expression match.
///
/// Group `0` is the whole match; groups that did not participate are
/// `None`. A `MatchArray` is indexable with [`Maybe::at`] (yielding
/// `Option<String>` per group) and named groups can be read with
/// [`Maybe::pluck`].
///
/// # Examples
///
/// ```rust
/// use maybe_chain::some;
///
/// let date = some("due 2024-05-17").match_pattern(r"(?<year>\d{4})-(?<month>\d{2})");
/// assert_eq!(date.pluck("year").defined().unwrap(), "2024");
///
/// let matched = date.unwrap();
/// assert_eq!(matched.as_str(), "2024-05");
/// assert_eq!(matched.index(), 4);
/// assert_eq!(matched.get(2), Some("05"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchArray {
    groups: Vec<Option<String>>,
    names: Vec<Option<String>>,
    index: usize,
    input: String,
}

impl MatchArray {
    fn from_captures(regex: &Regex, captures: &Captures<'_>, input: &str) -> Self {
        Self {
            groups: captures
                .iter()
                .map(|group| group.map(|found| found.as_str().to_string()))
                .collect(),
            names: regex
                .capture_names()
                .map(|name| name.map(str::to_string))
                .collect(),
            index: captures.get(0).map_or(0, |whole| whole.start()),
            input: input.to_string(),
        }
    }

    /// The text of the whole match.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.get(0).unwrap_or_default()
    }

    /// The text of group `group`, if it participated in the match.
    #[inline]
    pub fn get(&self, group: usize) -> Option<&str> {
        self.groups.get(group)?.as_deref()
    }

    /// The text of the group called `name`, if it participated in the match.
    pub fn name(&self, name: &str) -> Option<&str> {
        let group = self.group_of(name)?;
        self.get(group)
    }

    fn group_of(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|candidate| candidate.as_deref() == Some(name))
    }

    /// The number of groups, the whole match included.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups; never the case for a match.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The byte offset of the match in the input.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The string that was searched.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Iterates over every group, the whole match first.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.groups.iter().map(Option::as_deref)
    }
}

/// Joins the groups with commas, missing groups as empty strings.
impl Display for MatchArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, group) in self.iter().enumerate() {
            if position > 0 {
                formatter.write_str(",")?;
            }
            formatter.write_str(group.unwrap_or_default())?;
        }
        Ok(())
    }
}

impl ToText for MatchArray {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl AtIndex for MatchArray {
    type Item = Option<String>;

    fn item_at(&self, index: isize, _cache: &SequenceCache) -> Option<Option<String>> {
        resolve_index(self.groups.len(), index).and_then(|position| self.groups.get(position).cloned())
    }
}

impl Pluck<str> for MatchArray {
    type Value = Option<String>;

    fn has_key(&self, key: &str) -> bool {
        self.group_of(key).is_some()
    }

    fn pluck_key(&self, key: &str) -> Option<Option<String>> {
        let group = self.group_of(key)?;
        self.groups.get(group).cloned()
    }
}

impl Truthy for MatchArray {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Nested for MatchArray {
    type Flat = Self;

    #[inline]
    fn flatten_into(self) -> Maybe<Self> {
        Maybe::some(self)
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T> Maybe<T> {
    /// The first match of `pattern` in the string form of the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let version = some("v1.24.3").match_pattern(r"(\d+)\.(\d+)");
    /// assert_eq!(version.at(2).defined().parse_int(10).unwrap(), 24.0);
    /// assert!(some("none here").match_pattern(r"\d").is_none());
    /// ```
    #[doc(alias = "match")]
    pub fn match_pattern<P>(&self, pattern: &P) -> Maybe<MatchArray>
    where
        T: ToText,
        P: Pattern + ?Sized,
    {
        self.value()
            .and_then(|value| {
                let regex = pattern.to_regex()?;
                let input = value.to_text();
                let captures = regex.captures(&input)?;
                Some(MatchArray::from_captures(&regex, &captures, &input))
            })
            .into()
    }

    /// Every match of `pattern` in the string form of the held value, in
    /// order. `Some` of an empty `Vec` when nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::some;
    ///
    /// let words = some("one two  three").match_all(r"\w+").unwrap();
    /// let words: Vec<&str> = words.iter().map(|found| found.as_str()).collect();
    /// assert_eq!(words, ["one", "two", "three"]);
    ///
    /// assert!(some("").match_all(r"\w+").unwrap().is_empty());
    /// ```
    pub fn match_all<P>(&self, pattern: &P) -> Maybe<Vec<MatchArray>>
    where
        T: ToText,
        P: Pattern + ?Sized,
    {
        self.value()
            .and_then(|value| {
                let regex = pattern.to_regex()?;
                let input = value.to_text();
                Some(
                    regex
                        .captures_iter(&input)
                        .map(|captures| MatchArray::from_captures(&regex, &captures, &input))
                        .collect(),
                )
            })
            .into()
    }

    /// Keeps the held value if `pattern` matches its string form.
    pub fn matching<P>(self, pattern: &P) -> Self
    where
        T: ToText,
        P: Pattern + ?Sized,
    {
        if self.is_none() {
            return self;
        }
        match pattern.to_regex() {
            Some(regex) => self.filter(|value| regex.is_match(&value.to_text())),
            None => Self::none(),
        }
    }

    /// Keeps the held value if `pattern` does not match its string form.
    pub fn not_matching<P>(self, pattern: &P) -> Self
    where
        T: ToText,
        P: Pattern + ?Sized,
    {
        if self.is_none() {
            return self;
        }
        match pattern.to_regex() {
            Some(regex) => self.filter(|value| !regex.is_match(&value.to_text())),
            None => Self::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::some;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_pattern_is_none() {
        assert!(some("abc").match_pattern("(").is_none());
        assert!(some("abc").matching("(").is_none());
        assert!(some("abc").not_matching("(").is_none());
        assert!(some("abc").match_all("(").is_none());
    }

    #[rstest]
    fn test_unmatched_group_is_none() {
        let found = some("ac").match_pattern("a(b)?c").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found.get(1), None);
        assert_eq!(found.to_string(), "ac,");
    }

    #[rstest]
    fn test_at_on_match_array() {
        let found = some("key=value").match_pattern("(\\w+)=(\\w+)");
        assert_eq!(found.at(-1).unwrap(), Some("value".to_string()));
        assert!(found.at(3).is_none());
    }

    #[rstest]
    fn test_pluck_unknown_group() {
        let found = some("x").match_pattern("(?<letter>x)");
        assert!(found.pluck("digit").is_none());
        assert_eq!(found.pluck("letter").unwrap(), Some("x".to_string()));
    }
}
