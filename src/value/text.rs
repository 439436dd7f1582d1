//! String coercion of values.

use std::borrow::Cow;

use super::Nullable;
use super::number::number_to_text;

/// Conversion of a value to its string form, JavaScript `String(x)` style.
///
/// Numbers render like `Number.prototype.toString`, so the string form
/// reads back through [`ToNumber`](super::ToNumber) to the same value:
///
/// | value | text |
/// |-------|------|
/// | strings and `char` | themselves |
/// | integers, `bool` | their `Display` form |
/// | floats | shortest round-trip digits, `Infinity`, `NaN`, `1e+21` |
/// | `Nullable::Null` | `null` |
/// | `()`, `Option::None`, `Nullable::Undefined` | `undefined` |
/// | slices, arrays, `Vec` | elements joined with `,`, absent ones empty |
///
/// # Examples
///
/// ```rust
/// use maybe_chain::ToText;
///
/// assert_eq!(f64::INFINITY.to_text(), "Infinity");
/// assert_eq!(1e21_f64.to_text(), "1e+21");
/// assert_eq!((-0.0_f64).to_text(), "0");
/// assert_eq!(vec![Some(1_u8), None, Some(3)].to_text(), "1,,3");
/// ```
pub trait ToText {
    /// Returns the string form.
    fn to_text(&self) -> Cow<'_, str>;

    /// Returns the string form used when the value is an element of a
    /// joined sequence. Absence markers render as the empty string there.
    #[inline]
    fn to_element_text(&self) -> Cow<'_, str> {
        self.to_text()
    }
}

const UNDEFINED: &str = "undefined";

macro_rules! impl_to_text_by_display {
    ($($value:ty),+ $(,)?) => {
        $(
            impl ToText for $value {
                #[inline]
                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

impl_to_text_by_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl ToText for f32 {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(number_to_text(*self))
    }
}

impl ToText for f64 {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(number_to_text(*self))
    }
}

impl ToText for str {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for String {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for Cow<'_, str> {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ToText for () {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(UNDEFINED)
    }

    #[inline]
    fn to_element_text(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }
}

impl<T: ToText> ToText for Option<T> {
    fn to_text(&self) -> Cow<'_, str> {
        self.as_ref().map_or(Cow::Borrowed(UNDEFINED), ToText::to_text)
    }

    fn to_element_text(&self) -> Cow<'_, str> {
        self.as_ref().map_or(Cow::Borrowed(""), ToText::to_element_text)
    }
}

impl<T: ToText> ToText for Nullable<T> {
    fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Value(value) => value.to_text(),
            Self::Null => Cow::Borrowed("null"),
            Self::Undefined => Cow::Borrowed(UNDEFINED),
        }
    }

    fn to_element_text(&self) -> Cow<'_, str> {
        match self {
            Self::Value(value) => value.to_element_text(),
            Self::Null | Self::Undefined => Cow::Borrowed(""),
        }
    }
}

/// Joins the element forms of `items` with commas.
pub(crate) fn joined_text<'a, T, I>(items: I) -> String
where
    T: ToText + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(ToText::to_element_text)
        .collect::<Vec<_>>()
        .join(",")
}

impl<T: ToText> ToText for [T] {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Owned(joined_text(self))
    }
}

impl<T: ToText> ToText for Vec<T> {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        self.as_slice().to_text()
    }
}

impl<T: ToText, const N: usize> ToText for [T; N] {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        self.as_slice().to_text()
    }
}

impl<T: ToText + ?Sized> ToText for &T {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }

    #[inline]
    fn to_element_text(&self) -> Cow<'_, str> {
        (**self).to_element_text()
    }
}

impl<T: ToText + ?Sized> ToText for Box<T> {
    #[inline]
    fn to_text(&self) -> Cow<'_, str> {
        (**self).to_text()
    }

    #[inline]
    fn to_element_text(&self) -> Cow<'_, str> {
        (**self).to_element_text()
    }
}
