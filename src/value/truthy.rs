//! Truthiness of values.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::Nullable;
use crate::maybe::Maybe;

/// Boolean coercion of a value.
///
/// The falsy values are `false`, numeric zero, `NaN`, the empty string,
/// `()`, and the absence markers (`Option::None`, `Nullable::Null`,
/// `Nullable::Undefined`). Every other value, including empty collections,
/// is truthy.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::Truthy;
///
/// assert!(!0.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!("0".is_truthy());
/// assert!(Vec::<i32>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )+
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),+ $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )+
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy> Truthy for Nullable<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        match self {
            Self::Value(value) => value.is_truthy(),
            Self::Null | Self::Undefined => false,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Objects are truthy regardless of their contents.
macro_rules! impl_truthy_for_object {
    ($($object:ty => [$($parameter:ident),*]),+ $(,)?) => {
        $(
            impl<$($parameter),*> Truthy for $object {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )+
    };
}

impl_truthy_for_object!(
    Vec<T> => [T],
    [T] => [T],
    VecDeque<T> => [T],
    BTreeSet<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeMap<K, V> => [K, V],
    HashMap<K, V, S> => [K, V, S],
    Maybe<T> => [T],
);

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(-1, true)]
    #[case(7, true)]
    fn test_integers(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    #[case(f64::INFINITY, true)]
    fn test_floats(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_absence_markers() {
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(Some(1).is_truthy());
        assert!(!Nullable::<i32>::Null.is_truthy());
        assert!(!Nullable::<i32>::Undefined.is_truthy());
    }

    #[rstest]
    fn test_objects_are_truthy() {
        assert!(Vec::<i32>::new().is_truthy());
        assert!(HashMap::<String, i32>::new().is_truthy());
        assert!(Maybe::<i32>::none().is_truthy());
    }
}
