//! Integration tests for structural interoperability.
//!
//! `LegacyMaybe` stands in for a container from another library (or another
//! copy of this one). Every operator that accepts a container accepts it,
//! and results are re-homed into a local `Maybe`.

use maybe_chain::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum LegacyMaybe<T> {
    Just(T),
    Nothing,
}

impl<T> MaybeLike for LegacyMaybe<T> {
    type Value = T;

    fn tag(&self) -> Tag {
        match self {
            Self::Just(_) => Tag::Some,
            Self::Nothing => Tag::None,
        }
    }

    fn value(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    fn into_value(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

/// Claims to hold a value but never does.
struct Broken;

impl MaybeLike for Broken {
    type Value = i32;

    fn tag(&self) -> Tag {
        Tag::Some
    }

    fn value(&self) -> Option<&i32> {
        None
    }

    fn into_value(self) -> Option<i32> {
        None
    }
}

fn legacy_parse(text: &str) -> LegacyMaybe<i32> {
    text.parse().map_or(LegacyMaybe::Nothing, LegacyMaybe::Just)
}

// =============================================================================
// Narrowing
// =============================================================================

#[rstest]
fn predicates_accept_foreign_containers() {
    assert!(is_some(&LegacyMaybe::Just(1)));
    assert!(is_none(&LegacyMaybe::<i32>::Nothing));
    assert!(LegacyMaybe::Just("x").is_some());
}

#[rstest]
fn rehome_keeps_variant_and_value() {
    assert_eq!(Maybe::rehome(LegacyMaybe::Just(3)), some(3));
    assert_eq!(LegacyMaybe::<i32>::Nothing.into_maybe(), none());
    assert_eq!(some(5).into_maybe(), some(5));
}

#[rstest]
fn rehome_treats_inconsistent_containers_as_none() {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    tracing::subscriber::with_default(subscriber, || {
        assert!(Maybe::rehome(Broken).is_none());
        assert!(some(1).flat_map(|_| Broken).is_none());
    });
}

// =============================================================================
// Operators accepting foreign containers
// =============================================================================

#[rstest]
fn flat_map_rehomes_the_result() {
    let parsed = some("12").flat_map(legacy_parse).map(|x| x + 1);
    assert_eq!(parsed.unwrap(), 13);
    assert!(some("x").flat_map(legacy_parse).is_none());
}

#[rstest]
fn flat_map_none_and_flat_bimap_accept_foreign_containers() {
    let recovered = none::<i32>().flat_map_none(|| LegacyMaybe::Just(0));
    assert_eq!(recovered.unwrap(), 0);

    let chosen = none::<&str>().flat_bimap(legacy_parse, || LegacyMaybe::Just(-1));
    assert_eq!(chosen.unwrap(), -1);
}

#[rstest]
fn flat_collapses_foreign_nesting() {
    assert_eq!(some(LegacyMaybe::Just('a')).flat().unwrap(), 'a');
    assert!(some(LegacyMaybe::<char>::Nothing).flat().is_none());
}

#[rstest]
fn combinators_accept_foreign_branches() {
    let both = some("7").all((
        |root: &Maybe<&str>| root.clone().flat_map(legacy_parse),
        |_: &Maybe<&str>| LegacyMaybe::Just("unit"),
    ));
    assert_eq!(both.unwrap(), (7, "unit"));

    let first = some("x").race((
        |root: &Maybe<&str>| root.clone().flat_map(legacy_parse),
        |_: &Maybe<&str>| LegacyMaybe::Just(0),
    ));
    assert_eq!(first.unwrap(), 0);
}

#[rstest]
fn standard_containers_are_maybe_like() {
    assert_eq!(Some(1).tag(), Tag::Some);
    assert_eq!(Err::<i32, _>(()).tag(), Tag::None);
    assert_eq!(MaybeLike::value(&Ok::<_, ()>(2)), Some(&2));
    assert_eq!(Some(4).into_maybe().map(|x| x * 2).unwrap(), 8);
}
