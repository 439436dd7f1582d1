//! Property-based tests for the `Maybe` laws.
//!
//! This module verifies that the container satisfies:
//!
//! - **Functor laws**: identity and composition for `map`
//! - **Monad laws**: left identity, right identity and associativity for
//!   `flat_map`
//! - **Short-circuiting**: no callback runs on `None`
//! - **Accessor agreement**: `at` and `slice` agree with slice indexing, and
//!   the numeric parsers agree with Rust's own formatting

use std::cell::Cell;

use maybe_chain::prelude::*;
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn halve(value: i32) -> Maybe<i32> {
    if value % 2 == 0 { some(value / 2) } else { none() }
}

fn shrink(value: i32) -> Maybe<i32> {
    value.checked_sub(1).into()
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity function returns the original container
    #[test]
    fn prop_identity_law(container in maybe_i32()) {
        prop_assert_eq!(container.clone().map(|x| x), container);
    }

    /// Composition Law: mapping composed functions equals composing maps
    #[test]
    fn prop_composition_law(container in maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = container.clone().map(function1).map(function2);
        let right = container.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// map agrees with Option::map
    #[test]
    fn prop_map_agrees_with_option(value in any::<Option<i32>>()) {
        let mapped = Maybe::from(value).map(|n| n.wrapping_sub(7)).into_option();
        prop_assert_eq!(mapped, value.map(|n| n.wrapping_sub(7)));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity: some(a).flat_map(f) == f(a)
    #[test]
    fn prop_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(some(value).flat_map(halve), halve(value));
    }

    /// Right Identity: m.flat_map(some) == m
    #[test]
    fn prop_right_identity_law(container in maybe_i32()) {
        prop_assert_eq!(container.clone().flat_map(some), container);
    }

    /// Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_associativity_law(container in maybe_i32()) {
        let left = container.clone().flat_map(halve).flat_map(shrink);
        let right = container.flat_map(|x| halve(x).flat_map(shrink));
        prop_assert_eq!(left, right);
    }

    /// flat after map equals flat_map
    #[test]
    fn prop_flat_of_map_is_flat_map(container in maybe_i32()) {
        prop_assert_eq!(container.clone().map(halve).flat(), container.flat_map(halve));
    }
}

// =============================================================================
// Short-circuiting and filters
// =============================================================================

proptest! {
    /// No callback is invoked on None, whatever the chain
    #[test]
    fn prop_none_short_circuits(bound in any::<i32>()) {
        let calls = Cell::new(0);
        let result = none::<i32>()
            .map(|x| { calls.set(calls.get() + 1); x })
            .filter(|_| { calls.set(calls.get() + 1); true })
            .flat_map(|x| { calls.set(calls.get() + 1); some(x) })
            .gt(bound)
            .all((|_: &Maybe<i32>| { calls.set(calls.get() + 1); some(1) },));

        prop_assert!(result.is_none());
        prop_assert_eq!(calls.get(), 0);
    }

    /// A predicate and its negation split every present value
    #[test]
    fn prop_filter_partitions(value in any::<i32>(), divisor in 1_i32..10) {
        let kept = some(value).filter(|x| x % divisor == 0).is_some();
        let dropped = some(value).filter(|x| x % divisor != 0).is_some();
        prop_assert!(kept != dropped);
    }

    /// gt and lte are complementary for numbers
    #[test]
    fn prop_gt_lte_complementary(value in any::<i32>(), bound in any::<i32>()) {
        prop_assert!(some(value).gt(bound).is_some() != some(value).lte(bound).is_some());
    }

    /// race returns the first present branch
    #[test]
    fn prop_race_picks_first_present(value in any::<i32>()) {
        let raced = some(value).race((
            |root: &Maybe<i32>| root.clone().flat_map(halve),
            |root: &Maybe<i32>| root.clone(),
        ));
        let expected = if value % 2 == 0 { value / 2 } else { value };
        prop_assert_eq!(raced.unwrap(), expected);
    }
}

// =============================================================================
// Accessor agreement
// =============================================================================

proptest! {
    /// at agrees with slice indexing, counting negative indices from the end
    #[test]
    fn prop_at_agrees_with_indexing(items in prop::collection::vec(any::<u8>(), 0..16), index in -20_isize..20) {
        let length = items.len().cast_signed();
        let position = if index < 0 { length + index } else { index };
        let expected = usize::try_from(position).ok().and_then(|position| items.get(position).copied());

        prop_assert_eq!(some(items).at(index).into_option(), expected);
    }

    /// slice with in-range bounds agrees with range indexing
    #[test]
    fn prop_slice_agrees_with_ranges(items in prop::collection::vec(any::<u8>(), 0..16), start in 0_usize..16, end in 0_usize..16) {
        let start = start.min(items.len());
        let end = end.clamp(start, items.len());
        let sliced = some(items.clone()).slice(start.cast_signed(), Some(end.cast_signed()));
        prop_assert_eq!(sliced.unwrap(), items[start..end].to_vec());
    }

    /// parse_int reads back any decimal rendering of an i64
    #[test]
    fn prop_parse_int_reads_display(value in any::<i64>()) {
        #[allow(clippy::cast_precision_loss)]
        let expected = value as f64;
        prop_assert_eq!(some(value).parse_int(10).unwrap(), expected);
    }

    /// not_nan reads back any decimal rendering of an i32
    #[test]
    fn prop_not_nan_reads_display(value in any::<i32>()) {
        prop_assert_eq!(some(value.to_string()).not_nan().unwrap(), f64::from(value));
    }

    /// to_fixed rounds to within half a unit in the last place
    #[test]
    fn prop_to_fixed_is_close(value in -1.0e6_f64..1.0e6, digits in 0_usize..6) {
        let rendered = some(value).to_fixed(digits).unwrap();
        let parsed: f64 = rendered.parse().unwrap();
        let unit = 10_f64.powi(-i32::try_from(digits).unwrap());
        prop_assert!((parsed - value).abs() <= unit / 2.0 + 1e-9, "{value} -> {rendered}");
    }
}
