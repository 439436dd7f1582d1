#![cfg(feature = "pattern")]
//! End-to-end test: parsing CSS hex colours in one chain.
//!
//! The long form (`#rrggbb` or `#rrggbbaa`) and the short form (`#rgb` or
//! `#rgba`) are each parsed by a pipeline of `match_pattern`, `at`,
//! `replace`, `slice` and `parse_int`, and the channels are gathered with
//! `all`. The hash sign is optional.

use maybe_chain::prelude::*;
use regex::Regex;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: Option<u8>,
}

const BLACK: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 0,
    a: None,
};

fn long_form() -> Regex {
    Regex::new(r"(?i)^#?[0-9a-f]{6}([0-9a-f][0-9a-f])?$").unwrap()
}

fn short_form() -> Regex {
    Regex::new(r"(?i)^#?[0-9a-f]{3}[0-9a-f]?$").unwrap()
}

fn hash_sign() -> Regex {
    Regex::new("^#").unwrap()
}

/// The hex digits of `input` if the whole string matches `form`.
fn digits(input: &Maybe<&str>, form: &Regex) -> Maybe<String> {
    input
        .match_pattern(form)
        .at(0)
        .defined()
        .replace(&hash_sign(), "")
}

fn byte(text: &Maybe<String>) -> Maybe<u8> {
    text.clone()
        .compact()
        .parse_int(16)
        .filter(|value| (0.0..=255.0).contains(value))
        .map(|value| value as u8)
}

/// Two digits per channel, starting at `offset`.
fn long_channel(digits: &Maybe<String>, offset: isize) -> Maybe<u8> {
    byte(&digits.slice(offset, Some(offset + 2)))
}

/// One digit per channel, doubled.
fn short_channel(digits: &Maybe<String>, offset: isize) -> Maybe<u8> {
    byte(&digits.slice(offset, Some(offset + 1)).compact().repeat(2))
}

fn parse_long(input: &Maybe<&str>) -> Maybe<Rgba> {
    digits(input, &long_form())
        .all((
            |digits: &Maybe<String>| long_channel(digits, 0),
            |digits: &Maybe<String>| long_channel(digits, 2),
            |digits: &Maybe<String>| long_channel(digits, 4),
            |digits: &Maybe<String>| some(long_channel(digits, 6).into_option()),
        ))
        .map(|(r, g, b, a)| Rgba { r, g, b, a })
}

fn parse_short(input: &Maybe<&str>) -> Maybe<Rgba> {
    digits(input, &short_form())
        .all((
            |digits: &Maybe<String>| short_channel(digits, 0),
            |digits: &Maybe<String>| short_channel(digits, 1),
            |digits: &Maybe<String>| short_channel(digits, 2),
            |digits: &Maybe<String>| some(short_channel(digits, 3).into_option()),
        ))
        .map(|(r, g, b, a)| Rgba { r, g, b, a })
}

fn parse_color(input: &str) -> Maybe<Rgba> {
    let input = some(input);
    parse_long(&input).flat_bimap(Maybe::some, || parse_short(&input))
}

// =============================================================================
// Accepted forms
// =============================================================================

#[rstest]
#[case("#ff1188")]
#[case("ff1188")]
#[case("#f18")]
#[case("f18")]
#[case("#FF1188")]
fn parses_opaque_colours(#[case] input: &str) {
    let expected = Rgba {
        r: 255,
        g: 17,
        b: 136,
        a: None,
    };
    assert_eq!(parse_color(input).unwrap(), expected);
}

#[rstest]
#[case("#ff118880", 0x80)]
#[case("#f188", 0x88)]
#[case("#ff118800", 0)]
#[case("f180", 0)]
fn parses_alpha_channel(#[case] input: &str, #[case] alpha: u8) {
    assert_eq!(parse_color(input).unwrap().a, Some(alpha));
}

// =============================================================================
// Rejected forms
// =============================================================================

#[rstest]
#[case("")]
#[case("#")]
#[case("#ff11f")]
#[case("#ff11889")]
#[case("#gg1188")]
#[case("##ff1188")]
#[case("red")]
fn rejects_malformed_input(#[case] input: &str) {
    assert!(parse_color(input).is_none());
}

#[rstest]
fn falls_back_to_a_default() {
    assert_eq!(parse_color("nope").map_none(|| BLACK).unwrap(), BLACK);
    assert_ne!(parse_color("#fff").map_none(|| BLACK).unwrap(), BLACK);
}

// =============================================================================
// Alternative compositions
// =============================================================================

#[rstest]
fn race_tries_each_form_in_order() {
    let input = some("#f18");
    let parsed = input.race((
        |input: &Maybe<&str>| parse_long(input),
        |input: &Maybe<&str>| parse_short(input),
    ));
    assert_eq!(parsed.unwrap(), parse_color("#ff1188").unwrap());
}

#[rstest]
fn nested_results_flatten() {
    let nested = some("#ff1188").map(parse_color);
    assert_eq!(nested.flat().unwrap().b, 136);

    let missing = some("#xyz").map(parse_color);
    assert!(missing.clone().is_some());
    assert!(missing.flat().is_none());
}

#[rstest]
fn empty_input_container_short_circuits() {
    let input: Maybe<&str> = Maybe::none();
    assert!(parse_long(&input).is_none());
    assert!(parse_short(&input).is_none());
}
