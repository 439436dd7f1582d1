//! Integration tests for the operators that surface held errors as `Err`.

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::io;

use maybe_chain::prelude::*;
use rstest::rstest;

fn parse_port(text: &str) -> Result<Maybe<u16>, std::num::ParseIntError> {
    some(text.parse::<u16>()).throw_error()
}

// =============================================================================
// throw / throw_w
// =============================================================================

#[rstest]
fn throw_returns_the_held_error() {
    let error = io::Error::new(io::ErrorKind::NotFound, "missing");
    let raised = some(error).throw().unwrap_err();
    assert_eq!(raised.kind(), io::ErrorKind::NotFound);
}

#[rstest]
fn throw_on_none_passes() {
    let nothing: Maybe<io::Error> = none();
    let passed: Maybe<Infallible> = nothing.throw().unwrap();
    assert!(passed.is_none());
}

#[rstest]
fn throw_w_raises_any_value() {
    assert_eq!(some("plain text").throw_w().unwrap_err(), "plain text");
    assert!(none::<u8>().throw_w().is_ok());
}

#[rstest]
fn throw_propagates_with_question_mark() {
    fn check(failure: Maybe<MaybeError>) -> Result<&'static str, MaybeError> {
        failure.throw()?;
        Ok("clean")
    }

    assert_eq!(check(none()), Ok("clean"));
    assert_eq!(check(some(MaybeError::EmptyUnwrap)), Err(MaybeError::EmptyUnwrap));
}

// =============================================================================
// throw_error_like
// =============================================================================

#[rstest]
fn error_values_are_raised() {
    let parsed = "x".parse::<i32>().unwrap_err();
    assert!(some(parsed).throw_error_like().is_err());

    let boxed: Box<dyn std::error::Error> = "failure".into();
    assert!(some(boxed).throw_error_like().is_err());
}

#[rstest]
fn strings_are_not_error_like() {
    let text = some("message");
    assert_eq!(text.throw_error_like().unwrap().unwrap(), "message");
}

#[rstest]
fn maps_with_a_message_are_error_like() {
    let failure = some(HashMap::from([("message", "timeout"), ("code", "504")]));
    let raised = failure.throw_error_like().unwrap_err();
    assert_eq!(raised["message"], "timeout");

    let record = some(BTreeMap::from([(String::from("id"), String::from("7"))]));
    assert!(record.throw_error_like().unwrap().is_some());
}

#[rstest]
fn throw_error_like_on_none_passes() {
    let nothing: Maybe<io::Error> = none();
    assert!(nothing.throw_error_like().unwrap().is_none());
}

// =============================================================================
// throw_error
// =============================================================================

#[rstest]
#[case("8080", Some(8080))]
#[case("80", Some(80))]
fn throw_error_continues_with_ok_values(#[case] input: &str, #[case] expected: Option<u16>) {
    assert_eq!(parse_port(input).unwrap().into_option(), expected);
}

#[rstest]
#[case("")]
#[case("70000")]
#[case("-1")]
fn throw_error_raises_err_values(#[case] input: &str) {
    assert!(parse_port(input).is_err());
}

#[rstest]
fn throw_error_on_none_passes() {
    let nothing: Maybe<Result<i32, String>> = none();
    assert!(nothing.throw_error().unwrap().is_none());
}
