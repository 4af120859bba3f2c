#![cfg(feature = "effect")]
//! Integration tests for the `mdo!` do-notation macro.
//!
//! The macro is used here without importing `Monad`, the way downstream
//! crates call it.

use monadic::control::{Either, Maybe};
use monadic::effect::{IO, State, Writer};
use monadic::mdo;
use rstest::rstest;

fn parse(text: &str) -> Either<String, i32> {
    text.parse::<i32>()
        .map_err(|error| format!("{text}: {error}"))
        .into()
}

fn lookup(key: &str) -> Maybe<&'static str> {
    match key {
        "user" => Maybe::Just("alice"),
        "role" => Maybe::Just("admin"),
        _ => Maybe::Nothing,
    }
}

#[rstest]
#[case("2", "3", Either::right(5))]
#[case("x", "3", Either::left("x: invalid digit found in string".to_string()))]
#[case("2", "", Either::left(": cannot parse integer from empty string".to_string()))]
fn either_block_stops_at_first_left(#[case] first: &str, #[case] second: &str, #[case] expected: Either<String, i32>) {
    let (first, second) = (parse(first), parse(second));
    let sum = mdo! {
        a <= first;
        b <= second;
        Either::right(a + b)
    };
    assert_eq!(sum, expected);
}

#[rstest]
fn maybe_block_with_lets() {
    let greeting = mdo! {
        user <= lookup("user");
        role <= lookup("role");
        let line = format!("{user} ({role})");
        Maybe::Just(line)
    };
    assert_eq!(greeting, Maybe::Just("alice (admin)".to_string()));
}

#[rstest]
fn maybe_block_missing_key() {
    let greeting: Maybe<String> = mdo! {
        user <= lookup("user");
        team <= lookup("team");
        Maybe::Just(format!("{user}@{team}"))
    };
    assert_eq!(greeting, Maybe::Nothing);
}

#[rstest]
fn state_block_counter() {
    let next_id: State<u32, String> = mdo! {
        id <= State::get();
        _ <= State::put(id + 1);
        State::pure(format!("id-{id}"))
    };
    assert_eq!(next_id.run(7), ("id-7".to_string(), 8));
}

#[rstest]
fn writer_block_with_tuple_pattern() {
    let computation: Writer<Vec<String>, i32> = mdo! {
        (x, y) <= Writer::new((3, 4), vec!["pair".to_string()]);
        let (dx, dy) = (x * 2, y * 2);
        Writer::new(dx + dy, vec!["scaled".to_string()])
    };
    assert_eq!(computation.run(), (14, vec!["pair".to_string(), "scaled".to_string()]));
}

#[rstest]
fn io_block_defers_until_run() {
    let io = mdo! {
        a <= IO::new(|| 20);
        b <= IO::pure(1);
        IO::pure(a * 2 + b)
    };
    assert_eq!(io.run(), 41);
}
