#![cfg(all(feature = "serde", feature = "effect"))]

//! Integration tests for serde support.
//!
//! Only the plain data containers serialize; the deferred computations
//! (State, Reader, IO, IOLite) hold closures and do not.

use monadic::control::{Either, Maybe};
use monadic::effect::Writer;
use monadic::typeclass::{Identity, Product, Sum};
use rstest::rstest;

#[rstest]
fn test_maybe_json_roundtrip() {
    let just: Maybe<i32> = Maybe::Just(42);
    let nothing: Maybe<i32> = Maybe::Nothing;

    let just_json = serde_json::to_string(&just).unwrap();
    let nothing_json = serde_json::to_string(&nothing).unwrap();

    assert_eq!(serde_json::from_str::<Maybe<i32>>(&just_json).unwrap(), just);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&nothing_json).unwrap(), nothing);
}

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    assert_eq!(left_json, r#"{"Left":"error"}"#);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&left_json).unwrap(), left);
    assert_eq!(serde_json::from_str::<Either<String, i32>>(&right_json).unwrap(), right);
}

#[rstest]
fn test_wrappers_json_roundtrip() {
    let identity = Identity(vec![1, 2]);
    let sum = Sum(10_u64);
    let product = Product(2.5_f64);

    assert_eq!(serde_json::to_string(&sum).unwrap(), "10");
    assert_eq!(
        serde_json::from_str::<Identity<Vec<i32>>>(&serde_json::to_string(&identity).unwrap()).unwrap(),
        identity
    );
    assert_eq!(serde_json::from_str::<Product<f64>>(&serde_json::to_string(&product).unwrap()).unwrap(), product);
}

#[rstest]
fn test_writer_json_roundtrip() {
    let writer: Writer<Vec<String>, u8> = Writer::new(7, vec!["seven".to_string()]);
    let json = serde_json::to_string(&writer).unwrap();

    assert_eq!(json, r#"{"result":7,"output":["seven"]}"#);
    assert_eq!(serde_json::from_str::<Writer<Vec<String>, u8>>(&json).unwrap(), writer);
}
