#![cfg(feature = "effect")]
//! Property-based tests for IO and IOLite Monad laws.
//!
//! Two IO values are equal when running them yields the same value.

use monadic::effect::{IO, IOLite};
use monadic::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn io_double(value: i32) -> IO<i32> {
    IO::new(move || value.wrapping_mul(2))
}

fn io_negate(value: i32) -> IO<i32> {
    IO::new(move || value.wrapping_neg())
}

fn lite_double(value: i32) -> IOLite<i32> {
    IOLite::new(move || value.wrapping_mul(2))
}

fn lite_negate(value: i32) -> IOLite<i32> {
    IOLite::new(move || value.wrapping_neg())
}

proptest! {
    #[test]
    fn prop_io_functor_identity(value in any::<i32>()) {
        prop_assert_eq!(IO::pure(value).fmap(|x| x).run(), value);
    }

    #[test]
    fn prop_io_functor_composition(value in any::<i32>()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = IO::pure(value).fmap(function1).fmap(function2);
        let right = IO::pure(value).fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_io_left_identity(value in any::<i32>()) {
        prop_assert_eq!(IO::pure(value).flat_map(io_double).run(), io_double(value).run());
    }

    #[test]
    fn prop_io_right_identity(value in any::<i32>()) {
        prop_assert_eq!(io_double(value).flat_map(IO::pure).run(), io_double(value).run());
    }

    #[test]
    fn prop_io_associativity(value in any::<i32>()) {
        let left = IO::pure(value).flat_map(io_double).flat_map(io_negate);
        let right = IO::pure(value).flat_map(|x| io_double(x).flat_map(io_negate));
        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_io_lite_left_identity(value in any::<i32>()) {
        prop_assert_eq!(IOLite::pure(value).flat_map(lite_double).run(), lite_double(value).run());
    }

    #[test]
    fn prop_io_lite_right_identity(value in any::<i32>()) {
        prop_assert_eq!(lite_negate(value).flat_map(IOLite::pure).run(), lite_negate(value).run());
    }

    #[test]
    fn prop_io_lite_associativity(value in any::<i32>()) {
        let left = IOLite::pure(value).flat_map(lite_double).flat_map(lite_negate);
        let right = IOLite::pure(value).flat_map(|x| lite_double(x).flat_map(lite_negate));
        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_io_catch_is_transparent_on_success(value in any::<i32>()) {
        prop_assert_eq!(io_double(value).catch(|_| IO::pure(0)).run(), io_double(value).run());
    }
}
