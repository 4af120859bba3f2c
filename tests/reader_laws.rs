#![cfg(feature = "effect")]
//! Property-based tests for Reader Monad laws.
//!
//! ## Monad Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! ## Reader Laws
//! - Ask Local Law: local(f, ask()) == asks(f)
//! - Local Identity Law: local(|r| r.clone(), m) == m
//! - Local Composition: local(f, local(g, m)) == local(|r| g(&f(r)), m)
//!
//! Two readers are equal when they produce the same result from the same
//! environment.

use monadic::effect::Reader;
use monadic::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn offset(a: i32) -> Reader<i32, i32> {
    Reader::asks(move |environment: &i32| a.wrapping_add(*environment))
}

fn scaled(a: i32) -> Reader<i32, i32> {
    Reader::asks(move |environment: &i32| a.wrapping_mul(*environment))
}

fn base() -> Reader<i32, i32> {
    Reader::asks(|environment: &i32| environment.wrapping_sub(5))
}

proptest! {
    #[test]
    fn prop_reader_functor_identity(environment in any::<i32>()) {
        prop_assert_eq!(base().fmap(|x| x).run(environment), base().run(environment));
    }

    #[test]
    fn prop_reader_functor_composition(environment in any::<i32>()) {
        let function1 = |x: i32| x.wrapping_add(11);
        let function2 = |x: i32| x.wrapping_mul(3);

        let left = base().fmap(function1).fmap(function2);
        let right = base().fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_left_identity(value in any::<i32>(), environment in any::<i32>()) {
        let left: Reader<i32, i32> = Reader::pure(value).flat_map(offset);
        prop_assert_eq!(left.run(environment), offset(value).run(environment));
    }

    #[test]
    fn prop_reader_right_identity(environment in any::<i32>()) {
        prop_assert_eq!(base().flat_map(Reader::pure).run(environment), base().run(environment));
    }

    #[test]
    fn prop_reader_associativity(environment in any::<i32>()) {
        let left = base().flat_map(offset).flat_map(scaled);
        let right = base().flat_map(|x| offset(x).flat_map(scaled));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_ask_local_law(environment in any::<i32>()) {
        let modifier = |r: &i32| r.wrapping_mul(2);
        let left: Reader<i32, i32> = Reader::local(modifier, Reader::ask());
        let right: Reader<i32, i32> = Reader::asks(modifier);
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_local_identity_law(environment in any::<i32>()) {
        let left = Reader::local(|r: &i32| *r, base());
        prop_assert_eq!(left.run(environment), base().run(environment));
    }

    #[test]
    fn prop_local_composition_law(environment in any::<i32>()) {
        let outer = |r: &i32| r.wrapping_add(1);
        let inner = |r: &i32| r.wrapping_mul(4);

        let left = Reader::local(outer, Reader::local(inner, base()));
        let right = Reader::local(move |r: &i32| inner(&outer(r)), base());

        prop_assert_eq!(left.run(environment), right.run(environment));
    }
}
