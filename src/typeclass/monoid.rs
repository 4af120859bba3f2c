//! Monoid type class - semigroups with an identity element.
//!
//! `Writer::pure` starts from `Monoid::empty()`, so the identity laws below
//! are what make `Writer` satisfy the monad identity laws.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! plus associativity inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// Sum forms a monoid under addition with 0 (the `Default`) as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

// `Default` is zero for numbers, so the multiplicative identity is spelled out.
product_monoid! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
