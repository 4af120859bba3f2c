//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map` (bind), where the next
//! computation is chosen from the result of the previous one. Together with
//! `pure` and `fmap` it forms the contract every container in this crate
//! honours.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Identity, Monad};
//!
//! let result = Identity(5)
//!     .flat_map(|n| Identity(n * 2))
//!     .flat_map(|n| Identity(n + 1));
//! assert_eq!(result, Identity(11));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// Failure-carrying containers (`Maybe::Nothing`, `Either::Left`) return
/// themselves from `flat_map` without calling the function. Deferred
/// containers (`State`, `Reader`, `IO`) only record the continuation;
/// it runs when the computation is run.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map` under its traditional name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity(2).bind(|n| Identity(n * 10)), Identity(20));
    /// ```
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure the failure propagates and `next` is
    /// dropped unused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Identity, Monad};
    ///
    /// assert_eq!(Identity(5).then(Identity("hello")), Identity("hello"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    fn increment(value: i32) -> Identity<i32> {
        Identity(value + 1)
    }

    fn double(value: i32) -> Identity<i32> {
        Identity(value * 2)
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn identity_left_identity(#[case] value: i32) {
        let left = <Identity<()>>::pure(value).flat_map(increment);
        assert_eq!(left, increment(value));
    }

    #[rstest]
    fn identity_right_identity() {
        let monad = Identity(9);
        assert_eq!(monad.flat_map(|x| <Identity<()>>::pure(x)), Identity(9));
    }

    #[rstest]
    fn identity_associativity() {
        let left = Identity(3).flat_map(increment).flat_map(double);
        let right = Identity(3).flat_map(|x| increment(x).flat_map(double));
        assert_eq!(left, right);
    }

    #[rstest]
    fn bind_and_and_then_agree_with_flat_map() {
        assert_eq!(Identity(4).bind(double), Identity(4).flat_map(double));
        assert_eq!(Identity(4).and_then(double), Identity(8));
    }
}
