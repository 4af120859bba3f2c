//! Applicative type class - lifting values and combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure`, which places a plain value
//! into the container, and `map2`, which combines two containers with a
//! binary function.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! Expressed through `map2`, which is what the containers here implement:
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Applicative, Identity};
//!
//! let lifted: Identity<i32> = <Identity<()>>::pure(42);
//! assert_eq!(lifted, Identity(42));
//!
//! let sum = Identity(1).map2(Identity(2), |x, y| x + y);
//! assert_eq!(sum, Identity(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift plain values and combine
/// independent computations.
///
/// `pure` is the crate-wide name for the "wrap a value" operation. The
/// type parameter `B` lets `<Maybe<()>>::pure(1)` produce a `Maybe<i32>`;
/// each container also offers an inherent `pure` that infers more easily.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Applicative, Identity};
    ///
    /// let x: Identity<&str> = <Identity<()>>::pure("hello");
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// If either computation fails (in the sense appropriate to the specific
    /// applicative), the result fails. For sequential containers `self`
    /// runs before `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Applicative, Identity};
    ///
    /// assert_eq!(Identity(1).product(Identity("a")), Identity((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}
