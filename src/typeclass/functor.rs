//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the payload of a container without changing its
//! shape: a `Nothing` stays `Nothing`, a `Left` stays `Left`, a deferred
//! `IO` stays deferred.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For every type in this crate that is also a [`Monad`](super::Monad),
//! `fmap` agrees with bind:
//!
//! ```text
//! fa.fmap(f) == fa.flat_map(|x| pure(f(x)))
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `FnOnce + 'static`. Every container here holds
/// at most one payload, and the deferred containers (`State`, `Reader`,
/// `IO`, ...) keep the function in a boxed closure until they are run.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Functor, Identity};
///
/// let wrapped = Identity(5);
/// assert_eq!(wrapped.fmap(|n| n.to_string()), Identity("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity(1).replace("one"), Identity("one"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }

    /// Discards the value inside the functor, keeping only the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity(1).void(), Identity(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
