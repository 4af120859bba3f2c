//! Identity monad - a wrapper that adds no effect.
//!
//! `Identity` is the trivial monad: `pure` wraps, `flat_map(f)` is exactly
//! `f(value)`. It serves as:
//!
//! - The base case when stacking effects
//! - The simplest model for checking type class laws
//! - A way to express "no additional effect"

use super::{Applicative, Functor, Monad, TypeConstructor};

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Identity, Monad};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.flat_map(|n| Identity(n + 1)).into_inner(), 43);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Collects a list of `Identity` values into one, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Identity;
    ///
    /// let all = Identity::sequence(vec![Identity(1), Identity(2)]);
    /// assert_eq!(all, Identity(vec![1, 2]));
    /// ```
    pub fn sequence(computations: Vec<Self>) -> Identity<Vec<A>> {
        Identity(computations.into_iter().map(Self::into_inner).collect())
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
