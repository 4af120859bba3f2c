//! Maybe type - an optional value as a monad.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. Chaining with `flat_map`
//! short-circuits on `Nothing`: the rest of the chain is skipped and the
//! absence propagates unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Maybe::Just(value / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(20).flat_map(half).flat_map(half), Maybe::Just(5));
//! assert_eq!(Maybe::Just(10).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

use std::fmt;

use super::Either;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Just(value)` or `Nothing`.
///
/// # Type Parameters
///
/// * `A` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let present = Maybe::from_optional(Some(3));
/// let absent: Maybe<i32> = Maybe::from_optional(None);
///
/// assert!(present.is_just());
/// assert!(absent.is_nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Wraps a value in the monad; the same as [`Maybe::just`].
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Just(value)
    }

    /// Converts an `Option`, treating `None` as the absence marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_optional(Some("x")), Maybe::Just("x"));
    /// assert_eq!(Maybe::<&str>::from_optional(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_optional(value: Option<A>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the contained value, leaving `Nothing` untouched.
    ///
    /// Unlike [`Functor::fmap`] the function need not be `'static`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let suffix = String::from("!");
    /// assert_eq!(Maybe::Just("hi").map(|s| format!("{s}{suffix}")), Maybe::Just("hi!".to_string()));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Returns `self` if it is `Just`, otherwise the alternative produced by `function`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Exhaustive case dispatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(describe(Maybe::Just(4)), "4");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<T, N, J>(self, on_nothing: N, on_just: J) -> T
    where
        N: FnOnce() -> T,
        J: FnOnce(A) -> T,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts to an `Either`, using `error` for the `Nothing` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::Just(5).to_either("err"), Either::right(5));
    /// assert_eq!(Maybe::<i32>::Nothing.to_either("err"), Either::left("err"));
    /// ```
    #[inline]
    pub fn to_either<E>(self, error: E) -> Either<E, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Collects a list of `Maybe` values, failing on the first `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// assert_eq!(Maybe::sequence(vec![Maybe::Just(1), Maybe::Just(2)]), Maybe::Just(vec![1, 2]));
    /// assert_eq!(Maybe::sequence(vec![Maybe::Just(1), Maybe::Nothing]), Maybe::Nothing);
    /// ```
    pub fn sequence<I>(computations: I) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        computations
            .into_iter()
            .map(Self::into_option)
            .collect::<Option<Vec<A>>>()
            .into()
    }

    /// Applies `function` to each item and collects the results.
    ///
    /// Items after the first `Nothing` are not visited.
    pub fn traverse<T, I, F>(items: I, function: F) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_optional(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}
