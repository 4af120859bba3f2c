//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. As a monad it is
//! right-biased: `Right` carries the success value that `flat_map` and
//! `fmap` operate on, while `Left` carries a recoverable failure that
//! propagates unchanged through the rest of a chain.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Either;
//! use monadic::typeclass::Monad;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("40").flat_map(|n| parse("2").fmap_right(move |m| n + m));
//! assert_eq!(total, Either::right(42));
//!
//! // Using fold to consume both cases
//! let message = parse("x").fold(|error| format!("failed: {error}"), |n| n.to_string());
//! assert!(message.starts_with("failed"));
//! ```

use std::fmt;

use super::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// By convention:
/// - `Left` represents failure or error
/// - `Right` represents success
///
/// There is no implicit conversion between the two sides.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a success value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Builds a failure value.
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Wraps a value in the monad; the same as [`Either::right`].
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the right value, leaving `Left` untouched.
    ///
    /// Unlike [`Functor::fmap`] the function need not be `'static`.
    #[inline]
    pub fn fmap_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the left value, leaving `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::left("bad");
    /// assert_eq!(failure.map_left(str::len), Either::left(3));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Swaps `Left` and `Right`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Exhaustive case dispatch, returning a plain value.
    ///
    /// This is the terminal operation for an `Either` chain: exactly one of
    /// the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let success: Either<String, i32> = Either::right(2);
    /// assert_eq!(success.fold(|e| e.len() as i32, |n| n * 10), 20);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Returns the right value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Recovers from a `Left` by computing a replacement `Either`.
    #[inline]
    pub fn or_else<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Discards the failure, keeping only the success value.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Collects a list of `Either` values, stopping at the first `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let all: Either<&str, Vec<i32>> = Either::sequence(vec![Either::right(1), Either::right(2)]);
    /// assert_eq!(all, Either::right(vec![1, 2]));
    ///
    /// let failed = Either::sequence(vec![Either::right(1), Either::left("e1"), Either::left("e2")]);
    /// assert_eq!(failed, Either::left("e1"));
    /// ```
    pub fn sequence<I>(computations: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        computations
            .into_iter()
            .map(Self::into_result)
            .collect::<Result<Vec<R>, L>>()
            .into()
    }

    /// Applies `function` to each item and collects the results.
    ///
    /// Items after the first `Left` are not visited.
    pub fn traverse<T, I, F>(items: I, function: F) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.fmap_right(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    /// The first `Left` encountered wins.
    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}
