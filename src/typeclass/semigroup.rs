//! Semigroup type class - types with an associative binary operation.
//!
//! `Writer` uses `combine` to merge the output of successive steps, so the
//! associativity law below is what makes Writer chains independent of how
//! they are grouped.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::{Semigroup, Sum};
//!
//! // Sequences append
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//!
//! // Numbers add through the Sum wrapper
//! assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that returns
    /// the identity element instead, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// The unit type forms a trivial semigroup; a `Writer<(), A>` logs nothing.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Tuples combine component-wise, so a Writer can keep a log and a counter at once.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
