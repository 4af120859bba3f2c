//! Numeric wrapper types for different algebraic operations.
//!
//! A plain integer has two reasonable ways to combine, so it gets no
//! `Semigroup` instance of its own. The wrappers pick one:
//!
//! - [`Sum`]: addition, identity 0
//! - [`Product`]: multiplication, identity 1
//!
//! A `Writer<Sum<u32>, A>` therefore counts, while a `Writer<Vec<String>, A>`
//! appends log lines.

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::typeclass::Sum;
    ///
    /// assert_eq!(Sum::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// There is no `Default` impl; the identity is `Monoid::empty`, i.e. `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
