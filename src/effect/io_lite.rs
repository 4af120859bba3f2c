//! Lightweight deferred effects.
//!
//! [`IOLite`] defers and orders effects exactly like [`IO`], but has no
//! fault interception: a panic always propagates from [`IOLite::run`].
//! Lift it with [`IOLite::into_io`] when recovery is needed.

use super::io::IO;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A deferred computation without fault handling.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::IOLite;
/// use monadic::typeclass::Monad;
///
/// let io = IOLite::pure(20).flat_map(|n| IOLite::new(move || n + 1));
/// assert_eq!(io.run(), 21);
/// ```
pub struct IOLite<A> {
    /// The deferred computation.
    thunk: Box<dyn FnOnce() -> A>,
}

impl<A> IOLite<A> {
    /// Executes the computation.
    ///
    /// # Panics
    ///
    /// Propagates any panic raised by the computation.
    pub fn run(self) -> A {
        (self.thunk)()
    }
}

impl<A: 'static> IOLite<A> {
    /// Defers `action` until `run`.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            thunk: Box::new(action),
        }
    }

    /// Wraps a value with no effect.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs each computation in order, collecting the values.
    pub fn sequence<I>(actions: I) -> IOLite<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = actions.into_iter().collect();
        IOLite::new(move || steps.into_iter().map(Self::run).collect())
    }

    /// Maps each item to a computation and sequences them.
    pub fn traverse<T, I, F>(items: I, function: F) -> IOLite<Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }

    /// Lifts this computation into [`IO`], where faults can be caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::{IO, IOLite};
    ///
    /// let fragile: IOLite<i32> = IOLite::new(|| panic!("unreachable host"));
    /// let safe = fragile.into_io().catch(|_| IO::pure(-1));
    /// assert_eq!(safe.run(), -1);
    /// ```
    pub fn into_io(self) -> IO<A> {
        IO::new(move || self.run())
    }
}

impl<A> TypeConstructor for IOLite<A> {
    type Inner = A;
    type WithType<B> = IOLite<B>;
}

impl<A: 'static> Functor for IOLite<A> {
    fn fmap<B, F>(self, function: F) -> IOLite<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IOLite::new(move || function(self.run()))
    }
}

impl<A: 'static> Applicative for IOLite<A> {
    fn pure<B>(value: B) -> IOLite<B>
    where
        B: 'static,
    {
        IOLite::pure(value)
    }

    fn map2<B, C, F>(self, other: IOLite<B>, function: F) -> IOLite<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IOLite::new(move || {
            let first = self.run();
            function(first, other.run())
        })
    }
}

impl<A: 'static> Monad for IOLite<A> {
    fn flat_map<B, F>(self, function: F) -> IOLite<B>
    where
        F: FnOnce(A) -> IOLite<B> + 'static,
        B: 'static,
    {
        IOLite::new(move || function(self.run()).run())
    }
}

impl<A> std::fmt::Display for IOLite<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IOLite>")
    }
}
