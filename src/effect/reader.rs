//! Reader Monad - computation with a read-only environment.
//!
//! The Reader monad represents computations that depend on a shared
//! environment, such as configuration, without passing it explicitly through
//! every function.
//!
//! # Overview
//!
//! A `Reader<R, A>` encapsulates a function `&R -> A`. The environment is
//! supplied once, at the boundary, by [`Reader::run`]; every step of the
//! chain borrows the same environment and none of them can change it.
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Reader Laws
//!
//! - Ask Local Law: `local(f, ask()) == asks(f)`
//! - Local Identity Law: `local(|r| r.clone(), m) == m`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::Reader;
//! use monadic::typeclass::Monad;
//!
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|config: &Config| config.host.clone())
//!     .flat_map(|host| Reader::asks(move |config: &Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A monad for computations that read from a shared environment.
///
/// # Type Parameters
///
/// - `R`: The environment type
/// - `A`: The result type
pub struct Reader<R, A> {
    /// The wrapped function from a borrowed environment to a result.
    run_function: Box<dyn FnOnce(&R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment: &i32| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(&R) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the Reader computation with the given environment.
    pub fn run(self, environment: R) -> A {
        self.run_ref(&environment)
    }

    /// Runs the Reader computation against a borrowed environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let settings = vec!["verbose".to_string()];
    /// let count = Reader::asks(|s: &Vec<String>| s.len());
    /// assert_eq!(count.run_ref(&settings), 1);
    /// assert_eq!(settings.len(), 1);
    /// ```
    pub fn run_ref(self, environment: &R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that ignores the environment and returns a constant value.
    pub fn pure(value: A) -> Self {
        Self::new(move |_| value)
    }

    /// Creates a Reader that projects a value from the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(&R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against a modified copy of the environment.
    ///
    /// The modification is visible only to `computation`; steps chained
    /// after the returned Reader see the original environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    /// use monadic::typeclass::Monad;
    ///
    /// let doubled = Reader::local(|depth: &u32| depth * 2, Reader::asks(|depth: &u32| *depth));
    /// let both = doubled.flat_map(|inner| Reader::asks(move |depth: &u32| (inner, *depth)));
    /// assert_eq!(both.run(5), (10, 5));
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(&R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }

    /// Runs every computation against the same environment, collecting results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let parts = Reader::sequence(vec![
    ///     Reader::asks(|n: &i32| n + 1),
    ///     Reader::asks(|n: &i32| n * 2),
    /// ]);
    /// assert_eq!(parts.run(10), vec![11, 20]);
    /// ```
    pub fn sequence<I>(computations: I) -> Reader<R, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = computations.into_iter().collect();
        Reader::new(move |environment| {
            steps
                .into_iter()
                .map(|step| step.run_ref(environment))
                .collect()
        })
    }

    /// Builds one computation per item with `function`, then sequences them.
    pub fn traverse<T, I, F>(items: I, function: F) -> Reader<R, Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

impl<R> Reader<R, R>
where
    R: Clone + 'static,
{
    /// Creates a Reader that returns a copy of the whole environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<String, String> = Reader::ask();
    /// assert_eq!(reader.run("env".to_string()), "env");
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(R::clone)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<R, A> TypeConstructor for Reader<R, A> {
    type Inner = A;
    type WithType<B> = Reader<R, B>;
}

impl<R, A> Functor for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function(original_function(environment)))
    }
}

impl<R, A> Applicative for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn pure<B>(value: B) -> Reader<R, B>
    where
        B: 'static,
    {
        Reader::pure(value)
    }

    fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        Reader::new(move |environment| {
            let result_a = self_function(environment);
            let result_b = other.run_ref(environment);
            function(result_a, result_b)
        })
    }
}

impl<R, A> Monad for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: FnOnce(A) -> Reader<R, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| {
            let result = original_function(environment);
            function(result).run_ref(environment)
        })
    }
}

impl<R, A> std::fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
