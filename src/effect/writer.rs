//! Writer Monad - computation with accumulated output.
//!
//! The Writer monad pairs a result with output that accumulates as steps
//! are chained: log lines, counters, collected events.
//!
//! # Overview
//!
//! A `Writer<W, A>` holds a pair `(A, W)`, where `A` is the result and `W`
//! is the output. `W` must be a [`Monoid`]: `pure` starts from
//! `W::empty()` and `flat_map` joins the outputs of consecutive steps with
//! `combine`. Sequences append (`Vec`, `String`); numbers accumulate
//! through [`Sum`](crate::typeclass::Sum) or
//! [`Product`](crate::typeclass::Product).
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `Writer::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Writer::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Both identity laws lean on the monoid identity, and associativity on
//! the associativity of `combine`.
//!
//! ## Writer Laws
//!
//! - Tell Monoid Law: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - Listen Tell Law: `tell(w).listen()` captures `w`
//!
//! # Examples
//!
//! Logging pattern:
//!
//! ```rust
//! use monadic::effect::Writer;
//! use monadic::typeclass::Monad;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .then(log("step 2"))
//!     .then(Writer::pure(42));
//!
//! let (result, logs) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```
//!
//! Counting pattern:
//!
//! ```rust
//! use monadic::effect::Writer;
//! use monadic::typeclass::{Monad, Sum};
//!
//! let visit = |node: &'static str| Writer::new(node, Sum(1_u32));
//! let walk = visit("root").flat_map(move |_| visit("left")).flat_map(move |_| visit("right"));
//! assert_eq!(walk.run(), ("right", Sum(3)));
//! ```

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A monad for computations that produce accumulated output alongside a result.
///
/// # Type Parameters
///
/// - `W`: The output type (must implement `Monoid` for chaining)
/// - `A`: The result type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    /// The result value.
    result: A,
    /// The accumulated output.
    output: W,
}

impl<W, A> Writer<W, A> {
    /// Creates a new Writer with the given result and output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["initial".to_string()]);
    /// assert_eq!(writer.run(), (42, vec!["initial".to_string()]));
    /// ```
    pub const fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Consumes the Writer, returning the result and output.
    pub fn run(self) -> (A, W) {
        (self.result, self.output)
    }

    /// Consumes the Writer and returns only the result.
    pub fn eval(self) -> A {
        self.result
    }

    /// Consumes the Writer and returns only the accumulated output.
    pub fn exec(self) -> W {
        self.output
    }

    /// Borrows the result.
    pub const fn result(&self) -> &A {
        &self.result
    }

    /// Borrows the accumulated output.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Exposes the output so far as part of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["log".to_string()]);
    /// let ((result, captured), output) = writer.listen().run();
    /// assert_eq!(result, 42);
    /// assert_eq!(captured, vec!["log"]);
    /// assert_eq!(output, vec!["log"]);
    /// ```
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer {
            result: (self.result, self.output.clone()),
            output: self.output,
        }
    }

    /// Rewrites the accumulated output, keeping the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, i32> = Writer::new(42, vec!["hello".to_string()]);
    /// let censored = writer.censor(|output| output.into_iter().map(|s| s.to_uppercase()).collect());
    /// assert_eq!(censored.run(), (42, vec!["HELLO".to_string()]));
    /// ```
    #[must_use]
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Writer {
            result: self.result,
            output: modifier(self.output),
        }
    }
}

impl<W, A> Writer<W, A>
where
    W: Monoid,
{
    /// Creates a Writer with the given result and empty output.
    pub fn pure(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// Collects the results of several Writers, combining their output in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let steps = vec![
    ///     Writer::new(1, "a".to_string()),
    ///     Writer::new(2, "b".to_string()),
    /// ];
    /// assert_eq!(Writer::sequence(steps).run(), (vec![1, 2], "ab".to_string()));
    /// ```
    pub fn sequence<I>(computations: I) -> Writer<W, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut output = W::empty();
        let results = computations
            .into_iter()
            .map(|step| {
                let (result, step_output) = step.run();
                output = std::mem::replace(&mut output, W::empty()).combine(step_output);
                result
            })
            .collect();
        Writer::new(results, output)
    }

    /// Applies `function` to each item and sequences the resulting Writers.
    pub fn traverse<T, I, F>(items: I, function: F) -> Writer<W, Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

impl<W> Writer<W, ()> {
    /// Creates a Writer that only records output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let writer: Writer<Vec<String>, ()> = Writer::tell(vec!["message".to_string()]);
    /// assert_eq!(writer.exec(), vec!["message"]);
    /// ```
    pub const fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<W, A> TypeConstructor for Writer<W, A> {
    type Inner = A;
    type WithType<B> = Writer<W, B>;
}

impl<W, A> Functor for Writer<W, A> {
    fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.result), self.output)
    }
}

impl<W, A> Applicative for Writer<W, A>
where
    W: Monoid,
{
    fn pure<B>(value: B) -> Writer<W, B> {
        Writer::pure(value)
    }

    fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer::new(
            function(self.result, other.result),
            self.output.combine(other.output),
        )
    }
}

impl<W, A> Monad for Writer<W, A>
where
    W: Monoid,
{
    fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let (result, next_output) = function(self.result).run();
        Writer::new(result, self.output.combine(next_output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn writer_pure_has_empty_output() {
        let writer: Writer<Vec<String>, i32> = Writer::pure(42);
        let (result, output) = writer.run();
        assert_eq!(result, 42);
        assert!(output.is_empty());
    }

    #[rstest]
    fn writer_fmap_keeps_output() {
        let writer: Writer<Vec<String>, i32> = Writer::new(21, vec!["log".to_string()]);
        let (result, output) = writer.fmap(|value| value * 2).run();
        assert_eq!(result, 42);
        assert_eq!(output, vec!["log"]);
    }

    #[rstest]
    fn writer_flat_map_combines_outputs() {
        let writer: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
        let chained = writer.flat_map(|value| Writer::new(value * 2, vec!["second".to_string()]));
        let (result, output) = chained.run();
        assert_eq!(result, 20);
        assert_eq!(output, vec!["first", "second"]);
    }

    #[rstest]
    fn writer_numeric_log_adds() {
        let writer = Writer::new("a", Sum(2)).flat_map(|_| Writer::new("b", Sum(5)));
        assert_eq!(writer.run(), ("b", Sum(7)));
    }

    #[rstest]
    fn writer_map2_combines_outputs() {
        let writer1: Writer<Vec<String>, i32> = Writer::new(10, vec!["first".to_string()]);
        let writer2: Writer<Vec<String>, i32> = Writer::new(20, vec!["second".to_string()]);
        let (result, output) = writer1.map2(writer2, |a, b| a + b).run();
        assert_eq!(result, 30);
        assert_eq!(output, vec!["first", "second"]);
    }

    #[rstest]
    fn writer_sequence_empty_has_empty_output() {
        let steps: Vec<Writer<String, i32>> = Vec::new();
        assert_eq!(Writer::sequence(steps).run(), (Vec::new(), String::new()));
    }

    #[rstest]
    fn writer_traverse_logs_each_item() {
        let traversed = Writer::traverse(1..=3, |n| Writer::new(n * n, vec![format!("square {n}")]));
        let (squares, log) = traversed.run();
        assert_eq!(squares, vec![1, 4, 9]);
        assert_eq!(log, vec!["square 1", "square 2", "square 3"]);
    }

    #[rstest]
    fn writer_accessors_borrow() {
        let writer = Writer::new(1, vec!["x"]);
        assert_eq!(writer.result(), &1);
        assert_eq!(writer.output(), &vec!["x"]);
    }
}
