//! IO Monad - deferred side effects with fault interception.
//!
//! An `IO<A>` is a description of a side-effecting computation that produces
//! an `A`. Building and chaining IO values performs no effects; they happen
//! only when [`IO::run`] is called, strictly in chain order and once each.
//!
//! A panic raised while the computation runs is its fault. `run` lets the
//! fault propagate. [`IO::catch`] and [`IO::attempt`] intercept it as a
//! [`Fault`].
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::IO;
//! use monadic::typeclass::{Functor, Monad};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let journal = Rc::new(RefCell::new(Vec::new()));
//! let first = Rc::clone(&journal);
//! let second = Rc::clone(&journal);
//!
//! let io = IO::new(move || first.borrow_mut().push("read"))
//!     .flat_map(move |()| IO::new(move || second.borrow_mut().push("write")))
//!     .fmap(|()| "done");
//!
//! assert!(journal.borrow().is_empty());
//! assert_eq!(io.run(), "done");
//! assert_eq!(*journal.borrow(), vec!["read", "write"]);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, trace};

use super::error::Fault;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A monad representing deferred side effects.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// Equality here means equal results and equal effects when run.
pub struct IO<A> {
    /// The wrapped computation.
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A> IO<A> {
    /// Executes the computation, performing its effects.
    ///
    /// # Panics
    ///
    /// Propagates any fault raised by the computation.
    pub fn run(self) -> A {
        (self.run_io)()
    }
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let io = IO::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     42
    /// });
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(io.run(), 42);
    /// assert_eq!(calls.get(), 1);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an IO action.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Creates an IO action that faults with `message` when run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let recovered = IO::<&str>::fail("missing file")
    ///     .catch(|fault| IO::pure(if fault.message() == "missing file" { "default" } else { "?" }));
    /// assert_eq!(recovered.run(), "default");
    /// ```
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move || panic!("{message}"))
    }

    /// Recovers from a fault by running the IO built by `handler`.
    ///
    /// If the computation completes, its value is returned and `handler` is
    /// never called. A fault raised by the fallback itself is not caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let panicking: IO<String> = IO::new(|| panic!("oops"));
    /// let recovered = panicking.catch(|fault| IO::pure(format!("recovered from {}", fault.message())));
    /// assert_eq!(recovered.run(), "recovered from oops");
    ///
    /// let successful = IO::pure(42).catch(|_| IO::pure(0));
    /// assert_eq!(successful.run(), 42);
    /// ```
    #[must_use]
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: FnOnce(Fault) -> Self + 'static,
    {
        IO::new(move || match capture(self) {
            Ok(value) => value,
            Err(fault) => handler(fault).run(),
        })
    }

    /// Turns a fault into an `Err` value instead of letting it propagate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// assert_eq!(IO::pure(1).attempt().run(), Ok(1));
    /// assert!(IO::new(|| -> i32 { panic!("boom") }).attempt().run().is_err());
    /// ```
    pub fn attempt(self) -> IO<Result<A, Fault>> {
        IO::new(move || capture(self))
    }

    /// Runs each IO in order when the result is run, collecting the values.
    pub fn sequence<I>(actions: I) -> IO<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Vec<Self> = actions.into_iter().collect();
        IO::new(move || steps.into_iter().map(Self::run).collect())
    }

    /// Builds one IO per item with `function`, then sequences them.
    ///
    /// `function` is applied eagerly; the effects it describes stay deferred.
    pub fn traverse<T, I, F>(items: I, function: F) -> IO<Vec<A>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }
}

/// Runs `io`, capturing a fault instead of unwinding.
fn capture<A>(io: IO<A>) -> Result<A, Fault> {
    trace!("running IO with fault capture");
    catch_unwind(AssertUnwindSafe(move || io.run())).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        debug!(fault = %fault, "IO fault intercepted");
        fault
    })
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }
}

impl<A: 'static> Applicative for IO<A> {
    fn pure<B>(value: B) -> IO<B>
    where
        B: 'static,
    {
        IO::pure(value)
    }

    fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run();
            let second = other.run();
            function(first, second)
        })
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()).run())
    }
}

impl<A> std::fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IO>")
    }
}
