//! `mdo!` - do-notation for any [`Monad`](crate::typeclass::Monad).
//!
//! # Syntax
//!
//! - `pattern <= expression;` binds the value inside a monad (`flat_map`)
//! - `let pattern = expression;` is an ordinary binding
//! - the final expression must itself be a monad of the same kind
//!
//! `<-` is not a single token to `macro_rules!`, so the bind arrow is `<=`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::mdo;
//!
//! let total = mdo! {
//!     x <= Maybe::Just(5);
//!     y <= Maybe::Just(10);
//!     let z = x + y;
//!     Maybe::Just(z * 2)
//! };
//! assert_eq!(total, Maybe::Just(30));
//! ```
//!
//! ```rust
//! use monadic::effect::State;
//! use monadic::mdo;
//!
//! let tick: State<i32, i32> = mdo! {
//!     current <= State::get();
//!     _ <= State::put(current + 1);
//!     next <= State::get();
//!     State::pure(next * 10)
//! };
//! assert_eq!(tick.run(0), (10, 1));
//! ```
//!
//! The expansion of `x <= m; rest` is
//! `Monad::flat_map(m, move |x| mdo!(rest))`, so the trait need not be in
//! scope at the call site.

/// Chains monadic steps in do-notation.
///
/// ```text
/// mdo! {
///     pattern <= monad_expression;
///     let pattern = expression;
///     monad_expression
/// }
/// ```
///
/// A failure variant (`Maybe::Nothing`, `Either::Left`) stops the block at
/// the step that produced it.
///
/// ```rust
/// use monadic::control::Either;
/// use monadic::mdo;
///
/// let result: Either<&str, i32> = mdo! {
///     x <= Either::right(5);
///     y <= Either::<&str, i32>::left("no y");
///     Either::right(x + y)
/// };
/// assert_eq!(result, Either::left("no y"));
/// ```
#[macro_export]
macro_rules! mdo {
    ($pattern:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |$pattern| {
            $crate::mdo!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |($($pattern)*)| {
            $crate::mdo!($($rest)+)
        })
    };

    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |_| {
            $crate::mdo!($($rest)+)
        })
    };

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::mdo!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $value;
        $crate::mdo!($($rest)+)
    }};

    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::control::{Either, Maybe};
    use crate::effect::{IO, Reader, Writer};
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn maybe_bind_with_let() {
        let result = mdo! {
            x <= Maybe::Just(5);
            let doubled = x * 2;
            Maybe::Just(doubled)
        };
        assert_eq!(result, Maybe::Just(10));
    }

    #[rstest]
    fn maybe_short_circuit() {
        let result: Maybe<i32> = mdo! {
            x <= Maybe::Just(5);
            y <= Maybe::<i32>::Nothing;
            Maybe::Just(x + y)
        };
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn single_expression() {
        let result = mdo! { Identity::new(42) };
        assert_eq!(result, Identity(42));
    }

    #[rstest]
    fn tuple_patterns() {
        let result: Either<String, i32> = mdo! {
            (a, b) <= Either::right((1, 2));
            let (c, d) = (a * 10, b * 10);
            Either::right(c + d)
        };
        assert_eq!(result, Either::right(30));
    }

    #[rstest]
    fn reader_block() {
        let computation: Reader<i32, i32> = mdo! {
            environment <= Reader::ask();
            let doubled = environment * 2;
            Reader::pure(doubled + 1)
        };
        assert_eq!(computation.run(10), 21);
    }

    #[rstest]
    fn writer_block_accumulates() {
        let computation: Writer<Vec<&str>, i32> = mdo! {
            _ <= Writer::tell(vec!["start"]);
            x <= Writer::new(4, vec!["got x"]);
            Writer::new(x + 1, vec!["done"])
        };
        assert_eq!(computation.run(), (5, vec!["start", "got x", "done"]));
    }

    #[rstest]
    fn io_block_is_deferred() {
        let io = mdo! {
            a <= IO::pure(2);
            b <= IO::new(move || a * 3);
            IO::pure(a + b)
        };
        assert_eq!(io.run(), 8);
    }
}
