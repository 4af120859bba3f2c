//! Effect monads: computations described as values and run on demand.
//!
//! - [`State`]: threads a state through a sequence of steps
//! - [`Reader`]: reads from a shared, read-only environment
//! - [`Writer`]: accumulates output through a [`Monoid`](crate::typeclass::Monoid)
//! - [`IO`]: deferred side effects, with faults intercepted by [`IO::catch`]
//! - [`IOLite`]: deferred side effects without fault interception
//!
//! `State`, `Reader`, `IO` and `IOLite` wrap one-shot closures. Nothing
//! runs while they are built or chained; `run` (or `eval`/`exec`) consumes
//! the value and executes it.
//!
//! # IO Monad
//!
//! ```rust
//! use monadic::effect::IO;
//! use monadic::typeclass::{Functor, Monad};
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Do-Notation with `mdo!`
//!
//! ```rust
//! use monadic::effect::Writer;
//! use monadic::mdo;
//!
//! let computation: Writer<String, i32> = mdo! {
//!     x <= Writer::new(2, "two ".to_string());
//!     y <= Writer::new(3, "three".to_string());
//!     Writer::pure(x * y)
//! };
//! assert_eq!(computation.run(), (6, "two three".to_string()));
//! ```

mod error;
mod io;
mod io_lite;
mod mdo_macro;
mod reader;
mod state;
mod writer;

pub use error::Fault;
pub use io::IO;
pub use io_lite::IOLite;
pub use reader::Reader;
pub use state::State;
pub use writer::Writer;
