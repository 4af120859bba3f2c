//! Short-circuiting monads for absence and recoverable failure.
//!
//! - [`Maybe`]: `Just(value)` or `Nothing`
//! - [`Either`]: `Right(value)` or `Left(error)`
//!
//! Both stop a `flat_map` chain at the first failure variant. The failure is
//! passed along untouched and the remaining functions are never called.
//! They convert into each other explicitly with [`Maybe::to_either`] and
//! [`Either::to_maybe`].
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Either, Maybe};
//! use monadic::typeclass::Monad;
//!
//! fn lookup(key: &str) -> Maybe<u16> {
//!     match key {
//!         "port" => Maybe::Just(8080),
//!         _ => Maybe::Nothing,
//!     }
//! }
//!
//! let port: Either<&str, u16> = lookup("port").to_either("port not configured");
//! let host: Either<&str, u16> = lookup("host").to_either("host not configured");
//!
//! assert_eq!(port, Either::right(8080));
//! assert_eq!(host.flat_map(|n| Either::right(n + 1)), Either::left("host not configured"));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
