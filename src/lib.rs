//! # monadic
//!
//! Canonical monadic containers for Rust, all sharing one law-abiding
//! interface (`pure`, `flat_map`, `fmap`).
//!
//! ## Overview
//!
//! - **Type Classes**: `TypeConstructor`, `Functor`, `Applicative`, `Monad`,
//!   `Semigroup`, `Monoid`, plus the `Identity` monad
//! - **Control**: `Maybe` for absence, `Either` for recoverable failure
//! - **Effects**: `State`, `Reader`, `Writer`, `IO` and `IOLite`, and the
//!   `mdo!` do-notation macro
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe` and `Either`
//! - `effect`: State, Reader, Writer, IO, `IOLite`
//! - `serde`: Serialization for the plain data containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let parsed = Maybe::from_optional("42".parse::<i32>().ok())
//!     .flat_map(|n| if n > 0 { Maybe::Just(n * 2) } else { Maybe::Nothing })
//!     .to_either("not a positive number");
//!
//! let message = parsed.fold(|error| error.to_string(), |n| format!("got {n}"));
//! assert_eq!(message, "got 84");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
