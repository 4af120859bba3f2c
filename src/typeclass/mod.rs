//! Type class traits for functional programming abstractions.
//!
//! This module holds the contract every container in the crate implements,
//! and the algebraic structures `Writer` relies on:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GAT
//! - [`Functor`]: `fmap`, transforming the payload while keeping the shape
//! - [`Applicative`]: `pure` and `map2`
//! - [`Monad`]: `flat_map` (bind), with `bind`/`and_then`/`then` helpers
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//! - [`Sum`], [`Product`]: numeric wrappers picking a monoid for numbers
//! - [`Identity`]: the trivial monad
//!
//! # Examples
//!
//! Writing code once against the contract:
//!
//! ```rust
//! use monadic::typeclass::{Functor, Identity, Monad};
//!
//! fn add_then_double<M>(monad: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     monad.fmap(|n| (n + 1) * 2)
//! }
//!
//! assert_eq!(add_then_double(Identity(4)), Identity(10));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
