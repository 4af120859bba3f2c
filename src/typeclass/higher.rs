//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a GAT: a concrete type like
//! `Maybe<i32>` names its own constructor applied to another argument via
//! `WithType<B>`. Every container in this crate implements it, which is what
//! lets [`Functor`](super::Functor) and [`Monad`](super::Monad) describe
//! "the same container, holding a `B` now".
//!
//! # Example
//!
//! ```rust
//! use monadic::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabeled: Identity<String> = relabel(Identity(42));
//! assert_eq!(relabeled, Identity(String::new()));
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// Every other type parameter of the implementor (the error type of `Either`,
/// the state type of `State`, the log type of `Writer`, ...) is fixed;
/// only the payload position varies.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}
