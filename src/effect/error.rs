//! Error types for the effect system.
//!
//! A fault is a panic raised while an [`IO`](super::IO) runs. `IO::run` lets
//! it unwind; `IO::catch` and `IO::attempt` capture it as a [`Fault`].

use std::any::Any;

/// A failure captured while running an `IO` computation.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::{Fault, IO};
///
/// let outcome = IO::<i32>::fail("disk full").attempt().run();
/// assert_eq!(outcome, Err(Fault::new("disk full")));
/// assert_eq!(Fault::new("disk full").to_string(), "IO fault: disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("IO fault: {message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Creates a fault with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the computation failed with.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Recovers a fault from a panic payload.
    ///
    /// `panic!` payloads are `&str` or `String`; `panic_any(Fault)` carries
    /// the fault itself. Anything else has no readable message.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::new("unknown panic")
        }
    }
}
