//! Error types for monad-stream
//!
//! The library has a single error condition: asking an empty `Optional`
//! for its value. Every other kind of absence is structural (an empty
//! `Optional` or an exhausted `Stream`) and is never reported as an error.

/// Raised by [`Optional::get`](crate::Optional::get) on an empty instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot get value from empty optional")]
pub struct AbsentValueError;

/// Result type for optional value extraction
pub type OptionalResult<T> = Result<T, AbsentValueError>;
