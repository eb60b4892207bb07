pub mod error;
pub mod function;
pub mod optional;
pub mod stream;

// Re-export the containers and the error type at the crate root
pub use error::{AbsentValueError, OptionalResult};
pub use optional::Optional;
pub use stream::Stream;
