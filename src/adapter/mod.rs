pub mod error;
pub mod functional;

// Re-export commonly used types
pub use error::Aborted;
pub use functional::{capturing, rethrowing};
