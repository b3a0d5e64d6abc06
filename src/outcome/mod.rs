pub mod container;
pub mod failure;

// Re-export commonly used types
pub use container::Outcome;
pub use failure::{Chain, Failure};
