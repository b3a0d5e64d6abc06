pub mod partitioned;
pub mod projection;

// Re-export commonly used types
pub use partitioned::Partitioned;
pub use projection::{OutcomeIteratorExt, Projection, failures_of, successes_of};
