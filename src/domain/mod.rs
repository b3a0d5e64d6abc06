pub mod date;
pub mod error;

// Re-export commonly used types
pub use date::CalendarDate;
pub use error::DomainError;
