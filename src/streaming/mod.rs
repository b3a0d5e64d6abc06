pub mod error;
pub mod ext;
pub mod session;

// Re-export commonly used types
pub use error::{AbortOnError, ErrorPolicy, SilentSkip, SkipErrors};
pub use ext::OutcomeStreamExt;
pub use session::{ProcessingSession, SessionReport};
