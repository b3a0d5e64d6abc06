//! Prelude module for convenient imports
//!
//! Import everything you need with: `use outcomes::prelude::*;`

// Core types
pub use crate::adapter::{Aborted, capturing, rethrowing};
pub use crate::outcome::{Failure, Outcome};
pub use crate::partition::{OutcomeIteratorExt, Partitioned, failures_of, successes_of};

// Domain types
pub use crate::domain::{CalendarDate, DomainError};

// IO types
pub use crate::io::{CsvRecordStream, DatedRow, InputRow, IoError, parse_row, write_dates};

// Streaming types
pub use crate::streaming::{
    AbortOnError, ErrorPolicy, OutcomeStreamExt, ProcessingSession, SessionReport, SilentSkip,
    SkipErrors,
};

// App types
pub use crate::app::{AppError, CliApp, FailureMode, RunConfig};
