use tracing::{error, warn};

use crate::outcome::Failure;

/// Policy for handling captured failures while draining an outcome stream
pub trait ErrorPolicy: Send + Sync {
    /// Handle a failed element
    /// Return true to continue processing, false to abort
    fn handle_failure(&self, failure: &Failure) -> bool;
}

/// Skip failures and continue processing (logged at warn level)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_failure(&self, failure: &Failure) -> bool {
        warn!(error = %failure, "Skipping failed element");
        true
    }
}

/// Abort on first failure (logged at error level)
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_failure(&self, failure: &Failure) -> bool {
        error!(error = %failure, "Aborting on failed element");
        false
    }
}

/// Silent error policy - skip failures without logging
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_failure(&self, _failure: &Failure) -> bool {
        true
    }
}
