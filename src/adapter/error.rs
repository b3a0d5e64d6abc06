use std::error::Error as StdError;
use std::fmt;

use crate::outcome::Failure;

/// Failure raised by a [`rethrowing`](super::rethrowing) adapter
///
/// Wraps the original error unchanged; it is both the `source()` of this error
/// and reachable through [`Aborted::downcast_ref`].
#[derive(Debug)]
pub struct Aborted {
    cause: Failure,
}

impl Aborted {
    /// Wrap the error that aborted the pipeline
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            cause: Failure::new(error),
        }
    }

    /// The original error
    pub fn cause(&self) -> &Failure {
        &self.cause
    }

    pub fn into_cause(self) -> Failure {
        self.cause
    }

    /// Borrow the original error as its concrete type
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.cause.downcast_ref::<E>()
    }
}

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pipeline aborted: {}", self.cause)
    }
}

// The captured error itself is the source, not the `Failure` holding it
impl StdError for Aborted {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_error())
    }
}
