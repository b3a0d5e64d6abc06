use std::pin::pin;

use futures::{Stream, StreamExt};
use tracing::debug;

use super::error::ErrorPolicy;
use crate::outcome::Outcome;
use crate::partition::Partitioned;

/// Drains a stream of outcomes, consulting an error policy on each failure
pub struct ProcessingSession<P>
where
    P: ErrorPolicy,
{
    error_policy: P,
    processed: usize,
}

/// What a session collected from one stream
#[derive(Debug)]
pub struct SessionReport<T> {
    pub outcomes: Partitioned<T>,
    /// False if the error policy aborted processing
    pub completed: bool,
}

impl<T> SessionReport<T> {
    /// Check if the stream was drained with no failures
    pub fn all_succeeded(&self) -> bool {
        self.completed && self.outcomes.all_succeeded()
    }

    /// Check if there were failures and not a single success
    pub fn nothing_succeeded(&self) -> bool {
        self.outcomes.successes().is_empty() && !self.outcomes.failures().is_empty()
    }
}

impl<P> ProcessingSession<P>
where
    P: ErrorPolicy,
{
    /// Create a new processing session
    pub fn new(error_policy: P) -> Self {
        Self {
            error_policy,
            processed: 0,
        }
    }

    /// Process a stream of outcomes
    ///
    /// Every element seen is recorded, including the failure that made the
    /// policy abort. Elements after an abort are not polled.
    pub async fn process_stream<S, T>(&mut self, stream: S) -> SessionReport<T>
    where
        S: Stream<Item = Outcome<T>>,
    {
        let mut stream = pin!(stream);
        let mut outcomes = Partitioned::new();

        while let Some(outcome) = stream.next().await {
            self.processed += 1;

            let proceed = match outcome.error() {
                Some(failure) => self.error_policy.handle_failure(failure),
                None => true,
            };
            outcomes.push(outcome);

            if !proceed {
                debug!(processed = self.processed, "Processing aborted by error policy");
                return SessionReport {
                    outcomes,
                    completed: false,
                };
            }
        }

        SessionReport {
            outcomes,
            completed: true,
        }
    }

    /// Number of elements seen across every stream processed so far
    pub fn processed(&self) -> usize {
        self.processed
    }
}
