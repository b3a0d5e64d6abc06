use std::error::Error as StdError;

use futures::stream::Collect;
use futures::{Stream, StreamExt};

use crate::adapter::{Aborted, capturing, rethrowing};
use crate::outcome::Outcome;
use crate::partition::Partitioned;

/// Apply the fallible-transformation adapters to async streams
pub trait OutcomeStreamExt: Stream + Sized {
    /// Map every item through `op`, capturing failures as outcomes
    fn capture<O, E, F>(self, op: F) -> impl Stream<Item = Outcome<O>>
    where
        F: Fn(Self::Item) -> Result<O, E>,
        E: StdError + Send + Sync + 'static,
    {
        self.map(capturing(op))
    }

    /// Map every item through `op`, turning failures into [`Aborted`]
    ///
    /// Pair with `TryStreamExt::try_collect` to stop at the first failure.
    fn rethrow<O, E, F>(self, op: F) -> impl Stream<Item = Result<O, Aborted>>
    where
        F: Fn(Self::Item) -> Result<O, E>,
        E: StdError + Send + Sync + 'static,
    {
        self.map(rethrowing(op))
    }

    /// Drain a stream of outcomes into successes and failures
    fn partition_outcomes<T>(self) -> Collect<Self, Partitioned<T>>
    where
        Self: Stream<Item = Outcome<T>>,
    {
        self.collect()
    }
}

impl<S: Stream> OutcomeStreamExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use futures::stream;
    use std::cell::Cell;
    use std::num::ParseIntError;

    fn parse(input: &str) -> Result<i32, ParseIntError> {
        input.parse()
    }

    #[tokio::test]
    async fn capture_yields_one_outcome_per_item() {
        let outcomes: Vec<Outcome<i32>> = stream::iter(["1", "x", "3"])
            .capture(parse)
            .collect()
            .await;

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].value(), Some(&1));
        assert!(outcomes[1].is_failure());
        assert_eq!(outcomes[2].value(), Some(&3));
    }

    #[tokio::test]
    async fn partition_outcomes_splits_stream() {
        let partitioned = stream::iter(["1", "x", "3", "y"])
            .capture(parse)
            .partition_outcomes()
            .await;

        assert_eq!(partitioned.successes(), &[1, 3]);
        assert_eq!(partitioned.failures().len(), 2);
    }

    #[tokio::test]
    async fn rethrow_collects_all_on_success() {
        let values: Vec<i32> = stream::iter(["1", "2"])
            .rethrow(parse)
            .try_collect()
            .await
            .unwrap();

        assert_eq!(values, vec![1, 2]);
    }

    #[tokio::test]
    async fn rethrow_stops_at_first_failure() {
        let calls = Cell::new(0);
        let counted = |input: &str| {
            calls.set(calls.get() + 1);
            parse(input)
        };

        let result: Result<Vec<i32>, Aborted> = stream::iter(["1", "x", "3"])
            .rethrow(counted)
            .try_collect()
            .await;

        let aborted = result.unwrap_err();
        assert!(aborted.downcast_ref::<ParseIntError>().is_some());
        assert_eq!(calls.get(), 2);
    }
}
