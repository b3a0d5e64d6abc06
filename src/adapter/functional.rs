use std::error::Error as StdError;

use super::error::Aborted;
use crate::outcome::Outcome;

/// Wrap a fallible operation so that its first failure aborts the pipeline
///
/// The returned function maps every error to [`Aborted`], keeping the original
/// error as its cause. Collecting the pipeline into a `Result` stops at the
/// first failure and never evaluates the remaining inputs.
///
/// ```
/// use outcomes::rethrowing;
///
/// let parsed: Result<Vec<u8>, _> = ["1", "x", "3"]
///     .into_iter()
///     .map(rethrowing(str::parse::<u8>))
///     .collect();
///
/// assert_eq!(
///     parsed.unwrap_err().to_string(),
///     "pipeline aborted: invalid digit found in string"
/// );
/// ```
pub fn rethrowing<I, O, E, F>(op: F) -> impl Fn(I) -> Result<O, Aborted>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    move |input| op(input).map_err(Aborted::new)
}

/// Wrap a fallible operation so that every input yields an [`Outcome`]
///
/// The returned function never fails: a success becomes
/// [`Outcome::Success`], an error becomes [`Outcome::Failure`].
///
/// ```
/// use outcomes::{Outcome, capturing};
///
/// let outcomes: Vec<Outcome<u8>> = ["1", "x", "3"]
///     .into_iter()
///     .map(capturing(str::parse::<u8>))
///     .collect();
///
/// assert_eq!(outcomes.len(), 3);
/// assert!(outcomes[1].is_failure());
/// ```
pub fn capturing<I, O, E, F>(op: F) -> impl Fn(I) -> Outcome<O>
where
    F: Fn(I) -> Result<O, E>,
    E: StdError + Send + Sync + 'static,
{
    move |input| match op(input) {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::failure(error),
    }
}
