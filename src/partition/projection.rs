use super::partitioned::Partitioned;
use crate::outcome::{Failure, Outcome};

/// An outcome, owned or borrowed, split into its value or its failure
///
/// Lets [`successes_of`] and [`failures_of`] take either `Vec<Outcome<T>>`
/// (yielding `T` / `Failure`) or `&[Outcome<T>]` (yielding `&T` / `&Failure`).
pub trait Projection {
    type Value;
    type Error;

    fn project(self) -> Result<Self::Value, Self::Error>;
}

impl<T> Projection for Outcome<T> {
    type Value = T;
    type Error = Failure;

    fn project(self) -> Result<T, Failure> {
        self.into_result()
    }
}

impl<'a, T> Projection for &'a Outcome<T> {
    type Value = &'a T;
    type Error = &'a Failure;

    fn project(self) -> Result<&'a T, &'a Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

/// Success values of a sequence of outcomes, in their original order
pub fn successes_of<I>(outcomes: I) -> impl Iterator<Item = <I::Item as Projection>::Value>
where
    I: IntoIterator,
    I::Item: Projection,
{
    outcomes.into_iter().filter_map(|outcome| outcome.project().ok())
}

/// Failures of a sequence of outcomes, in their original order
pub fn failures_of<I>(outcomes: I) -> impl Iterator<Item = <I::Item as Projection>::Error>
where
    I: IntoIterator,
    I::Item: Projection,
{
    outcomes.into_iter().filter_map(|outcome| outcome.project().err())
}

/// Fluent projections over an iterator of outcomes
pub trait OutcomeIteratorExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Keep only the success values
    fn successes(self) -> impl Iterator<Item = T> {
        successes_of(self)
    }

    /// Keep only the failures
    fn failures(self) -> impl Iterator<Item = Failure> {
        failures_of(self)
    }

    /// Split into successes and failures in a single pass
    fn partition_outcomes(self) -> Partitioned<T> {
        self.collect()
    }
}

impl<T, I> OutcomeIteratorExt<T> for I where I: Iterator<Item = Outcome<T>> {}
