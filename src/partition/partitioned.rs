use crate::outcome::{Failure, Outcome};

/// Outcomes split into success values and failures
///
/// Both groups keep the relative order of the outcomes they came from.
#[derive(Debug)]
pub struct Partitioned<T> {
    successes: Vec<T>,
    failures: Vec<Failure>,
}

impl<T> Partitioned<T> {
    pub fn new() -> Self {
        Self {
            successes: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn successes(&self) -> &[T] {
        &self.successes
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<Failure>) {
        (self.successes, self.failures)
    }

    /// Number of outcomes collected, successes and failures together
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn push(&mut self, outcome: Outcome<T>) {
        match outcome {
            Outcome::Success(value) => self.successes.push(value),
            Outcome::Failure(failure) => self.failures.push(failure),
        }
    }
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Outcome<T>> for Partitioned<T> {
    fn extend<I: IntoIterator<Item = Outcome<T>>>(&mut self, iter: I) {
        for outcome in iter {
            self.push(outcome);
        }
    }
}

impl<T> FromIterator<Outcome<T>> for Partitioned<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        iter.into_iter().fold(Partitioned::new(), |mut acc, outcome| {
            acc.push(outcome);
            acc
        })
    }
}
