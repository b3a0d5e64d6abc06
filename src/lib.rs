//! Fallible-transformation adapters for lazy pipelines.
//!
//! An operation that may fail per element (`I -> Result<O, E>`) is wrapped
//! into a total function that fits `Iterator::map` or `StreamExt::map`:
//!
//! - [`capturing`] turns every input into an [`Outcome`], so the pipeline
//!   always completes and failures can be inspected afterwards.
//! - [`rethrowing`] turns a failure into an [`Aborted`] error, so collecting
//!   into a `Result` stops at the first bad element.
//!
//! ```
//! use outcomes::prelude::*;
//!
//! let inputs = ["1", "two", "3"];
//!
//! let outcomes: Vec<Outcome<i32>> = inputs
//!     .iter()
//!     .map(capturing(|s: &&str| s.parse::<i32>()))
//!     .collect();
//!
//! let numbers: Vec<&i32> = successes_of(&outcomes).collect();
//! assert_eq!(numbers, [&1, &3]);
//! assert_eq!(failures_of(&outcomes).count(), 1);
//!
//! let all: Result<Vec<i32>, Aborted> = inputs
//!     .iter()
//!     .map(rethrowing(|s: &&str| s.parse::<i32>()))
//!     .collect();
//! assert!(all.is_err());
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod io;
pub mod outcome;
pub mod partition;
pub mod prelude;
pub mod streaming;

pub use adapter::{Aborted, capturing, rethrowing};
pub use outcome::{Failure, Outcome};
pub use partition::{OutcomeIteratorExt, Partitioned, failures_of, successes_of};
