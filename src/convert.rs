//! Conversion helpers between `Result`, [`Outcome`], and [`Report`].
//!
//! These adapters make incremental adoption straightforward: wrap legacy
//! results on the way in, flatten outcomes back to core errors on the way out
//! when talking to external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = result_to_outcome::<i32, &str>(Ok(42));
//! assert!(outcome.is_ok());
//!
//! let flattened = outcome_to_result(outcome);
//! assert_eq!(flattened, Ok(42));
//! ```

use crate::outcome::Outcome;
use crate::report::Report;

/// Lifts a plain `Result` into an [`Outcome`].
///
/// Equivalent to [`Outcome::from_result`]; a failure gets a fresh report with
/// an origin trace and no notes.
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Flattens an [`Outcome`] to a plain `Result`, discarding diagnostics.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert::outcome_to_result, Outcome};
///
/// let out: Outcome<i32, &str> = Outcome::err("boom").context("step");
/// assert_eq!(outcome_to_result(out), Err("boom"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome {
        Outcome::Ok(value) => Ok(value),
        Outcome::Err(report) => Err(report.into_core()),
    }
}

/// Wraps a failure payload in a fresh [`Report`].
#[inline]
pub fn core_to_report<E>(error: E) -> Report<E> {
    Report::new(error)
}

/// Extracts the failure payload from a [`Report`], discarding diagnostics.
#[inline]
pub fn report_to_core<E>(report: Report<E>) -> E {
    report.into_core()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, Report<E>> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<E> From<E> for Report<E> {
    #[inline]
    fn from(error: E) -> Self {
        Report::new(error)
    }
}
