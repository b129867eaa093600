//! Combining fixed collections of outcomes.
//!
//! [`all`] is fail-fast: the first failure (in collection order) becomes the
//! combined outcome and nothing after it is pulled. [`all_settled`] scans the
//! whole collection and gathers every failure payload, for callers that want
//! the complete picture rather than the first problem.

use smallvec::SmallVec;

use crate::alloc_type::Vec;
use crate::outcome::Outcome;

/// SmallVec-backed collection for accumulated failure payloads.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Combines outcomes fail-fast, preserving input order.
///
/// Returns `Ok` with every success value when all elements succeed; otherwise
/// the first failure is returned as-is (same report, moved) and later
/// elements are never pulled from the iterator.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let combined = all([Outcome::<_, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)]);
/// assert_eq!(combined.unwrap(), vec![1, 2, 3]);
///
/// let failed = all([Outcome::ok(1), Outcome::err("x"), Outcome::ok(3)]);
/// assert_eq!(failed.unwrap_err(), "x");
/// ```
#[inline]
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Combines outcomes, gathering every failure payload in input order.
///
/// Unlike [`all`], every element is inspected regardless of earlier
/// failures.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all_settled, Outcome};
///
/// let failed = all_settled([Outcome::<i32, _>::ok(1), Outcome::err("a"), Outcome::err("b")]);
/// assert_eq!(failed.unwrap_err().as_slice(), ["a", "b"]);
/// ```
pub fn all_settled<T, E, I>(outcomes: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut failures = ErrorVec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(report) => failures.push(report.into_core()),
        }
    }

    if failures.is_empty() {
        Outcome::Ok(values)
    } else {
        Outcome::err(failures)
    }
}
