//! Combining fixed collections of pending outcomes.
//!
//! Both helpers start every member computation and wait for *all* of them to
//! settle before combining - true fan-out/fan-in, never fail-fast at the
//! scheduling level. The settled outcomes are then combined with the
//! synchronous rules: [`all`] takes the first failure in input order,
//! [`all_settled`] gathers every failure payload.

use core::future::Future;

use futures_util::future::join_all;

use crate::alloc_type::Vec;
use crate::outcome::{ErrorVec, Outcome};

/// Awaits every member concurrently, then combines fail-fast in input order.
///
/// A fast-settling failure does not cancel the remaining members; they all
/// run to settlement before the first failure (in input order, not
/// settlement order) is selected.
///
/// # Examples
///
/// ```
/// use outcome_rail::{async_ext, Outcome};
///
/// async fn fetch(n: i32) -> Outcome<i32, &'static str> {
///     Outcome::ok(n)
/// }
///
/// async fn example() {
///     let combined = async_ext::all([fetch(1), fetch(2)]).await;
///     assert_eq!(combined.unwrap(), vec![1, 2]);
/// }
/// ```
pub async fn all<I, T, E>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T, E>>,
{
    crate::outcome::all(join_all(outcomes).await)
}

/// Awaits every member concurrently, then gathers every failure payload in
/// input order.
pub async fn all_settled<I, T, E>(outcomes: I) -> Outcome<Vec<T>, ErrorVec<E>>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T, E>>,
{
    crate::outcome::all_settled(join_all(outcomes).await)
}
