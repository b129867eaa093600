//! Extension traits for outcome-bearing futures.
//!
//! [`FutureOutcomeExt`] adds `.note()` / `.note_with()` to any future that
//! settles to an [`Outcome`], mirroring the synchronous
//! [`Outcome::context`](crate::Outcome::context) ergonomics.
//! [`IntoAsyncOutcome`] lifts any pending `Result` into an [`AsyncOutcome`].

use core::future::Future;

use crate::outcome::Outcome;
use crate::traits::IntoContextNote;

use super::lift::LiftFuture;
use super::note_future::NoteFuture;
use super::outcome_future::AsyncOutcome;

/// Attaches failure context to outcome-bearing futures.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u64) -> Outcome<u64, &'static str> {
///     Outcome::err("missing row")
/// }
///
/// async fn load_traced(id: u64) -> Outcome<u64, &'static str> {
///     load(id).note_with(move || format!("loading row {id}")).await
/// }
/// ```
pub trait FutureOutcomeExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Attaches a note to the failure path of the future's outcome.
    ///
    /// The note converts only if the settled outcome is a failure.
    fn note<N>(self, note: N) -> NoteFuture<Self, impl FnOnce() -> N>
    where
        N: IntoContextNote,
    {
        self.note_with(move || note)
    }

    /// Attaches a note produced by a closure, run only on failed settlement.
    fn note_with<F, N>(self, f: F) -> NoteFuture<Self, F>
    where
        F: FnOnce() -> N,
        N: IntoContextNote;
}

impl<Fut, T, E> FutureOutcomeExt<T, E> for Fut
where
    Fut: Future<Output = Outcome<T, E>>,
{
    #[inline]
    fn note_with<F, N>(self, f: F) -> NoteFuture<Self, F>
    where
        F: FnOnce() -> N,
        N: IntoContextNote,
    {
        NoteFuture::new(self, f)
    }
}

/// Lifts pending `Result`s into [`AsyncOutcome`] handles.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn example() -> Outcome<i32, core::num::ParseIntError> {
///     async { "21".parse::<i32>() }
///         .into_outcome()
///         .map(|n| n * 2)
///         .await
/// }
/// ```
pub trait IntoAsyncOutcome<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Wraps the pending `Result` as an [`AsyncOutcome`].
    fn into_outcome(self) -> AsyncOutcome<LiftFuture<Self, fn(E) -> E>>;
}

impl<Fut, T, E> IntoAsyncOutcome<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    fn into_outcome(self) -> AsyncOutcome<LiftFuture<Self, fn(E) -> E>> {
        AsyncOutcome::from_future(self)
    }
}
