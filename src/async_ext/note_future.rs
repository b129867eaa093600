//! Future wrapper attaching context only on failed settlement.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::outcome::Outcome;
use crate::traits::IntoContextNote;

pin_project! {
    /// A future that appends a note to the report if the wrapped outcome
    /// settles as a failure.
    ///
    /// The note producer is not run on successful settlement, so the success
    /// path stays free of context costs.
    ///
    /// # Cancel Safety
    ///
    /// `NoteFuture` is cancel-safe if the inner future is cancel-safe. The
    /// producer runs only when `poll` returns a failed outcome.
    #[must_use = "futures do nothing unless polled"]
    pub struct NoteFuture<Fut, F> {
        #[pin]
        future: Fut,
        note_fn: Option<F>,
    }
}

impl<Fut, F> NoteFuture<Fut, F> {
    /// Wraps an outcome future with a note producer.
    #[inline]
    pub fn new(future: Fut, note_fn: F) -> Self {
        Self { future, note_fn: Some(note_fn) }
    }
}

impl<Fut, F, N, T, E> Future for NoteFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T, E>>,
    F: FnOnce() -> N,
    N: IntoContextNote,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| match outcome {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(report) => {
                let note_fn = this
                    .note_fn
                    .take()
                    .expect("NoteFuture polled after completion; this is a bug");
                Outcome::Err(report.with_note(note_fn()))
            }
        })
    }
}

impl<Fut, F, N, T, E> FusedFuture for NoteFuture<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T, E>>,
    F: FnOnce() -> N,
    N: IntoContextNote,
{
    fn is_terminated(&self) -> bool {
        // Also check note_fn since it is taken on failed settlement
        self.note_fn.is_none() || self.future.is_terminated()
    }
}
