//! Adapter future lifting a pending `Result` into a pending [`Outcome`].

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::outcome::Outcome;

use super::outcome_future::AsyncOutcome;

pin_project! {
    /// Future that settles a `Result` future into an [`Outcome`], mapping
    /// the failure reason through `M` on the way.
    ///
    /// Created by [`AsyncOutcome::from_future`],
    /// [`AsyncOutcome::from_future_map`], and [`wrap_async`].
    ///
    /// # Cancel Safety
    ///
    /// `LiftFuture` is cancel-safe if the inner future is cancel-safe. The
    /// mapper runs only when the inner future settles with a failure.
    #[must_use = "futures do nothing unless polled"]
    pub struct LiftFuture<Fut, M> {
        #[pin]
        inner: Fut,
        mapper: Option<M>,
    }
}

impl<Fut, M> LiftFuture<Fut, M> {
    /// Wraps a `Result` future with a failure mapper.
    #[inline]
    pub fn new(inner: Fut, mapper: M) -> Self {
        Self { inner, mapper: Some(mapper) }
    }
}

impl<Fut, M, T, E0, E> Future for LiftFuture<Fut, M>
where
    Fut: Future<Output = Result<T, E0>>,
    M: FnOnce(E0) -> E,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.inner.poll(cx).map(|result| match result {
            Ok(value) => Outcome::Ok(value),
            Err(reason) => {
                let mapper = this
                    .mapper
                    .take()
                    .expect("LiftFuture polled after completion; this is a bug");
                Outcome::err(mapper(reason))
            }
        })
    }
}

impl<Fut, M, T, E0, E> FusedFuture for LiftFuture<Fut, M>
where
    Fut: FusedFuture<Output = Result<T, E0>>,
    M: FnOnce(E0) -> E,
{
    fn is_terminated(&self) -> bool {
        // Also check the mapper since it is taken on failed settlement
        self.mapper.is_none() || self.inner.is_terminated()
    }
}

/// Lifts a unary fallible async function into a reusable outcome-returning
/// wrapper.
///
/// The returned closure can be called any number of times; each call runs
/// `f` and settles its `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::async_ext::wrap_async;
///
/// async fn parse(input: &str) -> Result<i32, core::num::ParseIntError> {
///     input.parse()
/// }
///
/// async fn example() {
///     let safe_parse = wrap_async(parse);
///     assert_eq!(safe_parse("42").await.unwrap(), 42);
///     assert!(safe_parse("nope").await.is_err());
/// }
/// ```
#[inline]
pub fn wrap_async<A, F, Fut, T, E>(f: F) -> impl Fn(A) -> AsyncOutcome<LiftFuture<Fut, fn(E) -> E>>
where
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    move |arg| AsyncOutcome::from_future(f(arg))
}
