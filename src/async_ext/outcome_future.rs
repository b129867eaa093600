//! The async outcome handle.
//!
//! [`AsyncOutcome`] wraps a pending computation that settles to an
//! [`Outcome`] and re-exposes the synchronous combinator algebra over it.
//! Each combinator derives a new handle chained after the settlement of the
//! current one; nothing runs until the final handle is polled.

use core::future::{Future, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::alloc_type::String;
use crate::outcome::Outcome;
use crate::report::ContextNote;
use crate::traits::IntoContextNote;

use super::lift::LiftFuture;
use super::note_future::NoteFuture;

pin_project! {
    /// A pending computation that will settle to an [`Outcome`].
    ///
    /// `AsyncOutcome` is itself a future: awaiting it yields the settled
    /// outcome. Combinators consume the handle and return a new one wrapping
    /// the chained computation, so a chain composes pending work without
    /// blocking the caller.
    ///
    /// # Cancel Safety
    ///
    /// Dropping an `AsyncOutcome` drops the wrapped computation, like any
    /// other future. No cancellation primitive beyond drop is provided.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() -> Outcome<u32, &'static str> {
    ///     AsyncOutcome::ready_ok(20)
    ///         .map(|n| n * 2)
    ///         .and_then(|n| Outcome::ok(n + 2))
    ///         .await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct AsyncOutcome<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> AsyncOutcome<Fut> {
    /// Wraps a future that settles to an [`Outcome`].
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }

    /// Unwraps the handle, returning the chained computation.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<T, E> AsyncOutcome<Ready<Outcome<T, E>>> {
    /// An already-settled success.
    #[inline]
    pub fn ready_ok(value: T) -> Self {
        Self::new(core::future::ready(Outcome::ok(value)))
    }

    /// An already-settled failure.
    #[inline]
    pub fn ready_err(error: E) -> Self {
        Self::new(core::future::ready(Outcome::err(error)))
    }
}

impl<Fut, T, E> AsyncOutcome<LiftFuture<Fut, fn(E) -> E>>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Wraps a pending `Result`: settlement success becomes `Ok`, the failure
    /// reason becomes `Err` with a fresh report.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() -> Outcome<i32, core::num::ParseIntError> {
    ///     AsyncOutcome::from_future(async { "42".parse() }).await
    /// }
    /// ```
    #[inline]
    pub fn from_future(future: Fut) -> Self {
        Self::new(LiftFuture::new(future, core::convert::identity::<E> as fn(E) -> E))
    }
}

impl<Fut, M, T, E0, E> AsyncOutcome<LiftFuture<Fut, M>>
where
    Fut: Future<Output = Result<T, E0>>,
    M: FnOnce(E0) -> E,
{
    /// Wraps a pending `Result`, mapping the failure reason on the way in.
    #[inline]
    pub fn from_future_map(future: Fut, mapper: M) -> Self {
        Self::new(LiftFuture::new(future, mapper))
    }
}

impl<Fut, T, E> AsyncOutcome<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    /// Applies `f` to the success value once settled.
    #[inline]
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> U,
    {
        AsyncOutcome::new(async move { self.future.await.map(f) })
    }

    /// Rewrites the failure payload once settled, keeping notes and trace.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        O: FnOnce(E) -> F,
    {
        AsyncOutcome::new(async move { self.future.await.map_err(op) })
    }

    /// Continues with `other` only on success; a failure is propagated
    /// without ever polling `other`.
    #[inline]
    pub fn and<U, Fut2>(
        self,
        other: AsyncOutcome<Fut2>,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, E>>>
    where
        Fut2: Future<Output = Outcome<U, E>>,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(_) => other.future.await,
                Outcome::Err(report) => Outcome::Err(report),
            }
        })
    }

    /// Chains a synchronous fallible continuation on the settled success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> AsyncOutcome<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        AsyncOutcome::new(async move { self.future.await.and_then(f) })
    }

    /// Chains a pending fallible continuation on the settled success.
    ///
    /// The continuation starts only after this handle settles successfully;
    /// on failure it is never constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn double(n: u32) -> Outcome<u32, &'static str> {
    ///     Outcome::ok(n * 2)
    /// }
    ///
    /// async fn example() -> Outcome<u32, &'static str> {
    ///     AsyncOutcome::ready_ok(21).and_then_async(double).await
    /// }
    /// ```
    #[inline]
    pub fn and_then_async<U, F, Fut2>(
        self,
        f: F,
    ) -> AsyncOutcome<impl Future<Output = Outcome<U, E>>>
    where
        F: FnOnce(T) -> Fut2,
        Fut2: Future<Output = Outcome<U, E>>,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => f(value).await,
                Outcome::Err(report) => Outcome::Err(report),
            }
        })
    }

    /// Falls back to `other` only on failure.
    #[inline]
    pub fn or<F, Fut2>(
        self,
        other: AsyncOutcome<Fut2>,
    ) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        Fut2: Future<Output = Outcome<T, F>>,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(_) => other.future.await,
            }
        })
    }

    /// Supplies a synchronous fallback computed from the failure payload.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        AsyncOutcome::new(async move { self.future.await.or_else(op) })
    }

    /// Supplies a pending fallback computed from the failure payload.
    #[inline]
    pub fn or_else_async<F, O, Fut2>(
        self,
        op: O,
    ) -> AsyncOutcome<impl Future<Output = Outcome<T, F>>>
    where
        O: FnOnce(E) -> Fut2,
        Fut2: Future<Output = Outcome<T, F>>,
    {
        AsyncOutcome::new(async move {
            match self.future.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Err(report) => op(report.into_core()).await,
            }
        })
    }

    /// Runs a tap on the settled success value.
    #[inline]
    pub fn inspect<F>(self, f: F) -> AsyncOutcome<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&T),
    {
        AsyncOutcome::new(async move { self.future.await.inspect(f) })
    }

    /// Runs a tap on the settled failure payload.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> AsyncOutcome<impl Future<Output = Outcome<T, E>>>
    where
        F: FnOnce(&E),
    {
        AsyncOutcome::new(async move { self.future.await.inspect_err(f) })
    }

    /// Attaches a note to the failure path; evaluated only if settlement
    /// fails.
    #[inline]
    pub fn context<N>(
        self,
        note: N,
    ) -> AsyncOutcome<NoteFuture<Fut, impl FnOnce() -> ContextNote>>
    where
        N: IntoContextNote,
    {
        AsyncOutcome::new(NoteFuture::new(self.future, move || note.into_context_note()))
    }

    /// Attaches a render-time note to the failure path.
    ///
    /// The producer is stored unevaluated: settlement failure attaches it as
    /// a deferred note, and only rendering the report runs it.
    #[inline]
    pub fn context_with<F>(
        self,
        producer: F,
    ) -> AsyncOutcome<NoteFuture<Fut, impl FnOnce() -> ContextNote>>
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        AsyncOutcome::new(NoteFuture::new(self.future, move || ContextNote::lazy(producer)))
    }

    /// Resolves the chain to the success value or the given default.
    #[inline]
    pub async fn unwrap_or(self, default: T) -> T {
        self.future.await.unwrap_or(default)
    }

    /// Resolves the chain and eliminates the outcome: exactly one branch
    /// runs.
    #[inline]
    pub async fn fold<U, S, F>(self, on_ok: S, on_err: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(crate::report::Report<E>) -> U,
    {
        self.future.await.fold(on_ok, on_err)
    }
}

impl<Fut, T, E> Future for AsyncOutcome<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx)
    }
}

impl<Fut, T, E> FusedFuture for AsyncOutcome<Fut>
where
    Fut: FusedFuture<Output = Outcome<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

/// Wraps an async routine body for further chaining.
///
/// The asynchronous counterpart to [`sequence`](crate::sequence): inside an
/// `async` block, [`attempt!`](crate::attempt) returns from that block, so a
/// body of straight-line fallible steps aborts at its first failure and the
/// wrapper hands the settled outcome to the rest of the chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn step(n: u32) -> Outcome<u32, &'static str> {
///     if n < 10 { Outcome::ok(n + 1) } else { Outcome::err("overflow") }
/// }
///
/// fn routine() -> AsyncOutcome<impl core::future::Future<Output = Outcome<u32, &'static str>>> {
///     sequence_async(async {
///         let a = attempt!(step(1).await);
///         let b = attempt!(step(a).await);
///         Outcome::ok(a + b)
///     })
/// }
/// ```
#[inline]
pub fn sequence_async<Fut, T, E>(body: Fut) -> AsyncOutcome<Fut>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    AsyncOutcome::new(body)
}
