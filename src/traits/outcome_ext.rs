//! Extension trait lifting `std::result::Result` into [`Outcome`].
//!
//! The usual adoption path: call a `Result`-returning API, then `.into_outcome()`
//! or attach context in the same breath with `.context()` / `.context_with()`.

use crate::alloc_type::String;
use crate::outcome::Outcome;
use crate::traits::IntoContextNote;

/// Adds outcome conversions to plain results.
///
/// # Examples
///
/// ```
/// use outcome_rail::OutcomeExt;
///
/// let parsed: Result<i32, core::num::ParseIntError> = "7".parse();
/// assert_eq!(parsed.into_outcome().unwrap(), 7);
/// ```
///
/// Context attaches only when the result failed, and the lazy form defers
/// its formatting to render time:
///
/// ```
/// use outcome_rail::OutcomeExt;
///
/// let missing: Result<(), &str> = Err("not found");
/// let out = missing.context_with(|| format!("looking up user {}", 42));
/// assert!(out.is_err());
/// ```
pub trait OutcomeExt<T, E> {
    /// Wraps the result, capturing an origin trace on failure.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Wraps the result and attaches a note to the failure path.
    fn context<N: IntoContextNote>(self, note: N) -> Outcome<T, E>;

    /// Wraps the result and attaches a render-time note to the failure path.
    fn context_with<F>(self, producer: F) -> Outcome<T, E>
    where
        F: Fn() -> String + Send + Sync + 'static;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }

    #[inline]
    fn context<N: IntoContextNote>(self, note: N) -> Outcome<T, E> {
        self.into_outcome().context(note)
    }

    #[inline]
    fn context_with<F>(self, producer: F) -> Outcome<T, E>
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.into_outcome().context_with(producer)
    }
}
