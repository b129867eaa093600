use core::fmt;

use crate::alloc_type::String;
use crate::report::{Report, ReportStyle};
use crate::traits::IntoContextNote;

/// A success value or a reported failure.
///
/// `Outcome<T, E>` is the crate's two-variant sum type: `Ok(T)` carries the
/// success payload untouched, `Err(Report<E>)` carries the failure payload
/// plus its accumulated diagnostics. Every combinator consumes `self` and
/// returns a new outcome, so a failure propagated through a chain is the
/// original value moved along, never a rebuilt copy.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::ok(n / 2)
///     } else {
///         Outcome::err(format!("{n} is odd"))
///     }
/// }
///
/// assert_eq!(halve(8).and_then(halve).unwrap(), 2);
/// assert!(halve(3).and_then(halve).is_err());
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant, payload wrapped in a [`Report`].
    Err(Report<E>),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure outcome, capturing an origin trace.
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(Report::new(error))
    }

    /// Creates a failure outcome from an existing report, keeping its
    /// diagnostics intact.
    #[inline]
    pub fn from_report(report: Report<E>) -> Self {
        Self::Err(report)
    }

    /// Lifts a plain `Result` into an outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::from_result("21".parse::<i32>());
    /// assert_eq!(out.unwrap(), 21);
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::err(error),
        }
    }

    /// Invokes a fallible thunk and lifts its result.
    ///
    /// The thunk signals failure through its `Result`; a panic inside it is a
    /// programmer fault and propagates as usual.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out = Outcome::from_fn(|| "7".parse::<u8>());
    /// assert_eq!(out.unwrap(), 7);
    /// ```
    #[inline]
    pub fn from_fn<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        Self::from_result(thunk())
    }

    /// Returns `true` for the success variant.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for the failure variant.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome succeeded and the value passes the
    /// predicate.
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome failed and the payload passes the
    /// predicate.
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(report) => f(report.into_core()),
        }
    }

    /// Applies `f` to the success value, passing failures through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out: Outcome<usize, &str> = Outcome::ok("rail").map(str::len);
    /// assert_eq!(out.unwrap(), 4);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(report) => Outcome::Err(report),
        }
    }

    /// Rewrites the failure payload, keeping the accumulated notes and the
    /// origin trace.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(report) => Outcome::Err(report.map_core(op)),
        }
    }

    /// Returns `other` if `self` succeeded, otherwise the failure.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(report) => Outcome::Err(report),
        }
    }

    /// Chains a fallible continuation on the success value.
    ///
    /// On failure the continuation is never invoked and the failure moves
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn checked(n: u32) -> Outcome<u32, &'static str> {
    ///     if n < 100 { Outcome::ok(n) } else { Outcome::err("too large") }
    /// }
    ///
    /// assert_eq!(Outcome::ok(7).and_then(checked).unwrap(), 7);
    /// assert!(Outcome::ok(700).and_then(checked).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(report) => Outcome::Err(report),
        }
    }

    /// Returns `self` if it succeeded, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Supplies a fallback computed from the failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out: Outcome<i32, &str> =
    ///     Outcome::err("miss").or_else(|_| Outcome::ok(0));
    /// assert_eq!(out.unwrap(), 0);
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(report) => op(report.into_core()),
        }
    }

    /// Runs a tap on the success value, returning `self` unchanged.
    ///
    /// The tap receives a shared borrow, so it cannot alter the value or the
    /// variant.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Runs a tap on the failure payload, returning `self` unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(report) = &self {
            f(report.core_error());
        }
        self
    }

    /// Returns the success value or the given default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure payload.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(report) => f(report.into_core()),
        }
    }

    /// Eliminates the outcome: exactly one branch runs and produces the
    /// result. The failure branch receives the full report so it can render
    /// or dissect the diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let text = Outcome::<i32, &str>::err("boom")
    ///     .fold(|v| format!("got {v}"), |report| report.format(outcome_rail::ReportStyle::Compact));
    /// assert_eq!(text, "boom");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_ok: S, on_err: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Report<E>) -> U,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(report) => on_err(report),
        }
    }

    /// Appends a diagnostic note to the failure; no-op on success.
    ///
    /// Notes are pure documentation: they never alter control flow, and the
    /// most recently attached note leads the rendered report.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let out: Outcome<(), &str> = Outcome::err("boom")
    ///     .context("step1")
    ///     .context("step2");
    /// let report = out.into_failure().unwrap();
    /// assert!(report.to_string().starts_with("step2"));
    /// ```
    #[inline]
    pub fn context<N>(self, note: N) -> Self
    where
        N: IntoContextNote,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(report) => Self::Err(report.with_note(note)),
        }
    }

    /// Appends a render-time note to the failure; no-op on success.
    ///
    /// The producer runs only when the report is rendered, never on the
    /// success path.
    #[inline]
    pub fn context_with<F>(self, producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.context(crate::report::ContextNote::lazy(producer))
    }

    /// Returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns the failure report, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<Report<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(report) => Some(report),
        }
    }

    /// Borrows the failure report, if any.
    #[must_use]
    #[inline]
    pub fn as_report(&self) -> Option<&Report<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(report) => Some(report),
        }
    }

    /// Converts into a plain `Result` carrying the report on the error side.
    #[inline]
    pub fn into_result(self) -> Result<T, Report<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(report) => Err(report),
        }
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on the failure variant. The panic message is the fully rendered
    /// report (headline, numbered causes, stack trace when captured), so
    /// diagnosing a misuse fault reads exactly like diagnosing an ordinary
    /// failure.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(report) => panic!(
                "called `Outcome::unwrap()` on a failure value\n{}",
                report.format(ReportStyle::Full)
            ),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics on the success variant.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(value) => panic!(
                "called `Outcome::unwrap_err()` on a success value: {value:?}"
            ),
            Self::Err(report) => report.into_core(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value:?})"),
            Self::Err(report) => write!(f, "{report}"),
        }
    }
}
