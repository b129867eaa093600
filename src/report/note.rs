//! Context notes attached to failure reports.
//!
//! A note is either an eager string or a deferred producer that is only run
//! when a report is actually rendered. The deferred form keeps the success
//! path free of formatting costs (see the [`note!`](crate::note) macro).

use core::fmt;

use crate::alloc_type::{Box, Cow, String};

/// A single diagnostic annotation on a failure report.
///
/// Notes are attached with [`Outcome::context`](crate::Outcome::context) /
/// [`Outcome::context_with`](crate::Outcome::context_with) and rendered
/// most-recent-first. The `Lazy` variant holds a producer that is invoked
/// each time the report is rendered, never earlier.
///
/// # Examples
///
/// ```
/// use outcome_rail::ContextNote;
///
/// let eager = ContextNote::new("loading config");
/// assert_eq!(eager.resolve(), "loading config");
///
/// let lazy = ContextNote::lazy(|| format!("attempt {}", 3));
/// assert_eq!(lazy.resolve(), "attempt 3");
/// ```
pub enum ContextNote {
    /// A message materialized at attach time.
    Eager(String),
    /// A producer run only at render time.
    Lazy(Box<dyn Fn() -> String + Send + Sync>),
}

impl ContextNote {
    /// Creates an eager note from anything string-like.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::Eager(message.into())
    }

    /// Creates a deferred note from a producer closure.
    ///
    /// The closure runs once per render and never on the success path.
    #[inline]
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Lazy(Box::new(producer))
    }

    /// Resolves the note to its message, running the producer if deferred.
    #[inline]
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Self::Eager(message) => Cow::Borrowed(message.as_str()),
            Self::Lazy(producer) => Cow::Owned(producer()),
        }
    }

    /// Returns `true` for the deferred variant.
    #[inline]
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }
}

impl fmt::Display for ContextNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl fmt::Debug for ContextNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager(message) => f.debug_tuple("Eager").field(message).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}
