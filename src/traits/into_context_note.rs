//! Trait for converting values into diagnostic context notes.

use crate::alloc_type::{Cow, String};
use crate::report::note::ContextNote;

/// Converts a value into a [`ContextNote`] for attachment to a failure.
///
/// Implemented for the string types and for `ContextNote` itself, so note
/// producers and plain messages flow through the same APIs. Custom types can
/// implement it to attach domain-shaped notes.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ContextNote, IntoContextNote};
///
/// let from_str = "simple message".into_context_note();
/// assert_eq!(from_str.resolve(), "simple message");
///
/// let identity = ContextNote::lazy(|| "deferred".into()).into_context_note();
/// assert_eq!(identity.resolve(), "deferred");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a context note",
    label = "this type does not implement `IntoContextNote`",
    note = "pass a string, a `ContextNote`, or the `note!` macro's output"
)]
pub trait IntoContextNote {
    /// Converts `self` into a [`ContextNote`].
    fn into_context_note(self) -> ContextNote;
}

impl IntoContextNote for ContextNote {
    /// Identity conversion (no-op).
    #[inline]
    fn into_context_note(self) -> ContextNote {
        self
    }
}

impl IntoContextNote for String {
    #[inline]
    fn into_context_note(self) -> ContextNote {
        ContextNote::new(self)
    }
}

impl IntoContextNote for &'static str {
    #[inline]
    fn into_context_note(self) -> ContextNote {
        ContextNote::new(self)
    }
}

impl IntoContextNote for Cow<'static, str> {
    #[inline]
    fn into_context_note(self) -> ContextNote {
        ContextNote::new(self)
    }
}
