//! Best-effort normalization of failure payloads into short messages.
//!
//! These helpers form the boundary to message rendering: they are pure, total,
//! and degrade gracefully on malformed input instead of panicking.

use core::fmt::Display;

use crate::alloc_type::{String, ToString};

/// Fallback message for payloads that render to nothing.
pub(crate) const EMPTY_MESSAGE: &str = "(unspecified failure)";

/// Returns the first non-empty line of a message, trimmed.
///
/// Multi-line payloads (wrapped errors, debug dumps) collapse to their most
/// specific line; an all-whitespace message degrades to a placeholder.
///
/// # Examples
///
/// ```
/// use outcome_rail::report::normalize::headline;
///
/// assert_eq!(headline("boom\nat main.rs:3"), "boom");
/// assert_eq!(headline("   "), "(unspecified failure)");
/// ```
#[inline]
pub fn headline(message: &str) -> &str {
    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(EMPTY_MESSAGE)
}

/// Renders any `Display` payload to an owned string.
#[inline]
pub fn display_of<E: Display + ?Sized>(payload: &E) -> String {
    payload.to_string()
}
