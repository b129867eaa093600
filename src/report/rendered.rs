//! The structured result of rendering a [`Report`](super::Report).

use core::fmt;

use crate::alloc_type::{String, ToString, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A report rendered into its sections, ready for text output or a
/// structured logging sink.
///
/// `message` is the most specific description of the failure, `causes` the
/// numbered chain below it (newest context first, normalized root message
/// last), and `trace` the captured backtrace when the render asked for one.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Report, ReportStyle};
///
/// let rendered = Report::new("boom").with_note("step").rendered(ReportStyle::Standard);
/// assert_eq!(rendered.message, "step");
/// assert_eq!(rendered.causes, vec!["boom".to_string()]);
/// assert!(rendered.trace.is_none());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedReport {
    /// Headline: the most recently attached note, or the normalized payload
    /// message when no notes were attached.
    pub message: String,
    /// The `Caused by:` entries, in render order.
    pub causes: Vec<String>,
    /// Backtrace text, present only for stack-including renders on `std`.
    pub trace: Option<String>,
}

impl RenderedReport {
    /// Flattens the sections into the final report text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;

        if !self.causes.is_empty() {
            f.write_str("\n\nCaused by:")?;
            for (index, cause) in self.causes.iter().enumerate() {
                write!(f, "\n    {}: {}", index + 1, cause)?;
            }
        }

        if let Some(trace) = &self.trace {
            write!(f, "\n\nStack trace:\n{}", trace.trim_end())?;
        }

        Ok(())
    }
}
