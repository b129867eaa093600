//! Failure reports: the diagnostic side of an [`Outcome`](crate::Outcome).
//!
//! A [`Report`] wraps the failure payload together with an append-only stack
//! of [`ContextNote`]s and, on `std`, the backtrace captured where the report
//! was constructed. Rendering is entirely pull-based: nothing is formatted,
//! and no lazy note is evaluated, until a report is displayed, formatted, or
//! printed.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Report, ReportStyle};
//!
//! let report = Report::new("disk full")
//!     .with_note("writing snapshot")
//!     .with_note("persisting session");
//!
//! let text = report.format(ReportStyle::Standard);
//! assert!(text.starts_with("persisting session"));
//! assert!(text.contains("Caused by:"));
//! assert!(text.contains("disk full"));
//! ```

use core::fmt;

use smallvec::SmallVec;

use crate::alloc_type::String;
use crate::traits::IntoContextNote;

pub mod format;
pub mod normalize;
pub mod note;
pub mod rendered;

pub use format::{PrintLevel, ReportOptions, ReportStyle};
pub use note::ContextNote;
pub use rendered::RenderedReport;

/// SmallVec-backed note stack; inline storage covers the common short chains.
pub type NoteVec = SmallVec<[ContextNote; 2]>;

/// The failure payload of an [`Outcome`](crate::Outcome), plus diagnostics.
///
/// Notes are stored oldest-first and rendered most-recent-first, so the
/// closest description of what went wrong leads the report. The origin
/// backtrace is captured exactly once, when the report is constructed, and
/// honored only if backtraces are enabled for the process.
#[must_use]
pub struct Report<E> {
    pub(crate) core_error: E,
    pub(crate) notes: NoteVec,
    #[cfg(feature = "std")]
    pub(crate) trace: Option<std::backtrace::Backtrace>,
}

impl<E> Report<E> {
    /// Wraps a failure payload, capturing the origin backtrace.
    #[inline]
    pub fn new(error: E) -> Self {
        Self {
            core_error: error,
            notes: NoteVec::new(),
            #[cfg(feature = "std")]
            trace: Some(std::backtrace::Backtrace::capture()),
        }
    }

    /// Appends a single context note.
    #[inline]
    pub fn with_note<N>(mut self, note: N) -> Self
    where
        N: IntoContextNote,
    {
        self.notes.push(note.into_context_note());
        self
    }

    /// Extends the note stack from an iterator, preserving order.
    #[inline]
    pub fn with_notes<I>(mut self, notes: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoContextNote,
    {
        self.notes
            .extend(notes.into_iter().map(IntoContextNote::into_context_note));
        self
    }

    /// Returns a reference to the failure payload.
    #[inline]
    pub fn core_error(&self) -> &E {
        &self.core_error
    }

    /// Consumes the report, returning the failure payload and dropping the
    /// diagnostics.
    #[inline]
    pub fn into_core(self) -> E {
        self.core_error
    }

    /// Returns the attached notes, most recent first.
    #[inline]
    pub fn notes(&self) -> core::iter::Rev<core::slice::Iter<'_, ContextNote>> {
        self.notes.iter().rev()
    }

    /// Number of attached notes.
    #[inline]
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Rewrites the failure payload while keeping notes and trace.
    #[inline]
    pub fn map_core<F, T>(self, f: F) -> Report<T>
    where
        F: FnOnce(E) -> T,
    {
        Report {
            core_error: f(self.core_error),
            notes: self.notes,
            #[cfg(feature = "std")]
            trace: self.trace,
        }
    }

    /// Returns the backtrace captured when this report was constructed.
    #[cfg(feature = "std")]
    #[inline]
    pub fn trace(&self) -> Option<&std::backtrace::Backtrace> {
        self.trace.as_ref()
    }
}

impl<E: fmt::Display> Report<E> {
    /// Renders the report into its structured form.
    #[must_use]
    pub fn rendered<O>(&self, options: O) -> RenderedReport
    where
        O: Into<ReportOptions>,
    {
        format::render(self, &options.into())
    }

    /// Renders the report to text under the given preset or options.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Report, ReportStyle};
    ///
    /// let report = Report::new("boom");
    /// assert_eq!(report.format(ReportStyle::Compact), "boom");
    /// ```
    #[must_use]
    pub fn format<O>(&self, options: O) -> String
    where
        O: Into<ReportOptions>,
    {
        self.rendered(options).to_text()
    }

    /// Renders the report and emits it on the severity channel selected by
    /// the options. The reporter's only side effect.
    #[cfg(feature = "std")]
    pub fn print<O>(&self, options: O)
    where
        O: Into<ReportOptions>,
    {
        let options = options.into();
        format::emit(options.level, &self.format(options));
    }
}

impl<E: fmt::Display> fmt::Display for Report<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(ReportStyle::Standard))
    }
}

impl<E: fmt::Debug> fmt::Debug for Report<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Report");
        dbg.field("core_error", &self.core_error)
            .field("notes", &self.notes);
        #[cfg(feature = "std")]
        dbg.field("trace", &self.trace.is_some());
        dbg.finish()
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Display + fmt::Debug> std::error::Error for Report<E> {}
