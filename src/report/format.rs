//! Report rendering presets and severity channels.
//!
//! Three presets cover the usual needs: `Compact` (one line, most specific
//! message only), `Standard` (message plus a numbered `Caused by:` chain),
//! and `Full` (`Standard` plus the captured stack trace). A custom
//! [`ReportOptions`] selects the sections and the print channel directly.

use core::fmt::Display;

use crate::alloc_type::{String, ToString, Vec};

use super::normalize;
use super::rendered::RenderedReport;
use super::Report;

/// Named rendering presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStyle {
    /// One line: the most specific message only.
    Compact,
    /// Message plus the numbered `Caused by:` chain. The default.
    Standard,
    /// `Standard` plus a `Stack trace:` section.
    Full,
}

/// Severity channel used by [`Report::print`](super::Report::print).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintLevel {
    Info,
    Warn,
    Error,
}

/// Fully custom render/print selection.
///
/// # Examples
///
/// ```
/// use outcome_rail::{PrintLevel, Report, ReportOptions};
///
/// let report = Report::new("boom").with_note("step");
/// let options = ReportOptions::standard().level(PrintLevel::Warn).stack(false);
/// assert!(report.format(options).contains("Caused by:"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Channel used when printing.
    pub level: PrintLevel,
    /// Include the `Caused by:` section.
    pub context: bool,
    /// Include the `Stack trace:` section.
    pub stack: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReportOptions {
    /// Options matching [`ReportStyle::Compact`].
    #[inline]
    pub fn compact() -> Self {
        Self { level: PrintLevel::Error, context: false, stack: false }
    }

    /// Options matching [`ReportStyle::Standard`].
    #[inline]
    pub fn standard() -> Self {
        Self { level: PrintLevel::Error, context: true, stack: false }
    }

    /// Options matching [`ReportStyle::Full`].
    #[inline]
    pub fn full() -> Self {
        Self { level: PrintLevel::Error, context: true, stack: true }
    }

    /// Sets the print channel.
    #[inline]
    pub fn level(mut self, level: PrintLevel) -> Self {
        self.level = level;
        self
    }

    /// Toggles the `Caused by:` section.
    #[inline]
    pub fn context(mut self, context: bool) -> Self {
        self.context = context;
        self
    }

    /// Toggles the `Stack trace:` section.
    #[inline]
    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }
}

impl From<ReportStyle> for ReportOptions {
    #[inline]
    fn from(style: ReportStyle) -> Self {
        match style {
            ReportStyle::Compact => Self::compact(),
            ReportStyle::Standard => Self::standard(),
            ReportStyle::Full => Self::full(),
        }
    }
}

/// Walks the note stack newest-first and assembles the structured render.
pub(crate) fn render<E: Display>(report: &Report<E>, options: &ReportOptions) -> RenderedReport {
    let root = normalize::display_of(&report.core_error);
    let mut notes = report.notes();

    let message = match notes.next() {
        Some(note) => note.resolve().into_owned(),
        None => normalize::headline(&root).to_string(),
    };

    let mut causes: Vec<String> = Vec::new();
    if options.context && report.note_count() > 0 {
        causes.extend(notes.map(|note| note.resolve().into_owned()));
        causes.push(normalize::headline(&root).to_string());
    }

    let trace =
        trace_text(report, options).map(|text| strip_restated_headline(text, &message));

    RenderedReport { message, causes, trace }
}

/// Drops a leading trace line that merely restates the headline.
fn strip_restated_headline(text: String, headline: &str) -> String {
    match text.split_once('\n') {
        Some((first, rest)) if first.contains(headline) => rest.to_string(),
        _ => text,
    }
}

#[cfg(feature = "std")]
fn trace_text<E>(report: &Report<E>, options: &ReportOptions) -> Option<String> {
    use std::backtrace::BacktraceStatus;

    if !options.stack {
        return None;
    }
    let trace = report
        .trace()
        .filter(|trace| matches!(trace.status(), BacktraceStatus::Captured))?;
    Some(trace.to_string())
}

#[cfg(not(feature = "std"))]
fn trace_text<E>(_report: &Report<E>, _options: &ReportOptions) -> Option<String> {
    None
}

/// Writes an already-rendered report to its severity channel.
#[cfg(feature = "std")]
pub(crate) fn emit(level: PrintLevel, text: &str) {
    #[cfg(feature = "tracing")]
    match level {
        PrintLevel::Info => tracing::info!("{}", text),
        PrintLevel::Warn => tracing::warn!("{}", text),
        PrintLevel::Error => tracing::error!("{}", text),
    }

    #[cfg(not(feature = "tracing"))]
    match level {
        PrintLevel::Info => std::println!("{text}"),
        PrintLevel::Warn => std::eprintln!("[warn] {text}"),
        PrintLevel::Error => std::eprintln!("[error] {text}"),
    }
}
