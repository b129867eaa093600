//! Railway-style success/failure outcomes for Rust.
//!
//! An [`Outcome`] is either `Ok` with a success value or `Err` with a
//! [`Report`]: the failure payload plus an append-only stack of context notes
//! and an origin backtrace. Combinators transform and sequence outcomes, the
//! [`attempt!`] macro short-circuits a straight-line sequence of fallible
//! steps at the first failure, and the report renders a multi-section
//! diagnostic only when someone actually asks for it.
//!
//! # Examples
//!
//! ## Basic outcome with context
//!
//! ```
//! use outcome_rail::{Outcome, note};
//!
//! let out: Outcome<u32, &str> = Outcome::err("connection refused")
//!     .context("loading user profile")
//!     .context(note!("user_id: {}", 42));
//!
//! let text = out.into_failure().unwrap().to_string();
//! assert!(text.starts_with("user_id: 42"));
//! assert!(text.contains("connection refused"));
//! ```
//!
//! ## Short-circuit sequencing
//!
//! ```
//! use outcome_rail::{attempt, sequence, Outcome};
//!
//! fn parse(s: &str) -> Outcome<i64, String> {
//!     Outcome::from_result(s.parse().map_err(|_| format!("bad number: {s:?}")))
//! }
//!
//! let sum = sequence(|| {
//!     let a = attempt!(parse("20"));
//!     let b = attempt!(parse("22"));
//!     Outcome::ok(a + b)
//! });
//! assert_eq!(sum.unwrap(), 42);
//! ```
//!
//! ## Aggregation
//!
//! ```
//! use outcome_rail::{all, all_settled, Outcome};
//!
//! let combined = all([Outcome::<_, &str>::ok(1), Outcome::ok(2)]);
//! assert_eq!(combined.unwrap(), vec![1, 2]);
//!
//! let failures = all_settled([Outcome::<i32, _>::err("a"), Outcome::err("b")]);
//! assert_eq!(failures.unwrap_err().as_slice(), ["a", "b"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub(crate) mod alloc_type;

/// Conversions between `Result`, `Outcome`, and `Report`
pub mod convert;
/// Straight-line sequencing of fallible steps
pub mod flow;
/// Short-circuit and lazy-context macros
pub mod macros;
/// The `Outcome` sum type, its combinators, iteration, and aggregation
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure reports: context notes, origin traces, rendering, printing
pub mod report;
/// Conversion traits used at the crate's seams
pub mod traits;

/// Async outcomes over pending computations (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - sync prelude plus the async surface (requires the `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use flow::sequence;
pub use outcome::{all, all_settled, ErrorVec, Outcome};
pub use report::{ContextNote, PrintLevel, RenderedReport, Report, ReportOptions, ReportStyle};
pub use traits::{IntoContextNote, OutcomeExt};
