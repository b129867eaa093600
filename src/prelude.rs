//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(flag: bool) -> Outcome<u32, &'static str> {
//!     let value = attempt!(if flag { Outcome::ok(40) } else { Outcome::err("flag off") });
//!     Outcome::ok(value + 2)
//! }
//!
//! assert_eq!(load(true).unwrap(), 42);
//! ```

// Macros
pub use crate::{attempt, note};

// Core types
pub use crate::outcome::{all, all_settled, ErrorVec, Outcome};
pub use crate::report::{ContextNote, PrintLevel, RenderedReport, Report, ReportOptions, ReportStyle};

// Sequencing
pub use crate::flow::sequence;

// Traits
pub use crate::traits::{IntoContextNote, OutcomeExt};
