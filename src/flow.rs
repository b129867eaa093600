//! Straight-line sequencing of fallible steps.
//!
//! A routine body is an ordinary closure whose steps unwrap intermediate
//! outcomes with [`attempt!`](crate::attempt). The first failing step returns
//! early out of the body with the failure moved along unchanged; successful
//! values flow forward as plain locals. No exceptions, no manual branching at
//! every call site.
//!
//! ```
//! use outcome_rail::{attempt, sequence, Outcome};
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "a" => Outcome::ok(1),
//!         "b" => Outcome::ok(2),
//!         _ => Outcome::err(format!("unknown key {key:?}")),
//!     }
//! }
//!
//! let total = sequence(|| {
//!     let a = attempt!(lookup("a"));
//!     let b = attempt!(lookup("b"));
//!     Outcome::ok(a + b)
//! });
//! assert_eq!(total.unwrap(), 3);
//!
//! let failed = sequence(|| {
//!     let a = attempt!(lookup("a"));
//!     let missing = attempt!(lookup("zzz"));
//!     Outcome::ok(a + missing)
//! });
//! assert!(failed.is_err());
//! ```

use crate::outcome::Outcome;

/// Runs a routine body of fallible steps and yields its outcome.
///
/// The body must construct and return its final outcome explicitly; any
/// intermediate failure unwrapped with [`attempt!`](crate::attempt) aborts
/// the body at that point and becomes the routine's outcome. The body is
/// never resumed past its first failure.
///
/// This is a plain invocation wrapper: its value is the enclosing scope it
/// gives `attempt!` to return from, so a sequence can be written inline
/// without declaring a named function.
#[inline]
pub fn sequence<T, E, F>(body: F) -> Outcome<T, E>
where
    F: FnOnce() -> Outcome<T, E>,
{
    body()
}
