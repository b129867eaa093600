//! Short-circuit and lazy-context macros.
//!
//! - [`macro@crate::attempt`] - Unwraps an [`Outcome`](crate::Outcome) inline or
//!   returns the failure from the enclosing function, closure, or async block.
//! - [`macro@crate::note`] - Builds a [`ContextNote`](crate::ContextNote) whose
//!   formatting is deferred until the report is rendered.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{attempt, note, Outcome};
//!
//! fn fetch(id: u32) -> Outcome<&'static str, String> {
//!     if id == 1 { Outcome::ok("alice") } else { Outcome::err(format!("no user {id}")) }
//! }
//!
//! fn greeting(id: u32) -> Outcome<String, String> {
//!     let name = attempt!(fetch(id).context(note!("fetching user {id}")));
//!     Outcome::ok(format!("hello, {name}"))
//! }
//!
//! assert_eq!(greeting(1).unwrap(), "hello, alice");
//! assert!(greeting(9).is_err());
//! ```

/// Unwraps an [`Outcome`](crate::Outcome), returning early on failure.
///
/// On `Ok` the success value becomes the expression's value inline. On `Err`
/// the macro returns the failure from the enclosing scope: the same report,
/// moved, notes and trace untouched. The first failing step therefore aborts
/// the whole routine with the failure preserved exactly. A step with a
/// different failure type is aligned with
/// [`map_err`](crate::Outcome::map_err) before unwrapping.
///
/// Works anywhere `return` does: named functions, closures (see
/// [`sequence`](crate::sequence)), and async blocks.
///
/// # Examples
///
/// ```
/// use outcome_rail::{attempt, Outcome};
///
/// fn first_char(s: &str) -> Outcome<char, &'static str> {
///     match s.chars().next() {
///         Some(c) => Outcome::ok(c),
///         None => Outcome::err("empty input"),
///     }
/// }
///
/// fn doubled(s: &str) -> Outcome<String, &'static str> {
///     let c = attempt!(first_char(s));
///     Outcome::ok(format!("{c}{c}"))
/// }
///
/// assert_eq!(doubled("rail").unwrap(), "rr");
/// assert_eq!(doubled("").unwrap_err(), "empty input");
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Ok(value) => value,
            $crate::Outcome::Err(report) => return $crate::Outcome::Err(report),
        }
    };
}

/// Builds a lazily formatted [`ContextNote`](crate::ContextNote).
///
/// Accepts the same arguments as `format!`, but the formatting runs only when
/// a report is rendered, keeping the success path allocation-free. Captured
/// variables are moved into the note, so they must be `Clone`d first if still
/// needed.
///
/// # Examples
///
/// ```
/// use outcome_rail::{note, Outcome};
///
/// let user_id = 42;
/// let out: Outcome<(), &str> = Outcome::err("auth failed")
///     .context(note!("user_id: {}", user_id));
/// assert!(out.as_report().unwrap().to_string().starts_with("user_id: 42"));
/// ```
#[macro_export]
macro_rules! note {
    ($($arg:tt)*) => {
        $crate::ContextNote::lazy(move || format!($($arg)*))
    };
}
