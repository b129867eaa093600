//! The [`Outcome`] sum type and its combinator algebra.
//!
//! An outcome is either `Ok` with a success value or `Err` with a
//! [`Report`](crate::Report) carrying the failure payload and its
//! diagnostics. Combinators transform, sequence, and recover outcomes without
//! ever unwrapping unsafely; aggregation combines fixed collections either
//! fail-fast ([`all`]) or collecting every failure ([`all_settled`]).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let doubled: Outcome<i32, &str> = Outcome::ok(21).map(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let recovered: Outcome<i32, &str> = Outcome::err("miss").or_else(|_| Outcome::ok(0));
//! assert_eq!(recovered.unwrap(), 0);
//! ```
pub mod aggregate;
pub mod core;
pub mod iter;

pub use self::aggregate::{all, all_settled, ErrorVec};
pub use self::core::Outcome;
pub use self::iter::{IntoIter, Iter, IterMut};
