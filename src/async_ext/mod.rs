//! Async outcomes over pending computations.
//!
//! This module mirrors the synchronous combinator algebra over futures that
//! settle to an [`Outcome`](crate::Outcome), with the same lazy philosophy:
//! context producers run only on failed settlement, and nothing runs until
//! the final handle is polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.4", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
//!     load_from_db(id)
//!         .into_outcome()
//!         .context("fetching user from database")
//!         .await
//! }
//! ```

mod aggregate;
mod future_ext;
mod lift;
mod note_future;
mod outcome_future;

pub use aggregate::{all, all_settled};
pub use future_ext::{FutureOutcomeExt, IntoAsyncOutcome};
pub use lift::{wrap_async, LiftFuture};
pub use note_future::NoteFuture;
pub use outcome_future::{sequence_async, AsyncOutcome};
