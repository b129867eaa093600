//! Async prelude - the sync prelude plus the async surface.
//!
//! ```
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch(flag: bool) -> Outcome<u32, &'static str> {
//!     if flag { Outcome::ok(42) } else { Outcome::err("flag off") }
//! }
//!
//! async fn example() -> Outcome<u32, &'static str> {
//!     AsyncOutcome::new(fetch(true)).map(|n| n + 1).await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{
    all as all_async, all_settled as all_settled_async, sequence_async, AsyncOutcome,
    FutureOutcomeExt, IntoAsyncOutcome, LiftFuture, NoteFuture,
};
