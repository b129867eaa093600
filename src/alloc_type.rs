//! Alloc-backed types resolved against `std` or `alloc` by feature.

#[cfg(feature = "std")]
mod source {
    pub use std::borrow::Cow;
    pub use std::boxed::Box;
    pub use std::string::{String, ToString};
    pub use std::vec::Vec;
}

#[cfg(not(feature = "std"))]
mod source {
    pub use alloc::borrow::Cow;
    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub use source::{Box, Cow, String, ToString, Vec};
