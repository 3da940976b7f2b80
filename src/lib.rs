#![doc = include_str!("../README.md")]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]
// If this was in Cargo.toml, it would cover the inspector binary as well
#![warn(
    missing_docs,
    clippy::panic_in_result_fn,
    clippy::missing_assert_message,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

mod platform_check;

#[macro_use]
mod macros;

pub mod error;
pub mod options;
pub mod outcome;
pub mod stdio;
pub mod target;

mod accumulate;
mod bounded;
mod resync;

// Only the `unix` module exists; see platform_check.rs.
mod os {
    #[cfg(unix)]
    pub(crate) mod unix;
}

#[cfg(feature = "tokio")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "tokio")))]
pub mod tokio;

#[doc(inline)]
pub use {
    error::{Operation, ReadnError},
    options::{readn, ReadOptions, DEFAULT_ALLOC_INCREMENT},
    outcome::Outcome,
    stdio::StdioFile,
    target::{BufferedHandle, Target},
};

mod misc;
pub(crate) use misc::*;

#[cfg(test)]
#[path = "../tests/index.rs"]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects, clippy::indexing_slicing)]
mod tests;
