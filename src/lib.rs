//! Word-frequency counting expressed as a MapReduce job.
//!
//! The domain logic lives in [`app::wc`]: a tokenizing mapper turning one
//! line of text into `(word, 1)` pairs and an aggregating reducer summing
//! the counts of one word. [`Sequential`] composes the two stages in
//! process; any distributed execution belongs to an external framework and
//! is not part of this crate.

pub mod app;
mod sequential;
pub use sequential::{count, Sequential};
