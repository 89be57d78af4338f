//! Patient-record cleaning transforms.
//!
//! This crate provides the cleaning pipeline core:
//!
//! - **normalize**: per-value date and phone canonicalization
//! - **impute**: per-column missing-value fill strategies
//! - **encode**: binary encoding of small categorical domains
//! - **dedupe**: full-row and key-based duplicate detection and removal
//! - **pipeline**: the fixed-order orchestrator and its audit report

pub mod dedupe;
pub mod encode;
pub mod impute;
pub mod normalize;
pub mod pipeline;

// Re-export common functions for external use
pub use dedupe::{count_full_duplicates, count_key_duplicates, remove_full_duplicates};
pub use encode::encode_binary;
pub use impute::median;
pub use normalize::{standardize_date, standardize_phone};
pub use pipeline::{CleaningOutcome, CleaningPipeline};
