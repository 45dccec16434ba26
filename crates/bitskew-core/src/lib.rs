//! # bitskew-core
//!
//! Core library for the bitskew variation search.
//!
//! This crate provides:
//! - Bit imbalance scoring over byte buffers
//! - Reversible XOR window transforms
//! - Exhaustive (offset, key) search with write-through persistence
//! - Self-describing artifact names and their reversal

pub mod artifact;
pub mod cancel;
pub mod error;
pub mod score;
pub mod search;
pub mod storage;
pub mod transform;

pub use artifact::{ArtifactName, RecoveredVariant, revert_artifact};
pub use cancel::StopSignal;
pub use error::{Error, Result};
pub use score::{BitCounts, count_bits};
pub use search::{Improvement, SearchPlan, SearchSummary, VariantSink, VariationSearch};
pub use storage::{
    DerivedNameProvider, NameProvider, VariantStore, input_stem, read_input, write_recovered,
};
pub use transform::{read_window, xor_window, xor_window_in_place};
