//! # FRB Candidate Batch Generator
//!
//! A batch-producing data pipeline for fast radio burst candidate
//! classification. Each candidate is a pair of 2D signal representations
//! (a frequency-time image and a dispersion-time image); the generator
//! feeds normalized, optionally noise-augmented mini-batches plus one-hot
//! class labels to a two-headed model, one batch at a time, reshuffling
//! sample order between epochs.
//!
//! ## Modules
//!
//! - `data`: candidate samples, datasets and the batch generator
//! - `transform`: per-sample normalization and noise augmentation
//! - `encoding`: one-hot label encoding
//! - `config`: generator configuration
//! - `error`: error types
//! - `utils`: logging and JSON persistence helpers

pub mod config;
pub mod data;
pub mod encoding;
pub mod error;
pub mod transform;
pub mod utils;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use data::{Batch, BatchProvider, Candidate, CandidateDataset, DataGenerator};
pub use data::{DM_TIME_INPUT, FREQ_TIME_INPUT};
pub use encoding::one_hot;
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
