//! Error types for the frb-datagen library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// A processed matrix cannot be reshaped into the configured target shape
    #[error("shape mismatch for {what}: {elements} elements cannot fill {height}x{width}x{channels}")]
    ShapeMismatch {
        what: &'static str,
        elements: usize,
        height: usize,
        width: usize,
        channels: usize,
    },

    /// A class label falls outside [0, num_classes)
    #[error("label {label} out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    /// Sample and label sequences have different lengths
    #[error("dataset length mismatch: {samples} samples vs {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    /// Noise distribution parameters are invalid (e.g. negative std)
    #[error("invalid noise distribution: {0}")]
    NoiseDistribution(#[from] rand_distr::NormalError),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
