//! Generator Configuration
//!
//! Configuration parameters for the batch data generator.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the candidate batch generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of samples per batch
    pub batch_size: usize,

    /// Target (height, width) of the frequency-time image
    pub ft_dim: (usize, usize),

    /// Target (height, width) of the DM-time image
    pub dt_dim: (usize, usize),

    /// Number of channels in the output tensors
    pub n_channels: usize,

    /// Number of classes to classify candidates into
    pub n_classes: usize,

    /// Whether to reshuffle sample order at each epoch end
    pub shuffle: bool,

    /// Whether to inject Gaussian noise into the frequency-time batch
    pub noise: bool,

    /// Mean of the injected Gaussian noise
    pub noise_mean: f32,

    /// Standard deviation of the injected Gaussian noise
    pub noise_std: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            ft_dim: (256, 256),
            dt_dim: (256, 256),
            n_channels: 1,
            n_classes: 2,
            shuffle: true,
            noise: false,
            noise_mean: 0.0,
            noise_std: 1.0,
        }
    }
}

impl GeneratorConfig {
    /// Create a config for deterministic evaluation (no shuffle, no noise)
    pub fn evaluation() -> Self {
        Self {
            shuffle: false,
            noise: false,
            ..Self::default()
        }
    }

    /// Create a config with noise augmentation enabled
    pub fn augmented(noise_mean: f32, noise_std: f32) -> Self {
        Self {
            noise: true,
            noise_mean,
            noise_std,
            ..Self::default()
        }
    }

    /// Number of elements a single frequency-time output tensor holds
    pub fn ft_elements(&self) -> usize {
        self.ft_dim.0 * self.ft_dim.1 * self.n_channels
    }

    /// Number of elements a single DM-time output tensor holds
    pub fn dt_elements(&self) -> usize {
        self.dt_dim.0 * self.dt_dim.1 * self.n_channels
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be positive".to_string()));
        }
        if self.n_channels == 0 {
            return Err(Error::Config("n_channels must be positive".to_string()));
        }
        if self.n_classes == 0 {
            return Err(Error::Config("n_classes must be positive".to_string()));
        }
        if self.ft_dim.0 == 0 || self.ft_dim.1 == 0 {
            return Err(Error::Config("ft_dim must be non-zero".to_string()));
        }
        if self.dt_dim.0 == 0 || self.dt_dim.1 == 0 {
            return Err(Error::Config("dt_dim must be non-zero".to_string()));
        }
        if self.noise && self.noise_std < 0.0 {
            return Err(Error::Config("noise_std must be non-negative".to_string()));
        }
        Ok(())
    }
}
