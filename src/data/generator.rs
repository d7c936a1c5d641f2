//! Batch Data Generator
//!
//! Turns a labeled candidate dataset into shuffled, normalized mini-batches
//! for a two-headed classifier. Owns the epoch permutation, slices it into
//! batch index ranges and assembles the output tensors.

use std::collections::HashMap;

use ndarray::{Array2, Array4, ArrayView4, Axis};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::data::sample::CandidateDataset;
use crate::encoding::one_hot;
use crate::error::Result;
use crate::transform::noise::add_gaussian_noise;
use crate::transform::normalize::{process_dm_time, process_freq_time, sweep_nan};

/// Tensor name the frequency-time input binds to in a two-headed model
pub const FREQ_TIME_INPUT: &str = "data_freq_time";

/// Tensor name the DM-time input binds to in a two-headed model
pub const DM_TIME_INPUT: &str = "data_dm_time";

/// One assembled mini-batch: two stacked image tensors plus one-hot labels
#[derive(Debug, Clone)]
pub struct Batch {
    /// Frequency-time tensor [batch, height, width, channels]
    pub data_freq_time: Array4<f32>,

    /// DM-time tensor [batch, height, width, channels]
    pub data_dm_time: Array4<f32>,

    /// One-hot labels [batch, num_classes]
    pub labels: Array2<f32>,
}

impl Batch {
    /// Number of samples in this batch
    pub fn len(&self) -> usize {
        self.data_freq_time.shape()[0]
    }

    /// Check if the batch holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The input tensors keyed by head name, for models binding inputs by name
    pub fn named_inputs(&self) -> HashMap<&'static str, ArrayView4<'_, f32>> {
        let mut inputs = HashMap::new();
        inputs.insert(FREQ_TIME_INPUT, self.data_freq_time.view());
        inputs.insert(DM_TIME_INPUT, self.data_dm_time.view());
        inputs
    }
}

/// The batch-iteration protocol a training loop drives:
/// batch count, batch retrieval, epoch-boundary reshuffle.
pub trait BatchProvider {
    /// Number of batches per epoch
    fn num_batches(&self) -> usize;

    /// Assemble the batch at the given position
    fn get_batch(&self, position: usize) -> Result<Batch>;

    /// Regenerate (and optionally shuffle) the iteration order
    fn on_epoch_end(&mut self);
}

/// Batch generator over a candidate dataset.
///
/// Iteration order lives in an index permutation that is rebuilt at every
/// epoch boundary; batch boundaries are plain arithmetic slices of it, so
/// repeated `get_batch` calls between epoch ends are reproducible (noise
/// injection aside).
pub struct DataGenerator {
    dataset: CandidateDataset,
    config: GeneratorConfig,
    indexes: Vec<usize>,
}

impl DataGenerator {
    /// Create a generator; the initial permutation is built immediately
    pub fn new(dataset: CandidateDataset, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let mut generator = Self {
            dataset,
            config,
            indexes: Vec::new(),
        };
        generator.reshuffle();
        Ok(generator)
    }

    /// Number of samples in the underlying dataset
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Check if the underlying dataset is empty
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// The generator's configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The underlying dataset
    pub fn dataset(&self) -> &CandidateDataset {
        &self.dataset
    }

    /// Resolve a batch position into its slice of sample indices.
    ///
    /// Positions `0..num_batches()` yield full batches except possibly the
    /// last, which may be short. An out-of-range position yields the (empty)
    /// permutation tail rather than an error; callers should respect
    /// `num_batches()` for well-defined output.
    pub fn resolve(&self, position: usize) -> &[usize] {
        let start = position
            .saturating_mul(self.config.batch_size)
            .min(self.indexes.len());
        let end = (start + self.config.batch_size).min(self.indexes.len());
        &self.indexes[start..end]
    }

    fn reshuffle(&mut self) {
        self.indexes = (0..self.dataset.len()).collect();
        if self.config.shuffle {
            self.indexes.shuffle(&mut thread_rng());
        }
        debug!(
            samples = self.indexes.len(),
            shuffled = self.config.shuffle,
            "epoch index order regenerated"
        );
    }
}

impl BatchProvider for DataGenerator {
    fn num_batches(&self) -> usize {
        self.dataset.len().div_ceil(self.config.batch_size)
    }

    fn get_batch(&self, position: usize) -> Result<Batch> {
        let indexes = self.resolve(position);
        let (ft_h, ft_w) = self.config.ft_dim;
        let (dt_h, dt_w) = self.config.dt_dim;
        let channels = self.config.n_channels;

        let mut ft_batch = Array4::<f32>::zeros((indexes.len(), ft_h, ft_w, channels));
        let mut dt_batch = Array4::<f32>::zeros((indexes.len(), dt_h, dt_w, channels));
        let mut labels = Vec::with_capacity(indexes.len());

        for (i, &idx) in indexes.iter().enumerate() {
            let candidate = &self.dataset.samples[idx];
            let ft = process_freq_time(candidate.freq_time.view(), self.config.ft_dim, channels)?;
            let dt = process_dm_time(candidate.dm_time.view(), self.config.dt_dim, channels)?;
            ft_batch.index_axis_mut(Axis(0), i).assign(&ft);
            dt_batch.index_axis_mut(Axis(0), i).assign(&dt);
            // Labels align with original sample positions, not shuffled order
            labels.push(self.dataset.labels[idx]);
        }

        // Batch-level safety net for zero-std samples
        sweep_nan(&mut ft_batch);
        sweep_nan(&mut dt_batch);

        if self.config.noise {
            add_gaussian_noise(&mut ft_batch, self.config.noise_mean, self.config.noise_std)?;
        }

        let labels = one_hot(&labels, self.config.n_classes)?;
        trace!(position, size = indexes.len(), "batch assembled");

        Ok(Batch {
            data_freq_time: ft_batch,
            data_dm_time: dt_batch,
            labels,
        })
    }

    fn on_epoch_end(&mut self) {
        self.reshuffle();
    }
}
