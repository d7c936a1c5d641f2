//! Candidate Samples
//!
//! In-memory representation of FRB candidates and the labeled dataset
//! the generator draws from.

use ndarray::Array2;

use crate::error::{Error, Result};

/// A single candidate: paired frequency-time and DM-time images.
///
/// Both matrices may contain NaN/Inf from masked or missing instrument
/// channels; the generator sanitizes them during batch assembly.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Frequency-time intensity matrix [time, frequency]
    pub freq_time: Array2<f32>,

    /// DM-time intensity matrix [dm_trial, time]
    pub dm_time: Array2<f32>,
}

impl Candidate {
    /// Create a candidate from its two representations
    pub fn new(freq_time: Array2<f32>, dm_time: Array2<f32>) -> Self {
        Self { freq_time, dm_time }
    }
}

/// A labeled candidate dataset.
///
/// Labels are index-aligned with samples by original position; shuffled
/// iteration order never changes that alignment.
#[derive(Debug, Clone)]
pub struct CandidateDataset {
    /// All candidate samples
    pub samples: Vec<Candidate>,

    /// Integer class label per sample (parallel to `samples`)
    pub labels: Vec<usize>,
}

impl CandidateDataset {
    /// Create a dataset from parallel sample and label sequences
    pub fn new(samples: Vec<Candidate>, labels: Vec<usize>) -> Result<Self> {
        if samples.len() != labels.len() {
            return Err(Error::LengthMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { samples, labels })
    }

    /// Create an empty dataset
    pub fn empty() -> Self {
        Self {
            samples: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Add a labeled sample
    pub fn push(&mut self, candidate: Candidate, label: usize) {
        self.samples.push(candidate);
        self.labels.push(label);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get a sample and its label by original index
    pub fn get(&self, index: usize) -> Option<(&Candidate, usize)> {
        self.samples
            .get(index)
            .map(|sample| (sample, self.labels[index]))
    }

    /// Count samples per class
    pub fn label_distribution(&self, n_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; n_classes];
        for &label in &self.labels {
            if label < n_classes {
                counts[label] += 1;
            }
        }
        counts
    }

    /// Split into train and test sets by original order
    pub fn train_test_split(&self, train_ratio: f64) -> (CandidateDataset, CandidateDataset) {
        let split_idx = (self.samples.len() as f64 * train_ratio) as usize;

        (
            CandidateDataset {
                samples: self.samples[..split_idx].to_vec(),
                labels: self.labels[..split_idx].to_vec(),
            },
            CandidateDataset {
                samples: self.samples[split_idx..].to_vec(),
                labels: self.labels[split_idx..].to_vec(),
            },
        )
    }
}
