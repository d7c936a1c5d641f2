//! Candidate data handling: samples, datasets and the batch generator

pub mod generator;
pub mod sample;

pub use generator::{Batch, BatchProvider, DataGenerator, DM_TIME_INPUT, FREQ_TIME_INPUT};
pub use sample::{Candidate, CandidateDataset};
