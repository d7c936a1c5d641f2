//! Sample transformation pipeline: normalization and noise augmentation

pub mod noise;
pub mod normalize;

pub use noise::add_gaussian_noise;
pub use normalize::{detrend, median, nan_to_num, process_dm_time, process_freq_time, sweep_nan};
