//! Noise Augmentation
//!
//! Gaussian noise injection for training-time data augmentation.

use ndarray::{Array, Dimension};
use rand::thread_rng;
use rand_distr::{Distribution, Normal};

use crate::error::Result;

/// Add elementwise Gaussian noise to a tensor, freshly sampled per call
pub fn add_gaussian_noise<D: Dimension>(
    data: &mut Array<f32, D>,
    mean: f32,
    std: f32,
) -> Result<()> {
    let normal = Normal::new(mean, std)?;
    let mut rng = thread_rng();
    data.mapv_inplace(|v| v + normal.sample(&mut rng));
    Ok(())
}
