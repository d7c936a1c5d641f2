//! Batch Generator Demo
//!
//! Builds a synthetic candidate dataset and iterates a few epochs of
//! batches, printing shapes and label distributions.
//!
//! Usage:
//!   cargo run --bin demo_datagen

use anyhow::Result;
use ndarray::Array2;
use rand::Rng;

use frb_datagen::utils::setup_logging;
use frb_datagen::{
    BatchProvider, Candidate, CandidateDataset, DataGenerator, GeneratorConfig,
};

const NUM_CANDIDATES: usize = 100;
const DIM: (usize, usize) = (32, 32);

fn synthetic_candidate(rng: &mut impl Rng, with_burst: bool) -> Candidate {
    let mut freq_time = Array2::from_shape_fn(DIM, |_| rng.gen_range(-1.0..1.0f32));
    let dm_time = Array2::from_shape_fn(DIM, |_| rng.gen_range(-1.0..1.0f32));

    if with_burst {
        // A bright vertical stripe stands in for a dedispersed burst
        let col = DIM.1 / 2;
        for row in 0..DIM.0 {
            freq_time[[row, col]] += 10.0;
        }
    }

    Candidate::new(freq_time, dm_time)
}

fn main() -> Result<()> {
    setup_logging("debug")?;

    let mut rng = rand::thread_rng();
    let mut dataset = CandidateDataset::empty();
    for i in 0..NUM_CANDIDATES {
        let with_burst = i % 2 == 0;
        dataset.push(
            synthetic_candidate(&mut rng, with_burst),
            usize::from(with_burst),
        );
    }

    println!("Synthetic dataset: {} candidates", dataset.len());
    println!("Label distribution: {:?}", dataset.label_distribution(2));
    println!();

    let config = GeneratorConfig {
        batch_size: 16,
        ft_dim: DIM,
        dt_dim: DIM,
        noise: true,
        noise_std: 0.1,
        ..GeneratorConfig::default()
    };
    let mut generator = DataGenerator::new(dataset, config)?;

    for epoch in 0..3 {
        println!("Epoch {}:", epoch);
        for position in 0..generator.num_batches() {
            let batch = generator.get_batch(position)?;
            println!(
                "  batch {:>2}: freq-time {:?}, dm-time {:?}, labels {:?}",
                position,
                batch.data_freq_time.dim(),
                batch.data_dm_time.dim(),
                batch.labels.dim(),
            );
        }
        generator.on_epoch_end();
    }

    Ok(())
}
