//! I/O Utilities
//!
//! JSON persistence for configurations and other serializable state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Save any serializable data to JSON
pub fn save_json<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, data)?;
    Ok(())
}

/// Load data from JSON
pub fn load_json<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = File::open(path)?;
    let data = serde_json::from_reader(file)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_round_trip() {
        let config = GeneratorConfig {
            batch_size: 16,
            ft_dim: (128, 128),
            noise: true,
            noise_std: 0.25,
            ..GeneratorConfig::default()
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        save_json(&config, path).unwrap();
        let loaded: GeneratorConfig = load_json(path).unwrap();

        assert_eq!(loaded.batch_size, 16);
        assert_eq!(loaded.ft_dim, (128, 128));
        assert!(loaded.noise);
        assert!((loaded.noise_std - 0.25).abs() < f32::EPSILON);
    }
}
