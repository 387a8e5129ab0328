//! Shared configuration types for CLI commands

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default configuration file path used when `--config` is omitted.
pub const DEFAULT_CONFIG_PATH: &str = "configs/default.yaml";

/// Default number of generations used when `--generations` is omitted.
pub const DEFAULT_GENERATIONS: u32 = 100;

/// Training run configuration
///
/// The config path points at a YAML experiment description consumed by the
/// experiment runner; this crate only echoes it and never opens the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Path to the experiment configuration file
    pub config_path: PathBuf,

    /// Number of generations to train
    pub generations: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            generations: DEFAULT_GENERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = TrainingConfig::default();
        assert_eq!(config.config_path, PathBuf::from("configs/default.yaml"));
        assert_eq!(config.generations, 100);
    }
}
