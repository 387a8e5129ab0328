//! Console output formatting for the CLI

use crate::cli::config::TrainingConfig;

/// Format the startup banner announcing a training run.
///
/// Returns the two lines printed to stdout when training starts. Kept pure
/// so tests can assert the echoed values without capturing stdout.
pub fn banner_lines(config: &TrainingConfig) -> [String; 2] {
    [
        format!(
            "🚀 Starting GENESIS training with config: {}",
            config.config_path.display()
        ),
        format!("Training for {} generations", config.generations),
    ]
}

/// Print the startup banner to stdout.
pub fn print_banner(config: &TrainingConfig) {
    for line in banner_lines(config) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn banner_echoes_config_path_and_generations() {
        let config = TrainingConfig {
            config_path: PathBuf::from("configs/island.yaml"),
            generations: 42,
        };

        let [first, second] = banner_lines(&config);
        assert!(first.contains("configs/island.yaml"));
        assert_eq!(second, "Training for 42 generations");
    }
}
