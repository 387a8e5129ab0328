//! Train command - launch a GENESIS training run

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::config::{DEFAULT_CONFIG_PATH, DEFAULT_GENERATIONS, TrainingConfig};
use crate::cli::output::print_banner;

/// Arguments for a training run
#[derive(Parser, Debug, Clone)]
#[command(name = "genesis")]
#[command(version, about = "GENESIS Platform training", long_about = None)]
pub struct TrainArgs {
    /// Configuration file path
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Number of generations to train
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: u32,
}

impl From<&TrainArgs> for TrainingConfig {
    fn from(args: &TrainArgs) -> Self {
        Self {
            config_path: args.config.clone(),
            generations: args.generations,
        }
    }
}

/// Execute a training run.
///
/// The configuration file is not opened here; the path is handed to the
/// experiment runner, which owns loading and validation.
pub fn execute(args: TrainArgs) -> Result<()> {
    let config = TrainingConfig::from(&args);

    print_banner(&config);

    // TODO: dispatch to CivilizationExperiment once the runner crate is merged:
    //   let experiment = CivilizationExperiment::from_config(&config.config_path)?;
    //   experiment.train(config.generations)?;

    Ok(())
}
