//! GENESIS Platform training entry point
//!
//! Parses the training arguments and starts a run. The experiment runner
//! itself lives outside this repository; until it lands, a run consists of
//! validating the arguments and announcing the configuration.

use anyhow::Result;
use clap::Parser;

use genesis::cli::commands::train::TrainArgs;

fn main() -> Result<()> {
    let args = TrainArgs::parse();
    genesis::cli::commands::train::execute(args)
}
