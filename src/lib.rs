//! GENESIS Platform training entry point
//!
//! This crate provides the command-line front end for launching training
//! runs of the GENESIS civilization experiment. It parses the run
//! configuration from the command line and announces it; the experiment
//! runner is developed separately and is not part of this repository.

pub mod cli;

pub use cli::config::{DEFAULT_CONFIG_PATH, DEFAULT_GENERATIONS, TrainingConfig};
