//! CLI infrastructure for the GENESIS platform
//!
//! This module provides the command-line interface for launching training
//! runs: argument parsing, shared configuration types, and console output.

pub mod commands;
pub mod config;
pub mod output;
