//! AudioBoost command-line host
//!
//! Plays the part of the hosting environment: parses parameters, opens the
//! input WAV, registers the filter through its factory and streams blocks
//! to a float WAV.

pub mod cli;
pub mod run;

pub use cli::{default_config_yaml, Args};
pub use run::{process_file, RunOptions, Summary};
