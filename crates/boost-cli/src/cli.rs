//! Command-line arguments and parameter resolution

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use boost_core::config::{default_config_path, load_config, try_load_config};
use boost_core::BoostParams;

/// Default frames pulled through the filter per block
pub const DEFAULT_BLOCK_FRAMES: usize = 4096;

/// AudioBoost - soft-clip dynamic range compressor for float WAV files
#[derive(Parser, Debug)]
#[command(name = "audioboost", version, about)]
pub struct Args {
    /// Input WAV file (32-bit float samples)
    #[arg(required_unless_present = "generate_config")]
    pub input: Option<PathBuf>,

    /// Output WAV file (written as 32-bit float)
    #[arg(required_unless_present = "generate_config")]
    pub output: Option<PathBuf>,

    /// Pre-curve gain [0.5 .. 20.0] (default: 4.0)
    #[arg(long, short = 'b', allow_hyphen_values = true)]
    pub boost: Option<f32>,

    /// Post-curve ceiling [0.1 .. 1.0] (default: 0.95)
    #[arg(long, short = 'l', allow_hyphen_values = true)]
    pub limit: Option<f32>,

    /// Curve: 0 hard clip, 1 tanh, 2 square-ratio, 3 arctan, 4 linear-ratio (default: 1)
    #[arg(long, short = 'c', allow_hyphen_values = true)]
    pub curve: Option<i32>,

    /// Normalize curve output to full scale (default: true)
    #[arg(long, short = 'n')]
    pub normalize: Option<bool>,

    /// Parameter file (default: platform config dir, audioboost/config.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames per processing block (capped at 1048576)
    #[arg(long, default_value_t = DEFAULT_BLOCK_FRAMES)]
    pub block_frames: usize,

    /// Split each block across worker threads
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print the default config.yaml to stdout and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Resolve parameters: command line over config file over defaults
    ///
    /// An explicit `--config` must load; the default path may be missing or
    /// broken, in which case defaults are used.
    pub fn resolve_params(&self) -> Result<BoostParams> {
        let base = match &self.config {
            Some(path) => try_load_config(path)?,
            None => load_config(&default_config_path()),
        };
        Ok(self.apply_overrides(base))
    }

    /// Apply command-line values on top of `params`
    pub fn apply_overrides(&self, mut params: BoostParams) -> BoostParams {
        if let Some(boost) = self.boost {
            params.boost = boost;
        }
        if let Some(limit) = self.limit {
            params.limit = limit;
        }
        if let Some(curve) = self.curve {
            params.curve = curve;
        }
        if let Some(normalize) = self.normalize {
            params.normalize = normalize;
        }
        params
    }

    /// Input and output paths, required unless --generate-config
    pub fn io_paths(&self) -> Result<(&PathBuf, &PathBuf)> {
        let input = self.input.as_ref().context("Missing input file")?;
        let output = self.output.as_ref().context("Missing output file")?;
        Ok((input, output))
    }
}

/// Default parameters as YAML, for --generate-config
pub fn default_config_yaml() -> Result<String> {
    serde_yaml::to_string(&BoostParams::default()).context("Failed to serialize default config")
}
