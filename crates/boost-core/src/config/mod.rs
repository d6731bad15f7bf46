//! Configuration for AudioBoost
//!
//! - Boost parameters with the plugin defaults
//! - Generic YAML config loading/saving
//! - Default config path
//!
//! # Usage
//!
//! ```ignore
//! use boost_core::config::{default_config_path, load_config, BoostParams};
//!
//! let params: BoostParams = load_config(&default_config_path());
//! ```

mod io;
mod params;
mod paths;

pub use io::{load_config, save_config, try_load_config};
pub use params::BoostParams;
pub use paths::{default_config_dir, default_config_path, CONFIG_FILE_NAME};
