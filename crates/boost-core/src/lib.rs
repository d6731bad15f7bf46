//! AudioBoost Core - soft-clip dynamic compressor engine
//!
//! Rescales interleaved float samples through one of five soft-clip curves,
//! optionally normalizes by the curve's full-scale output, and applies a
//! final limiting gain.
//!
//! ```
//! use boost_core::{BoostParams, EngineConfig, StreamInfo};
//!
//! let stream = StreamInfo::float(48000, 2);
//! let engine = EngineConfig::configure(Some(&stream), &BoostParams::default()).unwrap();
//!
//! let mut buf = [0.5_f32, -0.5];
//! engine.transform(&mut buf, 1, 2);
//! assert!((buf[0] - 0.9165).abs() < 1e-3);
//! ```

pub mod config;
pub mod curve;
pub mod engine;
pub mod error;
pub mod filter;
pub mod source;
pub mod types;
pub mod validate;
pub mod wav;

pub use config::BoostParams;
pub use curve::Curve;
pub use engine::EngineConfig;
pub use error::{ConfigError, ConfigResult, SourceError, SourceResult};
pub use filter::{BoostFilter, PluginDescriptor, AUDIO_BOOST};
pub use source::{AudioSource, MemorySource};
pub use types::*;
