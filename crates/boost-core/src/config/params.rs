//! User-facing boost parameters
//!
//! Raw, unvalidated values as they come from a config file or the command
//! line. [`EngineConfig::new`](crate::engine::EngineConfig::new) turns them
//! into a ready engine or a [`ConfigError`](crate::error::ConfigError).

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_BOOST, DEFAULT_CURVE, DEFAULT_LIMIT};

/// Boost parameters
///
/// Missing fields take the plugin defaults, so a YAML file only needs to
/// list what it changes:
///
/// ```yaml
/// boost: 6.0
/// curve: 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostParams {
    /// Pre-curve gain multiplier, valid in [0.5, 20.0].
    /// Default: 4.0
    pub boost: f32,

    /// Post-curve ceiling multiplier, valid in [0.1, 1.0].
    /// Default: 0.95
    pub limit: f32,

    /// Curve id, valid in 0..=4.
    /// Kept as a plain integer so out-of-range ids reach the validator.
    /// Default: 1 (hyperbolic tangent)
    pub curve: i32,

    /// Divide curve output by the curve's full-scale value before limiting.
    /// Default: true
    pub normalize: bool,
}

impl Default for BoostParams {
    fn default() -> Self {
        Self {
            boost: DEFAULT_BOOST,
            limit: DEFAULT_LIMIT,
            curve: DEFAULT_CURVE,
            normalize: true,
        }
    }
}

impl BoostParams {
    /// Create parameters with the given values
    pub fn new(boost: f32, limit: f32, curve: i32, normalize: bool) -> Self {
        Self {
            boost,
            limit,
            curve,
            normalize,
        }
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    pub fn with_limit(mut self, limit: f32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_curve(mut self, curve: i32) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}
