//! Transform engine
//!
//! [`EngineConfig`] is built once from validated parameters and then applied
//! to interleaved float buffers in place:
//!
//! ```text
//! v = curve(x, boost)
//! if normalize: v /= max_value
//! out = v * limit
//! ```
//!
//! Every output sample depends only on the matching input sample, so the
//! engine holds no state between calls and can be shared immutably across
//! threads. NaN and infinite samples are not special-cased and propagate
//! through the curve formulas.

mod kernel;

use rayon::prelude::*;

use crate::config::BoostParams;
use crate::curve::Curve;
use crate::error::ConfigResult;
use crate::types::{Sample, StreamInfo};
use crate::validate::{validate_params, validate_stream};

use kernel::KernelParams;

/// Frames per rayon task in [`EngineConfig::transform_parallel`]
pub const PARALLEL_BLOCK_FRAMES: usize = 4096;

/// Immutable engine configuration
///
/// Holds the validated parameters plus the normalization maximum derived
/// from boost and curve. Cheap to copy; `Send + Sync`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    boost: f32,
    limit: f32,
    curve: Curve,
    normalize: bool,
    /// Curve output at full scale, 1.0 for hard clip
    max_value: f32,
}

impl EngineConfig {
    /// Build an engine from parameters, checking ranges only
    ///
    /// For hosts that have already checked their stream. Use
    /// [`EngineConfig::configure`] to validate the stream as well.
    pub fn new(params: &BoostParams) -> ConfigResult<Self> {
        let valid = validate_params(params)?;
        let max_value = valid.curve.max_value(valid.boost);

        log::debug!(
            "EngineConfig: curve {} boost {} limit {} normalize {} max_value {}",
            valid.curve,
            valid.boost,
            valid.limit,
            valid.normalize,
            max_value
        );

        Ok(Self {
            boost: valid.boost,
            limit: valid.limit,
            curve: valid.curve,
            normalize: valid.normalize,
            max_value,
        })
    }

    /// Validate the stream and the parameters, then build an engine
    ///
    /// Fails with `MissingStream` when `stream` is `None`, with
    /// `UnsupportedFormat` for non-float samples, and with `OutOfRange` for
    /// the first parameter outside its range.
    pub fn configure(stream: Option<&StreamInfo>, params: &BoostParams) -> ConfigResult<Self> {
        validate_stream(stream)?;
        Self::new(params)
    }

    pub fn boost(&self) -> f32 {
        self.boost
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Normalization maximum derived at construction
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Transform a single sample
    #[inline]
    pub fn apply(&self, x: Sample) -> Sample {
        let mut v = self.curve.apply(x, self.boost);
        if self.normalize {
            v /= self.max_value;
        }
        v * self.limit
    }

    /// Transform `frames` interleaved frames of `channels` samples in place
    ///
    /// Only complete frames present in `buf` are processed; anything past
    /// `min(frames, buf.len() / channels)` frames is left untouched.
    /// `channels == 0` is a no-op.
    pub fn transform(&self, buf: &mut [Sample], frames: usize, channels: usize) {
        let len = active_len(buf.len(), frames, channels);
        self.process_samples(&mut buf[..len]);
    }

    /// Same as [`EngineConfig::transform`], split across the rayon pool
    ///
    /// Output is identical to the serial version.
    pub fn transform_parallel(&self, buf: &mut [Sample], frames: usize, channels: usize) {
        let len = active_len(buf.len(), frames, channels);
        let block = PARALLEL_BLOCK_FRAMES * channels.max(1);

        if len <= block {
            self.process_samples(&mut buf[..len]);
            return;
        }

        buf[..len]
            .par_chunks_mut(block)
            .for_each(|chunk| self.process_samples(chunk));
    }

    /// Transform every sample of a flat slice
    #[inline]
    pub fn process_samples(&self, samples: &mut [Sample]) {
        kernel::process(self.curve, self.normalize, samples, self.kernel_params());
    }

    fn kernel_params(&self) -> KernelParams {
        KernelParams {
            boost: self.boost,
            limit: self.limit,
            max_value: self.max_value,
        }
    }
}

/// Samples covered by `frames` complete frames that fit in `buf_len`
#[inline]
fn active_len(buf_len: usize, frames: usize, channels: usize) -> usize {
    if channels == 0 {
        return 0;
    }
    frames.min(buf_len / channels) * channels
}
