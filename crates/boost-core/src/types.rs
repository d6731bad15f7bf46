//! Common types for AudioBoost
//!
//! This module contains the stream description types shared between the
//! engine, the validator and the host-side sources.

use std::fmt;

/// Audio sample type (32-bit float, the only format the engine processes)
pub type Sample = f32;

/// Valid boost range (inclusive)
pub const BOOST_RANGE: (f32, f32) = (0.5, 20.0);

/// Valid limit range (inclusive)
pub const LIMIT_RANGE: (f32, f32) = (0.1, 1.0);

/// Default pre-curve gain
pub const DEFAULT_BOOST: f32 = 4.0;

/// Default post-curve ceiling
pub const DEFAULT_LIMIT: f32 = 0.95;

/// Default curve id (hyperbolic tangent)
pub const DEFAULT_CURVE: i32 = 1;

/// Sample representation of an audio stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    Int8,
    Int16,
    Int24,
    Int32,
    Float32,
}

impl SampleFormat {
    /// Whether this is the single-precision float format the engine accepts
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::Float32)
    }

    /// Get the name of this format
    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::Int8 => "int8",
            SampleFormat::Int16 => "int16",
            SampleFormat::Int24 => "int24",
            SampleFormat::Int32 => "int32",
            SampleFormat::Float32 => "float32",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Description of the audio track of a stream
///
/// A stream without audio is represented by the absence of a `StreamInfo`
/// (`Option<StreamInfo>::None`), not by a zero channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub sample_format: SampleFormat,
}

impl StreamInfo {
    /// Create a new stream description
    pub fn new(sample_rate: u32, channels: u16, sample_format: SampleFormat) -> Self {
        Self {
            sample_rate,
            channels,
            sample_format,
        }
    }

    /// Shorthand for a float stream
    pub fn float(sample_rate: u32, channels: u16) -> Self {
        Self::new(sample_rate, channels, SampleFormat::Float32)
    }

    /// Number of interleaved samples in `frames` frames, `None` on overflow
    #[inline]
    pub fn samples_for(&self, frames: usize) -> Option<usize> {
        frames.checked_mul(self.channels as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_float32_is_float() {
        assert!(SampleFormat::Float32.is_float());
        for fmt in [
            SampleFormat::Int8,
            SampleFormat::Int16,
            SampleFormat::Int24,
            SampleFormat::Int32,
        ] {
            assert!(!fmt.is_float(), "{} reported as float", fmt);
        }
    }

    #[test]
    fn test_samples_for() {
        let info = StreamInfo::float(48000, 6);
        assert_eq!(info.samples_for(10), Some(60));
        assert_eq!(info.samples_for(0), Some(0));
        assert_eq!(info.samples_for(usize::MAX), None);
    }
}
