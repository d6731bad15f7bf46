//! Error types for engine configuration and audio sources
//!
//! Configuration errors are raised once, when an engine is built from user
//! parameters. Nothing can fail while samples are being transformed.

use thiserror::Error;

use crate::types::SampleFormat;

/// Errors that can occur while validating engine parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The stream carries no audio at all
    #[error("Input clip does not have audio")]
    MissingStream,

    /// The stream's samples are not single-precision float
    #[error("Unsupported sample format: {0} (input audio sample format must be float)")]
    UnsupportedFormat(SampleFormat),

    /// A parameter is outside its valid range
    #[error("{param} = {value:?} is outside the range [{min:?} .. {max:?}] (default is {default:?})")]
    OutOfRange {
        param: &'static str,
        value: f32,
        min: f32,
        max: f32,
        default: f32,
    },
}

impl ConfigError {
    /// Name of the offending parameter, for range errors
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ConfigError::OutOfRange { param, .. } => Some(*param),
            _ => None,
        }
    }
}

/// Result type for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by audio sources while pulling frames
#[derive(Debug, Error)]
pub enum SourceError {
    /// WAV decoding or encoding failed
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// IO error while reading or writing audio
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller buffer too small for one frame
    #[error("Buffer of {len} samples cannot hold a frame of {channels} channels")]
    BufferTooSmall { len: usize, channels: usize },

    /// Configuration failed while building a filter
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::OutOfRange {
            param: "boost",
            value: 0.4,
            min: 0.5,
            max: 20.0,
            default: 4.0,
        };
        assert_eq!(
            err.to_string(),
            "boost = 0.4 is outside the range [0.5 .. 20.0] (default is 4.0)"
        );
        assert_eq!(err.param(), Some("boost"));

        let err = ConfigError::UnsupportedFormat(SampleFormat::Int16);
        assert!(err.to_string().contains("int16"));
        assert_eq!(err.param(), None);
    }

    #[test]
    fn test_config_error_converts_into_source_error() {
        let err: SourceError = ConfigError::MissingStream.into();
        assert!(matches!(err, SourceError::Config(ConfigError::MissingStream)));
        assert_eq!(err.to_string(), "Input clip does not have audio");
    }
}
