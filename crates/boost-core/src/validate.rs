//! Configuration validator
//!
//! Checks run once, before an engine exists, in this order: stream presence,
//! sample format, boost, limit, curve. The first failure is returned.

use crate::config::BoostParams;
use crate::curve::Curve;
use crate::error::{ConfigError, ConfigResult};
use crate::types::{StreamInfo, BOOST_RANGE, DEFAULT_BOOST, DEFAULT_CURVE, DEFAULT_LIMIT, LIMIT_RANGE};

/// Parameters that passed range checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidParams {
    pub boost: f32,
    pub limit: f32,
    pub curve: Curve,
    pub normalize: bool,
}

/// Require an audio stream carrying float samples
pub fn validate_stream(stream: Option<&StreamInfo>) -> ConfigResult<&StreamInfo> {
    let stream = stream.ok_or(ConfigError::MissingStream)?;
    if !stream.sample_format.is_float() {
        return Err(ConfigError::UnsupportedFormat(stream.sample_format));
    }
    Ok(stream)
}

/// Range-check boost, limit and curve id
pub fn validate_params(params: &BoostParams) -> ConfigResult<ValidParams> {
    check_range("boost", params.boost, BOOST_RANGE, DEFAULT_BOOST)?;
    check_range("limit", params.limit, LIMIT_RANGE, DEFAULT_LIMIT)?;
    let curve = Curve::from_id(params.curve).ok_or(ConfigError::OutOfRange {
        param: "curve",
        value: params.curve as f32,
        min: 0.0,
        max: (Curve::ALL.len() - 1) as f32,
        default: DEFAULT_CURVE as f32,
    })?;

    Ok(ValidParams {
        boost: params.boost,
        limit: params.limit,
        curve,
        normalize: params.normalize,
    })
}

/// Inclusive range check; NaN is rejected
fn check_range(param: &'static str, value: f32, (min, max): (f32, f32), default: f32) -> ConfigResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            param,
            value,
            min,
            max,
            default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleFormat;

    fn rejected_param(params: BoostParams) -> Option<&'static str> {
        validate_params(&params).err().and_then(|e| e.param())
    }

    #[test]
    fn test_boost_bounds() {
        let base = BoostParams::default();
        assert_eq!(rejected_param(base.with_boost(0.4)), Some("boost"));
        assert_eq!(rejected_param(base.with_boost(20.1)), Some("boost"));
        assert!(validate_params(&base.with_boost(0.5)).is_ok());
        assert!(validate_params(&base.with_boost(20.0)).is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        let base = BoostParams::default();
        assert_eq!(rejected_param(base.with_limit(0.09)), Some("limit"));
        assert_eq!(rejected_param(base.with_limit(1.01)), Some("limit"));
        assert!(validate_params(&base.with_limit(0.1)).is_ok());
        assert!(validate_params(&base.with_limit(1.0)).is_ok());
    }

    #[test]
    fn test_curve_bounds() {
        let base = BoostParams::default();
        assert_eq!(rejected_param(base.with_curve(-1)), Some("curve"));
        assert_eq!(rejected_param(base.with_curve(5)), Some("curve"));
        for id in 0..=4 {
            let valid = validate_params(&base.with_curve(id)).unwrap();
            assert_eq!(valid.curve.id(), id);
        }
    }

    #[test]
    fn test_range_messages_print_values_as_entered() {
        let limit = validate_params(&BoostParams::default().with_limit(1.5)).unwrap_err();
        assert_eq!(
            limit.to_string(),
            "limit = 1.5 is outside the range [0.1 .. 1.0] (default is 0.95)"
        );

        let boost = validate_params(&BoostParams::default().with_boost(0.4)).unwrap_err();
        assert_eq!(
            boost.to_string(),
            "boost = 0.4 is outside the range [0.5 .. 20.0] (default is 4.0)"
        );

        let curve = validate_params(&BoostParams::default().with_curve(7)).unwrap_err();
        assert_eq!(
            curve.to_string(),
            "curve = 7.0 is outside the range [0.0 .. 4.0] (default is 1.0)"
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let base = BoostParams::default();
        assert_eq!(rejected_param(base.with_boost(f32::NAN)), Some("boost"));
        assert_eq!(rejected_param(base.with_limit(f32::NAN)), Some("limit"));
    }

    #[test]
    fn test_boost_checked_before_limit() {
        let params = BoostParams::new(100.0, 5.0, 9, true);
        assert_eq!(rejected_param(params), Some("boost"));
    }

    #[test]
    fn test_stream_checks() {
        assert_eq!(validate_stream(None), Err(ConfigError::MissingStream));

        let int_stream = StreamInfo::new(44100, 2, SampleFormat::Int16);
        assert_eq!(
            validate_stream(Some(&int_stream)),
            Err(ConfigError::UnsupportedFormat(SampleFormat::Int16))
        );

        let float_stream = StreamInfo::float(44100, 2);
        assert_eq!(validate_stream(Some(&float_stream)), Ok(&float_stream));
    }
}
