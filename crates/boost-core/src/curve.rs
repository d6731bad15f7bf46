//! Curve registry - the five soft-clip transfer functions
//!
//! Each curve maps a boosted sample amplitude to a bounded output. The set is
//! closed, so it is modelled as an enum for runtime selection plus one
//! zero-sized type per curve implementing [`Transfer`], which lets the engine
//! monomorphize its inner loop per curve.
//!
//! | id | curve                | output range |
//! |----|----------------------|--------------|
//! | 0  | hard clip            | [-1, 1]      |
//! | 1  | hyperbolic tangent   | (-1, 1)      |
//! | 2  | square-ratio sigmoid | (0, 1]       |
//! | 3  | scaled arctangent    | (-1, 1)      |
//! | 4  | linear-ratio sigmoid | (0, 1]       |
//!
//! Curves 2 and 4 are even functions: the sign of the input is lost and the
//! output is never negative.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use crate::types::Sample;

/// Number of curves in the registry
pub const NUM_CURVES: usize = 5;

/// A scalar transfer function paired with its saturation maximum
pub trait Transfer {
    /// Evaluate the curve for a raw sample `x` at the given boost
    fn apply(x: Sample, boost: f32) -> Sample;

    /// Curve output for a full-scale input, used for normalization
    #[inline]
    fn max_value(boost: f32) -> Sample {
        Self::apply(1.0, boost)
    }
}

/// `clip(x·b, -1, 1)`
pub struct HardClip;

/// `tanh(x·b)`
pub struct HyperbolicTangent;

/// `1 / sqrt(1 + (x·b)²)`
pub struct SquareRatioSigmoid;

/// `atan(x·b·π/2) / (π/2)`
pub struct ScaledArcTan;

/// `1 / (1 + |x·b|)`
pub struct LinearRatioSigmoid;

impl Transfer for HardClip {
    #[inline]
    fn apply(x: Sample, boost: f32) -> Sample {
        (x * boost).clamp(-1.0, 1.0)
    }

    /// Hard clip is already bounded to full scale
    #[inline]
    fn max_value(_boost: f32) -> Sample {
        1.0
    }
}

impl Transfer for HyperbolicTangent {
    #[inline]
    fn apply(x: Sample, boost: f32) -> Sample {
        (x * boost).tanh()
    }
}

impl Transfer for SquareRatioSigmoid {
    #[inline]
    fn apply(x: Sample, boost: f32) -> Sample {
        let v = x * boost;
        1.0 / (1.0 + v * v).sqrt()
    }
}

impl Transfer for ScaledArcTan {
    #[inline]
    fn apply(x: Sample, boost: f32) -> Sample {
        (x * boost * FRAC_PI_2).atan() / FRAC_PI_2
    }
}

impl Transfer for LinearRatioSigmoid {
    #[inline]
    fn apply(x: Sample, boost: f32) -> Sample {
        1.0 / (1.0 + (x * boost).abs())
    }
}

/// Curve identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Curve {
    HardClip = 0,
    HyperbolicTangent = 1,
    SquareRatioSigmoid = 2,
    ScaledArcTan = 3,
    LinearRatioSigmoid = 4,
}

impl Curve {
    /// All curves in id order
    pub const ALL: [Curve; NUM_CURVES] = [
        Curve::HardClip,
        Curve::HyperbolicTangent,
        Curve::SquareRatioSigmoid,
        Curve::ScaledArcTan,
        Curve::LinearRatioSigmoid,
    ];

    /// Convert from a user-facing id (0-4) to a curve
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Curve::HardClip),
            1 => Some(Curve::HyperbolicTangent),
            2 => Some(Curve::SquareRatioSigmoid),
            3 => Some(Curve::ScaledArcTan),
            4 => Some(Curve::LinearRatioSigmoid),
            _ => None,
        }
    }

    /// User-facing id of this curve
    pub fn id(&self) -> i32 {
        *self as i32
    }

    /// Get the name of this curve
    pub fn name(&self) -> &'static str {
        match self {
            Curve::HardClip => "hard-clip",
            Curve::HyperbolicTangent => "hyperbolic-tangent",
            Curve::SquareRatioSigmoid => "square-ratio-sigmoid",
            Curve::ScaledArcTan => "scaled-arctangent",
            Curve::LinearRatioSigmoid => "linear-ratio-sigmoid",
        }
    }

    /// Whether the curve keeps the sign of its input
    pub fn preserves_sign(&self) -> bool {
        !matches!(self, Curve::SquareRatioSigmoid | Curve::LinearRatioSigmoid)
    }

    /// Evaluate the curve for a raw sample `x` at the given boost
    #[inline]
    pub fn apply(&self, x: Sample, boost: f32) -> Sample {
        match self {
            Curve::HardClip => HardClip::apply(x, boost),
            Curve::HyperbolicTangent => HyperbolicTangent::apply(x, boost),
            Curve::SquareRatioSigmoid => SquareRatioSigmoid::apply(x, boost),
            Curve::ScaledArcTan => ScaledArcTan::apply(x, boost),
            Curve::LinearRatioSigmoid => LinearRatioSigmoid::apply(x, boost),
        }
    }

    /// Normalization maximum at the given boost
    ///
    /// This is the curve evaluated at full scale (`apply(1.0, boost)`),
    /// except for hard clip which is fixed at 1.0.
    pub fn max_value(&self, boost: f32) -> Sample {
        match self {
            Curve::HardClip => HardClip::max_value(boost),
            Curve::HyperbolicTangent => HyperbolicTangent::max_value(boost),
            Curve::SquareRatioSigmoid => SquareRatioSigmoid::max_value(boost),
            Curve::ScaledArcTan => ScaledArcTan::max_value(boost),
            Curve::LinearRatioSigmoid => LinearRatioSigmoid::max_value(boost),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOSTS: [f32; 5] = [0.5, 1.0, 4.0, 12.5, 20.0];

    #[test]
    fn test_id_roundtrip() {
        for (i, curve) in Curve::ALL.iter().enumerate() {
            assert_eq!(curve.id(), i as i32);
            assert_eq!(Curve::from_id(i as i32), Some(*curve));
        }
        assert_eq!(Curve::from_id(-1), None);
        assert_eq!(Curve::from_id(5), None);
    }

    #[test]
    fn test_hard_clip_clamps_and_keeps_sign() {
        assert_eq!(Curve::HardClip.apply(0.1, 4.0), 0.4);
        assert_eq!(Curve::HardClip.apply(0.5, 4.0), 1.0);
        assert_eq!(Curve::HardClip.apply(-0.5, 4.0), -1.0);
        assert_eq!(Curve::HardClip.apply(-0.1, 4.0), -0.4);
    }

    #[test]
    fn test_known_values() {
        assert!((Curve::HyperbolicTangent.apply(0.5, 4.0) - 2.0_f32.tanh()).abs() < 1e-6);
        assert!((Curve::SquareRatioSigmoid.apply(0.75, 1.0) - 0.8).abs() < 1e-6);
        assert!((Curve::LinearRatioSigmoid.apply(1.0, 3.0) - 0.25).abs() < 1e-6);
        // atan(π/2·(2/π)) = atan(1) = π/4, divided by π/2 = 0.5
        let x = 1.0 / FRAC_PI_2;
        assert!((Curve::ScaledArcTan.apply(x, 1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hard_clip_max_is_one() {
        for &boost in &BOOSTS {
            assert_eq!(Curve::HardClip.max_value(boost), 1.0);
        }
    }

    #[test]
    fn test_max_value_is_curve_at_full_scale() {
        for curve in &Curve::ALL[1..] {
            for &boost in &BOOSTS {
                let max = curve.max_value(boost);
                assert_eq!(max, curve.apply(1.0, boost));
                assert!(max > 0.0, "{} max at boost {} is {}", curve, boost, max);
            }
        }
    }

    #[test]
    fn test_sigmoids_lose_sign() {
        for curve in [Curve::SquareRatioSigmoid, Curve::LinearRatioSigmoid] {
            assert!(!curve.preserves_sign());
            for x in [0.01_f32, 0.3, 0.9, 5.0] {
                let pos = curve.apply(x, 4.0);
                let neg = curve.apply(-x, 4.0);
                assert_eq!(pos, neg);
                assert!(pos > 0.0 && pos <= 1.0);
            }
            assert_eq!(curve.apply(0.0, 4.0), 1.0);
        }
    }

    #[test]
    fn test_odd_curves_are_bounded() {
        for curve in [Curve::HyperbolicTangent, Curve::ScaledArcTan] {
            assert!(curve.preserves_sign());
            for x in [-100.0_f32, -1.0, -0.2, 0.0, 0.2, 1.0, 100.0] {
                let y = curve.apply(x, 20.0);
                assert!(y.abs() <= 1.0, "{} gave {} for {}", curve, y, x);
                assert_eq!(curve.apply(-x, 20.0), -y);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Curve::ScaledArcTan.to_string(), "3 (scaled-arctangent)");
    }
}
