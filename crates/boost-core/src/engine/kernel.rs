//! Monomorphized per-sample loops
//!
//! One loop per (curve, normalize) pair; the engine picks one per call so
//! the inner loop carries no branches.

use crate::curve::{
    Curve, HardClip, HyperbolicTangent, LinearRatioSigmoid, ScaledArcTan, SquareRatioSigmoid,
    Transfer,
};
use crate::types::Sample;

/// Constants read by every loop iteration
#[derive(Debug, Clone, Copy)]
pub(super) struct KernelParams {
    pub boost: f32,
    pub limit: f32,
    pub max_value: f32,
}

#[inline]
fn run<T: Transfer, const NORMALIZE: bool>(samples: &mut [Sample], p: KernelParams) {
    for sample in samples.iter_mut() {
        let mut v = T::apply(*sample, p.boost);
        if NORMALIZE {
            v /= p.max_value;
        }
        *sample = v * p.limit;
    }
}

/// Run the loop for `curve` over every sample in `samples`
pub(super) fn process(curve: Curve, normalize: bool, samples: &mut [Sample], p: KernelParams) {
    match (curve, normalize) {
        (Curve::HardClip, true) => run::<HardClip, true>(samples, p),
        (Curve::HardClip, false) => run::<HardClip, false>(samples, p),
        (Curve::HyperbolicTangent, true) => run::<HyperbolicTangent, true>(samples, p),
        (Curve::HyperbolicTangent, false) => run::<HyperbolicTangent, false>(samples, p),
        (Curve::SquareRatioSigmoid, true) => run::<SquareRatioSigmoid, true>(samples, p),
        (Curve::SquareRatioSigmoid, false) => run::<SquareRatioSigmoid, false>(samples, p),
        (Curve::ScaledArcTan, true) => run::<ScaledArcTan, true>(samples, p),
        (Curve::ScaledArcTan, false) => run::<ScaledArcTan, false>(samples, p),
        (Curve::LinearRatioSigmoid, true) => run::<LinearRatioSigmoid, true>(samples, p),
        (Curve::LinearRatioSigmoid, false) => run::<LinearRatioSigmoid, false>(samples, p),
    }
}
