//! Easing curves and range projection.
//!
//! Every curve maps progress `t` in [0, 1] to eased progress in [0, 1],
//! hits both endpoints exactly and never decreases. Only polynomial
//! curves are used so the result does not depend on a `sin`/`cos`
//! approximation.

/// Easing curve applied to one timeline segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Fast start, gentle landing: `1 - (1 - t)^3`.
    EaseOutCubic,
    /// Gentle at both ends: `t^2 (3 - 2t)`.
    SmoothStep,
}

impl Easing {
    /// Apply the curve. `t` is clamped to [0, 1] first.
    #[inline]
    pub fn apply(
        self,
        t: f32,
    ) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Project a normalized value onto an output range.
///
/// `value` is clamped to [0, 1]; the output range may be descending
/// (e.g. `[0.0, -10.0]` for an upward offset). Both ends map exactly.
#[inline]
pub fn interpolate(
    value: f32,
    output: [f32; 2],
) -> f32 {
    let v = value.clamp(0.0, 1.0);
    output[0] * (1.0 - v) + output[1] * v
}
