//! Animated values for one mounted splash screen.
//!
//! Every value is normalized to [0, 1]. The visual properties the renderer
//! needs (tilt angle, vertical offset, dot opacity and size) are pure
//! projections of these values, never stored separately.

use crate::config::{DOT_COUNT, DOT_OPACITY_RANGE, DOT_SCALE_RANGE, FLOAT_OFFSET_RANGE, ROTATION_RANGE_DEG};
use crate::easing::interpolate;
use crate::timeline::Channel;

/// Current value of every animated channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplashValues {
    /// Logo entrance scale (0 -> 1 once).
    pub scale: f32,
    /// Floating phase (0 -> 1 -> 0 forever).
    pub rotate: f32,
    /// Text opacity (0 -> 1 once).
    pub fade: f32,
    /// Per-dot pulse phase.
    pub dots: [f32; DOT_COUNT],
}

impl SplashValues {
    /// All values at rest (0).
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            rotate: 0.0,
            fade: 0.0,
            dots: [0.0; DOT_COUNT],
        }
    }

    /// Write a channel, clamped to [0, 1]. Unknown dot indices are ignored.
    pub fn set(
        &mut self,
        channel: Channel,
        value: f32,
    ) {
        let value = value.clamp(0.0, 1.0);
        match channel {
            Channel::Scale => self.scale = value,
            Channel::Rotate => self.rotate = value,
            Channel::Fade => self.fade = value,
            Channel::Dot(i) => {
                if let Some(dot) = self.dots.get_mut(usize::from(i)) {
                    *dot = value;
                }
            }
        }
    }

    /// Read a channel. Unknown dot indices read as 0.
    pub fn get(
        &self,
        channel: Channel,
    ) -> f32 {
        match channel {
            Channel::Scale => self.scale,
            Channel::Rotate => self.rotate,
            Channel::Fade => self.fade,
            Channel::Dot(i) => self.dots.get(usize::from(i)).copied().unwrap_or(0.0),
        }
    }

    /// Logo tilt in degrees, within `ROTATION_RANGE_DEG`.
    #[inline]
    pub fn rotation_deg(&self) -> f32 { interpolate(self.rotate, ROTATION_RANGE_DEG) }

    /// Logo vertical offset in pixels, within `FLOAT_OFFSET_RANGE` (negative = up).
    #[inline]
    pub fn float_offset(&self) -> f32 { interpolate(self.rotate, FLOAT_OFFSET_RANGE) }

    /// Opacity of dot `index`, within `DOT_OPACITY_RANGE`.
    #[inline]
    pub fn dot_opacity(
        &self,
        index: usize,
    ) -> f32 {
        interpolate(self.dots.get(index).copied().unwrap_or(0.0), DOT_OPACITY_RANGE)
    }

    /// Size multiplier of dot `index`, within `DOT_SCALE_RANGE`.
    #[inline]
    pub fn dot_scale(
        &self,
        index: usize,
    ) -> f32 {
        interpolate(self.dots.get(index).copied().unwrap_or(0.0), DOT_SCALE_RANGE)
    }
}
