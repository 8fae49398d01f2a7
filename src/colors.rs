//! Color palette and RGB565 blending for the splash screen.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! # Opacity
//!
//! Draw targets in `embedded-graphics` have no alpha channel. Opacity is
//! emulated by blending the foreground toward the known background color
//! with [`blend`], which uses 8-bit fixed-point math per channel.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Splash Palette
// =============================================================================

/// Warm cream background.
/// RGB565: (31, 60, 27).
pub const BACKGROUND: Rgb565 = Rgb565::new(31, 60, 27);

/// Brand orange for the logo badge and the loading dots.
/// RGB565: (31, 32, 4).
pub const ACCENT: Rgb565 = Rgb565::new(31, 32, 4);

/// Darker orange for the badge rim.
pub const ACCENT_DARK: Rgb565 = Rgb565::new(24, 20, 2);

/// Soft peach for the decorative corner shapes.
pub const DECOR: Rgb565 = Rgb565::new(31, 48, 18);

/// Muted tomato for the second decorative shape.
pub const DECOR_ALT: Rgb565 = Rgb565::new(30, 38, 16);

/// Dark brown title text.
pub const TEXT: Rgb565 = Rgb565::new(10, 12, 4);

/// Lighter brown tagline text.
pub const TEXT_MUTED: Rgb565 = Rgb565::new(18, 26, 10);

/// Gray for the debug overlay text.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

// =============================================================================
// Blending
// =============================================================================

/// Blend `fg` over `bg` with the given opacity (0.0 = `bg`, 1.0 = `fg`).
///
/// # Minimum Step
///
/// When a channel differs and the fixed-point step truncates to zero, the
/// channel still moves one unit toward `fg`. Any opacity above zero is
/// therefore visibly different from the background.
pub fn blend(
    bg: Rgb565,
    fg: Rgb565,
    opacity: f32,
) -> Rgb565 {
    let bg_raw = bg.into_storage();
    let fg_raw = fg.into_storage();

    let bg_r = i32::from((bg_raw >> 11) & 0x1F);
    let bg_g = i32::from((bg_raw >> 5) & 0x3F);
    let bg_b = i32::from(bg_raw & 0x1F);

    let fg_r = i32::from((fg_raw >> 11) & 0x1F);
    let fg_g = i32::from((fg_raw >> 5) & 0x3F);
    let fg_b = i32::from(fg_raw & 0x1F);

    // Fixed-point: 8 bits fractional
    let t_fixed = (opacity.clamp(0.0, 1.0) * 256.0) as i32;

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (bg_r + compute_step(fg_r - bg_r)).clamp(0, 31);
    let g = (bg_g + compute_step(fg_g - bg_g)).clamp(0, 63);
    let b = (bg_b + compute_step(fg_b - bg_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}
