//! Splash screen with floating chef badge, fading title and pulsing dots.
//!
//! Draws one frame from a [`SplashValues`] snapshot. All motion comes from
//! the values; this module only knows where things go.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │ (decor)                       o    │
//! │               .----.               │
//! │              ( hat  )              │  Badge: scale, tilt, float
//! │               '----'               │
//! │                                    │
//! │           Chef's Kitchen           │  Title: fade
//! │      Fresh menus, made simple      │  Tagline: fade
//! │                                    │
//! │               o  o  o        (decor)  Dots: opacity + size per dot
//! └────────────────────────────────────┘
//! ```
//!
//! # Opacity
//!
//! The draw target has no alpha, so faded elements are drawn in a color
//! blended toward [`BACKGROUND`] (see [`crate::colors::blend`]).

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Triangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{ACCENT, ACCENT_DARK, BACKGROUND, DECOR, DECOR_ALT, TEXT, TEXT_MUTED, WHITE, blend};
use crate::config::{CENTER_X, DOT_COUNT};
use crate::event_log::EventLog;
use crate::styles::{CENTERED, LEFT_ALIGNED, OVERLAY_STYLE, TAGLINE_FONT, TITLE_FONT};
use crate::values::SplashValues;

// =============================================================================
// Layout Constants
// =============================================================================

/// Badge center at rest (before the float offset).
const LOGO_CENTER: Point = Point::new(CENTER_X, 88);

/// Badge diameter at full scale.
const LOGO_DIAMETER: f32 = 84.0;

/// Rim thickness at full scale.
const LOGO_RIM: f32 = 4.0;

/// Title baseline.
const TITLE_POS: Point = Point::new(CENTER_X, 165);

/// Tagline baseline.
const TAGLINE_POS: Point = Point::new(CENTER_X, 186);

/// Loading dots row.
const DOTS_Y: i32 = 212;

/// Horizontal distance between dot centers.
const DOT_SPACING: i32 = 22;

/// Dot diameter at scale 1.0.
const DOT_DIAMETER: f32 = 10.0;

/// Overlay text origin and line height.
const OVERLAY_X: i32 = 4;
const OVERLAY_START_Y: i32 = 10;
const OVERLAY_LINE_HEIGHT: i32 = 10;

const TITLE_TEXT: &str = "Chef's Kitchen";
const TAGLINE_TEXT: &str = "Fresh menus, made simple";

// Decorative shapes are static
const DECOR_TOP_LEFT: Circle = Circle::new(Point::new(-40, -40), 120);
const DECOR_BOTTOM_RIGHT: Circle = Circle::new(Point::new(250, 170), 110);
const DECOR_RING: Circle = Circle::new(Point::new(262, 18), 30);

const DECOR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DECOR);
const DECOR_ALT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(DECOR_ALT);
const DECOR_RING_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DECOR_ALT, 3);

// Chef hat, in badge units (badge radius = 1.0), y down
const HAT_BAND: [(f32, f32); 4] = [(-0.42, 0.05), (0.42, 0.05), (0.42, 0.42), (-0.42, 0.42)];
const HAT_PUFFS: [(f32, f32, f32); 3] = [(-0.32, -0.12, 0.44), (0.32, -0.12, 0.44), (0.0, -0.32, 0.52)];

// =============================================================================
// Geometry Helpers
// =============================================================================

#[inline]
fn round_i32(v: f32) -> i32 { if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 } }

/// Rotate `(dx, dy)` by `sin`/`cos` and translate to `center`.
#[inline]
fn rotate_point(
    center: Point,
    dx: f32,
    dy: f32,
    sin: f32,
    cos: f32,
) -> Point {
    Point::new(
        center.x + round_i32(dx * cos - dy * sin),
        center.y + round_i32(dx * sin + dy * cos),
    )
}

// =============================================================================
// Drawing
// =============================================================================

fn draw_decor<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    DECOR_TOP_LEFT.into_styled(DECOR_FILL).draw(display).ok();
    DECOR_BOTTOM_RIGHT.into_styled(DECOR_ALT_FILL).draw(display).ok();
    DECOR_RING.into_styled(DECOR_RING_STROKE).draw(display).ok();
}

fn draw_logo<D>(
    display: &mut D,
    values: &SplashValues,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = LOGO_DIAMETER * values.scale;
    if diameter < 2.0 {
        return;
    }

    let center = LOGO_CENTER + Point::new(0, round_i32(values.float_offset()));
    let radius = diameter / 2.0;

    // Rim, then face
    Circle::with_center(center, diameter as u32)
        .into_styled(PrimitiveStyle::with_fill(ACCENT_DARK))
        .draw(display)
        .ok();
    let face = (diameter - 2.0 * LOGO_RIM * values.scale).max(1.0);
    Circle::with_center(center, face as u32)
        .into_styled(PrimitiveStyle::with_fill(ACCENT))
        .draw(display)
        .ok();

    // Hat tilts with the float
    let rad = values.rotation_deg() * (core::f32::consts::PI / 180.0);
    let sin = micromath::F32(rad).sin().0;
    let cos = micromath::F32(rad).cos().0;
    let hat_style = PrimitiveStyle::with_fill(WHITE);

    for &(dx, dy, d) in &HAT_PUFFS {
        let puff_center = rotate_point(center, dx * radius, dy * radius, sin, cos);
        Circle::with_center(puff_center, (d * radius) as u32)
            .into_styled(hat_style)
            .draw(display)
            .ok();
    }

    let band = HAT_BAND.map(|(dx, dy)| rotate_point(center, dx * radius, dy * radius, sin, cos));
    Triangle::new(band[0], band[1], band[2])
        .into_styled(hat_style)
        .draw(display)
        .ok();
    Triangle::new(band[0], band[2], band[3])
        .into_styled(hat_style)
        .draw(display)
        .ok();
}

fn draw_text<D>(
    display: &mut D,
    values: &SplashValues,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if values.fade <= 0.0 {
        return;
    }

    let title_style = MonoTextStyle::new(TITLE_FONT, blend(BACKGROUND, TEXT, values.fade));
    Text::with_text_style(TITLE_TEXT, TITLE_POS, title_style, CENTERED)
        .draw(display)
        .ok();

    let tagline_style = MonoTextStyle::new(TAGLINE_FONT, blend(BACKGROUND, TEXT_MUTED, values.fade));
    Text::with_text_style(TAGLINE_TEXT, TAGLINE_POS, tagline_style, CENTERED)
        .draw(display)
        .ok();
}

fn draw_dots<D>(
    display: &mut D,
    values: &SplashValues,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let first_x = CENTER_X - DOT_SPACING * (DOT_COUNT as i32 - 1) / 2;

    for i in 0..DOT_COUNT {
        let center = Point::new(first_x + i as i32 * DOT_SPACING, DOTS_Y);
        let diameter = round_i32(DOT_DIAMETER * values.dot_scale(i)).max(1) as u32;
        let color = blend(BACKGROUND, ACCENT, values.dot_opacity(i));

        Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

/// Draw a single frame of the splash screen.
///
/// Non-async and allocation-free: call once per tick, then flush.
pub fn draw_splash_frame<D>(
    display: &mut D,
    values: &SplashValues,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();

    draw_decor(display);
    draw_logo(display, values);
    draw_text(display, values);
    draw_dots(display, values);
}

/// Draw the recent timeline events in the top-left corner (oldest first).
pub fn draw_event_overlay<D>(
    display: &mut D,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, entry) in log.iter().enumerate() {
        let y_pos = OVERLAY_START_Y + i as i32 * OVERLAY_LINE_HEIGHT;
        let mut line: String<40> = String::new();
        let _ = write!(line, "{:>6} {}", entry.at_ms, entry.event);
        Text::with_text_style(&line, Point::new(OVERLAY_X, y_pos), OVERLAY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
