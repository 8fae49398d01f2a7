//! Pre-computed static text styles for the splash screen.
//!
//! Alignment styles and fonts are `const`, so nothing is constructed per
//! frame. The title and tagline fade in, which means their color changes
//! every frame during the fade; for those, callers build
//! `MonoTextStyle::new(TITLE_FONT, color)` around the shared font reference.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

use crate::colors::GRAY;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the title and tagline.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the event overlay.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for fading styles)
// =============================================================================

/// Title font (`ProFont` 24pt).
pub const TITLE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Tagline font (`ProFont` 12pt).
pub const TAGLINE_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Fixed Styles
// =============================================================================

/// Small gray text for the debug event overlay.
pub const OVERLAY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);
