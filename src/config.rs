//! Splash screen configuration constants.
//!
//! All timeline durations are in logical milliseconds since mount. They are
//! the defaults behind [`crate::timeline::TimelineConfig`], which is what the
//! sequencer actually reads, so a host can tune one run without touching
//! these values.
//!
//! # Timeline at a glance
//!
//! ```text
//! t(ms)   0        800      1000 1200 1400         2500          5000
//!         |--scale--|--fade---|                      |              |
//!         |------------ rotate 0 -> 1 --------------|-- 1 -> 0 -----|  (forever)
//!                             |dot0 ...
//!                                  |dot1 ...
//!                                       |dot2 ...      (600 up, 600 down, forever)
//! ```
//!
//! Host-only timing (frame pacing, how long the navigation host keeps the
//! splash up) needs `std::time` and lives in the simulator's `timing` module.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate, pre-computed as i32 for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, pre-computed as i32 for drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Entrance (one-shot)
// =============================================================================

/// Logo scale-in duration. Scale runs 0 -> 1 starting at mount.
pub const SCALE_IN_MS: u32 = 800;

/// Text fade-in duration. Starts when the scale-in completes.
pub const FADE_IN_MS: u32 = 600;

// =============================================================================
// Floating Loop
// =============================================================================

/// Duration of one half of the floating oscillation (0 -> 1, then 1 -> 0).
pub const FLOAT_HALF_PERIOD_MS: u32 = 2500;

/// Logo tilt range in degrees, projected from the rotate value.
pub const ROTATION_RANGE_DEG: [f32; 2] = [0.0, 2.0];

/// Logo vertical offset range in pixels (negative = up).
pub const FLOAT_OFFSET_RANGE: [f32; 2] = [0.0, -10.0];

// =============================================================================
// Loading Dots
// =============================================================================

/// Number of pulsing loading dots.
pub const DOT_COUNT: usize = 3;

/// Delay from mount before the first dot starts pulsing.
/// Independent of the entrance; both timers start at mount.
pub const DOT_START_DELAY_MS: u32 = 1000;

/// Extra start offset per dot index (wave effect).
pub const DOT_STAGGER_MS: u32 = 200;

/// Duration of each dot ramp (up and down are the same length).
pub const DOT_RAMP_MS: u32 = 600;

/// Dot opacity range, projected from the dot value.
pub const DOT_OPACITY_RANGE: [f32; 2] = [0.3, 1.0];

/// Dot scale range, projected from the dot value.
pub const DOT_SCALE_RANGE: [f32; 2] = [0.8, 1.2];

// =============================================================================
// Capacities (fixed-size tables, no heap)
// =============================================================================

/// Maximum number of tracks in one timeline.
/// The splash timeline uses 3 + `DOT_COUNT`.
pub const MAX_TRACKS: usize = 8;

/// Maximum number of segments per track.
pub const MAX_SEGMENTS: usize = 4;

/// Number of timeline events kept for the debug overlay.
pub const EVENT_LOG_SIZE: usize = 8;
