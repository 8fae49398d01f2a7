//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the library.

use std::time::Duration;

/// Target frame time (~60 FPS). The splash loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// How long the host keeps the splash mounted before moving on.
/// Long enough to see the entrance, a full float cycle and several dot waves.
pub const SPLASH_HOLD: Duration = Duration::from_secs(6);
