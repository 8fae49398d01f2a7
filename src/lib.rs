//! Splash screen animation for the chef menu app.
//!
//! This library drives and draws the app's splash/loading screen: a chef
//! badge that scales in and floats, a title that fades in once the badge
//! has landed, and three loading dots that pulse in a wave. The binary
//! (`main.rs`, feature `simulator`) hosts it in a desktop window.
//!
//! - [`config`]: Timeline durations, projection ranges, layout
//! - [`timeline`]: Explicit schedule of tracks and boundary events
//! - [`easing`]: Easing curves and range projection
//! - [`values`]: Per-screen animated values and their projections
//! - [`sequencer`]: Mount/tick/unmount lifecycle over one timeline
//! - [`surface`]: Rendering surface trait and the draw-target adapter
//! - [`screens`]: Splash frame and event overlay renderers
//! - [`event_log`]: Ring buffer of recent timeline events
//! - [`colors`], [`styles`]: Palette, blending and text styles
//!
//! # no_std Compatibility
//!
//! The library is `no_std` and heap-free so the same sequencer runs on a
//! microcontroller frame loop. Time is passed in as milliseconds; the host
//! owns the clock.
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib
//! cargo run --features simulator --bin simulator
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`).

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod easing;
pub mod event_log;
pub mod screens;
pub mod sequencer;
pub mod styles;
pub mod surface;
pub mod timeline;
pub mod values;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use sequencer::{Phase, SplashSequencer};
pub use surface::{DrawSurface, Surface};
pub use timeline::{Channel, Timeline, TimelineConfig, TimelineEvent};
pub use values::SplashValues;
