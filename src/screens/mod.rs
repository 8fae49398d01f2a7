//! Screen renderers.
//!
//! - **Splash** ([`splash`]): floating chef badge, fading title, pulsing
//!   loading dots, plus an optional overlay listing recent timeline events.
//!
//! Renderers are pure: they draw one frame from the values they are given
//! and keep no state between frames.

mod splash;

pub use splash::{draw_event_overlay, draw_splash_frame};
