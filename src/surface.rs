//! Rendering surface driven by the sequencer.
//!
//! The sequencer is the only writer of a surface while the screen is
//! mounted. It pushes the full value set after every running tick and
//! reports timeline boundaries as they are crossed. After unmount it never
//! calls the surface again.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::event_log::EventLog;
use crate::screens::{draw_event_overlay, draw_splash_frame};
use crate::timeline::TimelineEvent;
use crate::values::SplashValues;

/// Consumer of animated values.
pub trait Surface {
    /// Receive the current values. Called once per running tick.
    fn apply(
        &mut self,
        values: &SplashValues,
    );

    /// Receive a timeline boundary observed at `at_ms` since mount.
    fn on_event(
        &mut self,
        _at_ms: u64,
        _event: TimelineEvent,
    ) {
    }
}

/// Surface that renders the splash screen onto any RGB565 draw target.
///
/// Also records timeline events in an [`EventLog`], drawn as an overlay
/// when enabled.
pub struct DrawSurface<'d, D> {
    display: &'d mut D,
    log: EventLog,
    overlay: bool,
}

impl<'d, D> DrawSurface<'d, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub const fn new(display: &'d mut D) -> Self {
        Self {
            display,
            log: EventLog::new(),
            overlay: false,
        }
    }

    /// Toggle the event overlay. Returns the new state.
    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay = !self.overlay;
        self.overlay
    }

    #[inline]
    pub const fn overlay(&self) -> bool { self.overlay }

    #[inline]
    pub const fn log(&self) -> &EventLog { &self.log }

    /// The underlying target, e.g. to flush it to a window.
    #[inline]
    pub fn display(&self) -> &D { &*self.display }
}

impl<D> Surface for DrawSurface<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn apply(
        &mut self,
        values: &SplashValues,
    ) {
        draw_splash_frame(self.display, values);
        if self.overlay {
            draw_event_overlay(self.display, &self.log);
        }
    }

    fn on_event(
        &mut self,
        at_ms: u64,
        event: TimelineEvent,
    ) {
        self.log.push(at_ms, event);
    }
}
