//! Test doubles shared by the unit tests.

use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::Surface;
use crate::timeline::TimelineEvent;
use crate::values::SplashValues;

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// In-memory RGB565 framebuffer the size of the screen.
pub struct Canvas {
    pixels: Vec<Rgb565>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![BLACK; WIDTH * HEIGHT],
        }
    }

    /// Color at `(x, y)`. Panics outside the screen.
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Rgb565 {
        self.pixels[y as usize * WIDTH + x as usize]
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && (point.x as usize) < WIDTH && point.y >= 0 && (point.y as usize) < HEIGHT {
                self.pixels[point.y as usize * WIDTH + point.x as usize] = color;
            }
        }
        Ok(())
    }
}

/// Surface that records everything the sequencer sends it.
#[derive(Default)]
pub struct RecordingSurface {
    /// Number of `apply` calls.
    pub applied: usize,
    /// Every event with its timestamp, in arrival order.
    pub events: Vec<(u64, TimelineEvent)>,
    /// Values from the last `apply`.
    pub last: Option<SplashValues>,
}

impl Surface for RecordingSurface {
    fn apply(
        &mut self,
        values: &SplashValues,
    ) {
        self.applied += 1;
        self.last = Some(*values);
    }

    fn on_event(
        &mut self,
        at_ms: u64,
        event: TimelineEvent,
    ) {
        self.events.push((at_ms, event));
    }
}
