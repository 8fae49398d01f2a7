//! Chef splash screen simulator for Windows/Desktop.
//!
//! Plays the role of the app's navigation host: it mounts a fresh
//! [`SplashSequencer`] for every splash run, ticks it once per frame
//! against an SDL window, and unmounts it when the splash is dismissed.
//!
//! # Controls
//!
//! | Key     | Action                                          |
//! |---------|-------------------------------------------------|
//! | `N`     | Readiness signal: dismiss the splash now        |
//! | `R`     | Unmount and remount a new splash instance       |
//! | `D`     | Toggle the timeline event overlay               |
//! | `Q`     | Quit                                            |
//!
//! Key repeat is ignored.
//!
//! The splash is dismissed automatically after `SPLASH_HOLD`. Every exit
//! path unmounts the sequencer before the window is reused.
//!
//! Set `RUST_LOG=debug` (or `trace` for every timeline event) to follow the
//! sequencer lifecycle in the console.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod timing;

use std::thread;
use std::time::Instant;

use chef_splash::colors::{BACKGROUND, TEXT, TEXT_MUTED};
use chef_splash::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use chef_splash::styles::{CENTERED, TAGLINE_FONT, TITLE_FONT};
use chef_splash::{DrawSurface, SplashSequencer};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::timing::{FRAME_TIME, SPLASH_HOLD};

/// How a splash run ended.
enum Exit {
    /// Window closed or `Q`.
    Quit,
    /// Remount requested.
    Replay,
    /// Hold time elapsed or readiness signal.
    Dismissed,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Chef's Kitchen", &output_settings);

    display.clear(BACKGROUND).ok();
    window.update(&display);

    let clock = Instant::now();
    let mut run = 0u32;

    loop {
        run += 1;
        log::info!("mounting splash (run {run})");

        match run_splash(&mut display, &mut window, clock) {
            Exit::Quit => return,
            Exit::Replay => {}
            Exit::Dismissed => {
                if !wait_for_replay(&mut display, &mut window) {
                    return;
                }
            }
        }
    }
}

/// Mount one splash instance and drive it until it is dismissed.
fn run_splash(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    clock: Instant,
) -> Exit {
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut splash = SplashSequencer::splash();
    let mut surface = DrawSurface::new(display);
    let mounted = Instant::now();
    splash.mount(now_ms());

    let exit = loop {
        let frame_start = Instant::now();

        let mut requested = None;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => requested = Some(Exit::Quit),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Q => requested = Some(Exit::Quit),
                        Keycode::R => requested = Some(Exit::Replay),
                        Keycode::N => requested = Some(Exit::Dismissed),
                        Keycode::D => {
                            let on = surface.toggle_overlay();
                            log::info!("event overlay {}", if on { "on" } else { "off" });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some(exit) = requested {
            break exit;
        }
        if mounted.elapsed() >= SPLASH_HOLD {
            break Exit::Dismissed;
        }

        splash.tick(now_ms(), &mut surface);
        window.update(surface.display());

        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            thread::sleep(FRAME_TIME - frame_time);
        }
    };

    let stopped = splash.unmount();
    log::info!(
        "splash unmounted after {}ms ({stopped} loops stopped, {} events in overlay log)",
        mounted.elapsed().as_millis(),
        surface.log().len()
    );
    exit
}

/// Idle screen shown after the splash. Returns `false` to quit.
fn wait_for_replay(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) -> bool {
    display.clear(BACKGROUND).ok();
    Text::with_text_style(
        "Splash finished",
        Point::new(CENTER_X, CENTER_Y),
        MonoTextStyle::new(TITLE_FONT, TEXT),
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        "R: replay   Q: quit",
        Point::new(CENTER_X, CENTER_Y + 28),
        MonoTextStyle::new(TAGLINE_FONT, TEXT_MUTED),
        CENTERED,
    )
    .draw(display)
    .ok();

    loop {
        window.update(display);
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit
                | SimulatorEvent::KeyDown {
                    keycode: Keycode::Q,
                    ..
                } => return false,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::R,
                    repeat: false,
                    ..
                } => return true,
                _ => {}
            }
        }
        thread::sleep(FRAME_TIME);
    }
}
