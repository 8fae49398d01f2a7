//! Splash animation sequencer.
//!
//! One [`SplashSequencer`] per mounted splash screen. It owns the screen's
//! [`Timeline`] and a fresh set of [`SplashValues`], and is driven by the
//! host's frame loop through [`SplashSequencer::tick`]. There are no
//! threads and no timers: every tick evaluates the whole schedule at the
//! current elapsed time, so a late or skipped frame just lands further
//! along the same timeline.
//!
//! # Lifecycle
//!
//! ```text
//!   Idle ──mount()──▶ Running ──unmount()/drop──▶ Disposed
//!     └─────────────────unmount()/drop──────────────▲
//! ```
//!
//! - `tick()` only does work while `Running`. Before mount and after
//!   unmount it returns `false` without touching the surface, so no loop
//!   can write to a torn-down screen.
//! - `unmount()` is the single disposer: it stops every active loop and
//!   cancels every track that has not started yet. It is synchronous and
//!   idempotent, and `Drop` calls it on every exit path.
//! - A disposed sequencer never restarts. Remounting the screen means
//!   creating a new sequencer with its own values.
//!
//! # Example
//!
//! ```ignore
//! let mut splash = SplashSequencer::splash();
//! splash.mount(now_ms());
//! while showing_splash {
//!     splash.tick(now_ms(), &mut surface);
//!     flush(&surface);
//! }
//! splash.unmount();
//! ```

use crate::surface::Surface;
use crate::timeline::Timeline;
use crate::values::SplashValues;

/// Lifecycle phase of a sequencer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Created, not mounted yet.
    #[default]
    Idle,
    /// Mounted; ticks drive the surface.
    Running,
    /// Unmounted; inert forever.
    Disposed,
}

/// Drives one splash screen's animated values along its timeline.
pub struct SplashSequencer {
    timeline: Timeline,
    values: SplashValues,
    phase: Phase,
    mounted_at: u64,
    last_elapsed: Option<u64>,
    /// Bit `i` set while looping track `i` is running.
    active_loops: u8,
}

impl SplashSequencer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            values: SplashValues::new(),
            phase: Phase::Idle,
            mounted_at: 0,
            last_elapsed: None,
            active_loops: 0,
        }
    }

    /// Sequencer for the canonical splash timeline.
    pub fn splash() -> Self { Self::new(Timeline::splash()) }

    /// Start the timeline at `now_ms`.
    ///
    /// Only an idle sequencer can be mounted; anything else is ignored.
    pub fn mount(
        &mut self,
        now_ms: u64,
    ) {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running;
                self.mounted_at = now_ms;
                log::debug!(
                    "splash mounted at {now_ms}ms ({} tracks, {} loops)",
                    self.timeline.tracks().len(),
                    self.timeline.loop_count()
                );
            }
            Phase::Running => log::warn!("splash already mounted, ignoring mount at {now_ms}ms"),
            Phase::Disposed => log::warn!("splash was unmounted, remount needs a new sequencer"),
        }
    }

    /// Advance to `now_ms` and push the result to `surface`.
    ///
    /// Returns `true` while running. Does nothing before mount or after
    /// unmount. A clock that steps backwards is held at the last elapsed
    /// time.
    pub fn tick<S>(
        &mut self,
        now_ms: u64,
        surface: &mut S,
    ) -> bool
    where
        S: Surface + ?Sized,
    {
        if self.phase != Phase::Running {
            return false;
        }

        let raw = now_ms.saturating_sub(self.mounted_at);
        let elapsed = self.last_elapsed.map_or(raw, |last| raw.max(last));

        self.timeline.events_between(self.last_elapsed, elapsed, |event| {
            log::trace!("splash +{elapsed}ms: {event}");
            surface.on_event(elapsed, event);
        });

        let mut active = 0u8;
        for (i, track) in self.timeline.tracks().iter().enumerate() {
            if let Some(value) = track.sample(elapsed) {
                self.values.set(track.channel, value);
                if track.is_loop() {
                    active |= 1 << i;
                }
            }
        }
        self.active_loops = active;
        self.last_elapsed = Some(elapsed);

        surface.apply(&self.values);
        true
    }

    /// Stop every loop and cancel every pending track.
    ///
    /// Returns the number of loops that were running. Safe to call any
    /// number of times; only the first call on a mounted sequencer does
    /// anything. Values are left where they were.
    pub fn unmount(&mut self) -> usize {
        match self.phase {
            Phase::Disposed => 0,
            Phase::Idle => {
                self.phase = Phase::Disposed;
                0
            }
            Phase::Running => {
                let stopped = self.active_loops.count_ones() as usize;
                let pending = self.pending_tracks();
                self.active_loops = 0;
                self.phase = Phase::Disposed;
                log::debug!(
                    "splash unmounted at +{}ms: {stopped} loops stopped, {pending} pending tracks cancelled",
                    self.last_elapsed.unwrap_or(0)
                );
                stopped
            }
        }
    }

    /// Tracks whose start offset has not been reached yet.
    fn pending_tracks(&self) -> usize {
        self.timeline
            .tracks()
            .iter()
            .filter(|t| self.last_elapsed.is_none_or(|e| u64::from(t.start_ms) > e))
            .count()
    }

    #[inline]
    pub const fn values(&self) -> &SplashValues { &self.values }

    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    #[inline]
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }

    /// Bitmask of running loops, by track index.
    #[inline]
    pub const fn active_loops(&self) -> u8 { self.active_loops }

    /// Elapsed time at the last tick, if any.
    #[inline]
    pub const fn elapsed_ms(&self) -> Option<u64> { self.last_elapsed }

    #[inline]
    pub const fn timeline(&self) -> &Timeline { &self.timeline }
}

impl Drop for SplashSequencer {
    fn drop(&mut self) { self.unmount(); }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DOT_COUNT;
    use crate::test_support::RecordingSurface;
    use crate::timeline::{Channel, TimelineEvent};

    /// Tick every `step` ms over `from..=to`.
    fn run(
        seq: &mut SplashSequencer,
        surface: &mut RecordingSurface,
        from: u64,
        to: u64,
        step: u64,
    ) {
        let mut t = from;
        while t <= to {
            seq.tick(t, surface);
            t += step;
        }
    }

    fn first_event_at(
        surface: &RecordingSurface,
        event: TimelineEvent,
    ) -> Option<u64> {
        surface.events.iter().find(|(_, e)| *e == event).map(|(t, _)| *t)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_before_mount_is_noop() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();

        assert!(!seq.tick(100, &mut surface));
        assert_eq!(surface.applied, 0);
        assert!(surface.events.is_empty());
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn test_mount_twice_keeps_first_mount_time() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        seq.mount(500);

        seq.tick(800, &mut surface);
        assert_eq!(seq.values().scale, 1.0, "Timeline should run from the first mount");
    }

    #[test]
    fn test_unmount_idempotent() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        run(&mut seq, &mut surface, 0, 2000, 20);

        assert_eq!(seq.unmount(), 1 + DOT_COUNT, "Rotate and every dot should be running");
        assert_eq!(seq.unmount(), 0);
        assert_eq!(seq.unmount(), 0);
        assert_eq!(seq.phase(), Phase::Disposed);
        assert_eq!(seq.active_loops(), 0);
    }

    #[test]
    fn test_unmount_never_mounted() {
        let mut seq = SplashSequencer::splash();
        assert_eq!(seq.unmount(), 0);
        assert_eq!(seq.phase(), Phase::Disposed);

        // Disposed sequencers do not come back
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        assert!(!seq.tick(10, &mut surface));
        assert_eq!(surface.applied, 0);
    }

    #[test]
    fn test_drop_mid_flight() {
        let mut surface = RecordingSurface::default();
        {
            let mut seq = SplashSequencer::splash();
            seq.mount(0);
            run(&mut seq, &mut surface, 0, 300, 16);
        }
        assert!(surface.applied > 0);
    }

    // -------------------------------------------------------------------------
    // Timeline Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_entrance_scenario() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);

        run(&mut seq, &mut surface, 0, 790, 10);
        assert!(seq.values().scale < 1.0);
        assert_eq!(seq.values().fade, 0.0, "Fade waits for the scale-in");

        seq.tick(800, &mut surface);
        assert_eq!(seq.values().scale, 1.0);
        assert_eq!(first_event_at(&surface, TimelineEvent::Completed(Channel::Scale)), Some(800));
        assert_eq!(first_event_at(&surface, TimelineEvent::Started(Channel::Fade)), Some(800));

        run(&mut seq, &mut surface, 810, 1400, 10);
        assert_eq!(seq.values().fade, 1.0);
        assert_eq!(first_event_at(&surface, TimelineEvent::Completed(Channel::Fade)), Some(1400));
    }

    #[test]
    fn test_one_shots_stay_complete_while_loops_cycle() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);

        let mut t = 1400;
        run(&mut seq, &mut surface, 0, t, 20);
        while t <= 30_000 {
            seq.tick(t, &mut surface);
            assert_eq!(seq.values().scale, 1.0, "scale moved at {t}ms");
            assert_eq!(seq.values().fade, 1.0, "fade moved at {t}ms");
            t += 37;
        }
    }

    #[test]
    fn test_floating_loop_bounded() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);

        let mut t = 0;
        while t <= 12_000 {
            seq.tick(t, &mut surface);
            let values = seq.values();
            assert!((0.0..=1.0).contains(&values.rotate), "rotate {} at {t}ms", values.rotate);
            assert!((0.0..=2.0).contains(&values.rotation_deg()));
            assert!((-10.0..=0.0).contains(&values.float_offset()));
            t += 13;
        }
    }

    #[test]
    fn test_dot_loops_start_staggered() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);

        run(&mut seq, &mut surface, 0, 990, 10);
        assert_eq!(seq.values().dots, [0.0; DOT_COUNT], "No dot moves before 1000ms");

        run(&mut seq, &mut surface, 1000, 3000, 10);
        for i in 0..DOT_COUNT {
            let started = first_event_at(&surface, TimelineEvent::Started(Channel::Dot(i as u8)));
            assert_eq!(started, Some(1000 + i as u64 * 200), "dot {i} start");
        }
    }

    #[test]
    fn test_dot_timer_independent_of_entrance() {
        // Slow entrance must not delay the dots
        let config = crate::timeline::TimelineConfig {
            scale_in_ms: 5000,
            ..Default::default()
        };
        let mut seq = SplashSequencer::new(Timeline::from_config(&config));
        let mut surface = RecordingSurface::default();
        seq.mount(0);

        run(&mut seq, &mut surface, 0, 1100, 10);
        assert_eq!(first_event_at(&surface, TimelineEvent::Started(Channel::Dot(0))), Some(1000));
        assert!(seq.values().scale < 1.0);
    }

    #[test]
    fn test_dot_period() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        run(&mut seq, &mut surface, 0, 6000, 10);

        for i in 0..DOT_COUNT {
            let channel = Channel::Dot(i as u8);
            let wraps: std::vec::Vec<u64> = surface
                .events
                .iter()
                .filter(|(_, e)| matches!(e, TimelineEvent::CycleStarted { channel: c, .. } if *c == channel))
                .map(|(t, _)| *t)
                .collect();

            let start = 1000 + i as u64 * 200;
            assert!(wraps.len() >= 3, "dot {i} should wrap at least 3 times");
            for (n, at) in wraps.iter().enumerate() {
                assert_eq!(*at, start + 1200 * (n as u64 + 1), "dot {i} wrap {n}");
            }
        }
    }

    #[test]
    fn test_mount_offset_respected() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(10_000);

        seq.tick(10_400, &mut surface);
        assert_eq!(seq.elapsed_ms(), Some(400));
        seq.tick(10_800, &mut surface);
        assert_eq!(seq.values().scale, 1.0);
    }

    #[test]
    fn test_clock_stepping_back_is_held() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(100);

        seq.tick(600, &mut surface);
        let before = *seq.values();
        seq.tick(300, &mut surface);
        assert_eq!(seq.elapsed_ms(), Some(500));
        assert_eq!(*seq.values(), before);
    }

    #[test]
    fn test_unmount_mid_entrance() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        run(&mut seq, &mut surface, 0, 500, 10);

        let scale = seq.values().scale;
        assert!(scale > 0.0 && scale < 1.0);

        assert_eq!(seq.unmount(), 1, "Only the floating loop runs at 500ms");
        let applied = surface.applied;
        let events = surface.events.len();

        run(&mut seq, &mut surface, 510, 5000, 10);
        assert_eq!(surface.applied, applied, "No writes after unmount");
        assert_eq!(surface.events.len(), events, "No callbacks after unmount");
        assert_eq!(seq.values().scale, scale, "Scale left where it was");
    }

    #[test]
    fn test_remounts_are_independent() {
        let mut first = SplashSequencer::splash();
        let mut second = SplashSequencer::splash();
        let mut first_surface = RecordingSurface::default();
        let mut second_surface = RecordingSurface::default();

        first.mount(0);
        first.tick(1000, &mut first_surface);
        first.unmount();

        second.mount(1000);
        second.tick(1000, &mut second_surface);
        assert_eq!(second.values().scale, 0.0, "Fresh instance starts from rest");
        assert_eq!(first.values().scale, 1.0);

        run(&mut second, &mut second_surface, 1010, 1800, 10);
        assert_eq!(second.values().scale, 1.0);
        assert_eq!(first_surface.applied, 1, "Old instance untouched by new one");
        assert!(
            second_surface
                .events
                .iter()
                .all(|(t, _)| *t <= 800),
            "Second instance reports its own elapsed time"
        );
    }

    #[test]
    fn test_first_tick_reports_starts() {
        let mut seq = SplashSequencer::splash();
        let mut surface = RecordingSurface::default();
        seq.mount(0);
        seq.tick(0, &mut surface);

        assert_eq!(surface.applied, 1);
        assert_eq!(
            surface.events,
            [
                (0, TimelineEvent::Started(Channel::Scale)),
                (0, TimelineEvent::Started(Channel::Rotate))
            ]
        );
        assert_eq!(surface.last.unwrap(), SplashValues::new());
    }
}
