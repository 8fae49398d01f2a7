//! Explicit animation schedule for the splash screen.
//!
//! The whole splash animation is a small table of [`Track`]s. Each track
//! writes one [`Channel`], starts at a fixed offset from mount, runs a list
//! of [`Segment`]s and either stops on its last value or wraps forever.
//! Nothing here holds state: sampling and event detection are pure
//! functions of elapsed time, which is what makes the schedule testable
//! without a clock.
//!
//! # Canonical Splash Timeline
//!
//! | Channel  | Start (ms)        | Segments                     | Repeat  |
//! |----------|-------------------|------------------------------|---------|
//! | Scale    | 0                 | 0 -> 1 over 800              | Once    |
//! | Fade     | end of Scale      | 0 -> 1 over 600              | Once    |
//! | Rotate   | 0                 | 0 -> 1 over 2500, 1 -> 0     | Forever |
//! | Dot(i)   | 1000 + i * 200    | 0 -> 1 over 600, 1 -> 0      | Forever |
//!
//! The dot stagger is applied once, at the start. Every dot then cycles
//! with the same 1200ms period, so the wave keeps its shape.

use core::fmt;

use heapless::Vec;

use crate::config::{
    DOT_COUNT,
    DOT_RAMP_MS,
    DOT_STAGGER_MS,
    DOT_START_DELAY_MS,
    FADE_IN_MS,
    FLOAT_HALF_PERIOD_MS,
    MAX_SEGMENTS,
    MAX_TRACKS,
    SCALE_IN_MS,
};
use crate::easing::Easing;

// =============================================================================
// Channels and Events
// =============================================================================

/// Animated value written by a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Logo entrance scale.
    Scale,
    /// Logo floating phase (drives tilt and vertical offset).
    Rotate,
    /// Title/tagline opacity.
    Fade,
    /// Loading dot by index.
    Dot(u8),
}

impl fmt::Display for Channel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Scale => f.write_str("scale"),
            Self::Rotate => f.write_str("rotate"),
            Self::Fade => f.write_str("fade"),
            Self::Dot(i) => write!(f, "dot[{i}]"),
        }
    }
}

/// Timeline boundary crossed between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    /// Track reached its start offset (for loops: cycle 0 begins).
    Started(Channel),
    /// Loop wrapped around and began cycle `cycle` (1-based after the first).
    CycleStarted { channel: Channel, cycle: u32 },
    /// One-shot track reached its final value.
    Completed(Channel),
}

impl TimelineEvent {
    /// Channel the event belongs to.
    pub const fn channel(&self) -> Channel {
        match *self {
            Self::Started(channel) | Self::Completed(channel) => channel,
            Self::CycleStarted { channel, .. } => channel,
        }
    }
}

impl fmt::Display for TimelineEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Started(channel) => write!(f, "{channel} started"),
            Self::CycleStarted { channel, cycle } => write!(f, "{channel} cycle {cycle}"),
            Self::Completed(channel) => write!(f, "{channel} done"),
        }
    }
}

// =============================================================================
// Segments and Tracks
// =============================================================================

/// One eased transition from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Segment {
    pub const fn new(
        from: f32,
        to: f32,
        duration_ms: u32,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    /// Value at `local_ms` into this segment. Holds `to` at and past the end.
    pub fn sample(
        &self,
        local_ms: u64,
    ) -> f32 {
        if self.duration_ms == 0 || local_ms >= u64::from(self.duration_ms) {
            return self.to;
        }
        let t = local_ms as f32 / self.duration_ms as f32;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// Whether a track stops at its end or wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    Forever,
}

/// One row of the schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub channel: Channel,
    pub start_ms: u32,
    pub repeat: Repeat,
    segments: Vec<Segment, MAX_SEGMENTS>,
}

impl Track {
    /// Start building a one-shot track with no segments.
    pub const fn new(
        channel: Channel,
        start_ms: u32,
    ) -> Self {
        Self {
            channel,
            start_ms,
            repeat: Repeat::Once,
            segments: Vec::new(),
        }
    }

    /// Append a segment. Segments past `MAX_SEGMENTS` are dropped with a warning.
    #[must_use]
    pub fn then(
        mut self,
        segment: Segment,
    ) -> Self {
        if self.segments.push(segment).is_err() {
            log::warn!("{} track is full, segment dropped", self.channel);
        }
        self
    }

    /// Make the track wrap forever instead of stopping.
    #[must_use]
    pub fn forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] { &self.segments }

    #[inline]
    pub const fn is_loop(&self) -> bool { matches!(self.repeat, Repeat::Forever) }

    /// Total length of one pass over all segments.
    pub fn cycle_ms(&self) -> u64 { self.segments.iter().map(|s| u64::from(s.duration_ms)).sum() }

    /// Elapsed time at which a one-shot track completes. `None` for loops.
    pub fn end_ms(&self) -> Option<u64> {
        match self.repeat {
            Repeat::Once => Some(u64::from(self.start_ms) + self.cycle_ms()),
            Repeat::Forever => None,
        }
    }

    /// Value at `elapsed_ms` since mount, or `None` if the track has not started.
    pub fn sample(
        &self,
        elapsed_ms: u64,
    ) -> Option<f32> {
        let local = elapsed_ms.checked_sub(u64::from(self.start_ms))?;
        let last = self.segments.last()?;
        let cycle = self.cycle_ms();

        let mut local = match self.repeat {
            Repeat::Once if local >= cycle => return Some(last.to),
            Repeat::Once => local,
            Repeat::Forever if cycle == 0 => return Some(last.to),
            Repeat::Forever => local % cycle,
        };

        for segment in &self.segments {
            let duration = u64::from(segment.duration_ms);
            if local < duration {
                return Some(segment.sample(local));
            }
            local -= duration;
        }
        Some(last.to)
    }

    /// Number of cycles begun by `elapsed_ms` (0 before start).
    fn cycles_begun(
        &self,
        elapsed_ms: u64,
    ) -> u64 {
        match elapsed_ms.checked_sub(u64::from(self.start_ms)) {
            None => 0,
            Some(local) => match self.cycle_ms() {
                0 => 1,
                cycle => local / cycle + 1,
            },
        }
    }

    /// Report boundaries with `prev < t <= now` to `sink`.
    fn events_between<F>(
        &self,
        prev: Option<u64>,
        now: u64,
        sink: &mut F,
    ) where
        F: FnMut(TimelineEvent),
    {
        let crossed = |t: u64| prev.is_none_or(|p| p < t) && t <= now;

        if crossed(u64::from(self.start_ms)) {
            sink(TimelineEvent::Started(self.channel));
        }

        match self.repeat {
            Repeat::Once => {
                if let Some(end) = self.end_ms()
                    && crossed(end)
                {
                    sink(TimelineEvent::Completed(self.channel));
                }
            }
            Repeat::Forever => {
                let before = prev.map_or(0, |p| self.cycles_begun(p));
                let after = self.cycles_begun(now);
                // Wraps skipped by a stall coalesce into the latest one
                if after > before && after >= 2 {
                    sink(TimelineEvent::CycleStarted {
                        channel: self.channel,
                        cycle: (after - 1) as u32,
                    });
                }
            }
        }
    }
}

// =============================================================================
// Timeline Configuration
// =============================================================================

/// Tunable durations for the splash timeline.
///
/// `Default` reproduces the constants in [`crate::config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineConfig {
    pub scale_in_ms: u32,
    pub fade_in_ms: u32,
    pub float_half_period_ms: u32,
    pub dot_start_delay_ms: u32,
    pub dot_stagger_ms: u32,
    pub dot_ramp_ms: u32,
    /// Number of dots to animate, at most `DOT_COUNT`.
    pub dot_count: usize,
}

impl TimelineConfig {
    /// Start offset of dot `index`, measured from mount.
    #[inline]
    pub const fn dot_start_ms(
        &self,
        index: usize,
    ) -> u32 {
        self.dot_start_delay_ms + index as u32 * self.dot_stagger_ms
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            scale_in_ms: SCALE_IN_MS,
            fade_in_ms: FADE_IN_MS,
            float_half_period_ms: FLOAT_HALF_PERIOD_MS,
            dot_start_delay_ms: DOT_START_DELAY_MS,
            dot_stagger_ms: DOT_STAGGER_MS,
            dot_ramp_ms: DOT_RAMP_MS,
            dot_count: DOT_COUNT,
        }
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Fixed-capacity table of tracks, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track, MAX_TRACKS>,
}

impl Timeline {
    /// Empty timeline.
    pub const fn new() -> Self { Self { tracks: Vec::new() } }

    /// The canonical splash schedule with default durations.
    pub fn splash() -> Self { Self::from_config(&TimelineConfig::default()) }

    /// The splash schedule with custom durations.
    pub fn from_config(config: &TimelineConfig) -> Self {
        let scale = Track::new(Channel::Scale, 0).then(Segment::new(0.0, 1.0, config.scale_in_ms, Easing::EaseOutCubic));

        // Fade is sequenced after the scale, not parallel to it
        let fade_start = scale.end_ms().unwrap_or(0) as u32;
        let fade = Track::new(Channel::Fade, fade_start).then(Segment::new(0.0, 1.0, config.fade_in_ms, Easing::Linear));

        let rotate = Track::new(Channel::Rotate, 0)
            .then(Segment::new(0.0, 1.0, config.float_half_period_ms, Easing::SmoothStep))
            .then(Segment::new(1.0, 0.0, config.float_half_period_ms, Easing::SmoothStep))
            .forever();

        let mut timeline = Self::new().with(scale).with(fade).with(rotate);

        for index in 0..config.dot_count.min(DOT_COUNT) {
            let dot = Track::new(Channel::Dot(index as u8), config.dot_start_ms(index))
                .then(Segment::new(0.0, 1.0, config.dot_ramp_ms, Easing::SmoothStep))
                .then(Segment::new(1.0, 0.0, config.dot_ramp_ms, Easing::SmoothStep))
                .forever();
            timeline = timeline.with(dot);
        }

        timeline
    }

    /// Append a track. Tracks past `MAX_TRACKS` are dropped with a warning.
    #[must_use]
    pub fn with(
        mut self,
        track: Track,
    ) -> Self {
        if let Err(track) = self.tracks.push(track) {
            log::warn!("timeline is full, {} track dropped", track.channel);
        }
        self
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] { &self.tracks }

    /// Number of looping tracks.
    pub fn loop_count(&self) -> usize { self.tracks.iter().filter(|t| t.is_loop()).count() }

    /// First track writing `channel`, if any.
    pub fn track(
        &self,
        channel: Channel,
    ) -> Option<&Track> {
        self.tracks.iter().find(|t| t.channel == channel)
    }

    /// Report every boundary with `prev < t <= now`, in track order.
    ///
    /// `prev = None` means "nothing observed yet", so boundaries at 0 are
    /// reported on the first call.
    pub fn events_between<F>(
        &self,
        prev: Option<u64>,
        now: u64,
        mut sink: F,
    ) where
        F: FnMut(TimelineEvent),
    {
        for track in &self.tracks {
            track.events_between(prev, now, &mut sink);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
