//! Ring buffer of recent timeline events.
//!
//! Keeps the last `EVENT_LOG_SIZE` events with their timestamps for the
//! debug overlay. Old events are dropped when the buffer is full.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push(1000, TimelineEvent::Started(Channel::Dot(0)));
//!
//! for entry in log.iter() {
//!     println!("{:>6}ms {}", entry.at_ms, entry.event);
//! }
//! ```

use heapless::Deque;

use crate::config::EVENT_LOG_SIZE;
use crate::timeline::TimelineEvent;

/// A timeline event and when the sequencer observed it (ms since mount).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggedEvent {
    pub at_ms: u64,
    pub event: TimelineEvent,
}

/// Ring buffer of timeline events.
pub struct EventLog {
    buffer: Deque<LoggedEvent, EVENT_LOG_SIZE>,
}

impl EventLog {
    /// Create a new empty event log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Record an event. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        at_ms: u64,
        event: TimelineEvent,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(LoggedEvent { at_ms, event }).ok();
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> { self.buffer.iter() }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&LoggedEvent> { self.buffer.back() }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Channel;

    #[test]
    fn test_event_log_starts_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_event_log_keeps_order() {
        let mut log = EventLog::new();
        log.push(0, TimelineEvent::Started(Channel::Scale));
        log.push(800, TimelineEvent::Completed(Channel::Scale));

        let times: std::vec::Vec<u64> = log.iter().map(|e| e.at_ms).collect();
        assert_eq!(times, [0, 800]);
        assert_eq!(log.latest().unwrap().event, TimelineEvent::Completed(Channel::Scale));
    }

    #[test]
    fn test_event_log_drops_oldest_when_full() {
        let mut log = EventLog::new();
        for i in 0..(EVENT_LOG_SIZE as u64 + 3) {
            log.push(i, TimelineEvent::Started(Channel::Rotate));
        }
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert_eq!(log.iter().next().unwrap().at_ms, 3, "Oldest entries should be dropped");
        assert_eq!(log.latest().unwrap().at_ms, EVENT_LOG_SIZE as u64 + 2);
    }

    #[test]
    fn test_event_log_clear() {
        let mut log = EventLog::new();
        log.push(5, TimelineEvent::Started(Channel::Fade));
        log.clear();
        assert!(log.is_empty());
    }
}
