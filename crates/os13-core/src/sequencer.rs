//! Virtual-time event sequencer.
//!
//! Actions fire in order of absolute fire time; equal fire times keep
//! registration order. Time is whatever the caller says it is, so the
//! surface drives it from a monotonic clock and tests drive it by hand.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::debug;

#[derive(Debug)]
struct Entry<A> {
    fire_at: u64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

/// One-shot timers over an owned action type.
///
/// Every scheduled action is handed out exactly once by [`pop_due`]. After
/// [`shutdown`] the queue is empty and further scheduling is ignored, so
/// actions aimed at a torn-down surface never run.
///
/// [`pop_due`]: EventSequencer::pop_due
/// [`shutdown`]: EventSequencer::shutdown
#[derive(Debug)]
pub struct EventSequencer<A> {
    queue: BinaryHeap<Reverse<Entry<A>>>,
    next_seq: u64,
    shut_down: bool,
}

impl<A> Default for EventSequencer<A> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            next_seq: 0,
            shut_down: false,
        }
    }
}

impl<A> EventSequencer<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire `delay` ms after `now`.
    ///
    /// Returns false if the sequencer has been shut down.
    pub fn schedule(&mut self, now: u64, delay: u64, action: A) -> bool {
        if self.shut_down {
            return false;
        }
        let fire_at = now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        debug!(fire_at, seq, "Scheduled action");
        self.queue.push(Reverse(Entry {
            fire_at,
            seq,
            action,
        }));
        true
    }

    /// Removes and returns the earliest action due at or before `now`,
    /// with its fire time.
    pub fn pop_due(&mut self, now: u64) -> Option<(u64, A)> {
        if self.queue.peek()?.0.fire_at > now {
            return None;
        }
        self.queue
            .pop()
            .map(|Reverse(entry)| (entry.fire_at, entry.action))
    }

    /// Fire time of the earliest pending action.
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(entry)| entry.fire_at)
    }

    /// Drops every pending action and refuses new ones.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(sequencer: &mut EventSequencer<&'static str>, now: u64) -> Vec<&'static str> {
        std::iter::from_fn(|| sequencer.pop_due(now))
            .map(|(_, action)| action)
            .collect()
    }

    #[test]
    fn test_fires_in_delay_order() {
        let mut sequencer = EventSequencer::new();
        sequencer.schedule(0, 2000, "c");
        sequencer.schedule(0, 1000, "b");
        sequencer.schedule(0, 0, "a");

        assert_eq!(drain(&mut sequencer, 5000), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_fire_times_keep_registration_order() {
        let mut sequencer = EventSequencer::new();
        for name in ["first", "second", "third"] {
            sequencer.schedule(100, 500, name);
        }
        assert_eq!(drain(&mut sequencer, 600), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_handlers_interleave_by_absolute_time() {
        let mut sequencer = EventSequencer::new();
        // First handler at t=0, second at t=500.
        sequencer.schedule(0, 1000, "a@1000");
        sequencer.schedule(0, 2000, "a@2000");
        sequencer.schedule(500, 1000, "b@1500");
        sequencer.schedule(500, 500, "b@1000");

        assert_eq!(
            drain(&mut sequencer, 3000),
            vec!["a@1000", "b@1000", "b@1500", "a@2000"]
        );
    }

    #[test]
    fn test_nothing_fires_early_or_twice() {
        let mut sequencer = EventSequencer::new();
        sequencer.schedule(0, 1000, "once");

        assert!(sequencer.pop_due(999).is_none());
        assert_eq!(sequencer.pop_due(1000), Some((1000, "once")));
        assert!(sequencer.pop_due(10_000).is_none());
        assert_eq!(sequencer.next_deadline(), None);
    }

    #[test]
    fn test_next_deadline() {
        let mut sequencer = EventSequencer::new();
        assert_eq!(sequencer.next_deadline(), None);
        sequencer.schedule(10, 300, "x");
        sequencer.schedule(10, 100, "y");
        assert_eq!(sequencer.next_deadline(), Some(110));
    }

    #[test]
    fn test_shutdown_drops_pending_and_ignores_new() {
        let mut sequencer = EventSequencer::new();
        sequencer.schedule(0, 100, "pending");
        sequencer.shutdown();

        assert_eq!(sequencer.next_deadline(), None);
        assert!(!sequencer.schedule(0, 100, "late"));
        assert!(sequencer.pop_due(u64::MAX).is_none());
    }
}
