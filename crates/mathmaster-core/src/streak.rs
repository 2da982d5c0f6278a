//! Consecutive-correct streak tracking.
//!
//! A small state machine over "broken" (count 0) and "building" (count ≥ 1).
//! The events it emits are advisory, for display only; they never feed back
//! into stored results or scores.

/// Notification emitted by [`StreakTracker::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakEvent {
    /// The streak reached a multiple of the threshold (3, 6, 9, ...).
    Milestone(u32),
    /// A streak of at least the threshold just ended.
    Broken,
}

/// Tracks consecutive correct answers within one session.
#[derive(Debug, Clone)]
pub struct StreakTracker {
    count: u32,
    threshold: u32,
}

impl StreakTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
        }
    }

    /// Current streak length; 0 when broken.
    pub fn current(&self) -> u32 {
        self.count
    }

    /// Record the outcome of a round and return any display event.
    ///
    /// After a correct answer the returned state reflects the increment, so
    /// callers can feed [`current`](Self::current) straight into scoring.
    pub fn record(&mut self, correct: bool) -> Option<StreakEvent> {
        if correct {
            self.count += 1;
            if self.count >= self.threshold && self.count % self.threshold == 0 {
                return Some(StreakEvent::Milestone(self.count));
            }
            None
        } else {
            let was_notable = self.count >= self.threshold;
            self.count = 0;
            was_notable.then_some(StreakEvent::Broken)
        }
    }
}

impl Default for StreakTracker {
    fn default() -> Self {
        Self::new(3)
    }
}
