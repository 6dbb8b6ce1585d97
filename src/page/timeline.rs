use std::{collections::BTreeMap, time::Duration};

/// Deferred cues ordered by due time, then by scheduling order.
///
/// The host drives time explicitly through [`Timeline::advance_to`]; nothing fires
/// on its own.
#[derive(Debug)]
pub struct Timeline<C> {
    queue: BTreeMap<(Duration, u64), C>,
    next_seq: u64,
    now: Duration,
}

impl<C> Default for Timeline<C> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            next_seq: 0,
            now: Duration::ZERO,
        }
    }
}

impl<C> Timeline<C> {
    /// Empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest time passed to [`Timeline::advance_to`].
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of cues still waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Return `true` when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule `cue` at absolute time `due`.
    pub fn schedule_at(&mut self, due: Duration, cue: C) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((due, seq), cue);
    }

    /// Due time of the earliest waiting cue.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Move time forward and return every cue due by then, in order.
    ///
    /// Time never moves backwards; an earlier `now` is treated as the current time.
    pub fn advance_to(&mut self, now: Duration) -> Vec<C> {
        self.now = self.now.max(now);
        let mut due = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/timeline.rs"]
mod tests;
