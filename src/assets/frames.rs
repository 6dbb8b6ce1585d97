use std::sync::Arc;

use crate::foundation::core::{FrameIndex, FrameRange};

/// State of one slot in a [`FrameSet`].
#[derive(Debug)]
pub enum FrameSlot<I> {
    /// Never requested.
    Empty,
    /// Requested, not yet settled.
    Pending,
    /// Fetched successfully.
    Loaded(Arc<I>),
    /// Fetch failed; shows the nearest earlier loaded frame instead.
    Fallback {
        /// Index whose image is borrowed.
        source: FrameIndex,
        /// Shared handle of that image.
        image: Arc<I>,
    },
    /// Fetch failed and no earlier frame had loaded.
    Missing,
}

impl<I> FrameSlot<I> {
    /// Displayable handle, if any.
    pub fn image(&self) -> Option<&Arc<I>> {
        match self {
            Self::Loaded(image) | Self::Fallback { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Return `true` for a slot that holds its own successfully fetched image.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Return `true` when a fetch is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// How a fetch settled into the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The image was stored.
    Loaded,
    /// The failure was covered by an earlier frame.
    Fallback(FrameIndex),
    /// The failure left the slot without an image.
    Missing,
}

/// Resolved-versus-total counter gating playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadProgress {
    /// Slots that settled at least once, successfully or not.
    pub resolved: usize,
    /// Sequence length.
    pub total: usize,
}

impl LoadProgress {
    /// Return `true` once every slot settled.
    pub fn is_complete(self) -> bool {
        self.resolved >= self.total
    }

    /// Completion ratio in `[0, 1]`; an empty sequence counts as complete.
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.resolved as f64 / self.total as f64
    }
}

/// Ordered frame cache. Slots are only ever upgraded, never cleared.
#[derive(Debug)]
pub struct FrameSet<I> {
    slots: Vec<FrameSlot<I>>,
    settled: Vec<bool>,
    resolved: usize,
}

impl<I> FrameSet<I> {
    /// Create `total` empty slots.
    pub fn new(total: usize) -> Self {
        Self {
            slots: (0..total).map(|_| FrameSlot::Empty).collect(),
            settled: vec![false; total],
            resolved: 0,
        }
    }

    /// Sequence length.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` for a zero-length sequence.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`.
    pub fn slot(&self, index: FrameIndex) -> Option<&FrameSlot<I>> {
        self.slots.get(index.0)
    }

    /// Displayable image at `index`, loaded or fallback.
    pub fn image(&self, index: FrameIndex) -> Option<&Arc<I>> {
        self.slot(index).and_then(FrameSlot::image)
    }

    /// Load counter.
    pub fn progress(&self) -> LoadProgress {
        LoadProgress {
            resolved: self.resolved,
            total: self.slots.len(),
        }
    }

    /// Whether `index` should be fetched: it has no image and nothing is in flight.
    pub fn wants_fetch(&self, index: FrameIndex) -> bool {
        matches!(
            self.slot(index),
            Some(FrameSlot::Empty | FrameSlot::Missing)
        )
    }

    /// Mark `index` as in flight. Returns `false` if it does not want a fetch.
    pub fn mark_pending(&mut self, index: FrameIndex) -> bool {
        if !self.wants_fetch(index) {
            return false;
        }
        self.slots[index.0] = FrameSlot::Pending;
        true
    }

    /// Indices inside `range` that want a fetch.
    pub fn unrequested_in(&self, range: FrameRange) -> Vec<FrameIndex> {
        range.indices().filter(|&i| self.wants_fetch(i)).collect()
    }

    /// Store a successful fetch.
    pub fn resolve_loaded(&mut self, index: FrameIndex, image: I) -> Resolution {
        let Some(slot) = self.slots.get_mut(index.0) else {
            return Resolution::Missing;
        };
        *slot = FrameSlot::Loaded(Arc::new(image));
        self.mark_settled(index);
        Resolution::Loaded
    }

    /// Record a failed fetch, borrowing the nearest earlier loaded frame.
    ///
    /// A slot that already holds an image keeps it.
    pub fn resolve_failed(&mut self, index: FrameIndex) -> Resolution {
        if index.0 >= self.slots.len() {
            return Resolution::Missing;
        }
        let resolution = match &self.slots[index.0] {
            FrameSlot::Loaded(_) => Resolution::Loaded,
            FrameSlot::Fallback { source, .. } => Resolution::Fallback(*source),
            _ => match self.nearest_loaded_before(index) {
                Some((source, image)) => {
                    self.slots[index.0] = FrameSlot::Fallback { source, image };
                    Resolution::Fallback(source)
                }
                None => {
                    self.slots[index.0] = FrameSlot::Missing;
                    Resolution::Missing
                }
            },
        };
        self.mark_settled(index);
        resolution
    }

    fn nearest_loaded_before(&self, index: FrameIndex) -> Option<(FrameIndex, Arc<I>)> {
        self.slots[..index.0]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, slot)| match slot {
                FrameSlot::Loaded(image) => Some((FrameIndex(i), Arc::clone(image))),
                _ => None,
            })
    }

    fn mark_settled(&mut self, index: FrameIndex) {
        if !self.settled[index.0] {
            self.settled[index.0] = true;
            self.resolved += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frames.rs"]
mod tests;
