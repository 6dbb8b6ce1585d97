use crate::foundation::error::{FramescrollError, FramescrollResult};

pub use kurbo::{Point, Rect, Size};

/// 0-based index into a frame sequence.
///
/// Files on disk are numbered from 1, see [`FrameIndex::ordinal`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// 1-based frame number, as used in file names and the on-page counter.
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> FramescrollResult<Self> {
        if start.0 > end.0 {
            return Err(FramescrollError::validation(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// The full range `[0, total)`.
    pub fn all(total: usize) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(total),
        }
    }

    /// Inclusive window of `radius` frames on each side of `center`, clipped to `[0, total)`.
    pub fn window(center: FrameIndex, radius: usize, total: usize) -> Self {
        if total == 0 {
            return Self::all(0);
        }
        let last = total - 1;
        let center = center.0.min(last);
        Self {
            start: FrameIndex(center.saturating_sub(radius)),
            end: FrameIndex(center.saturating_add(radius).min(last) + 1),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> usize {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 >= self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate over every index in the range.
    pub fn indices(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }

    /// Split into consecutive sub-ranges of at most `size` frames.
    ///
    /// A `size` of zero is treated as one.
    pub fn chunks(self, size: usize) -> impl Iterator<Item = FrameRange> {
        let size = size.max(1);
        let end = self.end.0;
        (self.start.0..end).step_by(size).map(move |s| FrameRange {
            start: FrameIndex(s),
            end: FrameIndex((s + size).min(end)),
        })
    }
}

/// Window inner dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from inner dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas backing size matching this viewport (fractional pixels truncate).
    pub fn canvas(self) -> Canvas {
        fn px(v: f64) -> u32 {
            if v.is_finite() && v > 0.0 {
                v.min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        }
        Canvas {
            width: px(self.width),
            height: px(self.height),
        }
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Return `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size as floating-point geometry.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Bounding geometry of a tracked page section, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionRect {
    /// Distance from the viewport top to the section top; negative once scrolled past.
    pub top: f64,
    /// Full section height.
    pub height: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
