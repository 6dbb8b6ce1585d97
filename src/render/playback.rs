use crate::{
    assets::frames::FrameSet,
    foundation::{
        core::{Canvas, FrameIndex},
        error::FramescrollResult,
    },
    render::{
        fit::cover_rect,
        surface::{FrameImage, Surface},
    },
};

/// Draws frames once the sequence is ready and remembers the current one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Playback {
    current: FrameIndex,
    armed: bool,
}

impl Playback {
    /// Disarmed playback positioned at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow drawing; called once preload completes.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Return `true` once preload completed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Last frame actually drawn.
    pub fn current(&self) -> FrameIndex {
        self.current
    }

    /// Draw `index` cover-fitted onto `surface`.
    ///
    /// Skips silently (returns `Ok(false)`) before arming or when the slot has no
    /// image yet.
    pub fn draw<C: Surface>(
        &mut self,
        surface: &mut C,
        frames: &FrameSet<C::Image>,
        index: FrameIndex,
    ) -> FramescrollResult<bool> {
        if !self.armed {
            return Ok(false);
        }
        let Some(image) = frames.image(index) else {
            return Ok(false);
        };

        surface.clear();
        if let Some(dest) = cover_rect(surface.size().size(), image.size()) {
            surface.draw_image(image, dest)?;
        }
        self.current = index;
        Ok(true)
    }

    /// Redraw the current frame, e.g. after the surface changed size.
    pub fn redraw<C: Surface>(
        &mut self,
        surface: &mut C,
        frames: &FrameSet<C::Image>,
    ) -> FramescrollResult<bool> {
        self.draw(surface, frames, self.current)
    }

    /// Resize `surface` to `canvas` and redraw the current frame if armed.
    pub fn resize<C: Surface>(
        &mut self,
        surface: &mut C,
        frames: &FrameSet<C::Image>,
        canvas: Canvas,
    ) -> FramescrollResult<bool> {
        surface.resize(canvas);
        self.redraw(surface, frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/playback.rs"]
mod tests;
