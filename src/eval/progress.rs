use crate::{
    config::model::PlayerConfig,
    eval::text::text_state_index,
    foundation::{
        core::{FrameIndex, SectionRect},
        math::clamp01,
    },
};

/// Scroll progress through a tracked section, in `[0, 1]`.
///
/// Progress is `-top / (height - viewport_height)`, clamped. A section that fits
/// inside the viewport has no scroll travel; it reads 0 until its top passes the
/// viewport top and 1 afterwards.
pub fn section_progress(rect: SectionRect, viewport_height: f64) -> f64 {
    let travel = rect.height - viewport_height;
    if !travel.is_finite() || travel <= 0.0 {
        return if rect.top < 0.0 { 1.0 } else { 0.0 };
    }
    clamp01(-rect.top / travel)
}

/// Frame shown at `progress`: `floor(progress * (total - 1))`.
pub fn frame_for_progress(progress: f64, total_frames: usize) -> FrameIndex {
    let last = total_frames.saturating_sub(1);
    let idx = (clamp01(progress) * last as f64).floor() as usize;
    FrameIndex(idx.min(last))
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Everything the hero derives from one progress value.
pub struct ScrollSample {
    /// Clamped hero progress.
    pub progress: f64,
    /// Frame to display.
    pub frame: FrameIndex,
    /// Selected text state index.
    pub text_state: usize,
    /// Scroll indicator fill, in percent.
    pub scroll_line_percent: f64,
}

/// Stateless evaluator from scroll geometry to hero state.
pub struct ScrollEvaluator;

impl ScrollEvaluator {
    /// Sample hero state at an explicit progress value.
    pub fn sample(config: &PlayerConfig, progress: f64) -> ScrollSample {
        let progress = clamp01(progress);
        ScrollSample {
            progress,
            frame: frame_for_progress(progress, config.total_frames),
            text_state: text_state_index(progress, &config.text.change_points),
            scroll_line_percent: progress * 100.0,
        }
    }

    /// Sample hero state from the hero section's bounding geometry.
    pub fn sample_section(
        config: &PlayerConfig,
        rect: SectionRect,
        viewport_height: f64,
    ) -> ScrollSample {
        Self::sample(config, section_progress(rect, viewport_height))
    }

    /// Evenly spaced samples over `[0, 1]`, both ends included.
    pub fn sweep(config: &PlayerConfig, steps: usize) -> Vec<ScrollSample> {
        if steps <= 1 {
            return vec![Self::sample(config, 0.0)];
        }
        (0..steps)
            .map(|i| Self::sample(config, i as f64 / (steps - 1) as f64))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/progress.rs"]
mod tests;
