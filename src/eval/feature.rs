use crate::{
    config::model::FeatureFade,
    foundation::math::{clamp01, inverse_lerp},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Second-section parallax state for one progress value.
pub struct FeatureSample {
    /// Clamped section progress.
    pub progress: f64,
    /// Vertical background position, in percent.
    pub background_y_percent: f64,
    /// Foreground image opacity in `[0, 1]`.
    pub image_opacity: f64,
    /// Whether the alternate section content is shown.
    pub content_visible: bool,
}

/// Evaluate the second-section fade.
///
/// Opaque up to `fade_start`, linear fade until `fade_end`, transparent (with the
/// alternate content shown) beyond it.
pub fn evaluate_feature(progress: f64, fade: &FeatureFade) -> FeatureSample {
    let progress = clamp01(progress);
    let (image_opacity, content_visible) = if progress <= fade.fade_start {
        (1.0, false)
    } else if progress <= fade.fade_end {
        let t = inverse_lerp(fade.fade_start, fade.fade_end, progress);
        (clamp01(1.0 - t), false)
    } else {
        (0.0, true)
    };

    FeatureSample {
        progress,
        background_y_percent: progress * 100.0,
        image_opacity,
        content_visible,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/feature.rs"]
mod tests;
