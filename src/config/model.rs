use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::foundation::{
    core::FrameIndex,
    error::{FramescrollError, FramescrollResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Top-level player configuration.
///
/// Every field has a default, so a JSON document only needs to name what it overrides.
pub struct PlayerConfig {
    /// Number of frames in the sequence.
    pub total_frames: usize,
    /// Frames fetched concurrently per preload batch.
    pub batch_size: usize,
    /// Pause between preload batches, in milliseconds.
    pub batch_yield_ms: u64,
    /// Prefetch radius around the displayed frame.
    pub preload_distance: usize,
    /// How frame indices map to resource paths.
    pub naming: FrameNaming,
    /// Hero text states and the progress thresholds that select them.
    pub text: TextTrack,
    /// Delay between fading out the hero text and swapping it.
    pub text_swap_delay_ms: u64,
    /// Second-section fade window.
    pub feature: FeatureFade,
    /// Timings of the post-preload reveal script.
    pub reveal: RevealTimings,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            total_frames: 401,
            batch_size: 20,
            batch_yield_ms: 10,
            preload_distance: 50,
            naming: FrameNaming::default(),
            text: TextTrack::default(),
            text_swap_delay_ms: 200,
            feature: FeatureFade::default(),
            reveal: RevealTimings::default(),
        }
    }
}

impl PlayerConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(s: &str) -> FramescrollResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| FramescrollError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> FramescrollResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> FramescrollResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramescrollError::config(e.to_string()))
    }

    /// Check structural invariants.
    pub fn validate(&self) -> FramescrollResult<()> {
        if self.total_frames == 0 {
            return Err(FramescrollError::validation("total_frames must be > 0"));
        }
        if self.batch_size == 0 {
            return Err(FramescrollError::validation("batch_size must be > 0"));
        }
        self.naming.validate()?;
        self.text.validate()?;
        self.feature.validate()?;
        Ok(())
    }

    /// Pause between preload batches.
    pub fn batch_yield(&self) -> Duration {
        Duration::from_millis(self.batch_yield_ms)
    }

    /// Delay before faded-out hero text is replaced.
    pub fn text_swap_delay(&self) -> Duration {
        Duration::from_millis(self.text_swap_delay_ms)
    }

    /// Resource path of one frame.
    pub fn frame_path(&self, index: FrameIndex) -> String {
        self.naming.path_for(index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// `<base><prefix><zero-padded index+1><ext>` naming scheme.
pub struct FrameNaming {
    /// Directory or URL prefix, usually ending in `/`.
    pub base_path: String,
    /// File name prefix.
    pub prefix: String,
    /// Extension including the leading dot.
    pub extension: String,
    /// Minimum digit count of the frame number.
    pub padding: usize,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            base_path: "./frames/".to_string(),
            prefix: "frame_".to_string(),
            extension: ".avif".to_string(),
            padding: 4,
        }
    }
}

impl FrameNaming {
    /// Resource path for `index`.
    pub fn path_for(&self, index: FrameIndex) -> String {
        format!(
            "{}{}{:0width$}{}",
            self.base_path,
            self.prefix,
            index.ordinal(),
            self.extension,
            width = self.padding
        )
    }

    fn validate(&self) -> FramescrollResult<()> {
        if self.padding > 12 {
            return Err(FramescrollError::validation("naming padding must be <= 12"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One hero copy variant.
pub struct TextState {
    /// Headline.
    pub title: String,
    /// Supporting line.
    pub subtitle: String,
    /// Call-to-action label.
    pub cta: String,
}

impl TextState {
    fn new(title: &str, subtitle: &str, cta: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            cta: cta.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Ordered text states and ascending progress thresholds between them.
///
/// `states[i]` is shown while exactly `i` change points are `<= progress`.
pub struct TextTrack {
    /// Ascending thresholds in `[0, 1]`.
    pub change_points: Vec<f64>,
    /// One more state than there are change points.
    pub states: Vec<TextState>,
}

impl Default for TextTrack {
    fn default() -> Self {
        Self {
            change_points: vec![0.25, 0.6],
            states: vec![
                TextState::new(
                    "MG Cyberster",
                    "Because turning heads is just the beginning.",
                    "DOWNLOAD BROCHURE",
                ),
                TextState::new(
                    "Not Designed For Subtlety",
                    "Convertible Roof. Electric Scissor Doors.",
                    "DOWNLOAD BROCHURE",
                ),
                TextState::new(
                    "Electric Excellence",
                    "The future of driving is here.",
                    "EXPLORE MORE",
                ),
            ],
        }
    }
}

impl TextTrack {
    fn validate(&self) -> FramescrollResult<()> {
        if self.states.len() != self.change_points.len() + 1 {
            return Err(FramescrollError::validation(format!(
                "text track needs {} states for {} change points, got {}",
                self.change_points.len() + 1,
                self.change_points.len(),
                self.states.len()
            )));
        }
        let mut prev = 0.0;
        for &p in &self.change_points {
            if !(0.0..=1.0).contains(&p) {
                return Err(FramescrollError::validation(
                    "text change points must be within [0, 1]",
                ));
            }
            if p < prev {
                return Err(FramescrollError::validation(
                    "text change points must be ascending",
                ));
            }
            prev = p;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Progress window over which the second-section image fades out.
pub struct FeatureFade {
    /// Image fully opaque at or below this progress.
    pub fade_start: f64,
    /// Image fully transparent and content shown above this progress.
    pub fade_end: f64,
}

impl Default for FeatureFade {
    fn default() -> Self {
        Self {
            fade_start: 0.3,
            fade_end: 0.6,
        }
    }
}

impl FeatureFade {
    fn validate(&self) -> FramescrollResult<()> {
        let ok = self.fade_start >= 0.0 && self.fade_start < self.fade_end && self.fade_end <= 1.0;
        if !ok {
            return Err(FramescrollError::validation(
                "feature fade must satisfy 0 <= fade_start < fade_end <= 1",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Delays of the reveal script, in milliseconds.
///
/// The first two are measured from preload completion. The rest chain off the
/// preloader fade, mirroring how the page choreographs its intro.
pub struct RevealTimings {
    /// Preload completion to logo shrink.
    pub logo_shrink_ms: u64,
    /// Logo shrink to header blend-in.
    pub header_blend_ms: u64,
    /// Logo shrink to preloader fade-out.
    pub preloader_fade_ms: u64,
    /// Preloader fade to header fully visible.
    pub header_show_ms: u64,
    /// Preloader fade to hero start (interactive playback).
    pub hero_start_ms: u64,
    /// Preloader fade to preloader removal.
    pub preloader_remove_ms: u64,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            logo_shrink_ms: 1500,
            header_blend_ms: 1700,
            preloader_fade_ms: 2000,
            header_show_ms: 200,
            hero_start_ms: 500,
            preloader_remove_ms: 1000,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
