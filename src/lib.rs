//! framescroll drives scroll-linked frame-sequence animation.
//!
//! A sequence of still images is preloaded in batches, and the frame matching the
//! current scroll position is drawn onto a canvas-like [`Surface`], while hero copy
//! and a second page section follow along.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`FrameLoader`] fetches frames through a [`FrameSource`], batch by
//!    batch, substituting the nearest earlier frame when one fails.
//! 2. **Evaluate**: [`ScrollEvaluator`] maps section geometry to progress, frame
//!    index and text state. It is pure and has no IO.
//! 3. **Render**: [`Playback`] draws the selected frame cover-fitted onto a
//!    [`Surface`].
//! 4. **Orchestrate**: [`HeroController`] ties the above to scroll, resize and
//!    timer events coming from a [`PageHost`].
//!
//! Browser bindings implement the collaborator traits directly; [`HeadlessPage`],
//! [`FsFrameSource`], [`TokioTimer`] and [`CpuSurface`] run the same pipeline
//! natively.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod eval;
mod foundation;
mod page;
mod player;
mod render;

pub use assets::decode::{DecodedFrame, decode_frame};
pub use assets::frames::{FrameSet, FrameSlot, LoadProgress, Resolution};
pub use assets::fs_source::{FsFrameSource, TokioTimer};
pub use assets::loader::{FrameLoader, FrameSource, Timer};
pub use config::model::{
    FeatureFade, FrameNaming, PlayerConfig, RevealTimings, TextState, TextTrack,
};
pub use eval::feature::{FeatureSample, evaluate_feature};
pub use eval::progress::{
    ScrollEvaluator, ScrollSample, frame_for_progress, section_progress,
};
pub use eval::text::text_state_index;
pub use foundation::core::{
    Canvas, FrameIndex, FrameRange, Point, Rect, SectionRect, Size, Viewport,
};
pub use foundation::error::{FramescrollError, FramescrollResult};
pub use page::element::{
    BACKGROUND_POSITION_PROPERTY, Element, SCROLL_PROGRESS_PROPERTY, class,
};
pub use page::headless::{ElementState, HeadlessPage, SectionLayout};
pub use page::host::{PageAction, PageHost};
pub use page::timeline::Timeline;
pub use player::controller::{HeroController, Phase};
pub use render::cpu::{CpuSurface, CpuSurfaceOpts, FrameRGBA};
pub use render::fit::cover_rect;
pub use render::playback::Playback;
pub use render::surface::{FrameImage, Surface};
