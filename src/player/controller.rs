use std::time::Duration;

use crate::{
    assets::{
        frames::LoadProgress,
        loader::{FrameLoader, FrameSource, Timer},
    },
    config::model::PlayerConfig,
    eval::{
        feature::{FeatureSample, evaluate_feature},
        progress::{ScrollEvaluator, ScrollSample, section_progress},
    },
    foundation::{
        core::{FrameIndex, Viewport},
        error::{FramescrollError, FramescrollResult},
    },
    page::{
        element::{BACKGROUND_POSITION_PROPERTY, Element, SCROLL_PROGRESS_PROPERTY, class},
        host::{PageAction, PageHost},
        timeline::Timeline,
    },
    render::{playback::Playback, surface::Surface},
};

const HERO_TEXT: [Element; 3] = [Element::HeroTitle, Element::HeroSubtitle, Element::HeroCta];

/// Lifecycle phase of a [`HeroController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Frames are loading; the preloader overlay is up.
    Preloading,
    /// Frames are ready; the intro script is running.
    Revealing,
    /// Scroll drives playback.
    Interactive,
}

#[derive(Clone, Debug, PartialEq)]
enum Cue {
    Page(PageAction),
    StartHero,
    SwapText(usize),
}

/// Scroll-linked hero player: loads the sequence, runs the intro and keeps the
/// canvas, hero copy and second section in step with scrolling.
///
/// The host forwards window events (`on_scroll`, `on_animation_frame`,
/// `on_resize`) and drives deferred work with `advance`.
pub struct HeroController<S, C, P>
where
    S: FrameSource,
    C: Surface<Image = S::Image>,
    P: PageHost,
{
    config: PlayerConfig,
    loader: FrameLoader<S>,
    surface: C,
    page: P,
    playback: Playback,
    timeline: Timeline<Cue>,
    phase: Phase,
    ticking: bool,
    text_displayed: usize,
    text_pending: Option<usize>,
    last_sample: Option<ScrollSample>,
}

impl<S, C, P> HeroController<S, C, P>
where
    S: FrameSource,
    C: Surface<Image = S::Image>,
    P: PageHost,
{
    /// Validate `config`, check the page markup and size the surface to the viewport.
    ///
    /// The page is assumed to show text state 0 initially.
    pub fn new(
        config: PlayerConfig,
        source: S,
        mut surface: C,
        page: P,
    ) -> FramescrollResult<Self> {
        config.validate()?;

        let missing: Vec<&str> = Element::ALL
            .into_iter()
            .filter(|e| e.is_required() && !page.contains(*e))
            .map(Element::dom_id)
            .collect();
        if !missing.is_empty() {
            return Err(FramescrollError::page(format!(
                "missing required elements: {}",
                missing.join(", ")
            )));
        }

        surface.resize(page.viewport().canvas());
        let loader = FrameLoader::new(source, &config);

        Ok(Self {
            config,
            loader,
            surface,
            page,
            playback: Playback::new(),
            timeline: Timeline::new(),
            phase: Phase::Preloading,
            ticking: false,
            text_displayed: 0,
            text_pending: None,
            last_sample: None,
        })
    }

    /// Preload the whole sequence, then schedule the intro relative to `timer.now()`.
    ///
    /// Calling it again after completion is a no-op.
    #[tracing::instrument(skip_all)]
    pub async fn preload<T: Timer>(&mut self, timer: &T) -> LoadProgress {
        if self.loader.is_preloaded() {
            return self.loader.progress();
        }
        self.page.set_visible(Element::LoadingPlaceholder, false);

        let progress = self.loader.preload_all(timer).await;

        // The window may have changed size while frames were loading.
        self.surface.resize(self.page.viewport().canvas());
        self.playback.arm();
        self.phase = Phase::Revealing;
        self.schedule_reveal(timer.now());
        tracing::debug!(phase = ?self.phase, "frames ready, intro scheduled");
        progress
    }

    /// Fire every deferred cue due by `now` and apply settled prefetches.
    ///
    /// A failing cue does not stop the rest; the first error is returned once all
    /// due cues ran.
    pub fn advance(&mut self, now: Duration) -> FramescrollResult<()> {
        self.loader.pump();
        let mut first_err = None;
        for cue in self.timeline.advance_to(now) {
            let result = match cue {
                Cue::Page(action) => {
                    action.apply(&mut self.page);
                    Ok(())
                }
                Cue::StartHero => self.start_hero(),
                Cue::SwapText(index) => {
                    self.swap_text(index);
                    Ok(())
                }
            };
            if let Err(err) = result {
                tracing::warn!(error = %err, "deferred cue failed");
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Time of the next deferred cue, for arming a host timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Scroll event. Returns `true` when the host should request an animation frame.
    ///
    /// Bursts coalesce: only one update is pending at a time, and nothing is
    /// scheduled before preload completes.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking || !self.playback.is_armed() {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Animation-frame callback following an accepted scroll.
    ///
    /// Returns the hero sample that was applied, or `None` if no update was pending.
    pub fn on_animation_frame(
        &mut self,
        now: Duration,
    ) -> FramescrollResult<Option<ScrollSample>> {
        if !self.ticking {
            return Ok(None);
        }
        let result = self.update(now);
        self.ticking = false;
        result.map(Some)
    }

    /// Resize event: match the surface to the viewport and redraw the current frame.
    pub fn on_resize(&mut self) -> FramescrollResult<bool> {
        let canvas = self.page.viewport().canvas();
        let drawn = self
            .playback
            .resize(&mut self.surface, self.loader.frames(), canvas)?;
        if drawn {
            self.show_frame_number(self.playback.current());
        }
        Ok(drawn)
    }

    /// Wait for outstanding prefetches and apply them.
    pub async fn settle_prefetch(&mut self) -> usize {
        self.loader.settle().await
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last frame drawn.
    pub fn current_frame(&self) -> FrameIndex {
        self.playback.current()
    }

    /// Load counter.
    pub fn load_progress(&self) -> LoadProgress {
        self.loader.progress()
    }

    /// Text state currently shown (not counting a pending swap).
    pub fn displayed_text_state(&self) -> usize {
        self.text_displayed
    }

    /// Most recent hero sample.
    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last_sample
    }

    /// Player configuration.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Frame loader and cache.
    pub fn loader(&self) -> &FrameLoader<S> {
        &self.loader
    }

    /// Drawing surface.
    pub fn surface(&self) -> &C {
        &self.surface
    }

    /// Host page.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Host page, mutably (e.g. to scroll or resize a headless page).
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    fn schedule_reveal(&mut self, start: Duration) {
        let r = self.config.reveal;
        let ms = Duration::from_millis;
        let shrink = start + ms(r.logo_shrink_ms);
        let fade = shrink + ms(r.preloader_fade_ms);
        let header_show = fade + ms(r.header_show_ms);

        let cues = [
            (
                shrink,
                Cue::Page(PageAction::AddClass(Element::PreloaderLogo, class::SHRINK)),
            ),
            (
                shrink + ms(r.header_blend_ms),
                Cue::Page(PageAction::AddClass(
                    Element::Header,
                    class::SEAMLESS_TRANSITION,
                )),
            ),
            (
                fade,
                Cue::Page(PageAction::AddClass(Element::Preloader, class::FADE_OUT)),
            ),
            (
                header_show,
                Cue::Page(PageAction::RemoveClass(
                    Element::Header,
                    class::SEAMLESS_TRANSITION,
                )),
            ),
            (
                header_show,
                Cue::Page(PageAction::AddClass(Element::Header, class::VISIBLE)),
            ),
            (fade + ms(r.hero_start_ms), Cue::StartHero),
            (
                fade + ms(r.preloader_remove_ms),
                Cue::Page(PageAction::Remove(Element::Preloader)),
            ),
        ];
        for (due, cue) in cues {
            self.timeline.schedule_at(due, cue);
        }
    }

    fn start_hero(&mut self) -> FramescrollResult<()> {
        self.page.add_class(Element::HeroContent, class::VISIBLE);
        self.page.add_class(Element::ScrollIndicator, class::VISIBLE);
        self.phase = Phase::Interactive;
        tracing::debug!(phase = ?self.phase, "hero animation started");
        self.draw(FrameIndex(0))?;
        Ok(())
    }

    fn update(&mut self, now: Duration) -> FramescrollResult<ScrollSample> {
        self.loader.pump();

        let viewport = self.page.viewport();
        let rect = self
            .page
            .bounding_rect(Element::HeroSection)
            .ok_or_else(|| FramescrollError::page("hero section has no geometry"))?;
        let sample = ScrollEvaluator::sample_section(&self.config, rect, viewport.height);

        self.draw(sample.frame)?;
        self.loader.prefetch_around(sample.frame);
        self.update_text(sample.text_state, now);
        if self.page.contains(Element::ScrollLine) {
            self.page.set_style_property(
                Element::ScrollLine,
                SCROLL_PROGRESS_PROPERTY,
                &format!("{}%", sample.scroll_line_percent),
            );
        }
        self.update_second_section(viewport);

        self.last_sample = Some(sample);
        Ok(sample)
    }

    fn draw(&mut self, index: FrameIndex) -> FramescrollResult<bool> {
        let drawn = self
            .playback
            .draw(&mut self.surface, self.loader.frames(), index)?;
        if drawn {
            self.show_frame_number(index);
        }
        Ok(drawn)
    }

    fn show_frame_number(&mut self, index: FrameIndex) {
        if self.page.contains(Element::FrameCounter) {
            self.page
                .set_text(Element::FrameCounter, &index.ordinal().to_string());
        }
    }

    fn update_text(&mut self, target: usize, now: Duration) {
        let heading_to = self.text_pending.unwrap_or(self.text_displayed);
        if target == heading_to {
            return;
        }
        for el in HERO_TEXT {
            self.page.set_opacity(el, 0.0);
        }
        self.text_pending = Some(target);
        self.timeline
            .schedule_at(now + self.config.text_swap_delay(), Cue::SwapText(target));
    }

    fn swap_text(&mut self, index: usize) {
        // A later change superseded this swap.
        if self.text_pending != Some(index) {
            return;
        }
        let Some(state) = self.config.text.states.get(index) else {
            return;
        };
        self.page.set_text(Element::HeroTitle, &state.title);
        self.page.set_text(Element::HeroSubtitle, &state.subtitle);
        self.page.set_text(Element::HeroCta, &state.cta);
        self.page.set_opacity(Element::HeroTitle, 1.0);
        self.page.set_opacity(Element::HeroSubtitle, 0.8);
        self.page.set_opacity(Element::HeroCta, 1.0);
        self.text_displayed = index;
        self.text_pending = None;
    }

    fn update_second_section(&mut self, viewport: Viewport) -> Option<FeatureSample> {
        let present = [
            Element::SecondSection,
            Element::CarBackground,
            Element::CarImage,
        ]
        .into_iter()
        .all(|e| self.page.contains(e));
        if !present {
            return None;
        }
        let rect = self.page.bounding_rect(Element::SecondSection)?;
        let sample = evaluate_feature(
            section_progress(rect, viewport.height),
            &self.config.feature,
        );

        self.page.set_style_property(
            Element::CarBackground,
            BACKGROUND_POSITION_PROPERTY,
            &format!("center {}%", sample.background_y_percent),
        );
        self.page.set_opacity(Element::CarImage, sample.image_opacity);
        if self.page.contains(Element::SectionContent) {
            if sample.content_visible {
                self.page.add_class(Element::SectionContent, class::VISIBLE);
            } else {
                self.page
                    .remove_class(Element::SectionContent, class::VISIBLE);
            }
        }
        Some(sample)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/controller.rs"]
mod tests;
