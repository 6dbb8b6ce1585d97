use std::time::Duration;

use futures_util::{
    FutureExt, StreamExt,
    future::LocalBoxFuture,
    stream::FuturesUnordered,
};

use crate::{
    assets::frames::{FrameSet, LoadProgress, Resolution},
    config::model::{FrameNaming, PlayerConfig},
    foundation::{
        core::{FrameIndex, FrameRange},
        error::FramescrollResult,
    },
};

/// Fetches and decodes frame resources.
///
/// Returned futures own everything they need, so many can be in flight while the
/// loader keeps mutating its cache.
pub trait FrameSource {
    /// Decoded image handle.
    type Image: 'static;

    /// Fetch the frame at `index`, whose resource path is `path`.
    fn fetch(
        &self,
        index: FrameIndex,
        path: &str,
    ) -> LocalBoxFuture<'static, FramescrollResult<Self::Image>>;
}

/// Clock and sleep provider for the cooperative event loop.
pub trait Timer {
    /// Monotonic time since an arbitrary epoch.
    fn now(&self) -> Duration;

    /// Resolve after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

type InFlight<I> = LocalBoxFuture<'static, (FrameIndex, FramescrollResult<I>)>;

/// Batched preloader and nearby-frame prefetcher over a [`FrameSet`].
pub struct FrameLoader<S: FrameSource> {
    source: S,
    naming: FrameNaming,
    batch_size: usize,
    batch_yield: Duration,
    preload_distance: usize,
    frames: FrameSet<S::Image>,
    in_flight: FuturesUnordered<InFlight<S::Image>>,
    preloaded: bool,
}

impl<S: FrameSource> FrameLoader<S> {
    /// Create a loader with empty slots for `config.total_frames` frames.
    pub fn new(source: S, config: &PlayerConfig) -> Self {
        Self {
            source,
            naming: config.naming.clone(),
            batch_size: config.batch_size.max(1),
            batch_yield: config.batch_yield(),
            preload_distance: config.preload_distance,
            frames: FrameSet::new(config.total_frames),
            in_flight: FuturesUnordered::new(),
            preloaded: false,
        }
    }

    /// Frame cache.
    pub fn frames(&self) -> &FrameSet<S::Image> {
        &self.frames
    }

    /// Load counter.
    pub fn progress(&self) -> LoadProgress {
        self.frames.progress()
    }

    /// Return `true` once [`FrameLoader::preload_all`] finished.
    pub fn is_preloaded(&self) -> bool {
        self.preloaded
    }

    /// Number of prefetches not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Injected frame source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the whole sequence batch by batch.
    ///
    /// Each batch runs concurrently and must fully settle before the next one
    /// starts; `timer` provides the yield between batches.
    #[tracing::instrument(skip_all, fields(total = self.frames.len(), batch = self.batch_size))]
    pub async fn preload_all<T: Timer>(&mut self, timer: &T) -> LoadProgress {
        let all = FrameRange::all(self.frames.len());
        for (n, batch) in all.chunks(self.batch_size).enumerate() {
            if n > 0 {
                timer.sleep(self.batch_yield).await;
            }
            self.load_batch(batch).await;
        }
        self.preloaded = true;

        let progress = self.progress();
        tracing::info!(
            resolved = progress.resolved,
            total = progress.total,
            "frame sequence preloaded"
        );
        progress
    }

    /// Fetch every frame of `range` concurrently and wait for all of them.
    pub async fn load_batch(&mut self, range: FrameRange) {
        tracing::debug!(start = range.start.0, end = range.end.0, "loading batch");
        let wanted: Vec<FrameIndex> = range
            .indices()
            .filter(|&i| self.frames.mark_pending(i))
            .collect();
        let mut batch: FuturesUnordered<InFlight<S::Image>> =
            wanted.into_iter().map(|i| self.fetch(i)).collect();

        while let Some((index, result)) = batch.next().await {
            self.apply(index, result);
        }
    }

    /// Request every unloaded frame within the prefetch window around `center`.
    ///
    /// Requests are fire-and-forget; results land through [`FrameLoader::pump`] or
    /// [`FrameLoader::settle`]. Returns how many requests were issued.
    pub fn prefetch_around(&mut self, center: FrameIndex) -> usize {
        let window = FrameRange::window(center, self.preload_distance, self.frames.len());
        let wanted = self.frames.unrequested_in(window);
        for &index in &wanted {
            self.request(index);
        }
        if !wanted.is_empty() {
            tracing::debug!(center = center.0, requested = wanted.len(), "prefetching");
        }
        wanted.len()
    }

    /// Request a single frame unless it already has an image or is in flight.
    pub fn request(&mut self, index: FrameIndex) -> bool {
        if !self.frames.mark_pending(index) {
            return false;
        }
        let fut = self.fetch(index);
        self.in_flight.push(fut);
        true
    }

    /// Apply every prefetch that already settled, without waiting.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(Some((index, result))) = self.in_flight.next().now_or_never() {
            self.apply(index, result);
            applied += 1;
        }
        applied
    }

    /// Wait for every outstanding prefetch.
    pub async fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some((index, result)) = self.in_flight.next().await {
            self.apply(index, result);
            applied += 1;
        }
        applied
    }

    fn fetch(&self, index: FrameIndex) -> InFlight<S::Image> {
        let path = self.naming.path_for(index);
        self.source
            .fetch(index, &path)
            .map(move |result| (index, result))
            .boxed_local()
    }

    fn apply(&mut self, index: FrameIndex, result: FramescrollResult<S::Image>) -> Resolution {
        match result {
            Ok(image) => self.frames.resolve_loaded(index, image),
            Err(err) => {
                let resolution = self.frames.resolve_failed(index);
                tracing::warn!(
                    frame = index.0,
                    path = %self.naming.path_for(index),
                    error = %err,
                    fallback = ?resolution,
                    "failed to load frame"
                );
                resolution
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
