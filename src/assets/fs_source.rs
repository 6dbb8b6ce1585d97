use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use futures_util::{FutureExt, future::LocalBoxFuture};

use crate::{
    assets::{
        decode::{DecodedFrame, decode_frame},
        loader::{FrameSource, Timer},
    },
    foundation::{core::FrameIndex, error::FramescrollResult},
};

/// Reads frame files from a directory and decodes them with `image`.
///
/// Frame paths are resolved relative to `root`; a leading `./` or `/` is ignored.
#[derive(Clone, Debug)]
pub struct FsFrameSource {
    root: PathBuf,
}

impl FsFrameSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory frame paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a frame path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let rel = path.trim_start_matches("./").trim_start_matches('/');
        self.root.join(rel)
    }
}

impl FrameSource for FsFrameSource {
    type Image = DecodedFrame;

    fn fetch(
        &self,
        _index: FrameIndex,
        path: &str,
    ) -> LocalBoxFuture<'static, FramescrollResult<DecodedFrame>> {
        let full = self.resolve(path);
        async move {
            let bytes = tokio::fs::read(&full)
                .await
                .with_context(|| format!("read frame '{}'", full.display()))?;
            decode_frame(&bytes)
        }
        .boxed_local()
    }
}

/// [`Timer`] backed by the tokio clock.
#[derive(Clone, Copy, Debug)]
pub struct TokioTimer {
    epoch: tokio::time::Instant,
}

impl TokioTimer {
    /// Timer whose epoch is the moment of creation.
    pub fn new() -> Self {
        Self {
            epoch: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for TokioTimer {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed_local()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fs_source.rs"]
mod tests;
