use anyhow::Context;

use crate::{foundation::error::FramescrollResult, render::surface::FrameImage};

/// A decoded frame in straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedFrame {
    /// Row-major pixels.
    pub pixels: image::RgbaImage,
}

impl FrameImage for DecodedFrame {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode encoded image bytes (format sniffed from the content).
pub fn decode_frame(bytes: &[u8]) -> FramescrollResult<DecodedFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode frame from memory")?;
    Ok(DecodedFrame {
        pixels: dyn_img.to_rgba8(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
