use std::path::Path;

use anyhow::Context;
use image::imageops::{self, FilterType};

use crate::{
    assets::decode::DecodedFrame,
    foundation::{
        core::{Canvas, Rect},
        error::{FramescrollError, FramescrollResult},
    },
    render::surface::Surface,
};

/// A rendered canvas as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, straight alpha.
    pub data: Vec<u8>,
}

/// Options for [`CpuSurface`].
#[derive(Clone, Copy, Debug)]
pub struct CpuSurfaceOpts {
    /// Resampling filter used when scaling frames.
    pub filter: FilterType,
}

impl Default for CpuSurfaceOpts {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

/// In-memory RGBA canvas drawing [`DecodedFrame`]s with the `image` crate.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    opts: CpuSurfaceOpts,
    pixels: image::RgbaImage,
}

impl CpuSurface {
    /// Transparent canvas of the given size.
    pub fn new(canvas: Canvas, opts: CpuSurfaceOpts) -> Self {
        Self {
            opts,
            pixels: image::RgbaImage::new(canvas.width, canvas.height),
        }
    }

    /// Current pixels.
    pub fn pixels(&self) -> &image::RgbaImage {
        &self.pixels
    }

    /// Copy out the canvas contents.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.pixels.width(),
            height: self.pixels.height(),
            data: self.pixels.as_raw().clone(),
        }
    }

    /// Write the canvas as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FramescrollResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        self.pixels
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

impl Surface for CpuSurface {
    type Image = DecodedFrame;

    fn size(&self) -> Canvas {
        Canvas {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    fn resize(&mut self, canvas: Canvas) {
        if self.size() != canvas {
            self.pixels = image::RgbaImage::new(canvas.width, canvas.height);
        }
    }

    fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = image::Rgba([0, 0, 0, 0]);
        }
    }

    fn draw_image(&mut self, image: &DecodedFrame, dest: Rect) -> FramescrollResult<()> {
        if !(dest.width().is_finite() && dest.height().is_finite()) {
            return Err(FramescrollError::render("draw destination must be finite"));
        }
        let (img_w, img_h) = image.pixels.dimensions();
        if img_w == 0 || img_h == 0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
            return Ok(());
        }
        let canvas = Rect::from_origin_size((0.0, 0.0), self.size().size());
        let visible = dest.intersect(canvas);
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return Ok(());
        }

        // Only the source pixels landing on the canvas are scaled, so the scratch
        // buffer stays near canvas size however far `dest` overflows.
        let sx = dest.width() / f64::from(img_w);
        let sy = dest.height() / f64::from(img_h);
        let src_px = |v: f64, scale: f64, max: u32| (v / scale).clamp(0.0, f64::from(max));
        let x0 = src_px(visible.x0 - dest.x0, sx, img_w).floor() as u32;
        let x1 = src_px(visible.x1 - dest.x0, sx, img_w).ceil() as u32;
        let y0 = src_px(visible.y0 - dest.y0, sy, img_h).floor() as u32;
        let y1 = src_px(visible.y1 - dest.y0, sy, img_h).ceil() as u32;
        let (crop_w, crop_h) = (x1.saturating_sub(x0).max(1), y1.saturating_sub(y0).max(1));

        let left = dest.x0 + f64::from(x0) * sx;
        let top = dest.y0 + f64::from(y0) * sy;
        let w = (f64::from(crop_w) * sx).round().max(1.0) as u32;
        let h = (f64::from(crop_h) * sy).round().max(1.0) as u32;

        let region = imageops::crop_imm(&image.pixels, x0, y0, crop_w, crop_h).to_image();
        let scaled = if (w, h) == region.dimensions() {
            region
        } else {
            imageops::resize(&region, w, h, self.opts.filter)
        };
        imageops::overlay(
            &mut self.pixels,
            &scaled,
            left.round() as i64,
            top.round() as i64,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
