use crate::foundation::{
    core::{Canvas, Rect, Size},
    error::FramescrollResult,
};

/// Intrinsic dimensions of a drawable frame.
pub trait FrameImage {
    /// Natural width in pixels.
    fn width(&self) -> u32;
    /// Natural height in pixels.
    fn height(&self) -> u32;

    /// Natural size as floating-point geometry.
    fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }
}

/// Canvas-like target frames are drawn onto.
pub trait Surface {
    /// Image type this surface can draw.
    type Image: FrameImage;

    /// Current backing size.
    fn size(&self) -> Canvas;

    /// Resize the backing store; contents are unspecified afterwards.
    fn resize(&mut self, canvas: Canvas);

    /// Clear to fully transparent.
    fn clear(&mut self);

    /// Draw `image` scaled into `dest`, which may extend past the canvas edges.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> FramescrollResult<()>;
}
