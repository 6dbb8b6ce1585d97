use crate::foundation::core::{Rect, Size};

/// Destination rect that scales `image` to cover `canvas`, centering the overflow.
///
/// The axis on which the image is relatively longer overflows; the other axis fits
/// exactly. Returns `None` when either size is empty or not finite.
pub fn cover_rect(canvas: Size, image: Size) -> Option<Rect> {
    let valid = |s: Size| s.width > 0.0 && s.height > 0.0 && s.is_finite();
    if !valid(canvas) || !valid(image) {
        return None;
    }

    let canvas_aspect = canvas.width / canvas.height;
    let image_aspect = image.width / image.height;

    let (w, h) = if image_aspect > canvas_aspect {
        (canvas.height * image_aspect, canvas.height)
    } else {
        (canvas.width, canvas.width / image_aspect)
    };
    let x = (canvas.width - w) / 2.0;
    let y = (canvas.height - h) / 2.0;

    Some(Rect::from_origin_size((x, y), (w, h)))
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
