use super::*;
use crate::{
    assets::frames::FrameSet,
    foundation::core::FrameIndex,
    render::playback::Playback,
};

fn split_frame() -> DecodedFrame {
    // Left half red, right half blue, 4x2.
    let pixels = image::RgbaImage::from_fn(4, 2, |x, _| {
        if x < 2 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        }
    });
    DecodedFrame { pixels }
}

#[test]
fn cover_draw_crops_overflow_and_fills_canvas() {
    let mut frames = FrameSet::new(1);
    frames.resolve_loaded(FrameIndex(0), split_frame());

    let mut surface = CpuSurface::new(
        Canvas {
            width: 2,
            height: 2,
        },
        CpuSurfaceOpts {
            filter: FilterType::Nearest,
        },
    );
    let mut playback = Playback::new();
    playback.arm();
    assert!(playback.draw(&mut surface, &frames, FrameIndex(0)).unwrap());

    // Image is 2:1 on a 1:1 canvas: one column cropped from each side.
    let snap = surface.snapshot();
    assert_eq!((snap.width, snap.height), (2, 2));
    assert_eq!(surface.pixels().get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(surface.pixels().get_pixel(1, 1).0, [0, 0, 255, 255]);
}

#[test]
fn extreme_aspect_scales_only_the_visible_strip() {
    // 400x1 strip: only columns 199 (green) and 200 (yellow) land on a 4x4 canvas.
    let pixels = image::RgbaImage::from_fn(400, 1, |x, _| match x {
        199 => image::Rgba([0, 255, 0, 255]),
        200 => image::Rgba([255, 255, 0, 255]),
        _ => image::Rgba([255, 0, 0, 255]),
    });
    let frame = DecodedFrame { pixels };
    let mut surface = CpuSurface::new(
        Canvas {
            width: 4,
            height: 4,
        },
        CpuSurfaceOpts {
            filter: FilterType::Nearest,
        },
    );

    let dest = Rect::new(-798.0, 0.0, 802.0, 4.0);
    surface.draw_image(&frame, dest).unwrap();

    for y in 0..4 {
        assert_eq!(surface.pixels().get_pixel(0, y).0, [0, 255, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(1, y).0, [0, 255, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(2, y).0, [255, 255, 0, 255]);
        assert_eq!(surface.pixels().get_pixel(3, y).0, [255, 255, 0, 255]);
    }
}

#[test]
fn destination_outside_canvas_draws_nothing() {
    let mut surface = CpuSurface::new(
        Canvas {
            width: 2,
            height: 2,
        },
        CpuSurfaceOpts::default(),
    );
    surface
        .draw_image(&split_frame(), Rect::new(10.0, 10.0, 14.0, 12.0))
        .unwrap();
    assert!(surface.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn resize_reallocates_and_clear_zeroes() {
    let mut surface = CpuSurface::new(Canvas::default(), CpuSurfaceOpts::default());
    surface.resize(Canvas {
        width: 3,
        height: 1,
    });
    assert_eq!(
        surface.size(),
        Canvas {
            width: 3,
            height: 1
        }
    );
    surface
        .draw_image(&split_frame(), Rect::new(0.0, 0.0, 3.0, 1.0))
        .unwrap();
    surface.clear();
    assert!(surface.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn save_png_writes_file() {
    let out = std::path::PathBuf::from("target")
        .join("unit_cpu_surface")
        .join("out.png");
    let _ = std::fs::remove_file(&out);
    let surface = CpuSurface::new(
        Canvas {
            width: 2,
            height: 2,
        },
        CpuSurfaceOpts::default(),
    );
    surface.save_png(&out).unwrap();
    assert!(out.exists());
}
