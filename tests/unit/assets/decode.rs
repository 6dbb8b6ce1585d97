use std::io::Cursor;

use super::*;

#[test]
fn decode_png_dimensions_and_pixels() {
    let src = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 0, 0, 0, 255]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(src)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let frame = decode_frame(&buf).unwrap();
    assert_eq!(frame.width(), 2);
    assert_eq!(frame.height(), 1);
    assert_eq!(frame.pixels.get_pixel(0, 0).0, [100, 50, 200, 128]);
    assert_eq!(frame.size(), crate::foundation::core::Size::new(2.0, 1.0));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_frame(b"definitely not an image").is_err());
}
