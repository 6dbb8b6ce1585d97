use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn chunks_cover_range_with_short_tail() {
    let chunks: Vec<_> = FrameRange::all(401).chunks(20).collect();
    assert_eq!(chunks.len(), 21);
    assert_eq!(chunks[0], FrameRange::new(FrameIndex(0), FrameIndex(20)).unwrap());
    assert_eq!(chunks[20].start, FrameIndex(400));
    assert_eq!(chunks[20].len_frames(), 1);
    let total: usize = chunks.iter().map(|c| c.len_frames()).sum();
    assert_eq!(total, 401);
}

#[test]
fn window_clips_to_sequence_bounds() {
    let w = FrameRange::window(FrameIndex(10), 50, 401);
    assert_eq!(w.start, FrameIndex(0));
    assert_eq!(w.end, FrameIndex(61));

    let w = FrameRange::window(FrameIndex(390), 50, 401);
    assert_eq!(w.start, FrameIndex(340));
    assert_eq!(w.end, FrameIndex(401));

    assert!(FrameRange::window(FrameIndex(0), 5, 0).is_empty());
}

#[test]
fn ordinal_is_one_based() {
    assert_eq!(FrameIndex(0).ordinal(), 1);
    assert_eq!(FrameIndex(400).ordinal(), 401);
}

#[test]
fn viewport_canvas_truncates_and_guards() {
    assert_eq!(
        Viewport::new(1280.7, 720.2).canvas(),
        Canvas {
            width: 1280,
            height: 720
        }
    );
    assert!(Viewport::new(-5.0, f64::NAN).canvas().is_empty());
}
