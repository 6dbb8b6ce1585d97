use super::*;
use crate::foundation::core::Rect;

#[derive(Debug)]
struct Tile(u32, u32);

impl FrameImage for Tile {
    fn width(&self) -> u32 {
        self.0
    }

    fn height(&self) -> u32 {
        self.1
    }
}

#[derive(Default)]
struct RecordingSurface {
    canvas: Canvas,
    clears: usize,
    draws: Vec<Rect>,
}

impl Surface for RecordingSurface {
    type Image = Tile;

    fn size(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_image(&mut self, _image: &Tile, dest: Rect) -> FramescrollResult<()> {
        self.draws.push(dest);
        Ok(())
    }
}

fn frames() -> FrameSet<Tile> {
    let mut set = FrameSet::new(3);
    set.resolve_loaded(FrameIndex(0), Tile(200, 100));
    set.resolve_loaded(FrameIndex(1), Tile(200, 100));
    set
}

#[test]
fn draws_nothing_before_arming() {
    let mut surface = RecordingSurface {
        canvas: Canvas {
            width: 100,
            height: 100,
        },
        ..Default::default()
    };
    let mut playback = Playback::new();
    assert!(!playback.draw(&mut surface, &frames(), FrameIndex(1)).unwrap());
    assert_eq!(surface.clears, 0);
    assert_eq!(playback.current(), FrameIndex(0));
}

#[test]
fn skips_frames_without_images() {
    let mut surface = RecordingSurface::default();
    let mut playback = Playback::new();
    playback.arm();
    assert!(!playback.draw(&mut surface, &frames(), FrameIndex(2)).unwrap());
    assert!(!playback.draw(&mut surface, &frames(), FrameIndex(99)).unwrap());
    assert!(surface.draws.is_empty());
}

#[test]
fn draws_cover_fit_and_records_current() {
    let mut surface = RecordingSurface {
        canvas: Canvas {
            width: 100,
            height: 100,
        },
        ..Default::default()
    };
    let mut playback = Playback::new();
    playback.arm();
    assert!(playback.draw(&mut surface, &frames(), FrameIndex(1)).unwrap());
    assert_eq!(playback.current(), FrameIndex(1));
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.draws, vec![Rect::new(-50.0, 0.0, 150.0, 100.0)]);
}

#[test]
fn resize_redraws_same_frame() {
    let set = frames();
    let mut surface = RecordingSurface::default();
    let mut playback = Playback::new();
    playback.arm();
    playback
        .resize(
            &mut surface,
            &set,
            Canvas {
                width: 100,
                height: 100,
            },
        )
        .unwrap();
    playback.draw(&mut surface, &set, FrameIndex(1)).unwrap();

    let redrawn = playback
        .resize(
            &mut surface,
            &set,
            Canvas {
                width: 400,
                height: 100,
            },
        )
        .unwrap();
    assert!(redrawn);
    assert_eq!(playback.current(), FrameIndex(1));
    assert_eq!(
        surface.draws.last().copied(),
        Some(Rect::new(0.0, -50.0, 400.0, 150.0))
    );
}
