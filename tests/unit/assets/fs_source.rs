use super::*;
use crate::render::surface::FrameImage;

#[test]
fn resolve_strips_relative_prefixes() {
    let src = FsFrameSource::new("/srv/site");
    assert_eq!(src.root(), Path::new("/srv/site"));
    assert_eq!(
        src.resolve("./frames/frame_0001.avif"),
        PathBuf::from("/srv/site/frames/frame_0001.avif")
    );
    assert_eq!(
        src.resolve("/frames/frame_0002.png"),
        PathBuf::from("/srv/site/frames/frame_0002.png")
    );
}

#[tokio::test]
async fn fetch_reads_and_decodes_from_disk() {
    let dir = PathBuf::from("target").join("unit_fs_source");
    std::fs::create_dir_all(dir.join("frames")).unwrap();
    image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 255]))
        .save(dir.join("frames").join("frame_0001.png"))
        .unwrap();

    let src = FsFrameSource::new(&dir);
    let frame = src
        .fetch(FrameIndex(0), "./frames/frame_0001.png")
        .await
        .unwrap();
    assert_eq!((frame.width(), frame.height()), (3, 2));

    let missing = src.fetch(FrameIndex(1), "./frames/frame_0002.png").await;
    assert!(missing.unwrap_err().to_string().contains("frame_0002.png"));
}

#[tokio::test]
async fn tokio_timer_sleeps_forward() {
    let timer = TokioTimer::new();
    let before = timer.now();
    timer.sleep(Duration::from_millis(2)).await;
    assert!(timer.now() >= before + Duration::from_millis(2));
}
