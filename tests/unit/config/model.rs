use super::*;

#[test]
fn defaults_are_valid_and_match_the_page() {
    let cfg = PlayerConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.total_frames, 401);
    assert_eq!(cfg.batch_size, 20);
    assert_eq!(cfg.preload_distance, 50);
    assert_eq!(cfg.batch_yield(), Duration::from_millis(10));
    assert_eq!(cfg.text.states.len(), 3);
}

#[test]
fn frame_path_is_one_based_and_zero_padded() {
    let cfg = PlayerConfig::default();
    assert_eq!(cfg.frame_path(FrameIndex(0)), "./frames/frame_0001.avif");
    assert_eq!(cfg.frame_path(FrameIndex(400)), "./frames/frame_0401.avif");

    let naming = FrameNaming {
        base_path: "seq/".to_string(),
        prefix: "f".to_string(),
        extension: ".png".to_string(),
        padding: 2,
    };
    assert_eq!(naming.path_for(FrameIndex(122)), "seq/f123.png");
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = PlayerConfig::from_json_str(
        r#"{ "total_frames": 12, "naming": { "extension": ".png" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.total_frames, 12);
    assert_eq!(cfg.batch_size, 20);
    assert_eq!(cfg.naming.extension, ".png");
    assert_eq!(cfg.naming.prefix, "frame_");
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = PlayerConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(PlayerConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PlayerConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, FramescrollError::Config(_)));
}

#[test]
fn validation_rejects_bad_shapes() {
    let mut cfg = PlayerConfig::default();
    cfg.total_frames = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = PlayerConfig::default();
    cfg.batch_size = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = PlayerConfig::default();
    cfg.text.change_points = vec![0.6, 0.25];
    assert!(cfg.validate().is_err());

    let mut cfg = PlayerConfig::default();
    cfg.text.change_points = vec![0.25, 1.5];
    assert!(cfg.validate().is_err());

    let mut cfg = PlayerConfig::default();
    cfg.text.states.pop();
    assert!(cfg.validate().is_err());

    let mut cfg = PlayerConfig::default();
    cfg.feature.fade_start = 0.6;
    assert!(cfg.validate().is_err());
}
