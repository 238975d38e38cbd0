//! Offscreen driver writes one PNG per frame.

use ripplescope::driver::{frame_path, run_headless, HeadlessOptions};
use ripplescope::{RenderMode, SceneConfig, SurfaceRenderer};

#[test]
fn test_headless_writes_numbered_frames() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("frames");
    let renderer = SurfaceRenderer::new(SceneConfig::default(), RenderMode::HiddenLine).unwrap();
    let options = HeadlessOptions {
        frames: 3,
        fps: 30,
        out_dir: out_dir.clone(),
    };

    let written = run_headless(&renderer, &options).unwrap();

    assert_eq!(written.len(), 3);
    for (i, path) in written.iter().enumerate() {
        assert_eq!(path, &frame_path(&out_dir, i as u32));
        let img = image::open(path).unwrap();
        assert_eq!((img.width(), img.height()), (960, 720));
    }
}

#[test]
fn test_headless_frames_advance_in_time() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = SurfaceRenderer::new(SceneConfig::default(), RenderMode::Wireframe).unwrap();
    let options = HeadlessOptions {
        frames: 2,
        fps: 2,
        out_dir: dir.path().to_path_buf(),
    };

    let written = run_headless(&renderer, &options).unwrap();
    let first = image::open(&written[0]).unwrap().to_rgb8();
    let second = image::open(&written[1]).unwrap().to_rgb8();
    assert_ne!(first, second, "frame at t=0.5 must differ from t=0");
}

#[test]
fn test_zero_frames_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = SurfaceRenderer::new(SceneConfig::default(), RenderMode::HiddenLine).unwrap();
    let options = HeadlessOptions {
        frames: 0,
        fps: 60,
        out_dir: dir.path().to_path_buf(),
    };
    assert!(run_headless(&renderer, &options).unwrap().is_empty());
}

#[test]
fn test_scene_config_json_lists_constants() {
    let json = ripplescope::scene_config_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["view"]["width"], 960);
    assert_eq!(value["grid"]["radius"], 28);
    assert_eq!(value["ripple"]["height_scale"], 20.0);
}
