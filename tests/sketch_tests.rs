use shape_sketches::config::SketchConfig;
use shape_sketches::core::window::StaticViewport;
use shape_sketches::headless::{run_headless, run_headless_with, RecordingRenderer};
use shape_sketches::scene::ShapeKind;
use shape_sketches::Sketch;

#[test]
fn test_headless_renders_requested_frames() {
    for frames in [1, 2, 30] {
        let mut renderer = RecordingRenderer::default();
        let summary = run_headless_with(&SketchConfig::ring(), frames, 1.0 / 60.0, &mut renderer).unwrap();

        assert_eq!(summary.frames_rendered, frames);
        assert_eq!(renderer.frames.len() as u64, frames);
    }
}

#[test]
fn test_headless_ring_summary() {
    let summary = run_headless(&SketchConfig::ring(), 10, 0.1).unwrap();

    assert_eq!(summary.layout, "ring");
    assert_eq!(
        summary.shape_counts,
        vec![(ShapeKind::Plane, 40), (ShapeKind::Sphere, 40), (ShapeKind::Torus, 40)]
    );
    assert_eq!(summary.animated, 18);
    assert_eq!(summary.textures_loaded, 0);
    assert_eq!(summary.textures_failed, 0);
}

#[test]
fn test_missing_textures_do_not_stop_the_loop() {
    let mut config = SketchConfig::fixed();
    config.materials.sphere = shape_sketches::config::MaterialStyle::Matcap;
    config.assets.matcaps = vec!["/no/such/matcap.png".into()];
    config.assets.environment = Some("/no/such/sky.hdr".into());

    let mut renderer = RecordingRenderer::default();
    let summary = run_headless_with(&config, 3, 0.1, &mut renderer).unwrap();

    assert_eq!(summary.frames_rendered, 3);
    assert_eq!(summary.textures_failed, 2);
    assert!(renderer.uploads.is_empty());
}

#[test]
fn test_frame_rotates_then_renders() {
    let mut renderer = RecordingRenderer::default();
    let viewport = StaticViewport::new(1280, 720, 1.0);
    let mut sketch = Sketch::new(SketchConfig::fixed(), &viewport, &mut renderer);

    assert_eq!(renderer.output_sizes, vec![(1280, 720, 1.0)]);
    assert_eq!(sketch.camera().aspect, 1280.0 / 720.0);

    sketch.frame(2.0, &mut renderer).unwrap();

    assert!(sketch.scene().shapes().iter().all(|s| s.rotation.y == 1.0));
    assert_eq!(sketch.frames_rendered(), 1);
    assert_eq!(renderer.frames[0].shapes, 3);
    assert_eq!(renderer.frames[0].aspect, 1280.0 / 720.0);
}

#[test]
fn test_controls_glide_between_frames() {
    let mut renderer = RecordingRenderer::default();
    let viewport = StaticViewport::new(800, 600, 1.0);
    let mut sketch = Sketch::new(SketchConfig::fixed(), &viewport, &mut renderer);

    sketch.controls_mut().rotate_left(1.0);
    for i in 0..3 {
        sketch.frame(i as f32 / 60.0, &mut renderer).unwrap();
    }

    let xs: Vec<f32> = renderer.frames.iter().map(|f| f.camera_position.x).collect();
    // Damped motion keeps moving in the same direction, by less each frame
    assert!(xs[0] < 0.0);
    assert!(xs[1] < xs[0]);
    assert!((xs[1] - xs[0]).abs() > (xs[2] - xs[1]).abs());
}

#[test]
fn test_resize_reaches_renderer() {
    let mut renderer = RecordingRenderer::default();
    let mut sketch = Sketch::new(SketchConfig::ring(), &StaticViewport::new(800, 600, 1.0), &mut renderer);

    sketch.on_resize(&StaticViewport::new(1024, 512, 3.0), &mut renderer);

    assert_eq!(renderer.output_sizes.last(), Some(&(1024, 512, 2.0)));
    assert_eq!(sketch.camera().aspect, 2.0);
    assert_eq!(sketch.viewport().width, 1024);
}
