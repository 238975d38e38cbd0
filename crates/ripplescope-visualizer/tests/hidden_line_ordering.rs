//! Draw-order and mesh-shape checks for hidden-line rendering.

use proptest::prelude::*;
use ripplescope_core::{GridConfig, RenderMode, SceneConfig, SurfaceSampler};
use ripplescope_visualizer::{
    build_quads, sort_far_to_near, DrawCommand, DrawList, SurfaceRenderer,
};

fn drawn_polygons(list: &DrawList) -> Vec<Vec<ripplescope_core::ScreenPoint>> {
    list.commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_flat_grid_emits_every_cell() {
    let mut config = SceneConfig::default();
    config.grid = GridConfig { radius: 10, step: 2 };
    config.ripple.height_scale = 1e-12;
    let sampler = SurfaceSampler::new(&config, RenderMode::HiddenLine);
    let grid = sampler.generate_grid_points(0.0);

    assert_eq!(grid.culled_count(), 0);
    // (2R/step)² cells for a (2R/step + 1)² lattice.
    assert_eq!(build_quads(&grid).len(), 10 * 10);
}

#[test]
fn test_default_scene_quad_count() {
    let sampler = SurfaceSampler::new(&SceneConfig::default(), RenderMode::HiddenLine);
    let grid = sampler.generate_grid_points(0.0);
    assert_eq!(build_quads(&grid).len(), 56 * 56);
}

#[test]
fn test_rendered_polygons_follow_depth_order() {
    let config = SceneConfig::default();
    let renderer = SurfaceRenderer::new(config, RenderMode::HiddenLine).unwrap();
    let t = 3.25;

    let mut list = DrawList::new(config.view.width, config.view.height);
    let stats = renderer.render_frame(&mut list, t);

    let mut expected = build_quads(&renderer.sampler().generate_grid_points(t));
    sort_far_to_near(&mut expected);

    let drawn = drawn_polygons(&list);
    assert_eq!(drawn.len(), stats.quads);
    assert_eq!(drawn.len(), expected.len());
    for (poly, quad) in drawn.iter().zip(&expected) {
        assert_eq!(poly.as_slice(), quad.outline().as_slice());
    }
    for pair in expected.windows(2) {
        assert!(pair[0].avg_depth >= pair[1].avg_depth);
    }
}

#[test]
fn test_edges_are_hue_coloured() {
    let mut config = SceneConfig::default();
    config.grid.radius = 3;
    let renderer = SurfaceRenderer::new(config, RenderMode::HiddenLine).unwrap();
    let mut list = DrawList::new(config.view.width, config.view.height);
    renderer.render_frame(&mut list, 0.0);

    let line_colors: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert!(!line_colors.is_empty());
    // Fully saturated, full value: one channel at 255, one at 0.
    for c in line_colors {
        let channels = [c.r, c.g, c.b];
        assert!(channels.contains(&255), "{c:?}");
        assert!(channels.contains(&0), "{c:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sorted_quads_never_increase_in_depth(t in 0.0f64..120.0) {
        let sampler = SurfaceSampler::new(&SceneConfig::default(), RenderMode::HiddenLine);
        let mut quads = build_quads(&sampler.generate_grid_points(t));
        sort_far_to_near(&mut quads);
        for pair in quads.windows(2) {
            prop_assert!(pair[0].avg_depth >= pair[1].avg_depth);
        }
    }
}
