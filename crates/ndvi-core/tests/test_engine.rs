mod common;

use approx::assert_abs_diff_eq;
use image::Rgb;

use ndvi_core::config::EngineConfig;
use ndvi_core::engine::HeatmapEngine;
use ndvi_core::grid::NdviGrid;
use ndvi_core::interaction::{InputEvent, InteractionMode};
use ndvi_core::render::RenderOutcome;
use ndvi_core::stats::ViewportStats;
use ndvi_core::viewport::{CanvasSize, DisplaySize};

use common::{engine_with, quadrant_grid, scenario_grid, uniform_grid, wheel_delta_for};

#[test]
fn test_scenario_full_grid_stats() {
    let engine = engine_with(scenario_grid());
    assert!(engine.viewport().is_identity());
    assert_eq!(engine.stats(), ViewportStats { min: 0.0, max: 1.0 });
}

#[test]
fn test_scenario_hover_bottom_right_cell() {
    let mut engine = engine_with(scenario_grid());
    engine.pointer_move(600.0, 600.0, None);
    let hover = engine.hover().expect("pointer is over the grid");
    assert_eq!((hover.grid_x, hover.grid_y), (1, 1));
    assert_eq!(hover.value, 1.0);
}

#[test]
fn test_scenario_zoom_round_trip() {
    let mut engine = engine_with(scenario_grid());
    engine.wheel(400.0, 400.0, wheel_delta_for(2.0), None);
    assert_abs_diff_eq!(engine.viewport().scale(), 2.0, epsilon = 1e-9);

    engine.wheel(400.0, 400.0, wheel_delta_for(0.5), None);
    let vp = engine.viewport();
    assert_abs_diff_eq!(vp.scale(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(vp.translate_x(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(vp.translate_y(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_zoom_to_quadrant_updates_stats() {
    let mut engine = engine_with(quadrant_grid());
    assert_eq!(engine.stats(), ViewportStats { min: 0.0, max: 1.0 });

    let r = engine.wheel(0.0, 0.0, wheel_delta_for(2.0), None);
    assert!(r.viewport_changed);
    assert_eq!(engine.stats(), ViewportStats { min: 0.40, max: 0.55 });

    let range = engine.visible_range().unwrap();
    assert_eq!(range.cell_count(), 4);
}

#[test]
fn test_drag_recomputes_stats() {
    let mut engine = engine_with(quadrant_grid());
    engine.wheel(0.0, 0.0, wheel_delta_for(2.0), None);

    // Drag the view all the way left: bottom-right quadrant comes into view.
    engine.pointer_down(700.0, 700.0, None);
    engine.pointer_move(-300.0, -300.0, None);
    engine.pointer_up();

    assert_eq!(engine.mode(), InteractionMode::Idle);
    assert_eq!(engine.stats(), ViewportStats { min: 0.60, max: 0.75 });
}

#[test]
fn test_viewport_change_redraws_canvas() {
    let mut engine = engine_with(quadrant_grid());
    let before = engine.canvas().clone();
    engine.wheel(0.0, 0.0, -600.0, None);
    assert_ne!(engine.canvas(), &before);
}

#[test]
fn test_set_grid_resets_viewport_and_hover() {
    let mut engine = engine_with(quadrant_grid());
    engine.wheel(100.0, 100.0, -900.0, None);
    engine.pointer_move(50.0, 50.0, None);
    assert!(engine.hover().is_some());

    engine.set_grid(scenario_grid());
    assert!(engine.viewport().is_identity());
    assert!(engine.hover().is_none());
    assert_eq!(engine.stats(), ViewportStats { min: 0.0, max: 1.0 });
}

#[test]
fn test_empty_grid_is_safe() {
    let mut engine = HeatmapEngine::default();
    assert_eq!(engine.stats(), ViewportStats { min: 0.0, max: 0.0 });
    assert_eq!(engine.redraw(), RenderOutcome::Skipped);

    engine.pointer_move(10.0, 10.0, None);
    engine.wheel(10.0, 10.0, -400.0, None);
    engine.pointer_down(10.0, 10.0, None);
    engine.pointer_move(500.0, 500.0, None);
    engine.pointer_leave();

    assert!(engine.hover().is_none());
    assert!(engine.visible_range().is_none());
    assert_eq!(engine.stats(), ViewportStats { min: 0.0, max: 0.0 });
}

#[test]
fn test_empty_grid_blanks_previous_picture() {
    let mut engine = engine_with(uniform_grid(3, 3, 0.9));
    engine.set_grid(NdviGrid::empty());
    let background = Rgb(engine.config().background);
    assert!(engine.canvas().pixels().all(|p| *p == background));
}

#[test]
fn test_query_does_not_store_hover() {
    let engine = engine_with(scenario_grid());
    let q = engine.query(100.0, 700.0, None).unwrap();
    assert_eq!(q.value, 0.75);
    assert!(engine.hover().is_none());
}

#[test]
fn test_display_size_flows_through_events() {
    let mut engine = engine_with(scenario_grid());
    let display = Some(DisplaySize::new(200.0, 200.0));
    engine.handle_event(&InputEvent::PointerMove {
        x: 150.0,
        y: 150.0,
        display,
    });
    assert_eq!(engine.hover().unwrap().value, 1.0);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EngineConfig {
        canvas: CanvasSize::new(0, 100),
        ..Default::default()
    };
    assert!(HeatmapEngine::new(config).is_err());
}

#[test]
fn test_custom_canvas_size() {
    let config = EngineConfig {
        canvas: CanvasSize::new(320, 240),
        ..Default::default()
    };
    let mut engine = HeatmapEngine::new(config).unwrap();
    engine.set_grid(scenario_grid());
    assert_eq!(engine.canvas().dimensions(), (320, 240));

    engine.pointer_move(300.0, 10.0, None);
    assert_eq!(engine.hover().unwrap().value, 0.5);
}

#[test]
fn test_export_png_writes_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("heatmap.png");
    let engine = engine_with(scenario_grid());
    engine.export_png(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded.dimensions(), (800, 800));
    assert_eq!(loaded.get_pixel(600, 600), engine.canvas().get_pixel(600, 600));
}
