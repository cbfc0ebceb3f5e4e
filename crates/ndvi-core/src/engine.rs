use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::grid::NdviGrid;
use crate::interaction::{EventResponse, HoverQueryResult, InputEvent, InteractionController, InteractionMode};
use crate::io::export::save_canvas_png;
use crate::render::{GridRenderer, RenderOutcome};
use crate::stats::{compute_visible_stats, visible_cell_range, CellRange, ViewportStats};
use crate::viewport::{DisplaySize, ScreenPoint, ViewportState};

/// One interactive heatmap: a grid, its viewport, the rendered canvas and the
/// legend/tooltip outputs derived from them.
///
/// Single-threaded and synchronous. Every event runs to completion, and any
/// viewport change immediately redraws the canvas and recomputes the
/// visible stats.
pub struct HeatmapEngine {
    config: EngineConfig,
    grid: NdviGrid,
    renderer: GridRenderer,
    controller: InteractionController,
    canvas: RgbImage,
    stats: ViewportStats,
}

impl HeatmapEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: EngineConfig) -> Self {
        let renderer = GridRenderer::new(&config);
        let controller = InteractionController::new(&config);
        let canvas = renderer.blank_canvas();
        Self {
            config,
            grid: NdviGrid::empty(),
            renderer,
            controller,
            canvas,
            stats: ViewportStats::default(),
        }
    }

    /// Replace the dataset and reset the viewport to identity.
    pub fn set_grid(&mut self, grid: NdviGrid) {
        debug!(rows = grid.rows(), cols = grid.cols(), "Loading grid");
        self.grid = grid;
        self.controller.reset();
        self.canvas = self.renderer.blank_canvas();
        self.refresh();
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let response = self.controller.handle(event, &self.grid);
        if response.viewport_changed {
            self.refresh();
        }
        response
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, display: Option<DisplaySize>) -> EventResponse {
        self.handle_event(&InputEvent::PointerDown { x, y, display })
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, display: Option<DisplaySize>) -> EventResponse {
        self.handle_event(&InputEvent::PointerMove { x, y, display })
    }

    pub fn pointer_up(&mut self) -> EventResponse {
        self.handle_event(&InputEvent::PointerUp)
    }

    pub fn pointer_leave(&mut self) -> EventResponse {
        self.handle_event(&InputEvent::PointerLeave)
    }

    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64, display: Option<DisplaySize>) -> EventResponse {
        self.handle_event(&InputEvent::Wheel {
            x,
            y,
            delta_y,
            display,
        })
    }

    /// Hover query that does not store its result.
    pub fn query(&self, x: f64, y: f64, display: Option<DisplaySize>) -> Option<HoverQueryResult> {
        self.controller
            .hit_test(ScreenPoint::new(x, y), display, &self.grid)
    }

    /// Redraw the canvas from the current grid and viewport.
    pub fn redraw(&mut self) -> RenderOutcome {
        self.renderer
            .render(&self.grid, &self.controller.viewport(), &mut self.canvas)
    }

    fn refresh(&mut self) {
        self.redraw();
        self.stats = compute_visible_stats(&self.grid, &self.controller.viewport(), self.config.canvas);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &NdviGrid {
        &self.grid
    }

    pub fn viewport(&self) -> ViewportState {
        self.controller.viewport()
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn stats(&self) -> ViewportStats {
        self.stats
    }

    pub fn visible_range(&self) -> Option<CellRange> {
        visible_cell_range(
            self.grid.rows(),
            self.grid.cols(),
            &self.controller.viewport(),
            self.config.canvas,
        )
    }

    pub fn hover(&self) -> Option<&HoverQueryResult> {
        self.controller.hover()
    }

    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Write the current canvas as a PNG file.
    pub fn export_png(&self, path: &Path) -> Result<()> {
        save_canvas_png(&self.canvas, path)
    }
}

impl Default for HeatmapEngine {
    fn default() -> Self {
        Self::from_validated(EngineConfig::default())
    }
}
