use image::Rgb;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::map_value_to_color;
use crate::config::EngineConfig;
use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::grid::NdviGrid;
use crate::viewport::{CanvasSize, DisplaySize, ScreenPoint, ScreenToCanvas, ViewportState};

/// Raw pointer input, in coordinates relative to the displayed surface.
///
/// `display` is the size the surface is shown at; `None` means it is shown
/// at its logical canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        display: Option<DisplaySize>,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        display: Option<DisplaySize>,
    },
    PointerUp,
    PointerLeave,
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
        #[serde(default)]
        display: Option<DisplaySize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    Idle,
    Dragging { last: ScreenPoint },
}

/// Cell under the pointer, derived fresh on every non-drag move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverQueryResult {
    pub grid_x: usize,
    pub grid_y: usize,
    pub value: f32,
    pub color: Rgb<u8>,
    pub screen_x: f64,
    pub screen_y: f64,
}

/// What an event changed, so the owner knows whether to redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    pub viewport_changed: bool,
    pub hover_changed: bool,
}

/// Turns pointer and wheel events into viewport operations or hover queries.
///
/// This is the only place the viewport state is replaced. Handlers never
/// fail: non-finite coordinates and unusable display sizes are ignored.
#[derive(Clone, Debug)]
pub struct InteractionController {
    canvas: CanvasSize,
    wheel_sensitivity: f64,
    mode: InteractionMode,
    viewport: ViewportState,
    hover: Option<HoverQueryResult>,
}

impl InteractionController {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            canvas: config.canvas,
            wheel_sensitivity: config.wheel_sensitivity,
            mode: InteractionMode::Idle,
            viewport: ViewportState::identity(),
            hover: None,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, InteractionMode::Dragging { .. })
    }

    pub fn is_hovering(&self) -> bool {
        !self.is_dragging() && self.hover.is_some()
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn hover(&self) -> Option<&HoverQueryResult> {
        self.hover.as_ref()
    }

    /// Back to identity, idle and no hover. Used when a new grid arrives.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Idle;
        self.viewport = ViewportState::identity();
        self.hover = None;
    }

    /// Wheel zoom factor for a vertical delta. Negative deltas zoom in.
    ///
    /// The exponent saturates at the full scale range, so any finite delta
    /// yields a usable factor.
    pub fn wheel_factor(&self, delta_y: f64) -> f64 {
        let limit = (MAX_SCALE / MIN_SCALE).ln();
        (-delta_y * self.wheel_sensitivity).clamp(-limit, limit).exp()
    }

    pub fn handle(&mut self, event: &InputEvent, grid: &NdviGrid) -> EventResponse {
        match *event {
            InputEvent::PointerDown { x, y, display } => {
                self.on_pointer_down(ScreenPoint::new(x, y), display)
            }
            InputEvent::PointerMove { x, y, display } => {
                self.on_pointer_move(ScreenPoint::new(x, y), display, grid)
            }
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::Wheel {
                x,
                y,
                delta_y,
                display,
            } => self.on_wheel(ScreenPoint::new(x, y), delta_y, display),
        }
    }

    pub fn on_pointer_down(&mut self, p: ScreenPoint, _display: Option<DisplaySize>) -> EventResponse {
        if !p.is_finite() {
            return EventResponse::default();
        }
        debug!(x = p.x, y = p.y, "Drag started");
        self.mode = InteractionMode::Dragging { last: p };
        EventResponse {
            viewport_changed: false,
            hover_changed: self.clear_hover(),
        }
    }

    pub fn on_pointer_move(
        &mut self,
        p: ScreenPoint,
        display: Option<DisplaySize>,
        grid: &NdviGrid,
    ) -> EventResponse {
        if !p.is_finite() {
            return EventResponse::default();
        }

        match self.mode {
            InteractionMode::Dragging { last } => {
                self.mode = InteractionMode::Dragging { last: p };
                let hover_changed = self.clear_hover();
                let Some(ratio) = self.ratio(display) else {
                    return EventResponse {
                        viewport_changed: false,
                        hover_changed,
                    };
                };
                let before = self.viewport;
                self.viewport = before.pan_by(self.canvas, p.x - last.x, p.y - last.y, ratio);
                EventResponse {
                    viewport_changed: self.viewport != before,
                    hover_changed,
                }
            }
            InteractionMode::Idle => {
                let hover = self.hit_test(p, display, grid);
                let hover_changed = hover != self.hover;
                self.hover = hover;
                EventResponse {
                    viewport_changed: false,
                    hover_changed,
                }
            }
        }
    }

    pub fn on_pointer_up(&mut self) -> EventResponse {
        self.mode = InteractionMode::Idle;
        EventResponse::default()
    }

    pub fn on_pointer_leave(&mut self) -> EventResponse {
        self.mode = InteractionMode::Idle;
        EventResponse {
            viewport_changed: false,
            hover_changed: self.clear_hover(),
        }
    }

    pub fn on_wheel(&mut self, p: ScreenPoint, delta_y: f64, display: Option<DisplaySize>) -> EventResponse {
        if !p.is_finite() || !delta_y.is_finite() {
            return EventResponse::default();
        }
        let Some(ratio) = self.ratio(display) else {
            return EventResponse::default();
        };

        let before = self.viewport;
        let factor = self.wheel_factor(delta_y);
        self.viewport = before.zoom_to_point(self.canvas, ratio.apply(p), factor);
        debug!(
            factor,
            scale = self.viewport.scale(),
            "Wheel zoom"
        );
        EventResponse {
            viewport_changed: self.viewport != before,
            hover_changed: false,
        }
    }

    /// Cell under a screen point for the current viewport, or `None` when the
    /// point falls outside the drawn grid.
    pub fn hit_test(
        &self,
        p: ScreenPoint,
        display: Option<DisplaySize>,
        grid: &NdviGrid,
    ) -> Option<HoverQueryResult> {
        let ratio = self.ratio(display)?;
        let (grid_x, grid_y) =
            self.viewport
                .cell_at(self.canvas, ratio.apply(p), grid.rows(), grid.cols())?;
        let value = grid.get(grid_y, grid_x)?;
        Some(HoverQueryResult {
            grid_x,
            grid_y,
            value,
            color: map_value_to_color(value),
            screen_x: p.x,
            screen_y: p.y,
        })
    }

    fn ratio(&self, display: Option<DisplaySize>) -> Option<ScreenToCanvas> {
        match display {
            Some(d) => d.to_canvas_ratio(self.canvas),
            None => Some(ScreenToCanvas::IDENTITY),
        }
    }

    fn clear_hover(&mut self) -> bool {
        self.hover.take().is_some()
    }
}
