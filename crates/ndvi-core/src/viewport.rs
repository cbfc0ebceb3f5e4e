use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_SCALE, MIN_SCALE};

/// Fixed logical resolution of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn w(&self) -> f64 {
        self.width as f64
    }

    pub fn h(&self) -> f64 {
        self.height as f64
    }

    pub fn contains(&self, p: CanvasPoint) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.w() && p.y < self.h()
    }

    /// Logical size of one grid cell when the grid fills the canvas at scale 1.
    pub fn cell_size(&self, rows: usize, cols: usize) -> (f64, f64) {
        (self.w() / cols as f64, self.h() / rows as f64)
    }
}

/// Size at which the surface is actually displayed (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen-to-canvas ratio per axis. `None` when the surface has no
    /// usable displayed area.
    pub fn to_canvas_ratio(&self, canvas: CanvasSize) -> Option<ScreenToCanvas> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return None;
        }
        Some(ScreenToCanvas {
            x: canvas.w() / self.width,
            y: canvas.h() / self.height,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenToCanvas {
    pub x: f64,
    pub y: f64,
}

impl ScreenToCanvas {
    pub const IDENTITY: ScreenToCanvas = ScreenToCanvas { x: 1.0, y: 1.0 };

    pub fn apply(&self, p: ScreenPoint) -> CanvasPoint {
        CanvasPoint {
            x: p.x * self.x,
            y: p.y * self.y,
        }
    }
}

/// Pointer position relative to the displayed surface's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Position on the logical canvas, before the pan/zoom transform is inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Constrain a translation so content scaled by `scale` covers the canvas.
///
/// Returns `(x', y', scale)` with `x'` in `[W*(1-scale), 0]` and `y'` in
/// `[H*(1-scale), 0]`. The scale itself passes through unchanged.
pub fn clamp(x: f64, y: f64, scale: f64, canvas: CanvasSize) -> (f64, f64, f64) {
    let min_x = canvas.w() * (1.0 - scale);
    let min_y = canvas.h() * (1.0 - scale);
    (x.max(min_x).min(0.0), y.max(min_y).min(0.0), scale)
}

/// Pan/zoom transform: content point `p` is drawn at `p * scale + translate`.
///
/// Invariant: `MIN_SCALE <= scale <= MAX_SCALE` and the translation lies
/// inside the [`clamp`] bounds. Every constructor and operation returns a
/// clamped value; the fields are private so nothing else can break this.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewportState {
    scale: f64,
    translate_x: f64,
    translate_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportState {
    /// Fully zoomed out, origin-aligned.
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    /// Build a state from arbitrary values, forcing them inside the bounds.
    /// Non-finite inputs fall back to the identity component.
    pub fn clamped(canvas: CanvasSize, translate_x: f64, translate_y: f64, scale: f64) -> Self {
        let scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            MIN_SCALE
        };
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        let (x, y, scale) = clamp(finite_or_zero(translate_x), finite_or_zero(translate_y), scale, canvas);
        Self {
            scale,
            translate_x: x,
            translate_y: y,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn translate_y(&self) -> f64 {
        self.translate_y
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Zoom by `factor` keeping the content under `anchor` fixed on screen.
    ///
    /// The new scale is clamped to [MIN_SCALE, MAX_SCALE] before the
    /// translation is solved, then the translation is clamped. Degenerate
    /// factors (non-positive, NaN, infinite) leave the state unchanged.
    pub fn zoom_to_point(self, canvas: CanvasSize, anchor: CanvasPoint, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 || !anchor.x.is_finite() || !anchor.y.is_finite() {
            return self;
        }
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;

        let new_x = anchor.x - (anchor.x - self.translate_x) * ratio;
        let new_y = anchor.y - (anchor.y - self.translate_y) * ratio;

        let (x, y, scale) = clamp(new_x, new_y, new_scale, canvas);
        Self {
            scale,
            translate_x: x,
            translate_y: y,
        }
    }

    /// Translate by a screen-space pointer delta, converted to canvas units.
    pub fn pan_by(self, canvas: CanvasSize, dx_screen: f64, dy_screen: f64, ratio: ScreenToCanvas) -> Self {
        let dx = dx_screen * ratio.x;
        let dy = dy_screen * ratio.y;
        if !dx.is_finite() || !dy.is_finite() {
            return self;
        }
        let (x, y, scale) = clamp(self.translate_x + dx, self.translate_y + dy, self.scale, canvas);
        Self {
            scale,
            translate_x: x,
            translate_y: y,
        }
    }

    /// Inverse transform: canvas point to unscaled content coordinates.
    pub fn canvas_to_content(&self, p: CanvasPoint) -> (f64, f64) {
        (
            (p.x - self.translate_x) / self.scale,
            (p.y - self.translate_y) / self.scale,
        )
    }

    /// Forward transform: content coordinates to canvas point.
    pub fn content_to_canvas(&self, x: f64, y: f64) -> CanvasPoint {
        CanvasPoint {
            x: x * self.scale + self.translate_x,
            y: y * self.scale + self.translate_y,
        }
    }

    /// Grid cell `(col, row)` drawn under a canvas point, if any.
    pub fn cell_at(&self, canvas: CanvasSize, p: CanvasPoint, rows: usize, cols: usize) -> Option<(usize, usize)> {
        if rows == 0 || cols == 0 || !canvas.contains(p) {
            return None;
        }
        let (cell_w, cell_h) = canvas.cell_size(rows, cols);
        let (u, v) = self.canvas_to_content(p);
        let gx = (u / cell_w).floor();
        let gy = (v / cell_h).floor();
        if gx < 0.0 || gy < 0.0 || gx >= cols as f64 || gy >= rows as f64 {
            return None;
        }
        Some((gx as usize, gy as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_rejects_nan() {
        let s = ViewportState::clamped(CanvasSize::default(), f64::NAN, 10.0, f64::NAN);
        assert_eq!(s, ViewportState::identity());
    }

    #[test]
    fn test_degenerate_display_has_no_ratio() {
        let canvas = CanvasSize::default();
        assert!(DisplaySize::new(0.0, 400.0).to_canvas_ratio(canvas).is_none());
        assert!(DisplaySize::new(400.0, f64::INFINITY).to_canvas_ratio(canvas).is_none());
        let r = DisplaySize::new(400.0, 200.0).to_canvas_ratio(canvas).unwrap();
        assert_eq!((r.x, r.y), (2.0, 4.0));
    }
}
