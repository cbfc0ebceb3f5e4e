/// Default logical canvas width (and pixel width of the rendered surface).
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default logical canvas height.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

/// Fully zoomed out. Content exactly covers the canvas at this scale.
pub const MIN_SCALE: f64 = 1.0;

/// Deepest zoom allowed.
pub const MAX_SCALE: f64 = 8.0;

/// Wheel zoom sensitivity `k` in `factor = exp(-delta_y * k)`.
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.001;

/// Overlap (in logical units) added to every cell rectangle so adjacent
/// cells never leave a hairline seam after floating-point rounding.
pub const DEFAULT_CELL_OVERLAP: f64 = 0.4;

/// Canvas clear color behind the grid.
pub const DEFAULT_BACKGROUND: [u8; 3] = [17, 24, 39];

/// Minimum pixel count (w*h) to rasterize rows in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Lowest meaningful NDVI value.
pub const NDVI_MIN: f32 = -1.0;

/// Highest meaningful NDVI value.
pub const NDVI_MAX: f32 = 1.0;
