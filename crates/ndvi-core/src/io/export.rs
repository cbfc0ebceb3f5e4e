use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::Result;

/// Save the rendered canvas as an 8-bit RGB PNG.
pub fn save_canvas_png(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save_with_format(path, ImageFormat::Png)?;
    info!(
        width = canvas.width(),
        height = canvas.height(),
        output = %path.display(),
        "Canvas exported"
    );
    Ok(())
}
