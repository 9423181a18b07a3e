//! Headerless RGB8 dump of a swatch: `width * height * 3` bytes, row-major.

use std::fs;
use std::path::Path;

use okcolor_core::error::ColorError;
use okcolor_core::Srgb;
use tracing::debug;

use crate::pixel::tile_rgb;

/// Writes the swatch raster to `path` as raw bytes.
///
/// Returns `ColorError::Io` on write failure.
pub fn write_raw(colors: &[Srgb], width: usize, height: usize, path: &Path) -> Result<(), ColorError> {
    let rgb = tile_rgb(colors, width, height)?;
    debug!(path = %path.display(), bytes = rgb.len(), "writing raw swatch");
    fs::write(path, rgb).map_err(|e| ColorError::Io(e.to_string()))
}
