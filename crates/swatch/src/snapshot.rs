//! PNG output of a swatch.
//!
//! This module is feature-gated behind `png` (default on) so that builds which
//! only need the raw dump do not pull in the `image` crate. The pixel layout
//! itself lives in [`crate::pixel`] (always available).

use std::path::Path;

use okcolor_core::error::ColorError;
use okcolor_core::Srgb;
use tracing::debug;

use crate::pixel::tile_rgb;

/// Writes colors as a PNG of side-by-side stripes.
///
/// Returns `ColorError::InvalidDimensions` if the size is zero or over
/// [`MAX_PIXELS`](crate::pixel::MAX_PIXELS), or
/// `ColorError::Io` on write failure.
pub fn write_png(colors: &[Srgb], width: usize, height: usize, path: &Path) -> Result<(), ColorError> {
    let rgb = tile_rgb(colors, width, height)?;
    let w = u32::try_from(width).map_err(|_| ColorError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| ColorError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, rgb)
        .ok_or_else(|| ColorError::Io("RGB buffer size mismatch".into()))?;
    debug!(path = %path.display(), width, height, "writing png swatch");
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_png_round_trip() {
        let colors = [Srgb::new(1.0, 0.0, 0.0), Srgb::new(0.0, 0.0, 1.0)];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");

        write_png(&colors, 16, 4, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 4);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(15, 3).0, [0, 0, 255]);
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/swatch.png");
        let result = write_png(&[Srgb::new(0.5, 0.5, 0.5)], 4, 4, &path);
        assert!(matches!(result, Err(ColorError::Io(_))));
    }
}
