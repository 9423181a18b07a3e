//! Pure-computation swatch raster from a list of colors.
//!
//! This module is always available (no feature gate) so that the `png`
//! snapshot path and the raw dump share the same pixel layout.

use okcolor_core::error::ColorError;
use okcolor_core::Srgb;

/// Bytes per pixel in the raster: R, G, B, no alpha.
pub const CHANNELS: usize = 3;

/// Largest raster `tile_rgb` will allocate, in pixels (8192 x 8192).
pub const MAX_PIXELS: usize = 1 << 26;

/// Width of each color's block, left to right.
///
/// Every block is `width / n` pixels wide and the first one also takes the
/// `width % n` leftover columns, so the blocks always fill the row exactly.
/// When `width < n` the first block covers the whole row.
pub fn block_widths(n: usize, width: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let block = width / n;
    let mut widths = vec![block; n];
    widths[0] += width % n;
    widths
}

/// Accepts a raster size if both sides are non-zero, fit in `u32` and the
/// pixel count stays within [`MAX_PIXELS`].
pub fn check_dimensions(width: usize, height: usize) -> Result<(), ColorError> {
    if width == 0 || height == 0 {
        return Err(ColorError::InvalidDimensions);
    }
    u32::try_from(width).map_err(|_| ColorError::InvalidDimensions)?;
    u32::try_from(height).map_err(|_| ColorError::InvalidDimensions)?;
    match width.checked_mul(height) {
        Some(pixels) if pixels <= MAX_PIXELS => Ok(()),
        _ => Err(ColorError::InvalidDimensions),
    }
}

/// Tiles colors into vertical stripes and returns a row-major RGB8 buffer of
/// `width * height * 3` bytes.
///
/// Returns `ColorError::InvalidPalette` for an empty color list and
/// `ColorError::InvalidDimensions` for a zero-sized raster or one larger than
/// [`MAX_PIXELS`]. Nothing is allocated on error.
pub fn tile_rgb(colors: &[Srgb], width: usize, height: usize) -> Result<Vec<u8>, ColorError> {
    if colors.is_empty() {
        return Err(ColorError::InvalidPalette(
            "swatch requires at least 1 color".to_string(),
        ));
    }
    check_dimensions(width, height)?;
    let row_len = width * CHANNELS;
    let total = row_len * height;

    let row: Vec<u8> = colors
        .iter()
        .zip(block_widths(colors.len(), width))
        .flat_map(|(c, w)| {
            let px = c.to_rgb8();
            std::iter::repeat(px).take(w).flatten()
        })
        .collect();

    let mut buf = Vec::with_capacity(total);
    for _ in 0..height {
        buf.extend_from_slice(&row);
    }
    Ok(buf)
}
