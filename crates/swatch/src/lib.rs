#![deny(unsafe_code)]
//! Swatch rendering: lays colors out as side-by-side stripes and writes the
//! raster to disk.
//!
//! This crate sits between `okcolor-core` (which builds the colors) and the
//! CLI. [`SwatchFormat`] maps output format names to writers so the CLI does
//! not duplicate dispatch logic.

pub mod pixel;
pub mod raw;

#[cfg(feature = "png")]
pub mod snapshot;

use std::path::Path;

use okcolor_core::error::ColorError;
use okcolor_core::Srgb;
use tracing::info;

/// Default swatch width in pixels.
pub const DEFAULT_WIDTH: usize = 800;
/// Default swatch height in pixels.
pub const DEFAULT_HEIGHT: usize = 100;

#[cfg(feature = "png")]
const FORMAT_NAMES: &[&str] = &["png", "raw"];
#[cfg(not(feature = "png"))]
const FORMAT_NAMES: &[&str] = &["raw"];

/// Output formats for a swatch.
///
/// Use [`SwatchFormat::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchFormat {
    /// PNG image.
    #[cfg(feature = "png")]
    Png,
    /// Headerless row-major RGB8 bytes.
    Raw,
}

impl SwatchFormat {
    /// Looks up a format by name.
    ///
    /// Returns `ColorError::UnknownFormat` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            #[cfg(feature = "png")]
            "png" => Ok(SwatchFormat::Png),
            "raw" => Ok(SwatchFormat::Raw),
            _ => Err(ColorError::UnknownFormat(name.to_string())),
        }
    }

    /// Returns a slice of all recognized format names.
    pub fn list_formats() -> &'static [&'static str] {
        FORMAT_NAMES
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            #[cfg(feature = "png")]
            SwatchFormat::Png => "png",
            SwatchFormat::Raw => "rgb",
        }
    }

    /// Renders `colors` at `width` x `height` and writes them to `path`.
    pub fn write(
        self,
        colors: &[Srgb],
        width: usize,
        height: usize,
        path: &Path,
    ) -> Result<(), ColorError> {
        match self {
            #[cfg(feature = "png")]
            SwatchFormat::Png => snapshot::write_png(colors, width, height, path)?,
            SwatchFormat::Raw => raw::write_raw(colors, width, height, path)?,
        }
        info!(
            format = ?self,
            colors = colors.len(),
            width,
            height,
            path = %path.display(),
            "wrote swatch"
        );
        Ok(())
    }
}
