//! Error types for the okcolor core.

use thiserror::Error;

/// Errors produced by color conversion, palette construction and rendering.
///
/// `Clone` and `PartialEq` so a failed conversion can be stored inside an
/// [`OkColor`](crate::okcolor::OkColor) and compared in tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex string was not `#` followed by exactly six hex digits.
    #[error("invalid hex color: {0}")]
    InvalidFormat(String),

    /// An output format name was not recognized.
    #[error("unknown swatch format: {0}")]
    UnknownFormat(String),

    /// Theme parameters were out of range.
    #[error("invalid theme parameters: {0}")]
    InvalidParams(String),

    /// The color needs a negative linear-light channel, i.e. it lies outside
    /// the sRGB gamut.
    #[error("color is not representable in sRGB")]
    NotRepresentable,

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Width or height was zero, or the raster exceeded the pixel limit.
    #[error("invalid dimensions: width and height must be non-zero and within the pixel limit")]
    InvalidDimensions,

    /// Writing an output file failed.
    #[error("i/o error: {0}")]
    Io(String),
}
