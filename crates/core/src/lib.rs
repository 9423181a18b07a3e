#![deny(unsafe_code)]
//! Core color types for okcolor.
//!
//! Provides the color value types (`Srgb`, `LinearRgb`, `OkLab`, `OkLch`),
//! the conversions between them, the `OkColor` facade that keeps every
//! representation of a color together, WCAG luminance and contrast, and the
//! default `Theme` built from OKLCh coordinates.

pub mod color;
pub mod error;
pub mod luminance;
pub mod okcolor;
pub mod params;
pub mod theme;
pub mod transform;

pub use color::{LinearRgb, OkLab, OkLch, Srgb};
pub use error::ColorError;
pub use luminance::{contrast_ratio, contrast_term, relative_luminance};
pub use okcolor::OkColor;
pub use theme::{Theme, ThemeEntry, ThemeParams};
