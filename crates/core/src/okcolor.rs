//! `OkColor`: one color held in every representation at once.
//!
//! A color is built either from a hex string or from an OKLCh triplet, and
//! every other field is computed eagerly at construction. Fields that cannot
//! be computed because the color lies outside the sRGB gamut hold an explicit
//! not-representable marker, surfaced by the accessors as
//! [`ColorError::NotRepresentable`]. Nothing is mutated afterwards.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::color::{OkLch, Srgb};
use crate::error::ColorError;
use crate::luminance::relative_luminance;
use crate::transform::{normalize_hue, oklch_to_srgb, oklch_to_srgb_clipped, srgb_to_oklch};

/// A color with its hex, sRGB, OKLCh and luminance representations.
///
/// # Example
///
/// ```
/// use okcolor_core::OkColor;
///
/// let red = OkColor::from_hex("#ff0000").unwrap();
/// assert_eq!(red.hex().unwrap(), "#FF0000");
/// assert!((red.luminance().unwrap() - 0.2126).abs() < 1e-6);
///
/// let wild = OkColor::from_oklch(0.5, 100.0, 0.0);
/// assert!(!wild.is_representable());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OkColor {
    oklch: OkLch,
    rgb: Option<Srgb>,
    hex: Option<String>,
    luminance: Option<f64>,
}

impl OkColor {
    /// Builds a color from `"#RRGGBB"` (case insensitive).
    ///
    /// Returns `ColorError::InvalidFormat` for malformed input. A parsed hex
    /// color is always inside the gamut, so every field is populated.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let rgb = Srgb::from_hex(hex)?;
        let oklch = srgb_to_oklch(rgb)?;
        let luminance = relative_luminance(rgb)?;
        Ok(Self {
            oklch,
            rgb: Some(rgb),
            hex: Some(hex.to_ascii_uppercase()),
            luminance: Some(luminance),
        })
    }

    /// Builds a color from OKLCh lightness, chroma and hue (degrees).
    ///
    /// Never fails: if the point needs a negative linear channel, or any
    /// input is NaN or infinite, the rgb, hex and luminance fields are all
    /// marked not representable. The stored hue is normalized to [0, 360).
    pub fn from_oklch(l: f64, c: f64, h: f64) -> Self {
        let oklch = OkLch {
            l,
            c,
            h: normalize_hue(h),
        };
        match oklch_to_srgb(oklch) {
            Ok(rgb) => Self {
                oklch,
                rgb: Some(rgb),
                hex: Some(rgb.to_hex()),
                luminance: relative_luminance(rgb).ok(),
            },
            Err(_) => Self {
                oklch,
                rgb: None,
                hex: None,
                luminance: None,
            },
        }
    }

    /// The OKLCh coordinates. Always available.
    pub fn oklch(&self) -> OkLch {
        self.oklch
    }

    /// The sRGB triplet, clamped to [0, 1].
    pub fn rgb(&self) -> Result<Srgb, ColorError> {
        self.rgb.ok_or(ColorError::NotRepresentable)
    }

    /// Uppercase `"#RRGGBB"`.
    pub fn hex(&self) -> Result<&str, ColorError> {
        self.hex.as_deref().ok_or(ColorError::NotRepresentable)
    }

    /// WCAG relative luminance.
    pub fn luminance(&self) -> Result<f64, ColorError> {
        self.luminance.ok_or(ColorError::NotRepresentable)
    }

    pub fn is_representable(&self) -> bool {
        self.rgb.is_some()
    }

    /// Something that can be put on screen: the exact sRGB value when
    /// representable, otherwise the OKLCh point with its linear channels
    /// clipped into [0, 1].
    pub fn displayable(&self) -> Srgb {
        self.rgb.unwrap_or_else(|| oklch_to_srgb_clipped(self.oklch))
    }
}

impl From<OkLch> for OkColor {
    fn from(c: OkLch) -> Self {
        Self::from_oklch(c.l, c.c, c.h)
    }
}

impl FromStr for OkColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for OkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hex {
            Some(hex) => f.write_str(hex),
            None => f.write_str("not representable"),
        }
    }
}

impl Serialize for OkColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OkColor", 5)?;
        state.serialize_field("hex", &self.hex)?;
        state.serialize_field("rgb", &self.rgb.map(|c| [c.r, c.g, c.b]))?;
        state.serialize_field("oklch", &self.oklch)?;
        state.serialize_field("luminance", &self.luminance)?;
        state.serialize_field("representable", &self.is_representable())?;
        state.end()
    }
}
