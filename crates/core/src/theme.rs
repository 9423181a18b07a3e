//! Theme palette: an ordered list of named colors built in OKLCh.
//!
//! The default theme has six low-chroma neutrals (three backgrounds, three
//! foregrounds) followed by a ring of foreground accents and a ring of
//! background accents, each ring stepping the hue at fixed lightness and
//! chroma. Colors that fall outside the sRGB gamut stay in the theme with
//! their not-representable marker; the caller decides what to do with them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Srgb;
use crate::error::ColorError;
use crate::okcolor::OkColor;
use crate::params::{param_f64, param_usize};
use crate::transform::normalize_hue;

/// Neutral roles as (role, lightness, hue), in output order.
const NEUTRALS: [(&str, f64, f64); 6] = [
    ("bg", 0.95, 132.0),
    ("bg1", 0.80, 72.0),
    ("bg2", 0.80, 192.0),
    ("fg1", 0.30, 12.0),
    ("fg2", 0.30, 252.0),
    ("fg", 0.10, 312.0),
];

/// Largest accepted `accent_count`: one accent per degree of hue.
pub const MAX_ACCENTS: usize = 360;

/// Knobs for [`Theme::from_params`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeParams {
    /// Chroma of the six neutral roles.
    pub neutral_chroma: f64,
    /// Chroma shared by every accent.
    pub accent_chroma: f64,
    /// Lightness of the foreground accent ring.
    pub foreground_lightness: f64,
    /// Lightness of the background accent ring.
    pub background_lightness: f64,
    /// Hue of the first accent, in degrees.
    pub hue_start: f64,
    /// Hue increment between accents, in degrees.
    pub hue_step: f64,
    /// Accents per ring.
    pub accent_count: usize,
}

impl Default for ThemeParams {
    fn default() -> Self {
        Self {
            neutral_chroma: 0.01,
            accent_chroma: 0.09,
            foreground_lightness: 0.50,
            background_lightness: 0.60,
            hue_start: 42.0,
            hue_step: 60.0,
            accent_count: 6,
        }
    }
}

impl ThemeParams {
    /// Every key [`ThemeParams::from_json`] understands.
    pub const KEYS: &'static [&'static str] = &[
        "neutral_chroma",
        "accent_chroma",
        "foreground_lightness",
        "background_lightness",
        "hue_start",
        "hue_step",
        "accent_count",
    ];

    /// Reads overrides from a JSON object. Missing or mistyped keys keep
    /// their default.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            neutral_chroma: param_f64(params, "neutral_chroma", d.neutral_chroma),
            accent_chroma: param_f64(params, "accent_chroma", d.accent_chroma),
            foreground_lightness: param_f64(params, "foreground_lightness", d.foreground_lightness),
            background_lightness: param_f64(params, "background_lightness", d.background_lightness),
            hue_start: param_f64(params, "hue_start", d.hue_start),
            hue_step: param_f64(params, "hue_step", d.hue_step),
            accent_count: param_usize(params, "accent_count", d.accent_count),
        }
    }

    /// Checks the parameters before any color is built.
    ///
    /// Returns `ColorError::InvalidParams` if `accent_count` exceeds
    /// [`MAX_ACCENTS`].
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.accent_count > MAX_ACCENTS {
            return Err(ColorError::InvalidParams(format!(
                "accent_count {} exceeds {MAX_ACCENTS}",
                self.accent_count
            )));
        }
        Ok(())
    }
}

/// One named color of a theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeEntry {
    pub role: String,
    pub color: OkColor,
}

impl ThemeEntry {
    pub fn new(role: impl Into<String>, color: OkColor) -> Self {
        Self {
            role: role.into(),
            color,
        }
    }
}

/// An ordered, non-empty list of theme colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    entries: Vec<ThemeEntry>,
}

impl Theme {
    /// Creates a theme from entries in display order.
    ///
    /// Requires at least one entry.
    pub fn new(entries: Vec<ThemeEntry>) -> Result<Self, ColorError> {
        if entries.is_empty() {
            return Err(ColorError::InvalidPalette(
                "theme requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// Builds the neutrals plus two accent rings described by `params`.
    ///
    /// Returns `ColorError::InvalidParams` if the parameters fail
    /// [`ThemeParams::validate`]. Out-of-gamut colors are not an error.
    pub fn from_params(params: &ThemeParams) -> Result<Self, ColorError> {
        params.validate()?;
        Ok(Self::build(params))
    }

    fn build(params: &ThemeParams) -> Self {
        let neutrals = NEUTRALS.iter().map(|&(role, l, h)| {
            ThemeEntry::new(role, OkColor::from_oklch(l, params.neutral_chroma, h))
        });
        let ring = |prefix: &'static str, lightness: f64| {
            hue_ring(
                lightness,
                params.accent_chroma,
                params.hue_start,
                params.hue_step,
                params.accent_count,
            )
            .into_iter()
            .enumerate()
            .map(move |(i, color)| ThemeEntry::new(format!("{prefix}-{i}"), color))
        };
        let entries = neutrals
            .chain(ring("fg-accent", params.foreground_lightness))
            .chain(ring("bg-accent", params.background_lightness))
            .collect();
        // six neutrals are always present, so the theme is never empty
        Self { entries }
    }

    /// Number of colors in the theme.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed theme.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeEntry> {
        self.entries.iter()
    }

    /// Looks up a color by role name.
    pub fn get(&self, role: &str) -> Option<&OkColor> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| &e.color)
    }

    /// One drawable sRGB value per entry, in order.
    pub fn displayable_colors(&self) -> Vec<Srgb> {
        self.entries.iter().map(|e| e.color.displayable()).collect()
    }

    /// Roles whose color lies outside the sRGB gamut.
    pub fn not_representable(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.color.is_representable())
            .map(|e| e.role.as_str())
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::build(&ThemeParams::default())
    }
}

/// `count` colors at fixed lightness and chroma, hue stepping from `start`
/// by `step` degrees. Hues are normalized to [0, 360).
pub fn hue_ring(lightness: f64, chroma: f64, start: f64, step: f64, count: usize) -> Vec<OkColor> {
    (0..count)
        .map(|i| OkColor::from_oklch(lightness, chroma, normalize_hue(start + step * i as f64)))
        .collect()
}
