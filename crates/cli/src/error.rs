//! Maps okcolor failures onto process exit codes.
//!
//! | code | cause |
//! |------|-------|
//! | 0  | success |
//! | 2  | clap rejected the arguments |
//! | 10 | a color could not be parsed or lies outside the sRGB gamut |
//! | 11 | the swatch file could not be written |
//! | 12 | `--params`, `--format` or the swatch size were rejected |
//! | 13 | JSON output could not be produced |

use std::fmt;

use okcolor_core::ColorError;

/// A failed CLI run.
#[derive(Debug)]
pub enum CliError {
    /// Bad hex, or a color that has no sRGB value.
    Color(ColorError),
    /// Writing the swatch failed.
    Io(String),
    /// A flag value the color core refused.
    Input(String),
    /// serde_json could not render the report.
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(ColorError::NotRepresentable) => write!(
                f,
                "{}; lower the chroma to bring it inside the gamut",
                ColorError::NotRepresentable
            ),
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Io(msg) => CliError::Io(msg),
            ColorError::UnknownFormat(_)
            | ColorError::InvalidParams(_)
            | ColorError::InvalidDimensions => CliError::Input(e.to_string()),
            ColorError::InvalidFormat(_)
            | ColorError::NotRepresentable
            | ColorError::InvalidPalette(_) => CliError::Color(e),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
