#![deny(unsafe_code)]
//! CLI binary for okcolor.
//!
//! Subcommands:
//! - `theme`: build the OKLCh theme, write a swatch, print contrast terms and hexes
//! - `hex <HEX>` / `oklch <L> <C> <H>`: show every representation of one color
//! - `contrast <HEX> <HEX>`: WCAG contrast ratio
//! - `list`: print swatch formats and theme roles

mod error;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use okcolor_core::params::unknown_keys;
use okcolor_core::{contrast_ratio, contrast_term, OkColor, Theme, ThemeParams};
use okcolor_swatch::{SwatchFormat, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use serde_json::{json, Value};
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const NOT_REPRESENTABLE: &str = "not representable";

#[derive(Parser)]
#[command(name = "okcolor", about = "OKLab/OKLCh color conversion and theme swatches")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the theme palette and write it as a swatch image.
    Theme {
        /// Theme parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Swatch width in pixels.
        #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        /// Swatch height in pixels.
        #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Swatch format (png, raw).
        #[arg(short, long, default_value = "png")]
        format: String,

        /// Output file path. Defaults to `theme.<ext>` for the chosen format.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a hex color in every representation.
    Hex {
        /// Color as `#RRGGBB`.
        hex: String,
    },
    /// Show an OKLCh color in every representation.
    Oklch {
        /// Lightness, 0 to 1.
        l: f64,
        /// Chroma.
        c: f64,
        /// Hue in degrees.
        h: f64,

        /// Fail instead of showing the clipped value when the color is
        /// outside the sRGB gamut.
        #[arg(long)]
        strict: bool,
    },
    /// WCAG contrast ratio between two hex colors.
    Contrast {
        a: String,
        b: String,
    },
    /// List swatch formats and theme roles.
    List,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "okcolor_cli=info,okcolor_swatch=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_params(raw: &str) -> Result<ThemeParams, CliError> {
    let params: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    if !params.is_object() {
        return Err(CliError::Input("--params must be a JSON object".into()));
    }
    for key in unknown_keys(&params, ThemeParams::KEYS) {
        warn!(%key, "ignoring unknown theme parameter");
    }
    Ok(ThemeParams::from_json(&params))
}

/// Text form of one color's luminance + 0.05, or the not-representable marker.
fn contrast_line(color: &OkColor) -> String {
    color
        .luminance()
        .map(|l| contrast_term(l).to_string())
        .unwrap_or_else(|_| NOT_REPRESENTABLE.to_string())
}

fn describe(color: &OkColor, json_mode: bool) -> Result<(), CliError> {
    let shown = color.displayable();
    if json_mode {
        let mut info = serde_json::to_value(color)?;
        info["displayable"] = json!(shown.to_hex());
        return print_json(&info);
    }
    let lch = color.oklch();
    println!("oklch      {:.6} {:.6} {:.6}", lch.l, lch.c, lch.h);
    match (color.rgb(), color.hex(), color.luminance()) {
        (Ok(rgb), Ok(hex), Ok(lum)) => {
            println!("hex        {hex}");
            println!("rgb        {:.6} {:.6} {:.6}", rgb.r, rgb.g, rgb.b);
            println!("luminance  {lum:.6}");
        }
        _ => {
            println!("hex        {NOT_REPRESENTABLE}");
            println!("clipped    {shown}");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let formats = SwatchFormat::list_formats();
            let theme = Theme::default();
            let roles: Vec<&str> = theme.iter().map(|e| e.role.as_str()).collect();
            if cli.json {
                print_json(&json!({
                    "formats": formats,
                    "roles": roles,
                }))?;
            } else {
                println!("Formats:");
                println!("  {}", formats.join(", "));
                println!("Theme roles:");
                for role in roles {
                    println!("  {role}");
                }
            }
        }
        Command::Theme {
            params,
            width,
            height,
            format,
            output,
        } => {
            let params = parse_params(&params)?;
            let format = SwatchFormat::from_name(&format)?;
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("theme.{}", format.extension())));

            let theme = Theme::from_params(&params)?;
            debug!(colors = theme.len(), ?params, "built theme");
            for role in theme.not_representable() {
                warn!(role, "color is outside the sRGB gamut, drawing its clipped value");
            }

            format.write(&theme.displayable_colors(), width, height, &output)?;

            if cli.json {
                let entries: Vec<Value> = theme
                    .iter()
                    .map(|e| {
                        json!({
                            "role": e.role,
                            "hex": e.color.hex().ok(),
                            "oklch": e.color.oklch(),
                            "luminance": e.color.luminance().ok(),
                            "contrast_term": e.color.luminance().ok().map(contrast_term),
                            "displayable": e.color.displayable().to_hex(),
                        })
                    })
                    .collect();
                print_json(&json!({
                    "params": params,
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                    "colors": entries,
                }))?;
            } else {
                for entry in theme.iter() {
                    println!("{}", contrast_line(&entry.color));
                }
                for entry in theme.iter() {
                    println!("{}", entry.color);
                }
            }
        }
        Command::Hex { hex } => {
            let color = OkColor::from_hex(&hex)?;
            describe(&color, cli.json)?;
        }
        Command::Oklch { l, c, h, strict } => {
            let color = OkColor::from_oklch(l, c, h);
            if strict {
                color.rgb()?;
            } else if !color.is_representable() {
                warn!(l, c, h, "color is outside the sRGB gamut");
            }
            describe(&color, cli.json)?;
        }
        Command::Contrast { a, b } => {
            let first = OkColor::from_hex(&a)?;
            let second = OkColor::from_hex(&b)?;
            let ratio = contrast_ratio(first.luminance()?, second.luminance()?);
            if cli.json {
                print_json(&json!({
                    "a": first.hex()?,
                    "b": second.hex()?,
                    "ratio": ratio,
                }))?;
            } else {
                println!("{ratio:.2}:1");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
