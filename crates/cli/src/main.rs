#![deny(unsafe_code)]
//! CLI binary for webgl-kit.
//!
//! Subcommands:
//! - `render <surface>` — generate a procedural surface and write a PNG
//! - `layout` — compute canvas backing-store and viewport sizes
//! - `list` — print available surfaces

mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use tracing_subscriber::EnvFilter;
use webgl_kit_core::{CanvasLayout, DisplayMetrics};
use webgl_kit_surfaces::SurfaceKind;

#[derive(Parser)]
#[command(name = "webgl-kit", about = "WebGL setup helpers CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a 512x512 placeholder surface and write it as PNG.
    Render {
        /// Surface name (gradient, mask).
        surface: String,

        /// Output file path.
        #[arg(short, long, default_value = "surface.png")]
        output: PathBuf,
    },
    /// Compute the canvas layout for a window size and pixel ratio.
    Layout {
        /// Window inner width in CSS pixels.
        #[arg(short = 'W', long)]
        width: f64,

        /// Window inner height in CSS pixels.
        #[arg(short = 'H', long)]
        height: f64,

        /// Device pixel ratio.
        #[arg(short, long, default_value_t = 1.0)]
        dpr: f64,
    },
    /// List available surfaces.
    List,
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    // RUST_LOG=webgl_kit_surfaces=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}

fn check_dimension(name: &str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CliError::Input(format!(
            "--{name} must be a finite non-negative number, got {value}"
        )))
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let surfaces = SurfaceKind::list_surfaces();
            if cli.json {
                let info = serde_json::json!({ "surfaces": surfaces });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Surfaces:");
                for name in surfaces {
                    println!("  {name}");
                }
            }
        }
        Command::Render { surface, output } => {
            let kind = SurfaceKind::from_name(&surface)?;
            let generated = kind.generate();
            webgl_kit_surfaces::snapshot::write_png(&generated, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "surface": kind,
                    "width": generated.width(),
                    "height": generated.height(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}) -> {}",
                    kind.name(),
                    generated.width(),
                    generated.height(),
                    output.display()
                );
            }
        }
        Command::Layout { width, height, dpr } => {
            let metrics = DisplayMetrics {
                inner_width: check_dimension("width", width)?,
                inner_height: check_dimension("height", height)?,
                device_pixel_ratio: dpr,
            };
            if metrics.scale() != dpr {
                tracing::warn!(dpr, "invalid device pixel ratio, using 1");
            }
            let layout = CanvasLayout::compute(&metrics);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                println!(
                    "style:    {} x {}",
                    layout.css_width_px(),
                    layout.css_height_px()
                );
                println!(
                    "backing:  {} x {}",
                    layout.backing_width, layout.backing_height
                );
                let vp = layout.viewport;
                println!(
                    "viewport: ({}, {}, {}, {})",
                    vp.x, vp.y, vp.width, vp.height
                );
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_layout_flags() {
        let cli = Cli::try_parse_from(["webgl-kit", "layout", "-W", "800", "-H", "600", "--dpr", "2"])
            .unwrap();
        match cli.command {
            Command::Layout { width, height, dpr } => {
                assert_eq!((width, height, dpr), (800.0, 600.0, 2.0));
            }
            _ => panic!("expected layout command"),
        }
    }

    #[test]
    fn render_defaults_output_path() {
        let cli = Cli::try_parse_from(["webgl-kit", "render", "mask"]).unwrap();
        match cli.command {
            Command::Render { surface, output } => {
                assert_eq!(surface, "mask");
                assert_eq!(output, PathBuf::from("surface.png"));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn check_dimension_rejects_negative_and_nan() {
        assert!(check_dimension("width", 10.0).is_ok());
        assert_eq!(check_dimension("width", -1.0).unwrap_err().exit_code(), 12);
        assert_eq!(check_dimension("height", f64::NAN).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn default_log_filter_is_info() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
        assert_eq!(
            EnvFilter::new(DEFAULT_LOG_FILTER).max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }

    #[test]
    fn render_unknown_surface_fails_with_surface_code() {
        let cli = Cli::try_parse_from(["webgl-kit", "render", "plaid"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }
}
