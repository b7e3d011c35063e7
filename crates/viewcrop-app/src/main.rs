// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// viewcrop — command-line image cropping, labelling, and zooming.
//
// Entry point. Initialises logging, loads the optional configuration file,
// merges command-line overrides into it, and runs one command.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use viewcrop_core::{Result, ToolConfig, ZoomAnchor};

#[derive(Parser, Debug)]
#[command(name = "viewcrop", version, about = "Crop, label, and zoom images for display")]
struct Cli {
    /// JSON configuration file; command-line flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Centrally crop an image that exceeds the maximum dimensions.
    Crop(CropArgs),
    /// Write a text label over a filled box.
    Label(LabelArgs),
    /// Enlarge a region of an image to full size.
    Zoom(ZoomArgs),
}

#[derive(Args, Debug)]
struct CropArgs {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    max_width: Option<u32>,
    #[arg(long)]
    max_height: Option<u32>,
}

#[derive(Args, Debug)]
struct LabelArgs {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    text: String,
    /// Horizontal center of the label.
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,
    /// Vertical center of the label.
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,
    /// Glyph height in pixels.
    #[arg(long)]
    scale: Option<f32>,
    /// TrueType/OpenType font file (defaults to the bundled DejaVu Sans).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ZoomArgs {
    input: PathBuf,
    output: PathBuf,
    /// center, top-left, top-right, bottom-left, bottom-right, or X,Y.
    #[arg(long, value_parser = parse_anchor)]
    anchor: Option<ZoomAnchor>,
    /// Also save the source image with the zoomed region outlined.
    #[arg(long)]
    marked: Option<PathBuf>,
}

fn parse_anchor(value: &str) -> std::result::Result<ZoomAnchor, String> {
    ZoomAnchor::from_name(value).ok_or_else(|| format!("unknown zoom anchor `{value}`"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "viewcrop failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    tracing::debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Crop(args) => {
            if let Some(max_width) = args.max_width {
                config.crop.max_width = max_width;
            }
            if let Some(max_height) = args.max_height {
                config.crop.max_height = max_height;
            }
            commands::crop(&args.input, &args.output, &config.crop)
        }
        Command::Label(args) => {
            let label = &mut config.label;
            label.position = (
                args.x.unwrap_or(label.position.0),
                args.y.unwrap_or(label.position.1),
            );
            if let Some(scale) = args.scale {
                label.scale = scale;
            }
            commands::label(
                &args.input,
                &args.output,
                &args.text,
                args.font.as_deref(),
                &config.label,
            )
        }
        Command::Zoom(args) => {
            if let Some(anchor) = args.anchor {
                config.zoom.anchor = anchor;
            }
            commands::zoom(
                &args.input,
                &args.output,
                args.marked.as_deref(),
                &config.zoom,
            )
        }
    }
}
