// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command implementations: decode the input file, apply one operation through
// `ImageProcessor`, encode the result.

use std::path::Path;

use image::Rgba;
use tracing::{info, instrument};
use viewcrop_core::config::{CropConfig, LabelConfig, ZoomConfig};
use viewcrop_core::{Result, Rgb8};
use viewcrop_image::font::{default_font, load_font};
use viewcrop_image::{ImageProcessor, LabelStyle};

fn opaque(color: Rgb8) -> Rgba<u8> {
    let [r, g, b] = color;
    Rgba([r, g, b, 255])
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn crop(input: &Path, output: &Path, config: &CropConfig) -> Result<()> {
    let processor = ImageProcessor::open(input)?;
    let (width, height) = (processor.width(), processor.height());

    let cropped = processor.central_crop(config.max_width, config.max_height);
    info!(
        from_w = width,
        from_h = height,
        to_w = cropped.width(),
        to_h = cropped.height(),
        "Central crop done"
    );
    cropped.save(output)
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn label(
    input: &Path,
    output: &Path,
    text: &str,
    font: Option<&Path>,
    config: &LabelConfig,
) -> Result<()> {
    let font = match font {
        Some(path) => load_font(path)?,
        None => default_font()?,
    };
    let (x, y) = config.position;
    let style = LabelStyle::new(opaque(config.text_color), opaque(config.background))
        .at(x, y)
        .with_scale(config.scale);

    ImageProcessor::open(input)?
        .label(text, &font, &style)
        .save(output)
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn zoom(
    input: &Path,
    output: &Path,
    marked: Option<&Path>,
    config: &ZoomConfig,
) -> Result<()> {
    let mut source = ImageProcessor::open(input)?;
    let zoomed = source.zoom(config.anchor, opaque(config.outline_color))?;
    zoomed.save(output)?;

    if let Some(marked) = marked {
        source.save(marked)?;
        info!(marked = %marked.display(), "Outlined source saved");
    }
    Ok(())
}
