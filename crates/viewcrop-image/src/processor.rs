// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — central crop, text label, and zoom applied to a decoded
// `DynamicImage`, with file and byte I/O around them.

use ab_glyph::Font;
use image::{DynamicImage, ImageFormat, Rgba};
use tracing::{debug, info, instrument};
use viewcrop_core::ZoomAnchor;
use viewcrop_core::error::{Result, ViewcropError};

use crate::crop::CropWindow;
use crate::label::{LabelStyle, draw_label_mut};
use crate::zoom::zoom_crop;

/// Display pipeline operating on a single in-memory image.
///
/// Cropping and labelling consume `self` and return a new `ImageProcessor`,
/// enabling method chaining:
///
/// ```ignore
/// let font = viewcrop_image::font::default_font()?;
/// ImageProcessor::open("frame.png")?
///     .central_crop(1280, 720)
///     .label("frame 12", &font, &LabelStyle::default())
///     .save("frame-labelled.png")?;
/// ```
pub struct ImageProcessor {
    /// Frame being prepared for display.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Input ----------------------------------------------------------------

    /// Decode the frame stored at `path`; the decoder follows its extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let frame = image::open(path).map_err(|err| {
            ViewcropError::ImageError(format!("cannot read frame {}: {err}", path.display()))
        })?;
        info!(width = frame.width(), height = frame.height(), "Frame opened");
        Ok(Self::from_dynamic(frame))
    }

    /// Decode a frame held in memory, e.g. a PNG received over a pipe.
    #[instrument(skip(encoded), fields(encoded_len = encoded.len()))]
    pub fn from_bytes(encoded: &[u8]) -> Result<Self> {
        let frame = image::load_from_memory(encoded)
            .map_err(|err| ViewcropError::ImageError(format!("cannot decode frame: {err}")))?;
        debug!(width = frame.width(), height = frame.height(), "Frame decoded");
        Ok(Self::from_dynamic(frame))
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Frame ----------------------------------------------------------------

    /// Columns in the frame.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Rows in the frame.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Centrally crop the image so it fits within `max_width` x `max_height`
    /// (up to one pixel of slack per axis). The pixel format is kept.
    #[instrument(skip(self))]
    pub fn central_crop(self, max_width: u32, max_height: u32) -> Self {
        let (width, height) = (self.image.width(), self.image.height());
        let window = CropWindow::for_image(width, height, max_width, max_height);

        if window.is_identity(height as usize, width as usize) {
            debug!(width, height, "Frame within bounds; crop skipped");
            return self;
        }

        let (x, y) = (window.cols.start as u32, window.rows.start as u32);
        let (new_w, new_h) = (window.width() as u32, window.height() as u32);
        info!(x, y, new_w, new_h, "Central crop");
        Self {
            image: self.image.crop_imm(x, y, new_w, new_h),
        }
    }

    /// Draw a text label over a filled box. The image is converted to RGBA.
    #[instrument(skip(self, font, style))]
    pub fn label(self, text: &str, font: &impl Font, style: &LabelStyle<Rgba<u8>>) -> Self {
        let mut rgba = self.image.to_rgba8();
        let (text_w, text_h) = draw_label_mut(&mut rgba, text, font, style);
        info!(text_w, text_h, "Label drawn");
        Self {
            image: DynamicImage::ImageRgba8(rgba),
        }
    }

    /// Zoom into the region chosen by `anchor`.
    ///
    /// The region is outlined on this processor's image, which becomes RGBA;
    /// the enlarged region is returned as a new processor of the same size.
    #[instrument(skip(self, outline))]
    pub fn zoom(&mut self, anchor: ZoomAnchor, outline: Rgba<u8>) -> Result<Self> {
        let mut rgba = self.image.to_rgba8();
        let zoomed = zoom_crop(&mut rgba, anchor, outline)?;
        self.image = DynamicImage::ImageRgba8(rgba);
        Ok(Self {
            image: DynamicImage::ImageRgba8(zoomed),
        })
    }

    // -- Output ---------------------------------------------------------------

    /// The frame as a lossless PNG, ready to hand to a viewer.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode(&self.image, ImageFormat::Png)
    }

    /// Write the frame to `path`, choosing the encoder from its extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path).map_err(|err| {
            ViewcropError::ImageError(format!("cannot write frame {}: {err}", path.display()))
        })?;
        debug!("Frame written");
        Ok(())
    }
}

fn encode(frame: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut encoded = std::io::Cursor::new(Vec::new());
    frame.write_to(&mut encoded, format).map_err(|err| {
        ViewcropError::ImageError(format!("cannot encode frame as {format:?}: {err}"))
    })?;
    Ok(encoded.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::default_font;
    use image::{GrayImage, Luma, RgbImage, Rgb};

    #[test]
    fn central_crop_keeps_pixel_format() {
        let gray = GrayImage::from_fn(300, 101, |x, _| Luma([(x % 256) as u8]));
        let processor = ImageProcessor::from_dynamic(DynamicImage::ImageLuma8(gray));

        let cropped = processor.central_crop(100, 50);
        // Columns: (300 - 100) / 2 = 100 trimmed; rows: (101 - 50) / 2 = 25 trimmed.
        assert_eq!((cropped.width(), cropped.height()), (100, 51));
        let out = cropped.as_dynamic().as_luma8().expect("still grayscale");
        assert_eq!(out.get_pixel(0, 0), &Luma([100]));
    }

    #[test]
    fn central_crop_within_bounds_is_a_no_op() {
        let processor = ImageProcessor::from_dynamic(DynamicImage::new_rgb8(64, 48));
        let cropped = processor.central_crop(63, 47);
        assert_eq!((cropped.width(), cropped.height()), (64, 48));
    }

    #[test]
    fn label_then_png_round_trip() {
        let font = default_font().unwrap();
        let rgb = RgbImage::from_pixel(200, 80, Rgb([0, 0, 0]));
        let style = LabelStyle::<Rgba<u8>>::default().at(100, 40).with_scale(18.0);

        let png = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(rgb))
            .label("viewcrop", &font, &style)
            .to_png_bytes()
            .unwrap();

        let decoded = ImageProcessor::from_bytes(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (200, 80));
        let rgba = decoded.as_dynamic().to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn zoom_marks_source_and_returns_full_size() {
        let mut source = ImageProcessor::from_dynamic(DynamicImage::new_rgb8(400, 600));
        let zoomed = source
            .zoom(ZoomAnchor::BottomRight, Rgba([255, 0, 0, 255]))
            .unwrap();
        assert_eq!((zoomed.width(), zoomed.height()), (400, 600));

        // Bottom-right window: 80x100 flush with the corner.
        let marked = source.as_dynamic().as_rgba8().expect("marked source is RGBA");
        assert_eq!(marked.get_pixel(320, 500), &Rgba([255, 0, 0, 255]));
        assert_eq!(marked.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn zoom_on_tiny_image_fails() {
        let mut source = ImageProcessor::from_dynamic(DynamicImage::new_rgb8(8, 8));
        assert!(matches!(
            source.zoom(ZoomAnchor::Center, Rgba([255, 0, 0, 255])),
            Err(ViewcropError::EmptyRegion { .. })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            ImageProcessor::from_bytes(b"not an image"),
            Err(ViewcropError::ImageError(_))
        ));
    }
}
