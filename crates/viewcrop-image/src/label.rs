// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text labels — a line of text centered on a point, drawn over a filled
// background box.

use ab_glyph::{Font, PxScale};
use image::{Pixel, Rgb, Rgba};
use imageproc::definitions::{Clamp, Image};
use imageproc::drawing::{Canvas, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use tracing::{debug, instrument};

/// Default label center, in pixels from the top-left corner.
pub const DEFAULT_LABEL_POSITION: (i32, i32) = (20, 20);

/// Default glyph height in pixels.
pub const DEFAULT_LABEL_SCALE: f32 = 48.0;

/// How a label is placed and colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle<P> {
    /// Center of the label.
    pub position: (i32, i32),
    pub scale: PxScale,
    pub text_color: P,
    pub background: P,
}

impl<P> LabelStyle<P> {
    /// A style with the given colors at the default position and scale.
    pub fn new(text_color: P, background: P) -> Self {
        Self {
            position: DEFAULT_LABEL_POSITION,
            scale: PxScale::from(DEFAULT_LABEL_SCALE),
            text_color,
            background,
        }
    }

    /// Center the label on `(x, y)`.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = (x, y);
        self
    }

    /// Set the glyph height in pixels.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = PxScale::from(scale);
        self
    }
}

/// Green text on a white box.
impl Default for LabelStyle<Rgb<u8>> {
    fn default() -> Self {
        Self::new(Rgb([0, 255, 0]), Rgb([255, 255, 255]))
    }
}

/// Green text on an opaque white box.
impl Default for LabelStyle<Rgba<u8>> {
    fn default() -> Self {
        Self::new(Rgba([0, 255, 0, 255]), Rgba([255, 255, 255, 255]))
    }
}

/// Background box for text of `size` centered on `position`.
///
/// The box extends a full text width and height on each side of the center,
/// both ends inclusive, so it is `2w + 1` by `2h + 1` pixels.
pub fn label_box(position: (i32, i32), size: (u32, u32)) -> Rect {
    let (x, y) = position;
    let (w, h) = size;
    Rect::at(x - w as i32, y - h as i32).of_size(2 * w + 1, 2 * h + 1)
}

/// Top-left corner at which text of `size` is drawn so it is centered on
/// `position`.
pub fn text_origin(position: (i32, i32), size: (u32, u32)) -> (i32, i32) {
    let (x, y) = position;
    let (w, h) = size;
    (x - (w / 2) as i32, y - (h / 2) as i32)
}

/// Draw `text` over a filled background box, both centered on
/// `style.position`. Anything falling outside the canvas is clipped.
///
/// Returns the measured text size `(width, height)` in pixels.
#[instrument(skip(canvas, font, style), fields(position = ?style.position))]
pub fn draw_label_mut<C>(
    canvas: &mut C,
    text: &str,
    font: &impl Font,
    style: &LabelStyle<C::Pixel>,
) -> (u32, u32)
where
    C: Canvas,
    C::Pixel: 'static,
    <C::Pixel as Pixel>::Subpixel: Into<f32> + Clamp<f32>,
{
    let size = text_size(style.scale, font, text);
    let background = label_box(style.position, size);
    draw_filled_rect_mut(canvas, background, style.background);

    let (x, y) = text_origin(style.position, size);
    draw_text_mut(canvas, style.text_color, x, y, style.scale, font, text);

    debug!(
        text_width = size.0,
        text_height = size.1,
        box_left = background.left(),
        box_top = background.top(),
        "Label drawn"
    );
    size
}

/// Draw a label on a copy of `image`, returning the copy and the measured
/// text size.
#[must_use = "the function does not modify the original image"]
pub fn draw_label<P>(
    image: &Image<P>,
    text: &str,
    font: &impl Font,
    style: &LabelStyle<P>,
) -> (Image<P>, (u32, u32))
where
    P: Pixel + 'static,
    P::Subpixel: Into<f32> + Clamp<f32>,
{
    let mut out = image.clone();
    let size = draw_label_mut(&mut out, text, font, style);
    (out, size)
}
