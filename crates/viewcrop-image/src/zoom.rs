// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Zoomed crops — enlarge a fifth-by-sixth region of an image back to full
// size, outlining that region on the source image.

use image::{Pixel, imageops::{self, FilterType}};
use imageproc::definitions::Image;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::{debug, info, instrument};
use viewcrop_core::ZoomAnchor;
use viewcrop_core::error::{Result, ViewcropError};

/// Region of the source image that a zoom enlarges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    /// Nominal outline thickness, `height / 200`; may be zero.
    pub border: u32,
}

impl ZoomWindow {
    /// Outline thickness as drawn: never less than one pixel.
    pub fn thickness(&self) -> u32 {
        self.border.max(1)
    }

    /// The `(x, y, width, height)` of the pixels inside the outline, or
    /// `None` when nothing is left once the outline is removed.
    pub fn inner(&self) -> Option<(u32, u32, u32, u32)> {
        let inset = self.thickness();
        let width = self.width.checked_sub(2 * inset)?;
        let height = self.height.checked_sub(2 * inset)?;
        if width == 0 || height == 0 {
            return None;
        }
        Some((self.left + inset, self.top + inset, width, height))
    }
}

/// Compute the zoom window for a `width` x `height` image.
///
/// The window spans `width / 5` by `height / 6` pixels, rounded down to even
/// sizes, and its outline is `height / 200` pixels thick. Corner anchors place
/// it flush with that corner; `At` centers it on the given pixel, shifted as
/// needed to stay inside the image.
pub fn zoom_window(width: u32, height: u32, anchor: ZoomAnchor) -> ZoomWindow {
    let half_w = width / 5 / 2;
    let half_h = height / 6 / 2;

    let (cx, cy) = match anchor {
        ZoomAnchor::Center => (width / 2, height / 2),
        ZoomAnchor::TopLeft => (half_w, half_h),
        ZoomAnchor::TopRight => (width - half_w, half_h),
        ZoomAnchor::BottomLeft => (half_w, height - half_h),
        ZoomAnchor::BottomRight => (width - half_w, height - half_h),
        ZoomAnchor::At { x, y } => (
            x.clamp(half_w, width - half_w),
            y.clamp(half_h, height - half_h),
        ),
    };

    ZoomWindow {
        left: cx - half_w,
        top: cy - half_h,
        width: 2 * half_w,
        height: 2 * half_h,
        border: height / 200,
    }
}

/// Enlarge the region chosen by `anchor` to the full size of `image`.
///
/// The region inside the window outline is copied out first, then the outline
/// is drawn on `image` in `outline` color, so the returned zoom never shows it.
/// The copy is resized with a triangle (bilinear) filter.
///
/// Returns [`ViewcropError::EmptyRegion`] when the image is too small for the
/// window to hold any pixels.
#[instrument(skip(image, outline), fields(width = image.width(), height = image.height()))]
pub fn zoom_crop<P>(image: &mut Image<P>, anchor: ZoomAnchor, outline: P) -> Result<Image<P>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let (width, height) = image.dimensions();
    let window = zoom_window(width, height, anchor);
    let (x, y, region_w, region_h) = window
        .inner()
        .ok_or(ViewcropError::EmptyRegion { width, height })?;

    let region = imageops::crop_imm(&*image, x, y, region_w, region_h).to_image();
    debug!(x, y, region_w, region_h, "Zoom region copied");

    draw_outline(image, &window, outline);

    let zoomed = imageops::resize(&region, width, height, FilterType::Triangle);
    info!(
        region_w,
        region_h,
        factor = width as f32 / region_w as f32,
        "Zoom applied"
    );
    Ok(zoomed)
}

/// Draw the window outline, growing inward from its edge. Every ring lies
/// within the window, so a window flush with an image edge keeps all four sides.
fn draw_outline<P>(image: &mut Image<P>, window: &ZoomWindow, color: P)
where
    P: Pixel + 'static,
{
    for ring in 0..window.thickness() {
        let width = window.width.saturating_sub(2 * ring);
        let height = window.height.saturating_sub(2 * ring);
        if width == 0 || height == 0 {
            break;
        }
        let rect = Rect::at((window.left + ring) as i32, (window.top + ring) as i32)
            .of_size(width, height);
        draw_hollow_rect_mut(image, rect, color);
    }
}

// -- Tests --------------------------------------------------------------------
