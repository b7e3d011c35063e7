// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central cropping — trims equal margins from both ends of the row and column
// axes once an image exceeds its maximum dimensions. Works on `ndarray` views
// of (rows, columns, channels) arrays and on `image` crate views.

use std::ops::Range;

use image::{GenericImageView, SubImage, imageops};
use ndarray::{ArrayView, ArrayView3, Dimension, Ix3, s};
use tracing::{debug, instrument};
use viewcrop_core::error::{Result, ViewcropError};

/// Number of elements to trim from each end of an axis of length `len` so it
/// approaches `max`, or `None` when the axis is left alone.
///
/// An axis is only trimmed once it exceeds its limit by more than one element,
/// and the margin is floor-divided, so the kept length is `max` or `max + 1`
/// depending on parity: 101 elements limited to 50 keep 51.
pub fn axis_margin(len: usize, max: usize) -> Option<usize> {
    if len > max.saturating_add(1) {
        Some((len - max) / 2)
    } else {
        None
    }
}

fn trimmed(len: usize, max: usize) -> Range<usize> {
    match axis_margin(len, max) {
        Some(margin) => margin..len - margin,
        None => 0..len,
    }
}

/// The rows and columns kept by a central crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropWindow {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl CropWindow {
    /// Window for an image of `rows` x `cols` limited to `max_rows` x `max_cols`.
    ///
    /// Each axis is trimmed independently; an axis within its limit is kept
    /// whole.
    pub fn centered(rows: usize, cols: usize, max_rows: usize, max_cols: usize) -> Self {
        Self {
            rows: trimmed(rows, max_rows),
            cols: trimmed(cols, max_cols),
        }
    }

    /// Window for an image of `width` x `height` pixels, in image-crate terms:
    /// `max_width` limits the columns and `max_height` the rows.
    pub fn for_image(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        Self::centered(
            height as usize,
            width as usize,
            max_height as usize,
            max_width as usize,
        )
    }

    /// True when the window covers the whole `rows` x `cols` image.
    pub fn is_identity(&self, rows: usize, cols: usize) -> bool {
        self.rows == (0..rows) && self.cols == (0..cols)
    }

    /// Number of rows kept.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns kept.
    pub fn width(&self) -> usize {
        self.cols.len()
    }
}

/// Centrally crop a (rows, columns, channels) array so that it fits within
/// `max_rows` x `max_cols`, up to the one-element slack of [`axis_margin`].
///
/// The result is a view into the same storage as `image`; when neither axis
/// exceeds its limit, `image` itself is returned. All channels are kept.
///
/// Returns [`ViewcropError::InvalidShape`] when `image` does not have exactly
/// three axes.
#[instrument(skip(image), fields(ndim = image.ndim()))]
pub fn central_crop<'a, A, D>(
    image: ArrayView<'a, A, D>,
    max_rows: usize,
    max_cols: usize,
) -> Result<ArrayView3<'a, A>>
where
    D: Dimension,
{
    let actual = image.ndim();
    let image = image
        .into_dimensionality::<Ix3>()
        .map_err(|_| ViewcropError::InvalidShape {
            expected: 3,
            actual,
        })?;

    let (rows, cols, channels) = image.dim();
    let window = CropWindow::centered(rows, cols, max_rows, max_cols);

    if window.is_identity(rows, cols) {
        debug!(rows, cols, channels, "Image within bounds; returned unchanged");
        return Ok(image);
    }

    debug!(
        rows,
        cols,
        kept_rows = window.height(),
        kept_cols = window.width(),
        "Central crop applied"
    );
    Ok(image.slice_move(s![window.rows, window.cols, ..]))
}

/// Centrally crop any `image` crate view so that it fits within
/// `max_width` x `max_height` pixels, using the same policy as
/// [`central_crop`]. The returned `SubImage` borrows `image`.
pub fn central_crop_image<I>(image: &I, max_width: u32, max_height: u32) -> SubImage<&I>
where
    I: GenericImageView,
{
    let (width, height) = image.dimensions();
    let window = CropWindow::for_image(width, height, max_width, max_height);
    imageops::crop_imm(
        image,
        window.cols.start as u32,
        window.rows.start as u32,
        window.width() as u32,
        window.height() as u32,
    )
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use ndarray::{Array, Array2, Array3, Array4, ArrayD, IxDyn};

    /// A (rows, cols, channels) array where each sample encodes its position.
    fn ramp(rows: usize, cols: usize, channels: usize) -> Array3<u32> {
        Array3::from_shape_fn((rows, cols, channels), |(r, c, ch)| {
            (r * 10_000 + c * 10 + ch) as u32
        })
    }

    #[test]
    fn axis_margin_needs_more_than_one_extra_element() {
        assert_eq!(axis_margin(50, 50), None);
        assert_eq!(axis_margin(51, 50), None);
        assert_eq!(axis_margin(52, 50), Some(1));
        assert_eq!(axis_margin(100, 50), Some(25));
        assert_eq!(axis_margin(101, 50), Some(25));
        assert_eq!(axis_margin(10, usize::MAX), None);
    }

    #[test]
    fn limits_equal_to_size_return_same_storage() {
        let image = ramp(40, 30, 3);
        let view = image.view();
        let out = central_crop(view, 40, 30).unwrap();
        assert_eq!(out.dim(), (40, 30, 3));
        assert_eq!(out.as_ptr(), image.as_ptr());
    }

    #[test]
    fn only_rows_exceed() {
        let image = ramp(100, 100, 3);
        let out = central_crop(image.view(), 50, 100).unwrap();
        assert_eq!(out.dim(), (50, 100, 3));
        // First kept row is row 25; columns untouched.
        assert_eq!(out[[0, 0, 0]], image[[25, 0, 0]]);
        assert_eq!(out[[49, 99, 2]], image[[74, 99, 2]]);
    }

    #[test]
    fn odd_difference_keeps_one_extra_row() {
        let image = ramp(101, 80, 3);
        let out = central_crop(image.view(), 50, 80).unwrap();
        assert_eq!(out.dim(), (51, 80, 3));
        assert_eq!(out[[0, 0, 0]], image[[25, 0, 0]]);
        assert_eq!(out[[50, 0, 0]], image[[75, 0, 0]]);
    }

    #[test]
    fn only_columns_exceed() {
        let image = ramp(20, 64, 4);
        let out = central_crop(image.view(), 20, 30).unwrap();
        assert_eq!(out.dim(), (20, 30, 4));
        assert_eq!(out[[0, 0, 0]], image[[0, 17, 0]]);
    }

    #[test]
    fn both_axes_exceed() {
        let image = ramp(90, 71, 3);
        let out = central_crop(image.view(), 30, 20).unwrap();
        // (90 - 30) / 2 = 30 rows trimmed each end; (71 - 20) / 2 = 25 columns.
        assert_eq!(out.dim(), (30, 21, 3));
        assert_eq!(out[[0, 0, 1]], image[[30, 25, 1]]);
    }

    #[test]
    fn one_element_slack_is_not_cropped() {
        let image = ramp(51, 81, 1);
        let out = central_crop(image.view(), 50, 80).unwrap();
        assert_eq!(out.dim(), (51, 81, 1));
    }

    #[test]
    fn zero_limits_trim_down_to_parity() {
        let even = ramp(10, 11, 2);
        assert_eq!(central_crop(even.view(), 0, 0).unwrap().dim(), (0, 1, 2));

        let small = ramp(1, 1, 2);
        assert_eq!(central_crop(small.view(), 0, 0).unwrap().dim(), (1, 1, 2));
    }

    #[test]
    fn crop_is_idempotent_once_within_bounds() {
        let image = ramp(137, 93, 3);
        let once = central_crop(image.view(), 40, 60).unwrap();
        let twice = central_crop(once.view(), 40, 60).unwrap();
        assert_eq!(once.dim(), twice.dim());
        assert_eq!(once.as_ptr(), twice.as_ptr());
    }

    #[test]
    fn channel_count_preserved_in_every_branch() {
        let image = ramp(60, 60, 5);
        for (max_rows, max_cols) in [(10, 10), (10, 60), (60, 10), (60, 60)] {
            let out = central_crop(image.view(), max_rows, max_cols).unwrap();
            assert_eq!(out.dim().2, 5);
        }
    }

    #[test]
    fn dynamic_view_with_three_axes_is_accepted() {
        let image = ArrayD::<u8>::zeros(IxDyn(&[12, 8, 3]));
        let out = central_crop(image.view(), 4, 8).unwrap();
        assert_eq!(out.dim(), (4, 8, 3));
    }

    #[test]
    fn two_axis_input_is_invalid_shape() {
        let image = Array2::<u8>::zeros((10, 10));
        let err = central_crop(image.view(), 5, 5).unwrap_err();
        assert!(matches!(
            err,
            ViewcropError::InvalidShape {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn four_axis_input_is_invalid_shape() {
        let image = Array4::<u8>::zeros((2, 10, 10, 3));
        let err = central_crop(image.view(), 5, 5).unwrap_err();
        assert!(matches!(err, ViewcropError::InvalidShape { actual: 4, .. }));

        let dynamic = Array::<u8, _>::zeros(IxDyn(&[10]));
        let err = central_crop(dynamic.view(), 5, 5).unwrap_err();
        assert!(matches!(err, ViewcropError::InvalidShape { actual: 1, .. }));
    }

    #[test]
    fn image_view_matches_array_crop() {
        let image = RgbImage::from_fn(101, 64, |x, y| Rgb([x as u8, y as u8, 7]));
        let sub = central_crop_image(&image, 50, 20);
        // Columns: (101 - 50) / 2 = 25 trimmed each end; rows: (64 - 20) / 2 = 22.
        assert_eq!(sub.dimensions(), (51, 20));
        assert_eq!(sub.get_pixel(0, 0), Rgb([25, 22, 7]));

        let window = CropWindow::for_image(101, 64, 50, 20);
        assert_eq!(window.cols, 25..76);
        assert_eq!(window.rows, 22..42);
    }

    #[test]
    fn image_within_bounds_keeps_full_view() {
        let image = RgbImage::new(32, 24);
        let sub = central_crop_image(&image, 32, 24);
        assert_eq!(sub.dimensions(), (32, 24));
        assert!(CropWindow::for_image(32, 24, 32, 24).is_identity(24, 32));
    }
}
