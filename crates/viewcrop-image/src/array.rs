// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge between `image` buffers and (rows, columns, channels) `ndarray` views.

use image::{ImageBuffer, Pixel};
use imageproc::definitions::Image;
use ndarray::ArrayView3;
use viewcrop_core::error::{Result, ViewcropError};

/// Borrow an image buffer as a (rows, columns, channels) array.
///
/// Rows are the image height and columns its width. No samples are copied.
pub fn image_as_array<P>(image: &Image<P>) -> Result<ArrayView3<'_, P::Subpixel>>
where
    P: Pixel,
{
    let (width, height) = image.dimensions();
    let shape = (
        height as usize,
        width as usize,
        usize::from(P::CHANNEL_COUNT),
    );
    ArrayView3::from_shape(shape, image.as_raw().as_slice()).map_err(|err| {
        ViewcropError::ImageError(format!(
            "image buffer does not match its {width}x{height} dimensions: {err}"
        ))
    })
}

/// Copy a (rows, columns, channels) array, which may be a non-contiguous
/// slice, into a new image buffer.
///
/// The channel axis must match the channel count of `P`.
pub fn array_to_image<P>(array: ArrayView3<'_, P::Subpixel>) -> Result<Image<P>>
where
    P: Pixel,
{
    let (rows, cols, channels) = array.dim();
    let expected = usize::from(P::CHANNEL_COUNT);
    if channels != expected {
        return Err(ViewcropError::ChannelMismatch {
            expected,
            actual: channels,
        });
    }

    let width = u32::try_from(cols)
        .map_err(|_| ViewcropError::ImageError(format!("{cols} columns exceed u32")))?;
    let height = u32::try_from(rows)
        .map_err(|_| ViewcropError::ImageError(format!("{rows} rows exceed u32")))?;

    let samples: Vec<P::Subpixel> = array.iter().copied().collect();
    ImageBuffer::from_raw(width, height, samples).ok_or_else(|| {
        ViewcropError::ImageError(format!(
            "sample count does not fill a {width}x{height} image"
        ))
    })
}
