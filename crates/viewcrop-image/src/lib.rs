// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// viewcrop-image — Image display helpers.
//
// Provides central cropping of (rows, columns, channels) arrays and image
// buffers, text labels drawn over a filled background box, and zoomed crops of
// a region of an image with the region outlined on the source.

pub mod array;
pub mod crop;
pub mod font;
pub mod label;
pub mod processor;
pub mod zoom;

// Re-export the primary entry points so callers can use `viewcrop_image::central_crop` etc.
pub use array::{array_to_image, image_as_array};
pub use crop::{CropWindow, axis_margin, central_crop, central_crop_image};
pub use label::{LabelStyle, draw_label, draw_label_mut};
pub use processor::ImageProcessor;
pub use zoom::{ZoomWindow, zoom_crop, zoom_window};
