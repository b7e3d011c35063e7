// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for viewcrop.

use thiserror::Error;

/// Top-level error type for all viewcrop operations.
#[derive(Debug, Error)]
pub enum ViewcropError {
    // -- Array shape errors --
    #[error("invalid image shape: expected {expected} axes, got {actual}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("channel count mismatch: pixel type has {expected} channels, array has {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    // -- Image errors --
    #[error("region to zoom is empty for a {width}x{height} image")]
    EmptyRegion { width: u32, height: u32 },

    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("font could not be loaded: {0}")]
    Font(String),

    // -- Configuration / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ViewcropError>;
