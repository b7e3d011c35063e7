// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tool configuration, loaded from a JSON file. Missing sections and fields
// fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Rgb8, ZoomAnchor};

/// Persistent tool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Limits for central cropping.
    pub crop: CropConfig,
    /// Appearance of text labels.
    pub label: LabelConfig,
    /// Placement and outline of zoom windows.
    pub zoom: ZoomConfig,
}

/// Maximum dimensions an image may keep before it is centrally cropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Maximum column count (image width in pixels).
    pub max_width: u32,
    /// Maximum row count (image height in pixels).
    pub max_height: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1080,
        }
    }
}

/// Text label appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Center of the label, in pixels.
    pub position: (i32, i32),
    /// Glyph height in pixels.
    pub scale: f32,
    pub text_color: Rgb8,
    pub background: Rgb8,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            position: (20, 20),
            scale: 48.0,
            text_color: [0, 255, 0],
            background: [255, 255, 255],
        }
    }
}

/// Zoom window placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub anchor: ZoomAnchor,
    /// Color of the outline drawn around the zoomed region on the source.
    pub outline_color: Rgb8,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            anchor: ZoomAnchor::Center,
            outline_color: [255, 0, 0],
        }
    }
}

impl ToolConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }
}
