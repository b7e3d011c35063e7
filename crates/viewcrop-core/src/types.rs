// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for viewcrop.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color, as stored in configuration files.
pub type Rgb8 = [u8; 3];

/// Where the zoom window is placed on the source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomAnchor {
    /// Centered on the middle of the image.
    #[default]
    Center,
    /// Flush with the top-left corner.
    TopLeft,
    /// Flush with the top-right corner.
    TopRight,
    /// Flush with the bottom-left corner.
    BottomLeft,
    /// Flush with the bottom-right corner.
    BottomRight,
    /// Centered on an explicit pixel, clamped so the window stays inside.
    At { x: u32, y: u32 },
}

impl ZoomAnchor {
    /// Parse an anchor name (`center`, `top-left`, `upper_left`, ...) or an
    /// explicit `X,Y` center.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalised = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalised.as_str() {
            "center" | "centre" => Some(Self::Center),
            "top-left" | "upper-left" => Some(Self::TopLeft),
            "top-right" | "upper-right" => Some(Self::TopRight),
            "bottom-left" | "lower-left" => Some(Self::BottomLeft),
            "bottom-right" | "lower-right" => Some(Self::BottomRight),
            other => {
                let (x, y) = other.split_once(',')?;
                Some(Self::At {
                    x: x.trim().parse().ok()?,
                    y: y.trim().parse().ok()?,
                })
            }
        }
    }
}

impl std::fmt::Display for ZoomAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::TopLeft => write!(f, "top-left"),
            Self::TopRight => write!(f, "top-right"),
            Self::BottomLeft => write!(f, "bottom-left"),
            Self::BottomRight => write!(f, "bottom-right"),
            Self::At { x, y } => write!(f, "{x},{y}"),
        }
    }
}
