// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fonts for text labels. DejaVu Sans is bundled so labels work without any
// font installed on the host.

use std::path::Path;

use ab_glyph::FontArc;
use tracing::{debug, instrument};
use viewcrop_core::error::{Result, ViewcropError};

static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// The bundled DejaVu Sans font.
pub fn default_font() -> Result<FontArc> {
    FontArc::try_from_slice(DEJAVU_SANS)
        .map_err(|err| ViewcropError::Font(format!("bundled DejaVu Sans: {err}")))
}

/// Load a TrueType or OpenType font from a file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_font(path: impl AsRef<Path>) -> Result<FontArc> {
    let data = std::fs::read(path.as_ref())?;
    debug!(bytes = data.len(), "Font file read");
    FontArc::try_from_vec(data).map_err(|err| {
        ViewcropError::Font(format!("{}: {}", path.as_ref().display(), err))
    })
}
