//! Export data — what JSON, PNG and PDF exporters write for a palette.
//!
//! Rasterizing is not done here. This module computes the values an
//! exporter needs verbatim: the JSON document, and the text printed on
//! each swatch together with a label color that stays legible on it.

use serde::{Deserialize, Serialize};
use spacebar_color::{Cmyk, Color, Rgb, contrast_for};

use crate::adjust::AdjustmentValues;

/// One color in every representation an exporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedColor {
    pub hex: Color,
    pub rgb: Rgb,
    pub cmyk: Cmyk,
}

impl From<Color> for ExportedColor {
    fn from(hex: Color) -> Self {
        Self { hex, rgb: hex.rgb(), cmyk: hex.to_cmyk() }
    }
}

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub colors: Vec<ExportedColor>,
    pub adjustments: AdjustmentValues,
}

impl ExportDocument {
    #[must_use]
    pub fn new(palette: &[Color], adjustments: AdjustmentValues) -> Self {
        Self {
            colors: palette.iter().copied().map(ExportedColor::from).collect(),
            adjustments,
        }
    }

    /// Pretty-printed JSON, two-space indented.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Text drawn on one swatch of an image or document export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchLabel {
    /// The swatch color itself.
    pub background: Color,
    /// Uppercase hex, e.g. `#2A9D8F`.
    pub hex: String,
    /// `r, g, b`.
    pub rgb: String,
    /// `c, m, y, k`.
    pub cmyk: String,
    /// Legible text color for this background.
    pub text_color: Color,
}

impl SwatchLabel {
    #[must_use]
    pub fn new(color: Color) -> Self {
        let Rgb { r, g, b } = color.rgb();
        let Cmyk { c, m, y, k } = color.to_cmyk();
        Self {
            background: color,
            hex: color.to_hex().to_uppercase(),
            rgb: format!("{r}, {g}, {b}"),
            cmyk: format!("{c}, {m}, {y}, {k}"),
            text_color: contrast_for(color.rgb()),
        }
    }

    /// `(caption, value)` rows in print order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [("HEX", self.hex.as_str()), ("RGB", self.rgb.as_str()), ("CMYK", self.cmyk.as_str())]
    }
}

/// Labels for every swatch of a palette.
#[must_use]
pub fn swatch_labels(palette: &[Color]) -> Vec<SwatchLabel> {
    palette.iter().copied().map(SwatchLabel::new).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
