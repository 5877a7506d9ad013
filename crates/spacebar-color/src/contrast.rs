// SPDX-License-Identifier: MIT
//
// Label color selection for text drawn on top of a swatch.
//
// `contrast_color` is a binary choice between two fixed colors, picked by
// perceptual luma against a fixed midpoint. There is never a gray in
// between: the result has to stay legible on any swatch.
//
// The WCAG helpers below measure how well that choice holds up. They use
// the sRGB linearization + weighted sum from WCAG 2.1, not the luma
// weights used for the binary decision.

use crate::color::{Color, Rgb, hex_to_rgb};
use crate::error::Result;

/// Label color used on light swatches.
pub const DARK_TEXT: Color = Color::from_rgb(Rgb::new(0x11, 0x11, 0x11));

/// Label color used on dark swatches.
pub const LIGHT_TEXT: Color = Color::from_rgb(Rgb::new(0xf5, 0xf5, 0xf5));

/// Luma above which a background counts as light (0–255 scale).
pub const LUMA_THRESHOLD: f64 = 128.0;

/// Pick a legible text color for a background given as hex.
///
/// # Errors
///
/// Returns [`ColorError::Format`](crate::ColorError::Format) for malformed hex.
pub fn contrast_color(hex: &str) -> Result<Color> {
    hex_to_rgb(hex).map(contrast_for)
}

/// Pick a legible text color for an already-parsed background.
///
/// Returns [`DARK_TEXT`] when the luma exceeds [`LUMA_THRESHOLD`], else
/// [`LIGHT_TEXT`].
#[must_use]
pub fn contrast_for(background: Rgb) -> Color {
    if background.luma() > LUMA_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let Rgb { r, g, b } = color.rgb();
    let lin = |v: u8| srgb_to_linear(f64::from(v) / 255.0);
    0.2126f64.mul_add(lin(r), 0.7152f64.mul_add(lin(g), 0.0722 * lin(b)))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// sRGB transfer function, inverse direction (gamma → linear).
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
