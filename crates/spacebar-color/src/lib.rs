// SPDX-License-Identifier: MIT
//
// spacebar-color — the color model underneath spacebar's palette engine.
//
// Conversions between `#rrggbb`, 8-bit RGB, HSL and CMYK with documented
// rounding, plus the binary label-color heuristic used for text on
// swatches. Every function here is pure: no randomness, no hidden state,
// no logging. Malformed input fails with a typed `ColorError`; derived
// overflow is clamped.

pub mod color;
pub mod contrast;
pub mod error;

pub use color::{
    Cmyk, Color, Hsl, Rgb, clamp_percent, hex_to_cmyk, hex_to_rgb, hsl_to_rgb, normalize_hue,
    rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
};
pub use contrast::{contrast_color, contrast_for, contrast_ratio, relative_luminance};
pub use error::{ColorError, Result};
