// SPDX-License-Identifier: MIT
//
// spacebar color model — hex, RGB, HSL and CMYK with exact rounding rules.
//
// Single-character variable names (r, g, b, h, s, l, c, m, y, k) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// The canonical color is an 8-bit sRGB triple. Everything else is a view:
//
//   "#rrggbb" ↔ Rgb ↔ Hsl        (reversible, ±1 per channel through Hsl)
//               Rgb → Cmyk       (derived, never a source of truth)
//
// Hex output is always lowercase. Input accepts either case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple. Each channel is in `[0, 255]` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a canonical [`Color`].
    #[inline]
    #[must_use]
    pub const fn to_color(self) -> Color {
        Color(self)
    }

    /// Perceptual luma on the 0–255 scale (`0.299 R + 0.587 G + 0.114 B`).
    #[must_use]
    pub fn luma(self) -> f64 {
        0.299f64.mul_add(
            f64::from(self.r),
            0.587f64.mul_add(f64::from(self.g), 0.114 * f64::from(self.b)),
        )
    }

    /// Whether all three channels are equal.
    #[inline]
    #[must_use]
    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue/saturation/lightness.
///
/// - `h`: hue angle in degrees, `[0, 360)` after normalization
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
///
/// Values are kept unrounded so that an `Rgb → Hsl → Rgb` trip only loses
/// precision once, at the final quantization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap the hue into `[0, 360)` and clamp saturation/lightness to `[0, 100]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: clamp_percent(self.s),
            l: clamp_percent(self.l),
        }
    }

    /// Quantize to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

// ─── Cmyk ────────────────────────────────────────────────────────────────────

/// Cyan/magenta/yellow/key as integer percentages in `[0, 100]`.
///
/// Always derived from RGB. There is deliberately no `Cmyk → Rgb` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A palette color: an sRGB triple whose textual form is `#rrggbb`.
///
/// Parsing accepts upper- or lowercase digits; display is always lowercase,
/// so two colors compare equal exactly when their canonical hex strings do.
/// Serializes as the hex string.
///
/// # Examples
///
/// ```
/// use spacebar_color::Color;
///
/// let teal: Color = "#1ABC9C".parse().unwrap();
/// assert_eq!(teal.to_string(), "#1abc9c");
/// assert_eq!(teal.rgb().g, 0xbc);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Rgb);

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self(Rgb::new(0, 0, 0));

    /// Pure white.
    pub const WHITE: Self = Self(Rgb::new(255, 255, 255));

    #[inline]
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Parse a `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] if the string is not `#` followed by
    /// exactly six hex digits.
    pub fn hex(s: &str) -> Result<Self> {
        hex_to_rgb(s).map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Rgb { r, g, b } = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.0)
    }

    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self(hsl_to_rgb(hsl))
    }

    #[must_use]
    pub fn to_cmyk(self) -> Cmyk {
        rgb_to_cmyk(self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Parse `#rrggbb` into an RGB triple.
///
/// # Errors
///
/// Returns [`ColorError::Format`] unless `hex` is `#` plus exactly six hex
/// digits. Shorthand (`#abc`), alpha (`#rrggbbaa`) and a missing `#` are
/// all rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6)
        .ok_or_else(|| ColorError::format(hex))?
        .as_bytes();

    let byte = |i: usize| parse_hex_byte(&digits[i..i + 2]).ok_or_else(|| ColorError::format(hex));
    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Format floating-point channels as a canonical color.
///
/// Each channel is rounded to the nearest integer and clamped to `[0, 255]`.
/// Non-finite channels become 0.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Color {
    Color(Rgb::new(channel(r), channel(g), channel(b)))
}

/// Convert RGB to HSL (hue in degrees, saturation/lightness in percent).
///
/// Achromatic inputs report hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    let hi = f64::from(max) / 255.0;
    let lo = f64::from(min) / 255.0;
    let l = (hi + lo) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = hi - lo;
    let s = if l > 0.5 { d / (2.0 - hi - lo) } else { d / (hi + lo) };

    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let h = if max == rgb.r {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(normalize_hue(h * 60.0), s * 100.0, l * 100.0)
}

/// Convert HSL to 8-bit RGB.
///
/// The hue wraps and saturation/lightness are clamped before conversion, so
/// any finite input produces a valid color.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl.normalized();
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s <= 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Derive CMYK percentages from RGB.
///
/// Black generation is `k = 1 - max(r, g, b) / 255`. Pure black reports
/// `c = m = y = 0`, `k = 100` instead of dividing by zero.
#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    if max == 0 {
        return Cmyk { c: 0, m: 0, y: 0, k: 100 };
    }

    let k = 1.0 - f64::from(max) / 255.0;
    let ink = |v: u8| (1.0 - f64::from(v) / 255.0 - k) / (1.0 - k);

    Cmyk {
        c: to_percent(ink(rgb.r)),
        m: to_percent(ink(rgb.g)),
        y: to_percent(ink(rgb.b)),
        k: to_percent(k),
    }
}

/// Parse a hex color and derive its CMYK percentages.
///
/// # Errors
///
/// Returns [`ColorError::Format`] for malformed hex.
pub fn hex_to_cmyk(hex: &str) -> Result<Cmyk> {
    hex_to_rgb(hex).map(rgb_to_cmyk)
}

/// Normalize a hue angle to the range `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Clamp a percentage to `[0, 100]`; NaN becomes 0.
#[inline]
#[must_use]
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ─── Internals ───────────────────────────────────────────────────────────────

#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * 6.0).mul_add(2.0 / 3.0 - t, p)
    } else {
        p
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round a 0–255 float channel to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
fn to_u8(v: f64) -> u8 {
    channel(v * 255.0)
}

/// Convert a fraction (0.0–1.0) to a rounded integer percentage.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
