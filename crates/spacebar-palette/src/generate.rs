//! Palette generation under count, brightness, hue-window and lock constraints.
//!
//! Every unlocked slot gets a fresh color whose hue is drawn uniformly from
//! the hue window, whose lightness is the requested brightness, and whose
//! saturation is fixed at [`VIVID_SATURATION`]. Fixing saturation keeps the
//! search space to two free parameters and avoids muddy colors.
//!
//! Locked slots are copied verbatim from the previous palette, so repeated
//! generation never touches them.

use serde::{Deserialize, Serialize};
use spacebar_color::{Color, ColorError, Hsl, Result};

use crate::rng::RandomSource;
use crate::Palette;

/// Saturation (percent) of every generated color.
pub const VIVID_SATURATION: f64 = 70.0;

/// Smallest palette a caller should request.
pub const MIN_COLORS: usize = 1;

/// Largest palette a caller should request.
pub const MAX_COLORS: usize = 10;

// ---------------------------------------------------------------------------
// HueRange
// ---------------------------------------------------------------------------

/// An inclusive hue window `[min, max]` with `0 <= min <= max <= 360`.
///
/// Serializes as a two-element array, the shape share links carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct HueRange {
    min: f64,
    max: f64,
}

impl HueRange {
    /// The whole wheel.
    pub const FULL: Self = Self { min: 0.0, max: 360.0 };

    /// Validate and build a hue window.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] if either bound is non-finite or
    /// outside `[0, 360]`, or if `min > max`. Wrapping windows such as
    /// `[300, 30]` are the caller's to split.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !(0.0..=360.0).contains(&min) {
            return Err(ColorError::range("hue range min", min, "must be within [0, 360]"));
        }
        if !max.is_finite() || !(0.0..=360.0).contains(&max) {
            return Err(ColorError::range("hue range max", max, "must be within [0, 360]"));
        }
        if min > max {
            return Err(ColorError::range("hue range min", min, "must not exceed max"));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    /// Map a unit sample onto the window.
    #[must_use]
    pub fn lerp(self, t: f64) -> f64 {
        (self.max - self.min).mul_add(t, self.min)
    }

    #[must_use]
    pub fn contains(self, hue: f64) -> bool {
        (self.min..=self.max).contains(&hue)
    }
}

impl Default for HueRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<[f64; 2]> for HueRange {
    type Error = ColorError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<HueRange> for [f64; 2] {
    fn from(range: HueRange) -> Self {
        [range.min, range.max]
    }
}

// ---------------------------------------------------------------------------
// GenerateOptions
// ---------------------------------------------------------------------------

/// The knobs a front end exposes for generation.
///
/// Defaults match the stock palette: five colors at 50% brightness across
/// the full wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub count: usize,
    pub brightness: f64,
    pub hue_range: HueRange,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { count: 5, brightness: 50.0, hue_range: HueRange::FULL }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Draw one candidate color in HSL, before quantization to hex.
///
/// Exposed so callers can inspect the exact hue and lightness that were
/// drawn; at lightness 0 or 100 the hex form loses the hue entirely.
///
/// # Errors
///
/// Returns [`ColorError::Range`] if `brightness` is outside `[0, 100]`.
pub fn sample_hsl(brightness: f64, hue_range: HueRange, rng: &mut impl RandomSource) -> Result<Hsl> {
    check_brightness(brightness)?;
    Ok(draw(brightness, hue_range, rng))
}

/// Generate a palette of `count` colors.
///
/// Slot `i` is kept verbatim from `previous` when `lock_mask[i]` is true
/// and `previous[i]` exists; every other slot is drawn fresh. Entries of
/// `previous` and `lock_mask` past `count` are ignored. `count = 0` yields
/// an empty palette.
///
/// # Errors
///
/// Returns [`ColorError::Range`] if `brightness` is outside `[0, 100]`.
pub fn generate(
    count: usize,
    brightness: f64,
    hue_range: HueRange,
    previous: Option<&[Color]>,
    lock_mask: Option<&[bool]>,
    rng: &mut impl RandomSource,
) -> Result<Palette> {
    check_brightness(brightness)?;

    let previous = previous.unwrap_or_default();
    let lock_mask = lock_mask.unwrap_or_default();

    Ok((0..count)
        .map(|i| match (lock_mask.get(i), previous.get(i)) {
            (Some(&true), Some(&kept)) => kept,
            _ => Color::from_hsl(draw(brightness, hue_range, &mut *rng)),
        })
        .collect())
}

/// [`generate`] driven by a [`GenerateOptions`] bundle.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with(
    options: &GenerateOptions,
    previous: &[Color],
    locks: &[bool],
    rng: &mut impl RandomSource,
) -> Result<Palette> {
    generate(
        options.count,
        options.brightness,
        options.hue_range,
        Some(previous),
        Some(locks),
        rng,
    )
}

fn draw(brightness: f64, hue_range: HueRange, rng: &mut impl RandomSource) -> Hsl {
    let hue = hue_range.lerp(rng.next_f64());
    Hsl::new(hue, VIVID_SATURATION, brightness)
}

/// Validate a brightness (lightness percent) before it is used.
///
/// # Errors
///
/// Returns [`ColorError::Range`] if `brightness` is NaN, infinite or
/// outside `[0, 100]`.
pub fn check_brightness(brightness: f64) -> Result<()> {
    if brightness.is_finite() && (0.0..=100.0).contains(&brightness) {
        Ok(())
    } else {
        Err(ColorError::range("brightness", brightness, "must be within [0, 100]"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
