//! HSL adjustment pipeline — hue, saturation, brightness and temperature deltas.
//!
//! An [`AdjustmentValues`] bundle is applied per color in HSL:
//!
//! ```text
//! hue        += h + temperature_bias(t)     (wrapped into [0, 360))
//! saturation += s                           (clamped to [0, 100])
//! lightness  += b                           (clamped to [0, 100])
//! ```
//!
//! Adjustments compose additively and are not idempotent: applying the
//! same non-zero bundle twice moves the colors twice. Front ends keep the
//! bundle "pending" and apply it once, at commit time.

use serde::{Deserialize, Serialize};
use spacebar_color::{Color, Hsl, Result, clamp_percent, normalize_hue};

use crate::Palette;

/// Degrees of hue bias per unit of temperature.
pub const TEMPERATURE_HUE_SCALE: f64 = 0.3;

/// Largest hue bias temperature can produce, in degrees, either direction.
///
/// With [`TEMPERATURE_HUE_SCALE`] this is reached at `t = ±100`, the ends
/// of the temperature slider.
pub const MAX_TEMPERATURE_BIAS: f64 = 30.0;

/// Pending adjustment parameters. All zero is the identity.
///
/// - `h`: hue delta in degrees
/// - `s`: saturation delta in percentage points
/// - `b`: lightness delta in percentage points
/// - `t`: temperature, a damped hue bias
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentValues {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub t: f64,
}

impl AdjustmentValues {
    #[must_use]
    pub const fn new(h: f64, s: f64, b: f64, t: f64) -> Self {
        Self { h, s, b, t }
    }

    /// Whether applying these values changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        [self.h, self.s, self.b, self.t].iter().all(|v| v.abs() < f64::EPSILON)
    }
}

/// Hue bias produced by a temperature value, clamped to
/// `±MAX_TEMPERATURE_BIAS`. Non-finite temperatures contribute nothing.
#[must_use]
pub fn temperature_bias(t: f64) -> f64 {
    if t.is_finite() {
        (t * TEMPERATURE_HUE_SCALE).clamp(-MAX_TEMPERATURE_BIAS, MAX_TEMPERATURE_BIAS)
    } else {
        0.0
    }
}

/// Apply adjustments to one HSL value.
#[must_use]
pub fn adjust_hsl(hsl: Hsl, adj: &AdjustmentValues) -> Hsl {
    let delta = |v: f64| if v.is_finite() { v } else { 0.0 };
    Hsl {
        h: normalize_hue(hsl.h + delta(adj.h) + temperature_bias(adj.t)),
        s: clamp_percent(hsl.s + delta(adj.s)),
        l: clamp_percent(hsl.l + delta(adj.b)),
    }
}

/// Apply adjustments to one color.
#[must_use]
pub fn adjust_color(color: Color, adj: &AdjustmentValues) -> Color {
    Color::from_hsl(adjust_hsl(color.to_hsl(), adj))
}

/// Apply adjustments to every color, preserving count and order.
///
/// The identity bundle returns the input unchanged (within ±1 per RGB
/// channel from the HSL round trip).
#[must_use]
pub fn adjust(colors: &[Color], adj: &AdjustmentValues) -> Palette {
    colors.iter().map(|&c| adjust_color(c, adj)).collect()
}

/// [`adjust`] for colors still in hex form.
///
/// # Errors
///
/// Returns [`ColorError::Format`](spacebar_color::ColorError::Format) for
/// the first malformed entry.
pub fn adjust_hex<S: AsRef<str>>(colors: &[S], adj: &AdjustmentValues) -> Result<Palette> {
    colors
        .iter()
        .map(|hex| Color::hex(hex.as_ref()).map(|c| adjust_color(c, adj)))
        .collect()
}

/// Apply adjustments only to slots whose lock is false.
///
/// Slots past the end of `locks` count as unlocked.
#[must_use]
pub fn adjust_unlocked(colors: &[Color], locks: &[bool], adj: &AdjustmentValues) -> Palette {
    colors
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if locks.get(i).copied().unwrap_or(false) {
                c
            } else {
                adjust_color(c, adj)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use spacebar_color::{ColorError, Rgb};

    fn c(hex: &str) -> Color {
        Color::hex(hex).unwrap()
    }

    fn assert_close(actual: Color, expected: Color) {
        let (a, e) = (actual.rgb(), expected.rgb());
        assert!(
            a.r.abs_diff(e.r) <= 1 && a.g.abs_diff(e.g) <= 1 && a.b.abs_diff(e.b) <= 1,
            "{actual} not within ±1 of {expected}"
        );
    }

    // ── Identity ────────────────────────────────────────────────────

    #[test]
    fn identity_leaves_palette_unchanged() {
        let colors: Vec<Color> = ["#000000", "#ffffff", "#1abc9c", "#e74c3c", "#7f8c8d", "#2c3e50", "#f1c40f"]
            .into_iter()
            .map(c)
            .collect();
        let out = adjust(&colors, &AdjustmentValues::default());
        assert_eq!(out.len(), colors.len());
        for (a, e) in out.into_iter().zip(colors) {
            assert_close(a, e);
        }
    }

    #[test]
    fn identity_detection() {
        assert!(AdjustmentValues::default().is_identity());
        assert!(!AdjustmentValues::new(0.0, 0.0, 0.0, 1.0).is_identity());
    }

    // ── Hue ─────────────────────────────────────────────────────────

    #[test]
    fn hue_shift_rotates_primaries() {
        let adj = AdjustmentValues { h: 120.0, ..Default::default() };
        assert_eq!(adjust_color(c("#ff0000"), &adj), c("#00ff00"));
    }

    #[test]
    fn negative_hue_shift_wraps() {
        let adj = AdjustmentValues { h: -120.0, ..Default::default() };
        assert_eq!(adjust_color(c("#ff0000"), &adj), c("#0000ff"));
        let hsl = adjust_hsl(Hsl::new(10.0, 50.0, 50.0), &adj);
        assert!((hsl.h - 250.0).abs() < 1e-9);
    }

    #[test]
    fn large_hue_shift_wraps() {
        let adj = AdjustmentValues { h: 720.0 + 120.0, ..Default::default() };
        assert_eq!(adjust_color(c("#ff0000"), &adj), c("#00ff00"));
    }

    // ── Saturation / brightness ─────────────────────────────────────

    #[test]
    fn saturation_clamps() {
        let down = AdjustmentValues { s: -500.0, ..Default::default() };
        let gray = adjust_color(c("#e74c3c"), &down);
        assert!(gray.rgb().is_gray(), "{gray} should be gray");

        let up = adjust_hsl(Hsl::new(0.0, 90.0, 50.0), &AdjustmentValues { s: 50.0, ..Default::default() });
        assert!((up.s - 100.0).abs() < 1e-9);
    }

    #[test]
    fn brightness_clamps_to_white_and_black() {
        let up = AdjustmentValues { b: 200.0, ..Default::default() };
        assert_eq!(adjust_color(c("#336699"), &up), Color::WHITE);
        let down = AdjustmentValues { b: -200.0, ..Default::default() };
        assert_eq!(adjust_color(c("#336699"), &down), Color::BLACK);
    }

    #[test]
    fn brightness_moves_lightness() {
        let adj = AdjustmentValues { b: 10.0, ..Default::default() };
        let before = c("#336699").to_hsl();
        let after = adjust_color(c("#336699"), &adj).to_hsl();
        assert!((after.l - before.l - 10.0).abs() < 0.5);
    }

    // ── Temperature ─────────────────────────────────────────────────

    #[test]
    fn temperature_is_damped_and_bounded() {
        assert!((temperature_bias(50.0) - 15.0).abs() < 1e-9);
        assert!((temperature_bias(-100.0) + 30.0).abs() < 1e-9);
        assert!((temperature_bias(1000.0) - MAX_TEMPERATURE_BIAS).abs() < 1e-9);
        assert!(temperature_bias(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn temperature_shifts_less_than_equal_hue_delta() {
        let base = Hsl::new(200.0, 60.0, 50.0);
        let by_t = adjust_hsl(base, &AdjustmentValues { t: 40.0, ..Default::default() });
        let by_h = adjust_hsl(base, &AdjustmentValues { h: 40.0, ..Default::default() });
        assert!((by_t.h - 212.0).abs() < 1e-9);
        assert!(by_t.h < by_h.h);
    }

    #[test]
    fn hue_and_temperature_compose() {
        let adj = AdjustmentValues { h: 10.0, t: 100.0, ..Default::default() };
        let out = adjust_hsl(Hsl::new(350.0, 50.0, 50.0), &adj);
        assert!((out.h - 30.0).abs() < 1e-9);
    }

    // ── Composition ─────────────────────────────────────────────────

    #[test]
    fn adjustments_are_additive_not_idempotent() {
        let adj = AdjustmentValues { h: 30.0, ..Default::default() };
        let once = adjust(&[c("#ff0000")], &adj);
        let twice = adjust(&once, &adj);
        assert_ne!(once, twice);
        let sixty = adjust(&[c("#ff0000")], &AdjustmentValues { h: 60.0, ..Default::default() });
        assert_close(twice[0], sixty[0]);
    }

    #[test]
    fn adjust_preserves_order_and_count() {
        let colors = vec![c("#ff0000"), c("#00ff00"), c("#0000ff")];
        let adj = AdjustmentValues { h: 120.0, ..Default::default() };
        assert_eq!(adjust(&colors, &adj), vec![c("#00ff00"), c("#0000ff"), c("#ff0000")]);
        assert!(adjust(&[], &adj).is_empty());
    }

    #[test]
    fn adjust_hex_rejects_malformed() {
        let err = adjust_hex(&["#ff0000", "nope"], &AdjustmentValues::default()).unwrap_err();
        assert_eq!(err, ColorError::format("nope"));
    }

    #[test]
    fn adjust_hex_accepts_uppercase() {
        let out = adjust_hex(&["#FF0000"], &AdjustmentValues::default()).unwrap();
        assert_eq!(out[0].rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn adjust_unlocked_skips_locked() {
        let colors = vec![c("#ff0000"), c("#ff0000"), c("#ff0000")];
        let adj = AdjustmentValues { h: 120.0, ..Default::default() };
        let out = adjust_unlocked(&colors, &[true, false], &adj);
        assert_eq!(out, vec![c("#ff0000"), c("#00ff00"), c("#00ff00")]);
    }
}
