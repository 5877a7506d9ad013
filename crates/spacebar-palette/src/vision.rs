//! Color-vision deficiency simulation.
//!
//! Each [`DeficiencyKind`] maps to a fixed 3×3 matrix applied to the 8-bit
//! RGB vector. The matrices are the widely circulated "Color Matrix"
//! approximations for dichromacy; achromatopsia collapses every channel
//! onto the same luma-weighted gray, so its output is always neutral.
//!
//! The transform is element-wise and stateless: the same color under the
//! same kind always simulates to the same result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spacebar_color::{Color, Result, Rgb, rgb_to_hex};

use crate::Palette;

/// Row-major 3×3 transform applied to `[r, g, b]`.
pub type Matrix3 = [[f64; 3]; 3];

/// Red-blind.
pub const PROTANOPIA: Matrix3 = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

/// Green-blind.
pub const DEUTERANOPIA: Matrix3 = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

/// Blue-blind.
pub const TRITANOPIA: Matrix3 = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

/// No color perception. Identical rows guarantee `r == g == b`.
pub const ACHROMATOPSIA: Matrix3 = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

/// The simulated color-vision deficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficiencyKind {
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl DeficiencyKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    /// The transform for this kind.
    #[must_use]
    pub const fn matrix(self) -> &'static Matrix3 {
        match self {
            Self::Protanopia => &PROTANOPIA,
            Self::Deuteranopia => &DEUTERANOPIA,
            Self::Tritanopia => &TRITANOPIA,
            Self::Achromatopsia => &ACHROMATOPSIA,
        }
    }

    /// Lowercase identifier, as used in share links and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().find(|k| k.name() == lower).copied()
    }
}

impl fmt::Display for DeficiencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeficiencyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
            format!("unknown deficiency {s:?} (expected one of: {})", known.join(", "))
        })
    }
}

/// Apply a matrix to an RGB triple, rounding and clamping each channel.
#[must_use]
pub fn apply_matrix(rgb: Rgb, m: &Matrix3) -> Color {
    let v = [f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)];
    let row = |r: &[f64; 3]| r[0].mul_add(v[0], r[1].mul_add(v[1], r[2] * v[2]));
    rgb_to_hex(row(&m[0]), row(&m[1]), row(&m[2]))
}

/// Simulate how `color` appears under `kind`.
#[must_use]
pub fn simulate(color: Color, kind: DeficiencyKind) -> Color {
    apply_matrix(color.rgb(), kind.matrix())
}

/// [`simulate`] for a color still in hex form.
///
/// # Errors
///
/// Returns [`ColorError::Format`](spacebar_color::ColorError::Format) for
/// malformed hex.
pub fn simulate_hex(hex: &str, kind: DeficiencyKind) -> Result<Color> {
    Color::hex(hex).map(|c| simulate(c, kind))
}

/// Simulate every color of a palette, preserving order.
#[must_use]
pub fn simulate_palette(colors: &[Color], kind: DeficiencyKind) -> Palette {
    colors.iter().map(|&c| simulate(c, kind)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spacebar_color::ColorError;

    fn c(hex: &str) -> Color {
        Color::hex(hex).unwrap()
    }

    #[test]
    fn achromatopsia_is_always_gray() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let out = simulate(Color::from_rgb(Rgb::new(r, g, b)), DeficiencyKind::Achromatopsia);
                    assert!(out.rgb().is_gray(), "({r}, {g}, {b}) -> {out}");
                }
            }
        }
    }

    #[test]
    fn achromatopsia_uses_luma() {
        // 0.299 * 255 = 76.245 → 76.
        assert_eq!(simulate(c("#ff0000"), DeficiencyKind::Achromatopsia), c("#4c4c4c"));
    }

    #[test]
    fn black_and_white_are_fixed_points() {
        // Every matrix row sums to 1.
        for kind in DeficiencyKind::ALL {
            assert_eq!(simulate(Color::BLACK, kind), Color::BLACK, "{kind}");
            assert_eq!(simulate(Color::WHITE, kind), Color::WHITE, "{kind}");
        }
    }

    #[test]
    fn protanopia_red() {
        // [0.567·255, 0.558·255, 0] = [144.585, 142.29, 0].
        assert_eq!(simulate(c("#ff0000"), DeficiencyKind::Protanopia), c("#918e00"));
    }

    #[test]
    fn deuteranopia_green() {
        // [0.375·255, 0.3·255, 0.3·255] = [95.625, 76.5, 76.5].
        let out = simulate(c("#00ff00"), DeficiencyKind::Deuteranopia).rgb();
        assert_eq!(out.r, 96);
        assert!(out.g.abs_diff(77) <= 1 && out.g == out.b);
    }

    #[test]
    fn tritanopia_blue() {
        // [0, 0.567·255, 0.525·255] = [0, 144.585, 133.875].
        assert_eq!(simulate(c("#0000ff"), DeficiencyKind::Tritanopia), c("#009186"));
    }

    #[test]
    fn simulation_is_deterministic() {
        let color = c("#3fa7d6");
        for kind in DeficiencyKind::ALL {
            assert_eq!(simulate(color, kind), simulate(color, kind));
        }
    }

    #[test]
    fn simulate_palette_maps_elementwise() {
        let colors = vec![c("#ff0000"), c("#00ff00"), c("#0000ff")];
        let out = simulate_palette(&colors, DeficiencyKind::Protanopia);
        let expected: Vec<Color> = colors.iter().map(|&x| simulate(x, DeficiencyKind::Protanopia)).collect();
        assert_eq!(out, expected);
        assert!(simulate_palette(&[], DeficiencyKind::Tritanopia).is_empty());
    }

    #[test]
    fn simulate_hex_rejects_malformed() {
        assert_eq!(
            simulate_hex("#12", DeficiencyKind::Protanopia),
            Err(ColorError::format("#12"))
        );
        assert!(simulate_hex("#ABCDEF", DeficiencyKind::Protanopia).is_ok());
    }

    #[test]
    fn names_round_trip() {
        for kind in DeficiencyKind::ALL {
            assert_eq!(kind.name().parse::<DeficiencyKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(DeficiencyKind::from_name("TRITANOPIA"), Some(DeficiencyKind::Tritanopia));
        assert!("colorblind".parse::<DeficiencyKind>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DeficiencyKind::Deuteranopia).unwrap();
        assert_eq!(json, "\"deuteranopia\"");
    }
}
