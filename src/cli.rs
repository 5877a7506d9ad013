// SPDX-License-Identifier: MIT
//
// Command-line arguments.
//
// Every flag maps onto one engine concept: generation options, a share
// link to restore, slots to lock, pending adjustments, a simulation kind.
// Validation that the engine already performs (brightness, hue window) is
// surfaced here so a bad flag fails before anything is generated.

use clap::{Parser, ValueEnum};
use spacebar_palette::share::SHARE_PARAM;
use spacebar_palette::{
    AdjustmentValues, DeficiencyKind, GenerateOptions, HueRange, MAX_COLORS, MIN_COLORS, Result,
    check_brightness,
};

/// Origin used for printed share links when `--origin` is not given.
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Output format for the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Truecolor swatches with HEX / RGB / CMYK labels.
    Text,
    /// The JSON export document.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "spacebar",
    version,
    about = "Generate color palettes with locks, HSL adjustments and color-vision simulation"
)]
pub struct Cli {
    /// Number of colors, 1..=10 [default: 5, or the shared palette's size]
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Lightness of generated colors, 0..=100
    #[arg(long, short = 'b', default_value_t = 50.0)]
    pub brightness: f64,

    /// Lower bound of the hue window, in degrees
    #[arg(long, default_value_t = 0.0)]
    pub hue_min: f64,

    /// Upper bound of the hue window, in degrees
    #[arg(long, default_value_t = 360.0)]
    pub hue_max: f64,

    /// Seed for a reproducible palette (clock-seeded otherwise)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Share link or bare share blob to restore
    #[arg(long, value_name = "LINK")]
    pub share: Option<String>,

    /// Lock a slot (0-based); repeatable
    #[arg(long = "lock", value_name = "INDEX")]
    pub locks: Vec<usize>,

    /// Hue shift in degrees, committed on regeneration
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f64,

    /// Saturation delta in percentage points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub saturation: f64,

    /// Lightness delta in percentage points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub lightness: f64,

    /// Temperature, -100 (cool) ..= 100 (warm)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Regenerate unlocked slots after restoring or locking
    #[arg(long, short = 'r')]
    pub regenerate: bool,

    /// Show the palette as seen with a color-vision deficiency
    #[arg(long, value_name = "KIND")]
    pub simulate: Option<DeficiencyKind>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print a share link after the palette
    #[arg(long)]
    pub print_share: bool,

    /// Origin for printed share links
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origin: String,
}

impl Cli {
    /// Generation options from the flags. The count is clamped; brightness
    /// and the hue window are validated.
    pub fn options(&self) -> Result<GenerateOptions> {
        check_brightness(self.brightness)?;

        let requested = self.count.unwrap_or(GenerateOptions::default().count);
        let count = requested.clamp(MIN_COLORS, MAX_COLORS);
        if count != requested {
            log::warn!("count {requested} clamped to {count}");
        }

        Ok(GenerateOptions {
            count,
            brightness: self.brightness,
            hue_range: HueRange::new(self.hue_min, self.hue_max)?,
        })
    }

    pub const fn adjustments(&self) -> AdjustmentValues {
        AdjustmentValues::new(self.hue, self.saturation, self.lightness, self.temperature)
    }

    /// The `--share` value as a link. A bare blob is wrapped in `?s=`.
    pub fn share_link(&self) -> Option<String> {
        self.share.as_deref().map(|s| {
            if s.contains('?') {
                s.to_owned()
            } else {
                format!("?{SHARE_PARAM}={s}")
            }
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
