//! # spacebar-palette — constrained palette engine
//!
//! Generates palettes of vivid colors under a count, a brightness and a
//! hue window, keeps locked slots across regenerations, applies HSL
//! adjustments, and simulates how a palette looks to viewers with a
//! color-vision deficiency.
//!
//! # Architecture
//!
//! ```text
//! GenerateOptions + previous palette + lock mask + RandomSource
//!     │
//!     ▼
//! generate.rs: fresh hue per unlocked slot, fixed saturation
//!     │
//!     ▼
//! adjust.rs:   pending h/s/b/t deltas committed to unlocked slots
//!     │
//!     ▼
//! vision.rs:   display-only 3×3 matrix transform
//!     │
//!     ├──▶ share.rs:  snapshot ⇄ base64 `?s=` link
//!     └──▶ export.rs: JSON document + swatch labels
//! ```
//!
//! `session.rs` ties these together into the state a front end holds.
//!
//! # Color Space
//!
//! Generation and adjustment happen in HSL; every result is quantized to
//! `#rrggbb` before it is stored. Locked colors are copied, never
//! re-derived, so they survive any number of regenerations bit for bit.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Index-to-float casts only feed error messages.
#![allow(clippy::cast_precision_loss)]
// Seeding from the clock folds seconds into 32 bits on purpose.
#![allow(clippy::cast_possible_truncation)]
// h/s/b/t and r/g/b naming is inherently similar.
#![allow(clippy::similar_names)]

pub mod adjust;
pub mod export;
pub mod generate;
pub mod rng;
pub mod session;
pub mod share;
pub mod vision;

pub use spacebar_color::{Color, ColorError, Result};

/// An ordered list of colors, one per swatch.
pub type Palette = Vec<Color>;

/// Per-slot lock flags. Index `i` locks palette slot `i`.
pub type LockMask = Vec<bool>;

pub use adjust::{AdjustmentValues, adjust, adjust_color, adjust_hex, adjust_unlocked};
pub use export::{ExportDocument, ExportedColor, SwatchLabel, swatch_labels};
pub use generate::{
    GenerateOptions, HueRange, MAX_COLORS, MIN_COLORS, check_brightness, generate, generate_with,
    sample_hsl,
};
pub use rng::{RandomSource, Scripted, Xorshift32};
pub use session::Session;
pub use share::{ShareError, ShareResult, Snapshot};
pub use vision::{DeficiencyKind, simulate, simulate_hex, simulate_palette};
