//! Editor session — the state a front end keeps between user actions.
//!
//! The engine functions are pure; this is where their results live. Every
//! user intent (regenerate, toggle a lock, edit a slot, move a slider,
//! pick a simulation) is one method call. Adjustments stay pending until
//! the next regeneration commits them to the unlocked slots.

use spacebar_color::{Color, ColorError, Result};

use crate::adjust::{AdjustmentValues, adjust_unlocked};
use crate::generate::{
    GenerateOptions, HueRange, MAX_COLORS, MIN_COLORS, check_brightness, generate_with,
};
use crate::rng::RandomSource;
use crate::share::{ShareResult, Snapshot};
use crate::vision::{DeficiencyKind, simulate_palette};
use crate::{LockMask, Palette};

/// Palette, locks and pending parameters for one editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    palette: Palette,
    locks: LockMask,
    options: GenerateOptions,
    adjustments: AdjustmentValues,
    simulation: Option<DeficiencyKind>,
}

impl Session {
    /// Start a session with a freshly generated, fully unlocked palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] if `options.brightness` is outside
    /// `[0, 100]`.
    pub fn new(options: GenerateOptions, rng: &mut impl RandomSource) -> Result<Self> {
        let palette = generate_with(&options, &[], &[], rng)?;
        let locks = vec![false; palette.len()];
        Ok(Self {
            palette,
            locks,
            options,
            adjustments: AdjustmentValues::default(),
            simulation: None,
        })
    }

    /// Restore a session from a share snapshot.
    ///
    /// The lock mask is padded or truncated to the palette length. The
    /// palette is kept as shared, but the count used by the next
    /// regeneration is clamped to `[MIN_COLORS, MAX_COLORS]`.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, options: GenerateOptions) -> Self {
        let Snapshot { palette, mut locked_colors, hue_range } = snapshot;
        locked_colors.resize(palette.len(), false);

        let count = palette.len().clamp(MIN_COLORS, MAX_COLORS);
        if count != palette.len() {
            log::warn!("shared palette has {} colors, regenerating with {count}", palette.len());
        }
        Self {
            options: GenerateOptions { count, hue_range, ..options },
            palette,
            locks: locked_colors,
            adjustments: AdjustmentValues::default(),
            simulation: None,
        }
    }

    /// Restore from a share link, or start fresh if it cannot be decoded.
    ///
    /// # Errors
    ///
    /// Only the fallback generation can fail, with [`ColorError::Range`].
    pub fn from_share_or_generate(
        url: &str,
        options: GenerateOptions,
        rng: &mut impl RandomSource,
    ) -> Result<Self> {
        match Snapshot::from_url(url) {
            Ok(snapshot) => {
                log::debug!("restored {} colors from share link", snapshot.palette.len());
                Ok(Self::from_snapshot(snapshot, options))
            }
            Err(e) => {
                log::warn!("failed to parse shared state, generating a new palette: {e}");
                Self::new(options, rng)
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[must_use]
    pub fn locks(&self) -> &[bool] {
        &self.locks
    }

    #[must_use]
    pub const fn options(&self) -> &GenerateOptions {
        &self.options
    }

    #[must_use]
    pub const fn adjustments(&self) -> &AdjustmentValues {
        &self.adjustments
    }

    #[must_use]
    pub const fn simulation(&self) -> Option<DeficiencyKind> {
        self.simulation
    }

    /// The palette as it should be rendered: through the active
    /// simulation, if any. The stored palette is never modified.
    #[must_use]
    pub fn displayed(&self) -> Palette {
        match self.simulation {
            Some(kind) => simulate_palette(&self.palette, kind),
            None => self.palette.clone(),
        }
    }

    // ── Actions ───────────────────────────────────────────────────

    /// Generate new colors for every unlocked slot and commit the pending
    /// adjustments to them. Locked slots come through untouched.
    ///
    /// When the palette length changes, every slot is unlocked.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] if the brightness option is invalid.
    pub fn regenerate(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        let fresh = generate_with(&self.options, &self.palette, &self.locks, rng)?;
        let palette = adjust_unlocked(&fresh, &self.locks, &self.adjustments);

        if palette.len() != self.locks.len() {
            self.locks = vec![false; palette.len()];
        }
        log::debug!(
            "regenerated {} colors ({} locked)",
            palette.len(),
            self.locks.iter().filter(|&&l| l).count()
        );
        self.palette = palette;
        Ok(())
    }

    /// Flip the lock on one slot and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] if `index` is past the end.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        let len = self.locks.len();
        let lock = self.locks.get_mut(index).ok_or_else(|| index_error(index, len))?;
        *lock = !*lock;
        Ok(*lock)
    }

    /// Replace the color in one slot (manual edit). The lock is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] if `index` is past the end.
    pub fn replace_color(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.palette.len();
        let slot = self.palette.get_mut(index).ok_or_else(|| index_error(index, len))?;
        *slot = color;
        Ok(())
    }

    /// Store adjustments for the next regeneration. The palette itself is
    /// left as it is.
    pub const fn set_adjustments(&mut self, adjustments: AdjustmentValues) {
        self.adjustments = adjustments;
    }

    pub const fn set_simulation(&mut self, kind: Option<DeficiencyKind>) {
        self.simulation = kind;
    }

    pub const fn set_hue_range(&mut self, range: HueRange) {
        self.options.hue_range = range;
    }

    /// Set the brightness used for the next regeneration.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Range`] outside `[0, 100]`.
    pub fn set_brightness(&mut self, brightness: f64) -> Result<()> {
        check_brightness(brightness)?;
        self.options.brightness = brightness;
        Ok(())
    }

    /// Set the palette size for the next regeneration, clamped to
    /// `[MIN_COLORS, MAX_COLORS]`. Returns the size actually stored.
    pub fn set_count(&mut self, count: usize) -> usize {
        self.options.count = count.clamp(MIN_COLORS, MAX_COLORS);
        self.options.count
    }

    pub fn increment_count(&mut self) -> usize {
        self.set_count(self.options.count.saturating_add(1))
    }

    pub fn decrement_count(&mut self) -> usize {
        self.set_count(self.options.count.saturating_sub(1))
    }

    /// Capture the state a share link carries.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            palette: self.palette.clone(),
            locked_colors: self.locks.clone(),
            hue_range: self.options.hue_range,
        }
    }

    /// Build a share URL for the current state.
    ///
    /// # Errors
    ///
    /// Propagates encoding failures from [`Snapshot::to_url`].
    pub fn share_url(&self, origin: &str) -> ShareResult<String> {
        self.snapshot().to_url(origin)
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_error(index: usize, len: usize) -> ColorError {
    let reason = if len == 0 { "palette is empty" } else { "past the end of the palette" };
    ColorError::range("index", index as f64, reason)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
