// SPDX-License-Identifier: MIT
//
// Error taxonomy for the color model.
//
// Two kinds of failure exist: a hex string that is not `#RRGGBB`, and a
// numeric input outside its documented domain. Derived overflow (a
// lightness pushed past 100 by an adjustment) is clamped by the callers
// and never reaches this type.

use thiserror::Error;

/// Errors raised by conversions and by the palette engine built on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input is not `#` followed by exactly six hex digits.
    #[error("invalid hex color {input:?}: expected '#' followed by 6 hex digits")]
    Format { input: String },

    /// A numeric argument violates its documented domain.
    #[error("{field} out of range ({value}): {reason}")]
    Range {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ColorError {
    /// Build a `Format` error for the offending input.
    #[must_use]
    pub fn format(input: &str) -> Self {
        Self::Format { input: input.to_owned() }
    }

    /// Build a `Range` error naming the field and the violated bound.
    #[must_use]
    pub const fn range(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Range { field, value, reason }
    }
}

/// Result alias used throughout the color and palette crates.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_names_input() {
        let err = ColorError::format("#12345");
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#12345\": expected '#' followed by 6 hex digits"
        );
    }

    #[test]
    fn range_message_names_field() {
        let err = ColorError::range("brightness", 120.0, "must be within [0, 100]");
        assert_eq!(err.to_string(), "brightness out of range (120): must be within [0, 100]");
    }
}
