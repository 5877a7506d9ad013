//! Share links — a palette snapshot packed into one URL query parameter.
//!
//! The snapshot is JSON with the field names the web front end always
//! used (`palette`, `lockedColors`, `hueRange`), base64-encoded with the
//! standard alphabet and carried as `?s=<blob>`. Links are percent-encoded
//! on the way out; on the way in both raw and percent-encoded blobs are
//! accepted, and a `+` that a form decoder turned into a space is restored.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use spacebar_color::Color;
use thiserror::Error;

use crate::generate::HueRange;

/// Query parameter that carries the encoded snapshot.
pub const SHARE_PARAM: &str = "s";

/// Errors from decoding a share blob.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share link has no 's' parameter")]
    MissingParam,
    #[error("share blob is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share blob is not a valid palette snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for share operations.
pub type ShareResult<T> = Result<T, ShareError>;

/// The state a share link restores.
///
/// Colors inside the JSON are validated on decode: a malformed hex entry
/// fails the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub palette: Vec<Color>,
    pub locked_colors: Vec<bool>,
    pub hue_range: HueRange,
}

impl Snapshot {
    /// Encode as a base64 blob.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::Json`] if serialization fails.
    pub fn encode(&self) -> ShareResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decode a base64 blob.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::Base64`] or [`ShareError::Json`] when the
    /// blob is not a snapshot.
    pub fn decode(blob: &str) -> ShareResult<Self> {
        let cleaned = blob.trim().replace(' ', "+");
        let bytes = STANDARD.decode(cleaned)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Build a full share URL: `<origin>?s=<blob>`.
    ///
    /// # Errors
    ///
    /// Same as [`Snapshot::encode`].
    pub fn to_url(&self, origin: &str) -> ShareResult<String> {
        let blob = self.encode()?;
        let origin = origin.trim_end_matches('/');
        Ok(format!("{origin}/?{SHARE_PARAM}={}", utf8_percent_encode(&blob, NON_ALPHANUMERIC)))
    }

    /// Restore a snapshot from a URL or bare query string.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::MissingParam`] when there is no `s` parameter,
    /// otherwise the errors of [`Snapshot::decode`].
    pub fn from_url(url: &str) -> ShareResult<Self> {
        let query = url.split_once('?').map_or(url, |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);

        let raw = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find_map(|(key, value)| (key == SHARE_PARAM).then_some(value))
            .ok_or(ShareError::MissingParam)?;

        let blob = percent_decode_str(raw).decode_utf8_lossy();
        Self::decode(&blob)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
