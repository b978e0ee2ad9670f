//! Storage-key derivation for per-roadmap progress records.
//!
//! The default scheme keeps the first [`KEY_PREFIX_LEN`] characters of the
//! URL-safe base64 encoding of the course URL. That prefix covers only the
//! first 15 bytes of the URL, so two URLs that agree on those bytes map to the
//! same key (`https://www.udemy.com/course/a` and `.../course/b` both do).
//! [`KeyScheme::Digest`] removes that limitation at the cost of producing keys
//! that differ from records written by the encoded-prefix scheme.
use std::fmt::Write;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of encoded characters kept by [`KeyScheme::EncodedPrefix`].
pub const KEY_PREFIX_LEN: usize = 20;

/// Number of hex characters kept by [`KeyScheme::Digest`].
const DIGEST_HEX_LEN: usize = 32;

/// Prefix of every progress record key.
pub const PROGRESS_KEY_PREFIX: &str = "fpc_progress";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScheme {
    /// Fixed-length prefix of the URL-safe base64 encoding.
    #[default]
    EncodedPrefix,
    /// Hex prefix of the SHA-256 digest.
    Digest,
}

impl KeyScheme {
    pub fn derive(self, url: &str) -> String {
        match self {
            KeyScheme::EncodedPrefix => {
                let mut encoded = URL_SAFE_NO_PAD.encode(url.as_bytes());
                // The alphabet is ASCII, so truncating by byte index is safe.
                encoded.truncate(KEY_PREFIX_LEN);
                encoded
            }
            KeyScheme::Digest => {
                let digest = Sha256::digest(url.as_bytes());
                let mut hex = String::with_capacity(DIGEST_HEX_LEN);
                for byte in digest.iter().take(DIGEST_HEX_LEN / 2) {
                    let _ = write!(&mut hex, "{byte:02x}");
                }
                hex
            }
        }
    }
}

/// Derives the storage-safe key for `url` with the default scheme.
///
/// Deterministic and independent of process state.
pub fn derive_key(url: &str) -> String {
    KeyScheme::default().derive(url)
}

/// Full key under which the progress map for `url` is stored:
/// `<prefix>_<derived key>`.
pub fn progress_storage_key(prefix: &str, scheme: KeyScheme, url: &str) -> String {
    format!("{prefix}_{}", scheme.derive(url))
}
