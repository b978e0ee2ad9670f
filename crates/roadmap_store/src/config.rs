use std::time::Duration;

use roadmap_core::{progress_storage_key, KeyScheme, CELEBRATION_DELAY, MAX_HISTORY, PROGRESS_KEY_PREFIX};
use serde::{Deserialize, Serialize};

/// Storage namespace and tuning for the stores and the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key of the single history record.
    pub history_key: String,
    /// Prefix of every per-roadmap progress key.
    pub progress_key_prefix: String,
    /// Key of the light/dark preference.
    pub theme_key: String,
    pub history_capacity: usize,
    pub key_scheme: KeyScheme,
    pub celebration_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_key: "fpc_roadmap_history".to_string(),
            progress_key_prefix: PROGRESS_KEY_PREFIX.to_string(),
            theme_key: "fpc_theme".to_string(),
            history_capacity: MAX_HISTORY,
            key_scheme: KeyScheme::default(),
            celebration_delay_ms: CELEBRATION_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn celebration_delay(&self) -> Duration {
        Duration::from_millis(self.celebration_delay_ms)
    }

    /// Storage key of the progress record for `original_url`.
    pub fn progress_key(&self, original_url: &str) -> String {
        progress_storage_key(&self.progress_key_prefix, self.key_scheme, original_url)
    }
}
