use std::sync::Arc;

use chrono::{DateTime, Utc};
use roadmap_core::{ProgressMap, TopicId};
use roadmap_logging::{roadmap_debug, roadmap_error, roadmap_warn};

use crate::{KeyValueStore, Settings};

/// Per-roadmap progress records, keyed by a value derived from the course URL.
///
/// Records are never deleted; progress outlives the roadmap's history entry.
#[derive(Clone)]
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
    settings: Settings,
}

impl ProgressStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, settings: Settings) -> Self {
        Self { kv, settings }
    }

    pub fn key_for(&self, original_url: &str) -> String {
        self.settings.progress_key(original_url)
    }

    /// Reads the map stored under `key`. Unreadable or malformed records
    /// are logged and reported as absent.
    pub fn load(&self, key: &str) -> Option<ProgressMap> {
        let text = match self.kv.get(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                roadmap_warn!("Failed to read progress {}: {}", key, err);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(map) => Some(map),
            Err(err) => {
                roadmap_warn!("Ignoring malformed progress record {}: {}", key, err);
                None
            }
        }
    }

    /// Loads the stored map, or builds an all-incomplete one for `topic_ids`
    /// without persisting it.
    ///
    /// A stored map is returned as-is: topics added since it was written are
    /// not inserted until first toggled.
    pub fn load_or_init(&self, key: &str, topic_ids: &[TopicId]) -> ProgressMap {
        match self.load(key) {
            Some(map) => map,
            None => {
                roadmap_debug!("No progress for {}, starting fresh", key);
                ProgressMap::init(topic_ids.iter().copied())
            }
        }
    }

    /// Persists `map` under `key`, overwriting any previous record.
    pub fn save(&self, key: &str, map: &ProgressMap) {
        let content = match serde_json::to_string(map) {
            Ok(text) => text,
            Err(err) => {
                roadmap_error!("Failed to serialize progress {}: {}", key, err);
                return;
            }
        };
        if let Err(err) = self.kv.set(key, &content) {
            roadmap_error!("Failed to write progress {}: {}", key, err);
        }
    }

    pub fn toggle(map: &ProgressMap, topic_id: TopicId, now: DateTime<Utc>) -> ProgressMap {
        map.toggled(topic_id, now)
    }

    pub fn percent(map: &ProgressMap, total_topics: usize) -> u8 {
        map.percent(total_topics)
    }
}
