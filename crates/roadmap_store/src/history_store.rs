use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use roadmap_core::{HistoryList, RoadmapPayload, RoadmapSummary};
use roadmap_logging::{roadmap_error, roadmap_info, roadmap_warn};

use crate::{KeyValueStore, ProgressStore, Settings};

/// Bounded, deduplicated, most-recent-first list of generated roadmaps,
/// persisted as a single record.
///
/// The list is read once at construction and every mutation writes the full
/// list back before returning.
pub struct HistoryStore {
    kv: Arc<dyn KeyValueStore>,
    progress: ProgressStore,
    key: String,
    capacity: usize,
    list: HistoryList,
}

impl HistoryStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, settings: &Settings) -> Self {
        let mut store = Self {
            progress: ProgressStore::new(kv.clone(), settings.clone()),
            kv,
            key: settings.history_key.clone(),
            capacity: settings.history_capacity,
            list: HistoryList::new(),
        };
        store.load();
        store
    }

    pub fn list(&self) -> &HistoryList {
        &self.list
    }

    pub fn find(&self, id: i64) -> Option<&RoadmapSummary> {
        self.list.find(id)
    }

    /// Re-reads the persisted list. Missing or malformed data yields an
    /// empty history.
    pub fn load(&mut self) -> &HistoryList {
        self.list = self.read();
        &self.list
    }

    fn read(&self) -> HistoryList {
        let text = match self.kv.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return HistoryList::new(),
            Err(err) => {
                roadmap_warn!("Failed to read history {}: {}", self.key, err);
                return HistoryList::new();
            }
        };
        match serde_json::from_str::<HistoryList>(&text) {
            Ok(mut list) => {
                list.normalize(self.capacity);
                roadmap_info!("Loaded {} history entries", list.len());
                list
            }
            Err(err) => {
                roadmap_warn!("Ignoring malformed history record: {}", err);
                HistoryList::new()
            }
        }
    }

    /// Inserts `summary`, replacing any entry for the same URL, and persists.
    pub fn add(&mut self, summary: RoadmapSummary) -> &HistoryList {
        self.list.insert(summary, self.capacity);
        self.persist();
        &self.list
    }

    /// Records a freshly generated roadmap, assigning an id derived from
    /// `now` that is unique within the list.
    pub fn add_payload(&mut self, payload: RoadmapPayload, now: DateTime<Utc>) -> &HistoryList {
        let id = self.list.next_id(now.timestamp_millis());
        let generated_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        self.add(RoadmapSummary::from_payload(id, payload, generated_at))
    }

    /// Removes the entry with `id` if present, and persists.
    pub fn remove(&mut self, id: i64) -> &HistoryList {
        if !self.list.remove(id) {
            roadmap_warn!("History entry {} not found", id);
        }
        self.persist();
        &self.list
    }

    /// Empties the list and deletes the persisted record.
    pub fn clear(&mut self) {
        self.list = HistoryList::new();
        if let Err(err) = self.kv.delete(&self.key) {
            roadmap_error!("Failed to delete history {}: {}", self.key, err);
        }
    }

    /// Completion percentage of a history entry, from its stored progress.
    /// Zero when no progress exists or the roadmap has no topics.
    pub fn progress_percent_for(&self, summary: &RoadmapSummary) -> u8 {
        let key = self.progress.key_for(&summary.original_url);
        self.progress
            .load(&key)
            .map(|map| map.percent(summary.total_topics as usize))
            .unwrap_or(0)
    }

    fn persist(&self) {
        let content = match serde_json::to_string(&self.list) {
            Ok(text) => text,
            Err(err) => {
                roadmap_error!("Failed to serialize history: {}", err);
                return;
            }
        };
        if let Err(err) = self.kv.set(&self.key, &content) {
            roadmap_error!("Failed to write history {}: {}", self.key, err);
        }
    }
}
