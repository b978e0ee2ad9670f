use serde::{Deserialize, Serialize};

use crate::RoadmapSummary;

/// Default number of roadmaps remembered in history.
pub const MAX_HISTORY: usize = 10;

/// Most-recent-first list of generated roadmaps.
///
/// Invariants: at most one entry per `original_url`, and never more entries
/// than the capacity passed to [`HistoryList::insert`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<RoadmapSummary>);

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RoadmapSummary] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoadmapSummary> {
        self.0.iter()
    }

    pub fn find(&self, id: i64) -> Option<&RoadmapSummary> {
        self.0.iter().find(|entry| entry.id == id)
    }

    /// Smallest id strictly greater than every id currently stored, or
    /// `candidate` if it already is.
    pub fn next_id(&self, candidate: i64) -> i64 {
        match self.0.iter().map(|entry| entry.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }

    /// Replaces any entry for the same URL, prepends `summary`, and evicts
    /// the oldest entries beyond `capacity`.
    pub fn insert(&mut self, summary: RoadmapSummary, capacity: usize) {
        self.0
            .retain(|entry| entry.original_url != summary.original_url);
        self.0.insert(0, summary);
        self.0.truncate(capacity);
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.0.len();
        self.0.retain(|entry| entry.id != id);
        self.0.len() != before
    }

    /// Applies the capacity and uniqueness invariants to a list read from
    /// storage, keeping the first (most recent) entry for each URL.
    pub fn normalize(&mut self, capacity: usize) {
        let mut seen = std::collections::HashSet::new();
        self.0
            .retain(|entry| seen.insert(entry.original_url.clone()));
        self.0.truncate(capacity);
    }
}

impl From<Vec<RoadmapSummary>> for HistoryList {
    fn from(entries: Vec<RoadmapSummary>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for HistoryList {
    type Item = RoadmapSummary;
    type IntoIter = std::vec::IntoIter<RoadmapSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
