use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TopicId;

/// Completion state of a single topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-roadmap map from topic id to completion state.
///
/// Ids missing from the map count as not completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(BTreeMap<TopicId, TopicProgress>);

impl ProgressMap {
    /// Fresh map with every topic marked not completed.
    pub fn init(topic_ids: impl IntoIterator<Item = TopicId>) -> Self {
        Self(
            topic_ids
                .into_iter()
                .map(|id| (id, TopicProgress::default()))
                .collect(),
        )
    }

    pub fn get(&self, topic_id: TopicId) -> Option<&TopicProgress> {
        self.0.get(&topic_id)
    }

    pub fn is_completed(&self, topic_id: TopicId) -> bool {
        self.0.get(&topic_id).is_some_and(|p| p.completed)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TopicId, &TopicProgress)> {
        self.0.iter()
    }

    /// Number of entries marked completed, including ids that are no longer
    /// part of the roadmap.
    pub fn completed_count(&self) -> usize {
        self.0.values().filter(|p| p.completed).count()
    }

    /// Returns a copy with the completion flag of `topic_id` flipped.
    ///
    /// Completing records `now`; un-completing clears the timestamp. An id
    /// not present in the map is inserted as completed.
    pub fn toggled(&self, topic_id: TopicId, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        let entry = next.0.entry(topic_id).or_default();
        entry.completed = !entry.completed;
        entry.completed_at = entry.completed.then_some(now);
        next
    }

    /// Completion percentage against `total_topics`, see [`percent`].
    pub fn percent(&self, total_topics: usize) -> u8 {
        percent(self.completed_count(), total_topics)
    }
}

impl FromIterator<(TopicId, TopicProgress)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (TopicId, TopicProgress)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `completed / total` as a whole percentage, rounded half up and capped at
/// 100. Zero topics yield 0.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed as u64;
    let total = total as u64;
    let rounded = (completed * 200 + total) / (total * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(199, 200), 100);
    }

    #[test]
    fn percent_is_zero_without_topics() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 0), 0);
    }

    #[test]
    fn percent_caps_stale_entries() {
        assert_eq!(percent(4, 3), 100);
    }
}
