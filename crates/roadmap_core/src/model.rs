use serde::{Deserialize, Serialize};

/// Identifier of a topic, unique within one roadmap.
pub type TopicId = u32;

/// Course descriptor returned by the roadmap generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub platform: String,
    pub original_url: String,
    pub total_topics: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documentation {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// One unit of the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub order: u32,
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub documentation: Vec<Documentation>,
}

/// A successfully generated roadmap: course descriptor plus ordered topics.
///
/// `generated_at` is passed through verbatim from the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPayload {
    pub course: Course,
    pub roadmap: Vec<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl RoadmapPayload {
    /// Topic identifiers in roadmap order.
    pub fn topic_ids(&self) -> Vec<TopicId> {
        self.roadmap.iter().map(|topic| topic.id).collect()
    }
}

/// History entry for a previously generated roadmap.
///
/// Never mutated after creation; `roadmap` is the snapshot used to redisplay
/// the roadmap without regenerating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub id: i64,
    pub title: String,
    pub platform: String,
    pub original_url: String,
    pub total_topics: u32,
    pub generated_at: String,
    #[serde(rename = "roadmapData")]
    pub roadmap: RoadmapPayload,
}

impl RoadmapSummary {
    /// Builds a summary for `payload`, taking `generated_at` from the payload
    /// when the generator supplied one.
    pub fn from_payload(id: i64, payload: RoadmapPayload, fallback_generated_at: String) -> Self {
        let generated_at = payload
            .generated_at
            .clone()
            .unwrap_or(fallback_generated_at);
        Self {
            id,
            title: payload.course.title.clone(),
            platform: payload.course.platform.clone(),
            original_url: payload.course.original_url.clone(),
            total_topics: payload.course.total_topics,
            generated_at,
            roadmap: payload,
        }
    }
}
