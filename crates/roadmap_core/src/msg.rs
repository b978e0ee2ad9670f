use chrono::{DateTime, Utc};

use crate::{CelebrationTicket, ProgressMap, RoadmapPayload, TopicId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A roadmap was selected (generated, reopened from history or shared)
    /// together with its loaded or freshly initialized progress.
    RoadmapOpened {
        payload: RoadmapPayload,
        key: String,
        progress: ProgressMap,
    },
    /// User marked or unmarked a topic.
    TopicToggled {
        topic_id: TopicId,
        at: DateTime<Utc>,
    },
    /// The auto-reset delay of a celebration elapsed.
    CelebrationElapsed { ticket: CelebrationTicket },
    /// User left the roadmap view.
    ViewReset,
}
