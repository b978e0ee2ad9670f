//! Roadmap core: pure data model, storage-key derivation, history and progress
//! rules, and the view/celebration state machines.
mod celebration;
mod clock;
mod effect;
mod history;
mod key;
mod model;
mod msg;
mod progress;
mod share;
mod state;
mod update;
mod view_model;

pub use celebration::{Celebration, CelebrationEffect, CelebrationMsg, CelebrationTicket};
pub use celebration::{Phase, CELEBRATION_DELAY};
pub use clock::Clock;
pub use effect::Effect;
pub use history::{HistoryList, MAX_HISTORY};
pub use key::{derive_key, progress_storage_key, KeyScheme, KEY_PREFIX_LEN, PROGRESS_KEY_PREFIX};
pub use model::{Course, Documentation, RoadmapPayload, RoadmapSummary, Topic, TopicId, Video};
pub use msg::Msg;
pub use progress::{percent, ProgressMap, TopicProgress};
pub use share::{share_link, shared_course_url, strip_course_param, COURSE_PARAM};
pub use state::{ActiveRoadmap, ViewState};
pub use update::update;
pub use view_model::{RoadmapViewModel, TopicRowView};
