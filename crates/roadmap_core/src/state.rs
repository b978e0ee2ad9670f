use std::time::Duration;

use crate::view_model::{RoadmapViewModel, TopicRowView};
use crate::{Celebration, ProgressMap, RoadmapPayload};

/// The roadmap currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoadmap {
    pub payload: RoadmapPayload,
    pub key: String,
    pub progress: ProgressMap,
}

impl ActiveRoadmap {
    /// Topics in the roadmap, which is the denominator for the live view.
    pub fn total_count(&self) -> usize {
        self.payload.roadmap.len()
    }

    pub fn percent(&self) -> u8 {
        self.progress.percent(self.total_count())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    active: Option<ActiveRoadmap>,
    celebration: Celebration,
    dirty: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_celebration_delay(delay: Duration) -> Self {
        Self {
            celebration: Celebration::new(delay),
            ..Self::default()
        }
    }

    pub fn active(&self) -> Option<&ActiveRoadmap> {
        self.active.as_ref()
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_celebrating()
    }

    pub fn view(&self) -> Option<RoadmapViewModel> {
        let active = self.active.as_ref()?;
        let course = &active.payload.course;
        let topics = active
            .payload
            .roadmap
            .iter()
            .map(|topic| TopicRowView {
                topic_id: topic.id,
                order: topic.order,
                title: topic.topic.clone(),
                completed: active.progress.is_completed(topic.id),
            })
            .collect();
        Some(RoadmapViewModel {
            title: course.title.clone(),
            platform: course.platform.clone(),
            original_url: course.original_url.clone(),
            topics,
            completed_count: active.progress.completed_count(),
            total_count: active.total_count(),
            percent: active.percent(),
            celebrating: self.celebration.is_celebrating(),
        })
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_active(&mut self, active: Option<ActiveRoadmap>) {
        self.active = active;
        self.mark_dirty();
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut ActiveRoadmap> {
        self.active.as_mut()
    }

    pub(crate) fn celebration_mut(&mut self) -> &mut Celebration {
        &mut self.celebration
    }
}
