use crate::TopicId;

#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapViewModel {
    pub title: String,
    pub platform: String,
    pub original_url: String,
    pub topics: Vec<TopicRowView>,
    pub completed_count: usize,
    pub total_count: usize,
    pub percent: u8,
    pub celebrating: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRowView {
    pub topic_id: TopicId,
    pub order: u32,
    pub title: String,
    pub completed: bool,
}
