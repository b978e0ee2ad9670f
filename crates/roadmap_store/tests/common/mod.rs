#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use roadmap_core::{Course, RoadmapPayload, Topic};
use roadmap_store::{GenerateError, RoadmapGenerator};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roadmap_logging::initialize_for_tests);
}

pub fn payload(url: &str, title: &str, topics: u32) -> RoadmapPayload {
    RoadmapPayload {
        course: Course {
            title: title.to_string(),
            platform: "Udemy".to_string(),
            original_url: url.to_string(),
            total_topics: topics,
        },
        roadmap: (1..=topics)
            .map(|id| Topic {
                id,
                order: id,
                topic: format!("Topic {id}"),
                description: format!("About topic {id}"),
                estimated_hours: Some(2.0),
                videos: Vec::new(),
                documentation: Vec::new(),
            })
            .collect(),
        generated_at: None,
    }
}

/// Generator answering from a fixed table and counting calls.
#[derive(Default)]
pub struct StubGenerator {
    responses: Mutex<HashMap<String, Result<RoadmapPayload, GenerateError>>>,
    calls: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: &str, response: Result<RoadmapPayload, GenerateError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RoadmapGenerator for StubGenerator {
    async fn generate(&self, url: &str) -> Result<RoadmapPayload, GenerateError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(GenerateError::Failed("unreachable".to_string())))
    }
}
