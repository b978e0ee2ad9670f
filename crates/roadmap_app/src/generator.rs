use std::fs;
use std::path::PathBuf;

use roadmap_core::RoadmapPayload;
use roadmap_store::{parse_generate_response, GenerateError, RoadmapGenerator};

/// Serves a roadmap from a saved generator response file.
///
/// The CLI never talks to the generation service itself; responses are
/// produced elsewhere and handed over as files.
pub(crate) struct ResponseFileGenerator {
    path: Option<PathBuf>,
}

impl ResponseFileGenerator {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl RoadmapGenerator for ResponseFileGenerator {
    async fn generate(&self, url: &str) -> Result<RoadmapPayload, GenerateError> {
        let Some(path) = &self.path else {
            return Err(GenerateError::Failed(format!(
                "no generator response supplied for {url}"
            )));
        };
        let body = fs::read_to_string(path)
            .map_err(|err| GenerateError::Failed(format!("reading {:?}: {err}", path)))?;
        let payload = parse_generate_response(&body)?;
        if payload.course.original_url != url {
            return Err(GenerateError::Rejected(format!(
                "response is for {}, not {url}",
                payload.course.original_url
            )));
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RESPONSE: &str = r#"{
        "success": true,
        "course": {"title": "Rust", "platform": "Udemy", "originalUrl": "https://a.dev/rust", "totalTopics": 1},
        "roadmap": [{"id": 1, "order": 1, "topic": "Ownership"}]
    }"#;

    #[tokio::test]
    async fn serves_matching_response() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("response.json");
        fs::write(&path, RESPONSE).unwrap();

        let generator = ResponseFileGenerator::new(Some(path));
        let payload = generator.generate("https://a.dev/rust").await.unwrap();
        assert_eq!(payload.course.title, "Rust");

        let err = generator.generate("https://b.dev/go").await.unwrap_err();
        assert!(matches!(err, GenerateError::Rejected(_)));
    }

    #[tokio::test]
    async fn fails_without_response() {
        let generator = ResponseFileGenerator::new(None);
        let err = generator.generate("https://a.dev/rust").await.unwrap_err();
        assert!(matches!(err, GenerateError::Failed(_)));
    }
}
