use std::collections::HashSet;

use roadmap_core::RoadmapPayload;
use serde_json::Value;
use thiserror::Error;

const DEFAULT_FAILURE: &str = "Failed to generate roadmap";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("please enter a course URL")]
    EmptyUrl,
    /// The generator answered but declined the request.
    #[error("{0}")]
    Rejected(String),
    #[error("malformed roadmap response: {0}")]
    Malformed(String),
    /// The generator could not be reached or failed internally.
    #[error("roadmap generation failed: {0}")]
    Failed(String),
}

/// Produces a roadmap for a course URL. The transport is up to the
/// implementation; only the payload shape is fixed.
#[async_trait::async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, url: &str) -> Result<RoadmapPayload, GenerateError>;
}

/// Interprets a generator response body.
///
/// Accepts `{"success": true, "course": .., "roadmap": [..]}`; maps
/// `{"success": false, "message": ..}` and `{"detail": {"message": ..}}`
/// to [`GenerateError::Rejected`]. Topic ids must be unique.
pub fn parse_generate_response(body: &str) -> Result<RoadmapPayload, GenerateError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| GenerateError::Malformed(err.to_string()))?;

    if let Some(detail) = value.get("detail") {
        let message = detail
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FAILURE);
        return Err(GenerateError::Rejected(message.to_string()));
    }
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FAILURE);
        return Err(GenerateError::Rejected(message.to_string()));
    }

    let payload: RoadmapPayload =
        serde_json::from_value(value).map_err(|err| GenerateError::Malformed(err.to_string()))?;

    let mut seen = HashSet::with_capacity(payload.roadmap.len());
    if let Some(dup) = payload.roadmap.iter().find(|topic| !seen.insert(topic.id)) {
        return Err(GenerateError::Malformed(format!(
            "duplicate topic id {}",
            dup.id
        )));
    }
    Ok(payload)
}
