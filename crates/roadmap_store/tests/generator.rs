use roadmap_store::{parse_generate_response, GenerateError};

#[test]
fn parses_successful_response() {
    let body = r#"{
        "success": true,
        "course": {"title": "Rust", "platform": "Udemy", "originalUrl": "https://a.dev/rust", "totalTopics": 2},
        "roadmap": [
            {"id": 1, "order": 1, "topic": "Ownership", "description": "Moves", "estimatedHours": 2.5,
             "videos": [{"title": "v", "url": "https://yt/v", "thumbnail": "t", "views": "1K", "channel": "c", "duration": "10:00"}],
             "documentation": [{"title": "Book", "url": "https://doc", "snippet": null}]},
            {"id": 2, "order": 2, "topic": "Traits", "description": "", "videos": [], "documentation": []}
        ],
        "generatedAt": "2024-02-02T12:00:00.123456"
    }"#;

    let payload = parse_generate_response(body).unwrap();
    assert_eq!(payload.course.original_url, "https://a.dev/rust");
    assert_eq!(payload.topic_ids(), vec![1, 2]);
    assert_eq!(payload.roadmap[0].videos[0].duration.as_deref(), Some("10:00"));
    assert_eq!(payload.roadmap[1].estimated_hours, None);
    assert_eq!(payload.generated_at.as_deref(), Some("2024-02-02T12:00:00.123456"));
}

#[test]
fn unsuccessful_responses_carry_their_message() {
    let rejected = parse_generate_response(
        r#"{"success": false, "error": "scrape_failed", "message": "Could not read course page"}"#,
    );
    assert_eq!(
        rejected,
        Err(GenerateError::Rejected("Could not read course page".to_string()))
    );

    let detail = parse_generate_response(r#"{"detail": {"message": "Invalid URL"}}"#);
    assert_eq!(detail, Err(GenerateError::Rejected("Invalid URL".to_string())));

    let bare = parse_generate_response(r#"{"success": false}"#);
    assert_eq!(
        bare,
        Err(GenerateError::Rejected("Failed to generate roadmap".to_string()))
    );
}

#[test]
fn malformed_responses_are_rejected() {
    assert!(matches!(
        parse_generate_response("<html>502</html>"),
        Err(GenerateError::Malformed(_))
    ));
    assert!(matches!(
        parse_generate_response(r#"{"success": true, "course": {"title": "x"}}"#),
        Err(GenerateError::Malformed(_))
    ));
}

#[test]
fn duplicate_topic_ids_are_rejected() {
    let body = r#"{
        "course": {"title": "Rust", "platform": "Udemy", "originalUrl": "https://a.dev/rust", "totalTopics": 2},
        "roadmap": [
            {"id": 1, "order": 1, "topic": "A"},
            {"id": 1, "order": 2, "topic": "B"}
        ]
    }"#;
    assert_eq!(
        parse_generate_response(body),
        Err(GenerateError::Malformed("duplicate topic id 1".to_string()))
    );
}
