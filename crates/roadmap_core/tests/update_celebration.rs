use std::sync::Once;
use std::time::Duration;

use chrono::Utc;
use pretty_assertions::assert_eq;
use roadmap_core::{
    update, Course, Effect, Msg, ProgressMap, RoadmapPayload, Topic, TopicId, ViewState,
    CELEBRATION_DELAY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roadmap_logging::initialize_for_tests);
}

fn payload(topics: u32) -> RoadmapPayload {
    RoadmapPayload {
        course: Course {
            title: "Rust Basics".to_string(),
            platform: "Udemy".to_string(),
            original_url: "https://example.com/course-a".to_string(),
            total_topics: topics,
        },
        roadmap: (1..=topics)
            .map(|id| Topic {
                id,
                order: id,
                topic: format!("Topic {id}"),
                description: String::new(),
                estimated_hours: Some(1.5),
                videos: Vec::new(),
                documentation: Vec::new(),
            })
            .collect(),
        generated_at: None,
    }
}

fn open(topics: u32) -> ViewState {
    let payload = payload(topics);
    let progress = ProgressMap::init(payload.topic_ids());
    let (state, _) = update(
        ViewState::new(),
        Msg::RoadmapOpened {
            payload,
            key: "fpc_progress_test".to_string(),
            progress,
        },
    );
    state
}

fn toggle(state: ViewState, topic_id: TopicId) -> (ViewState, Vec<Effect>) {
    update(
        state,
        Msg::TopicToggled {
            topic_id,
            at: Utc::now(),
        },
    )
}

fn celebrations(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Celebrate { .. }))
        .count()
}

#[test]
fn opening_saves_initial_progress() {
    init_logging();
    let payload = payload(2);
    let progress = ProgressMap::init(payload.topic_ids());
    let (mut state, effects) = update(
        ViewState::new(),
        Msg::RoadmapOpened {
            payload,
            key: "k".to_string(),
            progress: progress.clone(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::SaveProgress {
            key: "k".to_string(),
            progress,
        }]
    );
    let view = state.view().unwrap();
    assert_eq!(view.percent, 0);
    assert_eq!(view.total_count, 2);
    assert!(!view.celebrating);
    assert!(state.consume_dirty());
}

#[test]
fn opening_an_empty_roadmap_saves_nothing() {
    init_logging();
    let (state, effects) = update(
        ViewState::new(),
        Msg::RoadmapOpened {
            payload: payload(0),
            key: "k".to_string(),
            progress: ProgressMap::default(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().unwrap().percent, 0);
    assert!(!state.is_celebrating());
}

#[test]
fn reaching_full_completion_celebrates_once() {
    init_logging();
    let state = open(3);

    let (state, effects) = toggle(state, 1);
    assert_eq!(celebrations(&effects), 0);
    let (state, effects) = toggle(state, 2);
    assert_eq!(celebrations(&effects), 0);
    assert_eq!(state.view().unwrap().percent, 67);

    let (state, effects) = toggle(state, 3);
    let ticket = match effects[1] {
        Effect::Celebrate { ticket } => ticket,
        ref other => panic!("expected celebration, got {other:?}"),
    };
    assert_eq!(
        effects[2],
        Effect::ScheduleCelebrationReset {
            ticket,
            after: CELEBRATION_DELAY,
        }
    );
    assert_eq!(celebrations(&effects), 1);
    assert!(state.view().unwrap().celebrating);
    assert_eq!(state.view().unwrap().percent, 100);
}

#[test]
fn unmarking_and_remarking_celebrates_again() {
    init_logging();
    let mut state = open(3);
    let mut total = 0;
    for id in [1, 2, 3, 3, 3] {
        let (next, effects) = toggle(state, id);
        total += celebrations(&effects);
        state = next;
    }

    assert_eq!(total, 2);
    assert!(state.is_celebrating());
}

#[test]
fn restarting_a_celebration_cancels_the_pending_reset() {
    init_logging();
    let state = open(1);
    let (state, first) = toggle(state, 1);
    let Effect::Celebrate { ticket: first_ticket } = first[1] else {
        panic!("expected celebration");
    };
    let (state, effects) = toggle(state, 1);
    assert_eq!(effects.len(), 1);

    let (_state, effects) = toggle(state, 1);
    assert_eq!(
        effects[1],
        Effect::CancelCelebrationReset {
            ticket: first_ticket
        }
    );
    assert_eq!(celebrations(&effects), 1);
}

#[test]
fn reset_elapsed_returns_to_idle_and_ignores_stale_tickets() {
    init_logging();
    let state = open(1);
    let (state, effects) = toggle(state, 1);
    let Effect::Celebrate { ticket } = effects[1] else {
        panic!("expected celebration");
    };

    let (state, effects) = update(
        state,
        Msg::CelebrationElapsed {
            ticket: ticket + 10,
        },
    );
    assert!(effects.is_empty());
    assert!(state.is_celebrating());

    let (mut state, _) = update(state, Msg::CelebrationElapsed { ticket });
    assert!(!state.is_celebrating());
    assert!(state.consume_dirty());

    // Still at 100%: no new celebration until progress leaves and returns.
    let (state, effects) = update(state, Msg::CelebrationElapsed { ticket });
    assert!(effects.is_empty());
    assert!(!state.is_celebrating());
}

#[test]
fn view_reset_cancels_pending_reset() {
    init_logging();
    let state = open(2);
    let (state, _) = toggle(state, 1);
    let (state, effects) = toggle(state, 2);
    let Effect::Celebrate { ticket } = effects[1] else {
        panic!("expected celebration");
    };

    let (state, effects) = update(state, Msg::ViewReset);
    assert_eq!(effects, vec![Effect::CancelCelebrationReset { ticket }]);
    assert!(state.view().is_none());
    assert!(!state.is_celebrating());
}

#[test]
fn opening_a_completed_roadmap_celebrates() {
    init_logging();
    let payload = payload(2);
    let progress = ProgressMap::init(payload.topic_ids())
        .toggled(1, Utc::now())
        .toggled(2, Utc::now());
    let (state, effects) = update(
        ViewState::with_celebration_delay(Duration::from_millis(10)),
        Msg::RoadmapOpened {
            payload,
            key: "k".to_string(),
            progress,
        },
    );

    assert_eq!(celebrations(&effects), 1);
    assert!(effects.contains(&Effect::ScheduleCelebrationReset {
        ticket: 1,
        after: Duration::from_millis(10),
    }));
    assert!(state.is_celebrating());
}
