use crate::{ActiveRoadmap, CelebrationEffect, CelebrationMsg, Effect, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every progress change is followed by a recomputation of the percentage,
/// which is fed to the completion detector.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::RoadmapOpened {
            payload,
            key,
            progress,
        } => {
            let mut effects = tear_down(&mut state);
            if !progress.is_empty() {
                effects.push(Effect::SaveProgress {
                    key: key.clone(),
                    progress: progress.clone(),
                });
            }
            state.set_active(Some(ActiveRoadmap {
                payload,
                key,
                progress,
            }));
            effects.extend(recompute(&mut state));
            effects
        }
        Msg::TopicToggled { topic_id, at } => {
            let Some(active) = state.active_mut() else {
                return (state, Vec::new());
            };
            active.progress = active.progress.toggled(topic_id, at);
            let save = Effect::SaveProgress {
                key: active.key.clone(),
                progress: active.progress.clone(),
            };
            state.mark_dirty();
            let mut effects = vec![save];
            effects.extend(recompute(&mut state));
            effects
        }
        Msg::CelebrationElapsed { ticket } => {
            let was_celebrating = state.is_celebrating();
            let effects = state
                .celebration_mut()
                .update(CelebrationMsg::ResetElapsed { ticket });
            if was_celebrating != state.is_celebrating() {
                state.mark_dirty();
            }
            effects.into_iter().map(to_effect).collect()
        }
        Msg::ViewReset => {
            let effects = tear_down(&mut state);
            state.set_active(None);
            effects
        }
    };

    (state, effects)
}

fn recompute(state: &mut ViewState) -> Vec<Effect> {
    let Some(active) = state.active() else {
        return Vec::new();
    };
    let msg = CelebrationMsg::ProgressRecomputed {
        percent: active.percent(),
        completed: active.progress.completed_count(),
    };
    let effects = state.celebration_mut().update(msg);
    if !effects.is_empty() {
        state.mark_dirty();
    }
    effects.into_iter().map(to_effect).collect()
}

fn tear_down(state: &mut ViewState) -> Vec<Effect> {
    state
        .celebration_mut()
        .update(CelebrationMsg::TornDown)
        .into_iter()
        .map(to_effect)
        .collect()
}

fn to_effect(effect: CelebrationEffect) -> Effect {
    match effect {
        CelebrationEffect::Celebrate { ticket } => Effect::Celebrate { ticket },
        CelebrationEffect::ScheduleReset { ticket, after } => {
            Effect::ScheduleCelebrationReset { ticket, after }
        }
        CelebrationEffect::CancelReset { ticket } => Effect::CancelCelebrationReset { ticket },
    }
}
