use std::sync::Arc;

use roadmap_core::{
    shared_course_url, strip_course_param, update, Clock, Effect, HistoryList, Msg,
    RoadmapPayload, RoadmapSummary, RoadmapViewModel, TopicId, ViewState,
};
use roadmap_logging::{roadmap_debug, roadmap_info, roadmap_warn};

use crate::{
    CelebrationTimer, GenerateError, HistoryStore, KeyValueStore, ProgressStore,
    RoadmapGenerator, Settings, Theme, ThemeStore,
};

/// Result of toggling one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub completed: bool,
    pub percent: u8,
    /// The toggle completed the roadmap and started a celebration.
    pub celebrated: bool,
}

/// Runs the roadmap view: feeds messages to the pure core state machine and
/// carries out the effects it returns against the stores and the timer.
///
/// All calls happen on one logical thread; each toggle's write finishes
/// before the next toggle is applied.
pub struct RoadmapSession {
    clock: Clock,
    history: HistoryStore,
    progress: ProgressStore,
    theme: ThemeStore,
    generator: Arc<dyn RoadmapGenerator>,
    state: ViewState,
    timer: CelebrationTimer,
    celebrations: u64,
    last_error: Option<String>,
}

impl RoadmapSession {
    /// Creates a session and loads the persisted history.
    pub fn new(
        kv: Arc<dyn KeyValueStore>,
        generator: Arc<dyn RoadmapGenerator>,
        settings: Settings,
    ) -> Self {
        Self {
            clock: Clock::default(),
            history: HistoryStore::new(kv.clone(), &settings),
            progress: ProgressStore::new(kv.clone(), settings.clone()),
            theme: ThemeStore::new(kv, settings.theme_key.clone()),
            generator,
            state: ViewState::with_celebration_delay(settings.celebration_delay()),
            timer: CelebrationTimer::new(),
            celebrations: 0,
            last_error: None,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn history(&self) -> &HistoryList {
        self.history.list()
    }

    pub fn history_progress(&self, summary: &RoadmapSummary) -> u8 {
        self.history.progress_percent_for(summary)
    }

    /// Current view. Celebration resets that already elapsed are applied
    /// first, so callers never see a stale celebration.
    pub fn view(&mut self) -> Option<RoadmapViewModel> {
        self.poll_timers();
        self.state.view()
    }

    pub fn is_celebrating(&mut self) -> bool {
        self.poll_timers();
        self.state.is_celebrating()
    }

    /// Number of celebrations fired since the session started.
    pub fn celebrations(&self) -> u64 {
        self.celebrations
    }

    /// User-visible message of the last failed generation, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns whether the view changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Generates a roadmap for `url`, records it in history and opens it.
    ///
    /// On failure nothing is recorded and the current view is left as is.
    pub async fn generate(&mut self, url: &str) -> Result<(), GenerateError> {
        let url = url.trim();
        let result = if url.is_empty() {
            Err(GenerateError::EmptyUrl)
        } else {
            self.generator.generate(url).await
        };
        match result {
            Ok(payload) => {
                self.last_error = None;
                self.open_generated(payload);
                Ok(())
            }
            Err(err) => {
                roadmap_warn!("Roadmap generation for {:?} failed: {}", url, err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Records an already generated payload in history and opens it.
    pub fn open_generated(&mut self, payload: RoadmapPayload) {
        roadmap_info!(
            "Opening generated roadmap {:?} ({} topics)",
            payload.course.title,
            payload.roadmap.len()
        );
        let now = self.clock.now();
        self.history.add_payload(payload.clone(), now);
        self.open(payload);
    }

    /// Reopens a roadmap from its history snapshot. Returns `false` if no
    /// entry has `id`.
    pub fn open_from_history(&mut self, id: i64) -> bool {
        let Some(summary) = self.history.find(id) else {
            roadmap_warn!("History entry {} not found", id);
            return false;
        };
        let payload = summary.roadmap.clone();
        self.open(payload);
        true
    }

    /// Handles an application location that may carry a shared course link.
    ///
    /// Returns `Ok(None)` when there is no link, and the location with the
    /// link parameter removed once the roadmap was generated and opened. A
    /// failed generation leaves the location untouched.
    pub async fn open_shared_link(
        &mut self,
        location: &str,
    ) -> Result<Option<String>, GenerateError> {
        let Some(course_url) = shared_course_url(location) else {
            return Ok(None);
        };
        roadmap_info!("Opening shared course link {}", course_url);
        self.generate(&course_url).await?;
        Ok(Some(strip_course_param(location)))
    }

    /// Flips the completion of `topic_id` in the open roadmap. Returns `None`
    /// when no roadmap is open.
    pub fn toggle(&mut self, topic_id: TopicId) -> Option<ToggleOutcome> {
        self.state.active()?;
        let at = self.clock.now();
        let celebrated = self.dispatch(Msg::TopicToggled { topic_id, at });
        let active = self.state.active()?;
        Some(ToggleOutcome {
            completed: active.progress.is_completed(topic_id),
            percent: active.percent(),
            celebrated,
        })
    }

    /// Closes the open roadmap, cancelling any pending celebration reset.
    pub fn reset(&mut self) {
        self.dispatch(Msg::ViewReset);
    }

    pub fn remove_from_history(&mut self, id: i64) -> &HistoryList {
        self.history.remove(id)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn theme(&self, system_default: Theme) -> Theme {
        self.theme.get(system_default)
    }

    pub fn toggle_theme(&mut self, system_default: Theme) -> Theme {
        self.theme.toggle(system_default)
    }

    /// Applies every celebration reset that has already elapsed. Returns the
    /// number applied.
    pub fn poll_timers(&mut self) -> usize {
        let mut applied = 0;
        while let Some(ticket) = self.timer.try_next() {
            self.dispatch(Msg::CelebrationElapsed { ticket });
            applied += 1;
        }
        applied
    }

    /// Waits until the running celebration (if any) has reset.
    pub async fn wait_for_celebration_reset(&mut self) {
        while self.state.is_celebrating() {
            match self.timer.next().await {
                Some(ticket) => {
                    self.dispatch(Msg::CelebrationElapsed { ticket });
                }
                None => break,
            }
        }
    }

    fn open(&mut self, payload: RoadmapPayload) {
        let key = self.progress.key_for(&payload.course.original_url);
        let progress = self.progress.load_or_init(&key, &payload.topic_ids());
        self.dispatch(Msg::RoadmapOpened {
            payload,
            key,
            progress,
        });
    }

    /// Runs `msg` through the core and executes the effects. Returns whether
    /// a celebration started.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut celebrated = false;
        for effect in effects {
            match effect {
                Effect::SaveProgress { key, progress } => {
                    roadmap_debug!("Saving progress {} ({} entries)", key, progress.len());
                    self.progress.save(&key, &progress);
                }
                Effect::Celebrate { ticket } => {
                    celebrated = true;
                    self.celebrations += 1;
                    if let Some(active) = self.state.active() {
                        roadmap_info!(
                            "Course completed: {:?} (celebration {})",
                            active.payload.course.title,
                            ticket
                        );
                    }
                }
                Effect::ScheduleCelebrationReset { ticket, after } => {
                    self.timer.schedule(ticket, after);
                }
                Effect::CancelCelebrationReset { ticket } => {
                    self.timer.cancel(ticket);
                }
            }
        }
        celebrated
    }
}
