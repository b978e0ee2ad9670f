//! Completion detector: fires a one-shot celebration when progress reaches
//! 100% and resets itself after a fixed delay.
//!
//! The "already celebrated" flag is scoped to one continuous 100% streak;
//! dropping below 100% re-arms the detector.
use std::time::Duration;

/// How long a celebration stays visible before resetting to idle.
pub const CELEBRATION_DELAY: Duration = Duration::from_secs(5);

/// Identifies one celebration so a late reset cannot end a newer one.
pub type CelebrationTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Celebrating { ticket: CelebrationTicket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationMsg {
    /// Fresh percentage after a progress change.
    ProgressRecomputed { percent: u8, completed: usize },
    /// The scheduled reset for `ticket` elapsed.
    ResetElapsed { ticket: CelebrationTicket },
    /// The roadmap view was replaced or closed.
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationEffect {
    Celebrate { ticket: CelebrationTicket },
    ScheduleReset { ticket: CelebrationTicket, after: Duration },
    CancelReset { ticket: CelebrationTicket },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    phase: Phase,
    streak_celebrated: bool,
    next_ticket: CelebrationTicket,
    delay: Duration,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(CELEBRATION_DELAY)
    }
}

impl Celebration {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            streak_celebrated: false,
            next_ticket: 1,
            delay,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self.phase, Phase::Celebrating { .. })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Applies `msg` and returns the effects the caller must carry out.
    pub fn update(&mut self, msg: CelebrationMsg) -> Vec<CelebrationEffect> {
        match msg {
            CelebrationMsg::ProgressRecomputed { percent, completed } => {
                let complete = percent == 100 && completed > 0;
                if !complete {
                    self.streak_celebrated = false;
                    return Vec::new();
                }
                if self.streak_celebrated {
                    return Vec::new();
                }
                self.streak_celebrated = true;
                self.start()
            }
            CelebrationMsg::ResetElapsed { ticket } => {
                if self.phase == (Phase::Celebrating { ticket }) {
                    self.phase = Phase::Idle;
                }
                Vec::new()
            }
            CelebrationMsg::TornDown => {
                self.streak_celebrated = false;
                match std::mem::take(&mut self.phase) {
                    Phase::Celebrating { ticket } => vec![CelebrationEffect::CancelReset { ticket }],
                    Phase::Idle => Vec::new(),
                }
            }
        }
    }

    fn start(&mut self) -> Vec<CelebrationEffect> {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let mut effects = Vec::with_capacity(3);
        // A new streak may begin while the previous celebration is still showing.
        if let Phase::Celebrating { ticket: previous } = self.phase {
            effects.push(CelebrationEffect::CancelReset { ticket: previous });
        }
        self.phase = Phase::Celebrating { ticket };
        effects.push(CelebrationEffect::Celebrate { ticket });
        effects.push(CelebrationEffect::ScheduleReset {
            ticket,
            after: self.delay,
        });
        effects
    }
}
