use std::time::Duration;

use crate::{CelebrationTicket, ProgressMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the full progress map under `key`.
    SaveProgress { key: String, progress: ProgressMap },
    /// Show the completion celebration.
    Celebrate { ticket: CelebrationTicket },
    ScheduleCelebrationReset {
        ticket: CelebrationTicket,
        after: Duration,
    },
    CancelCelebrationReset { ticket: CelebrationTicket },
}
