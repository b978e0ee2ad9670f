use std::collections::HashMap;
use std::time::{Duration, Instant};

use roadmap_core::CelebrationTicket;
use roadmap_logging::{roadmap_debug, roadmap_warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

enum Pending {
    Task(JoinHandle<()>),
    /// Scheduled outside an async runtime; checked when polled.
    Deadline(Instant),
}

/// Cancellable one-shot timers for celebration auto-reset.
///
/// Each scheduled reset runs as a tokio task that sends its ticket back over
/// a channel once the delay elapses. Cancelling aborts the task, so a torn
/// down view never receives a late reset.
pub struct CelebrationTimer {
    tx: mpsc::UnboundedSender<CelebrationTicket>,
    rx: mpsc::UnboundedReceiver<CelebrationTicket>,
    pending: HashMap<CelebrationTicket, Pending>,
}

impl Default for CelebrationTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationTimer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: HashMap::new(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn schedule(&mut self, ticket: CelebrationTicket, after: Duration) {
        let pending = match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.tx.clone();
                Pending::Task(handle.spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(ticket);
                }))
            }
            Err(_) => {
                roadmap_warn!("No async runtime; celebration {} resets on poll", ticket);
                Pending::Deadline(Instant::now() + after)
            }
        };
        roadmap_debug!("Scheduled celebration reset {} in {:?}", ticket, after);
        if let Some(Pending::Task(old)) = self.pending.insert(ticket, pending) {
            old.abort();
        }
    }

    pub fn cancel(&mut self, ticket: CelebrationTicket) {
        match self.pending.remove(&ticket) {
            Some(Pending::Task(handle)) => {
                handle.abort();
                roadmap_debug!("Cancelled celebration reset {}", ticket);
            }
            Some(Pending::Deadline(_)) | None => {}
        }
    }

    /// Returns a ticket whose delay has elapsed, without waiting.
    pub fn try_next(&mut self) -> Option<CelebrationTicket> {
        while let Ok(ticket) = self.rx.try_recv() {
            // A ticket cancelled after firing is dropped here.
            if self.pending.remove(&ticket).is_some() {
                return Some(ticket);
            }
        }
        let now = Instant::now();
        let due = self.pending.iter().find_map(|(ticket, pending)| match pending {
            Pending::Deadline(deadline) if *deadline <= now => Some(*ticket),
            _ => None,
        })?;
        self.pending.remove(&due);
        Some(due)
    }

    /// Waits for the next elapsed ticket. Returns `None` immediately when
    /// nothing is scheduled on the runtime.
    pub async fn next(&mut self) -> Option<CelebrationTicket> {
        if let Some(ticket) = self.try_next() {
            return Some(ticket);
        }
        loop {
            let has_task = self
                .pending
                .values()
                .any(|pending| matches!(pending, Pending::Task(_)));
            if !has_task {
                return None;
            }
            let ticket = self.rx.recv().await?;
            if self.pending.remove(&ticket).is_some() {
                return Some(ticket);
            }
        }
    }
}

impl Drop for CelebrationTimer {
    fn drop(&mut self) {
        for (_, pending) in self.pending.drain() {
            if let Pending::Task(handle) = pending {
                handle.abort();
            }
        }
    }
}
