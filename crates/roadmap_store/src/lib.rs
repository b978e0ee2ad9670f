//! Roadmap store: durable key-value persistence for history, progress and
//! theme, plus the session runner that executes core effects.
mod config;
mod generator;
mod history_store;
mod kv;
mod persist;
mod progress_store;
mod session;
mod theme;
mod timer;

pub use config::Settings;
pub use generator::{parse_generate_response, GenerateError, RoadmapGenerator};
pub use history_store::HistoryStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use progress_store::ProgressStore;
pub use session::{RoadmapSession, ToggleOutcome};
pub use theme::{Theme, ThemeStore};
pub use timer::CelebrationTimer;
