use std::fmt;
use std::sync::Arc;

use roadmap_logging::{roadmap_error, roadmap_warn};

use crate::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light/dark preference. Stored as the bare theme name, not JSON.
#[derive(Clone)]
pub struct ThemeStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl ThemeStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Saved preference, or `system_default` when nothing usable is stored.
    pub fn get(&self, system_default: Theme) -> Theme {
        match self.kv.get(&self.key) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                roadmap_warn!("Ignoring unknown theme {:?}", value);
                system_default
            }),
            Ok(None) => system_default,
            Err(err) => {
                roadmap_warn!("Failed to read theme: {}", err);
                system_default
            }
        }
    }

    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.kv.set(&self.key, theme.as_str()) {
            roadmap_error!("Failed to write theme: {}", err);
        }
    }

    pub fn toggle(&self, system_default: Theme) -> Theme {
        let next = self.get(system_default).toggled();
        self.set(next);
        next
    }
}
