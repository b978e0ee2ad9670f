//! Optional `roadmap.ron` settings file in the data directory.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use roadmap_logging::{roadmap_info, roadmap_warn};
use roadmap_store::{AtomicFileWriter, Settings};

pub const SETTINGS_FILENAME: &str = "roadmap.ron";

/// Reads settings from `data_dir`, falling back to defaults when the file is
/// missing or malformed.
pub(crate) fn load_settings(data_dir: &Path) -> Settings {
    let path = data_dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            roadmap_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            roadmap_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            roadmap_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

/// Writes `settings` to `data_dir` and returns the file path.
pub(crate) fn write_settings(data_dir: &Path, settings: &Settings) -> anyhow::Result<PathBuf> {
    let pretty = ron::ser::PrettyConfig::new();
    let content =
        ron::ser::to_string_pretty(settings, pretty).context("serializing settings")?;
    let writer = AtomicFileWriter::new(data_dir.to_path_buf());
    let path = writer
        .write(SETTINGS_FILENAME, &content)
        .with_context(|| format!("writing settings to {:?}", data_dir))?;
    Ok(path)
}
