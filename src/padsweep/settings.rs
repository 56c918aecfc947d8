use crate::error::{Result, SweepError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_IDLE_INTERVAL_MS: u64 = 1000;

/// Connection settings for the shared key-value store, loaded from the JSON
/// file passed via `-s/--settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SweepSettings {
    /// Path to the store's database file.
    #[serde(default)]
    pub db_file: Option<PathBuf>,

    /// How long the queue drain sleeps after an empty poll, in milliseconds.
    #[serde(default = "default_idle_interval_ms")]
    pub idle_interval_ms: u64,
}

fn default_idle_interval_ms() -> u64 {
    DEFAULT_IDLE_INTERVAL_MS
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            db_file: None,
            idle_interval_ms: DEFAULT_IDLE_INTERVAL_MS,
        }
    }
}

impl SweepSettings {
    /// Load settings from a JSON file. Unlike store errors, a bad settings
    /// file is reported before the store is ever opened.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SweepError::Settings(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings: SweepSettings = serde_json::from_str(&content).map_err(|e| {
            SweepError::Settings(format!("cannot parse {}: {}", path.display(), e))
        })?;
        Ok(settings)
    }

    /// Resolve the database file path, falling back to the platform data dir.
    pub fn db_file_or_default(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_file {
            return Ok(path.clone());
        }
        let proj_dirs = directories::ProjectDirs::from("com", "padsweep", "padsweep")
            .ok_or_else(|| SweepError::Settings("could not determine data dir".to_string()))?;
        Ok(proj_dirs.data_dir().join("store.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SweepSettings::default();
        assert!(settings.db_file.is_none());
        assert_eq!(settings.idle_interval_ms, 1000);
    }

    #[test]
    fn load_missing_file_is_a_settings_error() {
        let err = SweepSettings::load("/nonexistent/padsweep-settings.json").unwrap_err();
        assert!(matches!(err, SweepError::Settings(_)));
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "db_file": "/var/lib/pads/store.json" }"#).unwrap();

        let settings = SweepSettings::load(&path).unwrap();
        assert_eq!(
            settings.db_file,
            Some(PathBuf::from("/var/lib/pads/store.json"))
        );
        assert_eq!(settings.idle_interval_ms, 1000);
    }

    #[test]
    fn load_garbage_is_a_settings_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json at all").unwrap();

        let err = SweepSettings::load(&path).unwrap_err();
        assert!(matches!(err, SweepError::Settings(_)));
    }
}
