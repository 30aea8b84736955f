//! Viewer configuration and the persisted key/value stores

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::traits::KeyValueStore;

/// Key under which the onboarding hint's "already shown" flag is stored
pub const ONBOARDING_KEY: &str = "hasSeenBookmarkPopover";

/// Overrides the settings file location
pub const SETTINGS_ENV: &str = "GLB_VIEWER_SETTINGS";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Seconds between the first file selection and the hint appearing
    pub popover_delay: f32,
    pub onboarding_key: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            popover_delay: 2.0,
            onboarding_key: ONBOARDING_KEY.to_string(),
        }
    }
}

/// Settings file path: `$GLB_VIEWER_SETTINGS`, else `<config dir>/glb-viewer/settings.json`
pub fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|mut p| {
        p.push("glb-viewer");
        p.push("settings.json");
        p
    })
}

/// Volatile store, lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object on disk, rewritten on every `set`
///
/// Entries this viewer did not write are kept as they are, whatever their
/// JSON type.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileStore {
    /// Opens the store at `path`; a missing or unreadable file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt settings file {:?}: {}", path, e);
                Map::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Map::new(),
            Err(e) => {
                log::warn!("Failed to read settings file {:?}: {}", path, e);
                Map::new()
            }
        };
        Self { path, values }
    }

    /// Store at [`settings_path`], or `None` when no config directory exists
    pub fn open_default() -> Option<Self> {
        settings_path().map(Self::open)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create settings directory {:?}", dir))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))
    }
}

impl KeyValueStore for JsonFileStore {
    /// Strings come back verbatim, other scalars in their JSON text form
    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.popover_delay, 2.0);
        assert_eq!(config.onboarding_key, "hasSeenBookmarkPopover");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_json_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(ONBOARDING_KEY), None);
        store.set(ONBOARDING_KEY, "true").unwrap();

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(ONBOARDING_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_json_store_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(ONBOARDING_KEY), None);
    }

    #[test]
    fn test_json_store_keeps_foreign_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"hasSeenBookmarkPopover": true, "other": "keep", "zoom": 1.5}"#)
            .unwrap();

        let mut store = JsonFileStore::open(&path);
        assert_eq!(store.get(ONBOARDING_KEY).as_deref(), Some("true"));
        assert_eq!(store.get("zoom").as_deref(), Some("1.5"));

        store.set(ONBOARDING_KEY, "true").unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["other"], "keep");
        assert_eq!(written["zoom"], 1.5);
        assert_eq!(written[ONBOARDING_KEY], "true");
    }

    #[test]
    fn test_json_store_unreadable_path_starts_empty() {
        // A directory cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path());
        assert_eq!(store.get(ONBOARDING_KEY), None);
    }

    #[test]
    fn test_settings_path_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("custom.json");

        std::env::set_var(SETTINGS_ENV, &custom);
        let overridden = settings_path();
        std::env::remove_var(SETTINGS_ENV);

        assert_eq!(overridden, Some(custom));
        if let Some(default) = settings_path() {
            assert!(default.ends_with("glb-viewer/settings.json"));
        }
    }
}
