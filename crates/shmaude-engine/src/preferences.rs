//! Persisted UI preferences.
//!
//! Preferences live in a flat string key-value store. The only key in use is
//! [`DARK_MODE_KEY`], holding `"true"` or `"false"`.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{debug, warn};

/// Key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Error type for preference storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable string key-value storage.
pub trait PreferenceStore: Send {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store kept only in memory. Used for tests and `--ephemeral` runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object of string pairs on disk.
///
/// Every `set` rewrites the file atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Use the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `preferences.json` inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    /// Write a value. An unparseable file is replaced rather than blocking
    /// every later write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Json(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "overwriting corrupt preferences file"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        atomic_write(&self.path, json.as_bytes())?;
        Ok(())
    }
}

/// Dark-mode flag with write-through persistence.
///
/// Storage failures never affect the in-memory flag.
pub struct ThemeController {
    dark: bool,
    store: Box<dyn PreferenceStore>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Restore the flag from `store`. Only the literal `"true"` means dark.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let dark = match store.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, "could not read theme preference, using light");
                false
            }
        };
        debug!(dark, "theme preference loaded");
        Self { dark, store }
    }

    /// Whether the dark palette is active.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag, persist it, and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark);
        self.dark
    }

    /// Set the flag explicitly and persist it, logging storage failures.
    pub fn set_dark(&mut self, dark: bool) {
        if let Err(e) = self.try_set_dark(dark) {
            warn!(error = %e, "could not persist theme preference");
        }
    }

    /// Set the flag and persist it, reporting storage failures.
    ///
    /// The in-memory flag is updated even when the write fails.
    pub fn try_set_dark(&mut self, dark: bool) -> Result<(), StoreError> {
        self.dark = dark;
        let value = if dark { "true" } else { "false" };
        self.store.set(DARK_MODE_KEY, value)
    }
}

/// Write a file atomically using a temp file and rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let pid = std::process::id();

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("preferences");
    let tmp_path = path.with_file_name(format!("{file_name}.{timestamp}.{pid}.tmp"));

    let result = (|| {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(&temp.path().join("nested"));
        store.set(DARK_MODE_KEY, "true").unwrap();
        store.set("other", "x").unwrap();

        let reopened = JsonFileStore::in_dir(&temp.path().join("nested"));
        assert_eq!(reopened.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));

        let raw = fs::read_to_string(reopened.path()).unwrap();
        assert!(raw.contains("\"darkMode\": \"true\""));
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(temp.path());
        store.set(DARK_MODE_KEY, "false").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec![PREFERENCES_FILE.to_string()]);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PREFERENCES_FILE);
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get(DARK_MODE_KEY), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_file_store_recovers_from_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PREFERENCES_FILE);
        fs::write(&path, "{\"darkMode\": tru").unwrap();

        let mut theme = ThemeController::load(Box::new(JsonFileStore::new(&path)));
        assert!(!theme.is_dark());
        theme.try_set_dark(true).unwrap();

        let reloaded = ThemeController::load(Box::new(JsonFileStore::new(&path)));
        assert!(reloaded.is_dark());
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"darkMode\": \"true\""));
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let theme = ThemeController::load(Box::new(MemoryStore::new()));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_theme_restores_dark() {
        let mut store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "true").unwrap();
        let theme = ThemeController::load(Box::new(store));
        assert!(theme.is_dark());
    }

    #[test]
    fn test_theme_only_literal_true_is_dark() {
        let mut store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "TRUE").unwrap();
        let theme = ThemeController::load(Box::new(store));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_toggle_twice_round_trips_stored_value() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::in_dir(temp.path());
        store.set(DARK_MODE_KEY, "false").unwrap();

        let mut theme = ThemeController::load(Box::new(store));
        assert!(theme.toggle());
        let reader = JsonFileStore::in_dir(temp.path());
        assert_eq!(reader.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        assert!(!theme.toggle());
        assert_eq!(reader.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_theme_survives_storage_failure() {
        let mut theme = ThemeController::load(Box::new(FailingStore));
        assert!(!theme.is_dark());
        assert!(theme.toggle());
        assert!(theme.is_dark());
        assert!(!theme.toggle());
    }

    #[test]
    fn test_try_set_dark_reports_storage_failure() {
        let mut theme = ThemeController::load(Box::new(FailingStore));
        assert!(matches!(theme.try_set_dark(true), Err(StoreError::Io(_))));
        assert!(theme.is_dark());
    }
}
