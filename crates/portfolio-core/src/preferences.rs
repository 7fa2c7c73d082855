//! Persisted display preferences.
//!
//! Two scalar preferences survive restarts: the display theme and the active
//! language. Persistence is best-effort. A backend that cannot be read or
//! written never fails the caller; the failure is logged and the in-memory
//! default (or current value) stays authoritative for the session.
//!
//! ```text
//! <data-dir>/preferences.json
//! {
//!   "portfolio-language": "am",
//!   "portfolio-theme": "light"
//! }
//! ```

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PortfolioError, PortfolioResult};

/// Storage key for the display theme
pub const THEME_KEY: &str = "portfolio-theme";

/// Storage key for the active language
pub const LANGUAGE_KEY: &str = "portfolio-language";

/// File name used by [`FileStore::in_dir`]
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Every theme, in selector order
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse the stored string form. Anything else is not a theme.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// The other theme
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class applied to the application shell
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| PortfolioError::Storage(format!("unknown theme '{}'", s)))
    }
}

/// A persistent string key-value backend.
///
/// Implementations report failures honestly; swallowing them is the job of
/// [`PreferenceStore`].
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> PortfolioResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()>;
}

/// JSON-file backed store.
///
/// The whole file is one flat JSON object of string values. A missing file is
/// an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `preferences.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> PortfolioResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&raw)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(PortfolioError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable preferences file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename keeps the file whole
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store.
///
/// Used for ephemeral sessions and in tests, where it can be told to fail
/// upcoming reads and writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    failing_reads: Cell<usize>,
    failing_writes: usize,
}

impl MemoryStore {
    /// Empty, working store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store where every access fails, like storage disabled by the host
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Seed a raw value, bypassing any failure injection
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make the next `count` reads fail
    pub fn fail_next_reads(&mut self, count: usize) {
        self.failing_reads.set(count);
    }

    /// Make the next `count` writes fail
    pub fn fail_next_writes(&mut self, count: usize) {
        self.failing_writes = count;
    }

    /// Raw stored value, bypassing any failure injection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        if self.unavailable {
            return Err(PortfolioError::Storage("storage unavailable".to_string()));
        }
        let pending = self.failing_reads.get();
        if pending > 0 {
            self.failing_reads.set(pending - 1);
            return Err(PortfolioError::Storage(format!("read of '{}' failed", key)));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PortfolioResult<()> {
        if self.unavailable {
            return Err(PortfolioError::Storage("storage unavailable".to_string()));
        }
        if self.failing_writes > 0 {
            self.failing_writes -= 1;
            return Err(PortfolioError::Storage(format!("write of '{}' failed", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best-effort preference persistence over any [`KeyValueStore`].
pub struct PreferenceStore {
    backend: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    /// Wrap a backend
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load the value under `key`.
    ///
    /// Returns `default` when the backend fails, when nothing is stored, or
    /// when the stored value is not one of `allowed`.
    pub fn load(&self, key: &str, allowed: &[&str], default: &str) -> String {
        match self.backend.get(key) {
            Ok(Some(value)) if allowed.contains(&value.as_str()) => value,
            Ok(Some(value)) => {
                debug!(key, value = %value, "Ignoring unsupported stored preference");
                default.to_string()
            }
            Ok(None) => default.to_string(),
            Err(e) => {
                warn!(key, error = %e, "Failed to load preference");
                default.to_string()
            }
        }
    }

    /// Persist `value` under `key`. Failures are logged, never returned.
    pub fn save(&mut self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            warn!(key, error = %e, "Failed to save preference");
        }
    }

    /// Load the stored theme, defaulting to [`Theme::Dark`]
    pub fn load_theme(&self) -> Theme {
        let allowed = Theme::ALL.map(|t| t.as_str());
        let value = self.load(THEME_KEY, &allowed, Theme::default().as_str());
        value.parse().unwrap_or_default()
    }

    /// Persist the theme
    pub fn save_theme(&mut self, theme: Theme) {
        self.save(THEME_KEY, theme.as_str());
    }

    /// Load the stored language code, or `default` when it is not one of
    /// `allowed`
    pub fn load_language(&self, allowed: &[&str], default: &str) -> String {
        self.load(LANGUAGE_KEY, allowed, default)
    }

    /// Persist the language code
    pub fn save_language(&mut self, code: &str) {
        self.save(LANGUAGE_KEY, code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGS: [&str; 2] = ["en", "am"];

    #[test]
    fn theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Light"), None);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn theme_from_str_rejects_unknown_names() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(Theme::Dark.to_string().parse::<Theme>().unwrap(), Theme::Dark);
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(matches!(err, PortfolioError::Storage(_)));
    }

    #[test]
    fn language_helpers_use_the_language_key() {
        let mut store = PreferenceStore::new(MemoryStore::new());
        assert_eq!(store.load_language(&LANGS, "en"), "en");

        store.save_language("am");
        assert_eq!(store.load(LANGUAGE_KEY, &LANGS, "en"), "am");
        assert_eq!(store.load_language(&LANGS, "en"), "am");
        assert_eq!(store.load_language(&["en"], "en"), "en");
    }

    #[test]
    fn load_returns_stored_allowed_value() {
        let store = PreferenceStore::new(MemoryStore::new().with_entry(LANGUAGE_KEY, "am"));
        assert_eq!(store.load(LANGUAGE_KEY, &LANGS, "en"), "am");
    }

    #[test]
    fn load_rejects_unsupported_value() {
        let store = PreferenceStore::new(MemoryStore::new().with_entry(LANGUAGE_KEY, "fr"));
        assert_eq!(store.load(LANGUAGE_KEY, &LANGS, "en"), "en");
    }

    #[test]
    fn load_missing_value_returns_default() {
        let store = PreferenceStore::new(MemoryStore::new());
        assert_eq!(store.load(LANGUAGE_KEY, &LANGS, "en"), "en");
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn unavailable_backend_never_fails_caller() {
        let mut store = PreferenceStore::new(MemoryStore::unavailable());
        store.save_theme(Theme::Light);
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn invalid_theme_falls_back_to_dark() {
        let store = PreferenceStore::new(MemoryStore::new().with_entry(THEME_KEY, "sepia"));
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn memory_store_failure_injection_is_one_shot() {
        let mut backend = MemoryStore::new().with_entry(THEME_KEY, "light");
        backend.fail_next_reads(1);
        assert!(backend.get(THEME_KEY).is_err());
        assert_eq!(backend.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        backend.fail_next_writes(1);
        assert!(backend.set(THEME_KEY, "dark").is_err());
        assert_eq!(backend.raw(THEME_KEY), Some("light"));
        backend.set(THEME_KEY, "dark").unwrap();
        assert_eq!(backend.raw(THEME_KEY), Some("dark"));
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileStore::in_dir(dir.path().join("nested"));

        assert_eq!(backend.get(THEME_KEY).unwrap(), None);
        backend.set(THEME_KEY, "light").unwrap();
        backend.set(LANGUAGE_KEY, "am").unwrap();

        let reopened = FileStore::in_dir(dir.path().join("nested"));
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(reopened.get(LANGUAGE_KEY).unwrap().as_deref(), Some("am"));
    }

    #[test]
    fn file_store_overwrites_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{not json").unwrap();

        let mut backend = FileStore::new(&path);
        assert!(backend.get(THEME_KEY).is_err());

        backend.set(THEME_KEY, "light").unwrap();
        assert_eq!(backend.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, r#"{"portfolio-theme": 7}"#).unwrap();

        let store = PreferenceStore::new(FileStore::new(&path));
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
