//! Key-value persistence for favorites and theme.
//!
//! Values are strings, like a browser's local storage. Favorites are stored
//! as a JSON array of codes; the theme as its name, with light (the default)
//! stored as an absent key.

use scentdex_types::{Favorites, Theme};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::Result;

pub const FAVORITES_KEY: &str = "scentdex-favorites";
pub const THEME_KEY: &str = "scentdex-theme";
pub const STORE_FILE: &str = "store.json";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by one JSON object file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store file. A missing file is an empty store; an unreadable
    /// or malformed one is treated as empty too.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed store file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read store file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Persisted favorites. Absent or malformed data is an empty set.
pub fn load_favorites(store: &dyn KeyValueStore) -> Favorites {
    let Some(raw) = store.get(FAVORITES_KEY) else {
        return Favorites::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored favorites are malformed; starting empty");
        Favorites::new()
    })
}

pub fn save_favorites(store: &mut dyn KeyValueStore, favorites: &Favorites) -> Result<()> {
    let raw = serde_json::to_string(favorites)?;
    store.set(FAVORITES_KEY, &raw)?;
    tracing::info!(count = favorites.len(), "saved favorites");
    Ok(())
}

pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: &Theme) -> Result<()> {
    if theme.is_default() {
        store.remove(THEME_KEY)?;
    } else {
        store.set(THEME_KEY, theme.name())?;
    }
    tracing::info!(theme = theme.name(), "saved theme");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_favorites_round_trip_as_array() -> Result<()> {
        let mut store = MemoryStore::new();
        let favorites: Favorites = ["B2", "A1"].into_iter().collect();

        save_favorites(&mut store, &favorites)?;

        assert_eq!(store.get(FAVORITES_KEY).as_deref(), Some(r#"["A1","B2"]"#));
        assert_eq!(load_favorites(&store), favorites);
        Ok(())
    }

    #[test]
    fn test_malformed_favorites_load_empty() -> Result<()> {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{oops")?;
        assert!(load_favorites(&store).is_empty());

        store.set(FAVORITES_KEY, r#"{"A1": true}"#)?;
        assert!(load_favorites(&store).is_empty());
        Ok(())
    }

    #[test]
    fn test_light_theme_is_an_absent_key() -> Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);

        save_theme(&mut store, &Theme::Dark)?;
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);

        save_theme(&mut store, &Theme::Light)?;
        assert_eq!(store.get(THEME_KEY), None);
        Ok(())
    }

    #[test]
    fn test_file_store_persists_across_opens() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let mut store = FileStore::in_dir(temp_dir.path());
        save_favorites(&mut store, &["A1"].into_iter().collect())?;
        save_theme(&mut store, &Theme::Dark)?;

        let reopened = FileStore::in_dir(temp_dir.path());
        assert!(load_favorites(&reopened).contains("A1"));
        assert_eq!(load_theme(&reopened), Theme::Dark);
        Ok(())
    }

    #[test]
    fn test_file_store_ignores_malformed_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join(STORE_FILE), "not json")?;

        let store = FileStore::in_dir(temp_dir.path());
        assert!(load_favorites(&store).is_empty());
        Ok(())
    }
}
