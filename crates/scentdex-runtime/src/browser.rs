use scentdex_engine::{Action, Catalog, Session, Snapshot, reduce};
use scentdex_types::{Item, Theme};
use std::sync::Arc;

use crate::Result;
use crate::store::{KeyValueStore, load_favorites, load_theme, save_favorites, save_theme};

/// A session wired to persistence.
///
/// Favorites are read from the store once at open and written back on
/// every favorite toggle. The theme lives next to them in the same store.
pub struct Browser {
    session: Session,
    store: Box<dyn KeyValueStore>,
    theme: Theme,
}

impl Browser {
    pub fn open(catalog: Arc<Catalog>, store: Box<dyn KeyValueStore>) -> Self {
        let favorites = load_favorites(store.as_ref());
        let theme = load_theme(store.as_ref());
        let state = scentdex_engine::BrowserState::with_favorites(favorites);
        Self {
            session: Session::with_state(catalog, state),
            store,
            theme,
        }
    }

    /// Apply one action. Favorite changes are written to the store before
    /// the session sees them; a failed write leaves the session unchanged.
    pub fn dispatch(&mut self, action: &Action) -> Result<&Snapshot> {
        self.dispatch_all(std::slice::from_ref(action))
    }

    /// Dispatch several actions, persisting favorites once.
    pub fn dispatch_all(&mut self, actions: &[Action]) -> Result<&Snapshot> {
        if actions.iter().any(Action::touches_favorites) {
            let next = actions.iter().fold(self.session.state().clone(), reduce);
            save_favorites(self.store.as_mut(), &next.favorites)?;
        }
        self.session.dispatch_all(actions);
        Ok(self.session.snapshot())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        self.session.catalog()
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.session.snapshot()
    }

    pub fn results(&self) -> Vec<&Item> {
        self.session.results()
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.session.is_favorite(code)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        save_theme(self.store.as_mut(), &theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<&Theme> {
        self.set_theme(self.theme.toggled())?;
        Ok(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::store::{FAVORITES_KEY, FileStore, MemoryStore};
    use scentdex_types::Facet;
    use tempfile::TempDir;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus"]),
            Item::new("A2", "Noir", "By").with_accords(["woody"]),
        ]))
    }

    #[test]
    fn test_favorite_toggle_is_persisted() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let mut browser = Browser::open(catalog(), Box::new(FileStore::in_dir(temp_dir.path())));
        browser.dispatch(&Action::ToggleFavorite("A2".to_string()))?;

        let reopened = Browser::open(catalog(), Box::new(FileStore::in_dir(temp_dir.path())));
        assert!(reopened.is_favorite("A2"));
        Ok(())
    }

    #[test]
    fn test_filter_actions_do_not_touch_store() -> Result<()> {
        let mut browser = Browser::open(catalog(), Box::new(MemoryStore::new()));
        let snapshot = browser.dispatch(&Action::select(Facet::Accord, "citrus"))?;
        assert_eq!(snapshot.results, vec![0]);
        assert_eq!(browser.store.get(FAVORITES_KEY), None);
        Ok(())
    }

    #[test]
    fn test_malformed_favorites_start_empty() -> Result<()> {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "[1, 2")?;

        let mut browser = Browser::open(catalog(), Box::new(store));
        let snapshot = browser.dispatch(&Action::ToggleFavoritesView)?;
        assert!(snapshot.results.is_empty());
        Ok(())
    }

    #[test]
    fn test_toggle_theme_persists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut browser = Browser::open(catalog(), Box::new(FileStore::in_dir(temp_dir.path())));
        assert_eq!(browser.toggle_theme()?, &Theme::Dark);

        let reopened = Browser::open(catalog(), Box::new(FileStore::in_dir(temp_dir.path())));
        assert_eq!(reopened.theme(), &Theme::Dark);
        Ok(())
    }

    /// Store whose writes always fail, like a read-only data dir.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_favorite_save_leaves_session_unchanged() {
        let mut browser = Browser::open(catalog(), Box::new(ReadOnlyStore));

        assert!(browser.dispatch(&Action::ToggleFavorite("A1".to_string())).is_err());
        assert!(!browser.is_favorite("A1"));

        let actions = [
            Action::select(Facet::Accord, "citrus"),
            Action::ToggleFavorite("A2".to_string()),
        ];
        assert!(browser.dispatch_all(&actions).is_err());
        assert!(!browser.is_favorite("A2"));
        assert_eq!(browser.snapshot().results, vec![0, 1]);
    }
}
