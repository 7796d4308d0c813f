use scentdex_types::{FilterState, Item};
use serde::Serialize;
use std::sync::Arc;

use crate::filter::compute_result_set;
use crate::summary::{ResultSummary, summarize};
use crate::sync::{Action, BrowserState, Chip, chips, reduce};
use crate::viability::{Viability, compute_option_viability};
use crate::Catalog;

/// The three outputs presentation renders, computed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Catalog positions of the result set, in catalog order
    pub results: Vec<usize>,
    pub viability: Viability,
    pub chips: Vec<Chip>,
    pub summary: ResultSummary,
}

/// A browsing session: one catalog, one evolving state.
///
/// `dispatch` is the only way to change the state. Each call recomputes the
/// whole snapshot, because any selection can change any option's viability.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    state: BrowserState,
    snapshot: Snapshot,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_state(catalog, BrowserState::default())
    }

    pub fn with_state(catalog: Arc<Catalog>, state: BrowserState) -> Self {
        let mut session = Self {
            catalog,
            state,
            snapshot: Snapshot::default(),
        };
        session.recompute();
        session
    }

    pub fn dispatch(&mut self, action: &Action) -> &Snapshot {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.recompute();
        &self.snapshot
    }

    pub fn dispatch_all<'s>(&mut self, actions: impl IntoIterator<Item = &'s Action>) -> &Snapshot {
        for action in actions {
            self.state = reduce(std::mem::take(&mut self.state), action);
        }
        self.recompute();
        &self.snapshot
    }

    fn recompute(&mut self) {
        let catalog = &self.catalog;
        let filters = &self.state.filters;
        let favorites = &self.state.favorites;

        let results: Vec<usize> = compute_result_set(catalog, filters, favorites)
            .into_iter()
            .filter_map(|item| catalog.position(&item.code))
            .collect();

        self.snapshot = Snapshot {
            viability: compute_option_viability(catalog, filters, favorites),
            chips: chips(filters),
            summary: summarize(catalog, &filters.scope, results.len()),
            results,
        };
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn filters(&self) -> &FilterState {
        &self.state.filters
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Items of the current result set
    pub fn results(&self) -> Vec<&Item> {
        self.snapshot
            .results
            .iter()
            .filter_map(|&pos| self.catalog.item_at(pos))
            .collect()
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.state.favorites.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentdex_types::Facet;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus", "fresh"]),
            Item::new("A2", "Noir", "By").with_accords(["woody", "spicy"]),
        ])))
    }

    fn codes(session: &Session) -> Vec<String> {
        session.results().iter().map(|i| i.code.clone()).collect()
    }

    #[test]
    fn test_initial_snapshot_is_full_catalog() {
        let session = session();
        assert_eq!(session.snapshot().results, vec![0, 1]);
        assert!(session.snapshot().chips.is_empty());
        assert_eq!(session.snapshot().summary.text, "Showing 2 of 2 results.");
    }

    #[test]
    fn test_dispatch_recomputes_all_outputs() {
        let mut session = session();
        let snapshot = session.dispatch(&Action::select(Facet::Accord, "citrus"));

        assert_eq!(snapshot.results, vec![0]);
        assert_eq!(snapshot.chips.len(), 1);
        assert!(!snapshot.viability.is_viable(Facet::Accord, "woody"));
        assert!(snapshot.viability.is_viable(Facet::Accord, "fresh"));
    }

    #[test]
    fn test_focus_then_brand_checkbox() {
        let mut session = session();
        session.dispatch(&Action::FocusBrand("Bx".to_string()));
        assert_eq!(codes(&session), vec!["A1"]);

        session.dispatch(&Action::toggle(Facet::Brand, "By"));
        assert_eq!(session.filters().scope.focused_brand(), None);
        assert_eq!(codes(&session), vec!["A2"]);
    }

    #[test]
    fn test_favorites_view_uses_session_favorites() {
        let mut session = session();
        session.dispatch_all(&[
            Action::ToggleFavorite("A2".to_string()),
            Action::ToggleFavoritesView,
        ]);
        assert_eq!(codes(&session), vec!["A2"]);
        assert!(session.is_favorite("A2"));
    }

    #[test]
    fn test_clear_all_restores_full_catalog() {
        let mut session = session();
        session.dispatch_all(&[
            Action::select(Facet::Accord, "citrus"),
            Action::select(Facet::Accord, "woody"),
            Action::SetQuery("zzz".to_string()),
        ]);
        assert!(session.snapshot().results.is_empty());

        session.dispatch(&Action::ClearAll);
        assert_eq!(codes(&session), vec!["A1", "A2"]);
        assert!(session.filters().is_empty());
    }
}
