use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::Facet;

/// Top-level restriction applied before per-facet filtering.
///
/// Exactly one mode is active at a time; entering one leaves the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "brand", rename_all = "snake_case")]
pub enum Scope {
    #[default]
    All,
    FocusedBrand(String),
    FavoritesOnly,
}

impl Scope {
    pub fn focused_brand(&self) -> Option<&str> {
        match self {
            Scope::FocusedBrand(brand) => Some(brand),
            _ => None,
        }
    }

    pub fn is_favorites_only(&self) -> bool {
        matches!(self, Scope::FavoritesOnly)
    }
}

/// Active selections per facet plus search text and scope.
///
/// Every facet always has a (possibly empty) selection set, so a lookup by
/// `Facet` can never miss. Cloning is cheap: a handful of small sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: [BTreeSet<String>; 5],
    pub query: String,
    pub scope: Scope,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        &self.selections[facet.index()]
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Insert a value. Returns false when it was already selected.
    ///
    /// This is the raw set operation; scope side effects (a brand selection
    /// leaving brand focus) belong to the session reducer.
    pub fn insert(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        self.selections[facet.index()].insert(value.into())
    }

    /// Remove a value. Returns false when it was not selected.
    pub fn remove(&mut self, facet: Facet, value: &str) -> bool {
        self.selections[facet.index()].remove(value)
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        self.selections[facet.index()].clear();
    }

    pub fn has_selections(&self) -> bool {
        self.selections.iter().any(|s| !s.is_empty())
    }

    /// True when any facet, the search text or the scope restricts results.
    pub fn has_active_filters(&self) -> bool {
        self.has_selections() || !self.query.trim().is_empty() || self.scope != Scope::All
    }

    pub fn is_empty(&self) -> bool {
        !self.has_active_filters()
    }

    /// (facet, value) pairs in facet order, then value order
    pub fn iter_selections(&self) -> impl Iterator<Item = (Facet, &str)> {
        Facet::ALL.into_iter().flat_map(move |facet| {
            self.selected(facet)
                .iter()
                .map(move |value| (facet, value.as_str()))
        })
    }
}
