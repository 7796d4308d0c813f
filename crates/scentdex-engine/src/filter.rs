//! Result-set computation.
//!
//! Stages, in order:
//! 1. scope: focused brand, else brand facet, else favorites-only
//! 2-5. gender, season, occasion (any-of) and accord (all-of)
//! 6. free-text search (real evaluation only)
//!
//! Every stage is a conjunction, so the order only matters for the scope
//! precedence in stage 1.

use scentdex_types::{Facet, Favorites, FilterState, Item, MatchMode, Scope};

use crate::Catalog;

/// Whether a computation is the real one or an option-viability simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    Real,
    /// Skips the free-text search stage
    Simulated,
}

/// Facets applied after the scope stage, in chain order.
const REFINING_FACETS: [Facet; 4] = [Facet::Gender, Facet::Season, Facet::Occasion, Facet::Accord];

/// Ordered subsequence of the catalog that satisfies every active constraint.
pub fn compute_result_set<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    favorites: &Favorites,
) -> Vec<&'a Item> {
    filter_items(catalog, state, favorites, EvalMode::Real)
}

pub fn filter_items<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    favorites: &Favorites,
    mode: EvalMode,
) -> Vec<&'a Item> {
    let query = match mode {
        EvalMode::Real => state.query.trim().to_lowercase(),
        EvalMode::Simulated => String::new(),
    };

    catalog
        .items()
        .iter()
        .filter(|item| in_scope(item, state, favorites))
        .filter(|item| {
            REFINING_FACETS
                .iter()
                .all(|&facet| matches_facet(item, facet, state))
        })
        .filter(|item| matches_query(item, &query))
        .collect()
}

/// Number of matching items, without collecting them
pub fn count_matches(
    catalog: &Catalog,
    state: &FilterState,
    favorites: &Favorites,
    mode: EvalMode,
) -> usize {
    filter_items(catalog, state, favorites, mode).len()
}

fn in_scope(item: &Item, state: &FilterState, favorites: &Favorites) -> bool {
    if let Scope::FocusedBrand(brand) = &state.scope {
        return item.brand == *brand;
    }

    let brands = state.selected(Facet::Brand);
    if !brands.is_empty() {
        return brands.contains(&item.brand);
    }

    if state.scope.is_favorites_only() {
        return favorites.contains(&item.code);
    }

    true
}

/// Facet test for one item. An empty selection never restricts.
pub fn matches_facet(item: &Item, facet: Facet, state: &FilterState) -> bool {
    let selected = state.selected(facet);
    if selected.is_empty() {
        return true;
    }

    let def = facet.def();
    let values = def.values(item);
    match def.mode {
        MatchMode::Any => selected.iter().any(|v| values.contains(v)),
        MatchMode::All => selected.iter().all(|v| values.contains(v)),
    }
}

/// Case-insensitive substring match on name, brand and code.
/// `query` must already be lowercased; an empty query matches everything.
fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    [&item.name, &item.brand, &item.code]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}
