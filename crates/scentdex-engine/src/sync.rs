//! Selection sync: the single mutation path for filter state.
//!
//! Every user input becomes an [`Action`]; [`reduce`] is the only function
//! that turns one state into the next. Checkbox toggles, chip removals and
//! explicit select/deselect all go through [`add_selection`] and
//! [`remove_selection`], so equivalent inputs converge to the same state.

use scentdex_types::{Facet, Favorites, FilterState, Scope};
use serde::{Deserialize, Serialize};

/// One removable marker per selected facet value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chip {
    pub facet: Facet,
    pub value: String,
    pub label: String,
}

impl Chip {
    pub fn new(facet: Facet, value: impl Into<String>) -> Self {
        let value = value.into();
        let label = capitalize(&value);
        Self { facet, value, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select { facet: Facet, value: String },
    Deselect { facet: Facet, value: String },
    /// Checkbox click: select when unchecked, deselect when checked
    Toggle { facet: Facet, value: String },
    RemoveChip(Chip),
    SetQuery(String),
    FocusBrand(String),
    ClearFocus,
    ToggleFavoritesView,
    ToggleFavorite(String),
    ClearAll,
}

impl Action {
    pub fn select(facet: Facet, value: impl Into<String>) -> Self {
        Action::Select {
            facet,
            value: value.into(),
        }
    }

    pub fn deselect(facet: Facet, value: impl Into<String>) -> Self {
        Action::Deselect {
            facet,
            value: value.into(),
        }
    }

    pub fn toggle(facet: Facet, value: impl Into<String>) -> Self {
        Action::Toggle {
            facet,
            value: value.into(),
        }
    }

    /// Whether the action changes the favorites set (and so needs persisting)
    pub fn touches_favorites(&self) -> bool {
        matches!(self, Action::ToggleFavorite(_))
    }
}

/// Everything user actions can change. The catalog is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub filters: FilterState,
    pub favorites: Favorites,
}

impl BrowserState {
    pub fn with_favorites(favorites: Favorites) -> Self {
        Self {
            filters: FilterState::new(),
            favorites,
        }
    }
}

pub fn reduce(mut state: BrowserState, action: &Action) -> BrowserState {
    match action {
        Action::Select { facet, value } => add_selection(&mut state.filters, *facet, value),
        Action::Deselect { facet, value } => remove_selection(&mut state.filters, *facet, value),
        Action::Toggle { facet, value } => {
            let value = facet.normalize_value(value);
            if state.filters.is_selected(*facet, &value) {
                remove_selection(&mut state.filters, *facet, &value);
            } else {
                add_selection(&mut state.filters, *facet, &value);
            }
        }
        Action::RemoveChip(chip) => remove_selection(&mut state.filters, chip.facet, &chip.value),
        Action::SetQuery(query) => state.filters.query = query.clone(),
        Action::FocusBrand(brand) => {
            state.filters.clear_facet(Facet::Brand);
            state.filters.scope = Scope::FocusedBrand(brand.trim().to_string());
        }
        Action::ClearFocus => {
            if state.filters.scope.focused_brand().is_some() {
                state.filters.scope = Scope::All;
            }
        }
        Action::ToggleFavoritesView => {
            state.filters.scope = if state.filters.scope.is_favorites_only() {
                Scope::All
            } else {
                Scope::FavoritesOnly
            };
        }
        Action::ToggleFavorite(code) => {
            state.favorites.toggle(code);
        }
        Action::ClearAll => state.filters = FilterState::new(),
    }
    state
}

/// Insert a facet value. Idempotent; a brand selection leaves brand focus.
pub fn add_selection(filters: &mut FilterState, facet: Facet, value: &str) {
    let value = facet.normalize_value(value);
    if value.is_empty() {
        return;
    }
    if facet == Facet::Brand && filters.scope.focused_brand().is_some() {
        filters.scope = Scope::All;
    }
    filters.insert(facet, value);
}

/// The filter state a selection of `value` would produce, leaving `filters`
/// untouched. Goes through [`add_selection`], so a brand value drops brand
/// focus exactly like a real selection.
pub fn with_selection(filters: &FilterState, facet: Facet, value: &str) -> FilterState {
    let mut next = filters.clone();
    add_selection(&mut next, facet, value);
    next
}

/// Remove a facet value; a value that is not selected is a no-op.
pub fn remove_selection(filters: &mut FilterState, facet: Facet, value: &str) {
    let value = facet.normalize_value(value);
    filters.remove(facet, &value);
}

/// Chips in facet order, then value order.
pub fn chips(filters: &FilterState) -> Vec<Chip> {
    filters
        .iter_selections()
        .map(|(facet, value)| Chip::new(facet, value))
        .collect()
}

/// Display form of a tag: first letter upper-cased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: &[Action]) -> BrowserState {
        actions
            .iter()
            .fold(BrowserState::default(), |state, action| reduce(state, action))
    }

    #[test]
    fn test_select_is_idempotent() {
        let once = apply(&[Action::select(Facet::Accord, "citrus")]);
        let twice = apply(&[
            Action::select(Facet::Accord, "citrus"),
            Action::select(Facet::Accord, "citrus"),
        ]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_normalizes_tag_case() {
        let state = apply(&[Action::select(Facet::Season, " Summer ")]);
        assert!(state.filters.is_selected(Facet::Season, "summer"));
    }

    #[test]
    fn test_deselect_missing_value_is_noop() {
        let state = apply(&[
            Action::select(Facet::Season, "summer"),
            Action::deselect(Facet::Season, "winter"),
        ]);
        assert_eq!(state, apply(&[Action::select(Facet::Season, "summer")]));
    }

    #[test]
    fn test_toggle_chip_and_deselect_converge() {
        let selected = apply(&[Action::select(Facet::Accord, "woody")]);

        let via_toggle = reduce(selected.clone(), &Action::toggle(Facet::Accord, "woody"));
        let via_chip = reduce(
            selected.clone(),
            &Action::RemoveChip(Chip::new(Facet::Accord, "woody")),
        );
        let via_deselect = reduce(selected, &Action::deselect(Facet::Accord, "woody"));

        assert_eq!(via_toggle, via_chip);
        assert_eq!(via_chip, via_deselect);
        assert!(via_toggle.filters.is_empty());
    }

    #[test]
    fn test_brand_checkbox_clears_focus() {
        let state = apply(&[
            Action::FocusBrand("Bx".to_string()),
            Action::toggle(Facet::Brand, "By"),
        ]);
        assert_eq!(state.filters.scope, Scope::All);
        assert!(state.filters.is_selected(Facet::Brand, "By"));
    }

    #[test]
    fn test_focus_brand_clears_brand_facet() {
        let state = apply(&[
            Action::select(Facet::Brand, "By"),
            Action::FocusBrand("Bx".to_string()),
        ]);
        assert!(state.filters.selected(Facet::Brand).is_empty());
        assert_eq!(state.filters.scope.focused_brand(), Some("Bx"));
    }

    #[test]
    fn test_scope_modes_are_mutually_exclusive() {
        let state = apply(&[
            Action::FocusBrand("Bx".to_string()),
            Action::ToggleFavoritesView,
        ]);
        assert_eq!(state.filters.scope, Scope::FavoritesOnly);

        let state = reduce(state, &Action::FocusBrand("By".to_string()));
        assert_eq!(state.filters.scope, Scope::FocusedBrand("By".to_string()));

        let state = reduce(state, &Action::ClearFocus);
        assert_eq!(state.filters.scope, Scope::All);
    }

    #[test]
    fn test_favorites_view_toggles_back() {
        let state = apply(&[Action::ToggleFavoritesView, Action::ToggleFavoritesView]);
        assert_eq!(state.filters.scope, Scope::All);
    }

    #[test]
    fn test_clear_focus_leaves_favorites_view() {
        let state = apply(&[Action::ToggleFavoritesView, Action::ClearFocus]);
        assert_eq!(state.filters.scope, Scope::FavoritesOnly);
    }

    #[test]
    fn test_clear_all_resets_filters_but_keeps_favorites() {
        let state = apply(&[
            Action::ToggleFavorite("A1".to_string()),
            Action::select(Facet::Accord, "citrus"),
            Action::SetQuery("aqua".to_string()),
            Action::FocusBrand("Bx".to_string()),
            Action::ClearAll,
        ]);
        assert!(state.filters.is_empty());
        assert!(state.favorites.contains("A1"));
    }

    #[test]
    fn test_toggle_favorite_twice_restores_set() {
        let state = apply(&[
            Action::ToggleFavorite("A1".to_string()),
            Action::ToggleFavorite("A1".to_string()),
        ]);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_chips_follow_facet_order_with_labels() {
        let state = apply(&[
            Action::select(Facet::Accord, "woody"),
            Action::select(Facet::Gender, "unisex"),
            Action::select(Facet::Brand, "Maison X"),
        ]);
        let labels: Vec<(Facet, String)> = chips(&state.filters)
            .into_iter()
            .map(|chip| (chip.facet, chip.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                (Facet::Gender, "Unisex".to_string()),
                (Facet::Brand, "Maison X".to_string()),
                (Facet::Accord, "Woody".to_string()),
            ]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("citrus"), "Citrus");
        assert_eq!(capitalize("évening"), "Évening");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_with_selection_matches_real_selection_and_keeps_original() {
        let focused = apply(&[
            Action::select(Facet::Accord, "citrus"),
            Action::FocusBrand("Bx".to_string()),
        ]);

        let simulated = with_selection(&focused.filters, Facet::Brand, "By");
        let real = reduce(focused.clone(), &Action::select(Facet::Brand, "By"));

        assert_eq!(simulated, real.filters);
        assert_eq!(simulated.scope, Scope::All);
        assert_eq!(focused.filters.scope, Scope::FocusedBrand("Bx".to_string()));
        assert_eq!(focused.filters.selected(Facet::Accord).len(), 1);
    }
}
