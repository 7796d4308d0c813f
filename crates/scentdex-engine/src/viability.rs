use scentdex_types::{Facet, Favorites, FilterState};
use serde::Serialize;

use crate::filter::{EvalMode, count_matches};
use crate::sync::with_selection;
use crate::Catalog;

/// Enable/disable state of one facet option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionState {
    pub value: String,
    /// Checked state of the option's control
    pub selected: bool,
    pub viable: bool,
    /// Size of the simulated result with this option added
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub facet: Facet,
    pub options: Vec<OptionState>,
}

/// Option states for every facet, in `Facet::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Viability {
    facets: Vec<FacetOptions>,
}

impl Viability {
    pub fn facets(&self) -> &[FacetOptions] {
        &self.facets
    }

    pub fn options(&self, facet: Facet) -> &[OptionState] {
        self.facets
            .iter()
            .find(|f| f.facet == facet)
            .map(|f| f.options.as_slice())
            .unwrap_or(&[])
    }

    pub fn option(&self, facet: Facet, value: &str) -> Option<&OptionState> {
        self.options(facet).iter().find(|o| o.value == value)
    }

    /// True for viable options; unknown values are reported non-viable.
    pub fn is_viable(&self, facet: Facet, value: &str) -> bool {
        self.option(facet, value).is_some_and(|o| o.viable)
    }

    pub fn disabled_count(&self) -> usize {
        self.facets
            .iter()
            .flat_map(|f| f.options.iter())
            .filter(|o| !o.viable)
            .count()
    }
}

/// Simulate each option against the current state.
///
/// Every option is evaluated on the state a real selection of it would
/// produce (for accords this unions into the selected set; a brand value
/// leaves brand focus). Scope still applies; the search text does not. Selected
/// options are always viable so they can be deselected.
pub fn compute_option_viability(
    catalog: &Catalog,
    state: &FilterState,
    favorites: &Favorites,
) -> Viability {
    let facets = Facet::ALL
        .into_iter()
        .map(|facet| {
            let options = catalog
                .facet_values(facet)
                .into_iter()
                .map(|value| {
                    let selected = state.is_selected(facet, &value);
                    let simulated = with_selection(state, facet, &value);
                    let count = count_matches(catalog, &simulated, favorites, EvalMode::Simulated);
                    OptionState {
                        viable: selected || count > 0,
                        selected,
                        count,
                        value,
                    }
                })
                .collect();
            FacetOptions { facet, options }
        })
        .collect();

    Viability { facets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentdex_types::{Gender, Item, Scope};

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx")
                .with_gender(Gender::Unisex)
                .with_accords(["citrus", "fresh"])
                .with_seasons(["summer"]),
            Item::new("A2", "Noir", "By")
                .with_gender(Gender::Masculine)
                .with_accords(["woody", "spicy"])
                .with_seasons(["winter"]),
            Item::new("A3", "Grove", "Bx")
                .with_gender(Gender::Feminine)
                .with_accords(["citrus", "woody"])
                .with_seasons(["spring"]),
        ])
    }

    #[test]
    fn test_every_option_viable_from_empty_state() {
        let catalog = catalog();
        let viability = compute_option_viability(&catalog, &FilterState::new(), &Favorites::new());

        assert_eq!(viability.facets().len(), Facet::ALL.len());
        assert_eq!(viability.disabled_count(), 0);
        assert_eq!(viability.option(Facet::Accord, "citrus").map(|o| o.count), Some(2));
    }

    #[test]
    fn test_accord_options_narrow_under_and() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.insert(Facet::Accord, "citrus");

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());

        assert!(viability.is_viable(Facet::Accord, "woody"));
        assert!(viability.is_viable(Facet::Accord, "fresh"));
        assert!(!viability.is_viable(Facet::Accord, "spicy"));
        assert_eq!(viability.option(Facet::Accord, "woody").map(|o| o.count), Some(1));
    }

    #[test]
    fn test_cross_facet_coupling() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.insert(Facet::Season, "winter");

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());

        assert!(viability.is_viable(Facet::Gender, "masculine"));
        assert!(!viability.is_viable(Facet::Gender, "feminine"));
        assert!(!viability.is_viable(Facet::Accord, "citrus"));
        assert!(!viability.is_viable(Facet::Brand, "Bx"));
    }

    #[test]
    fn test_selected_option_stays_viable_even_when_empty() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.insert(Facet::Accord, "fresh");
        state.insert(Facet::Accord, "spicy");

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());

        let spicy = viability.option(Facet::Accord, "spicy").cloned();
        assert_eq!(
            spicy,
            Some(OptionState {
                value: "spicy".to_string(),
                selected: true,
                viable: true,
                count: 0,
            })
        );
        assert!(!viability.is_viable(Facet::Accord, "citrus"));
    }

    #[test]
    fn test_unknown_season_is_not_offered() {
        let catalog = catalog();
        let viability = compute_option_viability(&catalog, &FilterState::new(), &Favorites::new());
        assert!(viability.option(Facet::Season, "autumn").is_none());
        assert!(!viability.is_viable(Facet::Season, "autumn"));
    }

    #[test]
    fn test_simulation_ignores_search() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.query = "zzz".to_string();

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());
        assert_eq!(viability.disabled_count(), 0);
    }

    #[test]
    fn test_simulation_keeps_focused_brand_scope() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.scope = Scope::FocusedBrand("By".to_string());

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());
        assert!(viability.is_viable(Facet::Accord, "woody"));
        assert!(!viability.is_viable(Facet::Accord, "citrus"));
    }

    #[test]
    fn test_non_viable_accord_stays_non_viable_as_selections_grow() {
        let catalog = catalog();
        let favorites = Favorites::new();
        let mut state = FilterState::new();
        state.insert(Facet::Accord, "citrus");
        assert!(!compute_option_viability(&catalog, &state, &favorites).is_viable(Facet::Accord, "spicy"));

        state.insert(Facet::Accord, "woody");
        assert!(!compute_option_viability(&catalog, &state, &favorites).is_viable(Facet::Accord, "spicy"));

        state.insert(Facet::Season, "spring");
        assert!(!compute_option_viability(&catalog, &state, &favorites).is_viable(Facet::Accord, "spicy"));
    }

    #[test]
    fn test_selected_flag_mirrors_filter_state() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.insert(Facet::Brand, "By");
        state.insert(Facet::Season, "winter");

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());
        for facet_options in viability.facets() {
            for option in &facet_options.options {
                assert_eq!(
                    option.selected,
                    state.is_selected(facet_options.facet, &option.value)
                );
            }
        }
    }

    #[test]
    fn test_brand_option_under_focus_reports_the_state_selection_reaches() {
        let catalog = Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus"]),
            Item::new("A2", "Noir", "By").with_accords(["woody"]),
        ]);
        let mut state = FilterState::new();
        state.insert(Facet::Accord, "citrus");
        state.scope = Scope::FocusedBrand("Bx".to_string());

        let viability = compute_option_viability(&catalog, &state, &Favorites::new());

        let by = viability.option(Facet::Brand, "By").cloned();
        assert_eq!(
            by,
            Some(OptionState {
                value: "By".to_string(),
                selected: false,
                viable: false,
                count: 0,
            })
        );
        assert_eq!(viability.option(Facet::Brand, "Bx").map(|o| o.count), Some(1));

        let mut selected = state.clone();
        crate::sync::add_selection(&mut selected, Facet::Brand, "By");
        assert!(crate::compute_result_set(&catalog, &selected, &Favorites::new()).is_empty());
    }
}
