use scentdex_engine::sync::capitalize;
use scentdex_engine::{Catalog, Chip, ResultSummary, Session, Viability};
use scentdex_types::{Facet, Item};

use crate::args::hints::{self, cmd};
use crate::presentation::view_models::{
    BrandEntryViewModel, BrandInfoViewModel, BrandListViewModel, ChipViewModel,
    CommandResultViewModel, FacetListViewModel, FacetViewModel, Guidance, ItemSummaryViewModel,
    OptionViewModel, ResultListViewModel, ResultSummaryViewModel, StatusBadge,
};

pub fn item_summary(item: &Item, favorite: bool) -> ItemSummaryViewModel {
    ItemSummaryViewModel {
        code: item.code.clone(),
        name: item.name.clone(),
        brand: item.brand.clone(),
        gender: item.gender.map(|g| g.as_str().to_string()),
        accords: item.accords.clone(),
        seasons: item.seasons.clone(),
        occasions: item.occasions.clone(),
        favorite,
    }
}

pub fn result_summary(summary: &ResultSummary) -> ResultSummaryViewModel {
    ResultSummaryViewModel {
        shown: summary.shown,
        total: summary.total,
        text: summary.text.clone(),
        brand: summary.brand.as_ref().map(|info| BrandInfoViewModel {
            name: info.name.clone(),
            description: info.description.clone(),
        }),
    }
}

pub fn chip_list(chips: &[Chip]) -> Vec<ChipViewModel> {
    chips
        .iter()
        .map(|chip| ChipViewModel {
            facet: chip.facet,
            value: chip.value.clone(),
            label: chip.label.clone(),
        })
        .collect()
}

/// Option states per facet; `only` narrows the output to one facet.
pub fn facet_list(viability: &Viability, only: Option<Facet>) -> FacetListViewModel {
    let facets: Vec<FacetViewModel> = viability
        .facets()
        .iter()
        .filter(|group| only.is_none_or(|facet| facet == group.facet))
        .map(|group| FacetViewModel {
            facet: group.facet,
            label: group.facet.label().to_string(),
            mode: group.facet.mode(),
            options: group
                .options
                .iter()
                .map(|option| OptionViewModel {
                    value: option.value.clone(),
                    label: capitalize(&option.value),
                    selected: option.selected,
                    viable: option.viable,
                    count: option.count,
                })
                .collect(),
        })
        .collect();

    let disabled = facets
        .iter()
        .flat_map(|facet| &facet.options)
        .filter(|option| !option.viable)
        .count();

    FacetListViewModel { facets, disabled }
}

pub fn present_result_list(
    session: &Session,
    limit: usize,
) -> CommandResultViewModel<ResultListViewModel> {
    let snapshot = session.snapshot();
    let results = session.results();
    let omitted = results.len().saturating_sub(limit);
    let first_code = results.first().map(|item| item.code.clone());

    let items = results
        .into_iter()
        .take(limit)
        .map(|item| item_summary(item, session.is_favorite(&item.code)))
        .collect();

    let content = ResultListViewModel {
        summary: result_summary(&snapshot.summary),
        chips: chip_list(&snapshot.chips),
        query: session.filters().query.clone(),
        items,
        omitted,
    };

    let mut result = CommandResultViewModel::new(content);

    if snapshot.summary.is_empty() {
        result = result
            .with_badge(StatusBadge::warning(scentdex_engine::summary::NO_MATCHES))
            .with_suggestion(
                Guidance::new("See which options still match").with_command(cmd::FACETS),
            );
    } else if let Some(code) = first_code {
        result = result.with_suggestion(
            Guidance::new("Open an item's details").with_command(hints::show(&code)),
        );
    }

    if omitted > 0 {
        result = result.with_suggestion(Guidance::new(format!(
            "{} more item(s) not shown, raise --limit to see them",
            omitted
        )));
    }

    result
}

pub fn present_facets(
    session: &Session,
    only: Option<Facet>,
) -> CommandResultViewModel<FacetListViewModel> {
    let content = facet_list(&session.snapshot().viability, only);
    let disabled = content.disabled;

    let mut result = CommandResultViewModel::new(content);
    if disabled > 0 {
        result = result.with_badge(StatusBadge::info(format!(
            "{} option(s) would match nothing",
            disabled
        )));
    }
    result
}

pub fn present_brands(catalog: &Catalog) -> CommandResultViewModel<BrandListViewModel> {
    let brands = catalog
        .brands()
        .map(|brand| BrandEntryViewModel {
            name: brand.name.clone(),
            description: brand.description.clone(),
            items: catalog.items_of_brand(&brand.name).count(),
        })
        .collect();

    CommandResultViewModel::new(BrandListViewModel { brands }).with_suggestion(
        Guidance::new("Show one brand's items").with_command(cmd::LIST_FOCUS_BRAND),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentdex_engine::Action;
    use std::sync::Arc;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::from_items(vec![
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus", "fresh"]),
            Item::new("A2", "Noir", "By").with_accords(["woody"]),
            Item::new("A3", "Zest", "Bx").with_accords(["citrus"]),
        ])))
    }

    #[test]
    fn test_result_list_respects_limit() {
        let result = present_result_list(&session(), 2);

        assert_eq!(result.content.items.len(), 2);
        assert_eq!(result.content.omitted, 1);
        assert_eq!(result.content.summary.text, "Showing 3 of 3 results.");
        assert!(result.badge.is_none());
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_empty_result_gets_warning_badge() {
        let mut session = session();
        session.dispatch(&Action::SetQuery("nothing like this".to_string()));

        let result = present_result_list(&session, 10);
        assert!(result.content.items.is_empty());
        assert_eq!(
            result.badge.map(|b| b.label),
            Some("No perfumes matched your selection.".to_string())
        );
    }

    #[test]
    fn test_facet_list_filters_one_facet() {
        let mut session = session();
        session.dispatch(&Action::select(Facet::Accord, "woody"));

        let list = facet_list(&session.snapshot().viability, Some(Facet::Accord));
        assert_eq!(list.facets.len(), 1);

        let labels: Vec<(&str, bool, bool)> = list.facets[0]
            .options
            .iter()
            .map(|o| (o.label.as_str(), o.selected, o.viable))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Citrus", false, false),
                ("Fresh", false, false),
                ("Woody", true, true)
            ]
        );
        assert_eq!(list.disabled, 2);
    }

    #[test]
    fn test_brands_count_their_items() {
        let session = session();
        let result = present_brands(session.catalog());
        let counts: Vec<(&str, usize)> = result
            .content
            .brands
            .iter()
            .map(|b| (b.name.as_str(), b.items))
            .collect();
        assert_eq!(counts, vec![("Bx", 2), ("By", 1)]);
    }
}
