use scentdex_engine::facet_statistics;
use scentdex_runtime::{Browser, DisplayConfig};
use scentdex_types::Facet;

use super::catalog::{chip_list, facet_list, item_summary, result_summary};
use super::item::{item_detail, similar_list};
use super::stats::stats;
use crate::presentation::view_models::{BrowserScreenViewModel, DetailPanelViewModel};

/// Which overlay the browser has open, by item code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Closed,
    Item(String),
    Similar(String),
}

pub fn present_browser_screen(
    browser: &Browser,
    display: &DisplayConfig,
    panel: &Panel,
    notice: Option<String>,
) -> BrowserScreenViewModel {
    let session = browser.session();
    let snapshot = session.snapshot();
    let catalog = session.catalog();
    let state = session.state();

    let results = session
        .results()
        .into_iter()
        .map(|item| item_summary(item, session.is_favorite(&item.code)))
        .collect();

    let detail = match panel {
        Panel::Closed => None,
        Panel::Item(code) => catalog.get(code).map(|item| {
            DetailPanelViewModel::Item(Box::new(item_detail(
                catalog,
                item,
                session.is_favorite(code),
                display,
            )))
        }),
        Panel::Similar(code) => catalog.get(code).map(|item| {
            DetailPanelViewModel::Similar(similar_list(catalog, item, display.similar_limit))
        }),
    };

    let distribution = facet_statistics(catalog, &state.filters, &state.favorites, Facet::Accord);

    BrowserScreenViewModel {
        theme: browser.theme().name().to_string(),
        dark: browser.theme().is_dark(),
        query: state.filters.query.clone(),
        summary: result_summary(&snapshot.summary),
        facets: facet_list(&snapshot.viability, None),
        results,
        chips: chip_list(&snapshot.chips),
        accord_stats: stats(&distribution),
        detail,
        notice,
    }
}
