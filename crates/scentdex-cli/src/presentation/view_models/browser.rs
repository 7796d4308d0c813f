use serde::Serialize;

use super::catalog::{ChipViewModel, FacetListViewModel, ItemSummaryViewModel, ResultSummaryViewModel};
use super::item::{ItemDetailViewModel, SimilarListViewModel};
use super::stats::StatsViewModel;

/// Overlay shown on top of the browser's main area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPanelViewModel {
    Item(Box<ItemDetailViewModel>),
    Similar(SimilarListViewModel),
}

/// Everything the interactive browser draws for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserScreenViewModel {
    pub theme: String,
    pub dark: bool,
    pub query: String,
    pub summary: ResultSummaryViewModel,
    pub facets: FacetListViewModel,
    pub results: Vec<ItemSummaryViewModel>,
    pub chips: Vec<ChipViewModel>,
    pub accord_stats: StatsViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailPanelViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
