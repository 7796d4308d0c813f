use scentdex_types::{Facet, MatchMode};
use serde::Serialize;

/// One catalog item as a row of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummaryViewModel {
    pub code: String,
    pub name: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub accords: Vec<String>,
    pub seasons: Vec<String>,
    pub occasions: Vec<String>,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipViewModel {
    pub facet: Facet,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandInfoViewModel {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummaryViewModel {
    pub shown: usize,
    pub total: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandInfoViewModel>,
}

/// `list` output: the result set after filters, capped at `limit` rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultListViewModel {
    pub summary: ResultSummaryViewModel,
    pub chips: Vec<ChipViewModel>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    pub items: Vec<ItemSummaryViewModel>,
    /// Matching items left out by the limit
    pub omitted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionViewModel {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub viable: bool,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetViewModel {
    pub facet: Facet,
    pub label: String,
    pub mode: MatchMode,
    pub options: Vec<OptionViewModel>,
}

/// `facets` output: every option with its checked and enabled state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetListViewModel {
    pub facets: Vec<FacetViewModel>,
    pub disabled: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandEntryViewModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandListViewModel {
    pub brands: Vec<BrandEntryViewModel>,
}
