use serde::Serialize;

use super::catalog::BrandInfoViewModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotesViewModel {
    pub top: Vec<String>,
    pub heart: Vec<String>,
    pub base: Vec<String>,
}

impl NotesViewModel {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.heart.is_empty() && self.base.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostStepViewModel {
    pub bottle: String,
    pub boost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoostGuideViewModel {
    /// `heavy` or `light`
    pub weight: String,
    pub title: String,
    pub steps: Vec<BoostStepViewModel>,
}

/// `show` output and the browser's details panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetailViewModel {
    pub code: String,
    pub name: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub accords: Vec<String>,
    pub seasons: Vec<String>,
    pub occasions: Vec<String>,
    pub notes: NotesViewModel,
    pub favorite: bool,
    pub product_url: String,
    pub boost: BoostGuideViewModel,
    pub brand_info: BrandInfoViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRefViewModel {
    pub code: String,
    pub name: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarEntryViewModel {
    pub code: String,
    pub name: String,
    pub brand: String,
    /// Weighted similarity in `0.0..=1.0`
    pub score: f64,
    pub shared_accords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarListViewModel {
    pub reference: ItemRefViewModel,
    pub matches: Vec<SimilarEntryViewModel>,
}
