use scentdex_types::{Brand, Scope};
use serde::Serialize;

use crate::Catalog;

pub const NO_BRAND_INFO: &str = "No information available for this brand.";
pub const NO_MATCHES: &str = "No perfumes matched your selection.";

/// Results-count line plus the focused brand's info panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandInfo {
    pub name: String,
    pub description: String,
}

impl BrandInfo {
    pub fn from_brand(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            description: brand
                .description
                .clone()
                .unwrap_or_else(|| NO_BRAND_INFO.to_string()),
        }
    }
}

impl ResultSummary {
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

pub fn summarize(catalog: &Catalog, scope: &Scope, shown: usize) -> ResultSummary {
    let total = catalog.len();
    let (text, brand) = match scope {
        Scope::FocusedBrand(name) => {
            let info = catalog
                .brand(name)
                .map(BrandInfo::from_brand)
                .unwrap_or_else(|| BrandInfo::from_brand(&Brand::new(name.clone())));
            (format!("Showing {shown} result(s) for \"{name}\"."), Some(info))
        }
        Scope::FavoritesOnly => (format!("Showing {shown} favorite(s)."), None),
        Scope::All => (format!("Showing {shown} of {total} results."), None),
    };

    ResultSummary {
        shown,
        total,
        text,
        brand,
    }
}
