//! Raw catalog records as they appear in the source JSON.
//!
//! Every field is optional and loosely typed; `normalize` turns a record into
//! an `Item` or rejects it.

use scentdex_types::{Brand, Gender, Item, Notes};
use serde::Deserialize;
use serde_json::Value;

pub(crate) const UNKNOWN_BRAND: &str = "Unknown Brand";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBrandGroup {
    #[serde(default)]
    pub brand_info: Option<RawBrandInfo>,
    #[serde(default)]
    pub perfumes: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawBrandInfo {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
}

impl RawBrandInfo {
    pub fn to_brand(&self) -> Option<Brand> {
        let name = scalar_string(&self.name)?;
        let brand = Brand::new(name);
        Some(match scalar_string(&self.description) {
            Some(description) => brand.with_description(description),
            None => brand,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawItem {
    #[serde(default)]
    pub code: Value,
    #[serde(default)]
    pub inspired_by: Value,
    #[serde(default)]
    pub brand: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub gender_affinity: Value,
    #[serde(default)]
    pub main_accords: Value,
    #[serde(default)]
    pub seasons: Value,
    #[serde(default)]
    pub occasions: Value,
    #[serde(default)]
    pub notes: Value,
}

impl RawItem {
    /// Build an item under `brand`. None when code or display name is missing.
    pub fn normalize(&self, brand: &str) -> Option<Item> {
        let code = scalar_string(&self.code)?;
        let name = scalar_string(&self.inspired_by)?;

        let mut item = Item::new(code, name, brand)
            .with_accords(string_list(&self.main_accords))
            .with_seasons(string_list(&self.seasons))
            .with_occasions(string_list(&self.occasions))
            .with_notes(notes(&self.notes));

        if let Some(description) = scalar_string(&self.description) {
            item = item.with_description(description);
        }
        if let Some(gender) = scalar_string(&self.gender_affinity).and_then(|g| Gender::parse(&g)) {
            item = item.with_gender(gender);
        }

        Some(item)
    }

    /// Brand name carried by a flat-shape record
    pub fn brand_name(&self) -> String {
        scalar_string(&self.brand).unwrap_or_else(|| UNKNOWN_BRAND.to_string())
    }
}

/// Non-empty trimmed text from a string or number; anything else is absent.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Non-empty string elements of a JSON array. Other elements are dropped and
/// a non-array is empty.
pub(crate) fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(values) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn notes(value: &Value) -> Notes {
    let group = |key: &str| value.get(key).map(string_list).unwrap_or_default();
    Notes {
        top: group("top"),
        heart: group("heart"),
        base: group("base"),
    }
}
