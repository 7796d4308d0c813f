//! Catalog loading.
//!
//! Two source shapes are accepted:
//! - brand groups: `[{ "brandInfo": {..}, "perfumes": [..] }, ..]`
//! - flat records: `[{ "brand": "..", "code": "..", .. }, ..]`
//!
//! The shape is decided by the first element: a `perfumes` array means brand
//! groups. Either way the result is the flat `Item`/`Brand` model.

mod schema;

use scentdex_engine::Catalog;
use scentdex_types::{Brand, Item};
use serde_json::Value;
use std::path::Path;

use crate::{Error, Result};
use schema::{RawBrandGroup, RawItem, UNKNOWN_BRAND};

/// Outcome of a load: the catalog plus what was left out of it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub catalog: Catalog,
    /// Records without a code or display name
    pub dropped: usize,
    /// Records whose code was already taken by an earlier record
    pub duplicates: usize,
}

pub fn load_catalog(path: &Path) -> Result<LoadReport> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
    let report = parse_catalog(&content).map_err(|e| match e {
        Error::Load(msg) => Error::Load(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        items = report.catalog.len(),
        dropped = report.dropped,
        duplicates = report.duplicates,
        "loaded catalog"
    );
    Ok(report)
}

pub fn parse_catalog(content: &str) -> Result<LoadReport> {
    let raw: Value =
        serde_json::from_str(content).map_err(|e| Error::Load(format!("invalid JSON: {}", e)))?;
    let Value::Array(entries) = raw else {
        return Err(Error::Load("top level must be an array".to_string()));
    };

    let is_grouped = entries
        .first()
        .and_then(|first| first.get("perfumes"))
        .is_some_and(Value::is_array);

    let (candidates, brands) = if is_grouped {
        flatten_groups(&entries)
    } else {
        flatten_records(&entries)
    };

    let total = candidates.len();
    let items: Vec<Item> = candidates.into_iter().flatten().collect();
    let dropped = total - items.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped records without code or name");
    }

    let catalog = Catalog::new(items, brands);
    let duplicates = catalog.duplicates();
    if duplicates > 0 {
        tracing::debug!(duplicates, "skipped records with a repeated code");
    }

    Ok(LoadReport {
        catalog,
        dropped,
        duplicates,
    })
}

type Flattened = (Vec<Option<Item>>, Vec<Brand>);

fn flatten_groups(entries: &[Value]) -> Flattened {
    let mut items = Vec::new();
    let mut brands = Vec::new();

    for entry in entries {
        let Ok(group) = serde_json::from_value::<RawBrandGroup>(entry.clone()) else {
            continue;
        };
        let Value::Array(perfumes) = &group.perfumes else {
            continue;
        };

        let brand = group
            .brand_info
            .as_ref()
            .and_then(|info| info.to_brand())
            .unwrap_or_else(|| Brand::new(UNKNOWN_BRAND));

        items.extend(perfumes.iter().map(|raw| {
            serde_json::from_value::<RawItem>(raw.clone())
                .ok()
                .and_then(|record| record.normalize(&brand.name))
        }));
        brands.push(brand);
    }

    (items, brands)
}

fn flatten_records(entries: &[Value]) -> Flattened {
    let brands = entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<RawBrandGroup>(entry.clone()).ok())
        .filter_map(|group| group.brand_info.and_then(|info| info.to_brand()))
        .collect();

    let items = entries
        .iter()
        .map(|raw| {
            serde_json::from_value::<RawItem>(raw.clone())
                .ok()
                .and_then(|record| record.normalize(&record.brand_name()))
        })
        .collect();

    (items, brands)
}
