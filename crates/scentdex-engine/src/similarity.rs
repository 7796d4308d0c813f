//! "Similar items" ranking.
//!
//! Weighted Jaccard overlap between a reference item and every other item:
//! accords 0.5, notes 0.3, seasons 0.1, occasions 0.1.

use scentdex_types::Item;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::Catalog;

const ACCORD_WEIGHT: f64 = 0.5;
const NOTE_WEIGHT: f64 = 0.3;
const SEASON_WEIGHT: f64 = 0.1;
const OCCASION_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarItem<'a> {
    pub item: &'a Item,
    pub score: f64,
    /// Accords both items carry, in the matched item's order
    pub shared_accords: Vec<&'a str>,
}

fn jaccard<'a>(a: impl Iterator<Item = &'a str>, b: impl Iterator<Item = &'a str>) -> f64 {
    let a: BTreeSet<String> = a.map(str::to_lowercase).collect();
    let b: BTreeSet<String> = b.map(str::to_lowercase).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Similarity in `[0, 1]`. Gender is not scored.
pub fn similarity(a: &Item, b: &Item) -> f64 {
    ACCORD_WEIGHT * jaccard(strs(&a.accords), strs(&b.accords))
        + NOTE_WEIGHT * jaccard(a.notes.all(), b.notes.all())
        + SEASON_WEIGHT * jaccard(strs(&a.seasons), strs(&b.seasons))
        + OCCASION_WEIGHT * jaccard(strs(&a.occasions), strs(&b.occasions))
}

fn strs(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(String::as_str)
}

/// Top `limit` items most similar to `reference`, best first.
///
/// The reference itself and items with no overlap are left out; ties keep
/// catalog order.
pub fn find_similar<'a>(catalog: &'a Catalog, reference: &Item, limit: usize) -> Vec<SimilarItem<'a>> {
    let mut scored: Vec<SimilarItem<'a>> = catalog
        .items()
        .iter()
        .filter(|item| item.code != reference.code)
        .filter_map(|item| {
            let score = similarity(reference, item);
            (score > 0.0).then(|| SimilarItem {
                item,
                score,
                shared_accords: item
                    .accords
                    .iter()
                    .filter(|a| reference.has_accord(a))
                    .map(String::as_str)
                    .collect(),
            })
        })
        .collect();

    // stable sort keeps catalog order for equal scores
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
