use scentdex_types::{Facet, Item};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// How often each value of a facet occurs in a set of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub facet: Facet,
    /// Number of items the counts were taken over
    pub items: usize,
    pub values: Vec<ValueCount>,
}

impl Distribution {
    pub fn max_count(&self) -> usize {
        self.values.iter().map(|v| v.count).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Count facet values over `items`, most frequent first, then by value.
pub fn distribution(items: &[&Item], facet: Facet) -> Distribution {
    let def = facet.def();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        for value in def.values(item).iter() {
            *counts.entry(value).or_default() += 1;
        }
    }

    let mut values: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    Distribution {
        facet,
        items: items.len(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentdex_types::Gender;

    #[test]
    fn test_accord_distribution_sorted_by_count_then_value() {
        let items = [
            Item::new("A1", "Aqua", "Bx").with_accords(["citrus", "fresh"]),
            Item::new("A2", "Noir", "By").with_accords(["woody", "fresh"]),
            Item::new("A3", "Grove", "Bx").with_accords(["citrus", "fresh", "aquatic"]),
        ];
        let refs: Vec<&Item> = items.iter().collect();

        let dist = distribution(&refs, Facet::Accord);
        let pairs: Vec<(&str, usize)> = dist.values.iter().map(|v| (v.value.as_str(), v.count)).collect();

        assert_eq!(
            pairs,
            vec![("fresh", 3), ("citrus", 2), ("aquatic", 1), ("woody", 1)]
        );
        assert_eq!(dist.items, 3);
        assert_eq!(dist.max_count(), 3);
    }

    #[test]
    fn test_items_without_gender_are_not_counted() {
        let items = [
            Item::new("A1", "Aqua", "Bx").with_gender(Gender::Unisex),
            Item::new("A2", "Noir", "By"),
        ];
        let refs: Vec<&Item> = items.iter().collect();

        let dist = distribution(&refs, Facet::Gender);
        assert_eq!(
            dist.values,
            vec![ValueCount {
                value: "unisex".to_string(),
                count: 1
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        let dist = distribution(&[], Facet::Season);
        assert!(dist.is_empty());
        assert_eq!(dist.max_count(), 0);
    }
}
