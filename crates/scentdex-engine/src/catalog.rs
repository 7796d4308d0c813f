use scentdex_types::{Brand, Facet, Gender, Item};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Read-only item store with a code index and a brand index.
///
/// Items keep load order; every result set is a subsequence of it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_code: HashMap<String, usize>,
    brands: BTreeMap<String, Brand>,
    duplicates: usize,
}

impl Catalog {
    /// Build a catalog from normalized items and known brand metadata.
    ///
    /// Invalid items (no code or name) and repeated codes are skipped; the
    /// first occurrence of a code wins. Brands referenced only by items get a
    /// bare entry without description.
    pub fn new(items: Vec<Item>, brands: Vec<Brand>) -> Self {
        let mut catalog = Catalog::default();

        for brand in brands {
            catalog.brands.entry(brand.name.clone()).or_insert(brand);
        }

        for item in items {
            if !item.is_valid() {
                continue;
            }
            if catalog.by_code.contains_key(&item.code) {
                catalog.duplicates += 1;
                continue;
            }
            catalog
                .brands
                .entry(item.brand.clone())
                .or_insert_with(|| Brand::new(item.brand.clone()));
            catalog.by_code.insert(item.code.clone(), catalog.items.len());
            catalog.items.push(item);
        }

        catalog
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self::new(items, Vec::new())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items skipped because their code was already present
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn get(&self, code: &str) -> Option<&Item> {
        self.position(code).map(|idx| &self.items[idx])
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        self.by_code.get(code).copied()
    }

    pub fn item_at(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn brand(&self, name: &str) -> Option<&Brand> {
        self.brands.get(name)
    }

    /// Brands in name order
    pub fn brands(&self) -> impl Iterator<Item = &Brand> {
        self.brands.values()
    }

    pub fn items_of_brand<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.brand == name)
    }

    /// Option universe of a facet, sorted.
    ///
    /// Gender always offers the full closed set, whether or not an item
    /// carries each value. Every other facet offers what the catalog holds.
    pub fn facet_values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Gender => Gender::ALL.iter().map(|g| g.as_str().to_string()).collect(),
            Facet::Brand => self.brands.keys().cloned().collect(),
            _ => {
                let def = facet.def();
                let values: BTreeSet<&str> = self
                    .items
                    .iter()
                    .flat_map(|item| def.values(item).iter())
                    .collect();
                values.into_iter().map(str::to_string).collect()
            }
        }
    }
}
