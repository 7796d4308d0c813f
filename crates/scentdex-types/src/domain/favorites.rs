use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of favorite item codes.
///
/// Independent of the filter state; only an explicit toggle mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeSet<String>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Flip membership of `code`. Returns true when the code is now a favorite.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.0.remove(code) {
            false
        } else {
            self.0.insert(code.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle("A1"));
        assert!(favorites.contains("A1"));
        assert!(!favorites.toggle("A1"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let favorites: Favorites = ["B2", "A1"].into_iter().collect();
        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"["A1","B2"]"#);
    }
}
