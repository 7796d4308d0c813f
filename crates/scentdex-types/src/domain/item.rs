use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender affinity of a catalog item.
///
/// The source data carries free-form strings ("Masculine", "for women",
/// "Unisex"); they collapse onto this closed set when the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Unisex,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Unisex];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Unisex => "unisex",
        }
    }

    /// Case-insensitive, word-based parse of a raw gender-affinity string.
    /// "unisex", or words naming both genders ("Masculine/Feminine", "for men
    /// and women"), give `Unisex`; otherwise the one gender named.
    pub fn parse(raw: &str) -> Option<Gender> {
        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
            .collect();
        let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));

        let feminine = has(&["feminine", "female", "women", "woman"]);
        let masculine = has(&["masculine", "male", "men", "man"]);

        match (has(&["unisex"]), feminine, masculine) {
            (true, _, _) | (_, true, true) => Some(Gender::Unisex),
            (_, true, false) => Some(Gender::Feminine),
            (_, false, true) => Some(Gender::Masculine),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fragrance pyramid: top, heart and base notes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default)]
    pub top: Vec<String>,
    #[serde(default)]
    pub heart: Vec<String>,
    #[serde(default)]
    pub base: Vec<String>,
}

impl Notes {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.heart.is_empty() && self.base.is_empty()
    }

    /// All notes across the three groups (top, then heart, then base)
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.top
            .iter()
            .chain(self.heart.iter())
            .chain(self.base.iter())
            .map(String::as_str)
    }
}

/// A normalized catalog entry.
///
/// Tag collections are always present (possibly empty) and lowercased.
/// `brand` is a weak reference: resolve it through the catalog's brand index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub code: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub accords: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub notes: Notes,
}

impl Item {
    pub fn new(code: impl Into<String>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            brand: brand.into(),
            description: None,
            gender: None,
            accords: Vec::new(),
            seasons: Vec::new(),
            occasions: Vec::new(),
            notes: Notes::default(),
        }
    }

    /// An item is usable only with a non-empty identifier and display name.
    pub fn is_valid(&self) -> bool {
        !self.code.trim().is_empty() && !self.name.trim().is_empty()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_accords<I, S>(mut self, accords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accords = normalize_tags(accords);
        self
    }

    pub fn with_seasons<I, S>(mut self, seasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seasons = normalize_tags(seasons);
        self
    }

    pub fn with_occasions<I, S>(mut self, occasions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.occasions = normalize_tags(occasions);
        self
    }

    pub fn with_notes(mut self, notes: Notes) -> Self {
        self.notes = notes;
        self
    }

    pub fn has_accord(&self, accord: &str) -> bool {
        self.accords.iter().any(|a| a == accord)
    }

    pub fn has_season(&self, season: &str) -> bool {
        self.seasons.iter().any(|s| s == season)
    }

    pub fn has_occasion(&self, occasion: &str) -> bool {
        self.occasions.iter().any(|o| o == occasion)
    }
}

/// Lowercase, trim, drop empties and duplicates while keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.into().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_canonical_values() {
        assert_eq!(Gender::parse("Masculine"), Some(Gender::Masculine));
        assert_eq!(Gender::parse("FEMININE"), Some(Gender::Feminine));
        assert_eq!(Gender::parse(" unisex "), Some(Gender::Unisex));
    }

    #[test]
    fn test_gender_parse_does_not_confuse_female_with_male() {
        assert_eq!(Gender::parse("female"), Some(Gender::Feminine));
        assert_eq!(Gender::parse("For Women"), Some(Gender::Feminine));
        assert_eq!(Gender::parse("for men"), Some(Gender::Masculine));
        assert_eq!(Gender::parse("male"), Some(Gender::Masculine));
    }

    #[test]
    fn test_gender_parse_both_genders_is_unisex() {
        assert_eq!(Gender::parse("Masculine/Feminine"), Some(Gender::Unisex));
        assert_eq!(Gender::parse("for men and women"), Some(Gender::Unisex));
        assert_eq!(Gender::parse("Female, Male"), Some(Gender::Unisex));
    }

    #[test]
    fn test_gender_parse_unknown_and_empty() {
        assert_eq!(Gender::parse(""), None);
        assert_eq!(Gender::parse("   "), None);
        assert_eq!(Gender::parse("everyone"), None);
    }

    #[test]
    fn test_normalize_tags_lowercases_and_dedups() {
        let tags = normalize_tags(["Citrus", " fresh", "", "citrus", "Woody "]);
        assert_eq!(tags, vec!["citrus", "fresh", "woody"]);
    }

    #[test]
    fn test_item_validity() {
        assert!(Item::new("A1", "Aqua", "Bx").is_valid());
        assert!(!Item::new("", "Aqua", "Bx").is_valid());
        assert!(!Item::new("A1", "  ", "Bx").is_valid());
    }

    #[test]
    fn test_notes_all_preserves_group_order() {
        let notes = Notes {
            top: vec!["bergamot".into()],
            heart: vec!["rose".into()],
            base: vec!["musk".into(), "amber".into()],
        };
        let all: Vec<&str> = notes.all().collect();
        assert_eq!(all, vec!["bergamot", "rose", "musk", "amber"]);
        assert!(!notes.is_empty());
        assert!(Notes::default().is_empty());
    }
}
