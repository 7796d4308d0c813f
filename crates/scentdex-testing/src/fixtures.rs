//! Sample catalogs.
//!
//! `GROUPED_CATALOG` is the brand-group shape with six items over three
//! brands. Expected facts used across the CLI tests:
//! - citrus accord: A1, A2, C1
//! - citrus + woody accords: A2 only
//! - Maison Nord has no description
//! - A1 and C1 share citrus, fresh and aquatic

use anyhow::Result;
use std::path::Path;

pub const GROUPED_CATALOG: &str = r#"[
  {
    "brandInfo": { "name": "Atelier Sol", "description": "Sun-soaked citrus compositions" },
    "perfumes": [
      {
        "code": "A1",
        "inspiredBy": "Aqua Brillante",
        "genderAffinity": "unisex",
        "description": "Sea spray over lemon peel",
        "mainAccords": ["citrus", "fresh", "aquatic"],
        "seasons": ["summer", "spring"],
        "occasions": ["daily"],
        "notes": { "top": ["Lemon", "Bergamot"], "heart": ["Sea Salt"], "base": ["Musk"] }
      },
      {
        "code": "A2",
        "inspiredBy": "Cedro Nero",
        "genderAffinity": "male",
        "mainAccords": ["citrus", "woody"],
        "seasons": ["autumn"],
        "occasions": ["office"]
      }
    ]
  },
  {
    "brandInfo": { "name": "Maison Nord" },
    "perfumes": [
      {
        "code": "B1",
        "inspiredBy": "Velours Noir",
        "genderAffinity": "female",
        "mainAccords": ["oriental", "amber", "spicy"],
        "seasons": ["winter"],
        "occasions": ["evening"],
        "notes": { "top": ["Pink Pepper"], "heart": ["Rose"], "base": ["Amber", "Oud"] }
      },
      {
        "code": "B2",
        "inspiredBy": "Rose Poudre",
        "genderAffinity": "female",
        "mainAccords": ["floral", "powdery"],
        "seasons": ["spring"],
        "occasions": ["daily", "date"]
      }
    ]
  },
  {
    "brandInfo": { "name": "Costa Verde", "description": "Mediterranean greens" },
    "perfumes": [
      {
        "code": "C1",
        "inspiredBy": "Limone Marino",
        "genderAffinity": "unisex",
        "mainAccords": ["citrus", "fresh", "aquatic"],
        "seasons": ["summer"],
        "occasions": ["daily", "sport"]
      },
      {
        "code": "C2",
        "inspiredBy": "Fico Verde",
        "genderAffinity": "male",
        "mainAccords": ["green", "aromatic"],
        "seasons": ["summer"],
        "occasions": ["daily"]
      }
    ]
  }
]"#;

/// Same data as a flat record array, brands carried per item.
pub const FLAT_CATALOG: &str = r#"[
  { "code": "F1", "inspiredBy": "First Light", "brand": "Flat House", "mainAccords": ["citrus"] },
  { "code": "F2", "inspiredBy": "Second Skin", "brand": "Flat House", "mainAccords": ["musky"] },
  { "inspiredBy": "No Code" }
]"#;

/// Write `content` to `path`, creating parent directories.
pub fn write_catalog(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
