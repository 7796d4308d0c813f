use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Item};

/// A filterable attribute category. The set is fixed and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Gender,
    Brand,
    Season,
    Occasion,
    Accord,
}

impl Facet {
    /// All facets, in filter-chain order.
    pub const ALL: [Facet; 5] = [
        Facet::Gender,
        Facet::Brand,
        Facet::Season,
        Facet::Occasion,
        Facet::Accord,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Gender => "gender",
            Facet::Brand => "brand",
            Facet::Season => "season",
            Facet::Occasion => "occasion",
            Facet::Accord => "accord",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Facet::Gender => 0,
            Facet::Brand => 1,
            Facet::Season => 2,
            Facet::Occasion => 3,
            Facet::Accord => 4,
        }
    }

    pub fn def(self) -> &'static FacetDef {
        &FACET_DEFS[self.index()]
    }

    pub fn mode(self) -> MatchMode {
        self.def().mode
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// Canonical form of a user-supplied value for this facet.
    ///
    /// Tags are stored lowercased; brand names keep their case.
    pub fn normalize_value(self, value: &str) -> String {
        let trimmed = value.trim();
        match self {
            Facet::Brand => trimmed.to_string(),
            _ => trimmed.to_lowercase(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gender" | "genders" => Ok(Facet::Gender),
            "brand" | "brands" => Ok(Facet::Brand),
            "season" | "seasons" => Ok(Facet::Season),
            "occasion" | "occasions" => Ok(Facet::Occasion),
            "accord" | "accords" => Ok(Facet::Accord),
            _ => Err(Error::UnknownFacet(s.to_string())),
        }
    }
}

/// How multiple selected values of one facet combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Item needs at least one of the selected values (OR)
    Any,
    /// Item needs every selected value (AND)
    All,
}

/// The values an item carries for one facet.
#[derive(Debug, Clone, Copy)]
pub enum FieldValues<'a> {
    Single(Option<&'a str>),
    Multi(&'a [String]),
}

impl<'a> FieldValues<'a> {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            FieldValues::Single(v) => *v == Some(value),
            FieldValues::Multi(values) => values.iter().any(|v| v == value),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match *self {
            FieldValues::Single(v) => Box::new(v.into_iter()),
            FieldValues::Multi(values) => Box::new(values.iter().map(String::as_str)),
        }
    }
}

/// Facet definition: match semantics plus the item field it reads.
pub struct FacetDef {
    pub facet: Facet,
    pub mode: MatchMode,
    pub label: &'static str,
    pub field: for<'a> fn(&'a Item) -> FieldValues<'a>,
}

impl FacetDef {
    pub fn values<'a>(&self, item: &'a Item) -> FieldValues<'a> {
        (self.field)(item)
    }
}

impl fmt::Debug for FacetDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetDef")
            .field("facet", &self.facet)
            .field("mode", &self.mode)
            .field("label", &self.label)
            .finish()
    }
}

fn gender_field(item: &Item) -> FieldValues<'_> {
    FieldValues::Single(item.gender.map(|g| g.as_str()))
}

fn brand_field(item: &Item) -> FieldValues<'_> {
    FieldValues::Single(Some(item.brand.as_str()))
}

fn season_field(item: &Item) -> FieldValues<'_> {
    FieldValues::Multi(&item.seasons)
}

fn occasion_field(item: &Item) -> FieldValues<'_> {
    FieldValues::Multi(&item.occasions)
}

fn accord_field(item: &Item) -> FieldValues<'_> {
    FieldValues::Multi(&item.accords)
}

/// Facet table, indexed by `Facet::index`.
pub static FACET_DEFS: [FacetDef; 5] = [
    FacetDef {
        facet: Facet::Gender,
        mode: MatchMode::Any,
        label: "Gender",
        field: gender_field,
    },
    FacetDef {
        facet: Facet::Brand,
        mode: MatchMode::Any,
        label: "Brand",
        field: brand_field,
    },
    FacetDef {
        facet: Facet::Season,
        mode: MatchMode::Any,
        label: "Season",
        field: season_field,
    },
    FacetDef {
        facet: Facet::Occasion,
        mode: MatchMode::Any,
        label: "Occasion",
        field: occasion_field,
    },
    FacetDef {
        facet: Facet::Accord,
        mode: MatchMode::All,
        label: "Accord",
        field: accord_field,
    },
];
