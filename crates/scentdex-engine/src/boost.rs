use scentdex_types::Item;
use serde::Serialize;

/// Accords that mark a scent as heavy.
pub const HEAVY_ACCORDS: [&str; 6] = ["gourmand", "oriental", "amber", "spicy", "leather", "woody"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScentWeight {
    Heavy,
    Light,
}

impl ScentWeight {
    pub fn title(self) -> &'static str {
        match self {
            ScentWeight::Heavy => "Heavy/Gourmand Scent",
            ScentWeight::Light => "Fresh/Light Scent",
        }
    }
}

/// One bottle size and the booster amount to add to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoostStep {
    pub bottle: &'static str,
    pub boost: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoostGuide {
    pub weight: ScentWeight,
    pub title: &'static str,
    pub steps: Vec<BoostStep>,
}

const HEAVY_STEPS: [(&str, &str); 3] = [("30ml", "2ml"), ("50ml", "3-4ml"), ("100ml", "5ml")];
const LIGHT_STEPS: [(&str, &str); 3] = [("30ml", "1ml"), ("50ml", "2ml"), ("100ml", "3ml")];

pub fn scent_weight(item: &Item) -> ScentWeight {
    if item.accords.iter().any(|a| HEAVY_ACCORDS.contains(&a.as_str())) {
        ScentWeight::Heavy
    } else {
        ScentWeight::Light
    }
}

pub fn boost_guide(item: &Item) -> BoostGuide {
    let weight = scent_weight(item);
    let steps = match weight {
        ScentWeight::Heavy => HEAVY_STEPS,
        ScentWeight::Light => LIGHT_STEPS,
    };

    BoostGuide {
        weight,
        title: weight.title(),
        steps: steps
            .iter()
            .map(|&(bottle, boost)| BoostStep { bottle, boost })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_heavy_accord_makes_item_heavy() {
        let item = Item::new("A2", "Noir", "By").with_accords(["fresh", "Woody"]);
        let guide = boost_guide(&item);
        assert_eq!(guide.weight, ScentWeight::Heavy);
        assert_eq!(guide.title, "Heavy/Gourmand Scent");
        assert_eq!(guide.steps[1].boost, "3-4ml");
    }

    #[test]
    fn test_items_without_heavy_accords_are_light() {
        let guide = boost_guide(&Item::new("A1", "Aqua", "Bx").with_accords(["citrus"]));
        let boosts: Vec<&str> = guide.steps.iter().map(|s| s.boost).collect();
        assert_eq!(guide.weight, ScentWeight::Light);
        assert_eq!(boosts, vec!["1ml", "2ml", "3ml"]);

        assert_eq!(scent_weight(&Item::new("A0", "Bare", "Bx")), ScentWeight::Light);
    }
}
