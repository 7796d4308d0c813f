use scentdex_engine::{BrandInfo, Catalog, ScentWeight, boost_guide, find_similar};
use scentdex_runtime::DisplayConfig;
use scentdex_types::{Brand, Item};

use crate::args::hints;
use crate::presentation::view_models::{
    BoostGuideViewModel, BoostStepViewModel, BrandInfoViewModel, CommandResultViewModel,
    Guidance, ItemDetailViewModel, ItemRefViewModel, NotesViewModel, SimilarEntryViewModel,
    SimilarListViewModel, StatusBadge,
};

fn brand_info(catalog: &Catalog, brand: &str) -> BrandInfoViewModel {
    let info = catalog
        .brand(brand)
        .map(BrandInfo::from_brand)
        .unwrap_or_else(|| BrandInfo::from_brand(&Brand::new(brand)));
    BrandInfoViewModel {
        name: info.name,
        description: info.description,
    }
}

fn boost(item: &Item) -> BoostGuideViewModel {
    let guide = boost_guide(item);
    BoostGuideViewModel {
        weight: match guide.weight {
            ScentWeight::Heavy => "heavy",
            ScentWeight::Light => "light",
        }
        .to_string(),
        title: guide.title.to_string(),
        steps: guide
            .steps
            .iter()
            .map(|step| BoostStepViewModel {
                bottle: step.bottle.to_string(),
                boost: step.boost.to_string(),
            })
            .collect(),
    }
}

pub fn item_detail(
    catalog: &Catalog,
    item: &Item,
    favorite: bool,
    display: &DisplayConfig,
) -> ItemDetailViewModel {
    ItemDetailViewModel {
        code: item.code.clone(),
        name: item.name.clone(),
        brand: item.brand.clone(),
        gender: item.gender.map(|g| g.as_str().to_string()),
        description: item.description.clone(),
        accords: item.accords.clone(),
        seasons: item.seasons.clone(),
        occasions: item.occasions.clone(),
        notes: NotesViewModel {
            top: item.notes.top.clone(),
            heart: item.notes.heart.clone(),
            base: item.notes.base.clone(),
        },
        favorite,
        product_url: display.product_url(&item.code),
        boost: boost(item),
        brand_info: brand_info(catalog, &item.brand),
    }
}

pub fn present_item_detail(
    catalog: &Catalog,
    item: &Item,
    favorite: bool,
    display: &DisplayConfig,
) -> CommandResultViewModel<ItemDetailViewModel> {
    let content = item_detail(catalog, item, favorite, display);

    let favorite_tip = if favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    CommandResultViewModel::new(content).with_suggestions(vec![
        Guidance::new("Find similar scents").with_command(hints::similar(&item.code)),
        Guidance::new(format!("More from {}", item.brand))
            .with_command(hints::focus_brand(&item.brand)),
        Guidance::new(favorite_tip).with_command(hints::favorite_toggle(&item.code)),
    ])
}

pub fn similar_list(catalog: &Catalog, reference: &Item, limit: usize) -> SimilarListViewModel {
    let matches = find_similar(catalog, reference, limit)
        .into_iter()
        .map(|found| SimilarEntryViewModel {
            code: found.item.code.clone(),
            name: found.item.name.clone(),
            brand: found.item.brand.clone(),
            score: found.score,
            shared_accords: found.shared_accords.iter().map(|a| a.to_string()).collect(),
        })
        .collect();

    SimilarListViewModel {
        reference: ItemRefViewModel {
            code: reference.code.clone(),
            name: reference.name.clone(),
            brand: reference.brand.clone(),
        },
        matches,
    }
}

pub fn present_similar(
    catalog: &Catalog,
    reference: &Item,
    limit: usize,
) -> CommandResultViewModel<SimilarListViewModel> {
    let content = similar_list(catalog, reference, limit);

    if content.matches.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("No similar items found"));
    }

    let first = content.matches[0].code.clone();
    CommandResultViewModel::new(content)
        .with_suggestion(Guidance::new("Open the closest match").with_command(hints::show(&first)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scentdex_types::Notes;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Item::new("A1", "Aqua", "Bx")
                    .with_accords(["citrus", "fresh"])
                    .with_notes(Notes {
                        top: vec!["Bergamot".to_string()],
                        heart: vec![],
                        base: vec!["Musk".to_string()],
                    }),
                Item::new("A2", "Noir", "Unlisted").with_accords(["woody", "amber"]),
                Item::new("A3", "Zest", "Bx").with_accords(["citrus"]),
            ],
            vec![Brand::new("Bx").with_description("Citrus house")],
        )
    }

    #[test]
    fn test_item_detail_builds_link_and_boost() {
        let catalog = catalog();
        let item = catalog.get("A1").unwrap();
        let detail = item_detail(&catalog, item, true, &DisplayConfig::default());

        assert_eq!(
            detail.product_url,
            "https://leparfum.com.gr/en/module/iqitsearch/searchiqit?s=A1"
        );
        assert_eq!(detail.boost.weight, "light");
        assert_eq!(detail.boost.steps[1].boost, "2ml");
        assert_eq!(detail.brand_info.description, "Citrus house");
        assert!(detail.favorite);
    }

    #[test]
    fn test_unknown_brand_gets_fallback_info() {
        let catalog = catalog();
        let item = catalog.get("A2").unwrap();
        let detail = item_detail(&catalog, item, false, &DisplayConfig::default());

        assert_eq!(detail.boost.weight, "heavy");
        assert_eq!(
            detail.brand_info.description,
            "No information available for this brand."
        );
    }

    #[test]
    fn test_similar_without_overlap_warns() {
        let catalog = catalog();
        let result = present_similar(&catalog, catalog.get("A2").unwrap(), 5);
        assert!(result.content.matches.is_empty());
        assert!(result.badge.is_some());
    }

    #[test]
    fn test_similar_lists_shared_accords() {
        let catalog = catalog();
        let result = present_similar(&catalog, catalog.get("A1").unwrap(), 5);

        assert_eq!(result.content.matches.len(), 1);
        assert_eq!(result.content.matches[0].code, "A3");
        assert_eq!(result.content.matches[0].shared_accords, vec!["citrus"]);
    }
}
