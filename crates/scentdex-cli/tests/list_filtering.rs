//! `list` with facet flags, scope flags and search.

use scentdex_testing::{TestWorld, assertions};

#[test]
fn test_list_without_filters_shows_whole_catalog() {
    // Given: the sample catalog in the data directory
    let world = TestWorld::new().with_sample_catalog();

    // When: listing without filters
    let result = world.run_json(&["list"]).expect("Failed to run list");

    // Then: every item in catalog order
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().expect("Invalid JSON");
    assertions::assert_item_codes(&json, &["A1", "A2", "B1", "B2", "C1", "C2"]).unwrap();
    assertions::assert_result_counts(&json, 6, 6).unwrap();
    assert_eq!(json["content"]["summary"]["text"], "Showing 6 of 6 results.");
}

#[test]
fn test_accords_must_all_match() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["list", "--accord", "citrus", "--accord", "woody"])
        .unwrap();

    let json = result.json().unwrap();
    assertions::assert_item_codes(&json, &["A2"]).unwrap();

    let chips = json["content"]["chips"].as_array().unwrap();
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[0]["facet"], "accord");
    assert_eq!(chips[0]["label"], "Citrus");
}

#[test]
fn test_seasons_match_any() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["list", "--season", "winter", "--season", "autumn"])
        .unwrap();

    assertions::assert_item_codes(&result.json().unwrap(), &["A2", "B1"]).unwrap();
}

#[test]
fn test_facets_combine_across_groups() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["list", "--gender", "unisex", "--occasion", "sport"])
        .unwrap();

    assertions::assert_item_codes(&result.json().unwrap(), &["C1"]).unwrap();
}

#[test]
fn test_focus_brand_shows_brand_panel() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["list", "--focus-brand", "Maison Nord"])
        .unwrap();

    let json = result.json().unwrap();
    assertions::assert_item_codes(&json, &["B1", "B2"]).unwrap();
    assert_eq!(
        json["content"]["summary"]["text"],
        "Showing 2 result(s) for \"Maison Nord\"."
    );
    assert_eq!(
        json["content"]["summary"]["brand"]["description"],
        "No information available for this brand."
    );
}

#[test]
fn test_search_matches_name_brand_and_code() {
    let world = TestWorld::new().with_sample_catalog();

    let by_name = world.run_json(&["list", "-q", "rose"]).unwrap();
    assertions::assert_item_codes(&by_name.json().unwrap(), &["B2"]).unwrap();

    let by_brand = world.run_json(&["list", "--search", "costa"]).unwrap();
    assertions::assert_item_codes(&by_brand.json().unwrap(), &["C1", "C2"]).unwrap();
}

#[test]
fn test_no_matches_is_a_warning_not_an_error() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run_json(&["list", "--accord", "leather"])
        .unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assertions::assert_item_codes(&json, &[]).unwrap();
    assertions::assert_badge_level(&json, "warning").unwrap();
    assert_eq!(json["badge"]["label"], "No perfumes matched your selection.");
}

#[test]
fn test_limit_reports_omitted_items() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["list", "--limit", "2"]).unwrap();

    let json = result.json().unwrap();
    assertions::assert_item_codes(&json, &["A1", "A2"]).unwrap();
    assert_eq!(json["content"]["omitted"], 4);
}

#[test]
fn test_quiet_prints_codes_only() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world
        .run(&["list", "--accord", "aquatic", "--quiet"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "A1\nC1\n");
}

#[test]
fn test_plain_output_has_summary_and_chips() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["list", "--accord", "woody"]).unwrap();

    let stdout = result.stdout();
    assert!(stdout.starts_with("Showing 1 of 6 results.\n"), "{}", stdout);
    assert!(stdout.contains("Filters: [Accord: Woody]"));
    assert!(stdout.contains("A2  Cedro Nero by Atelier Sol"));
}

#[test]
fn test_flat_catalog_shape_via_catalog_flag() {
    // Given: a flat-shape catalog outside the data directory
    let world = TestWorld::new();
    let path = world.temp_dir().join("flat.json");
    scentdex_testing::fixtures::write_catalog(&path, scentdex_testing::fixtures::FLAT_CATALOG)
        .unwrap();

    // When: pointing --catalog at it
    let result = world
        .run_json(&["--catalog", path.to_str().unwrap(), "list"])
        .unwrap();

    // Then: the record without a code is skipped with a warning
    assert!(result.success());
    assertions::assert_item_codes(&result.json().unwrap(), &["F1", "F2"]).unwrap();
    assert!(result.stderr().contains("skipped"), "stderr: {}", result.stderr());
}
