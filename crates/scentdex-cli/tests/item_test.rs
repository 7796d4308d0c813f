//! `show`, `similar` and `brands`.

use predicates::prelude::*;
use scentdex_testing::TestWorld;

#[test]
fn test_show_item_details() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["show", "A1"]).expect("Failed to run show");

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    let content = &json["content"];
    assert_eq!(content["name"], "Aqua Brillante");
    assert_eq!(content["notes"]["top"][1], "Bergamot");
    assert_eq!(content["brand_info"]["description"], "Sun-soaked citrus compositions");
    assert!(content["product_url"].as_str().unwrap().ends_with("A1"));
    assert!(content["boost"]["steps"].as_array().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_show_plain_text_fallbacks() {
    // Given: C2 has neither description nor notes
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "C2"]).unwrap();

    assert!(result.success());
    let stdout = result.stdout();
    assert!(predicate::str::contains("Fico Verde").eval(stdout));
    assert!(predicate::str::contains("No description available.").eval(stdout), "{}", stdout);
}

#[test]
fn test_show_unknown_code_fails() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["show", "ZZ9"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Unknown item code: ZZ9"));
}

#[test]
fn test_similar_ranks_by_overlap() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["similar", "A1"]).unwrap();

    let json = result.json().unwrap();
    let matches = json["content"]["matches"].as_array().unwrap();
    let codes: Vec<&str> = matches.iter().map(|m| m["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["C1", "C2", "A2", "B2"]);
    assert_eq!(
        matches[0]["shared_accords"],
        serde_json::json!(["citrus", "fresh", "aquatic"])
    );
}

#[test]
fn test_similar_limit() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["similar", "A1", "--limit", "1"]).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["matches"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_brands_lists_counts() {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run_json(&["brands"]).unwrap();

    let json = result.json().unwrap();
    let brands = json["content"]["brands"].as_array().unwrap();
    assert_eq!(brands.len(), 3);
    assert!(brands.iter().all(|b| b["items"] == 2));
    assert_eq!(brands[1]["name"], "Costa Verde");
}
