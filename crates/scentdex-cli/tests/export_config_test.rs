//! `export`, `config` and the no-command guidance.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use scentdex_testing::TestWorld;

#[test]
fn test_export_writes_filtered_rows() {
    // Given
    let world = TestWorld::new().with_sample_catalog();
    let output = world.temp_dir().join("out/summer.csv");

    // When
    let result = world
        .run_json(&["export", "--season", "summer", "-o", output.to_str().unwrap()])
        .unwrap();

    // Then: header plus A1, C1, C2
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json().unwrap()["content"]["rows"], 3);

    let csv = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "code,name,brand,gender,accords,seasons,occasions");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("A1,Aqua Brillante,Atelier Sol,unisex,citrus; fresh; aquatic,"));
}

#[test]
fn test_export_empty_result_keeps_header() {
    let world = TestWorld::new().with_sample_catalog();
    let output = world.temp_dir().join("empty.csv");

    let result = world
        .run(&["export", "--accord", "leather", "-o", output.to_str().unwrap()])
        .unwrap();

    assert!(result.success());
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "code,name,brand,gender,accords,seasons,occasions\n"
    );
}

#[test]
fn test_missing_catalog_is_a_load_error() {
    let world = TestWorld::new();

    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Could not load catalog"), "{}", result.stderr());
}

#[test]
fn test_config_set_catalog_is_remembered() {
    // Given: a catalog outside the data directory
    let world = TestWorld::new();
    let path = world.temp_dir().join("elsewhere/catalog.json");
    scentdex_testing::fixtures::write_catalog(&path, scentdex_testing::fixtures::GROUPED_CATALOG)
        .unwrap();

    // When
    let set = world
        .run_json(&["config", "set-catalog", path.to_str().unwrap()])
        .unwrap();
    assert!(set.success(), "stderr: {}", set.stderr());
    assert_eq!(set.json().unwrap()["content"]["catalog_exists"], true);

    // Then: later commands read it without --catalog
    let listed = world.run_json(&["brands"]).unwrap();
    assert!(listed.success());
    assert!(world.data_dir().join("config.toml").exists());
}

#[test]
fn test_config_show_warns_about_missing_catalog() {
    let world = TestWorld::new();

    let result = world.run_json(&["config", "show"]).unwrap();

    let json = result.json().unwrap();
    assert_eq!(json["content"]["catalog_exists"], false);
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(
        json["suggestions"][0]["command"],
        "scentdex config set-catalog <PATH>"
    );
}

#[test]
fn test_no_command_prints_guidance() {
    let world = TestWorld::new().with_sample_catalog();

    let mut cmd = cargo_bin_cmd!("scentdex");
    world.configure_command(&mut cmd);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"))
        .stdout(predicate::str::contains("scentdex browse"));
}

#[test]
fn test_no_command_without_catalog_points_to_setup() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("scentdex");
    world.configure_command(&mut cmd);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Get started:"));
}
