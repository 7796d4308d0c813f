//! Custom assertions for scentdex-specific validation.
//!
//! All of them read the `--format json` envelope:
//! `{ "badge": .., "content": .., "suggestions": [..] }`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Codes of `content.items`, in output order.
pub fn item_codes(json: &Value) -> Result<Vec<String>> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["code"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Item {} missing code", i))
        })
        .collect()
}

/// Assert that the listed items are exactly `expected`, in order.
pub fn assert_item_codes(json: &Value, expected: &[&str]) -> Result<()> {
    let codes = item_codes(json)?;
    if codes != expected {
        anyhow::bail!("Expected items {:?}, got {:?}", expected, codes);
    }
    Ok(())
}

/// Assert `content.summary.shown` / `content.summary.total`.
pub fn assert_result_counts(json: &Value, shown: u64, total: u64) -> Result<()> {
    let summary = &json["content"]["summary"];
    let actual = (
        summary["shown"].as_u64().context("Expected 'summary.shown'")?,
        summary["total"].as_u64().context("Expected 'summary.total'")?,
    );
    if actual != (shown, total) {
        anyhow::bail!("Expected {}/{} results, got {}/{}", shown, total, actual.0, actual.1);
    }
    Ok(())
}

/// Find one facet option in `facets` output.
pub fn facet_option<'a>(json: &'a Value, facet: &str, value: &str) -> Result<&'a Value> {
    let facets = json["content"]["facets"]
        .as_array()
        .context("Expected 'content.facets' array in JSON")?;

    let group = facets
        .iter()
        .find(|f| f["facet"] == facet)
        .with_context(|| format!("Facet {} not in output", facet))?;

    group["options"]
        .as_array()
        .context("Expected 'options' array")?
        .iter()
        .find(|o| o["value"] == value)
        .with_context(|| format!("Option {}={} not in output", facet, value))
}

/// Assert the enabled state of one facet option.
pub fn assert_option_viable(json: &Value, facet: &str, value: &str, viable: bool) -> Result<()> {
    let option = facet_option(json, facet, value)?;
    if option["viable"].as_bool() != Some(viable) {
        anyhow::bail!(
            "Expected {}={} viable={}, got {}",
            facet,
            value,
            viable,
            option["viable"]
        );
    }
    Ok(())
}

/// Assert the badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, level: &str) -> Result<()> {
    let actual = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if actual != level {
        anyhow::bail!("Expected badge level {}, got {}", level, actual);
    }
    Ok(())
}
