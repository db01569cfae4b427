//! Custom assertions over the CLI's JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Record count validation per collection
//! - Id sequence checks (order matters, it mirrors catalog order)
//! - Check report totals

use anyhow::{Context, Result};
use serde_json::Value;

fn array<'a>(json: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
    json[field]
        .as_array()
        .with_context(|| format!("Expected '{}' array in JSON", field))
}

/// Assert that JSON output contains the expected number of records in
/// `field` ("posts", "photos", "events", "modules", "findings").
pub fn assert_record_count(json: &Value, field: &str, expected: usize) -> Result<()> {
    let records = array(json, field)?;
    if records.len() != expected {
        anyhow::bail!("Expected {} {}, got {}", expected, field, records.len());
    }
    Ok(())
}

/// Assert the exact id sequence of a collection. Order is part of the
/// contract: filtered output keeps catalog order.
pub fn assert_ids(json: &Value, field: &str, expected: &[&str]) -> Result<()> {
    let records = array(json, field)?;
    let ids: Vec<&str> = records
        .iter()
        .filter_map(|record| record["id"].as_str())
        .collect();
    if ids != expected {
        anyhow::bail!("Expected ids {:?} in '{}', got {:?}", expected, field, ids);
    }
    Ok(())
}

/// Assert the totals of a `content check` report.
pub fn assert_check_totals(json: &Value, errors: usize, warnings: usize) -> Result<()> {
    let error_count = json["error_count"]
        .as_u64()
        .context("Expected 'error_count' in JSON")?;
    let warning_count = json["warning_count"]
        .as_u64()
        .context("Expected 'warning_count' in JSON")?;

    if error_count != errors as u64 {
        anyhow::bail!("Expected {} errors, got {}", errors, error_count);
    }
    if warning_count != warnings as u64 {
        anyhow::bail!("Expected {} warnings, got {}", warnings, warning_count);
    }
    Ok(())
}

/// Assert that the filter summary echoes what the command applied.
pub fn assert_applied_filter(
    json: &Value,
    search: Option<&str>,
    tag: Option<&str>,
) -> Result<()> {
    let applied = &json["applied"];
    if applied.is_null() {
        anyhow::bail!("Expected 'applied' object in JSON");
    }
    if applied["search"].as_str() != search {
        anyhow::bail!(
            "Expected applied search {:?}, got {:?}",
            search,
            applied["search"]
        );
    }
    if applied["tag"].as_str() != tag {
        anyhow::bail!("Expected applied tag {:?}, got {:?}", tag, applied["tag"]);
    }
    Ok(())
}
