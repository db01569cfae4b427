//! Kingdom of Night command tests.
//!
//! Events have no tags; search reads title and description. Positions
//! are 1-based wheel slots and keep their catalog value even when a
//! search narrows the listing.

use anyhow::Result;
use da6_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_list_numbers_events_in_catalog_order() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "night", "list"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_ids(&json, "events", &["n1", "n2"])?;
    assert_eq!(json["events"][0]["position"], 1);
    assert_eq!(json["events"][1]["position"], 2);

    Ok(())
}

#[test]
fn test_search_keeps_original_positions() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "night", "list", "--search", "fog"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_ids(&json, "events", &["n2"])?;
    assert_eq!(
        json["events"][0]["position"], 2,
        "position is the wheel slot, not the row number"
    );

    Ok(())
}

#[test]
fn test_search_reads_the_description() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    // Every fixture description mentions midnight.
    let result = world.run(&["--format", "json", "night", "list", "--search", "midnight"])?;

    assertions::assert_record_count(&result.json()?, "events", 2)?;

    Ok(())
}

#[test]
fn test_show_reports_wheel_position() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["night", "show", "n2"])?;

    assert!(result.success(), "Command should succeed");
    assert!(result.stdout.contains("Fog Machine Hymns"));
    assert!(result.stdout.contains("Attic East · 2024.03.09 · mood: ambient"));
    assert!(result.stdout.contains("event 2 of 2"));

    Ok(())
}

#[test]
fn test_show_unknown_id_fails() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["night", "show", "n7"])?;

    assert!(!result.success(), "Unknown id must fail");
    assert!(result.stderr.contains("no event with id 'n7'"));

    Ok(())
}

#[test]
fn test_quiet_mode_lists_ids_only() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["night", "list", "--quiet"])?;

    assert_eq!(result.lines(), vec!["n1", "n2"]);

    Ok(())
}
