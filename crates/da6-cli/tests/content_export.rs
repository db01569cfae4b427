//! Catalog export tests.
//!
//! Export without a destination writes the catalog JSON to stdout in
//! both output formats; with `--output` it writes the file and confirms.

use anyhow::Result;
use da6_testing::{TestWorld, fixtures};

#[test]
fn test_export_to_stdout_is_the_catalog_json() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["content", "export"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assert_eq!(json["posts"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["photos"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["events"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["modules"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["posts"][0]["id"], "p1");

    Ok(())
}

#[test]
fn test_export_round_trips_through_content_flag() -> Result<()> {
    // An exported file is a valid --content source.
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());
    let dump = world.run(&["content", "export"])?;
    assert!(dump.success());

    let reloaded = TestWorld::new().with_catalog_file("exported.json", &dump.stdout);
    let result = reloaded.run(&["--format", "json", "blog", "list"])?;

    assert!(result.success(), "Exported catalog should load");
    da6_testing::assertions::assert_ids(&result.json()?, "posts", &["p1", "p2", "p3"])?;

    Ok(())
}

#[test]
fn test_export_to_file_writes_and_confirms() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());
    let dest = world.temp_dir().join("out.json");
    let dest_str = dest.to_string_lossy().to_string();

    let result = world.run(&["content", "export", "--output", &dest_str])?;

    assert!(result.success(), "Command should succeed");
    assert!(result.stdout.contains("Exported 10 records to"));

    let written = std::fs::read_to_string(&dest)?;
    let json: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(json["events"][1]["id"], "n2");

    Ok(())
}

#[test]
fn test_export_to_unwritable_path_fails() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());
    let dest = world.temp_dir().join("missing-dir").join("out.json");
    let dest_str = dest.to_string_lossy().to_string();

    let result = world.run(&["content", "export", "--output", &dest_str])?;

    assert!(!result.success(), "Writing into a missing directory fails");
    assert!(result.stderr.contains("failed to write"));

    Ok(())
}
