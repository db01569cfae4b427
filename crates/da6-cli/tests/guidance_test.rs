//! Bare-invocation guidance tests.
//!
//! `da6` with no subcommand orients instead of erroring: catalog
//! source, record counts, and a handful of quick commands.

use anyhow::Result;
use da6_testing::{TestWorld, fixtures};

#[test]
fn test_bare_invocation_succeeds_with_orientation() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&[])?;

    assert!(result.success(), "Bare da6 is not an error");
    assert!(result.stdout.contains("da6 - terminal portfolio browser"));
    assert!(result.stdout.contains("(3 posts, 2 photos, 2 events, 3 modules)"));
    assert!(result.stdout.contains("Quick commands:"));
    assert!(result.stdout.contains("da6 browse"));
    assert!(result.stdout.contains("da6 --help"));

    Ok(())
}

#[test]
fn test_guidance_names_the_embedded_source() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout.contains("Catalog: embedded"));

    Ok(())
}

#[test]
fn test_guidance_as_json_carries_counts() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json"])?;

    let json = result.json()?;
    assert_eq!(json["post_count"], 3);
    assert_eq!(json["photo_count"], 2);
    assert_eq!(json["event_count"], 2);
    assert_eq!(json["module_count"], 3);
    assert!(json["suggestions"].as_array().is_some_and(|s| !s.is_empty()));

    Ok(())
}
