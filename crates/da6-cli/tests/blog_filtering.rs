//! Blog list filtering tests.
//!
//! Search is a case-insensitive substring over title and excerpt; tag
//! selection is exact and case-sensitive. Both narrow together, and
//! filtered output keeps catalog order.

use anyhow::Result;
use da6_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_list_without_filters_keeps_catalog_order() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "blog", "list"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_record_count(&json, "posts", 3)?;
    assertions::assert_ids(&json, "posts", &["p1", "p2", "p3"])?;
    assertions::assert_applied_filter(&json, None, None)?;

    Ok(())
}

#[test]
fn test_search_is_case_insensitive() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "blog", "list", "--search", "NEON"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_ids(&json, "posts", &["p1"])?;
    assertions::assert_applied_filter(&json, Some("NEON"), None)?;

    Ok(())
}

#[test]
fn test_search_matches_chinese_text() -> Result<()> {
    // Given: p2 carries the tag 機房 but search only reads title and
    // excerpt, so a text search for it finds nothing.
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "blog", "list", "--search", "機房"])?;

    assert!(result.success(), "Command should succeed");
    assertions::assert_record_count(&result.json()?, "posts", 0)?;

    // Tag selection is the way to reach it.
    let result = world.run(&["--format", "json", "blog", "list", "--tag", "機房"])?;
    assertions::assert_ids(&result.json()?, "posts", &["p2"])?;

    Ok(())
}

#[test]
fn test_tag_filter_is_exact_and_case_sensitive() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    // 夜 tags p1 and p2.
    let result = world.run(&["--format", "json", "blog", "list", "--tag", "夜"])?;
    assertions::assert_ids(&result.json()?, "posts", &["p1", "p2"])?;

    let result = world.run(&["--format", "json", "blog", "list", "--tag", "tape"])?;
    assertions::assert_ids(&result.json()?, "posts", &["p3"])?;

    // A casing mismatch selects nothing rather than fuzzy-matching.
    let result = world.run(&["--format", "json", "blog", "list", "--tag", "Tape"])?;
    assertions::assert_record_count(&result.json()?, "posts", 0)?;

    Ok(())
}

#[test]
fn test_all_tag_sentinel_means_unfiltered() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "blog", "list", "--tag", "all"])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_record_count(&json, "posts", 3)?;
    // The sentinel is not echoed as an applied filter.
    assertions::assert_applied_filter(&json, None, None)?;

    Ok(())
}

#[test]
fn test_search_and_tag_narrow_together() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    // "opening" hits every excerpt; the tag keeps only p2.
    let result = world.run(&[
        "--format", "json", "blog", "list", "--search", "opening", "--tag", "機房",
    ])?;

    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assertions::assert_ids(&json, "posts", &["p2"])?;
    assertions::assert_applied_filter(&json, Some("opening"), Some("機房"))?;

    Ok(())
}

#[test]
fn test_no_match_is_success_with_empty_list() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["--format", "json", "blog", "list", "--search", "nothing here"])?;

    assert!(result.success(), "An empty match is a valid result");
    assertions::assert_record_count(&result.json()?, "posts", 0)?;

    let plain = world.run(&["blog", "list", "--search", "nothing here"])?;
    assert!(plain.stdout.contains("No posts match."));
    assert!(plain.stdout.contains("Search: nothing here"));

    Ok(())
}

#[test]
fn test_available_tags_come_from_the_whole_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    // Even a narrowed listing advertises every tag, first-seen order.
    let result = world.run(&["--format", "json", "blog", "list", "--tag", "聲音"])?;

    let json = result.json()?;
    let tags: Vec<&str> = json["available_tags"]
        .as_array()
        .map(|tags| tags.iter().filter_map(|t| t.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(tags, vec!["城市", "夜", "機房", "tape", "聲音"]);

    Ok(())
}

#[test]
fn test_show_displays_one_post() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["blog", "show", "p2"])?;

    assert!(result.success(), "Command should succeed");
    assert!(result.stdout.contains("Quiet server rooms"));
    assert!(result.stdout.contains("mood: introspective"));
    assert!(result.stdout.contains("A longer paragraph follows."));

    Ok(())
}

#[test]
fn test_show_unknown_id_fails_with_guidance() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["blog", "show", "p99"])?;

    assert!(!result.success(), "Unknown id must fail");
    assert!(result.stderr.contains("no post with id 'p99'"));
    assert!(result.stderr.contains("da6 blog list"));

    Ok(())
}
