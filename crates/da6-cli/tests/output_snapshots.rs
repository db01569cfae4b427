//! Exact plain-output checks for the stable fixture catalog.
//!
//! Piped output has no color codes, so these strings are byte-for-byte
//! what scripts consuming the CLI will see.

use anyhow::Result;
use da6_testing::{TestWorld, fixtures};

#[test]
fn test_blog_list_compact_layout() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["blog", "list"])?;

    let expected = " p1  2024-03-01   3 min  Neon alleys after rain
 p2  2024-03-01   3 min  Quiet server rooms
 p3  2024-03-01   3 min  Tape loops

3 of 3 posts
";
    assert_eq!(result.stdout, expected);

    Ok(())
}

#[test]
fn test_night_list_compact_layout() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["night", "list"])?;

    let expected = " 1.  2024.03.09  Basement Frequencies  @ B1 Warehouse
 2.  2024.03.09  Fog Machine Hymns  @ Attic East

2 of 2 events
";
    assert_eq!(result.stdout, expected);

    Ok(())
}

#[test]
fn test_tags_output() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["tags", "--section", "blog"])?;

    insta::assert_snapshot!(result.stdout, @r"
城市
夜
機房
tape
聲音
");

    Ok(())
}

#[test]
fn test_night_show_layout() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::small_catalog());

    let result = world.run(&["night", "show", "n1"])?;

    insta::assert_snapshot!(result.stdout, @r"
Basement Frequencies
B1 Warehouse · 2024.03.09 · mood: electronic

Basement Frequencies at B1 Warehouse, doors at midnight.

event 1 of 2
");

    Ok(())
}
