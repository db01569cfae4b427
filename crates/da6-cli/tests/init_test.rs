//! Init command tests.
//!
//! `init` writes a default config.toml under the data dir, refuses to
//! clobber an existing one without `--force`, and suggests next steps.

use anyhow::Result;
use da6_testing::TestWorld;

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init"])?;

    assert!(result.success(), "Command should succeed");
    assert!(result.stdout.contains("Wrote config to"));

    let config = std::fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(config.contains("autoplay_interval_ms = 5000"));
    assert!(config.contains("music = false"));
    assert!(config.contains("sound = true"));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite_without_force() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["init"])?;

    let result = world.run(&["init"])?;

    assert!(!result.success(), "Second init must fail");
    assert!(result.stderr.contains("config already exists"));
    assert!(result.stderr.contains("--force"));

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let world = TestWorld::new();
    world.run(&["init"])?;

    // Scribble over the config, then force a reset.
    std::fs::write(
        world.data_dir().join("config.toml"),
        "content_path = \"/tmp/somewhere.json\"\n",
    )?;

    let result = world.run(&["init", "--force"])?;

    assert!(result.success(), "Forced init must succeed");
    assert!(result.stdout.contains("Overwrote config at"));

    let config = std::fs::read_to_string(world.data_dir().join("config.toml"))?;
    assert!(!config.contains("somewhere.json"), "Old config is gone");
    assert!(config.contains("autoplay_interval_ms = 5000"));

    Ok(())
}

#[test]
fn test_init_mentions_next_steps() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init"])?;

    assert!(result.stdout.contains("💡 Tips:"));
    assert!(result.stdout.contains("da6 browse"));

    Ok(())
}
