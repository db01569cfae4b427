use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Resolve the data directory (holding config.toml) based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DA6_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.da6 (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DA6_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("da6"));
    }

    // Last resort for systems without an XDG data directory.
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".da6"));
    }

    Err(Error::Config(
        "could not determine a data directory: neither XDG data_dir nor HOME is set".to_string(),
    ))
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Initial playback state for the TUI. All cosmetic: the interval drives
/// the home rotation timer, the toggles seed the status indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Home rotation period in milliseconds while autoplay is on.
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,

    #[serde(default)]
    pub music: bool,

    #[serde(default = "default_sound")]
    pub sound: bool,
}

fn default_autoplay_interval_ms() -> u64 {
    5000
}

fn default_sound() -> bool {
    true
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            music: false,
            sound: default_sound(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional catalog file replacing the embedded content.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_dir(None)?.join("config.toml"))
    }

    /// Config file path inside an already resolved data directory.
    pub fn path_in(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.content_path, None);
        assert_eq!(config.playback.autoplay_interval_ms, 5000);
        assert!(!config.playback.music);
        assert!(config.playback.sound);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            content_path: Some(PathBuf::from("/data/catalog.json")),
            playback: PlaybackConfig {
                autoplay_interval_ms: 2500,
                music: true,
                sound: false,
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[playback]\nmusic = true\n")?;

        let config = Config::load_from(&config_path)?;
        assert!(config.playback.music);
        assert_eq!(config.playback.autoplay_interval_ms, 5000);
        assert!(config.playback.sound);
        assert_eq!(config.content_path, None);

        Ok(())
    }

    #[test]
    fn test_save_creates_parent_dirs() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

        Config::default().save_to(&config_path)?;
        assert!(config_path.exists());

        Ok(())
    }
}
