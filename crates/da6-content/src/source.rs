use std::fmt;
use std::path::{Path, PathBuf};

use da6_types::Catalog;

use crate::builtin::builtin_catalog;
use crate::config::{expand_tilde, Config};
use crate::Result;

/// Environment variable naming a catalog file, checked after the explicit
/// flag and before the config file.
pub const CONTENT_ENV_VAR: &str = "DA6_CONTENT";

/// Where the active catalog comes from.
///
/// Resolution priority: explicit `--content` flag, then [`CONTENT_ENV_VAR`],
/// then `content_path` from the config, then the embedded default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Builtin,
    File(PathBuf),
}

impl ContentSource {
    pub fn resolve(explicit: Option<&str>, config: &Config) -> Self {
        if let Some(path) = explicit {
            return ContentSource::File(expand_tilde(path));
        }

        if let Ok(env_path) = std::env::var(CONTENT_ENV_VAR) {
            return ContentSource::File(expand_tilde(&env_path));
        }

        if let Some(path) = &config.content_path {
            return ContentSource::File(path.clone());
        }

        ContentSource::Builtin
    }

    /// Load the catalog this source names. The embedded catalog is cloned
    /// so callers own their copy regardless of source.
    pub fn load(&self) -> Result<Catalog> {
        match self {
            ContentSource::Builtin => Ok(builtin_catalog().clone()),
            ContentSource::File(path) => load_catalog_file(path),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Builtin => write!(f, "embedded"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&text)?;
    Ok(catalog)
}
