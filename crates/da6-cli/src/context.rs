use anyhow::{Context, Result};
use da6_content::{resolve_data_dir, Config, ContentSource};
use da6_types::Catalog;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Everything a command needs to run: the resolved data directory, the
/// loaded config and the catalog source. The catalog itself loads lazily
/// so commands that never read it (init) cannot fail on a broken file.
pub struct CommandContext {
    data_dir: PathBuf,
    config: Config,
    source: ContentSource,
    catalog: OnceCell<Catalog>,
}

impl CommandContext {
    pub fn resolve(data_dir: Option<&str>, content: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("failed to read config at {}", config_path.display()))?;
        let source = ContentSource::resolve(content, &config);

        Ok(Self {
            data_dir,
            config,
            source,
            catalog: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| {
            self.source
                .load()
                .with_context(|| format!("failed to load catalog from {}", self.source))
        })
    }
}
