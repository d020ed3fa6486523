//! Loading configuration and opening the catalog and membership store.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use crate::catalog::Catalog;
use crate::downtogo_config::DownToGoConfig;
use crate::error::{DownToGoError, DownToGoResult};
use crate::membership::MembershipStore;
use crate::storage::FileStorage;

#[derive(Debug, Clone)]
pub struct DownToGo {
    config: DownToGoConfig,
}

impl DownToGo {
    /// Load ~/.config/downtogo/config.toml, creating a commented default on
    /// first run. `DOWNTOGO_*` environment variables override file values.
    pub fn load() -> DownToGoResult<Self> {
        let config_path = DownToGoConfig::config_path()?;

        if !config_path.exists() {
            DownToGoConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> DownToGoResult<Self> {
        let config: DownToGoConfig = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("DOWNTOGO"))
            .build()
            .map_err(|e| DownToGoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DownToGoError::Config(e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "Loaded config");

        Ok(DownToGo { config })
    }

    pub fn from_config(config: DownToGoConfig) -> Self {
        DownToGo { config }
    }

    pub fn config(&self) -> &DownToGoConfig {
        &self.config
    }

    pub fn data_path(&self) -> PathBuf {
        expand(&self.config.data_dir)
    }

    /// The data directory in display-friendly form, keeping `~`.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn username(&self) -> &str {
        self.config.username.as_deref().unwrap_or("you")
    }

    /// The configured catalog, or the bundled sample when none is set.
    pub fn catalog(&self) -> DownToGoResult<Catalog> {
        match &self.config.catalog {
            Some(path) => Catalog::load(&expand(path)),
            None => Catalog::sample(),
        }
    }

    /// Open the membership store persisted under the data directory.
    pub fn store(&self) -> MembershipStore<FileStorage> {
        MembershipStore::load(FileStorage::new(self.data_path()))
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
