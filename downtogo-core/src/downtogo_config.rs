//! Global downtogo configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DownToGoError, DownToGoResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/downtogo";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Global configuration at ~/.config/downtogo/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DownToGoConfig {
    /// Where Going / Down To Go marks are persisted
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// Catalog file to use instead of the bundled sample
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Name shown on your own profile
    #[serde(default)]
    pub username: Option<String>,
}

impl Default for DownToGoConfig {
    fn default() -> Self {
        DownToGoConfig {
            data_dir: default_data_path(),
            catalog: None,
            username: None,
        }
    }
}

impl DownToGoConfig {
    pub fn config_path() -> DownToGoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DownToGoError::Config("Could not determine config directory".into()))?
            .join("downtogo");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DownToGoResult<()> {
        let contents = format!(
            "\
# downtogo configuration

# Where your Going / Down To Go marks are stored:
# data_dir = \"{}\"

# Event catalog to browse (defaults to the bundled sample):
# catalog = \"~/events/catalog.toml\"

# Name shown on your profile:
# username = \"musicfan123\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DownToGoError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DownToGoError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
