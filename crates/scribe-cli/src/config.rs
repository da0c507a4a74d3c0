//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resulting
//! [`ArticleTemplate`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SCRIBE_ARTICLES__DIR`, `SCRIBE_TEMPLATE__TOPICS=a,b`, ...
//! 3. Config file: `--config FILE`, else `./.scribe.toml`, else the user config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use tracing::debug;

use scribe_core::domain::{ArticleTemplate, DEFAULT_ARTICLES_DIR};

use crate::error::{CliError, CliResult};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".scribe.toml";

const ENV_PREFIX: &str = "SCRIBE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where articles are written.
    pub articles: ArticlesConfig,
    /// Front matter of new articles.
    pub template: ArticleTemplate,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlesConfig {
    pub dir: PathBuf,
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_ARTICLES_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        Self::load_with_env(config_file, None)
    }

    /// [`Self::load`] reading `SCRIBE_*` variables from `env` instead of the
    /// process environment when it is `Some`.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> CliResult<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                let path = if local.is_file() { local } else { Self::config_path() };
                debug!(path = %path.display(), "Looking for config file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("template.topics")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(|e| CliError::ConfigError {
            message: format!("Failed to read configuration: {e}"),
            source: Some(Box::new(e)),
        })?;

        config
            .try_deserialize::<Self>()
            .map_err(|e| CliError::ConfigError {
                message: format!("Invalid configuration: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.scribe.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "scribe", "scribe")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Serialise as TOML, the on-disk format.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
