//! Configuration management for the document server
//!
//! Values are layered, lowest precedence first:
//! 1. Built-in defaults
//! 2. Environment variables with the `DOCUMENT_MCP_` prefix
//! 3. A YAML file, either passed explicitly or discovered on disk

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILENAME: &str = "document-mcp.yaml";
const ENV_PREFIX: &str = "DOCUMENT_MCP";

/// Default server name reported to MCP clients
pub const DEFAULT_SERVER_NAME: &str = "DocumentMCP";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        /// Path to the configuration file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content from a configuration file
    #[error("Invalid YAML syntax in {path}:\n{source}\n\nHint: Check for proper indentation and YAML formatting")]
    YamlParse {
        /// Path to the configuration file with invalid YAML content
        path: PathBuf,
        /// Underlying YAML parsing error
        #[source]
        source: serde_yaml::Error,
    },

    /// Invalid configuration value for a specific field
    #[error("Invalid configuration value for '{field}': {value}\n{hint}")]
    InvalidValue {
        /// Name of the offending field
        field: String,
        /// The value that was provided
        value: String,
        /// How to fix it
        hint: String,
    },
}

/// Reads `PREFIX_SUFFIX` environment variables
#[derive(Debug)]
struct EnvLoader {
    prefix: &'static str,
}

impl EnvLoader {
    fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    fn var(&self, suffix: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, suffix))
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn load_string(&self, suffix: &str, default: &str) -> String {
        self.var(suffix).unwrap_or_else(|| default.to_string())
    }

    fn load_path(&self, suffix: &str) -> Option<PathBuf> {
        self.var(suffix).map(PathBuf::from)
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMcpConfig {
    /// Name reported in the MCP `serverInfo` (default: "DocumentMCP")
    pub server_name: String,
    /// Log level used when no command-line flag overrides it (default: "error")
    pub log_level: String,
    /// YAML file that replaces the built-in documents
    pub seed_file: Option<PathBuf>,
}

impl Default for DocumentMcpConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_file: None,
        }
    }
}

impl DocumentMcpConfig {
    /// Load configuration from defaults, environment and YAML.
    ///
    /// An explicit `path` must exist and parse. A discovered file that fails to
    /// load is skipped with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, skipped) = Self::load_with_fallback(path)?;
        if let Some(e) = skipped {
            tracing::warn!("Ignoring configuration file, using environment and defaults: {}", e);
        }
        Ok(config)
    }

    /// Like [`DocumentMcpConfig::load`], but hands back the error of a
    /// discovered file that was skipped instead of logging it.
    ///
    /// Callers that install logging after reading the configuration report the
    /// skipped file themselves.
    pub fn load_with_fallback(
        path: Option<&Path>,
    ) -> Result<(Self, Option<ConfigError>), ConfigError> {
        match path {
            Some(path) => Self::load_from(Some(path), None),
            None => Self::load_from(None, Self::find_yaml_config_file().as_deref()),
        }
    }

    fn load_from(
        explicit: Option<&Path>,
        discovered: Option<&Path>,
    ) -> Result<(Self, Option<ConfigError>), ConfigError> {
        let mut config = Self::default();
        config.apply_env_vars();

        let mut skipped = None;
        match (explicit, discovered) {
            (Some(path), _) => YamlConfig::load_from_file(path)?.apply_to_config(&mut config),
            (None, Some(found)) => match YamlConfig::load_from_file(found) {
                Ok(yaml) => yaml.apply_to_config(&mut config),
                Err(e) => skipped = Some(e),
            },
            (None, None) => {
                tracing::debug!("No {} found, using environment and defaults", CONFIG_FILENAME)
            }
        }

        config.validate()?;
        Ok((config, skipped))
    }

    fn apply_env_vars(&mut self) {
        let loader = EnvLoader::new(ENV_PREFIX);
        self.server_name = loader.load_string("SERVER_NAME", &self.server_name);
        self.log_level = loader.load_string("LOG_LEVEL", &self.log_level);
        if let Some(seed_file) = loader.load_path("SEED_FILE") {
            self.seed_file = Some(seed_file);
        }
    }

    /// Find `document-mcp.yaml` in the working directory or under `~/.config/document-mcp/`
    pub fn find_yaml_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(CONFIG_FILENAME)];
        if let Some(home_dir) = dirs::home_dir() {
            search_paths.push(
                home_dir
                    .join(".config")
                    .join("document-mcp")
                    .join(CONFIG_FILENAME),
            );
        }

        search_paths.into_iter().find(|path| path.is_file())
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server_name".to_string(),
                value: self.server_name.clone(),
                hint: "server_name cannot be empty".to_string(),
            });
        }
        self.tracing_level()?;
        Ok(())
    }

    /// The configured log level as a `tracing` level
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
                hint: "Expected one of: trace, debug, info, warn, error".to_string(),
            })
    }
}

/// Shape of `document-mcp.yaml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamlConfig {
    /// Server name override
    pub server_name: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed file override, relative paths resolve against the config file's directory
    pub seed_file: Option<PathBuf>,
}

impl YamlConfig {
    /// Load YAML configuration from a file path
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading YAML configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: YamlConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let (Some(seed_file), Some(dir)) = (&config.seed_file, path.parent()) {
            if seed_file.is_relative() {
                config.seed_file = Some(dir.join(seed_file));
            }
        }

        Ok(config)
    }

    /// Apply YAML values over an existing configuration
    pub fn apply_to_config(self, config: &mut DocumentMcpConfig) {
        if let Some(server_name) = self.server_name {
            config.server_name = server_name;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        if let Some(seed_file) = self.seed_file {
            config.seed_file = Some(seed_file);
        }
    }
}
