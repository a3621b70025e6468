use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the directory holding the config file under the user config dir
const APP_DIR: &str = "dirtree";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Extensions listed when none are given on the command line (empty = all files)
    pub extensions: Vec<String>,
    /// Match extensions without regard to case
    pub ignore_case: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Color mode: auto, always, never
    pub color: String,
    /// Print the closing "Done" line after the tree
    pub end_marker: bool,
    /// File written by interactive mode when no name is entered
    pub default_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: "auto".to_string(),
            end_marker: true,
            default_file: PathBuf::from("temp.txt"),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the file under the
    /// user config directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let color = self.output.color.to_ascii_lowercase();
        if !matches!(color.as_str(), "auto" | "always" | "never") {
            return Err(ConfigError::Invalid(format!(
                "output.color must be auto, always or never (got '{}')",
                self.output.color
            )));
        }

        if self.output.default_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "output.default_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
