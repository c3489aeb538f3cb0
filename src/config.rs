//! Compiler configuration loaded from ~/.waml/config.yaml.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codegen::{GeneratorOptions, DEFAULT_CONTEXT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier bound to the audio context in generated scripts.
    #[serde(default = "default_context")]
    pub context: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Console logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub colorize: bool,
    /// Filter directive, e.g. `info` or `waml=debug`. `RUST_LOG` overrides it.
    #[serde(default = "default_level")]
    pub level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(io::Error),

    /// The file is not valid YAML for [`Config`]
    Yaml(serde_yaml::Error),

    /// `context` is not a JavaScript identifier
    InvalidContext(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{e}"),
            ConfigError::Yaml(e) => write!(f, "invalid YAML: {e}"),
            ConfigError::InvalidContext(name) => {
                write!(f, "context '{name}' is not a valid identifier")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::InvalidContext(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Standard config location (~/.waml/config.yaml).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waml").join("config.yaml"))
    }

    /// Load `path` if it exists. Used for the standard location, where a
    /// missing file means defaults.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::from_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Load from an explicit path; a missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            context: self.context.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if is_identifier(&self.context) {
            Ok(())
        } else {
            Err(ConfigError::InvalidContext(self.context.clone()))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: default_context(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colorize: true,
            level: default_level(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid_start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == '$';
    match chars.next() {
        Some(first) if valid_start(first) => {
            chars.all(|c| valid_start(c) || c.is_ascii_digit())
        }
        _ => false,
    }
}
