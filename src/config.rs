use crate::conventional::{default_breaking_markers, DEFAULT_HEADER_LINES};
use crate::error::{GitverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up in the current directory and in
/// the user config directory.
pub const CONFIG_FILE_NAME: &str = "gitver.toml";

/// Represents the complete configuration for gitver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_initial_version() -> String {
    "0.0.0".to_string()
}

fn default_header_lines() -> usize {
    DEFAULT_HEADER_LINES
}

/// Release tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    /// Literal prefix every release tag starts with
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,

    /// Version assumed when the repository has no release tag yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            prefix: default_tag_prefix(),
            initial_version: default_initial_version(),
        }
    }
}

/// Layout of the `git log` message blocks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Metadata lines preceding the subject line
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            header_lines: default_header_lines(),
        }
    }
}

/// Configuration for commit classification.
///
/// `include` restricts which type tags are considered at all; an empty list
/// keeps every type.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default = "default_breaking_markers")]
    pub breaking_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            include: Vec::new(),
            breaking_markers: default_breaking_markers(),
        }
    }
}

impl Config {
    /// Parse `tags.initial_version`
    pub fn initial_version(&self) -> Result<semver::Version> {
        semver::Version::parse(&self.tags.initial_version).map_err(|e| {
            GitverError::invalid_version(format!(
                "initial version '{}' is not valid SemVer: {}",
                self.tags.initial_version, e
            ))
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitver.toml` in current directory
/// 3. `gitver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| GitverError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
