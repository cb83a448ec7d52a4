use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ChangelogError, Result};

/// Reserved group key holding the breaking-changes section title.
pub const BREAKING_KEY: &str = "breaking";

/// Reserved group key for commits without a conventional prefix.
pub const OTHER_KEY: &str = "other";

const DEFAULT_BREAKING_TITLE: &str = "Breaking Changes";

/// Candidate file names searched in the working directory, in order.
const LOCAL_CONFIG_FILES: [&str; 3] = [".changelog.yml", ".changelog.yaml", ".changelog.toml"];

/// Represents the complete configuration for git-changelog.
///
/// Loaded once before any repository access and passed by reference afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Filesystem location of the repository
    #[serde(default = "default_git_path", alias = "repository_path")]
    pub git_path: String,

    /// Commits whose message contains this substring are skipped
    #[serde(default, alias = "ignore_pattern")]
    pub ignore: String,

    /// Include the author column in table output
    #[serde(default = "default_show_author")]
    pub show_author: bool,

    #[serde(default)]
    pub commit_groups: CommitGroups,
}

fn default_git_path() -> String {
    ".".to_string()
}

fn default_show_author() -> bool {
    true
}

/// Commit-type grouping and section titles.
///
/// `title_maps` keeps declaration order, which drives section order.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CommitGroups {
    #[serde(default, alias = "group_titles")]
    pub title_maps: IndexMap<String, String>,

    /// Put commits with an unconfigured type into the `other` bucket instead of dropping them
    #[serde(default)]
    pub fold_unconfigured: bool,
}

impl CommitGroups {
    /// Explicitly configured title for a key, if any
    pub fn title_for(&self, key: &str) -> Option<&str> {
        self.title_maps
            .get(key)
            .map(String::as_str)
            .filter(|title| !title.is_empty())
    }

    /// Title of the breaking-changes section
    pub fn breaking_title(&self) -> String {
        self.title_for(BREAKING_KEY)
            .unwrap_or(DEFAULT_BREAKING_TITLE)
            .to_string()
    }

    /// Title of a type group, falling back to the capitalized key
    pub fn group_title(&self, key: &str) -> String {
        match self.title_for(key) {
            Some(title) => title.to_string(),
            None => capitalize(key),
        }
    }

    /// Whether a type has its own configured section
    pub fn is_configured(&self, key: &str) -> bool {
        key != BREAKING_KEY && self.title_maps.contains_key(key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            git_path: default_git_path(),
            ignore: String::new(),
            show_author: default_show_author(),
            commit_groups: CommitGroups::default(),
        }
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Loads configuration from file.
///
/// Attempts to locate the configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.changelog.yml`, `.changelog.yaml` or `.changelog.toml` in the current directory
/// 3. `.changelog.yml` in the user config directory
///
/// Files ending in `.toml` are parsed as TOML, everything else as YAML.
///
/// # Returns
/// * `Ok(Config)` - Parsed configuration
/// * `Err(ChangelogError::Config)` - If no file is found, or it cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => locate_config().ok_or_else(|| {
            ChangelogError::config(format!(
                "no configuration file found (looked for {})",
                LOCAL_CONFIG_FILES.join(", ")
            ))
        })?,
    };

    debug!(path = %path.display(), "loading configuration");
    let contents = fs::read_to_string(&path)
        .map_err(|e| ChangelogError::config(format!("cannot read {}: {}", path.display(), e)))?;

    parse_config(&path, &contents)
}

fn locate_config() -> Option<PathBuf> {
    LOCAL_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
        .or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join(".changelog.yml"))
                .filter(|path| path.exists())
        })
}

/// Parses configuration text, choosing the format from the file extension.
pub fn parse_config(path: &Path, contents: &str) -> Result<Config> {
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        toml::from_str(contents)
            .map_err(|e| ChangelogError::config(format!("invalid {}: {}", path.display(), e)))
    } else if contents.trim().is_empty() {
        Ok(Config::default())
    } else {
        serde_yaml::from_str(contents)
            .map_err(|e| ChangelogError::config(format!("invalid {}: {}", path.display(), e)))
    }
}
