//! Application configuration management
//!
//! Settings live in `config.toml` inside the platform config directory. A
//! missing file means every setting takes its default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{GhsError, Result};
use crate::github::pagination::{
    FetchOptions, PageScope, DEFAULT_MAX_CONCURRENCY, DEFAULT_PAGE_DELAY, MAX_PAGE_SIZE,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API base URL for GitHub Enterprise, api.github.com when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Items requested per page (1-100) of team, team repository and review
    /// listings. Pull request pages always hold 100.
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Pause between two page requests of one listing, in seconds. Pull
    /// request listings never pause for less than 2.
    #[serde(default = "default_page_delay_secs")]
    pub page_delay_secs: u64,

    /// Repository lookups allowed in flight at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Read every page of team, team repository and review listings
    #[serde(default)]
    pub all_pages: bool,
}

fn default_page_size() -> u8 {
    MAX_PAGE_SIZE
}

fn default_page_delay_secs() -> u64 {
    DEFAULT_PAGE_DELAY.as_secs()
}

fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            page_size: default_page_size(),
            page_delay_secs: default_page_delay_secs(),
            max_concurrency: default_max_concurrency(),
            all_pages: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "ghs", "ghs")
            .ok_or_else(|| GhsError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(GhsError::Config(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }
        if self.max_concurrency == 0 {
            return Err(GhsError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Render as TOML, the way it would be written to disk
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GhsError::Toml(e.to_string()))
    }

    /// Retrieval settings derived from this configuration
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            page_delay: Duration::from_secs(self.page_delay_secs),
            max_concurrency: self.max_concurrency.max(1),
            page_scope: if self.all_pages {
                PageScope::All
            } else {
                PageScope::FirstPage
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.page_delay_secs, 2);
        assert_eq!(config.max_concurrency, 8);
        assert!(!config.all_pages);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_concurrency = 3").unwrap();
        writeln!(file, "all_pages = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.max_concurrency, 3);
        assert!(config.all_pages);
        assert_eq!(config.page_size, 100);

        let options = config.fetch_options();
        assert_eq!(options.page_scope, PageScope::All);
        assert_eq!(options.page_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(GhsError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_toml_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = \"lots\"").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(GhsError::Toml(_))
        ));
    }

    #[test]
    fn test_to_toml_omits_unset_url() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("page_delay_secs = 2"));
        assert!(!rendered.contains("api_url"));
    }
}
