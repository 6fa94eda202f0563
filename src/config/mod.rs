// ABOUTME: Configuration management for teapot
// Loads cache, UI and output settings from TOML files layered over defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Structure render cache
    #[serde(default)]
    pub cache: CacheSettings,

    /// Terminal UI
    #[serde(default)]
    pub ui: UiSettings,

    /// Where the generated teapot.yml goes
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entry time-to-live in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// How often the background task drops expired entries
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

impl CacheSettings {
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub const fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Event loop tick in milliseconds; also paces the generating animation
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl UiSettings {
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            file_name: default_file_name(),
        }
    }
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL.as_secs()
}

fn default_cleanup_interval_secs() -> u64 {
    60
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    "teapot.yml".to_string()
}

/// Same shape as [`AppConfig`] with every field optional, so a file only
/// overrides what it actually sets.
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    #[serde(default)]
    cache: PartialCache,
    #[serde(default)]
    ui: PartialUi,
    #[serde(default)]
    output: PartialOutput,
}

#[derive(Debug, Default, Deserialize)]
struct PartialCache {
    max_entries: Option<usize>,
    ttl_secs: Option<u64>,
    cleanup_interval_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialUi {
    tick_rate_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialOutput {
    directory: Option<PathBuf>,
    file_name: Option<String>,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load a single explicit file over the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::read_partial(path)?);
        Ok(config)
    }

    /// Paths are applied in order; later files win. Missing files are skipped.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut config = Self::default();
        for path in paths {
            if path.exists() {
                config.merge(Self::read_partial(path)?);
            }
        }
        Ok(config)
    }

    fn read_partial(path: &Path) -> Result<PartialConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::get_user_config_dir()?;
        fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. User config (~/.teapot/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 2. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".teapot").join("config.toml"));
        }

        paths
    }

    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".teapot"))
    }

    fn merge(&mut self, other: PartialConfig) {
        if let Some(max_entries) = other.cache.max_entries {
            self.cache.max_entries = max_entries;
        }
        if let Some(ttl_secs) = other.cache.ttl_secs {
            self.cache.ttl_secs = ttl_secs;
        }
        if let Some(interval) = other.cache.cleanup_interval_secs {
            self.cache.cleanup_interval_secs = interval;
        }
        if let Some(tick_rate_ms) = other.ui.tick_rate_ms {
            self.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(directory) = other.output.directory {
            self.output.directory = directory;
        }
        if let Some(file_name) = other.output.file_name {
            self.output.file_name = file_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.cache.max_entries, 50);
        assert_eq!(config.cache.ttl(), Duration::from_secs(300));
        assert_eq!(config.cache.cleanup_interval_secs, 60);
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.output.file_name, "teapot.yml");
    }

    #[test]
    fn test_later_file_overrides_earlier_fields_only() {
        let dir = TempDir::new().unwrap();
        let user = write(
            &dir,
            "user.toml",
            "[cache]\nmax_entries = 10\nttl_secs = 30\n\n[ui]\ntick_rate_ms = 50\n",
        );
        let local = write(&dir, "local.toml", "[cache]\nttl_secs = 5\n");

        let config = AppConfig::load_from_paths(&[user, local]).unwrap();
        assert_eq!(config.cache.max_entries, 10);
        assert_eq!(config.cache.ttl_secs, 5);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.output, OutputSettings::default());
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from_paths(&[dir.path().join("nope.toml")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[cache\n");
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn test_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "teapot.toml",
            "[output]\ndirectory = \"out\"\nfile_name = \"custom.yml\"\n",
        );
        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.output.file_name, "custom.yml");
        assert_eq!(config.cache, CacheSettings::default());
    }
}
