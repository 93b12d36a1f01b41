//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument or its environment variable (handled by clap)
//! 2. TOML config file
//! 3. Compiled default

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::db::DATABASE_FILE;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MARQUEE_CONFIG";

pub const DEFAULT_PORT: u16 = 5780;
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_OMDB_API_KEY: &str = "26d161e9";
pub const DEFAULT_RESULT_COUNT: usize = 6;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// OMDb returns at most 10 hits per search page
pub const MAX_RESULT_COUNT: usize = 10;

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: Option<String>,
    pub result_count: Option<usize>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Load the platform config file if there is one
    ///
    /// A missing file is normal and yields defaults; an unreadable one is
    /// logged and also yields defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config file: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }
}

/// Values supplied on the command line (or via their environment variables)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: Option<String>,
    pub result_count: Option<usize>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub root_folder: PathBuf,
    pub port: u16,
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub result_count: usize,
    pub log_level: String,
}

impl ServiceConfig {
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Self {
        let result_count = overrides
            .result_count
            .or(file.result_count)
            .unwrap_or(DEFAULT_RESULT_COUNT);

        Self {
            root_folder: overrides
                .root_folder
                .or(file.root_folder)
                .unwrap_or_else(default_root_folder),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            omdb_api_key: overrides
                .omdb_api_key
                .or(file.omdb_api_key)
                .unwrap_or_else(|| DEFAULT_OMDB_API_KEY.to_string()),
            omdb_base_url: overrides
                .omdb_base_url
                .or(file.omdb_base_url)
                .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string()),
            result_count: clamp_result_count(result_count),
            log_level: file
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Location of the preferences database
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }
}

/// Keep the fan-out width within what one search page can supply
pub fn clamp_result_count(count: usize) -> usize {
    if count == 0 || count > MAX_RESULT_COUNT {
        warn!(
            "result_count {} out of range, clamping to 1..={}",
            count, MAX_RESULT_COUNT
        );
    }
    count.clamp(1, MAX_RESULT_COUNT)
}

/// Config file to read, if one exists
///
/// `MARQUEE_CONFIG` wins; otherwise the per-user file, then on Linux the
/// system-wide `/etc/marquee/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let user_config = dirs::config_dir().map(|d| d.join("marquee").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/marquee/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default root folder
pub fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\marquee
        dirs::data_local_dir()
            .map(|d| d.join("marquee"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\marquee"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/marquee
        dirs::data_dir()
            .map(|d| d.join("marquee"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/marquee"))
    } else {
        // ~/.local/share/marquee
        dirs::data_local_dir()
            .map(|d| d.join("marquee"))
            .unwrap_or_else(|| PathBuf::from("./marquee_data"))
    }
}
