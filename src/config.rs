use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::player::normalize::DEFAULT_TRACK_URL_TEMPLATE;
use crate::source::SourceSpec;

pub const DEFAULT_PORT: u16 = 9863;
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub enabled: Option<bool>,
    pub port: Option<u16>,
    pub public: Option<bool>,
    pub source: Option<String>,
    pub timeout_ms: Option<u64>,
    pub track_url_template: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    pub enabled: bool,
    pub port: u16,
    pub public: bool,
    /// None when neither the CLI nor the file names one.
    pub source: Option<SourceSpec>,
    pub fetch_timeout: Duration,
    pub track_url_template: String,
}

impl Config {
    /// CLI flags win over the file, the file wins over defaults.
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        let timeout_ms = args
            .timeout_ms
            .or(file.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Config {
            enabled: file.enabled.unwrap_or(true),
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            public: args.public || file.public.unwrap_or(false),
            source: args
                .source
                .clone()
                .or(file.source)
                .filter(|s| !s.trim().is_empty())
                .map(|s| SourceSpec::parse(&s)),
            fetch_timeout: Duration::from_millis(timeout_ms),
            track_url_template: file
                .track_url_template
                .unwrap_or_else(|| DEFAULT_TRACK_URL_TEMPLATE.to_string()),
        }
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("nowplaying.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("nowplaying").join("config.toml");
        if user_config.exists() {
            return Some(user_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
