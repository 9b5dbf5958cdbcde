use moodpet_core::SessionSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8001/api";

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Backend base URL, including any path prefix (e.g. "/api")
    pub api_url: ConfigValue<String>,
    /// Name given to the pet when the backend has none yet
    pub pet_name: ConfigValue<String>,
    /// How long a notification stays visible
    pub notification_ms: ConfigValue<u64>,
    /// How long the action pulse plays
    pub pulse_ms: ConfigValue<u64>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    pet_name: Option<String>,
    notification_ms: Option<u64>,
    pulse_ms: Option<u64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let defaults = SessionSettings::default();

        // Start with defaults
        let mut api_url = ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default);
        let mut pet_name = ConfigValue::new(defaults.default_pet_name, ConfigSource::Default);
        let mut notification_ms = ConfigValue::new(
            defaults.notification_duration.as_millis() as u64,
            ConfigSource::Default,
        );
        let mut pulse_ms = ConfigValue::new(
            defaults.pulse_duration.as_millis() as u64,
            ConfigSource::Default,
        );
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.api_url {
                api_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(name) = file_config.pet_name {
                pet_name = ConfigValue::new(name, ConfigSource::File);
            }
            if let Some(ms) = file_config.notification_ms {
                notification_ms = ConfigValue::new(ms, ConfigSource::File);
            }
            if let Some(ms) = file_config.pulse_ms {
                pulse_ms = ConfigValue::new(ms, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(url) = std::env::var("MOODPET_API_URL") {
            api_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(name) = std::env::var("MOODPET_PET_NAME") {
            pet_name = ConfigValue::new(name, ConfigSource::Environment);
        }

        if api_url.value.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "api_url".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if pet_name.value.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "pet_name".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_url,
            pet_name,
            notification_ms,
            pulse_ms,
            config_file,
        })
    }

    /// Controller settings derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_pet_name: self.pet_name.value.trim().to_string(),
            notification_duration: Duration::from_millis(self.notification_ms.value),
            pulse_duration: Duration::from_millis(self.pulse_ms.value),
            ..SessionSettings::default()
        }
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/moodpet/
    /// - macOS: ~/Library/Application Support/moodpet/
    /// - Windows: %APPDATA%/moodpet/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moodpet")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(key, reason) => {
                write!(f, "Invalid config value for '{}': {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
