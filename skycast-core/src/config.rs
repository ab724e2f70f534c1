use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// API environment the client talks to. Selects the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    #[default]
    Production,
    Development,
}

impl ApiEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnvironment::Production => "production",
            ApiEnvironment::Development => "development",
        }
    }

    pub const fn all() -> &'static [ApiEnvironment] {
        &[ApiEnvironment::Production, ApiEnvironment::Development]
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Production => {
                "https://laravel-weather-api-6faba15eaee0.herokuapp.com/api"
            }
            ApiEnvironment::Development => "http://localhost:8000/api",
        }
    }
}

impl std::fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ApiEnvironment {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "production" => Ok(ApiEnvironment::Production),
            "development" => Ok(ApiEnvironment::Development),
            _ => Err(anyhow!(
                "Unknown environment '{value}'. Supported environments: production, development."
            )),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which API environment to talk to, unless `base_url` overrides it.
    pub environment: ApiEnvironment,

    /// Explicit base URL override. Mostly useful for tests.
    pub base_url: Option<String>,

    /// Location fetched on startup, before the user searches.
    pub default_location: String,

    /// Transport timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::default(),
            base_url: None,
            default_location: "Kenya".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// The effective base URL: the override when set, the environment's
    /// endpoint otherwise.
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.environment.base_url().to_string())
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
