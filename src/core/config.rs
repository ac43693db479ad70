//! TOML configuration: prediction endpoint, optional request timeout, and
//! display preferences.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::{PredictorError, Result};

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "PREMIUM_PREDICTOR_CONFIG";

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prediction service settings.
    pub api: ApiConfig,
    /// Presentation settings.
    pub ui: UiConfig,
}

/// Prediction service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Full URL the prediction request is POSTed to.
    pub endpoint: String,
    /// Overall request timeout. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Timeout as a [`Duration`], if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Disable ANSI colors.
    pub no_color: bool,
    /// Use the high-contrast palette.
    pub high_contrast: bool,
}

impl Config {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                PredictorError::MissingConfig {
                    path: path.to_path_buf(),
                }
            } else {
                PredictorError::io(path, err)
            }
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve and load configuration.
    ///
    /// An explicit path wins over the environment value; with neither the
    /// built-in defaults are used.
    pub fn resolve(explicit: Option<&Path>, env_value: Option<OsString>) -> Result<Self> {
        match Self::resolve_path(explicit, env_value) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the configuration file to read, if any.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
    }

    /// Replace the endpoint and re-validate.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        self.api.endpoint = endpoint.into();
        self.validate()?;
        Ok(self)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.api.endpoint.trim();
        let has_scheme = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        let has_host = endpoint
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(PredictorError::InvalidConfig {
                details: format!(
                    "api.endpoint must be an http(s) URL, got {:?}",
                    self.api.endpoint
                ),
            });
        }
        if self.api.timeout_secs == Some(0) {
            return Err(PredictorError::InvalidConfig {
                details: "api.timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PredictorError::Serialization {
            context: "toml",
            details: e.to_string(),
        })
    }
}
