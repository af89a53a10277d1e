//! Application configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags. Every section and key is optional:
//!
//! ```toml
//! [window]
//! width = 1280.0
//! height = 900.0
//!
//! [services]
//! backend = "simulated"
//! latency_ms = 1000
//! fail_signups = false
//!
//! [logging]
//! level = "info"
//! file = "force-analytics.log"
//! stdout = true
//! ```

use std::path::{Path, PathBuf};

use force_core::ServiceConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: Option<String>,
    /// Log file to append to, in addition to stdout.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub services: ServiceConfig,
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub backend: Option<String>,
    pub latency_ms: Option<u64>,
    pub fail_signups: bool,
}

impl AppConfig {
    /// Parses a TOML document. `origin` only labels errors.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn apply_overrides(
        &mut self,
        overrides: &Overrides,
    ) {
        if let Some(level) = &overrides.log_level {
            self.logging.level = Some(level.clone());
        }
        if let Some(backend) = &overrides.backend {
            self.services.backend = backend.clone();
        }
        if let Some(latency_ms) = overrides.latency_ms {
            self.services.latency_ms = latency_ms;
        }
        if overrides.fail_signups {
            self.services.fail_signups = true;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.services.backend.trim().is_empty() {
            return Err(ConfigError::Invalid("services.backend is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_toml_str(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse("[services]\nlatency_ms = 0\n").unwrap();

        assert_eq!(config.services.latency_ms, 0);
        assert_eq!(config.services.backend, "simulated");
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.logging.stdout);
    }

    #[test]
    fn malformed_toml_names_file() {
        let error = parse("[window\nwidth = 1").unwrap_err();

        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains("test.toml"));
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let error = parse("[window]\nwidth = 0.0\n").unwrap_err();

        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = parse("[services]\nbackend = \"simulated\"\nlatency_ms = 250\n").unwrap();

        config.apply_overrides(&Overrides {
            log_level: Some("debug".to_string()),
            backend: None,
            latency_ms: Some(0),
            fail_signups: true,
        });

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.services.backend, "simulated");
        assert_eq!(config.services.latency_ms, 0);
        assert!(config.services.fail_signups);
    }
}
