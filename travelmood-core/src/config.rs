use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Presentation and runtime settings. The classification rules and the alert
/// threshold are fixed constants, not configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            min_window_width: 800.0,
            min_window_height: 600.0,
            log_filter: "travelmood=debug,travelmood_core=debug,gui=debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::InvalidFormat {
                details: e.to_string(),
            },
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file if it exists; any problem falls back to the
    /// built-in defaults so a missing or broken file never blocks startup.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::FileNotFound { .. }) => {
                debug!("No configuration file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "window_width/window_height".to_string(),
                value: format!("{}x{}", self.window_width, self.window_height),
            });
        }
        if self.min_window_width > self.window_width || self.min_window_height > self.window_height
        {
            return Err(ConfigError::InvalidValue {
                field: "min_window_width/min_window_height".to_string(),
                value: format!("{}x{}", self.min_window_width, self.min_window_height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.window_width, 1200.0);
        assert_eq!(config.window_height, 800.0);
        assert!(config.log_filter.contains("travelmood"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config: AppConfig = toml::from_str("window_width = 900.0").unwrap();
        assert_eq!(config.window_width, 900.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.window_height, 800.0);
    }

    #[test]
    fn test_validate_rejects_non_positive_window() {
        let config = AppConfig {
            window_width: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/travelmood.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
