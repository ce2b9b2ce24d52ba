use super::{constant::*, ConfigParams};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    // app_name represents the name of the current running service.
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: DEFAULT_APP_NAME.into(),
        }
    }
}

// LogConfig represents the configuration items of logging.
#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct LogConfig {
    // config_file is the path of the logger configuration file,
    // only consumed by the log4rs adapter.
    pub config_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { config_file: None }
    }
}

/// `ConfigEntity` is the top-level configuration of the crate: application
/// identity, logging setup and the default params applied to breakers
/// created without explicit params.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct ConfigEntity {
    pub app: AppConfig,
    pub log: LogConfig,
    pub defaults: ConfigParams,
}

impl ConfigEntity {
    pub fn new() -> Self {
        ConfigEntity::default()
    }

    pub fn check(&self) -> Result<()> {
        if self.app.app_name.is_empty() {
            return Err(Error::msg("empty app name"));
        }
        if self.defaults.max_error_count == 0 {
            return Err(Error::msg("invalid max_error_count"));
        }
        if self.defaults.time_range_seconds == 0 {
            return Err(Error::msg("invalid time_range_seconds"));
        }
        if self.defaults.half_open_successes == 0 {
            return Err(Error::msg("invalid half_open_successes"));
        }
        Ok(())
    }
}

impl fmt::Display for ConfigEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmtted = serde_json::to_string_pretty(self).unwrap();
        write!(f, "{}", fmtted)
    }
}
