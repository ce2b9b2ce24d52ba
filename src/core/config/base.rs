use super::{constant::*, ConfigEntity, ConfigParams};
use crate::{logging, utils, Result};
use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

thread_local! {
    static GLOBAL_CONFIG: RefCell<ConfigEntity> = RefCell::new(ConfigEntity::new());
}

pub fn reset_global_config(entity: ConfigEntity) {
    GLOBAL_CONFIG.with(|c| {
        *c.borrow_mut() = entity;
    });
}

/// Initialize with built-in defaults, overridden by system environment.
pub fn init_default() -> Result<()> {
    init_with_config_file(&mut String::new())
}

// init_with_config_file loads general configuration from the YAML file under
// the provided path and initializes the logging adapter.
pub fn init_with_config_file(config_path: &mut String) -> Result<()> {
    apply_yaml_config_file(config_path)?;
    override_items_from_system_env()?;
    logging::logger_init(log_config_file());
    logging::info!("[Config] App name resolved, app_name {}", app_name());
    Ok(())
}

// apply_yaml_config_file loads general configuration from the given YAML file.
fn apply_yaml_config_file(config_path: &mut String) -> Result<()> {
    // Priority: system environment > YAML file > default config
    if utils::is_blank(config_path) {
        // If the config file path is absent, try to resolve it from the system env.
        *config_path = env::var(CONF_FILE_PATH_ENV_KEY).unwrap_or_else(|_| CONFIG_FILENAME.into());
    }
    load_global_config_from_yaml_file(config_path)?;
    Ok(())
}

fn load_global_config_from_yaml_file(path_str: &str) -> Result<()> {
    if path_str == CONFIG_FILENAME {
        // use the default global config.
        return Ok(());
    }
    let path = Path::new(path_str);
    if !path.exists() {
        return Err(crate::Error::msg(
            "fusegate YAML configuration file does not exist!",
        ));
    }
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    let entity: ConfigEntity = serde_yaml::from_str(&content)?;
    entity.check()?;
    logging::info!("[Config] Resolving config from file, file {}", path_str);
    reset_global_config(entity);
    Ok(())
}

fn override_items_from_system_env() -> Result<()> {
    let app_name = env::var(APP_NAME_ENV_KEY).unwrap_or_default();
    GLOBAL_CONFIG
        .try_with(|c| -> Result<()> {
            let mut cfg = c.borrow_mut();
            if !utils::is_blank(&app_name) {
                cfg.app.app_name = app_name;
            }
            cfg.check()?;
            Ok(())
        })
        .unwrap()?;
    Ok(())
}

#[inline]
pub fn app_name() -> String {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().app.app_name.clone())
        .unwrap_or_else(|_| DEFAULT_APP_NAME.into())
}

#[inline]
pub fn log_config_file() -> Option<String> {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().log.config_file.clone())
        .ok()
        .flatten()
}

/// Params applied to breakers created without explicit params.
#[inline]
pub fn default_breaker_params() -> ConfigParams {
    GLOBAL_CONFIG
        .try_with(|c| c.borrow().defaults.clone())
        .unwrap_or_default()
}
