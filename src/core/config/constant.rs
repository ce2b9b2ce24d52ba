pub const CONF_FILE_PATH_ENV_KEY: &str = "FUSEGATE_CONFIG_FILE_PATH";
pub const APP_NAME_ENV_KEY: &str = "FUSEGATE_APP_NAME";

// If the config file path is kept at this placeholder, the built-in
// defaults are used without touching the filesystem.
pub const CONFIG_FILENAME: &str = "fusegate.yml";

pub const DEFAULT_APP_NAME: &str = "unknown_service";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Defaults table for breaker params.
pub const DEFAULT_MAX_ERROR_COUNT: usize = 10;
pub const DEFAULT_TIME_RANGE_SECONDS: u64 = 300;
pub const DEFAULT_HALF_OPEN_SUCCESSES: u64 = 5;
pub const DEFAULT_RECOVER_PERIOD_SECONDS: u64 = 30;
pub const DEFAULT_RETURN_CODES_SPEC: &str = "[300-999]";
pub const DEFAULT_MAX_RESPONSE_TIME_MS: u64 = 100;
pub const DEFAULT_COMMUNICATION_ERROR_FLAG: bool = true;
