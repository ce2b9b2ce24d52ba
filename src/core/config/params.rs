use super::constant::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `ConfigParams` encompasses the tunables of one circuit breaker.
///
/// Params are fixed when the breaker is first created; check calls carrying
/// different params for an existing identifier do not reconfigure it.
/// Partial configuration merges over the defaults with struct update syntax:
///
/// ```rust
/// use fusegate::core::config::ConfigParams;
/// let params = ConfigParams {
///     max_error_count: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigParams {
    /// Number of in-window errors that trips the breaker.
    pub max_error_count: usize,
    /// Sliding window (in seconds) used to discount old errors while open.
    pub time_range_seconds: u64,
    /// Successful probes required to close from half-open.
    pub half_open_successes: u64,
    /// Delay (in seconds) before an open breaker starts probing.
    pub recover_period_seconds: u64,
    /// Which response codes count as errors, see [`classify`](crate::core::breaker::classify).
    /// Comma-separated integers and inclusive `[lo-hi]` ranges (brackets optional).
    pub return_codes_spec: String,
    /// Carried for callers that track response times; not evaluated by the core.
    pub max_response_time_ms: u64,
    /// Carried for callers that treat transport failures specially; not
    /// evaluated by the core.
    pub communication_error_flag: bool,
}

impl Default for ConfigParams {
    fn default() -> Self {
        ConfigParams {
            max_error_count: DEFAULT_MAX_ERROR_COUNT,
            time_range_seconds: DEFAULT_TIME_RANGE_SECONDS,
            half_open_successes: DEFAULT_HALF_OPEN_SUCCESSES,
            recover_period_seconds: DEFAULT_RECOVER_PERIOD_SECONDS,
            return_codes_spec: DEFAULT_RETURN_CODES_SPEC.into(),
            max_response_time_ms: DEFAULT_MAX_RESPONSE_TIME_MS,
            communication_error_flag: DEFAULT_COMMUNICATION_ERROR_FLAG,
        }
    }
}

impl fmt::Display for ConfigParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmtted = serde_json::to_string_pretty(self).unwrap();
        write!(f, "{}", fmtted)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_table() {
        let params = ConfigParams::default();
        assert_eq!(params.max_error_count, 10);
        assert_eq!(params.time_range_seconds, 300);
        assert_eq!(params.half_open_successes, 5);
        assert_eq!(params.recover_period_seconds, 30);
        assert_eq!(params.return_codes_spec, "[300-999]");
        assert_eq!(params.max_response_time_ms, 100);
        assert!(params.communication_error_flag);
    }

    #[test]
    fn partial_merge_over_defaults() {
        let params = ConfigParams {
            max_error_count: 1,
            time_range_seconds: 3,
            ..Default::default()
        };
        assert_eq!(params.max_error_count, 1);
        assert_eq!(params.time_range_seconds, 3);
        // untouched fields keep the defaults
        assert_eq!(params.half_open_successes, 5);
        assert_eq!(params.return_codes_spec, "[300-999]");
    }

    #[test]
    fn partial_yaml_merges_over_defaults() {
        let params: ConfigParams =
            serde_yaml::from_str("max_error_count: 2\nreturn_codes_spec: \"500\"").unwrap();
        assert_eq!(params.max_error_count, 2);
        assert_eq!(params.return_codes_spec, "500");
        assert_eq!(params.recover_period_seconds, 30);
    }
}
