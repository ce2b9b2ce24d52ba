use serde::{Deserialize, Serialize};

/// One recorded error against a breaker. Events are appended in call order,
/// so insertion order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    /// Wall-clock time of the failing call, in milliseconds since the epoch.
    pub timestamp_ms: u64,
    /// Short description of what failed, e.g. `"responseCode 503"`.
    pub cause: String,
}

impl ErrorEvent {
    pub fn from_response_code(code: i64, now_ms: u64) -> Self {
        ErrorEvent {
            timestamp_ms: now_ms,
            cause: format!("responseCode {}", code),
        }
    }
}
