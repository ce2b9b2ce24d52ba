use std::time::{SystemTime, UNIX_EPOCH};

pub fn is_blank(path: &str) -> bool {
    path.trim().is_empty()
}

/// Milliseconds since the Unix epoch. All windowing and recovery timing in
/// the breaker core compares stored timestamps against this clock.
pub fn curr_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
