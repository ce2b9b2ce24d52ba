//! Time-based pruning of recorded errors.

use crate::core::base::ErrorEvent;

/// Drops events older than `time_range_seconds` before `now_ms`, preserving
/// the relative order of the remainder. Only the open-state evaluation path
/// calls this; errors accumulate unpruned while closed or half-open.
pub fn prune(errors: &mut Vec<ErrorEvent>, time_range_seconds: u64, now_ms: u64) {
    let cutoff = now_ms.saturating_sub(time_range_seconds.saturating_mul(1000));
    errors.retain(|event| event.timestamp_ms >= cutoff);
}
