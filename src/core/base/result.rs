//! Routing results returned by the breaker operations.

use crate::core::breaker::BreakerState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `Route` is the decision a breaker operation hands back to the caller:
/// continue with the protected call, short-circuit it, or reject the
/// invocation itself as invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The call may proceed.
    Next,
    /// The breaker is open; the call should be short-circuited.
    Open,
    /// The invocation failed validation; carries a human-readable message
    /// naming the missing field. No state was read or written.
    Error(String),
}

impl Default for Route {
    fn default() -> Route {
        Route::Next
    }
}

impl Route {
    pub fn new_missing_parameter(field: &str) -> Self {
        Route::Error(format!("missing required parameter: {}", field))
    }

    pub fn is_next(&self) -> bool {
        matches!(self, Route::Next)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Route::Open)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Route::Error(_))
    }

    pub fn error_msg(&self) -> Option<&str> {
        match self {
            Route::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Next => write!(f, "Route::Next"),
            Route::Open => write!(f, "Route::Open"),
            Route::Error(msg) => write!(f, "Route::Error: {}", msg),
        }
    }
}

/// `Outcome` pairs the state snapshot with the computed route. The snapshot
/// is absent when validation failed before any state was touched, and on an
/// update for an identifier that was never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub snapshot: Option<BreakerState>,
    pub route: Route,
}

impl Outcome {
    pub fn new(snapshot: BreakerState, route: Route) -> Self {
        Outcome {
            snapshot: Some(snapshot),
            route,
        }
    }

    pub fn without_state(route: Route) -> Self {
        Outcome {
            snapshot: None,
            route,
        }
    }
}
