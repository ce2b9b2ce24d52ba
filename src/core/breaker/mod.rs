//!  Circuit Breaker State Machine:
//!
//!                          error recorded while the window is saturated
//!
//!             +-----------------------------------------------------------------------+
//!             |                                                                       |
//!             |                                                                       v
//!     +----------------+                   +----------------+  recovery delay  +----------------+
//!     |                |                   |                |<-----------------|                |
//!     |                |  enough probes    |                |                  |                |
//!     |     Closed     |<------------------|    HalfOpen    |                  |      Open      |
//!     |                |   succeeded       |                |  probe failed    |                |
//!     |                |                   |                +----------------->|                |
//!     +----------------+                   +----------------+                  +----------------+
//!             ^                                                                        |
//!             +------------------------------------------------------------------------+
//!                          window drained below the error threshold
//!
//! One state record exists per identifier, held in an external
//! [`Store`](crate::core::store::Store). The transitions are pure over an
//! injected clock (`now_ms`): `check_at` evaluates routing, `record_at`
//! accounts a finished call's response code.

pub mod classify;
pub mod window;

pub use classify::*;
pub use window::*;

use crate::core::base::{ErrorEvent, Route};
use crate::core::config::ConfigParams;
use crate::logging;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// States of the circuit breaker state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Closed,
    HalfOpen,
    Open,
}

impl Default for State {
    fn default() -> State {
        State::Closed
    }
}

/// `BreakerState` is the full per-identifier record: the machine state plus
/// the error window, the probe counter and the memoized classification of
/// response codes against this breaker's `return_codes_spec`.
///
/// The whole record is the snapshot handed back to callers; it is plain
/// data, serializable, and carries no interior mutability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerState {
    /// The identifier naming this breaker.
    pub id: String,
    pub status: State,
    /// Recorded errors, insertion order = chronological. Pruned only while
    /// evaluating the open state; cleared only on half-open -> closed.
    pub errors: Vec<ErrorEvent>,
    /// Successful probes seen. Reset to 0 exactly on entering half-open; not
    /// reset when a failed probe reopens the breaker.
    pub success_count: u64,
    /// Response code -> "is error", scoped to this identifier. Stable for
    /// the breaker's lifetime since params never change after creation.
    pub classification_cache: HashMap<i64, bool>,
    /// Time of the most recent transition into `Open`; `None` until first
    /// opened.
    pub opened_at: Option<u64>,
    /// Fixed at creation, never reconfigured by later calls.
    pub params: ConfigParams,
    /// The most recently computed route, part of the snapshot.
    pub last_route: Route,
}

impl BreakerState {
    pub fn new(id: impl Into<String>, params: ConfigParams) -> Self {
        BreakerState {
            id: id.into(),
            status: State::default(),
            errors: Vec::new(),
            success_count: 0,
            classification_cache: HashMap::new(),
            opened_at: None,
            params,
            last_route: Route::default(),
        }
    }

    /// Judges `code` against `return_codes_spec`, memoizing the verdict so
    /// the range spec is parsed against each distinct code at most once
    /// per breaker.
    pub fn classify(&mut self, code: i64) -> bool {
        if let Some(&known) = self.classification_cache.get(&code) {
            return known;
        }
        let is_error = classify::spec_matches(&self.params.return_codes_spec, code);
        self.classification_cache.insert(code, is_error);
        is_error
    }

    /// Evaluates whether a call may proceed at `now_ms` and applies any due
    /// transition. Records the route in `last_route`.
    pub fn check_at(&mut self, now_ms: u64) -> Route {
        let route = match self.status {
            State::Closed => Route::Next,
            State::Open => self.evaluate_open(now_ms),
            State::HalfOpen => self.evaluate_half_open(),
        };
        self.last_route = route.clone();
        route
    }

    /// Accounts the response code of a finished call at `now_ms`. An error
    /// code is appended to the window and may trip the breaker; a success
    /// bumps the probe counter. The route is always `Next`.
    pub fn record_at(&mut self, code: i64, now_ms: u64) -> Route {
        if self.classify(code) {
            self.errors.push(ErrorEvent::from_response_code(code, now_ms));
            // A failed probe reopens immediately; otherwise tripping requires
            // a saturated window.
            if self.status == State::HalfOpen || self.errors.len() >= self.params.max_error_count {
                self.transform_to_open(now_ms);
            }
        } else {
            self.success_count += 1;
        }
        self.last_route = Route::Next;
        Route::Next
    }

    fn evaluate_open(&mut self, now_ms: u64) -> Route {
        // opened_at is set on every transition into Open; 0 would make the
        // recovery delay trivially elapsed.
        let opened_at = self.opened_at.unwrap_or(0);
        if now_ms.saturating_sub(opened_at)
            >= self.params.recover_period_seconds.saturating_mul(1000)
        {
            self.transform_to_half_open();
            // single-call fallthrough: the same check continues as a probe
            return self.evaluate_half_open();
        }
        window::prune(&mut self.errors, self.params.time_range_seconds, now_ms);
        if self.errors.len() < self.params.max_error_count {
            self.transform_to_closed();
            Route::Next
        } else {
            Route::Open
        }
    }

    fn evaluate_half_open(&mut self) -> Route {
        if self.success_count >= self.params.half_open_successes {
            // only this exit clears the window
            self.errors.clear();
            self.transform_to_closed();
            return Route::Next;
        }
        // deterministic pass/block alternation by probe parity
        if self.success_count % 2 == 0 {
            Route::Next
        } else {
            Route::Open
        }
    }

    fn transform_to_open(&mut self, now_ms: u64) {
        let prev = self.status;
        self.status = State::Open;
        self.opened_at = Some(now_ms);
        logging::debug!("[Breaker {}] {:?} -> Open", self.id, prev);
    }

    fn transform_to_half_open(&mut self) {
        let prev = self.status;
        self.status = State::HalfOpen;
        self.success_count = 0;
        logging::debug!("[Breaker {}] {:?} -> HalfOpen", self.id, prev);
    }

    fn transform_to_closed(&mut self) {
        let prev = self.status;
        self.status = State::Closed;
        logging::debug!("[Breaker {}] {:?} -> Closed", self.id, prev);
    }
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmtted = serde_json::to_string_pretty(self).unwrap();
        write!(f, "{}", fmtted)
    }
}
