//! # fusegate
//!
//! A per-identifier circuit breaker. Each identifier names one breaker whose
//! state is held in an external keyed [`Store`](core::store::Store); on every
//! call the state is loaded, a transition is applied and the state is written
//! back together with a routing decision.
//!
//! Two operations form the entire surface:
//!
//! - [`check_circuit_breaker`](api::check_circuit_breaker) asks whether a call
//!   for an identifier may proceed. It answers with a [`Route`](core::base::Route):
//!   `Next` (proceed), `Open` (short-circuit) or `Error` (invalid input).
//! - [`update_circuit_breaker`](api::update_circuit_breaker) reports the
//!   response code of a finished call, which is classified against the
//!   breaker's configured code ranges and recorded as an error or a success.
//!
//! A breaker starts closed, opens once enough errors accumulate inside the
//! configured time window, waits out a recovery period, and then probes in
//! half-open state where traffic is let through in a deterministic
//! pass/block alternation until enough probes succeed.
//!
//! ## Example
//!
//! ```rust
//! use fusegate::api::{check_circuit_breaker, update_circuit_breaker};
//! use fusegate::core::store::InMemoryStore;
//!
//! let store = InMemoryStore::default();
//! let outcome = check_circuit_breaker(&store, "billing-api", None);
//! if outcome.route.is_next() {
//!     // perform the call, then report how it went:
//!     update_circuit_breaker(&store, "billing-api", Some(503));
//! }
//! ```
//!
//! ## Configuration
//!
//! Breakers are parameterized by [`ConfigParams`](core::config::ConfigParams),
//! fixed at creation time; later checks never reconfigure an existing breaker.
//! Global defaults (and logging setup) can be loaded from a YAML file via
//! [`init_with_config_file`](core::config::init_with_config_file).

/// Public operations of the crate.
pub mod api;
/// Core implementation: the breaker state machine, the response-code
/// classifier, the error window and the store contract.
pub mod core;
/// Adapters for different logging crates.
pub mod logging;
// Utility functions.
pub mod utils;

// re-export preludes
pub use crate::core::*;
pub use api::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
