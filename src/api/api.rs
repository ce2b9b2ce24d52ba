use crate::core::base::{Outcome, Route};
use crate::core::breaker::BreakerState;
use crate::core::config::{self, ConfigParams};
use crate::core::store::Store;
use crate::{logging, utils};

/// `check_circuit_breaker` asks whether a call for `identifier` may proceed.
///
/// The breaker state is loaded from `store`, lazily created on first sight
/// (with `params` merged over the defaults; existing breakers are *not*
/// reconfigured by later calls), the due transition is applied, and the
/// state is written back. The returned [`Outcome`] carries the snapshot and
/// the route: `Next` to proceed, `Open` to short-circuit, `Error` when the
/// identifier is blank (in which case nothing is read or written).
///
/// Calls for different identifiers are independent. Calls for the *same*
/// identifier are one read-modify-write cycle each and are not serialized
/// here; the caller must guarantee at-most-one-in-flight per identifier.
pub fn check_circuit_breaker(
    store: &dyn Store,
    identifier: &str,
    params: Option<ConfigParams>,
) -> Outcome {
    if utils::is_blank(identifier) {
        return Outcome::without_state(Route::new_missing_parameter("identifier"));
    }
    let mut state = match store.get(identifier) {
        Some(existing) => existing,
        None => BreakerState::new(
            identifier,
            params.unwrap_or_else(config::default_breaker_params),
        ),
    };
    let route = state.check_at(utils::curr_time_millis());
    store.set(identifier, state.clone());
    Outcome::new(state, route)
}

/// `update_circuit_breaker` reports the response code of a finished call.
///
/// The code is classified against the breaker's `return_codes_spec`; errors
/// are appended to the window (possibly tripping the breaker), successes
/// bump the probe counter. The route is `Next` unless a parameter is
/// missing. An update for an identifier that was never checked is a no-op:
/// no state is invented for it and the outcome carries no snapshot.
///
/// Same concurrency contract as [`check_circuit_breaker`].
pub fn update_circuit_breaker(
    store: &dyn Store,
    identifier: &str,
    response_code: Option<i64>,
) -> Outcome {
    if utils::is_blank(identifier) {
        return Outcome::without_state(Route::new_missing_parameter("identifier"));
    }
    let code = match response_code {
        Some(code) => code,
        None => return Outcome::without_state(Route::new_missing_parameter("responseCode")),
    };
    let mut state = match store.get(identifier) {
        Some(existing) => existing,
        None => {
            logging::debug!(
                "[Breaker] update for unknown identifier {:?} ignored",
                identifier
            );
            return Outcome::without_state(Route::Next);
        }
    };
    let route = state.record_at(code, utils::curr_time_millis());
    store.set(identifier, state.clone());
    Outcome::new(state, route)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::breaker::State;
    use crate::core::store::InMemoryStore;
    use mockall::*;

    mock! {
        pub(crate) Store {}
        impl Store for Store {
            fn get(&self, id: &str) -> Option<BreakerState>;
            fn set(&self, id: &str, state: BreakerState);
        }
    }

    #[test]
    fn blank_identifier_touches_no_state() {
        // no expectations: any store access would panic the mock
        let store = MockStore::new();
        let outcome = check_circuit_breaker(&store, "  ", None);
        assert!(outcome.route.is_error());
        assert!(outcome.snapshot.is_none());
        assert_eq!(
            outcome.route.error_msg(),
            Some("missing required parameter: identifier")
        );

        let outcome = update_circuit_breaker(&store, "", Some(500));
        assert!(outcome.route.is_error());
    }

    #[test]
    fn missing_response_code() {
        let store = MockStore::new();
        let outcome = update_circuit_breaker(&store, "abc", None);
        assert!(outcome.route.is_error());
        assert_eq!(
            outcome.route.error_msg(),
            Some("missing required parameter: responseCode")
        );
        assert!(outcome.snapshot.is_none());
    }

    #[test]
    fn update_unknown_identifier_is_noop() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .withf(|id| id == "ghost")
            .once()
            .returning(|_| None);
        // no expect_set: writing would panic
        let outcome = update_circuit_breaker(&store, "ghost", Some(500));
        assert_eq!(outcome.route, Route::Next);
        assert!(outcome.snapshot.is_none());
    }

    #[test]
    fn first_check_creates_closed_breaker() {
        let store = InMemoryStore::default();
        let outcome = check_circuit_breaker(&store, "abc", None);
        assert_eq!(outcome.route, Route::Next);
        let snapshot = outcome.snapshot.unwrap();
        assert_eq!(snapshot.id, "abc");
        assert_eq!(snapshot.status, State::Closed);
        assert_eq!(snapshot.last_route, Route::Next);
        assert_eq!(snapshot.params, ConfigParams::default());
        assert!(store.get("abc").is_some());
    }

    #[test]
    fn existing_breaker_keeps_its_params() {
        let store = InMemoryStore::default();
        let first = ConfigParams {
            max_error_count: 3,
            ..Default::default()
        };
        check_circuit_breaker(&store, "abc", Some(first.clone()));
        let second = ConfigParams {
            max_error_count: 99,
            ..Default::default()
        };
        let outcome = check_circuit_breaker(&store, "abc", Some(second));
        assert_eq!(outcome.snapshot.unwrap().params, first);
    }

    #[test]
    fn trip_and_short_circuit() {
        let store = InMemoryStore::default();
        let params = ConfigParams {
            max_error_count: 1,
            // keep it open for the whole test regardless of timing
            recover_period_seconds: 3_600,
            time_range_seconds: 3_600,
            ..Default::default()
        };
        check_circuit_breaker(&store, "abc", Some(params));
        let outcome = update_circuit_breaker(&store, "abc", Some(503));
        assert_eq!(outcome.route, Route::Next);
        assert_eq!(outcome.snapshot.unwrap().status, State::Open);

        let outcome = check_circuit_breaker(&store, "abc", None);
        assert_eq!(outcome.route, Route::Open);
        assert_eq!(outcome.snapshot.unwrap().status, State::Open);
    }

    #[test]
    fn successes_accumulate_across_calls() {
        let store = InMemoryStore::default();
        check_circuit_breaker(&store, "abc", None);
        update_circuit_breaker(&store, "abc", Some(200));
        let outcome = update_circuit_breaker(&store, "abc", Some(204));
        let snapshot = outcome.snapshot.unwrap();
        assert_eq!(snapshot.success_count, 2);
        assert!(snapshot.errors.is_empty());
        // classification of both codes is now cached in the stored state
        assert_eq!(store.get("abc").unwrap().classification_cache.len(), 2);
    }

    #[test]
    fn identifiers_are_independent() {
        let store = InMemoryStore::default();
        let params = ConfigParams {
            max_error_count: 1,
            recover_period_seconds: 3_600,
            time_range_seconds: 3_600,
            ..Default::default()
        };
        check_circuit_breaker(&store, "a", Some(params));
        check_circuit_breaker(&store, "b", None);
        update_circuit_breaker(&store, "a", Some(500));
        assert!(check_circuit_breaker(&store, "a", None).route.is_open());
        assert!(check_circuit_breaker(&store, "b", None).route.is_next());
    }
}
