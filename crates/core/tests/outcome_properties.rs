//! Property-based tests for outcome invariants using proptest.
//!
//! Properties verified:
//! - Exactly one of the success/failure states holds for every factory input
//! - `combine` returns the first success, or a failure carrying every input code
//! - Snapshots survive a JSON round trip unchanged

use proptest::prelude::*;
use railyard_core::{ERRORS_KEY, MetaData, Outcome, OutcomeObject};
use serde_json::Value;

fn meta_strategy() -> impl Strategy<Value = MetaData> {
    prop::collection::btree_map("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,16}", 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        (any::<i32>(), meta_strategy()).prop_map(|(v, m)| Outcome::ok_with(v, m)),
        ("[A-Z_]{1,12}", meta_strategy()).prop_map(|(e, m)| Outcome::fail_with(e, m)),
    ]
}

// ==========================================================================
// PROPERTY: Factories set exactly one state
// ==========================================================================

proptest! {
    #[test]
    fn prop_ok_state(value in any::<i32>(), meta in meta_strategy()) {
        let outcome = Outcome::ok_with(value, meta.clone());
        prop_assert!(outcome.is_ok());
        prop_assert!(!outcome.is_fail());
        prop_assert_eq!(outcome.value(), Some(&value));
        prop_assert_eq!(outcome.error(), None);
        prop_assert_eq!(outcome.meta_data(), &meta);
    }

    #[test]
    fn prop_fail_state(code in "[A-Z_]{1,12}", meta in meta_strategy()) {
        let outcome: Outcome<i32> = Outcome::fail_with(code.clone(), meta.clone());
        prop_assert!(outcome.is_fail());
        prop_assert!(!outcome.is_ok());
        prop_assert_eq!(outcome.value(), None);
        prop_assert_eq!(outcome.error(), Some(code.as_str()));
        prop_assert_eq!(outcome.meta_data(), &meta);
    }
}

// ==========================================================================
// PROPERTY: combine picks the first success
// ==========================================================================

proptest! {
    #[test]
    fn prop_combine_first_success(outcomes in prop::collection::vec(outcome_strategy(), 0..8)) {
        let expected = outcomes.iter().find(|o| o.is_ok()).cloned();
        let codes: Vec<Value> = outcomes
            .iter()
            .filter_map(|o| o.error().map(Value::from))
            .collect();
        let combined = Outcome::combine(outcomes.clone());

        match expected {
            Some(first) => {
                prop_assert_eq!(combined, first);
            }
            None if outcomes.is_empty() => {
                prop_assert_eq!(combined.error(), Some("NO_RESULTS"));
            }
            None => {
                prop_assert_eq!(combined.error(), Some("NO_SUCCESS"));
                prop_assert_eq!(
                    combined.meta_data().get(ERRORS_KEY),
                    Some(&Value::Array(codes))
                );
            }
        }
    }
}

// ==========================================================================
// PROPERTY: snapshot round trip
// ==========================================================================

proptest! {
    #[test]
    fn prop_snapshot_round_trip(outcome in outcome_strategy()) {
        let text = serde_json::to_string(&outcome)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let object: OutcomeObject<i32> = serde_json::from_str(&text)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&object, &outcome.to_object());

        let back = Outcome::try_from(object)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, outcome);
    }

    #[test]
    fn prop_snapshot_flags_disagree(outcome in outcome_strategy()) {
        let object = outcome.to_object();
        prop_assert_ne!(object.is_ok, object.is_fail);
        prop_assert_eq!(object.error.is_some(), object.is_fail);
    }
}
