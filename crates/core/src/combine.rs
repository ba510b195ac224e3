//! First-success aggregation over a sequence of outcomes.
//!
//! `combine` models a fallback chain: try A, then B, then C, and keep the first
//! that succeeded. Scanning stops at the first success, so later outcomes in a
//! lazy iterator are never produced.
//!
//! When nothing succeeds the result is a synthesized failure with a fixed code
//! from [`CombinePolicy`]:
//!
//! | input                | error code     | metadata                         |
//! |----------------------|----------------|----------------------------------|
//! | empty                | `NO_RESULTS`   | empty                            |
//! | every outcome failed | `NO_SUCCESS`   | `errors`: input codes, in order  |

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::CombinePolicy;
use crate::meta::MetaData;
use crate::outcome::Outcome;

/// Metadata key holding the input error codes of an all-failed combine.
pub const ERRORS_KEY: &str = "errors";

impl<T> Outcome<T> {
    /// Return the first successful outcome, using the default policy.
    #[must_use]
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::combine_with(outcomes, &CombinePolicy::default())
    }

    /// Return the first successful outcome, synthesizing failures per `policy`.
    #[must_use]
    pub fn combine_with<I>(outcomes: I, policy: &CombinePolicy) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut codes: Vec<Value> = Vec::new();

        for (position, outcome) in outcomes.into_iter().enumerate() {
            if outcome.is_ok() {
                trace!(position, "combine picked first success");
                return outcome;
            }
            if let Some(code) = outcome.error() {
                codes.push(Value::from(code));
            }
        }

        if codes.is_empty() {
            debug!(code = %policy.empty_code, "combine over empty input");
            return Self::fail(policy.empty_code.as_str());
        }

        debug!(
            code = %policy.all_failed_code,
            failures = codes.len(),
            "combine found no success"
        );
        let meta = if policy.record_errors {
            MetaData::new().with(ERRORS_KEY, Value::Array(codes))
        } else {
            MetaData::new()
        };
        Self::fail_with(policy.all_failed_code.as_str(), meta)
    }
}

impl<T> FromIterator<Outcome<T>> for Outcome<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Self::combine(iter)
    }
}
