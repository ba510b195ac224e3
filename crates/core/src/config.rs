//! Policy for failures synthesized by [`Outcome::combine`](crate::Outcome::combine).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Error code used when `combine` receives no outcomes.
pub const DEFAULT_EMPTY_CODE: &str = "NO_RESULTS";

/// Error code used when every outcome handed to `combine` failed.
pub const DEFAULT_ALL_FAILED_CODE: &str = "NO_SUCCESS";

/// Configuration for `combine`'s synthesized failures.
///
/// Loadable from TOML or YAML; missing fields take their defaults.
///
/// ```
/// use railyard_core::CombinePolicy;
///
/// let policy = CombinePolicy::from_toml_str("all_failed_code = \"EXHAUSTED\"")?;
/// assert_eq!(policy.empty_code, "NO_RESULTS");
/// assert_eq!(policy.all_failed_code, "EXHAUSTED");
/// # Ok::<(), railyard_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinePolicy {
    /// Code for an empty input.
    #[serde(default = "default_empty_code")]
    pub empty_code: String,

    /// Code when no input succeeded.
    #[serde(default = "default_all_failed_code")]
    pub all_failed_code: String,

    /// Attach the input error codes under the `errors` metadata key.
    #[serde(default = "default_record_errors")]
    pub record_errors: bool,
}

impl Default for CombinePolicy {
    fn default() -> Self {
        Self {
            empty_code: default_empty_code(),
            all_failed_code: default_all_failed_code(),
            record_errors: default_record_errors(),
        }
    }
}

impl CombinePolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_empty_code(mut self, code: impl Into<String>) -> Self {
        self.empty_code = code.into();
        self
    }

    #[must_use]
    pub fn with_all_failed_code(mut self, code: impl Into<String>) -> Self {
        self.all_failed_code = code.into();
        self
    }

    #[must_use]
    pub const fn with_record_errors(mut self, record: bool) -> Self {
        self.record_errors = record;
        self
    }

    /// Validate the policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if either code is blank.
    pub fn validate(&self) -> Result<()> {
        if self.empty_code.trim().is_empty() {
            return Err(Error::invalid_config("empty_code must not be blank"));
        }
        if self.all_failed_code.trim().is_empty() {
            return Err(Error::invalid_config("all_failed_code must not be blank"));
        }
        Ok(())
    }

    /// Parse and validate a policy from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] on malformed input, or
    /// [`Error::InvalidConfig`] if the parsed policy is invalid.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let policy: Self = toml::from_str(input)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse and validate a policy from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::YamlParseFailed`] on malformed input, or
    /// [`Error::InvalidConfig`] if the parsed policy is invalid.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let policy: Self = serde_yaml::from_str(input)?;
        policy.validate()?;
        Ok(policy)
    }
}

fn default_empty_code() -> String {
    DEFAULT_EMPTY_CODE.to_string()
}

fn default_all_failed_code() -> String {
    DEFAULT_ALL_FAILED_CODE.to_string()
}

const fn default_record_errors() -> bool {
    true
}
