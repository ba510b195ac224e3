//! The outcome value: success with optional data, or failure with an error code.
//!
//! Failure is carried as data, never raised. Callers inspect [`Outcome::is_ok`]
//! / [`Outcome::is_fail`] or attach a [`Command`] to a branch through
//! [`Outcome::execute`].
//!
//! # Example
//!
//! ```
//! use railyard_core::{MetaData, Outcome};
//!
//! let loaded = Outcome::ok_with(42, MetaData::new().with("source", "cache"));
//! assert!(loaded.is_ok());
//! assert_eq!(loaded.value(), Some(&42));
//!
//! let missing: Outcome<i32> = Outcome::fail("NOT_FOUND");
//! assert_eq!(missing.error(), Some("NOT_FOUND"));
//! assert!(missing.meta_data().is_empty());
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::branch::Branch;
use crate::command::Command;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::meta::MetaData;

/// Exactly one of the two states; illegal flag combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Success(Option<T>),
    Failure(String),
}

/// Immutable outcome of an operation that may succeed or fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    state: State<T>,
    meta: MetaData,
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `value`.
    #[must_use]
    pub fn ok(value: T) -> Self {
        Self::ok_with(value, MetaData::new())
    }

    /// Successful outcome carrying `value` and `meta`.
    #[must_use]
    pub const fn ok_with(value: T, meta: MetaData) -> Self {
        Self {
            state: State::Success(Some(value)),
            meta,
        }
    }

    /// Successful outcome for operations that produce no data.
    #[must_use]
    pub fn ok_none() -> Self {
        Self::ok_none_with(MetaData::new())
    }

    #[must_use]
    pub const fn ok_none_with(meta: MetaData) -> Self {
        Self {
            state: State::Success(None),
            meta,
        }
    }

    /// Failing outcome identified by `code`.
    #[must_use]
    pub fn fail(code: impl Into<String>) -> Self {
        Self::fail_with(code, MetaData::new())
    }

    /// Failing outcome identified by `code`, carrying `meta`.
    #[must_use]
    pub fn fail_with(code: impl Into<String>, meta: MetaData) -> Self {
        Self {
            state: State::Failure(code.into()),
            meta,
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    /// The branch this outcome is in.
    #[must_use]
    pub const fn branch(&self) -> Branch {
        match self.state {
            State::Success(_) => Branch::Success,
            State::Failure(_) => Branch::Fail,
        }
    }

    /// Success payload; `None` when failing or when built without data.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => value.as_ref(),
            State::Failure(_) => None,
        }
    }

    /// Failure code; `None` when succeeding.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(code) => Some(code.as_str()),
        }
    }

    #[must_use]
    pub const fn meta_data(&self) -> &MetaData {
        &self.meta
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => None,
        }
    }

    /// Convert into a std `Result`, dropping the metadata.
    ///
    /// # Errors
    ///
    /// Returns the failure code when the outcome is failing.
    pub fn into_result(self) -> std::result::Result<Option<T>, String> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(code) => Err(code),
        }
    }

    /// Bind `command` to this outcome. Nothing runs until [`Executor::on`].
    #[must_use]
    pub const fn execute<'a, C: Command>(&'a self, command: &'a C) -> Executor<'a, T, C> {
        Executor::new(self, command)
    }
}

impl<T: Clone> Outcome<T> {
    /// Structural snapshot with the `data`, `error`, `isOK`, `isFail` and
    /// `metaData` fields.
    #[must_use]
    pub fn to_object(&self) -> OutcomeObject<T> {
        OutcomeObject {
            data: self.value().cloned(),
            error: self.error().map(str::to_owned),
            is_ok: self.is_ok(),
            is_fail: self.is_fail(),
            meta_data: self.meta.clone(),
        }
    }
}

impl<T: Serialize> Outcome<T> {
    /// The serialized snapshot as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `T` fails to serialize.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<T, E: fmt::Display> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::fail(err.to_string()),
        }
    }
}

/// Plain snapshot of an [`Outcome`], field names preserved for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeObject<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(rename = "isOK")]
    pub is_ok: bool,
    #[serde(rename = "isFail")]
    pub is_fail: bool,
    #[serde(rename = "metaData", default)]
    pub meta_data: MetaData,
}

impl<T> TryFrom<OutcomeObject<T>> for Outcome<T> {
    type Error = Error;

    fn try_from(object: OutcomeObject<T>) -> Result<Self> {
        if object.is_ok == object.is_fail {
            return Err(Error::invalid_object("isOK and isFail must differ"));
        }
        match (object.is_ok, object.data, object.error) {
            (true, _, Some(code)) => Err(Error::invalid_object(format!(
                "successful outcome carries error '{code}'"
            ))),
            (true, data, None) => Ok(Self {
                state: State::Success(data),
                meta: object.meta_data,
            }),
            (false, Some(_), _) => Err(Error::invalid_object("failed outcome carries data")),
            (false, None, None) => Err(Error::invalid_object("failed outcome has no error")),
            (false, None, Some(code)) => Ok(Self::fail_with(code, object.meta_data)),
        }
    }
}

#[derive(Serialize)]
struct ObjectView<'a, T> {
    data: Option<&'a T>,
    error: Option<&'a str>,
    #[serde(rename = "isOK")]
    is_ok: bool,
    #[serde(rename = "isFail")]
    is_fail: bool,
    #[serde(rename = "metaData")]
    meta_data: &'a MetaData,
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ObjectView {
            data: self.value(),
            error: self.error(),
            is_ok: self.is_ok(),
            is_fail: self.is_fail(),
            meta_data: &self.meta,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = OutcomeObject::<T>::deserialize(deserializer)?;
        Self::try_from(object).map_err(serde::de::Error::custom)
    }
}
