//! The two branches a command can be attached to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::outcome::Outcome;

/// Declared outcome a dispatch is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Success,
    Fail,
}

impl Branch {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
        }
    }

    /// Whether `outcome` is in the state this branch names.
    #[must_use]
    pub const fn matches<T>(self, outcome: &Outcome<T>) -> bool {
        match self {
            Self::Success => outcome.is_ok(),
            Self::Fail => outcome.is_fail(),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "fail" => Ok(Self::Fail),
            other => Err(Error::unknown_branch(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_branches() {
        assert_eq!("success".parse::<Branch>(), Ok(Branch::Success));
        assert_eq!("fail".parse::<Branch>(), Ok(Branch::Fail));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Success".parse::<Branch>(),
            Err(Error::unknown_branch("Success"))
        );
        assert!("failure".parse::<Branch>().is_err());
        assert!("".parse::<Branch>().is_err());
    }

    #[test]
    fn test_matches_follows_outcome_state() {
        let ok = Outcome::ok(1);
        let failed: Outcome<i32> = Outcome::fail("E_DOWN");

        assert!(Branch::Success.matches(&ok));
        assert!(!Branch::Fail.matches(&ok));
        assert!(Branch::Fail.matches(&failed));
        assert!(!Branch::Success.matches(&failed));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for branch in [Branch::Success, Branch::Fail] {
            assert_eq!(branch.to_string().parse::<Branch>(), Ok(branch));
        }
    }
}
