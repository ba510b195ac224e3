//! Short-lived builder that dispatches a command on a matching branch.
//!
//! ```
//! use railyard_core::{from_fn, Branch, Outcome};
//!
//! let echo = from_fn(|args: Option<String>| args.unwrap_or_else(|| "no args provided".into()));
//! let failed: Outcome<i32> = Outcome::fail("fail");
//!
//! assert_eq!(failed.execute(&echo).on(Branch::Fail), Some("no args provided".to_string()));
//! assert_eq!(
//!     failed.execute(&echo).with_data("args provided".into()).on(Branch::Fail),
//!     Some("args provided".to_string())
//! );
//! assert_eq!(failed.execute(&echo).on(Branch::Success), None);
//! ```

use tracing::{debug, trace};

use crate::branch::Branch;
use crate::command::Command;
use crate::error::Result;
use crate::outcome::Outcome;

/// Binds an [`Outcome`] to a [`Command`] until a single [`Executor::on`] call.
///
/// Created by [`Outcome::execute`]. `on` consumes the executor, so each
/// dispatch needs a fresh `execute` call.
#[must_use = "an executor does nothing until `on` is called"]
pub struct Executor<'a, T, C: Command> {
    outcome: &'a Outcome<T>,
    command: &'a C,
    override_args: Option<C::Input>,
}

impl<'a, T, C: Command> Executor<'a, T, C> {
    pub(crate) const fn new(outcome: &'a Outcome<T>, command: &'a C) -> Self {
        Self {
            outcome,
            command,
            override_args: None,
        }
    }

    /// Input handed to the command on dispatch. Repeated calls overwrite it.
    pub fn with_data(mut self, args: C::Input) -> Self {
        if self.override_args.is_some() {
            trace!("replacing previously supplied command input");
        }
        self.override_args = Some(args);
        self
    }

    /// Run the command if the outcome is in `branch`.
    ///
    /// Returns `Some(output)` when the command ran and `None` when the branch
    /// was not taken. A command that returns an empty value still yields
    /// `Some`.
    pub fn on(self, branch: Branch) -> Option<C::Output> {
        if !branch.matches(self.outcome) {
            let actual = self.outcome.branch();
            debug!(requested = %branch, %actual, "branch not taken, command skipped");
            return None;
        }
        debug!(
            %branch,
            with_data = self.override_args.is_some(),
            "dispatching command"
        );
        Some(self.command.execute(self.override_args))
    }

    pub fn on_success(self) -> Option<C::Output> {
        self.on(Branch::Success)
    }

    pub fn on_fail(self) -> Option<C::Output> {
        self.on(Branch::Fail)
    }

    /// Like [`Executor::on`], with the branch given by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBranch`](crate::Error::UnknownBranch) for
    /// anything other than `"success"` or `"fail"`; the command is not run.
    pub fn on_str(self, branch: &str) -> Result<Option<C::Output>> {
        let branch = branch.parse::<Branch>()?;
        Ok(self.on(branch))
    }
}

impl<T: std::fmt::Debug, C: Command> std::fmt::Debug for Executor<'_, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("outcome", self.outcome)
            .field("with_data", &self.override_args.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::Error;

    /// Counts invocations and echoes its input.
    struct Spy {
        calls: Cell<usize>,
    }

    impl Spy {
        const fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Command for Spy {
        type Input = String;
        type Output = String;

        fn execute(&self, input: Option<String>) -> String {
            self.calls.set(self.calls.get().saturating_add(1));
            input.unwrap_or_else(|| "no args provided".to_string())
        }
    }

    #[test]
    fn test_dispatch_on_matching_branch_without_data() {
        let spy = Spy::new();
        let failed: Outcome<i32> = Outcome::fail("fail");

        assert_eq!(
            failed.execute(&spy).on(Branch::Fail),
            Some("no args provided".to_string())
        );
        assert_eq!(spy.calls.get(), 1);
    }

    #[test]
    fn test_dispatch_with_override() {
        let spy = Spy::new();
        let failed: Outcome<i32> = Outcome::fail("fail");

        let payload = failed.execute(&spy).with_data("x".into()).on_fail();
        assert_eq!(payload, Some("x".to_string()));
    }

    #[test]
    fn test_mismatched_branch_never_invokes() {
        let spy = Spy::new();
        let ok = Outcome::ok(1);
        let failed: Outcome<i32> = Outcome::fail("fail");

        assert_eq!(ok.execute(&spy).with_data("x".into()).on_fail(), None);
        assert_eq!(failed.execute(&spy).on_success(), None);
        assert_eq!(spy.calls.get(), 0);
    }

    #[test]
    fn test_last_with_data_wins() {
        let spy = Spy::new();
        let ok = Outcome::ok(1);

        let payload = ok
            .execute(&spy)
            .with_data("first".into())
            .with_data("second".into())
            .on_success();
        assert_eq!(payload, Some("second".to_string()));
    }

    #[test]
    fn test_empty_output_is_still_dispatched() {
        let nothing = crate::command::from_fn(|_: Option<()>| String::new());
        let ok = Outcome::ok(1);
        assert_eq!(ok.execute(&nothing).on_success(), Some(String::new()));
    }

    #[test]
    fn test_on_str_rejects_unknown_branch_before_dispatch() {
        let spy = Spy::new();
        let ok = Outcome::ok(1);

        assert_eq!(
            ok.execute(&spy).on_str("succes"),
            Err(Error::unknown_branch("succes"))
        );
        assert_eq!(spy.calls.get(), 0);
        assert_eq!(
            ok.execute(&spy).on_str("success"),
            Ok(Some("no args provided".to_string()))
        );
    }

    #[test]
    fn test_executors_are_independent() {
        let spy = Spy::new();
        let ok = Outcome::ok(1);

        let first = ok.execute(&spy).with_data("a".into());
        let second = ok.execute(&spy);
        assert_eq!(second.on_success(), Some("no args provided".to_string()));
        assert_eq!(first.on_success(), Some("a".to_string()));
        assert_eq!(spy.calls.get(), 2);
    }
}
