//! Outcome values with explicit success/failure, side-channel metadata, and
//! commands dispatched on the branch that was actually taken.
//!
//! Key pieces:
//!
//! - **Outcome**: immutable success-with-data or failure-with-code, plus
//!   [`MetaData`]
//! - **Executor**: binds a [`Command`] to an outcome and runs it only on the
//!   matching [`Branch`]
//! - **combine**: first-success-wins aggregation over a fallback chain
//!
//! # Example
//!
//! ```
//! use railyard_core::{from_fn, Branch, MetaData, Outcome};
//!
//! let primary: Outcome<u32> = Outcome::fail("PRIMARY_DOWN");
//! let replica = Outcome::ok_with(7, MetaData::new().with("source", "replica"));
//!
//! let picked = Outcome::combine([primary, replica]);
//! assert_eq!(picked.value(), Some(&7));
//!
//! let report = from_fn(|n: Option<u32>| format!("read {}", n.unwrap_or_default()));
//! assert_eq!(
//!     picked.execute(&report).with_data(7).on(Branch::Success),
//!     Some("read 7".to_string())
//! );
//! assert_eq!(picked.execute(&report).on(Branch::Fail), None);
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod branch;
pub mod combine;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod meta;
pub mod outcome;
pub mod prelude;

pub use branch::Branch;
pub use combine::ERRORS_KEY;
pub use command::{from_fn, Command, FnCommand};
pub use config::{CombinePolicy, DEFAULT_ALL_FAILED_CODE, DEFAULT_EMPTY_CODE};
pub use error::{Error, Result};
pub use executor::Executor;
pub use meta::MetaData;
pub use outcome::{Outcome, OutcomeObject};
