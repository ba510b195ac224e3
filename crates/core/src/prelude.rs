//! Common imports.
//!
//! ```
//! use railyard_core::prelude::*;
//!
//! let outcome: Outcome<i32> = Outcome::fail("E_DOWN");
//! assert_eq!(outcome.branch(), Branch::Fail);
//! ```

pub use crate::branch::Branch;
pub use crate::command::{from_fn, Command};
pub use crate::config::CombinePolicy;
pub use crate::meta::MetaData;
pub use crate::outcome::Outcome;
