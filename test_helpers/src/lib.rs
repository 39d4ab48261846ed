//! Test helpers shared across crates in the outcome-flow workspace.
//!
//! The combinators under test promise to invoke caller-supplied functions at
//! most once, and never on an absent or failed path. These helpers make such
//! promises observable:
//!
//! - [`calls`] counts and orders invocations of wrapped closures.
//! - [`logs`] captures `tracing` output emitted while a closure runs.

pub mod calls;
pub mod logs;

pub use calls::{CallCounter, CallLog};
pub use logs::capture_logs;
