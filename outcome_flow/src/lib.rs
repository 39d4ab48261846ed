//! Closed optional and result types for explicit, exception-free control flow.
//!
//! The crate provides two small algebraic types:
//!
//! * [`Maybe`] represents presence or absence of a value.
//! * [`Outcome`] represents success with a value or failure with a structured
//!   [`FailureInfo`] record (or any other [`FailureRecord`]).
//!
//! Neither type exposes its variants. Values go in through the sanctioned
//! constructors and come out through `match_with`, so a carried value is never
//! observed without a handler for every variant. Absence and failure are
//! inert data: they flow unchanged through `map`, `flat_map` and `pipe` until a
//! terminal `match_with` decides what to do with them.
//!
//! ```
//! use outcome_flow::{FailureInfo, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<u16> {
//!     Outcome::from_result(raw.parse::<u16>(), "port is not a number", "config.port")
//! }
//!
//! fn non_zero(port: u16) -> Outcome<u16> {
//!     if port == 0 {
//!         Outcome::failure("port must be positive", "config.port")
//!     } else {
//!         Outcome::success(port)
//!     }
//! }
//!
//! let port = parse("8080").pipe((non_zero,));
//! let described = port.match_with(
//!     |p| format!("listening on {p}"),
//!     |f: FailureInfo| format!("rejected ({})", f.code()),
//! );
//! assert_eq!(described, "listening on 8080");
//! ```

mod failure;
pub mod maybe;
pub mod outcome;

pub use failure::{Cause, FailureInfo, FailureRecord};
pub use maybe::{Maybe, coalesce, from_nullable, none, some};
pub use outcome::{Outcome, Steps, pipe};

/// Convenience re-exports for glob imports.
///
/// ```
/// use outcome_flow::prelude::*;
///
/// let doubled = some(21).map(|n| n * 2);
/// assert_eq!(doubled.match_or(|n| n, 0), 42);
/// ```
pub mod prelude {
    pub use crate::failure::{Cause, FailureInfo, FailureRecord};
    pub use crate::maybe::{Maybe, coalesce, from_nullable, none, some};
    pub use crate::outcome::{Outcome, Steps, pipe};
}
