//! Unit tests for `Outcome`.
//!
//! Covers construction (including every failure shape), the `map`/`flat_map`
//! short-circuit, elimination, step pipelines and opt-in failure reporting.


use thiserror::Error;

use crate::{FailureInfo, FailureRecord};

/// Stand-in for an error captured at an I/O boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("connection reset")]
struct ConnectionReset;

/// Domain record carrying a field beyond the canonical shape.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Overdrawn {
    info: FailureInfo,
    shortfall: u64,
}

impl FailureRecord for Overdrawn {
    fn code(&self) -> &str {
        self.info.code()
    }

    fn detail(&self) -> &str {
        self.info.detail()
    }
}
