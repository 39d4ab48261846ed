//! Opt-in observation of failures.
//!
//! Nothing here runs unless the caller asks for it; the outcome is returned
//! unchanged either way.

use crate::FailureRecord;

use super::{Outcome, Repr};

impl<T, F> Outcome<T, F> {
    /// Runs `f` against the failure record, if any, and returns the outcome.
    ///
    /// `f` never runs on a success.
    pub fn inspect_failure<I>(self, f: I) -> Self
    where
        I: FnOnce(&F),
    {
        if let Repr::Failure(record) = &self.0 {
            f(record);
        }
        self
    }
}

impl<T, F: FailureRecord> Outcome<T, F> {
    /// Reports a failure as a `tracing` warning with structured fields.
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// let saved: Outcome<()> = Outcome::failure("disk full", "store.write").log_failure();
    /// assert!(saved.is_failure());
    /// ```
    pub fn log_failure(self) -> Self {
        self.inspect_failure(report)
    }
}

fn report<F: FailureRecord>(record: &F) {
    let cause = record
        .underlying_cause()
        .match_or(ToString::to_string, String::new());
    tracing::warn!(
        code = %record.code(),
        detail = %record.detail(),
        cause = %cause,
        "outcome failed"
    );
}
