//! Failure constructors and boundary conversions for [`Outcome`].
//!
//! The four failure shapes are distinct named constructors:
//!
//! | constructor | record |
//! |---|---|
//! | [`Outcome::failure`] | `detail`, `code`, no cause |
//! | [`Outcome::failure_with_cause`] | `detail`, `code`, captured error |
//! | [`Outcome::failure_from`] | a pre-built [`FailureRecord`] of any type |
//! | [`Outcome::empty_failure`] | empty `detail` and `code`, no cause |

use std::error::Error as StdError;

use crate::{FailureInfo, FailureRecord, Maybe};

use super::Outcome;

impl<T> Outcome<T> {
    /// A failure with the given description and discriminant and no cause.
    ///
    /// ```
    /// use outcome_flow::{FailureInfo, Outcome};
    ///
    /// let failed: Outcome<u8> = Outcome::failure("d", "c");
    /// assert_eq!(failed, Outcome::failure_from(FailureInfo::new("d", "c")));
    /// ```
    pub fn failure(detail: impl Into<String>, code: impl Into<String>) -> Self {
        Self::failure_from(FailureInfo::new(detail, code))
    }

    /// A failure that captures `error` as its underlying cause.
    pub fn failure_with_cause<E>(
        detail: impl Into<String>,
        code: impl Into<String>,
        error: E,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::failure_from(FailureInfo::with_cause(detail, code, error))
    }

    /// A failure whose detail and code are both empty.
    pub fn empty_failure() -> Self {
        Self::failure_from(FailureInfo::default())
    }

    /// Converts a `Result` at an I/O or parsing boundary.
    ///
    /// `Ok` becomes a success. `Err` becomes a failure with the given detail
    /// and code, keeping the error as its underlying cause.
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// let parsed = Outcome::from_result("forty".parse::<u32>(), "not a number", "input.nan");
    /// assert!(parsed.is_failure());
    /// ```
    pub fn from_result<E>(
        result: Result<T, E>,
        detail: impl Into<String>,
        code: impl Into<String>,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure_with_cause(detail, code, error),
        }
    }
}

impl<T, F: FailureRecord> Outcome<T, F> {
    /// Lifts an optional value, building the failure only when it is absent.
    ///
    /// ```
    /// use outcome_flow::{FailureInfo, Maybe, Outcome};
    ///
    /// let user = Outcome::from_maybe(Maybe::<&str>::NONE, || {
    ///     FailureInfo::new("no such user", "user.missing")
    /// });
    /// assert!(user.is_failure());
    /// ```
    pub fn from_maybe<N>(maybe: Maybe<T>, on_none: N) -> Self
    where
        N: FnOnce() -> F,
    {
        maybe.match_with(Self::success, || Self::failure_from(on_none()))
    }
}
