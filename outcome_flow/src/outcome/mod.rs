//! Success-or-failure results as a closed two-variant type.
//!
//! An [`Outcome`] is either a *success* carrying a value or a *failure*
//! carrying a record, by default a [`FailureInfo`]. Failures propagate inertly
//! through [`Outcome::map`], [`Outcome::flat_map`] and [`Outcome::pipe`]; the
//! supplied functions are skipped entirely once a failure has occurred. Only
//! [`Outcome::match_with`] turns an outcome back into a plain value.
//!
//! Unlike [`Maybe::from_nullable`](crate::Maybe::from_nullable), success
//! construction never reinterprets its value: `Outcome::success(None::<u8>)` is
//! a success that happens to carry `None`.

mod constructors;
mod observe;
mod steps;

use std::fmt;

use crate::{FailureInfo, FailureRecord};

pub use steps::{Steps, pipe};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T, F> {
    Success(T),
    Failure(F),
}

/// The result of a computation that either succeeded or failed with a record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome<T, F = FailureInfo>(Repr<T, F>);

impl<T, F> Outcome<T, F> {
    /// Wraps a successful value exactly as given.
    pub const fn success(value: T) -> Self {
        Self(Repr::Success(value))
    }

    /// Wraps a pre-built failure record, such as a domain-specific one.
    ///
    /// The record must carry at least a code and a detail:
    ///
    /// ```compile_fail
    /// use outcome_flow::Outcome;
    ///
    /// let bare: Outcome<u8, ()> = Outcome::failure_from(());
    /// ```
    pub const fn failure_from(record: F) -> Self
    where
        F: FailureRecord,
    {
        Self(Repr::Failure(record))
    }

    /// Returns `true` for a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.0, Repr::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.0, Repr::Failure(_))
    }

    /// Borrows the value or the failure record without consuming the outcome.
    pub const fn as_ref(&self) -> Outcome<&T, &F> {
        match &self.0 {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(record) => Outcome(Repr::Failure(record)),
        }
    }

    /// Applies `f` to a successful value; a failure passes through untouched.
    pub fn map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(T) -> U,
    {
        match self.0 {
            Repr::Success(value) => Outcome::success(f(value)),
            Repr::Failure(record) => Outcome(Repr::Failure(record)),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// This is the short-circuit primitive: on a failure `f` is never invoked
    /// and the same failure is returned.
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// fn checked_inc(n: u8) -> Outcome<u8> {
    ///     n.checked_add(1)
    ///         .map_or_else(|| Outcome::failure("overflow", "math.overflow"), Outcome::success)
    /// }
    ///
    /// assert_eq!(Outcome::success(1).flat_map(checked_inc), Outcome::success(2));
    /// assert!(Outcome::success(u8::MAX).flat_map(checked_inc).is_failure());
    /// ```
    pub fn flat_map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(T) -> Outcome<U, F>,
    {
        match self.0 {
            Repr::Success(value) => f(value),
            Repr::Failure(record) => Outcome(Repr::Failure(record)),
        }
    }

    /// Converts the failure record; a success passes through untouched.
    ///
    /// The variant never changes, so a failed chain stays failed. The new
    /// record has the same minimal shape as the old one:
    ///
    /// ```compile_fail
    /// use outcome_flow::Outcome;
    ///
    /// let failed: Outcome<u8> = Outcome::failure("d", "c");
    /// let untyped = failed.map_failure(|_| 7_u32);
    /// ```
    pub fn map_failure<G, M>(self, f: M) -> Outcome<T, G>
    where
        G: FailureRecord,
        M: FnOnce(F) -> G,
    {
        match self.0 {
            Repr::Success(value) => Outcome::success(value),
            Repr::Failure(record) => Outcome(Repr::Failure(f(record))),
        }
    }

    /// Eliminates the outcome, running exactly one of the two handlers.
    pub fn match_with<R, S, H>(self, on_success: S, on_failure: H) -> R
    where
        S: FnOnce(T) -> R,
        H: FnOnce(F) -> R,
    {
        match self.0 {
            Repr::Success(value) => on_success(value),
            Repr::Failure(record) => on_failure(record),
        }
    }

    /// Threads the outcome through a tuple of one to six steps.
    ///
    /// Each step receives the previous step's value and returns a new
    /// outcome. The first failure ends the chain: later steps are never
    /// invoked and that failure is the result.
    ///
    /// ```
    /// use outcome_flow::Outcome;
    ///
    /// fn inc(n: i32) -> Outcome<i32> {
    ///     Outcome::success(n + 1)
    /// }
    ///
    /// fn double(n: i32) -> Outcome<i32> {
    ///     Outcome::success(n * 2)
    /// }
    ///
    /// assert_eq!(Outcome::success(1).pipe((inc, double)), Outcome::success(4));
    /// ```
    pub fn pipe<S>(self, steps: S) -> Outcome<S::Output, F>
    where
        S: Steps<T, F>,
    {
        steps.run(self)
    }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for Outcome<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Failure(record) => f.debug_tuple("Failure").field(record).finish(),
        }
    }
}

#[cfg(test)]
mod tests;
