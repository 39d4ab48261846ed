//! The minimal shape every failure record satisfies.

use std::sync::Arc;

use crate::Maybe;

use super::{Cause, FailureInfo};

/// Capability shared by [`FailureInfo`] and domain-specific failure records.
///
/// Domain records usually embed a [`FailureInfo`] for the common fields and
/// add their own. Records with several kinds can be an enum, giving callers a
/// second discriminant to match on after checking [`code`](Self::code).
///
/// # Examples
///
/// ```
/// use outcome_flow::{FailureInfo, FailureRecord, Outcome};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum LookupFailure {
///     Missing(FailureInfo),
///     Throttled { info: FailureInfo, retry_after_secs: u32 },
/// }
///
/// impl FailureRecord for LookupFailure {
///     fn code(&self) -> &str {
///         match self {
///             Self::Missing(info) | Self::Throttled { info, .. } => info.code(),
///         }
///     }
///
///     fn detail(&self) -> &str {
///         match self {
///             Self::Missing(info) | Self::Throttled { info, .. } => info.detail(),
///         }
///     }
/// }
///
/// let throttled: Outcome<String, LookupFailure> = Outcome::failure_from(LookupFailure::Throttled {
///     info: FailureInfo::new("slow down", "lookup.throttled"),
///     retry_after_secs: 30,
/// });
/// let wait = throttled.match_with(
///     |_| 0,
///     |failure| match failure {
///         LookupFailure::Throttled { retry_after_secs, .. } => retry_after_secs,
///         LookupFailure::Missing(_) => 0,
///     },
/// );
/// assert_eq!(wait, 30);
/// ```
pub trait FailureRecord {
    /// Stable, machine-matchable discriminant.
    fn code(&self) -> &str;

    /// Human-readable description.
    fn detail(&self) -> &str;

    /// The captured error behind this failure, if any.
    fn underlying_cause(&self) -> Maybe<&Cause> {
        Maybe::NONE
    }

    /// Projects the record onto the canonical [`FailureInfo`] shape.
    ///
    /// Useful before logging or serializing a domain record. The cause, when
    /// present, is shared rather than copied.
    fn to_failure_info(&self) -> FailureInfo {
        self.underlying_cause().match_with(
            |cause| FailureInfo::with_shared_cause(self.detail(), self.code(), Arc::clone(cause)),
            || FailureInfo::new(self.detail(), self.code()),
        )
    }
}

impl<R: FailureRecord + ?Sized> FailureRecord for &R {
    fn code(&self) -> &str {
        (**self).code()
    }

    fn detail(&self) -> &str {
        (**self).detail()
    }

    fn underlying_cause(&self) -> Maybe<&Cause> {
        (**self).underlying_cause()
    }
}
