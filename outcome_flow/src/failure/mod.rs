//! Structured failure records carried by [`Outcome`](crate::Outcome).

mod record;

use std::error::Error as StdError;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Maybe;

pub use record::FailureRecord;

/// A captured error attached to a failure as its underlying cause.
///
/// Shared so that failure records stay cheap to clone and `Send + Sync`.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// The canonical failure record.
///
/// `code` is a stable, machine-matchable discriminant and part of the public
/// contract of whatever produces it. `detail` is a human-readable description
/// and is not meant for branching. The underlying cause is optional; its
/// absence is [`Maybe::NONE`].
///
/// With the `serde` feature, `code` and `detail` serialize; the cause does
/// not, and a deserialized record has none.
///
/// # Examples
///
/// ```
/// use outcome_flow::FailureInfo;
///
/// let info = FailureInfo::new("card expired", "payment.declined");
/// assert_eq!(info.code(), "payment.declined");
/// assert_eq!(info.to_string(), "payment.declined: card expired");
/// assert!(info.underlying_cause().is_none());
/// ```
#[derive(Debug, Clone, Default, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{code}: {detail}")]
pub struct FailureInfo {
    code: String,
    detail: String,
    #[source]
    #[cfg_attr(feature = "serde", serde(skip))]
    cause: Option<Cause>,
}

impl FailureInfo {
    /// Builds a record without an underlying cause.
    #[must_use]
    pub fn new(detail: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            cause: None,
        }
    }

    /// Builds a record that captures `error` as its underlying cause.
    ///
    /// ```
    /// use std::error::Error;
    /// use outcome_flow::FailureInfo;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let info = FailureInfo::with_cause("could not save", "store.write", io);
    /// assert_eq!(info.source().map(ToString::to_string).as_deref(), Some("disk full"));
    /// ```
    #[must_use]
    pub fn with_cause<E>(detail: impl Into<String>, code: impl Into<String>, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_shared_cause(detail, code, Arc::new(error))
    }

    /// Builds a record around a cause that is already shared.
    #[must_use]
    pub fn with_shared_cause(
        detail: impl Into<String>,
        code: impl Into<String>,
        cause: Cause,
    ) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            cause: Some(cause),
        }
    }

    /// The machine-matchable discriminant.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable description.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The captured error, if one was attached.
    pub fn underlying_cause(&self) -> Maybe<&Cause> {
        Maybe::from_nullable(self.cause.as_ref())
    }
}

/// Records are equal when their code and detail match and their causes are
/// either both absent or the same shared error.
impl PartialEq for FailureInfo {
    fn eq(&self, other: &Self) -> bool {
        let same_cause = match (&self.cause, &other.cause) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        };
        self.code == other.code && self.detail == other.detail && same_cause
    }
}

impl Eq for FailureInfo {}

impl FailureRecord for FailureInfo {
    fn code(&self) -> &str {
        Self::code(self)
    }

    fn detail(&self) -> &str {
        Self::detail(self)
    }

    fn underlying_cause(&self) -> Maybe<&Cause> {
        Self::underlying_cause(self)
    }
}
