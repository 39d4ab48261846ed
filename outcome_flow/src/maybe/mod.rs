//! Optional values as a closed two-variant type.
//!
//! [`Maybe`] is either *some* value or *none*. The variants are private: a
//! `Maybe` is built with [`Maybe::some`], [`Maybe::from_nullable`] or
//! [`Maybe::NONE`], transformed with [`Maybe::map`] and [`Maybe::flat_map`],
//! and eliminated with [`Maybe::match_with`] or [`Maybe::match_or`].

mod gather;
#[cfg(feature = "serde")]
mod wire;

use std::fmt;

pub use gather::coalesce;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T> {
    None,
    Some(T),
}

/// An optional value that can only be read by handling both variants.
///
/// # Examples
///
/// ```
/// use outcome_flow::Maybe;
///
/// let greeting = Maybe::from_nullable(std::env::var("GREETING").ok())
///     .map(|g| g.to_uppercase())
///     .match_with(|g| g, || "HELLO".to_owned());
/// assert!(!greeting.is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Maybe<T>(Repr<T>);

impl<T> Maybe<T> {
    /// The empty value. Assignable to any `Maybe<T>`.
    pub const NONE: Self = Self(Repr::None);

    /// Wraps a value that is known to be present.
    pub const fn some(value: T) -> Self {
        Self(Repr::Some(value))
    }

    /// Lifts a nullable input into a `Maybe`.
    ///
    /// This is the single point where absent inputs are funnelled into the
    /// type: `None` becomes [`Maybe::NONE`], so a `Some` never wraps absence.
    ///
    /// ```
    /// use outcome_flow::Maybe;
    ///
    /// assert!(Maybe::<u8>::from_nullable(None).is_none());
    /// assert!(Maybe::from_nullable(Some(3)).is_some());
    /// ```
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::NONE, Self::some)
    }

    /// Returns `true` when a value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self.0, Repr::Some(_))
    }

    /// Returns `true` when no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.0, Repr::None)
    }

    /// Borrows the carried value without consuming the `Maybe`.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match &self.0 {
            Repr::Some(value) => Maybe::some(value),
            Repr::None => Maybe::NONE,
        }
    }

    /// Applies `f` to the carried value.
    ///
    /// `f` runs at most once and never runs on the `None` path.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.0 {
            Repr::Some(value) => Maybe::some(f(value)),
            Repr::None => Maybe::NONE,
        }
    }

    /// Chains an operation that may itself produce no value.
    ///
    /// ```
    /// use outcome_flow::Maybe;
    ///
    /// let halve = |n: u32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::NONE };
    /// assert_eq!(Maybe::some(8).flat_map(halve), Maybe::some(4));
    /// assert_eq!(Maybe::some(7).flat_map(halve), Maybe::NONE);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.0 {
            Repr::Some(value) => f(value),
            Repr::None => Maybe::NONE,
        }
    }

    /// Eliminates the `Maybe`, running exactly one of the two handlers.
    ///
    /// `on_none` is only evaluated when no value is present.
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.0 {
            Repr::Some(value) => on_some(value),
            Repr::None => on_none(),
        }
    }

    /// Eliminates the `Maybe`, using `fallback` as-is when no value is present.
    pub fn match_or<R, S>(self, on_some: S, fallback: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        match self.0 {
            Repr::Some(value) => on_some(value),
            Repr::None => fallback,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::NONE
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Some(value) => f.debug_tuple("Some").field(value).finish(),
            Repr::None => f.write_str("None"),
        }
    }
}

/// Wraps a present value. See [`Maybe::some`].
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// The empty value. See [`Maybe::NONE`].
pub const fn none<T>() -> Maybe<T> {
    Maybe::NONE
}

/// Lifts a nullable input. See [`Maybe::from_nullable`].
pub fn from_nullable<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from_nullable(value)
}
