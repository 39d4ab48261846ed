//! Collecting the present values out of a sequence of `Maybe`s.

use super::Maybe;

/// Returns the carried values of every present entry, in input order.
///
/// Absent entries are dropped. Any number of them, including every entry or
/// an empty input, is fine.
///
/// ```
/// use outcome_flow::{Maybe, coalesce};
///
/// assert_eq!(coalesce([Maybe::some(0), Maybe::NONE, Maybe::some(3)]), vec![0, 3]);
/// assert!(coalesce::<u8, _>([]).is_empty());
/// ```
#[must_use]
pub fn coalesce<T, I>(maybes: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    maybes
        .into_iter()
        .filter_map(|maybe| maybe.match_with(Some, || None))
        .collect()
}
