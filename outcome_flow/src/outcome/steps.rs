//! Typed step tuples for [`Outcome::pipe`].

use super::Outcome;

/// A fixed-length chain of steps, each `FnOnce(I) -> Outcome<O, F>`.
///
/// Implemented for tuples of one to six steps. Each step's input must match
/// the previous step's output, so a mistyped chain fails to compile. Running
/// the chain is a left fold of [`Outcome::flat_map`] seeded with the initial
/// outcome.
pub trait Steps<T, F> {
    /// Value type produced by the final step.
    type Output;

    /// Feeds `seed` through every step, stopping at the first failure.
    fn run(self, seed: Outcome<T, F>) -> Outcome<Self::Output, F>;
}

macro_rules! impl_steps {
    ($last:ident; $($idx:tt: $step:ident($input:ident) -> $output:ident),+) => {
        impl<T, F, $($step, $output),+> Steps<T, F> for ($($step,)+)
        where
            $($step: FnOnce($input) -> Outcome<$output, F>,)+
        {
            type Output = $last;

            fn run(self, seed: Outcome<T, F>) -> Outcome<$last, F> {
                seed$(.flat_map(self.$idx))+
            }
        }
    };
}

impl_steps!(A; 0: SA(T) -> A);
impl_steps!(B; 0: SA(T) -> A, 1: SB(A) -> B);
impl_steps!(C; 0: SA(T) -> A, 1: SB(A) -> B, 2: SC(B) -> C);
impl_steps!(D; 0: SA(T) -> A, 1: SB(A) -> B, 2: SC(B) -> C, 3: SD(C) -> D);
impl_steps!(E; 0: SA(T) -> A, 1: SB(A) -> B, 2: SC(B) -> C, 3: SD(C) -> D, 4: SE(D) -> E);
impl_steps!(
    G;
    0: SA(T) -> A,
    1: SB(A) -> B,
    2: SC(B) -> C,
    3: SD(C) -> D,
    4: SE(D) -> E,
    5: SG(E) -> G
);

/// Free-function form of [`Outcome::pipe`].
///
/// ```
/// use outcome_flow::{Outcome, pipe};
///
/// fn parse(raw: &str) -> Outcome<i64> {
///     Outcome::from_result(raw.trim().parse(), "not an integer", "parse.int")
/// }
///
/// fn positive(n: i64) -> Outcome<u64> {
///     u64::try_from(n).map_or_else(|_| Outcome::failure("negative", "parse.sign"), Outcome::success)
/// }
///
/// assert_eq!(pipe(Outcome::success(" 12 "), (parse, positive)), Outcome::success(12));
/// assert!(pipe(Outcome::success("-3"), (parse, positive)).is_failure());
/// ```
pub fn pipe<T, F, S>(seed: Outcome<T, F>, steps: S) -> Outcome<S::Output, F>
where
    S: Steps<T, F>,
{
    steps.run(seed)
}
