//! Scenario state shared between steps.

use outcome_flow::{FailureInfo, Maybe, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::CallCounter;

/// State for scenarios exercising `Maybe` construction and `coalesce`.
#[derive(Debug, Default, ScenarioState)]
pub struct MaybeState {
    /// Values awaiting coalescing.
    pub inputs: Slot<Vec<Maybe<i64>>>,
    /// Result of the last `coalesce` call.
    pub coalesced: Slot<Vec<i64>>,
    /// Raw nullable input before lifting.
    pub nullable: Slot<Option<i64>>,
    /// Lifted and mapped value.
    pub lifted: Slot<Maybe<i64>>,
    /// Counts invocations of the mapper applied after lifting.
    pub mapper: Slot<CallCounter>,
}

/// State for scenarios exercising `Outcome::pipe`.
#[derive(Debug, Default, ScenarioState)]
pub struct PipelineState {
    /// Outcome fed into the pipeline.
    pub seed: Slot<Outcome<i64>>,
    /// Outcome produced by the pipeline.
    pub result: Slot<Outcome<i64>>,
    /// Counts invocations of the step placed after a failing one.
    pub trailing: Slot<CallCounter>,
}

/// State for scenarios exercising the failure constructors.
#[derive(Debug, Default, ScenarioState)]
pub struct FailureState {
    /// Record extracted from the last constructed failure.
    pub record: Slot<FailureInfo>,
}

/// Fresh `Maybe` scenario state.
#[fixture]
pub fn maybe_state() -> MaybeState {
    MaybeState::default()
}

/// Fresh pipeline scenario state.
#[fixture]
pub fn pipeline_state() -> PipelineState {
    PipelineState::default()
}

/// Fresh failure scenario state.
#[fixture]
pub fn failure_state() -> FailureState {
    FailureState::default()
}
