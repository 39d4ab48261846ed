//! Steps covering `Outcome::pipe` short-circuiting.

use anyhow::{Result, anyhow, ensure};
use outcome_flow::Outcome;
use rstest_bdd_macros::{given, then, when};
use test_helpers::CallCounter;

use crate::bdd::fixtures::PipelineState;

fn increment(n: i64) -> Outcome<i64> {
    Outcome::success(n + 1)
}

fn double(n: i64) -> Outcome<i64> {
    Outcome::success(n * 2)
}

fn take_seed(pipeline_state: &PipelineState) -> Result<Outcome<i64>> {
    pipeline_state
        .seed
        .take()
        .ok_or_else(|| anyhow!("no seed was given"))
}

fn result_of(pipeline_state: &PipelineState) -> Result<Outcome<i64>> {
    pipeline_state
        .result
        .get()
        .ok_or_else(|| anyhow!("the pipeline has not run"))
}

#[given("a successful seed of {seed:i64}")]
fn successful_seed(pipeline_state: &PipelineState, seed: i64) {
    pipeline_state.seed.set(Outcome::success(seed));
}

#[given("a failed seed coded {code}")]
fn failed_seed(pipeline_state: &PipelineState, code: String) {
    pipeline_state
        .seed
        .set(Outcome::failure("seed rejected", code));
}

#[when("the seed is piped through increment and double")]
fn pipe_increment_double(pipeline_state: &PipelineState) -> Result<()> {
    let seed = take_seed(pipeline_state)?;
    pipeline_state.result.set(seed.pipe((increment, double)));
    Ok(())
}

#[when("the seed is piped through increment, a failure coded {code} and increment")]
fn pipe_with_failure(pipeline_state: &PipelineState, code: String) -> Result<()> {
    let seed = take_seed(pipeline_state)?;
    let trailing = CallCounter::new();
    let halt = move |_: i64| Outcome::<i64>::failure("halted", code);
    let result = seed.pipe((increment, halt, trailing.counted(increment)));
    pipeline_state.result.set(result);
    pipeline_state.trailing.set(trailing);
    Ok(())
}

#[then("the pipeline succeeds with {expected:i64}")]
fn pipeline_succeeds(pipeline_state: &PipelineState, expected: i64) -> Result<()> {
    let value = result_of(pipeline_state)?.match_with(Some, |_| None);
    ensure!(value == Some(expected), "expected {expected}, got {value:?}");
    Ok(())
}

#[then("the pipeline fails with code {code}")]
fn pipeline_fails(pipeline_state: &PipelineState, code: String) -> Result<()> {
    let actual = result_of(pipeline_state)?.match_with(|_| None, |f| Some(f.code().to_owned()));
    ensure!(
        actual.as_deref() == Some(code.as_str()),
        "expected failure {code}, got {actual:?}"
    );
    Ok(())
}

#[then("the step after the failure never ran")]
fn trailing_step_skipped(pipeline_state: &PipelineState) -> Result<()> {
    let trailing = pipeline_state
        .trailing
        .get()
        .ok_or_else(|| anyhow!("no trailing step was recorded"))?;
    trailing.ensure_count(0)
}
