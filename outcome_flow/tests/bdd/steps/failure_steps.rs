//! Steps covering the failure constructors.

use anyhow::{Result, anyhow, ensure};
use outcome_flow::{FailureInfo, Outcome};
use rstest_bdd_macros::{then, when};

use crate::bdd::fixtures::FailureState;

fn record_failure(failure_state: &FailureState, outcome: Outcome<()>) -> Result<()> {
    let record = outcome
        .match_with(|()| None, Some)
        .ok_or_else(|| anyhow!("constructor produced a success"))?;
    failure_state.record.set(record);
    Ok(())
}

fn recorded(failure_state: &FailureState) -> Result<FailureInfo> {
    failure_state
        .record
        .get()
        .ok_or_else(|| anyhow!("no failure was built"))
}

#[when("a failure is built with detail {detail} and code {code}")]
fn build_failure(failure_state: &FailureState, detail: String, code: String) -> Result<()> {
    record_failure(failure_state, Outcome::failure(detail, code))
}

#[when("a failure is built around a captured error with code {code}")]
fn build_failure_with_cause(failure_state: &FailureState, code: String) -> Result<()> {
    let error = std::io::Error::other("device unavailable");
    record_failure(
        failure_state,
        Outcome::failure_with_cause("write failed", code, error),
    )
}

#[when("an empty failure is built")]
fn build_empty_failure(failure_state: &FailureState) -> Result<()> {
    record_failure(failure_state, Outcome::empty_failure())
}

#[then("the failure has an empty code")]
fn code_is_empty(failure_state: &FailureState) -> Result<()> {
    let record = recorded(failure_state)?;
    ensure!(record.code().is_empty(), "unexpected code {:?}", record.code());
    Ok(())
}

#[then("the failure has an empty detail")]
fn detail_is_empty(failure_state: &FailureState) -> Result<()> {
    let record = recorded(failure_state)?;
    ensure!(record.detail().is_empty(), "unexpected detail {:?}", record.detail());
    Ok(())
}

#[then("the failure code is {code}")]
fn code_is(failure_state: &FailureState, code: String) -> Result<()> {
    let record = recorded(failure_state)?;
    ensure!(record.code() == code, "expected code {code}, got {}", record.code());
    Ok(())
}

#[then("the failure detail is {detail}")]
fn detail_is(failure_state: &FailureState, detail: String) -> Result<()> {
    let record = recorded(failure_state)?;
    ensure!(
        record.detail() == detail,
        "expected detail {detail}, got {}",
        record.detail()
    );
    Ok(())
}

#[then("the failure has no underlying cause")]
fn has_no_cause(failure_state: &FailureState) -> Result<()> {
    ensure!(
        recorded(failure_state)?.underlying_cause().is_none(),
        "expected no underlying cause"
    );
    Ok(())
}

#[then("the failure has an underlying cause")]
fn has_cause(failure_state: &FailureState) -> Result<()> {
    ensure!(
        recorded(failure_state)?.underlying_cause().is_some(),
        "expected an underlying cause"
    );
    Ok(())
}
