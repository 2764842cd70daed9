//! Testing utilities for the fourstate workspace
//!
//! Shared fixtures: scripted executors and record builders.

#![allow(missing_docs)]

use fourstate_record::{RunResult, ToggleState, VerificationRecord, VerificationState};
use fourstate_verifier::{expected_result, TestExecutor, ToggleVerifier};
use std::collections::HashMap;

/// Executor that answers from a fixed per-state script
///
/// States without a scripted outcome report an executor fault, which keeps
/// accidental gaps in a test's script from passing silently.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    outcomes: HashMap<VerificationState, RunResult>,
    pub executed: Vec<VerificationState>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The required pattern: I/II/IV pass, III fails
    pub fn conforming() -> Self {
        let mut script = Self::new();
        for state in VerificationState::ALL {
            script.outcomes.insert(state, expected_result(state));
        }
        script
    }

    pub fn with_outcome(mut self, state: VerificationState, result: RunResult) -> Self {
        self.outcomes.insert(state, result);
        self
    }
}

impl TestExecutor for ScriptedExecutor {
    fn execute(&mut self, state: ToggleState) -> Result<RunResult, String> {
        let state = state.verification_state();
        self.executed.push(state);
        self.outcomes
            .get(&state)
            .copied()
            .ok_or_else(|| format!("no scripted outcome for state {state}"))
    }
}

/// Record holding the required pattern for all four states
pub fn verified_record() -> VerificationRecord {
    let mut record = VerificationRecord::new();
    for state in VerificationState::ALL {
        record.record_run(state, expected_result(state));
    }
    record
}

/// Record holding the required pattern except at `state`
pub fn record_violating(state: VerificationState, result: RunResult) -> VerificationRecord {
    let mut record = verified_record();
    record.record_run(state, result);
    record
}

/// Verifier holding the required pattern for all four states
pub fn verified_verifier() -> ToggleVerifier {
    let mut verifier = ToggleVerifier::new();
    for state in VerificationState::ALL {
        verifier.record_run(state, expected_result(state));
    }
    verifier
}
