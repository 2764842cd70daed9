//! Verdict computation
//!
//! Pure evaluation of a [`VerificationRecord`] against the required pattern:
//! States I, II, and IV must pass, State III must fail. State III failing is
//! the evidence that the new test actually exercises the fix.

use fourstate_record::{RunResult, VerificationRecord, VerificationState};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// The required outcome for one canonical state
#[inline]
#[must_use]
pub const fn expected_result(state: VerificationState) -> RunResult {
    match state {
        VerificationState::I | VerificationState::II | VerificationState::IV => RunResult::Pass,
        VerificationState::III => RunResult::Fail,
    }
}

/// Overall standing of a verification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// One or more states lack a recorded outcome and nothing recorded
    /// contradicts the required pattern
    Incomplete,
    /// All four states recorded and matching the required pattern
    Verified,
    /// At least one recorded outcome contradicts the required pattern
    Failed,
}

impl Verdict {
    /// Evaluate a record against the required pattern
    ///
    /// A contradiction is reported as `Failed` even while other states are
    /// still missing; waiting for completeness would hide a known violation.
    #[must_use]
    pub fn of(record: &VerificationRecord) -> Self {
        let mut missing = false;
        for state in VerificationState::ALL {
            match record.result_of(state) {
                None => missing = true,
                Some(result) if result != expected_result(state) => return Verdict::Failed,
                Some(_) => {}
            }
        }
        if missing {
            Verdict::Incomplete
        } else {
            Verdict::Verified
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Incomplete => write!(f, "incomplete"),
            Verdict::Verified => write!(f, "verified"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(results: [Option<RunResult>; 4]) -> VerificationRecord {
        let mut record = VerificationRecord::new();
        for (state, result) in VerificationState::ALL.into_iter().zip(results) {
            if let Some(result) = result {
                record.record_run(state, result);
            }
        }
        record
    }

    #[test]
    fn empty_record_is_incomplete() {
        assert_eq!(Verdict::of(&VerificationRecord::new()), Verdict::Incomplete);
    }

    #[test]
    fn required_pattern_is_verified() {
        let record = record_with([
            Some(RunResult::Pass),
            Some(RunResult::Pass),
            Some(RunResult::Fail),
            Some(RunResult::Pass),
        ]);
        assert_eq!(Verdict::of(&record), Verdict::Verified);
    }

    #[test]
    fn state_iii_passing_fails() {
        let record = record_with([
            Some(RunResult::Pass),
            Some(RunResult::Pass),
            Some(RunResult::Pass),
            Some(RunResult::Pass),
        ]);
        assert_eq!(Verdict::of(&record), Verdict::Failed);
    }

    #[test]
    fn contradiction_outranks_missing_states() {
        // State I failed; III and IV not yet run
        let record = record_with([Some(RunResult::Fail), Some(RunResult::Pass), None, None]);
        assert_eq!(Verdict::of(&record), Verdict::Failed);
    }

    #[test]
    fn partial_conforming_record_is_incomplete() {
        let record = record_with([Some(RunResult::Pass), None, Some(RunResult::Fail), None]);
        assert_eq!(Verdict::of(&record), Verdict::Incomplete);
    }

    #[test]
    fn error_result_fails_everywhere() {
        for state in VerificationState::ALL {
            let mut record = VerificationRecord::new();
            record.record_run(state, RunResult::Error);
            assert_eq!(Verdict::of(&record), Verdict::Failed, "state {state}");
        }
    }

    #[test]
    fn expected_pattern_table() {
        assert_eq!(expected_result(VerificationState::I), RunResult::Pass);
        assert_eq!(expected_result(VerificationState::II), RunResult::Pass);
        assert_eq!(expected_result(VerificationState::III), RunResult::Fail);
        assert_eq!(expected_result(VerificationState::IV), RunResult::Pass);
    }
}
