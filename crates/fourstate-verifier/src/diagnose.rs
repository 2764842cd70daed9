//! Diagnosis of pattern violations
//!
//! When a record fails verification, each violated state maps to a fixed
//! remediation hint. This is a pure lookup table, not a recommendation
//! engine.

use crate::verdict::expected_result;
use fourstate_record::{RunResult, VerificationRecord, VerificationState};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// One violated state with its observed outcome and remediation hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The state whose outcome contradicts the required pattern
    pub state: VerificationState,
    /// What the pattern requires there
    pub expected: RunResult,
    /// What was recorded
    pub observed: RunResult,
    /// Fixed remediation hint for this state
    pub hint: &'static str,
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state {}: expected {}, observed {} ({})",
            self.state, self.expected, self.observed, self.hint
        )
    }
}

/// Remediation hint for a violated state
#[must_use]
pub(crate) const fn remediation_hint(state: VerificationState, observed: RunResult) -> &'static str {
    if matches!(observed, RunResult::Error) {
        return "run could not complete; fix the execution environment and re-run";
    }
    match state {
        VerificationState::I => "pre-existing failures must be fixed before verification",
        VerificationState::II => "the fix regresses existing behavior",
        VerificationState::III => "the test does not exercise the fix",
        VerificationState::IV => "the fix is incomplete or incorrect",
    }
}

/// Findings for a failed record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    /// All violated states, in canonical order
    pub violations: Vec<Violation>,
}

impl Diagnosis {
    /// Collect the violations of a record
    ///
    /// Empty when nothing recorded contradicts the pattern, which is the
    /// case exactly when [`Verdict::of`](crate::verdict::Verdict::of) is
    /// not `Failed`.
    #[must_use]
    pub fn of(record: &VerificationRecord) -> Self {
        let mut violations = Vec::new();
        for state in VerificationState::ALL {
            let Some(observed) = record.result_of(state) else {
                continue;
            };
            let expected = expected_result(state);
            if observed != expected {
                violations.push(Violation {
                    state,
                    expected,
                    observed,
                    hint: remediation_hint(state, observed),
                });
            }
        }
        Self { violations }
    }

    /// Whether no violation was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Display for Diagnosis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "no violations");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Verdict;

    #[test]
    fn conforming_record_has_no_violations() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::I, RunResult::Pass);
        record.record_run(VerificationState::III, RunResult::Fail);
        let diagnosis = Diagnosis::of(&record);
        assert!(diagnosis.is_empty());
        assert_eq!(Verdict::of(&record), Verdict::Incomplete);
    }

    #[test]
    fn each_single_violation_names_exactly_that_state() {
        let cases = [
            (VerificationState::I, RunResult::Fail),
            (VerificationState::II, RunResult::Fail),
            (VerificationState::III, RunResult::Pass),
            (VerificationState::IV, RunResult::Fail),
        ];
        for (bad_state, bad_result) in cases {
            let mut record = VerificationRecord::new();
            for state in VerificationState::ALL {
                let result = if state == bad_state {
                    bad_result
                } else {
                    expected_result(state)
                };
                record.record_run(state, result);
            }
            let diagnosis = Diagnosis::of(&record);
            assert_eq!(diagnosis.violations.len(), 1, "state {bad_state}");
            assert_eq!(diagnosis.violations[0].state, bad_state);
        }
    }

    #[test]
    fn state_iii_pass_hint() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::III, RunResult::Pass);
        let diagnosis = Diagnosis::of(&record);
        assert_eq!(diagnosis.violations[0].hint, "the test does not exercise the fix");
    }

    #[test]
    fn error_result_gets_environment_hint() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::II, RunResult::Error);
        let diagnosis = Diagnosis::of(&record);
        assert!(diagnosis.violations[0].hint.contains("could not complete"));
    }

    #[test]
    fn multiple_violations_in_canonical_order() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::IV, RunResult::Fail);
        record.record_run(VerificationState::I, RunResult::Fail);
        let diagnosis = Diagnosis::of(&record);
        let states: Vec<_> = diagnosis.violations.iter().map(|v| v.state).collect();
        assert_eq!(states, vec![VerificationState::I, VerificationState::IV]);
    }

    #[test]
    fn display_is_one_line_per_violation() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::III, RunResult::Pass);
        let text = Diagnosis::of(&record).to_string();
        assert!(text.contains("state III"));
        assert!(text.contains("expected fail, observed pass"));
    }
}
