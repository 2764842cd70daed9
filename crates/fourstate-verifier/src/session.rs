//! Session driving against an external test runner
//!
//! The verifier only bookkeeps; actually toggling flags and running the test
//! scope is the job of an external collaborator behind [`TestExecutor`].
//! [`VerificationSession`] sequences that collaborator through the states a
//! record still needs: all four in canonical order for a fresh pair, only
//! the missing ones after invalidation.
//!
//! Runs are logically sequential with no suspension points; an executor
//! fault stops the session with nothing recorded for that state.

use crate::error::{VerifierError, VerifierResult};
use crate::verdict::Verdict;
use crate::verifier::ToggleVerifier;
use fourstate_record::{RunResult, ToggleState};

/// External test-execution collaborator
///
/// Given the toggle combination to run under, executes the relevant test
/// scope and reports the outcome. Errors are executor faults (harness could
/// not run), not test failures; a failing test scope is `Ok(RunResult::Fail)`.
pub trait TestExecutor {
    /// Execute the test scope under the given toggles
    ///
    /// # Errors
    /// Returns a description of the fault if the run could not complete.
    fn execute(&mut self, state: ToggleState) -> Result<RunResult, String>;
}

impl<F> TestExecutor for F
where
    F: FnMut(ToggleState) -> Result<RunResult, String>,
{
    fn execute(&mut self, state: ToggleState) -> Result<RunResult, String> {
        self(state)
    }
}

/// Drives one verifier through the runs its record still needs
#[derive(Debug)]
pub struct VerificationSession<E> {
    verifier: ToggleVerifier,
    executor: E,
}

impl<E: TestExecutor> VerificationSession<E> {
    /// Create a session around a fresh verifier
    #[inline]
    #[must_use]
    pub fn new(executor: E) -> Self {
        Self {
            verifier: ToggleVerifier::new(),
            executor,
        }
    }

    /// Create a session resuming an existing verifier
    ///
    /// Used after invalidation: only the cleared states are re-run.
    #[inline]
    #[must_use]
    pub fn resume(verifier: ToggleVerifier, executor: E) -> Self {
        Self { verifier, executor }
    }

    /// The verifier under management
    #[inline]
    #[must_use]
    pub const fn verifier(&self) -> &ToggleVerifier {
        &self.verifier
    }

    /// Mutable access, for invalidation between runs
    #[inline]
    pub fn verifier_mut(&mut self) -> &mut ToggleVerifier {
        &mut self.verifier
    }

    /// Take the verifier back out of the session
    #[inline]
    #[must_use]
    pub fn into_verifier(self) -> ToggleVerifier {
        self.verifier
    }

    /// Run every state the record is missing and return the verdict
    ///
    /// States are visited in canonical order (I, II, III, IV); states that
    /// already hold an outcome are skipped, so resuming after invalidation
    /// re-runs only the cleared states.
    ///
    /// # Errors
    /// Returns [`VerifierError::Executor`] if a run cannot complete; outcomes
    /// recorded before the fault are kept.
    pub fn run_missing(&mut self) -> VerifierResult<Verdict> {
        let missing = self.verifier.record().missing_states();
        tracing::debug!(
            pair = %self.verifier.id(),
            states = ?missing,
            "driving missing states"
        );
        for state in missing {
            let toggles = state.toggles();
            self.verifier.set_state(toggles.test_enabled, toggles.fix_enabled);
            let result =
                self.executor
                    .execute(toggles)
                    .map_err(|message| VerifierError::Executor {
                        state,
                        message,
                    })?;
            self.verifier.record_current(result);
        }
        Ok(self.verifier.verdict())
    }
}
