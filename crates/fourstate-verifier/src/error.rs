//! Error types for the verifier
//!
//! Pattern violations are not errors: they are carried inside the `Failed`
//! verdict and surfaced through diagnosis. Errors here cover invalid input
//! (a state combination outside the canonical four), premature operations
//! (archiving an incomplete record), and executor faults.

use fourstate_record::StateError;

/// Errors surfaced by verifier operations
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    /// Caller named a state combination outside the canonical four
    #[error(transparent)]
    InvalidState(#[from] StateError),

    /// Operation requires all four states recorded
    #[error("incomplete verification: {recorded} of 4 states recorded")]
    Incomplete {
        /// Number of states holding a recorded outcome
        recorded: usize,
    },

    /// The external test-execution collaborator could not complete a run
    #[error("executor failed for state {state}: {message}")]
    Executor {
        /// State whose run faulted
        state: fourstate_record::VerificationState,
        /// Executor-supplied description
        message: String,
    },

    /// Archival serialization failed
    #[error("archive serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for verifier operations
pub type VerifierResult<T> = Result<T, VerifierError>;
