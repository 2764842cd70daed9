//! Verdict computation and session driving for four-state verification
//!
//! Builds on [`fourstate_record`] to provide:
//! - [`Verdict`]: pure evaluation of a record against the required pattern
//! - [`Diagnosis`]: the fixed remediation table for pattern violations
//! - [`ToggleVerifier`]: the per-pair bookkeeping facade
//! - [`VerificationSession`] / [`TestExecutor`]: a synchronous driver that
//!   sequences the four executions against an external test runner
//! - [`ArchivedRecord`]: JSON archival of completed records
//!
//! A `Failed` verdict is a report, not a fault: no operation returns `Err`
//! because of it.

pub mod archive;
pub mod diagnose;
pub mod error;
pub mod session;
pub mod verdict;
pub mod verifier;

pub use archive::ArchivedRecord;
pub use diagnose::{Diagnosis, Violation};
pub use error::{VerifierError, VerifierResult};
pub use session::{TestExecutor, VerificationSession};
pub use verdict::{expected_result, Verdict};
pub use verifier::{PairId, ToggleVerifier};
