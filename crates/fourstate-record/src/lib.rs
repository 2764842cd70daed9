//! Data model for four-state verification records
//!
//! A verification pair (one fix, one test) is checked by running the test
//! scope under all four combinations of the two toggles and comparing the
//! observed outcomes against a required pattern. This crate provides:
//! - [`ToggleState`] / [`VerificationState`]: the toggle flag pair and the
//!   four canonical named states
//! - [`RunResult`] / [`RunRecord`]: outcome of one run, with provenance
//! - [`VerificationRecord`]: per-pair bookkeeping with invalidation rules
//! - [`ContentHash`] / [`PairFingerprint`]: content addressing used to detect
//!   edits that invalidate previously recorded outcomes

pub mod fingerprint;
pub mod record;
pub mod state;

pub use fingerprint::{ArtifactKind, ContentHash, FingerprintError, PairFingerprint};
pub use record::{RunRecord, RunResult, VerificationRecord};
pub use state::{StateError, ToggleState, VerificationState};
