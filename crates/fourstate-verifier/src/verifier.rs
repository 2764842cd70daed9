//! Per-pair verification facade
//!
//! [`ToggleVerifier`] owns the bookkeeping for one verification pair: the
//! currently active toggle state and the record of observed outcomes. One
//! instance per pair; a caller managing several pairs keeps separate
//! instances.

use crate::diagnose::Diagnosis;
use crate::verdict::Verdict;
use fourstate_record::{
    ArtifactKind, ContentHash, PairFingerprint, RunResult, ToggleState, VerificationRecord,
    VerificationState,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique verification-pair identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub Ulid);

impl PairId {
    /// Generate new pair ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for PairId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bookkeeping facade for one test/fix pair
///
/// Tracks the active toggle state and the per-state outcomes, and evaluates
/// them against the required pattern. Exclusively owned by one verification
/// session; not designed for concurrent access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleVerifier {
    /// Pair identity
    id: PairId,
    /// Currently active toggle combination
    current: ToggleState,
    /// Observed outcomes
    record: VerificationRecord,
}

impl ToggleVerifier {
    /// Create a verifier for a fresh pair, starting at State I (both off)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: PairId::new(),
            current: VerificationState::I.toggles(),
            record: VerificationRecord::new(),
        }
    }

    /// Create a verifier tracking the pair's artifact content
    #[inline]
    #[must_use]
    pub fn with_fingerprint(fingerprint: PairFingerprint) -> Self {
        Self {
            id: PairId::new(),
            current: VerificationState::I.toggles(),
            record: VerificationRecord::with_fingerprint(fingerprint),
        }
    }

    /// Pair identity
    #[inline]
    #[must_use]
    pub const fn id(&self) -> PairId {
        self.id
    }

    /// Currently active toggle combination
    #[inline]
    #[must_use]
    pub const fn current_state(&self) -> ToggleState {
        self.current
    }

    /// The record of observed outcomes
    #[inline]
    #[must_use]
    pub const fn record(&self) -> &VerificationRecord {
        &self.record
    }

    /// Set the active toggle combination
    ///
    /// Pure bookkeeping with no constraints; all four combinations of the
    /// two flags are canonical, so this always succeeds.
    pub fn set_state(&mut self, test_enabled: bool, fix_enabled: bool) {
        self.current = ToggleState::new(test_enabled, fix_enabled);
        tracing::debug!(
            pair = %self.id,
            state = %self.current.verification_state(),
            "toggles set"
        );
    }

    /// Record the outcome observed under a given state
    ///
    /// Overwrites any prior outcome for that state, which supports
    /// re-verification after revision.
    pub fn record_run(&mut self, state: VerificationState, result: RunResult) {
        self.record.record_run(state, result);
        tracing::info!(
            pair = %self.id,
            state = %state,
            result = %result,
            verdict = %self.verdict(),
            "run recorded"
        );
    }

    /// Record an outcome under the currently active toggle combination
    pub fn record_current(&mut self, result: RunResult) {
        self.record_run(self.current.verification_state(), result);
    }

    /// Clear outcomes that depended on the changed artifact
    ///
    /// Changing the test clears States III and IV; changing the fix clears
    /// States II and IV. Returns the states actually cleared.
    pub fn invalidate(&mut self, kind: ArtifactKind) -> Vec<VerificationState> {
        let cleared = self.record.invalidate(kind);
        tracing::info!(
            pair = %self.id,
            artifact = %kind,
            cleared = ?cleared,
            "record invalidated"
        );
        cleared
    }

    /// Observe current artifact content, invalidating on drift
    pub fn refresh(&mut self, kind: ArtifactKind, hash: ContentHash) -> Vec<VerificationState> {
        let cleared = self.record.refresh(kind, hash);
        if !cleared.is_empty() {
            tracing::info!(
                pair = %self.id,
                artifact = %kind,
                cleared = ?cleared,
                "artifact drift detected"
            );
        }
        cleared
    }

    /// Evaluate the record against the required pattern
    #[inline]
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::of(&self.record)
    }

    /// Findings for the current record
    ///
    /// Empty exactly when the verdict is not `Failed`.
    #[inline]
    #[must_use]
    pub fn diagnose(&self) -> Diagnosis {
        Diagnosis::of(&self.record)
    }
}

impl Default for ToggleVerifier {
    fn default() -> Self {
        Self::new()
    }
}
