//! Per-pair verification bookkeeping
//!
//! A [`VerificationRecord`] maps each of the four canonical states to the
//! outcome observed there, if any. Outcomes are stamped with the pair
//! fingerprint they were observed under; editing an artifact clears exactly
//! the states whose outcome depended on it.

use crate::fingerprint::{ArtifactKind, ContentHash, PairFingerprint};
use crate::state::VerificationState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Outcome of executing the test scope under one toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunResult {
    /// The test scope passed
    Pass,
    /// The test scope failed
    Fail,
    /// The run itself could not complete
    Error,
}

impl Display for RunResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RunResult::Pass => write!(f, "pass"),
            RunResult::Fail => write!(f, "fail"),
            RunResult::Error => write!(f, "error"),
        }
    }
}

/// One recorded run: the outcome plus its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Observed outcome
    pub result: RunResult,
    /// When the outcome was recorded
    pub recorded_at: DateTime<Utc>,
    /// Pair content the outcome was observed under, as far as tracked
    pub fingerprint: PairFingerprint,
}

/// Bookkeeping for one verification pair
///
/// Created fresh per pair, mutated only by [`record_run`](Self::record_run),
/// cleared selectively by [`invalidate`](Self::invalidate), and discarded or
/// archived once the pair's scaffolding is removed.
///
/// # Invariants
/// - Each canonical state holds at most one recorded outcome.
/// - An outcome recorded while fingerprints are tracked carries the
///   fingerprint current at recording time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Recorded outcomes, indexed by canonical state order (I..IV)
    slots: [Option<RunRecord>; 4],
    /// Current pair content, as far as observed
    fingerprint: PairFingerprint,
}

impl VerificationRecord {
    /// Create an empty record with no fingerprint tracking
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record tracking the given pair content
    #[inline]
    #[must_use]
    pub fn with_fingerprint(fingerprint: PairFingerprint) -> Self {
        Self {
            slots: [None; 4],
            fingerprint,
        }
    }

    /// States whose recorded outcome depends on the given artifact
    ///
    /// Changing the test invalidates States III and IV; changing the fix
    /// invalidates States II and IV.
    #[inline]
    #[must_use]
    pub const fn dependent_states(kind: ArtifactKind) -> [VerificationState; 2] {
        match kind {
            ArtifactKind::Test => [VerificationState::III, VerificationState::IV],
            ArtifactKind::Fix => [VerificationState::II, VerificationState::IV],
        }
    }

    /// Record (or overwrite) the outcome for one state
    ///
    /// Overwriting supports re-verification after revision; recording the
    /// same result twice is a no-op apart from the timestamp.
    pub fn record_run(&mut self, state: VerificationState, result: RunResult) {
        self.slots[Self::slot(state)] = Some(RunRecord {
            result,
            recorded_at: Utc::now(),
            fingerprint: self.fingerprint,
        });
    }

    /// Clear the outcomes that depended on the changed artifact
    ///
    /// Returns the states that actually held an outcome and were cleared.
    pub fn invalidate(&mut self, kind: ArtifactKind) -> Vec<VerificationState> {
        let mut cleared = Vec::with_capacity(2);
        for state in Self::dependent_states(kind) {
            if self.slots[Self::slot(state)].take().is_some() {
                cleared.push(state);
            }
        }
        cleared
    }

    /// Observe the current content of one artifact
    ///
    /// If the hash differs from a previously observed one, the dependent
    /// states are invalidated and returned. The first observation of an
    /// artifact starts tracking it and clears nothing.
    pub fn refresh(&mut self, kind: ArtifactKind, hash: ContentHash) -> Vec<VerificationState> {
        if self.fingerprint.update(kind, hash) {
            self.invalidate(kind)
        } else {
            Vec::new()
        }
    }

    /// Recorded outcome for one state, if any
    #[inline]
    #[must_use]
    pub fn result_of(&self, state: VerificationState) -> Option<RunResult> {
        self.slots[Self::slot(state)].map(|run| run.result)
    }

    /// Full run record for one state, if any
    #[inline]
    #[must_use]
    pub fn run_of(&self, state: VerificationState) -> Option<&RunRecord> {
        self.slots[Self::slot(state)].as_ref()
    }

    /// Whether all four states hold a recorded outcome
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of states holding a recorded outcome
    #[inline]
    #[must_use]
    pub fn recorded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// States with no recorded outcome, in canonical order
    #[must_use]
    pub fn missing_states(&self) -> Vec<VerificationState> {
        VerificationState::ALL
            .into_iter()
            .filter(|state| self.slots[Self::slot(*state)].is_none())
            .collect()
    }

    /// Tracked pair content
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> PairFingerprint {
        self.fingerprint
    }

    #[inline]
    const fn slot(state: VerificationState) -> usize {
        state.index() as usize - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> VerificationRecord {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::I, RunResult::Pass);
        record.record_run(VerificationState::II, RunResult::Pass);
        record.record_run(VerificationState::III, RunResult::Fail);
        record.record_run(VerificationState::IV, RunResult::Pass);
        record
    }

    #[test]
    fn starts_empty() {
        let record = VerificationRecord::new();
        assert!(!record.is_complete());
        assert_eq!(record.recorded_count(), 0);
        assert_eq!(record.missing_states(), VerificationState::ALL.to_vec());
    }

    #[test]
    fn record_overwrites() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::II, RunResult::Fail);
        record.record_run(VerificationState::II, RunResult::Pass);
        assert_eq!(record.result_of(VerificationState::II), Some(RunResult::Pass));
        assert_eq!(record.recorded_count(), 1);
    }

    #[test]
    fn invalidate_test_clears_iii_and_iv_only() {
        let mut record = full_record();
        let cleared = record.invalidate(ArtifactKind::Test);
        assert_eq!(cleared, vec![VerificationState::III, VerificationState::IV]);
        assert_eq!(record.result_of(VerificationState::I), Some(RunResult::Pass));
        assert_eq!(record.result_of(VerificationState::II), Some(RunResult::Pass));
        assert_eq!(record.result_of(VerificationState::III), None);
        assert_eq!(record.result_of(VerificationState::IV), None);
    }

    #[test]
    fn invalidate_fix_clears_ii_and_iv_only() {
        let mut record = full_record();
        let cleared = record.invalidate(ArtifactKind::Fix);
        assert_eq!(cleared, vec![VerificationState::II, VerificationState::IV]);
        assert_eq!(record.result_of(VerificationState::I), Some(RunResult::Pass));
        assert_eq!(record.result_of(VerificationState::III), Some(RunResult::Fail));
        assert_eq!(record.result_of(VerificationState::II), None);
    }

    #[test]
    fn invalidate_reports_only_cleared_states() {
        let mut record = VerificationRecord::new();
        record.record_run(VerificationState::IV, RunResult::Pass);
        let cleared = record.invalidate(ArtifactKind::Fix);
        assert_eq!(cleared, vec![VerificationState::IV]);
        assert!(record.invalidate(ArtifactKind::Fix).is_empty());
    }

    #[test]
    fn refresh_detects_fix_drift() {
        let fp = PairFingerprint::compute(b"test v1", b"fix v1");
        let mut record = VerificationRecord::with_fingerprint(fp);
        record.record_run(VerificationState::II, RunResult::Pass);
        record.record_run(VerificationState::III, RunResult::Fail);

        // Same content: nothing invalidated
        assert!(record
            .refresh(ArtifactKind::Fix, ContentHash::compute(b"fix v1"))
            .is_empty());

        // Edited fix: State II goes, State III stays
        let cleared = record.refresh(ArtifactKind::Fix, ContentHash::compute(b"fix v2"));
        assert_eq!(cleared, vec![VerificationState::II]);
        assert_eq!(record.result_of(VerificationState::III), Some(RunResult::Fail));
    }

    #[test]
    fn runs_are_stamped_with_current_fingerprint() {
        let fp = PairFingerprint::compute(b"test", b"fix");
        let mut record = VerificationRecord::with_fingerprint(fp);
        record.record_run(VerificationState::I, RunResult::Pass);
        let run = record.run_of(VerificationState::I).unwrap();
        assert_eq!(run.fingerprint, fp);
    }

    #[test]
    fn serde_roundtrip() {
        let record = full_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: VerificationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_state() -> impl Strategy<Value = VerificationState> {
            prop_oneof![
                Just(VerificationState::I),
                Just(VerificationState::II),
                Just(VerificationState::III),
                Just(VerificationState::IV),
            ]
        }

        fn arb_result() -> impl Strategy<Value = RunResult> {
            prop_oneof![
                Just(RunResult::Pass),
                Just(RunResult::Fail),
                Just(RunResult::Error),
            ]
        }

        proptest! {
            #[test]
            fn last_write_wins(writes in proptest::collection::vec((arb_state(), arb_result()), 1..20)) {
                let mut record = VerificationRecord::new();
                for (state, result) in &writes {
                    record.record_run(*state, *result);
                }
                for state in VerificationState::ALL {
                    let expected = writes
                        .iter()
                        .rev()
                        .find(|(s, _)| *s == state)
                        .map(|(_, r)| *r);
                    prop_assert_eq!(record.result_of(state), expected);
                }
            }

            #[test]
            fn invalidation_clears_exactly_dependent_states(
                writes in proptest::collection::vec((arb_state(), arb_result()), 0..12),
                kind in prop_oneof![Just(ArtifactKind::Test), Just(ArtifactKind::Fix)],
            ) {
                let mut record = VerificationRecord::new();
                for (state, result) in &writes {
                    record.record_run(*state, *result);
                }
                let before: Vec<_> = VerificationState::ALL
                    .into_iter()
                    .map(|s| record.result_of(s))
                    .collect();
                record.invalidate(kind);
                let dependent = VerificationRecord::dependent_states(kind);
                for (i, state) in VerificationState::ALL.into_iter().enumerate() {
                    if dependent.contains(&state) {
                        prop_assert_eq!(record.result_of(state), None);
                    } else {
                        prop_assert_eq!(record.result_of(state), before[i]);
                    }
                }
            }
        }
    }
}
