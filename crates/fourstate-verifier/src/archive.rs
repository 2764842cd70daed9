//! Archival of completed verification records
//!
//! Once a pair's scaffolding is removed, its record is either discarded or
//! kept as evidence. [`ArchivedRecord`] is the serializable evidence form:
//! the pair identity, when verification concluded, the final verdict, and
//! the record itself.

use crate::error::{VerifierError, VerifierResult};
use crate::verdict::Verdict;
use crate::verifier::{PairId, ToggleVerifier};
use chrono::{DateTime, Utc};
use fourstate_record::VerificationRecord;
use serde::{Deserialize, Serialize};

/// Evidence snapshot of a concluded verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedRecord {
    /// The pair this record belongs to
    pub pair: PairId,
    /// When the archive was taken
    pub archived_at: DateTime<Utc>,
    /// Verdict at archival time
    pub verdict: Verdict,
    /// The full record, including provenance stamps
    pub record: VerificationRecord,
}

impl ArchivedRecord {
    /// Snapshot a verifier whose four runs are all recorded
    ///
    /// Both `Verified` and `Failed` conclusions are archivable; what is not
    /// is an incomplete record, since it concludes nothing.
    ///
    /// # Errors
    /// Returns [`VerifierError::Incomplete`] if any state lacks an outcome.
    pub fn of(verifier: &ToggleVerifier) -> VerifierResult<Self> {
        let record = verifier.record();
        if !record.is_complete() {
            return Err(VerifierError::Incomplete {
                recorded: record.recorded_count(),
            });
        }
        Ok(Self {
            pair: verifier.id(),
            archived_at: Utc::now(),
            verdict: verifier.verdict(),
            record: record.clone(),
        })
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns [`VerifierError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> VerifierResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    /// Returns [`VerifierError::Serialization`] if decoding fails.
    pub fn from_json(json: &str) -> VerifierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
