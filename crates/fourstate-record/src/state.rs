//! Toggle states and the four canonical verification states
//!
//! A verification pair carries two independent boolean switches. The four
//! combinations are named with roman numerals and checked in a fixed
//! required pattern; the naming follows the protocol, not bit order:
//! State II is fix-only, State III is test-only.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Errors for state construction and parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Label or index names a combination outside the canonical four
    #[error("invalid state combination: '{0}' (expected I, II, III, or IV)")]
    InvalidStateCombination(String),
}

/// The two independent toggle switches of a verification pair
///
/// Exactly one combination is active at any moment; all four combinations
/// of the two flags are canonical, so construction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleState {
    /// Whether the new test is enabled
    pub test_enabled: bool,
    /// Whether the fix is enabled
    pub fix_enabled: bool,
}

impl ToggleState {
    /// Create a toggle state from its two flags
    #[inline]
    #[must_use]
    pub const fn new(test_enabled: bool, fix_enabled: bool) -> Self {
        Self {
            test_enabled,
            fix_enabled,
        }
    }

    /// The canonical named state for this flag combination
    #[inline]
    #[must_use]
    pub const fn verification_state(self) -> VerificationState {
        match (self.fix_enabled, self.test_enabled) {
            (false, false) => VerificationState::I,
            (true, false) => VerificationState::II,
            (false, true) => VerificationState::III,
            (true, true) => VerificationState::IV,
        }
    }
}

impl From<VerificationState> for ToggleState {
    fn from(state: VerificationState) -> Self {
        state.toggles()
    }
}

impl Display for ToggleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "test={} fix={}",
            if self.test_enabled { "on" } else { "off" },
            if self.fix_enabled { "on" } else { "off" }
        )
    }
}

/// The four canonical states of the verification protocol
///
/// | State | fix | test | required outcome |
/// |-------|-----|------|------------------|
/// | I     | off | off  | pass             |
/// | II    | on  | off  | pass             |
/// | III   | off | on   | fail             |
/// | IV    | on  | on   | pass             |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum VerificationState {
    /// Baseline: fix off, test off
    I,
    /// Fix only: fix on, test off
    II,
    /// Test only: fix off, test on
    III,
    /// Combined: fix on, test on
    IV,
}

impl VerificationState {
    /// All four states in canonical order
    pub const ALL: [VerificationState; 4] = [
        VerificationState::I,
        VerificationState::II,
        VerificationState::III,
        VerificationState::IV,
    ];

    /// The toggle flags for this state
    #[inline]
    #[must_use]
    pub const fn toggles(self) -> ToggleState {
        match self {
            VerificationState::I => ToggleState::new(false, false),
            VerificationState::II => ToggleState::new(false, true),
            VerificationState::III => ToggleState::new(true, false),
            VerificationState::IV => ToggleState::new(true, true),
        }
    }

    /// 1-based index (I=1 .. IV=4)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            VerificationState::I => 1,
            VerificationState::II => 2,
            VerificationState::III => 3,
            VerificationState::IV => 4,
        }
    }

    /// State for a 1-based index
    ///
    /// # Errors
    /// Returns [`StateError::InvalidStateCombination`] for indices outside 1..=4
    #[inline]
    pub fn try_from_index(index: u8) -> Result<Self, StateError> {
        match index {
            1 => Ok(VerificationState::I),
            2 => Ok(VerificationState::II),
            3 => Ok(VerificationState::III),
            4 => Ok(VerificationState::IV),
            other => Err(StateError::InvalidStateCombination(other.to_string())),
        }
    }
}

impl Display for VerificationState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            VerificationState::I => "I",
            VerificationState::II => "II",
            VerificationState::III => "III",
            VerificationState::IV => "IV",
        };
        write!(f, "{label}")
    }
}

impl FromStr for VerificationState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" | "i" | "1" => Ok(VerificationState::I),
            "II" | "ii" | "2" => Ok(VerificationState::II),
            "III" | "iii" | "3" => Ok(VerificationState::III),
            "IV" | "iv" | "4" => Ok(VerificationState::IV),
            other => Err(StateError::InvalidStateCombination(other.to_string())),
        }
    }
}
