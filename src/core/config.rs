//! Advisor configuration.
//!
//! - `RuleVariant`: Which counting rules the scorer applies
//! - `AdvisorConfig`: Variant plus the knobs of the move ranker and hints

use serde::{Deserialize, Serialize};

/// Rule set selector.
///
/// Variants alter how certain cards are counted, never the yaku table itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    /// Hololive house rules: the month 9 sake cup also counts as kasu.
    #[default]
    Holo,
    /// Standard Koi-Koi counting.
    Classic,
}

impl RuleVariant {
    /// Whether the sake cup counts toward kasu in addition to animals.
    #[must_use]
    pub const fn sake_counts_as_kasu(self) -> bool {
        matches!(self, RuleVariant::Holo)
    }
}

impl std::fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleVariant::Holo => write!(f, "holo"),
            RuleVariant::Classic => write!(f, "classic"),
        }
    }
}

/// Advisor configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Counting rules used for every score computation.
    pub variant: RuleVariant,

    /// Maximum number of ranked moves returned (default: 5).
    pub max_moves: usize,

    /// Maximum number of combination hints returned (default: 5).
    pub max_hints: usize,

    /// Credit for taking one of two or more same-month field cards,
    /// which spoils the opponent's sweep of that month (default: 1).
    pub denial_bonus: i32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            variant: RuleVariant::Holo,
            max_moves: 5,
            max_hints: 5,
            denial_bonus: 1,
        }
    }
}

impl AdvisorConfig {
    /// Use a different rule variant.
    #[must_use]
    pub fn with_variant(mut self, variant: RuleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Change how many moves are returned.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Change how many hints are returned.
    #[must_use]
    pub fn with_max_hints(mut self, max: usize) -> Self {
        self.max_hints = max;
        self
    }

    /// Change the denial bonus.
    #[must_use]
    pub fn with_denial_bonus(mut self, bonus: i32) -> Self {
        self.denial_bonus = bonus;
        self
    }
}
