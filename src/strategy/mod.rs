//! Move suggestion.
//!
//! - `rank_moves`: greedy one-ply ranking of every legal play
//! - `best_combination_hints`: progress hints for the current turn
//! - `Advisor`: both of the above under one `AdvisorConfig`

pub mod hints;
pub mod moves;

pub use hints::{best_combination_hints, best_combination_hints_with};
pub use moves::{rank_moves, rank_moves_with, Move, MoveNote};

use crate::cards::Card;
use crate::core::{AdvisorConfig, GameState};
use crate::rules::ProgressHint;

/// Configured entry point for the move ranker and hints.
#[derive(Clone, Debug, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    #[must_use]
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    #[must_use]
    pub fn rank_moves(
        &self,
        hand: &[Card],
        field: &[Card],
        captured_self: &[Card],
        captured_opp: &[Card],
    ) -> Vec<Move> {
        rank_moves_with(&self.config, hand, field, captured_self, captured_opp)
    }

    #[must_use]
    pub fn hints(&self, hand: &[Card], field: &[Card], captured_self: &[Card]) -> Vec<ProgressHint> {
        best_combination_hints_with(&self.config, hand, field, captured_self)
    }

    /// Rank the moves of a snapshot.
    #[must_use]
    pub fn suggest(&self, state: &GameState) -> Vec<Move> {
        let hand = state.hand_cards();
        let field = state.field_cards();
        let own = state.captured_self_cards();
        let opp = state.captured_opp_cards();
        self.rank_moves(&hand, &field, &own, &opp)
    }

    /// Hints for a snapshot.
    #[must_use]
    pub fn suggest_hints(&self, state: &GameState) -> Vec<ProgressHint> {
        self.hints(&state.hand_cards(), &state.field_cards(), &state.captured_self_cards())
    }
}
