//! Dealing a Koi-Koi round.
//!
//! Each player gets eight cards, eight go face up to the field, and the
//! remaining twenty-four form the stock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::AdvisorConfig;
use super::rng::GameRng;
use super::state::GameState;
use crate::cards::{deck, Card};

/// Cards dealt to each hand and to the field.
pub const DEAL_SIZE: usize = 8;

/// One dealt round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hand: Vec<Card>,
    pub opp_hand: Vec<Card>,
    pub field: Vec<Card>,
    pub stock: Vec<Card>,
}

impl Deal {
    /// Snapshot from the first player's seat, before any capture.
    #[must_use]
    pub fn into_state(self, config: AdvisorConfig) -> GameState {
        GameState::new(self.hand, self.field).with_config(config)
    }
}

/// Seeded dealer. Equal seeds deal equal rounds.
#[derive(Clone, Debug)]
pub struct Dealer {
    rng: GameRng,
}

impl Dealer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Deal the next round from an independent fork of the dealer's stream.
    pub fn deal(&mut self) -> Deal {
        let mut round = self.rng.fork();
        let mut cards = deck().to_vec();
        round.shuffle(&mut cards);

        let stock = cards.split_off(DEAL_SIZE * 3);
        let field = cards.split_off(DEAL_SIZE * 2);
        let opp_hand = cards.split_off(DEAL_SIZE);
        let hand = cards;

        debug!(seed = round.seed(), stock = stock.len(), "dealt round");
        Deal {
            hand,
            opp_hand,
            field,
            stock,
        }
    }
}
