//! Game snapshot.
//!
//! A `GameState` is an immutable view of one moment of a match: the
//! player's hand, the field, and both capture piles. It is built once and
//! never mutated; collections are `im` persistent vectors, so clones are
//! O(1) and empty collections share no allocation.
//!
//! ## JSON records
//!
//! ```json
//! {
//!   "hand": ["8:bright", "2:kasu"],
//!   "field": ["8:kasu"],
//!   "captured_self": ["1:bright", "3:bright"],
//!   "captured_opp": [],
//!   "config": { "variant": "holo" }
//! }
//! ```
//!
//! Every key is optional. Card tokens follow the `cards::token` grammar.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::AdvisorConfig;
use crate::cards::{parse_card, Card};
use crate::error::Result;
use crate::rules::{detect, score, YakuScores};

/// Immutable match snapshot from one player's point of view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    hand: Vector<Card>,
    field: Vector<Card>,
    captured_self: Vector<Card>,
    captured_opp: Vector<Card>,
    config: AdvisorConfig,
}

/// Raw record as read from JSON, before token parsing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GameRecord {
    hand: Vec<String>,
    field: Vec<String>,
    captured_self: Vec<String>,
    captured_opp: Vec<String>,
    config: AdvisorConfig,
}

fn parse_pile(tokens: &[String]) -> Result<Vector<Card>> {
    tokens
        .iter()
        .map(|t| parse_card(t).map_err(Into::into))
        .collect()
}

impl GameState {
    /// Snapshot with a hand and field; both capture piles empty.
    #[must_use]
    pub fn new(hand: impl IntoIterator<Item = Card>, field: impl IntoIterator<Item = Card>) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            field: field.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the player's capture pile.
    #[must_use]
    pub fn with_captured_self(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.captured_self = cards.into_iter().collect();
        self
    }

    /// Set the opponent's capture pile.
    #[must_use]
    pub fn with_captured_opp(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.captured_opp = cards.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: AdvisorConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse a JSON record.
    ///
    /// Fails on malformed JSON or on the first card token that does not parse.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: GameRecord = serde_json::from_str(json)?;
        let state = Self {
            hand: parse_pile(&record.hand)?,
            field: parse_pile(&record.field)?,
            captured_self: parse_pile(&record.captured_self)?,
            captured_opp: parse_pile(&record.captured_opp)?,
            config: record.config,
        };
        debug!(
            hand = state.hand.len(),
            field = state.field.len(),
            captured_self = state.captured_self.len(),
            captured_opp = state.captured_opp.len(),
            variant = %state.config.variant,
            "loaded game state"
        );
        Ok(state)
    }

    /// Serialize back to a JSON record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn field(&self) -> &Vector<Card> {
        &self.field
    }

    #[must_use]
    pub fn captured_self(&self) -> &Vector<Card> {
        &self.captured_self
    }

    #[must_use]
    pub fn captured_opp(&self) -> &Vector<Card> {
        &self.captured_opp
    }

    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Contiguous copy of the hand, for slice-based APIs.
    #[must_use]
    pub fn hand_cards(&self) -> Vec<Card> {
        self.hand.iter().copied().collect()
    }

    #[must_use]
    pub fn field_cards(&self) -> Vec<Card> {
        self.field.iter().copied().collect()
    }

    #[must_use]
    pub fn captured_self_cards(&self) -> Vec<Card> {
        self.captured_self.iter().copied().collect()
    }

    #[must_use]
    pub fn captured_opp_cards(&self) -> Vec<Card> {
        self.captured_opp.iter().copied().collect()
    }

    /// Yaku currently formed by the player's captures.
    #[must_use]
    pub fn yaku(&self) -> YakuScores {
        detect(&self.captured_self_cards(), self.config.variant, None)
    }

    /// Points currently held by the player.
    #[must_use]
    pub fn points(&self) -> u32 {
        score(&self.captured_self_cards(), self.config.variant, None)
    }
}
