//! One-ply move ranking.
//!
//! Every hand card is tried against every same-month field card. A capture
//! is valued by the points it would add to the player's own pile, plus a
//! flat denial bonus when two or more field cards share its month. Cards
//! with no match can only be discarded to the field and are worth zero.
//!
//! The ranker is greedy on purpose: it does not look at the opponent's next
//! turn beyond the static denial bonus, and never searches deeper than one
//! play. Cost is O(hand × field) detector calls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::Card;
use crate::core::AdvisorConfig;
use crate::rules::score_gain;

/// Why a move was suggested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveNote {
    /// The capture raises the player's own yaku score.
    YakuIncrease,
    /// The capture breaks up a same-month pair the opponent could sweep.
    DeniesOpponent,
    /// A capture with no immediate effect.
    StandardCapture,
    /// Nothing matches; the card is placed on the field.
    NoCapture,
}

impl std::fmt::Display for MoveNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveNote::YakuIncrease => "combination score increases",
            MoveNote::DeniesOpponent => "denies opponent",
            MoveNote::StandardCapture => "standard capture",
            MoveNote::NoCapture => "no capture",
        };
        f.write_str(text)
    }
}

/// A candidate play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Hand card played.
    pub play: Card,
    /// Field card captured, if any.
    pub capture: Option<Card>,
    /// Yaku points gained plus `denial_bonus`.
    pub score_delta: i32,
    /// The denial part of `score_delta`.
    pub denial_bonus: i32,
    pub note: MoveNote,
}

impl Move {
    fn place(play: Card) -> Self {
        Self {
            play,
            capture: None,
            score_delta: 0,
            denial_bonus: 0,
            note: MoveNote::NoCapture,
        }
    }

    /// Points the capture adds to the player's own yaku.
    #[must_use]
    pub fn yaku_gain(&self) -> i32 {
        self.score_delta - self.denial_bonus
    }

    /// Sort key: value first, then the played card's kind.
    fn rank_key(&self) -> (i32, u8) {
        (self.score_delta, self.play.kind().priority())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.play)?;
        if let Some(capture) = self.capture {
            write!(f, " +{}", capture)?;
        }
        write!(f, "  Δscore={}  {}", self.score_delta, self.note)
    }
}

/// Rank every legal play and return the best `config.max_moves`.
///
/// The opponent's captures are accepted for interface stability; the
/// one-ply heuristic does not read them.
#[must_use]
pub fn rank_moves_with(
    config: &AdvisorConfig,
    hand: &[Card],
    field: &[Card],
    captured_self: &[Card],
    _captured_opp: &[Card],
) -> Vec<Move> {
    if hand.is_empty() || field.is_empty() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for &play in hand {
        let targets: SmallVec<[Card; 4]> = field.iter().filter(|f| f.same_month(&play)).copied().collect();

        if targets.is_empty() {
            moves.push(Move::place(play));
            continue;
        }

        let denial_bonus = if targets.len() >= 2 { config.denial_bonus } else { 0 };
        for &target in &targets {
            let gain = score_gain(captured_self, &[play, target], config.variant);
            let note = if gain > 0 {
                MoveNote::YakuIncrease
            } else if denial_bonus > 0 {
                MoveNote::DeniesOpponent
            } else {
                MoveNote::StandardCapture
            };
            trace!(%play, %target, gain, denial_bonus, "capture candidate");
            moves.push(Move {
                play,
                capture: Some(target),
                score_delta: gain + denial_bonus,
                denial_bonus,
                note,
            });
        }
    }

    // Stable sort keeps enumeration order among exact ties
    moves.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
    debug!(candidates = moves.len(), keep = config.max_moves, "ranked moves");
    moves.truncate(config.max_moves);
    moves
}

/// Rank moves with the default configuration.
///
/// ## Example
///
/// ```
/// use hanafuda_advisor::cards::parse_cards;
/// use hanafuda_advisor::strategy::{rank_moves, MoveNote};
///
/// let hand = parse_cards(["8:bright", "2:kasu"]).unwrap();
/// let field = parse_cards(["8:kasu", "5:kasu"]).unwrap();
/// let captured = parse_cards(["1:bright", "3:bright"]).unwrap();
///
/// let moves = rank_moves(&hand, &field, &captured, &[]);
/// assert_eq!(moves[0].score_delta, 5);
/// assert_eq!(moves[0].note, MoveNote::YakuIncrease);
/// ```
#[must_use]
pub fn rank_moves(hand: &[Card], field: &[Card], captured_self: &[Card], captured_opp: &[Card]) -> Vec<Move> {
    rank_moves_with(&AdvisorConfig::default(), hand, field, captured_self, captured_opp)
}
