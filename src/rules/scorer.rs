//! Point totals.

use super::detector::detect;
use crate::cards::Card;
use crate::core::RuleVariant;

/// Total points of every yaku formed by `captured` (and `initial_hand`, if given).
#[must_use]
pub fn score(captured: &[Card], variant: RuleVariant, initial_hand: Option<&[Card]>) -> u32 {
    detect(captured, variant, initial_hand).total()
}

/// Points gained by adding `taken` to `captured`, without touching either.
#[must_use]
pub fn score_gain(captured: &[Card], taken: &[Card], variant: RuleVariant) -> i32 {
    let before = score(captured, variant, None);
    let mut after_cards = Vec::with_capacity(captured.len() + taken.len());
    after_cards.extend_from_slice(captured);
    after_cards.extend_from_slice(taken);
    let after = score(&after_cards, variant, None);
    after as i32 - before as i32
}
