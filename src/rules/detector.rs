//! Combination detection.
//!
//! `detect` classifies a captured collection once into `CardCounts` and then
//! tests every yaku in table order. Unsatisfied yaku are absent from the
//! result, never zero-valued.
//!
//! ## Evaluation rules
//!
//! - Bright yaku are mutually exclusive by count. With exactly three brights
//!   and the rain bright among them nothing is awarded.
//! - The two sake yaku are independent of each other.
//! - When both ribbon sets are complete only the combined yaku is awarded.
//! - Initial-hand yaku are merged in only when a non-empty hand is supplied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::counts::CardCounts;
use super::yaku::Yaku;
use crate::cards::{Card, CardTag};
use crate::core::RuleVariant;

/// Satisfied yaku and their points, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YakuScores(BTreeMap<Yaku, u32>);

impl YakuScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a yaku from its table scoring. Below-threshold counts award nothing.
    fn award(&mut self, yaku: Yaku, count: u32) {
        if let Some(points) = yaku.scoring().points(count) {
            self.0.insert(yaku, points);
        }
    }

    #[must_use]
    pub fn get(&self, yaku: Yaku) -> Option<u32> {
        self.0.get(&yaku).copied()
    }

    #[must_use]
    pub fn contains(&self, yaku: Yaku) -> bool {
        self.0.contains_key(&yaku)
    }

    /// Sum of all awarded points.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Yaku, u32)> + '_ {
        self.0.iter().map(|(y, p)| (*y, *p))
    }

    /// Merge another result in. Entries of `other` replace equal keys.
    pub fn merge(&mut self, other: YakuScores) {
        self.0.extend(other.0);
    }
}

impl IntoIterator for YakuScores {
    type Item = (Yaku, u32);
    type IntoIter = std::collections::btree_map::IntoIter<Yaku, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Detect all yaku formed by `captured`, plus initial-hand yaku when a hand is given.
///
/// ## Example
///
/// ```
/// use hanafuda_advisor::cards::parse_cards;
/// use hanafuda_advisor::core::RuleVariant;
/// use hanafuda_advisor::rules::{detect, Yaku};
///
/// let captured = parse_cards(["1:bright", "3:bright", "8:bright"]).unwrap();
/// let scores = detect(&captured, RuleVariant::Holo, None);
/// assert_eq!(scores.get(Yaku::Sanko), Some(5));
/// ```
#[must_use]
pub fn detect(captured: &[Card], variant: RuleVariant, initial_hand: Option<&[Card]>) -> YakuScores {
    let c = CardCounts::from_cards(captured);
    let mut scores = YakuScores::new();

    match c.bright {
        n if n >= 5 => scores.award(Yaku::Gokou, n),
        4 if c.has_rain() => scores.award(Yaku::AmeShiko, 4),
        4 => scores.award(Yaku::Shiko, 4),
        3 if !c.has_rain() => scores.award(Yaku::Sanko, 3),
        _ => {}
    }

    if c.has_tag(CardTag::Boar) && c.has_tag(CardTag::Deer) && c.has_tag(CardTag::Butterfly) {
        scores.award(Yaku::Inoshikacho, 3);
    }

    if c.has_tag(CardTag::Sake) {
        if c.has_tag(CardTag::Cherry) {
            scores.award(Yaku::HanamiZake, 2);
        }
        if c.has_tag(CardTag::Moon) {
            scores.award(Yaku::TsukimiZake, 2);
        }
    }

    match (c.red_complete(), c.blue_complete()) {
        (true, true) => scores.award(Yaku::AkatanAotan, 6),
        (true, false) => scores.award(Yaku::Akatan, 3),
        (false, true) => scores.award(Yaku::Aotan, 3),
        (false, false) => {}
    }

    scores.award(Yaku::Tane, c.animal);
    scores.award(Yaku::Tan, c.ribbon_total());
    scores.award(Yaku::Kasu, c.kasu_for(variant));

    if let Some(hand) = initial_hand {
        scores.merge(detect_initial_hand(hand));
    }

    scores
}

/// Yaku formed by the dealt hand alone.
#[must_use]
pub fn detect_initial_hand(hand: &[Card]) -> YakuScores {
    let mut scores = YakuScores::new();
    if hand.is_empty() {
        return scores;
    }

    let c = CardCounts::from_cards(hand);
    if c.full_months() > 0 {
        scores.award(Yaku::TeYon, 4);
    }
    if c.month_pairs() >= 4 {
        scores.award(Yaku::Kuttsuki, c.month_pairs());
    }
    scores
}
