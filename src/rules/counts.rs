//! Category counts used by yaku detection.
//!
//! `CardCounts` is filled in a single pass over a card collection and holds
//! everything the detector and the progress advisor test against.

use crate::cards::{Card, CardKind, CardTag, BLUE_RIBBON_MONTHS, RED_RIBBON_MONTHS};
use crate::core::RuleVariant;

/// Fixed-shape counts for one card collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCounts {
    pub bright: u32,
    pub animal: u32,
    pub ribbon_red: u32,
    pub ribbon_blue: u32,
    pub ribbon_plain: u32,
    pub kasu: u32,
    /// Sake cups seen; the holo variant adds these to `kasu`.
    pub sake_cups: u32,
    tags: [u32; CardTag::COUNT],
    /// Cards per month, index 0 unused.
    months: [u32; 13],
    /// Bit `m` set when a red poetry ribbon of month `m` is held.
    red_ribbon_months: u16,
    /// Bit `m` set when a blue ribbon of month `m` is held.
    blue_ribbon_months: u16,
}

impl CardCounts {
    /// Count a collection.
    #[must_use]
    pub fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut counts = Self::default();
        for card in cards {
            counts.add(card);
        }
        counts
    }

    fn add(&mut self, card: &Card) {
        let month = card.month();
        match card.kind() {
            CardKind::Bright => self.bright += 1,
            CardKind::Animal => {
                self.animal += 1;
                if card.is_sake_cup() {
                    self.sake_cups += 1;
                }
            }
            CardKind::Ribbon => match card.tag() {
                Some(CardTag::PoetryRed) => {
                    self.ribbon_red += 1;
                    if RED_RIBBON_MONTHS.contains(&month) {
                        self.red_ribbon_months |= 1 << month;
                    }
                }
                Some(CardTag::Blue) => {
                    self.ribbon_blue += 1;
                    if BLUE_RIBBON_MONTHS.contains(&month) {
                        self.blue_ribbon_months |= 1 << month;
                    }
                }
                _ => self.ribbon_plain += 1,
            },
            CardKind::Kasu => self.kasu += 1,
        }

        if let Some(tag) = card.tag() {
            self.tags[tag.index()] += 1;
        }
        if let Some(slot) = self.months.get_mut(month as usize) {
            *slot += 1;
        }
    }

    /// Cards carrying `tag`.
    #[must_use]
    pub fn tag(&self, tag: CardTag) -> u32 {
        self.tags[tag.index()]
    }

    #[must_use]
    pub fn has_tag(&self, tag: CardTag) -> bool {
        self.tag(tag) > 0
    }

    /// Cards of `month`.
    #[must_use]
    pub fn month(&self, month: u8) -> u32 {
        self.months.get(month as usize).copied().unwrap_or(0)
    }

    /// Red, blue and plain ribbons together.
    #[must_use]
    pub fn ribbon_total(&self) -> u32 {
        self.ribbon_red + self.ribbon_blue + self.ribbon_plain
    }

    /// Kasu count under the given rule variant.
    #[must_use]
    pub fn kasu_for(&self, variant: RuleVariant) -> u32 {
        if variant.sake_counts_as_kasu() {
            self.kasu + self.sake_cups
        } else {
            self.kasu
        }
    }

    /// Number of months 1-3 whose red poetry ribbon is held.
    #[must_use]
    pub fn red_months_held(&self) -> u32 {
        self.red_ribbon_months.count_ones()
    }

    /// Number of months 6, 9, 10 whose blue ribbon is held.
    #[must_use]
    pub fn blue_months_held(&self) -> u32 {
        self.blue_ribbon_months.count_ones()
    }

    #[must_use]
    pub fn red_complete(&self) -> bool {
        self.red_months_held() as usize == RED_RIBBON_MONTHS.len()
    }

    #[must_use]
    pub fn blue_complete(&self) -> bool {
        self.blue_months_held() as usize == BLUE_RIBBON_MONTHS.len()
    }

    /// Whether the rain bright is among the cards.
    #[must_use]
    pub fn has_rain(&self) -> bool {
        self.has_tag(CardTag::Rain)
    }

    /// Months holding all four of their cards.
    #[must_use]
    pub fn full_months(&self) -> u32 {
        self.months.iter().filter(|&&n| n == 4).count() as u32
    }

    /// Sum over months of `count / 2`.
    #[must_use]
    pub fn month_pairs(&self) -> u32 {
        self.months.iter().map(|n| n / 2).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn counts(tokens: &[&str]) -> CardCounts {
        CardCounts::from_cards(&parse_cards(tokens).unwrap())
    }

    #[test]
    fn test_empty() {
        let c = CardCounts::from_cards(&[]);
        assert_eq!(c, CardCounts::default());
        assert_eq!(c.ribbon_total(), 0);
        assert_eq!(c.month_pairs(), 0);
    }

    #[test]
    fn test_ribbon_buckets() {
        let c = counts(&["1:ribbon-poetry-red", "2:ribbon-poetry-red", "6:ribbon-blue", "4:ribbon-plain"]);
        assert_eq!(c.ribbon_red, 2);
        assert_eq!(c.ribbon_blue, 1);
        assert_eq!(c.ribbon_plain, 1);
        assert_eq!(c.ribbon_total(), 4);
        assert_eq!(c.red_months_held(), 2);
        assert_eq!(c.blue_months_held(), 1);
        assert!(!c.red_complete());
    }

    #[test]
    fn test_duplicate_ribbon_counts_one_month() {
        let c = counts(&["1:ribbon-poetry-red", "1:ribbon-poetry-red"]);
        assert_eq!(c.ribbon_red, 2);
        assert_eq!(c.red_months_held(), 1);
    }

    #[test]
    fn test_sake_cup_counts_both_ways_under_holo() {
        let c = counts(&["9:animal-sake", "1:kasu"]);
        assert_eq!(c.animal, 1);
        assert_eq!(c.kasu_for(RuleVariant::Holo), 2);
        assert_eq!(c.kasu_for(RuleVariant::Classic), 1);
        assert!(c.has_tag(CardTag::Sake));
    }

    #[test]
    fn test_month_buckets() {
        let c = counts(&["1:bright", "1:ribbon", "1:kasu", "1:kasu", "2:kasu", "2:kasu", "3:kasu"]);
        assert_eq!(c.month(1), 4);
        assert_eq!(c.month(2), 2);
        assert_eq!(c.full_months(), 1);
        assert_eq!(c.month_pairs(), 3);
    }
}
