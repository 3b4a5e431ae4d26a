//! The 48-card Hanafuda deck.
//!
//! The catalog is built once per process and never mutated. It owns the
//! sorted deck, the token index used by the parser, and the tag options
//! grouped by kind.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::card::{Card, CardKind, CardTag};

/// Months whose ribbon is a red poetry ribbon.
pub const RED_RIBBON_MONTHS: [u8; 3] = [1, 2, 3];

/// Months whose ribbon is blue.
pub const BLUE_RIBBON_MONTHS: [u8; 3] = [6, 9, 10];

const BRIGHTS: [Card; 5] = [
    Card::tagged(1, CardKind::Bright, CardTag::Crane),
    Card::tagged(3, CardKind::Bright, CardTag::Cherry),
    Card::tagged(8, CardKind::Bright, CardTag::Moon),
    Card::tagged(11, CardKind::Bright, CardTag::Rain),
    Card::tagged(12, CardKind::Bright, CardTag::Phoenix),
];

const ANIMALS: [Card; 9] = [
    Card::tagged(2, CardKind::Animal, CardTag::Nightingale),
    Card::tagged(4, CardKind::Animal, CardTag::Cuckoo),
    Card::tagged(5, CardKind::Animal, CardTag::Bridge),
    Card::tagged(6, CardKind::Animal, CardTag::Butterfly),
    Card::tagged(7, CardKind::Animal, CardTag::Boar),
    Card::tagged(8, CardKind::Animal, CardTag::Geese),
    Card::tagged(9, CardKind::Animal, CardTag::Sake),
    Card::tagged(10, CardKind::Animal, CardTag::Deer),
    Card::tagged(11, CardKind::Animal, CardTag::Swallow),
];

/// Immutable card catalog.
#[derive(Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<String, Card>,
    tags_by_kind: [Vec<CardTag>; 4],
}

impl Catalog {
    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    fn build() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(48);
        cards.extend_from_slice(&BRIGHTS);
        cards.extend_from_slice(&ANIMALS);

        for month in 1..=12u8 {
            let tag = if RED_RIBBON_MONTHS.contains(&month) {
                CardTag::PoetryRed
            } else if BLUE_RIBBON_MONTHS.contains(&month) {
                CardTag::Blue
            } else {
                CardTag::Plain
            };
            cards.push(Card::tagged(month, CardKind::Ribbon, tag));
        }

        // Fill every month up to four cards with kasu
        let mut per_month = [0usize; 13];
        for card in &cards {
            per_month[card.month() as usize] += 1;
        }
        for month in 1..=12u8 {
            for _ in per_month[month as usize]..4 {
                cards.push(Card::kasu(month));
            }
        }

        cards.sort();
        debug_assert_eq!(cards.len(), 48, "deck size mismatch");

        let index = cards.iter().map(|c| (c.to_string(), *c)).collect();

        let mut tags_by_kind: [Vec<CardTag>; 4] = Default::default();
        for card in &cards {
            if let Some(tag) = card.tag() {
                let slot = &mut tags_by_kind[kind_slot(card.kind())];
                if !slot.contains(&tag) {
                    slot.push(tag);
                }
            }
        }

        Self {
            cards,
            index,
            tags_by_kind,
        }
    }

    /// All 48 cards, sorted.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Exact lookup by canonical token.
    #[must_use]
    pub fn by_token(&self, token: &str) -> Option<Card> {
        self.index.get(token).copied()
    }

    /// Find the first card with the given month and kind, and tag when one is given.
    #[must_use]
    pub fn lookup(&self, month: u8, kind: CardKind, tag: Option<CardTag>) -> Option<Card> {
        self.cards
            .iter()
            .find(|c| c.month() == month && c.kind() == kind && (tag.is_none() || c.tag() == tag))
            .copied()
    }

    /// Cards of a given month.
    pub fn month(&self, month: u8) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.month() == month)
    }

    /// Distinct tags found on cards of `kind`, in deck order.
    #[must_use]
    pub fn tags_for(&self, kind: CardKind) -> &[CardTag] {
        &self.tags_by_kind[kind_slot(kind)]
    }
}

fn kind_slot(kind: CardKind) -> usize {
    match kind {
        CardKind::Bright => 0,
        CardKind::Animal => 1,
        CardKind::Ribbon => 2,
        CardKind::Kasu => 3,
    }
}

/// Shortcut for `Catalog::global().cards()`.
#[must_use]
pub fn deck() -> &'static [Card] {
    Catalog::global().cards()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_size() {
        assert_eq!(deck().len(), 48);
    }

    #[test]
    fn test_four_cards_per_month() {
        let catalog = Catalog::global();
        for month in 1..=12 {
            assert_eq!(catalog.month(month).count(), 4, "month {}", month);
        }
    }

    #[test]
    fn test_kind_totals() {
        let count = |kind| deck().iter().filter(|c| c.kind() == kind).count();
        assert_eq!(count(CardKind::Bright), 5);
        assert_eq!(count(CardKind::Animal), 9);
        assert_eq!(count(CardKind::Ribbon), 12);
        assert_eq!(count(CardKind::Kasu), 22);
    }

    #[test]
    fn test_ribbon_partition() {
        for card in deck().iter().filter(|c| c.kind() == CardKind::Ribbon) {
            let expected = if RED_RIBBON_MONTHS.contains(&card.month()) {
                CardTag::PoetryRed
            } else if BLUE_RIBBON_MONTHS.contains(&card.month()) {
                CardTag::Blue
            } else {
                CardTag::Plain
            };
            assert_eq!(card.tag(), Some(expected));
        }
    }

    #[test]
    fn test_deck_is_sorted() {
        let mut sorted = deck().to_vec();
        sorted.sort();
        assert_eq!(sorted, deck());
    }

    #[test]
    fn test_by_token() {
        let catalog = Catalog::global();
        assert_eq!(
            catalog.by_token("11:bright-rain"),
            Some(Card::tagged(11, CardKind::Bright, CardTag::Rain))
        );
        assert_eq!(catalog.by_token("11:bright"), None);
    }

    #[test]
    fn test_lookup_ignores_missing_tag() {
        let catalog = Catalog::global();
        assert_eq!(
            catalog.lookup(9, CardKind::Animal, None),
            Some(Card::tagged(9, CardKind::Animal, CardTag::Sake))
        );
        assert_eq!(catalog.lookup(1, CardKind::Animal, None), None);
    }

    #[test]
    fn test_off_deck_cards_are_unreachable() {
        let catalog = Catalog::global();
        assert_eq!(catalog.lookup(1, CardKind::Kasu, Some(CardTag::Rain)), None);
        assert_eq!(catalog.lookup(13, CardKind::Kasu, None), None);
        assert_eq!(catalog.lookup(0, CardKind::Bright, None), None);

        // A bogus tag falls back to the real card of that month and kind
        let card = crate::cards::parse_card("1:kasu-rain").unwrap();
        assert_eq!(card.tag(), None);
        assert!(catalog.cards().contains(&card));
    }

    #[test]
    fn test_tags_for_kind() {
        let catalog = Catalog::global();
        assert_eq!(catalog.tags_for(CardKind::Bright).len(), 5);
        assert_eq!(catalog.tags_for(CardKind::Animal).len(), 9);
        assert_eq!(
            catalog.tags_for(CardKind::Ribbon),
            &[CardTag::PoetryRed, CardTag::Plain, CardTag::Blue]
        );
        assert!(catalog.tags_for(CardKind::Kasu).is_empty());
    }
}
