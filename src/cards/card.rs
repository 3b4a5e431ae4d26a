//! Card value types.
//!
//! A Hanafuda card is fully described by its month, its kind, and an
//! optional tag that tells apart the special cards of a month (the rain
//! bright, the sake cup, the blue ribbon, ...). Two cards with the same
//! triple are interchangeable; the plain kasu of a month are exactly that.
//!
//! Cards render as tokens of the form `"<month>:<kind>[-<tag>]"`, which is
//! also the format accepted by [`parse_card`](super::parse_card).

use serde::{Deserialize, Serialize};

use super::token::{parse_card, CardParseError};

/// Card family, in descending nominal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Hikari. Five exist.
    Bright,
    /// Tane.
    Animal,
    /// Tanzaku, split by tag into red-poetry, blue and plain.
    Ribbon,
    /// Filler cards.
    Kasu,
}

impl CardKind {
    /// All kinds in declaration order.
    pub const ALL: [CardKind; 4] = [
        CardKind::Bright,
        CardKind::Animal,
        CardKind::Ribbon,
        CardKind::Kasu,
    ];

    /// Canonical lowercase name used in tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Bright => "bright",
            CardKind::Animal => "animal",
            CardKind::Ribbon => "ribbon",
            CardKind::Kasu => "kasu",
        }
    }

    /// Tie-break priority used when ranking equal-value moves.
    ///
    /// Higher wins: bright > animal > ribbon > kasu.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            CardKind::Bright => 3,
            CardKind::Animal => 2,
            CardKind::Ribbon => 1,
            CardKind::Kasu => 0,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator for the special cards of a month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardTag {
    // Brights
    Crane,
    Cherry,
    Moon,
    Rain,
    Phoenix,
    // Animals
    Nightingale,
    Cuckoo,
    Bridge,
    Butterfly,
    Boar,
    Geese,
    Sake,
    Deer,
    Swallow,
    // Ribbons
    PoetryRed,
    Blue,
    Plain,
}

impl CardTag {
    /// Number of distinct tags. Sizes the per-tag counters.
    pub const COUNT: usize = 17;

    /// All tags in declaration order.
    pub const ALL: [CardTag; Self::COUNT] = [
        CardTag::Crane,
        CardTag::Cherry,
        CardTag::Moon,
        CardTag::Rain,
        CardTag::Phoenix,
        CardTag::Nightingale,
        CardTag::Cuckoo,
        CardTag::Bridge,
        CardTag::Butterfly,
        CardTag::Boar,
        CardTag::Geese,
        CardTag::Sake,
        CardTag::Deer,
        CardTag::Swallow,
        CardTag::PoetryRed,
        CardTag::Blue,
        CardTag::Plain,
    ];

    /// Canonical token spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardTag::Crane => "crane",
            CardTag::Cherry => "cherry",
            CardTag::Moon => "moon",
            CardTag::Rain => "rain",
            CardTag::Phoenix => "phoenix",
            CardTag::Nightingale => "nightingale",
            CardTag::Cuckoo => "cuckoo",
            CardTag::Bridge => "bridge",
            CardTag::Butterfly => "butterfly",
            CardTag::Boar => "boar",
            CardTag::Geese => "geese",
            CardTag::Sake => "sake",
            CardTag::Deer => "deer",
            CardTag::Swallow => "swallow",
            CardTag::PoetryRed => "poetry-red",
            CardTag::Blue => "blue",
            CardTag::Plain => "plain",
        }
    }

    /// Index into fixed-size per-tag arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a canonical spelling. Synonyms are handled by the token parser.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for CardTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single Hanafuda card.
///
/// Ordering is by month, then kind, then tag (untagged first).
///
/// ## Example
///
/// Cards outside the crate come from the catalog or the token parser, so
/// every `Card` a caller holds is one of the 48 in the deck.
///
/// ```
/// use hanafuda_advisor::cards::{Card, CardKind, CardTag, Catalog};
///
/// let rain = Catalog::global().lookup(11, CardKind::Bright, Some(CardTag::Rain)).unwrap();
/// assert_eq!(rain.to_string(), "11:bright-rain");
/// assert!(rain.is_bright());
///
/// let parsed: Card = "11:bright".parse().unwrap();
/// assert_eq!(parsed, rain);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    month: u8,
    kind: CardKind,
    tag: Option<CardTag>,
}

impl Card {
    /// Create a card. Callers are expected to pass a month in `1..=12`.
    #[must_use]
    pub(crate) const fn new(month: u8, kind: CardKind, tag: Option<CardTag>) -> Self {
        Self { month, kind, tag }
    }

    /// Shorthand for a tagged card.
    #[must_use]
    pub(crate) const fn tagged(month: u8, kind: CardKind, tag: CardTag) -> Self {
        Self::new(month, kind, Some(tag))
    }

    /// Shorthand for an untagged kasu card.
    #[must_use]
    pub(crate) const fn kasu(month: u8) -> Self {
        Self::new(month, CardKind::Kasu, None)
    }

    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub const fn tag(&self) -> Option<CardTag> {
        self.tag
    }

    /// Check whether this card carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: CardTag) -> bool {
        self.tag == Some(tag)
    }

    #[must_use]
    pub fn is_bright(&self) -> bool {
        self.kind == CardKind::Bright
    }

    /// Check whether two cards belong to the same month (and so can match).
    #[must_use]
    pub fn same_month(&self, other: &Card) -> bool {
        self.month == other.month
    }

    /// The month 9 sake cup: an animal that the holo rules also count as kasu.
    #[must_use]
    pub fn is_sake_cup(&self) -> bool {
        self.month == 9 && self.kind == CardKind::Animal && self.has_tag(CardTag::Sake)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.month, self.kind)?;
        if let Some(tag) = self.tag {
            write!(f, "-{}", tag)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s)
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_card(&value)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_token() {
        assert_eq!(Card::tagged(1, CardKind::Bright, CardTag::Crane).to_string(), "1:bright-crane");
        assert_eq!(Card::tagged(2, CardKind::Ribbon, CardTag::PoetryRed).to_string(), "2:ribbon-poetry-red");
        assert_eq!(Card::kasu(4).to_string(), "4:kasu");
    }

    #[test]
    fn test_ordering_month_then_kind_then_tag() {
        let a = Card::tagged(3, CardKind::Bright, CardTag::Cherry);
        let b = Card::kasu(3);
        let c = Card::tagged(1, CardKind::Ribbon, CardTag::PoetryRed);

        let mut cards = vec![b, a, c];
        cards.sort();
        assert_eq!(cards, vec![c, a, b]);
    }

    #[test]
    fn test_kind_priority() {
        assert!(CardKind::Bright.priority() > CardKind::Animal.priority());
        assert!(CardKind::Animal.priority() > CardKind::Ribbon.priority());
        assert!(CardKind::Ribbon.priority() > CardKind::Kasu.priority());
    }

    #[test]
    fn test_tag_index_matches_table() {
        for (i, tag) in CardTag::ALL.iter().enumerate() {
            assert_eq!(tag.index(), i);
            assert_eq!(CardTag::from_name(tag.as_str()), Some(*tag));
        }
        assert_eq!(CardTag::from_name("unicorn"), None);
    }

    #[test]
    fn test_sake_cup() {
        assert!(Card::tagged(9, CardKind::Animal, CardTag::Sake).is_sake_cup());
        assert!(!Card::tagged(9, CardKind::Ribbon, CardTag::Blue).is_sake_cup());
    }

    #[test]
    fn test_serialization_as_token() {
        let card = Card::tagged(8, CardKind::Bright, CardTag::Moon);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"8:bright-moon\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);

        let err = serde_json::from_str::<Card>("\"8bright\"");
        assert!(err.is_err());
    }
}
