//! Yaku (scoring combination) table.
//!
//! Every combination the detector can award is listed here with its scoring
//! rule. Fixed yaku are worth a constant; graduated yaku are worth `base`
//! at `threshold` cards and `step` more for every card beyond it.

use serde::{Deserialize, Serialize};

/// Combination identifier.
///
/// Ordering follows evaluation order, so maps keyed by `Yaku` iterate in
/// the same order the detector awards them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Yaku {
    /// Five brights.
    Gokou,
    /// Four brights without the rain bright.
    Shiko,
    /// Four brights including the rain bright.
    AmeShiko,
    /// Three brights without the rain bright.
    Sanko,
    /// Boar, deer and butterfly.
    Inoshikacho,
    /// Cherry bright and sake cup.
    HanamiZake,
    /// Moon bright and sake cup.
    TsukimiZake,
    /// Red poetry ribbons of months 1, 2 and 3.
    Akatan,
    /// Blue ribbons of months 6, 9 and 10.
    Aotan,
    /// Both ribbon sets at once.
    AkatanAotan,
    /// Animals, graduated from 5.
    Tane,
    /// Ribbons, graduated from 5.
    Tan,
    /// Kasu, graduated from 10.
    Kasu,
    /// Initial hand: all four cards of a month.
    TeYon,
    /// Initial hand: four or more month pairs.
    Kuttsuki,
}

/// How a yaku is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scoring {
    Fixed(u32),
    Graduated { threshold: u32, base: u32, step: u32 },
}

impl Scoring {
    /// Points for `count` qualifying cards, or `None` below threshold.
    ///
    /// Fixed scoring ignores `count`.
    #[must_use]
    pub fn points(self, count: u32) -> Option<u32> {
        match self {
            Scoring::Fixed(points) => Some(points),
            Scoring::Graduated { threshold, base, step } => {
                (count >= threshold).then(|| base + step * (count - threshold))
            }
        }
    }
}

/// Static yaku record.
#[derive(Clone, Copy, Debug)]
pub struct YakuDef {
    pub yaku: Yaku,
    /// Romanized name.
    pub name: &'static str,
    /// Short description of the condition.
    pub condition: &'static str,
    pub scoring: Scoring,
    /// Only formed by the dealt hand, never by captures.
    pub initial_hand: bool,
}

const fn fixed(
    yaku: Yaku,
    name: &'static str,
    condition: &'static str,
    points: u32,
) -> YakuDef {
    YakuDef {
        yaku,
        name,
        condition,
        scoring: Scoring::Fixed(points),
        initial_hand: false,
    }
}

const fn graduated(
    yaku: Yaku,
    name: &'static str,
    condition: &'static str,
    threshold: u32,
) -> YakuDef {
    YakuDef {
        yaku,
        name,
        condition,
        scoring: Scoring::Graduated { threshold, base: 1, step: 1 },
        initial_hand: false,
    }
}

const fn from_hand(
    yaku: Yaku,
    name: &'static str,
    condition: &'static str,
    points: u32,
) -> YakuDef {
    YakuDef {
        yaku,
        name,
        condition,
        scoring: Scoring::Fixed(points),
        initial_hand: true,
    }
}

/// The full table, in evaluation order.
pub static YAKU_TABLE: [YakuDef; 15] = [
    fixed(Yaku::Gokou, "Gokou", "all five brights", 10),
    fixed(Yaku::Shiko, "Shiko", "four brights, rain excluded", 8),
    fixed(Yaku::AmeShiko, "Ame-Shiko", "four brights including rain", 7),
    fixed(Yaku::Sanko, "Sanko", "three brights, rain excluded", 5),
    fixed(Yaku::Inoshikacho, "Inoshikacho", "boar, deer and butterfly", 5),
    fixed(Yaku::HanamiZake, "Hanami-zake", "cherry bright and sake cup", 5),
    fixed(Yaku::TsukimiZake, "Tsukimi-zake", "moon bright and sake cup", 5),
    fixed(Yaku::Akatan, "Akatan", "red poetry ribbons of months 1-3", 5),
    fixed(Yaku::Aotan, "Aotan", "blue ribbons of months 6, 9 and 10", 5),
    fixed(Yaku::AkatanAotan, "Akatan-Aotan", "both red and blue ribbon sets", 10),
    graduated(Yaku::Tane, "Tane", "five or more animals", 5),
    graduated(Yaku::Tan, "Tan", "five or more ribbons", 5),
    graduated(Yaku::Kasu, "Kasu", "ten or more kasu", 10),
    from_hand(Yaku::TeYon, "Te-yon", "all four cards of a month in the dealt hand", 6),
    from_hand(Yaku::Kuttsuki, "Kuttsuki", "four month pairs in the dealt hand", 6),
];

impl Yaku {
    /// All yaku in evaluation order.
    pub fn all() -> impl Iterator<Item = Yaku> {
        YAKU_TABLE.iter().map(|d| d.yaku)
    }

    /// Static definition for this yaku.
    #[must_use]
    pub fn def(self) -> &'static YakuDef {
        // Table order matches declaration order
        &YAKU_TABLE[self as usize]
    }

    /// Kebab-case identifier, e.g. `"ame-shiko"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Yaku::Gokou => "gokou",
            Yaku::Shiko => "shiko",
            Yaku::AmeShiko => "ame-shiko",
            Yaku::Sanko => "sanko",
            Yaku::Inoshikacho => "inoshikacho",
            Yaku::HanamiZake => "hanami-zake",
            Yaku::TsukimiZake => "tsukimi-zake",
            Yaku::Akatan => "akatan",
            Yaku::Aotan => "aotan",
            Yaku::AkatanAotan => "akatan-aotan",
            Yaku::Tane => "tane",
            Yaku::Tan => "tan",
            Yaku::Kasu => "kasu",
            Yaku::TeYon => "te-yon",
            Yaku::Kuttsuki => "kuttsuki",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    #[must_use]
    pub fn scoring(self) -> Scoring {
        self.def().scoring
    }
}

impl std::fmt::Display for Yaku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
