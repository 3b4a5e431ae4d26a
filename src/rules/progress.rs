//! Progress toward unmet yaku.
//!
//! Hints are descriptive only. Each threshold yaku that is not yet formed
//! yields a `current/required` hint, and each unmet sake yaku yields a
//! reminder of the cards it needs.

use serde::{Deserialize, Serialize};

use super::counts::CardCounts;
use crate::cards::{Card, CardTag};
use crate::core::RuleVariant;

const BRIGHTS_REQUIRED: u32 = 3;
const ANIMALS_REQUIRED: u32 = 5;
const RIBBONS_REQUIRED: u32 = 5;
const KASU_REQUIRED: u32 = 10;
const RIBBON_SET_REQUIRED: u32 = 3;

/// A single strategy hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hint", rename_all = "kebab-case")]
pub enum ProgressHint {
    /// Brights held toward sanko (rain excluded).
    Brights { have: u32 },
    Animals { have: u32 },
    Ribbons { have: u32 },
    /// Kasu held, counted under the active variant.
    Kasu { have: u32 },
    /// Months 1-3 whose red poetry ribbon is held.
    RedRibbons { have: u32 },
    /// Months 6, 9, 10 whose blue ribbon is held.
    BlueRibbons { have: u32 },
    /// Cherry bright and sake cup still missing.
    HanamiZake,
    /// Moon bright and sake cup still missing.
    TsukimiZake,
    /// A bright in hand can capture now; chase the bright yaku.
    PrioritizeBright { month: u8 },
}

impl ProgressHint {
    /// `(have, required)` for threshold hints.
    #[must_use]
    pub fn progress(&self) -> Option<(u32, u32)> {
        match *self {
            ProgressHint::Brights { have } => Some((have, BRIGHTS_REQUIRED)),
            ProgressHint::Animals { have } => Some((have, ANIMALS_REQUIRED)),
            ProgressHint::Ribbons { have } => Some((have, RIBBONS_REQUIRED)),
            ProgressHint::Kasu { have } => Some((have, KASU_REQUIRED)),
            ProgressHint::RedRibbons { have } => Some((have, RIBBON_SET_REQUIRED)),
            ProgressHint::BlueRibbons { have } => Some((have, RIBBON_SET_REQUIRED)),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProgressHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressHint::Brights { have } => {
                write!(f, "Brights {}/{} (sanko needs no rain)", have, BRIGHTS_REQUIRED)
            }
            ProgressHint::Animals { have } => write!(f, "Tane {}/{}", have, ANIMALS_REQUIRED),
            ProgressHint::Ribbons { have } => write!(f, "Tan {}/{}", have, RIBBONS_REQUIRED),
            ProgressHint::Kasu { have } => write!(f, "Kasu {}/{}", have, KASU_REQUIRED),
            ProgressHint::RedRibbons { have } => {
                write!(f, "Akatan {}/{}", have, RIBBON_SET_REQUIRED)
            }
            ProgressHint::BlueRibbons { have } => {
                write!(f, "Aotan {}/{}", have, RIBBON_SET_REQUIRED)
            }
            ProgressHint::HanamiZake => write!(f, "Hanami-zake (cherry bright + sake cup)"),
            ProgressHint::TsukimiZake => write!(f, "Tsukimi-zake (moon bright + sake cup)"),
            ProgressHint::PrioritizeBright { month } => {
                write!(f, "Prioritize the month {} bright to aim for sanko/shiko/gokou", month)
            }
        }
    }
}

/// Hints for every threshold yaku not yet formed by `captured`.
///
/// Order: brights, animals, ribbons, kasu, red ribbons, blue ribbons,
/// hanami-zake, tsukimi-zake.
#[must_use]
pub fn progress(captured: &[Card], variant: RuleVariant) -> Vec<ProgressHint> {
    let c = CardCounts::from_cards(captured);
    let mut hints = Vec::new();

    if c.bright < BRIGHTS_REQUIRED || (c.bright == BRIGHTS_REQUIRED && c.has_rain()) {
        hints.push(ProgressHint::Brights { have: c.bright });
    }
    if c.animal < ANIMALS_REQUIRED {
        hints.push(ProgressHint::Animals { have: c.animal });
    }
    if c.ribbon_total() < RIBBONS_REQUIRED {
        hints.push(ProgressHint::Ribbons { have: c.ribbon_total() });
    }
    let kasu = c.kasu_for(variant);
    if kasu < KASU_REQUIRED {
        hints.push(ProgressHint::Kasu { have: kasu });
    }
    if c.red_months_held() < RIBBON_SET_REQUIRED {
        hints.push(ProgressHint::RedRibbons { have: c.red_months_held() });
    }
    if c.blue_months_held() < RIBBON_SET_REQUIRED {
        hints.push(ProgressHint::BlueRibbons { have: c.blue_months_held() });
    }

    let sake = c.has_tag(CardTag::Sake);
    if !(sake && c.has_tag(CardTag::Cherry)) {
        hints.push(ProgressHint::HanamiZake);
    }
    if !(sake && c.has_tag(CardTag::Moon)) {
        hints.push(ProgressHint::TsukimiZake);
    }

    hints
}
