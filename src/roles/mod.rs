//! Holo special roles.
//!
//! House-rule roles named after talent generations. Each role is formed when
//! every one of its required cards is among the captures. Only detection
//! lives here; carrying out a role's effect is up to the front end.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, CardTag};

/// Role identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoloRoleId {
    Gen0,
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
    HoloX,
    Gamers,
    Regloss,
}

/// Static role record.
#[derive(Clone, Copy, Debug)]
pub struct HoloRole {
    pub id: HoloRoleId,
    pub title: &'static str,
    /// All of these must be captured.
    pub requires: &'static [Card],
    /// What the role does when declared.
    pub description: &'static str,
    /// One-line instruction for a front end.
    pub hint: &'static str,
}

const fn bright(month: u8, tag: CardTag) -> Card {
    Card::tagged(month, CardKind::Bright, tag)
}

const fn animal(month: u8, tag: CardTag) -> Card {
    Card::tagged(month, CardKind::Animal, tag)
}

const fn ribbon(month: u8, tag: CardTag) -> Card {
    Card::tagged(month, CardKind::Ribbon, tag)
}

/// All roles, in declaration order.
pub static HOLO_ROLES: [HoloRole; 9] = [
    HoloRole {
        id: HoloRoleId::Gen0,
        title: "Gen 0",
        requires: &[bright(1, CardTag::Crane), ribbon(1, CardTag::PoetryRed), Card::kasu(1)],
        description: "Take one card of your choice from the field into your hand.",
        hint: "Move any field card to your hand",
    },
    HoloRole {
        id: HoloRoleId::Gen1,
        title: "Gen 1",
        requires: &[animal(2, CardTag::Nightingale), ribbon(2, CardTag::PoetryRed), Card::kasu(2)],
        description: "The opponent's hand is revealed for two turns.",
        hint: "Treat the opponent's hand as open for two turns",
    },
    HoloRole {
        id: HoloRoleId::Gen2,
        title: "Gen 2",
        requires: &[bright(3, CardTag::Cherry), ribbon(3, CardTag::PoetryRed), Card::kasu(3)],
        description: "Lock one field card; it is released after two turns.",
        hint: "Pick a field card to lock",
    },
    HoloRole {
        id: HoloRoleId::Gen3,
        title: "Gen 3",
        requires: &[animal(4, CardTag::Cuckoo), ribbon(4, CardTag::Plain), Card::kasu(4)],
        description: "Take the next turn as well, skipping the opponent.",
        hint: "Skip the opponent's turn",
    },
    HoloRole {
        id: HoloRoleId::Gen4,
        title: "Gen 4",
        requires: &[animal(5, CardTag::Bridge), ribbon(5, CardTag::Plain), Card::kasu(5)],
        description: "Draw one card from the stock into your hand.",
        hint: "Draw one from the stock",
    },
    HoloRole {
        id: HoloRoleId::Gen5,
        title: "Gen 5",
        requires: &[animal(6, CardTag::Butterfly), ribbon(6, CardTag::Blue), Card::kasu(6)],
        description: "Choose a card from the opponent's hand; it is discarded to the field.",
        hint: "Pick an opponent hand card to discard",
    },
    HoloRole {
        id: HoloRoleId::HoloX,
        title: "Secret Society holoX",
        requires: &[
            animal(7, CardTag::Boar),
            animal(8, CardTag::Geese),
            animal(9, CardTag::Sake),
            animal(10, CardTag::Deer),
        ],
        description: "Return every field card to the stock, shuffle, and lay out a new field.",
        hint: "Reshuffle the field into the stock and redeal it",
    },
    HoloRole {
        id: HoloRoleId::Gamers,
        title: "Gamers",
        requires: &[bright(8, CardTag::Moon), ribbon(9, CardTag::Blue), ribbon(12, CardTag::Plain)],
        description: "Swap hands with the opponent.",
        hint: "Exchange whole hands",
    },
    HoloRole {
        id: HoloRoleId::Regloss,
        title: "ReGLOSS",
        requires: &[bright(11, CardTag::Rain), animal(11, CardTag::Swallow), ribbon(11, CardTag::Plain)],
        description: "Mark one opponent hand card as unable to form yaku until it is discarded.",
        hint: "Mark one opponent hand card as void",
    },
];

impl HoloRoleId {
    /// Static record for this role.
    #[must_use]
    pub fn role(self) -> &'static HoloRole {
        &HOLO_ROLES[self as usize]
    }
}

/// Roles fully formed by `captured`, in table order.
#[must_use]
pub fn detect_holo_roles(captured: &[Card]) -> Vec<&'static HoloRole> {
    let held: FxHashSet<Card> = captured.iter().copied().collect();
    HOLO_ROLES
        .iter()
        .filter(|role| role.requires.iter().all(|card| held.contains(card)))
        .collect()
}
