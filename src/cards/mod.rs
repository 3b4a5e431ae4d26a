//! Card system: value types, the 48-card catalog, and token parsing.
//!
//! ## Key Types
//!
//! - `Card`: Immutable (month, kind, tag) value
//! - `CardKind`: Bright, animal, ribbon, kasu
//! - `CardTag`: Discriminator for special cards (rain, sake, blue, ...)
//! - `Catalog`: Process-wide deck and lookup tables
//! - `CardParseError`: Token format and lookup failures

pub mod card;
pub mod catalog;
pub mod token;

pub use card::{Card, CardKind, CardTag};
pub use catalog::{deck, Catalog, BLUE_RIBBON_MONTHS, RED_RIBBON_MONTHS};
pub use token::{parse_card, parse_cards, CardParseError};
