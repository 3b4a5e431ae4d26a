//! Card token parsing.
//!
//! Tokens look like `"<month>:<kind>[-<tag>]"`, e.g. `"11:bright-rain"`,
//! `"2:ribbon-poetry-red"` or `"7:kasu"`. Parsing is case-insensitive and
//! accepts a few synonyms:
//!
//! - kinds: `hikari` → bright, `tane` → animal, `tan` → ribbon
//! - tags: `red` / `poetry` → poetry-red
//!
//! If no card matches the full (month, kind, tag) triple the tag is ignored
//! and the first card of that month and kind is returned.

use thiserror::Error;

use super::card::{Card, CardKind, CardTag};
use super::catalog::Catalog;

/// Errors raised while turning a token into a card.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The token does not follow `<month>:<kind>[-<tag>]`.
    #[error("invalid card token: {0}")]
    Format(String),
    /// The token is well-formed but names no card in the deck.
    #[error("unknown card: {0}")]
    Lookup(String),
}

fn kind_from_name(name: &str) -> Option<CardKind> {
    match name {
        "bright" | "hikari" => Some(CardKind::Bright),
        "animal" | "tane" => Some(CardKind::Animal),
        "ribbon" | "tan" => Some(CardKind::Ribbon),
        "kasu" => Some(CardKind::Kasu),
        _ => None,
    }
}

fn tag_from_name(name: &str) -> Option<CardTag> {
    match name {
        "red" | "poetry" => Some(CardTag::PoetryRed),
        other => CardTag::from_name(other),
    }
}

/// Parse a card token.
///
/// ## Example
///
/// ```
/// use hanafuda_advisor::cards::{parse_card, CardKind, CardTag};
///
/// let card = parse_card("11:Hikari-Rain").unwrap();
/// assert_eq!(card.kind(), CardKind::Bright);
/// assert_eq!(card.tag(), Some(CardTag::Rain));
///
/// assert!(parse_card("11-bright").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, CardParseError> {
    let token = token.trim();
    let catalog = Catalog::global();

    if let Some(card) = catalog.by_token(token) {
        return Ok(card);
    }

    let (month_str, rest) = token
        .split_once(':')
        .ok_or_else(|| CardParseError::Format(token.to_string()))?;
    let month: u8 = month_str
        .trim()
        .parse()
        .map_err(|_| CardParseError::Format(token.to_string()))?;

    let rest = rest.to_lowercase();
    let (kind_str, tag_str) = rest.split_once('-').unwrap_or((rest.as_str(), ""));

    let kind = kind_from_name(kind_str).ok_or_else(|| CardParseError::Lookup(token.to_string()))?;

    if !tag_str.is_empty() {
        if let Some(card) = tag_from_name(tag_str)
            .and_then(|tag| catalog.lookup(month, kind, Some(tag)))
        {
            return Ok(card);
        }
    }

    catalog
        .lookup(month, kind, None)
        .ok_or_else(|| CardParseError::Lookup(token.to_string()))
}

/// Parse a list of tokens, stopping at the first error.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, CardParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|t| parse_card(t.as_ref())).collect()
}
