//! Crate-level errors.
//!
//! The rules and strategy layers are total and never fail; errors only
//! arise when turning external input into cards and snapshots.

use thiserror::Error;

use crate::cards::CardParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardParseError),

    #[error("invalid game state record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
