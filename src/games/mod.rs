//! Other games played with the Hanafuda deck.

pub mod oicho_kabu;

pub use oicho_kabu::{kabu_rank, kabu_value};
