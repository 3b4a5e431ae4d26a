//! Core types: configuration, match snapshots, deterministic dealing.
//!
//! Nothing in here knows about yaku; the rules and strategy layers build
//! on top of these.

pub mod config;
pub mod deal;
pub mod rng;
pub mod state;

pub use config::{AdvisorConfig, RuleVariant};
pub use deal::{Deal, Dealer, DEAL_SIZE};
pub use rng::GameRng;
pub use state::GameState;
