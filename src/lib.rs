//! # hanafuda-advisor
//!
//! Koi-Koi scoring engine and move advisor for Hanafuda.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Every operation is a function of its arguments. No hidden
//!    state, no I/O, safe to call from any thread.
//!
//! 2. **Total**: The rules and strategy layers accept any card collection,
//!    including empty ones, and never fail. Errors only exist at the token
//!    and JSON boundary.
//!
//! 3. **Typed**: Yaku, kinds, tags and rule variants are enums; category
//!    counts are a fixed-shape record.
//!
//! ## Architecture
//!
//! - **Catalog once**: The 48-card deck and its lookup tables are built on
//!   first use and shared for the life of the process.
//!
//! - **One-ply greedy ranking**: Moves are valued by the immediate score
//!   gain of the capture plus a flat denial bonus. There is no lookahead.
//!
//! ## Modules
//!
//! - `cards`: Card values, the deck catalog, token parsing
//! - `core`: Configuration, rule variants, match snapshots, dealing
//! - `rules`: Yaku table, detection, scoring, progress hints
//! - `strategy`: Move ranking and combination hints
//! - `roles`: Holo special roles
//! - `games`: Oicho-Kabu

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod roles;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::cards::{deck, parse_card, parse_cards, Card, CardKind, CardParseError, CardTag, Catalog};

pub use crate::core::{AdvisorConfig, Deal, Dealer, GameRng, GameState, RuleVariant};

pub use crate::error::{Error, Result};

pub use crate::rules::{detect, detect_initial_hand, progress, score, ProgressHint, Yaku, YakuScores};

pub use crate::strategy::{best_combination_hints, rank_moves, Advisor, Move, MoveNote};

pub use crate::roles::{detect_holo_roles, HoloRole, HoloRoleId};

pub use crate::games::kabu_value;
