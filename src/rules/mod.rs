//! Koi-Koi rules: yaku table, detection, scoring and progress.
//!
//! Everything here is a pure function of its inputs:
//! - `detect`: which yaku a captured pile forms, and their points
//! - `score`: the sum of those points
//! - `progress`: how far each unmet yaku is from its threshold

pub mod counts;
pub mod detector;
pub mod progress;
pub mod scorer;
pub mod yaku;

pub use counts::CardCounts;
pub use detector::{detect, detect_initial_hand, YakuScores};
pub use progress::{progress, ProgressHint};
pub use scorer::{score, score_gain};
pub use yaku::{Scoring, Yaku, YakuDef, YAKU_TABLE};
