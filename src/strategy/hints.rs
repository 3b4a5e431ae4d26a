//! Combination hints for the current turn.

use crate::cards::Card;
use crate::core::AdvisorConfig;
use crate::rules::{progress, ProgressHint};

/// Progress hints, led by a bright-chasing hint when a bright in hand can capture.
///
/// Only the first capturable bright gets a hint. The list is cut to
/// `config.max_hints`.
#[must_use]
pub fn best_combination_hints_with(
    config: &AdvisorConfig,
    hand: &[Card],
    field: &[Card],
    captured_self: &[Card],
) -> Vec<ProgressHint> {
    let mut hints = progress(captured_self, config.variant);

    let capturable_bright = hand
        .iter()
        .filter(|c| c.is_bright())
        .find(|b| field.iter().any(|f| f.same_month(b)));
    if let Some(bright) = capturable_bright {
        hints.insert(0, ProgressHint::PrioritizeBright { month: bright.month() });
    }

    hints.truncate(config.max_hints);
    hints
}

/// Combination hints with the default configuration.
#[must_use]
pub fn best_combination_hints(hand: &[Card], field: &[Card], captured_self: &[Card]) -> Vec<ProgressHint> {
    best_combination_hints_with(&AdvisorConfig::default(), hand, field, captured_self)
}
