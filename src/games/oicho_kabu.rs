//! Oicho-Kabu hand value.
//!
//! Months 1-9 count at face value and 10-12 count as zero. A hand is worth
//! the sum of its ranks modulo 10, nine being best.

/// Rank of a single month.
#[must_use]
pub fn kabu_rank(month: u8) -> u8 {
    if month <= 9 {
        month
    } else {
        0
    }
}

/// Value of a hand given by its months.
#[must_use]
pub fn kabu_value(months: &[u8]) -> u8 {
    let sum: u32 = months.iter().map(|&m| u32::from(kabu_rank(m))).sum();
    (sum % 10) as u8
}
