//! Protocol constants

/// Fixed-point scale shared by collateral amounts, token amounts and probabilities.
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Probabilities and lock percentages are whole percents.
pub const PERCENT_DENOMINATOR: u128 = 100;

/// `probability * percentage * 2 / LOCK_DENOMINATOR` sizes the locked allocation.
pub const LOCK_DENOMINATOR: u128 = 10_000;

/// Normalizes the locked allocation so `percentage_to_lock` reads as
/// "percent of one representative side".
pub const LOCK_MULTIPLIER: u128 = 2;

pub const MAX_QUESTION_LEN: usize = 256;

pub const MAX_LABEL_LEN: usize = 32;
