//! Whole-unit percentage arithmetic for currency amounts.
//!
//! Amounts are `i128` whole currency units (the FCFA franc has no minor
//! unit). Amounts are split into hundreds and a remainder before scaling, so
//! the result is exact for every `i128` and no input can make a contract
//! invocation trap.

/// Coverage percentage representing the full amount.
pub const FULL_COVERAGE: u32 = 100;

/// Clamps a coverage percentage to `0..=100`.
pub fn clamp_percentage(percentage: u32) -> u32 {
    percentage.min(FULL_COVERAGE)
}

/// Returns `percentage` percent of `amount`, rounded half-up to whole units.
///
/// `percentage` is clamped to `0..=100` first.
pub fn percentage_of(amount: i128, percentage: u32) -> i128 {
    let pct = i128::from(clamp_percentage(percentage));
    // Truncating split keeps |hundreds * 100| <= |amount|.
    let hundreds = amount / 100;
    let rest = amount % 100;
    hundreds * pct + (rest * pct + 50).div_euclid(100)
}

/// Splits `amount` into the share covered at `percentage` and the remainder.
///
/// The percentage is clamped first; the remainder is derived by subtraction,
/// so `covered + remainder == amount`.
pub fn split_amount(amount: i128, percentage: u32) -> (i128, i128) {
    let covered = percentage_of(amount, percentage);
    (covered, amount - covered)
}
