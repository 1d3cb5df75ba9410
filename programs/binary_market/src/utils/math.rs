//! Wide fixed-point helpers
//!
//! Token amounts are `u128` scaled by `PRECISION`, so products such as
//! `amount * PRECISION` or `value * probability * amount` leave the `u128`
//! range. Intermediates run in `U256` and are narrowed back with a check.

use anchor_lang::prelude::*;
use ethereum_types::U256;

use crate::errors::MarketError;

/// `a * b / denominator`, floor division, 256-bit intermediate.
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, MarketError::MathOverflow);

    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(MarketError::MathOverflow)?;

    narrow(product / U256::from(denominator))
}

/// `a * b * c / denominator`, floor division, 256-bit intermediate.
pub fn mul_mul_div(a: u128, b: u128, c: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, MarketError::MathOverflow);

    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .and_then(|ab| ab.checked_mul(U256::from(c)))
        .ok_or(MarketError::MathOverflow)?;

    narrow(product / U256::from(denominator))
}

/// Narrow a `U256` back to `u128`, failing instead of truncating.
pub fn narrow(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return err!(MarketError::MathOverflow);
    }
    Ok(value.as_u128())
}
