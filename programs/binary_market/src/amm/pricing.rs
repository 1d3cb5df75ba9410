//! # Trapezoidal Probability Pricing
//!
//! ## Quote Formula
//!
//! ```text
//! 1. reserve_after = reserve ∓ amount          (buy: −, sell: +)
//! 2. p_before      = p(sold_before, sold_other)
//! 3. p_after       = p(sold_after,  sold_other)
//! 4. p_avg         = (p_before + p_after) / 2
//! 5. eth           = initial_token_value * p_avg * amount / PRECISION²
//! ```
//!
//! Every division floors. Settlement must be bit-exact across
//! implementations, so nothing here rounds to nearest or touches floats.
//!
//! Because `p` rises as an option's reserve is depleted, the average price
//! per token grows with trade size: larger buys cost progressively more.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::MarketError;
use crate::state::{Outcome, OutcomePair};
use crate::utils::math::{mul_div, mul_mul_div};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// Everything the curve reads from a market.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolState {
    pub initial_token_value: u128,
    pub total_supply: OutcomePair<u128>,
    pub reserve: OutcomePair<u128>,
}

impl PoolState {
    /// Tokens of `outcome` outside the market's reserve
    pub fn sold(&self, outcome: Outcome) -> Result<u128> {
        self.total_supply[outcome]
            .checked_sub(self.reserve[outcome])
            .ok_or_else(|| error!(MarketError::MathOverflow))
    }
}

/// Stateless pricing over a [`PoolState`]; safe to call for read-only quotes.
pub struct ProbabilityCurve;

impl ProbabilityCurve {
    /// Implied probability of an option, scaled by `PRECISION`
    ///
    /// Returns `None` when nothing has been sold on either side, where the
    /// ratio is undefined.
    ///
    /// # Example
    /// ```ignore
    /// // 12 YES and 8 NO sold
    /// let p = ProbabilityCurve::probability(12 * PRECISION, 8 * PRECISION)?;
    /// // p == Some(600_000_000_000_000_000)   (60%)
    /// ```
    pub fn probability(sold: u128, other_sold: u128) -> Result<Option<u128>> {
        let total_sold = sold
            .checked_add(other_sold)
            .ok_or(MarketError::MathOverflow)?;

        if total_sold == 0 {
            return Ok(None);
        }

        mul_div(sold, PRECISION, total_sold).map(Some)
    }

    /// Collateral paid (buy) or received (sell) for `amount` tokens of `option`
    ///
    /// # Errors
    /// * `InsufficientLiquidity` - buying more than the reserve holds
    /// * `InsufficientTokenBalance` - selling more than is in circulation
    /// * `ProbabilityUndefined` - no tokens sold before or after the trade
    pub fn quote(
        pool: &PoolState,
        option: Outcome,
        amount: u128,
        direction: TradeDirection,
    ) -> Result<u128> {
        let reserve_before = pool.reserve[option];
        let total_supply = pool.total_supply[option];

        let reserve_after = match direction {
            TradeDirection::Buy => {
                require_gte!(reserve_before, amount, MarketError::InsufficientLiquidity);
                reserve_before - amount
            }
            TradeDirection::Sell => reserve_before
                .checked_add(amount)
                .filter(|reserve| *reserve <= total_supply)
                .ok_or(MarketError::InsufficientTokenBalance)?,
        };

        let sold_other = pool.sold(option.other())?;
        let sold_before = pool.sold(option)?;
        let sold_after = total_supply - reserve_after;

        let probability_before = Self::probability(sold_before, sold_other)?
            .ok_or(MarketError::ProbabilityUndefined)?;
        let probability_after = Self::probability(sold_after, sold_other)?
            .ok_or(MarketError::ProbabilityUndefined)?;

        // Both are at most PRECISION, so the sum cannot overflow.
        let probability_avg = (probability_before + probability_after) / 2;

        mul_mul_div(
            pool.initial_token_value,
            probability_avg,
            amount,
            PRECISION * PRECISION,
        )
    }

    pub fn buy_price(pool: &PoolState, option: Outcome, amount: u128) -> Result<u128> {
        Self::quote(pool, option, amount, TradeDirection::Buy)
    }

    pub fn sell_price(pool: &PoolState, option: Outcome, amount: u128) -> Result<u128> {
        Self::quote(pool, option, amount, TradeDirection::Sell)
    }
}

// ============================================================================
// TESTS
// ============================================================================
