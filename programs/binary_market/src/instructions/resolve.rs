//! LP Settlement
//!
//! After the oracle reports, the liquidity provider settles once:
//!
//! ```text
//! winning_reserve = unsold winning tokens held by the market   (burned)
//! eth_redeemed    = min(winning_reserve * initial_token_value / PRECISION,
//!                       eth_collateral)
//! total_to_send   = eth_redeemed + lp_trading_revenue
//! ```
//!
//! Accounting is updated before the payout is pushed, and rolled back if
//! the payout fails.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::MarketError;
use crate::events::MarketResolved;
use crate::state::{CollateralTransfer, Market, MarketStatus};
use crate::utils::math::mul_div;

impl Market {
    pub fn resolve_market_and_withdraw<T: CollateralTransfer>(
        &mut self,
        resolver: Pubkey,
        bank: &mut T,
    ) -> Result<MarketResolved> {
        let event = self.atomically(|market| {
            market.require_owner(resolver)?;
            let winning = market.require_winner()?;
            require!(!market.is_resolved(), MarketError::MarketAlreadySettled);

            let address = market.address;
            let winning_reserve = market.reserve(winning);
            // Capped so a rounding shortfall cannot strand the trading revenue.
            let eth_redeemed = mul_div(winning_reserve, market.initial_token_value, PRECISION)?
                .min(market.eth_collateral);

            market.eth_collateral -= eth_redeemed;
            let total_eth_to_send = eth_redeemed
                .checked_add(market.lp_trading_revenue)
                .ok_or(MarketError::MathOverflow)?;
            market.lp_trading_revenue = 0;

            market.tokens[winning].burn(&address, winning_reserve)?;
            market.status = MarketStatus::Resolved;

            bank.transfer(&resolver, total_eth_to_send).map_err(|e| {
                msg!("Collateral transfer failed: {}", e);
                error!(MarketError::ETHTransferFailed)
            })?;

            Ok(MarketResolved {
                resolver,
                total_eth_to_send,
            })
        })?;

        emit!(event.clone());
        msg!("Market settled: {} sent to LP", event.total_eth_to_send);

        Ok(event)
    }
}
