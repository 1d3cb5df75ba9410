//! Winning Token Redemption
//!
//! After the oracle reports, any holder converts winning tokens back to
//! collateral at the fixed per-token value:
//!
//! ```text
//! eth_owed = amount * initial_token_value / PRECISION
//! ```
//!
//! Losing tokens are simply unredeemable; nothing burns them.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::MarketError;
use crate::events::WinningTokensRedeemed;
use crate::state::{CollateralTransfer, Market};
use crate::utils::math::mul_div;

impl Market {
    pub fn redeem_winning_tokens<T: CollateralTransfer>(
        &mut self,
        redeemer: Pubkey,
        amount: u128,
        bank: &mut T,
    ) -> Result<WinningTokensRedeemed> {
        let event = self.atomically(|market| {
            let winning = market.require_winner()?;
            require!(amount > 0, MarketError::NoTokensToRedeem);

            let balance = market.tokens[winning].balance_of(&redeemer);
            require!(balance > 0, MarketError::NoTokensToRedeem);
            require_gte!(balance, amount, MarketError::InsufficientWinningTokens);

            let eth_amount = mul_div(amount, market.initial_token_value, PRECISION)?;
            require_gte!(
                market.eth_collateral,
                eth_amount,
                MarketError::InsufficientLiquidity
            );

            market.tokens[winning].burn(&redeemer, amount)?;
            market.eth_collateral -= eth_amount;

            bank.transfer(&redeemer, eth_amount).map_err(|e| {
                msg!("Collateral transfer failed: {}", e);
                error!(MarketError::ETHTransferFailed)
            })?;

            Ok(WinningTokensRedeemed {
                redeemer,
                amount,
                eth_amount,
            })
        })?;

        emit!(event.clone());
        msg!(
            "Redeemed {} winning tokens for {}",
            event.amount,
            event.eth_amount
        );

        Ok(event)
    }
}
