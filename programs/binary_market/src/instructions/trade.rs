//! Token Trading
//!
//! Handles buying and selling of YES/NO outcome tokens against the market's
//! reserves, priced by the probability curve.
//!
//! Buyers attach exactly the quoted collateral; there is no slippage
//! tolerance because nothing can change the reserves between a quote and
//! its execution within one call. All purchase proceeds accrue to
//! `lp_trading_revenue`, and sales are paid out of it; `eth_collateral` is
//! not touched by trading.

use anchor_lang::prelude::*;

use crate::amm::ProbabilityCurve;
use crate::constants::{PERCENT_DENOMINATOR, PRECISION};
use crate::errors::MarketError;
use crate::events::{TokensPurchased, TokensSold};
use crate::state::{CollateralTransfer, Market, Outcome};
use crate::utils::math::mul_div;

impl Market {
    /// Collateral required to buy `amount` tokens of `option` right now
    pub fn get_buy_price_in_eth(&self, option: Outcome, amount: u128) -> Result<u128> {
        ProbabilityCurve::buy_price(&self.pool(), option, amount)
    }

    /// Collateral paid out for selling `amount` tokens of `option` right now
    pub fn get_sell_price_in_eth(&self, option: Outcome, amount: u128) -> Result<u128> {
        ProbabilityCurve::sell_price(&self.pool(), option, amount)
    }

    /// Implied probability of `option`, scaled by `PRECISION`
    ///
    /// Falls back to the configured initial probability while nothing is
    /// sold on either side.
    pub fn get_probability(&self, option: Outcome) -> Result<u128> {
        let pool = self.pool();
        let sold = pool.sold(option)?;
        let sold_other = pool.sold(option.other())?;

        match ProbabilityCurve::probability(sold, sold_other)? {
            Some(probability) => Ok(probability),
            None => {
                let p_yes = self.initial_yes_probability as u128;
                let percent = match option {
                    Outcome::Yes => p_yes,
                    Outcome::No => PERCENT_DENOMINATOR - p_yes,
                };
                mul_div(percent, PRECISION, PERCENT_DENOMINATOR)
            }
        }
    }

    /// Buy `amount` tokens of `option`, paying `value` collateral
    pub fn buy_tokens_with_eth(
        &mut self,
        buyer: Pubkey,
        option: Outcome,
        amount: u128,
        value: u128,
    ) -> Result<TokensPurchased> {
        let event = self.atomically(|market| {
            require_keys_neq!(
                buyer,
                market.owner,
                MarketError::LiquidityProviderCantBuyTokens
            );
            market.require_open()?;
            require!(amount > 0, MarketError::AmountMustBeGreaterThanZero);

            let eth_amount = market.get_buy_price_in_eth(option, amount)?;
            require!(value == eth_amount, MarketError::MustSendExactETHAmount);

            let address = market.address;
            market.tokens[option].transfer(&address, &buyer, amount)?;
            market.lp_trading_revenue = market
                .lp_trading_revenue
                .checked_add(eth_amount)
                .ok_or(MarketError::MathOverflow)?;

            Ok(TokensPurchased {
                buyer,
                option,
                amount,
                eth_amount,
            })
        })?;

        emit!(event.clone());
        msg!(
            "Bought {} {:?} tokens for {}",
            event.amount,
            event.option,
            event.eth_amount
        );

        Ok(event)
    }

    /// Sell `amount` tokens of `option` back to the market
    ///
    /// The seller must have approved the market address as spender.
    pub fn sell_tokens_for_eth<T: CollateralTransfer>(
        &mut self,
        seller: Pubkey,
        option: Outcome,
        amount: u128,
        bank: &mut T,
    ) -> Result<TokensSold> {
        let event = self.atomically(|market| {
            require_keys_neq!(
                seller,
                market.owner,
                MarketError::LiquidityProviderCantSellTokens
            );
            market.require_open()?;
            require!(amount > 0, MarketError::AmountMustBeGreaterThanZero);

            let address = market.address;
            let ledger = &market.tokens[option];
            require_gte!(
                ledger.balance_of(&seller),
                amount,
                MarketError::InsufficientBalance
            );
            require_gte!(
                ledger.allowance(&seller, &address),
                amount,
                MarketError::InsufficientAllowance
            );

            let eth_amount = market.get_sell_price_in_eth(option, amount)?;
            require_gte!(
                market.lp_trading_revenue,
                eth_amount,
                MarketError::InsufficientLiquidity
            );

            market.tokens[option].transfer_from(&address, &seller, &address, amount)?;
            market.lp_trading_revenue -= eth_amount;

            bank.transfer(&seller, eth_amount).map_err(|e| {
                msg!("Collateral transfer failed: {}", e);
                error!(MarketError::ETHTransferFailed)
            })?;

            Ok(TokensSold {
                seller,
                option,
                amount,
                eth_amount,
            })
        })?;

        emit!(event.clone());
        msg!(
            "Sold {} {:?} tokens for {}",
            event.amount,
            event.option,
            event.eth_amount
        );

        Ok(event)
    }
}
