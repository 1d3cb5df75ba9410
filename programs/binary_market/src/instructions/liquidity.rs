//! Liquidity Management
//!
//! The liquidity provider grows or shrinks the pool while the market is open.
//! Each unit of collateral corresponds to `PRECISION / initial_token_value`
//! tokens, minted to (or burned from) both reserves in equal amounts, so
//! adding and then removing the same collateral restores the pool exactly.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::errors::MarketError;
use crate::events::{LiquidityAdded, LiquidityRemoved};
use crate::state::{CollateralTransfer, Market, Outcome};
use crate::utils::math::mul_div;

impl Market {
    /// Add `value` collateral (attached by the caller) to the pool.
    pub fn add_liquidity(&mut self, provider: Pubkey, value: u128) -> Result<LiquidityAdded> {
        let event = self.atomically(|market| {
            market.require_owner(provider)?;
            market.require_open()?;
            require!(value > 0, MarketError::AmountMustBeGreaterThanZero);

            let tokens_amount = mul_div(value, PRECISION, market.initial_token_value)?;
            let address = market.address;
            for outcome in Outcome::ALL {
                market.tokens[outcome].mint(&address, tokens_amount)?;
            }

            market.eth_collateral = market
                .eth_collateral
                .checked_add(value)
                .ok_or(MarketError::MathOverflow)?;

            Ok(LiquidityAdded {
                provider,
                eth_amount: value,
                tokens_amount,
            })
        })?;

        emit!(event.clone());
        msg!(
            "Liquidity added: {} collateral, {} tokens per outcome",
            event.eth_amount,
            event.tokens_amount
        );

        Ok(event)
    }

    /// Withdraw `eth_to_withdraw` collateral, burning the matching tokens
    /// from both reserves, and pay it to the provider.
    pub fn remove_liquidity<T: CollateralTransfer>(
        &mut self,
        provider: Pubkey,
        eth_to_withdraw: u128,
        bank: &mut T,
    ) -> Result<LiquidityRemoved> {
        let event = self.atomically(|market| {
            market.require_owner(provider)?;
            market.require_open()?;
            require!(
                eth_to_withdraw > 0,
                MarketError::AmountMustBeGreaterThanZero
            );

            let tokens_amount = mul_div(eth_to_withdraw, PRECISION, market.initial_token_value)?;
            for outcome in Outcome::ALL {
                require_gte!(
                    market.reserve(outcome),
                    tokens_amount,
                    MarketError::InsufficientTokenReserve
                );
            }
            require_gte!(
                market.eth_collateral,
                eth_to_withdraw,
                MarketError::InsufficientLiquidity
            );

            let address = market.address;
            for outcome in Outcome::ALL {
                market.tokens[outcome].burn(&address, tokens_amount)?;
            }
            market.eth_collateral -= eth_to_withdraw;

            bank.transfer(&provider, eth_to_withdraw)
                .map_err(|e| {
                    msg!("Collateral transfer failed: {}", e);
                    error!(MarketError::ETHTransferFailed)
                })?;

            Ok(LiquidityRemoved {
                provider,
                eth_amount: eth_to_withdraw,
                tokens_amount,
            })
        })?;

        emit!(event.clone());
        msg!(
            "Liquidity removed: {} collateral, {} tokens per outcome",
            event.eth_amount,
            event.tokens_amount
        );

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_liquidity_grows_both_reserves() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;

        let event = market.add_liquidity(lp, PRECISION / 2).unwrap();
        assert_eq!(event.tokens_amount, 50 * PRECISION);

        assert_eq!(market.eth_collateral(), PRECISION + PRECISION / 2);
        assert_eq!(market.reserve(Outcome::Yes), 138 * PRECISION);
        assert_eq!(market.reserve(Outcome::No), 142 * PRECISION);
        assert_eq!(market.token(Outcome::Yes).total_supply(), 150 * PRECISION);

        // probability is unchanged: sold amounts did not move
        assert_eq!(
            market.get_probability(Outcome::Yes).unwrap(),
            600_000_000_000_000_000
        );
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let mut bank = MockBank::default();
        let before = market.clone();

        market.add_liquidity(lp, 3 * PRECISION).unwrap();
        market.remove_liquidity(lp, 3 * PRECISION, &mut bank).unwrap();

        assert_eq!(market, before);
        assert_eq!(bank.paid_to(&lp), 3 * PRECISION);
    }

    #[test]
    fn test_remove_beyond_reserve_fails_and_changes_nothing() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let mut bank = MockBank::default();
        let before = market.clone();

        // 0.9 collateral = 90 tokens > 88 YES in reserve
        let err = market
            .remove_liquidity(lp, PRECISION * 9 / 10, &mut bank)
            .unwrap_err();
        assert_eq!(err, MarketError::InsufficientTokenReserve.into());
        assert_eq!(market, before);
        assert!(bank.transfers.is_empty());
    }

    #[test]
    fn test_only_owner_changes_liquidity() {
        let (mut market, _) = scenario_a();
        let stranger = Pubkey::new_unique();
        let mut bank = MockBank::default();

        let err = market.add_liquidity(stranger, PRECISION).unwrap_err();
        assert_eq!(err, MarketError::OnlyOwner.into());

        let err = market
            .remove_liquidity(stranger, PRECISION / 10, &mut bank)
            .unwrap_err();
        assert_eq!(err, MarketError::OnlyOwner.into());
    }

    #[test]
    fn test_zero_liquidity_is_rejected() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;

        let err = market.add_liquidity(lp, 0).unwrap_err();
        assert_eq!(err, MarketError::AmountMustBeGreaterThanZero.into());
    }

    #[test]
    fn test_liquidity_frozen_after_report() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let oracle = market.oracle;
        let mut bank = MockBank::default();
        market.report(oracle, Outcome::Yes).unwrap();

        let err = market.add_liquidity(lp, PRECISION).unwrap_err();
        assert_eq!(err, MarketError::PredictionAlreadyResolved.into());

        let err = market
            .remove_liquidity(lp, PRECISION / 10, &mut bank)
            .unwrap_err();
        assert_eq!(err, MarketError::PredictionAlreadyResolved.into());
    }

    #[test]
    fn test_failed_payout_rolls_back() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let mut bank = MockBank::failing();
        let before = market.clone();

        let err = market
            .remove_liquidity(lp, PRECISION / 10, &mut bank)
            .unwrap_err();
        assert_eq!(err, MarketError::ETHTransferFailed.into());
        assert_eq!(market, before);
    }
}
