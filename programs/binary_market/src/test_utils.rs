//! Shared fixtures for unit tests

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::events::MarketCreated;
use crate::instructions::{CreateMarketParams, MarketKeys};
use crate::state::{CollateralTransfer, Market, Outcome, OutcomePair};

/// Records payouts; optionally refuses every transfer.
#[derive(Default)]
pub struct MockBank {
    pub transfers: Vec<(Pubkey, u128)>,
    pub fail: bool,
}

impl MockBank {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn paid_to(&self, to: &Pubkey) -> u128 {
        self.transfers
            .iter()
            .filter(|(recipient, _)| recipient == to)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl CollateralTransfer for MockBank {
    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        if self.fail {
            return Err(ProgramError::Custom(1).into());
        }
        self.transfers.push((*to, amount));
        Ok(())
    }
}

pub fn keys() -> MarketKeys {
    MarketKeys {
        market: Pubkey::new_unique(),
        yes_mint: Pubkey::new_unique(),
        no_mint: Pubkey::new_unique(),
    }
}

pub fn params(initial_yes_probability: u8, percentage_to_lock: u8) -> CreateMarketParams {
    CreateMarketParams {
        liquidity_provider: Pubkey::new_unique(),
        oracle: Pubkey::new_unique(),
        question: "Will the green car win the race?".to_string(),
        outcome_labels: OutcomePair::new("Green".to_string(), "Red".to_string()),
        initial_token_value: PRECISION / 100,
        initial_yes_probability,
        percentage_to_lock,
    }
}

/// 1 collateral at 0.01 per token, 60% YES, 10% locked:
/// 100 tokens per side, LP holds 12 YES / 8 NO.
pub fn scenario_a() -> (Market, MarketCreated) {
    Market::create(keys(), params(60, 10), PRECISION).unwrap()
}

/// Buy at the current quote; returns the collateral paid.
pub fn buy(market: &mut Market, buyer: Pubkey, option: Outcome, amount: u128) -> u128 {
    let quote = market.get_buy_price_in_eth(option, amount).unwrap();
    market
        .buy_tokens_with_eth(buyer, option, amount, quote)
        .unwrap();
    quote
}
