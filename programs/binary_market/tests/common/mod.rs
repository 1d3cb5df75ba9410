#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use binary_market::*;

/// In-memory collateral ledger standing in for the host chain.
#[derive(Default)]
pub struct Bank {
    pub balances: BTreeMap<Pubkey, u128>,
    pub reject_next: bool,
}

impl Bank {
    pub fn balance(&self, who: &Pubkey) -> u128 {
        self.balances.get(who).copied().unwrap_or(0)
    }

    pub fn total_paid(&self) -> u128 {
        self.balances.values().sum()
    }
}

impl CollateralTransfer for Bank {
    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        if self.reject_next {
            self.reject_next = false;
            return Err(ProgramError::InsufficientFunds.into());
        }
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

pub struct Actors {
    pub lp: Pubkey,
    pub oracle: Pubkey,
}

pub fn create_market(
    initial_token_value: u128,
    initial_yes_probability: u8,
    percentage_to_lock: u8,
    collateral: u128,
) -> (Market, Actors) {
    let actors = Actors {
        lp: Pubkey::new_unique(),
        oracle: Pubkey::new_unique(),
    };
    let keys = MarketKeys {
        market: Pubkey::new_unique(),
        yes_mint: Pubkey::new_unique(),
        no_mint: Pubkey::new_unique(),
    };
    let params = CreateMarketParams {
        liquidity_provider: actors.lp,
        oracle: actors.oracle,
        question: "Will the green car win the race?".to_string(),
        outcome_labels: OutcomePair::new("Green".to_string(), "Red".to_string()),
        initial_token_value,
        initial_yes_probability,
        percentage_to_lock,
    };
    let (market, _) = Market::create(keys, params, collateral).unwrap();
    (market, actors)
}

pub fn error_name(err: &Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_name.clone(),
        Error::ProgramError(e) => format!("{:?}", e.program_error),
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: &str) {
    let err = result.unwrap_err();
    assert_eq!(error_name(&err), expected);
}

/// Every token of every outcome is either in the reserve or with a holder.
pub fn assert_conserved(market: &Market) {
    for outcome in Outcome::ALL {
        let ledger = market.token(outcome);
        let held: u128 = ledger.holders().map(|(_, balance)| *balance).sum();
        assert_eq!(held, ledger.total_supply());
        assert!(market.reserve(outcome) <= ledger.total_supply());
    }
}

pub fn buy(market: &mut Market, buyer: Pubkey, option: Outcome, amount: u128) -> u128 {
    let quote = market.get_buy_price_in_eth(option, amount).unwrap();
    market
        .buy_tokens_with_eth(buyer, option, amount, quote)
        .unwrap();
    quote
}

pub fn sell(
    market: &mut Market,
    bank: &mut Bank,
    seller: Pubkey,
    option: Outcome,
    amount: u128,
) -> Result<TokensSold> {
    let address = market.address;
    market.approve_tokens(seller, option, address, amount)?;
    market.sell_tokens_for_eth(seller, option, amount, bank)
}
