//! Structured records emitted by every mutating entry point
//!
//! Each record is logged with `emit!` and returned to the caller, so indexers
//! and in-process hosts observe the same data.

use anchor_lang::prelude::*;

use crate::state::Outcome;

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketCreated {
    pub market: Pubkey,
    pub liquidity_provider: Pubkey,
    pub oracle: Pubkey,
    pub question: String,
    pub initial_collateral: u128,
    pub token_supply: u128,
    pub locked_yes: u128,
    pub locked_no: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidityAdded {
    pub provider: Pubkey,
    pub eth_amount: u128,
    pub tokens_amount: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidityRemoved {
    pub provider: Pubkey,
    pub eth_amount: u128,
    pub tokens_amount: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub option: Outcome,
    pub amount: u128,
    pub eth_amount: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokensSold {
    pub seller: Pubkey,
    pub option: Outcome,
    pub amount: u128,
    pub eth_amount: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketReported {
    pub oracle: Pubkey,
    pub winning_option: Outcome,
    pub winning_token: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketResolved {
    pub resolver: Pubkey,
    pub total_eth_to_send: u128,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningTokensRedeemed {
    pub redeemer: Pubkey,
    pub amount: u128,
    pub eth_amount: u128,
}
