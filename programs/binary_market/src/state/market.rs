//! Prediction Market State
//!
//! A single binary market with its two outcome ledgers, collateral pool and
//! LP revenue accumulator. The market's own address holds the reserves:
//!
//! ```text
//!   reserve[option] = tokens[option].balance_of(market.address)
//!   sold[option]    = tokens[option].total_supply() - reserve[option]
//! ```

use anchor_lang::prelude::*;

use crate::amm::PoolState;
use crate::errors::MarketError;
use crate::state::{OutcomeLedger, Outcome, OutcomePair};

/// Market lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MarketStatus {
    /// Trading and liquidity changes allowed
    #[default]
    Open,
    /// Oracle has reported; only redemption and LP settlement remain
    Reported,
    /// LP has settled and withdrawn
    Resolved,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Market {
    /// Identity that holds the reserves
    pub address: Pubkey,

    /// Liquidity provider; the only account allowed to change liquidity and settle
    pub owner: Pubkey,

    /// Account allowed to report the outcome
    pub oracle: Pubkey,

    /// The prediction question
    /// Example: "Will the green car win the race?"
    pub question: String,

    pub outcome_labels: OutcomePair<String>,

    /// Collateral per token (PRECISION-scaled) used to size supply and redemptions
    pub initial_token_value: u128,

    /// Whole percent in (0, 100); only used to size the locked allocation
    pub initial_yes_probability: u8,

    /// Whole percent in (0, 100)
    pub percentage_locked: u8,

    pub(crate) tokens: OutcomePair<OutcomeLedger>,

    /// Collateral backing winning-token redemption
    pub(crate) eth_collateral: u128,

    /// Trade proceeds owed to the LP at settlement
    pub(crate) lp_trading_revenue: u128,

    pub(crate) status: MarketStatus,

    pub(crate) winning_outcome: Option<Outcome>,
}

/// Read-only view for UIs and indexers
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub question: String,
    pub outcome_labels: OutcomePair<String>,
    pub oracle: Pubkey,
    pub initial_token_value: u128,
    pub reserves: OutcomePair<u128>,
    pub total_supply: OutcomePair<u128>,
    pub is_reported: bool,
    pub yes_token: Pubkey,
    pub no_token: Pubkey,
    pub winning_token: Option<Pubkey>,
    pub eth_collateral: u128,
    pub lp_trading_revenue: u128,
    pub owner: Pubkey,
    pub initial_yes_probability: u8,
    pub percentage_locked: u8,
    pub status: MarketStatus,
}

impl Market {
    pub fn status(&self) -> MarketStatus {
        self.status
    }

    pub fn is_reported(&self) -> bool {
        self.status != MarketStatus::Open
    }

    pub fn is_resolved(&self) -> bool {
        self.status == MarketStatus::Resolved
    }

    pub fn eth_collateral(&self) -> u128 {
        self.eth_collateral
    }

    pub fn lp_trading_revenue(&self) -> u128 {
        self.lp_trading_revenue
    }

    pub fn winning_outcome(&self) -> Option<Outcome> {
        self.winning_outcome
    }

    pub fn winning_token(&self) -> Option<Pubkey> {
        self.winning_outcome.map(|outcome| self.tokens[outcome].mint)
    }

    /// Standard fungible-token reads for one outcome
    pub fn token(&self, outcome: Outcome) -> &OutcomeLedger {
        &self.tokens[outcome]
    }

    /// Unsold tokens still held by the market
    pub fn reserve(&self, outcome: Outcome) -> u128 {
        self.tokens[outcome].balance_of(&self.address)
    }

    pub fn reserves(&self) -> OutcomePair<u128> {
        self.tokens.map(|_, ledger| ledger.balance_of(&self.address))
    }

    pub fn pool(&self) -> PoolState {
        PoolState {
            initial_token_value: self.initial_token_value,
            total_supply: self.tokens.map(|_, ledger| ledger.total_supply()),
            reserve: self.reserves(),
        }
    }

    pub fn snapshot(&self) -> MarketSnapshot {
        let pool = self.pool();
        MarketSnapshot {
            question: self.question.clone(),
            outcome_labels: self.outcome_labels.clone(),
            oracle: self.oracle,
            initial_token_value: self.initial_token_value,
            reserves: pool.reserve,
            total_supply: pool.total_supply,
            is_reported: self.is_reported(),
            yes_token: self.tokens.yes.mint,
            no_token: self.tokens.no.mint,
            winning_token: self.winning_token(),
            eth_collateral: self.eth_collateral,
            lp_trading_revenue: self.lp_trading_revenue,
            owner: self.owner,
            initial_yes_probability: self.initial_yes_probability,
            percentage_locked: self.percentage_locked,
            status: self.status,
        }
    }

    /// Run `op` all-or-nothing: on error, every mutation it made is undone
    /// before the error is returned.
    pub(crate) fn atomically<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let checkpoint = self.clone();
        let result = op(self);
        if result.is_err() {
            *self = checkpoint;
        }
        result
    }

    pub(crate) fn require_open(&self) -> Result<()> {
        require!(!self.is_reported(), MarketError::PredictionAlreadyResolved);
        Ok(())
    }

    pub(crate) fn require_owner(&self, signer: Pubkey) -> Result<()> {
        require_keys_eq!(signer, self.owner, MarketError::OnlyOwner);
        Ok(())
    }

    /// Winning side, once reported
    pub(crate) fn require_winner(&self) -> Result<Outcome> {
        require!(self.is_reported(), MarketError::PredictionNotResolved);
        self.winning_outcome
            .ok_or_else(|| error!(MarketError::PredictionNotResolved))
    }
}
