//! Market Creation
//!
//! The liquidity provider seeds the market with collateral. Both outcome
//! ledgers are minted to the same supply, and a locked allocation skewed
//! toward the expected outcome is handed to the LP:
//!
//! ```text
//! supply     = collateral * PRECISION / initial_token_value     (each side)
//! locked_yes = supply * p_yes       * pct * 2 / 10000
//! locked_no  = supply * (100-p_yes) * pct * 2 / 10000
//! ```
//!
//! Since locked tokens count as sold, the market opens at the configured
//! probability: `locked_yes / (locked_yes + locked_no) == p_yes / 100`.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::MarketError;
use crate::events::MarketCreated;
use crate::state::{Market, MarketStatus, Outcome, OutcomeLedger, OutcomePair};
use crate::utils::math::mul_div;

/// Construction parameters supplied by the deployer
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMarketParams {
    pub liquidity_provider: Pubkey,
    pub oracle: Pubkey,
    pub question: String,
    pub outcome_labels: OutcomePair<String>,
    /// Collateral per token, PRECISION-scaled
    pub initial_token_value: u128,
    pub initial_yes_probability: u8,
    pub percentage_to_lock: u8,
}

/// Identities assigned by the host to the market and its two token series
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarketKeys {
    pub market: Pubkey,
    pub yes_mint: Pubkey,
    pub no_mint: Pubkey,
}

impl Market {
    pub fn create(
        keys: MarketKeys,
        params: CreateMarketParams,
        collateral_sent: u128,
    ) -> Result<(Self, MarketCreated)> {
        // Validations
        require!(
            collateral_sent > 0,
            MarketError::MustProvideETHForInitialLiquidity
        );
        let p_yes = params.initial_yes_probability as u128;
        require!(
            p_yes > 0 && p_yes < PERCENT_DENOMINATOR,
            MarketError::InvalidProbability
        );
        let pct = params.percentage_to_lock as u128;
        require!(
            pct > 0 && pct < PERCENT_DENOMINATOR,
            MarketError::InvalidPercentageToLock
        );
        require!(
            params.initial_token_value > 0,
            MarketError::InvalidInitialTokenValue
        );
        require!(
            params.question.len() <= MAX_QUESTION_LEN,
            MarketError::QuestionTooLong
        );
        require!(
            params.outcome_labels.yes.len() <= MAX_LABEL_LEN
                && params.outcome_labels.no.len() <= MAX_LABEL_LEN,
            MarketError::LabelTooLong
        );

        let token_supply = mul_div(collateral_sent, PRECISION, params.initial_token_value)?;
        require!(token_supply > 0, MarketError::InvalidInitialTokenValue);

        let locked = OutcomePair::new(
            mul_div(token_supply, p_yes * pct * LOCK_MULTIPLIER, LOCK_DENOMINATOR)?,
            mul_div(
                token_supply,
                (PERCENT_DENOMINATOR - p_yes) * pct * LOCK_MULTIPLIER,
                LOCK_DENOMINATOR,
            )?,
        );
        require!(
            locked.yes <= token_supply && locked.no <= token_supply,
            MarketError::InvalidPercentageToLock
        );

        let mut tokens = OutcomePair::new(
            OutcomeLedger::new(keys.yes_mint),
            OutcomeLedger::new(keys.no_mint),
        );
        for outcome in Outcome::ALL {
            let ledger = &mut tokens[outcome];
            ledger.mint(&keys.market, token_supply)?;
            ledger.transfer(&keys.market, &params.liquidity_provider, locked[outcome])?;
        }

        let market = Market {
            address: keys.market,
            owner: params.liquidity_provider,
            oracle: params.oracle,
            question: params.question,
            outcome_labels: params.outcome_labels,
            initial_token_value: params.initial_token_value,
            initial_yes_probability: params.initial_yes_probability,
            percentage_locked: params.percentage_to_lock,
            tokens,
            eth_collateral: collateral_sent,
            lp_trading_revenue: 0,
            status: MarketStatus::Open,
            winning_outcome: None,
        };

        let event = MarketCreated {
            market: market.address,
            liquidity_provider: market.owner,
            oracle: market.oracle,
            question: market.question.clone(),
            initial_collateral: collateral_sent,
            token_supply,
            locked_yes: locked.yes,
            locked_no: locked.no,
        };
        emit!(event.clone());

        msg!("Market created: {}", market.question);
        msg!("Supply per outcome: {}", token_supply);
        msg!("Locked to LP: {} YES, {} NO", locked.yes, locked.no);

        Ok((market, event))
    }
}
