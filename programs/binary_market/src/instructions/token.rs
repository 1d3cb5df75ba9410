//! Holder-side outcome token operations
//!
//! `signer` is the authenticated caller; it can only move or approve its own
//! balance. Supply changes stay inside the engine.

use anchor_lang::prelude::*;

use crate::state::{Market, Outcome};

impl Market {
    pub fn transfer_tokens(
        &mut self,
        signer: Pubkey,
        option: Outcome,
        to: Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.tokens[option].transfer(&signer, &to, amount)
    }

    /// Let `spender` move up to `amount` of the signer's tokens; selling to
    /// the market requires approving `market.address`.
    pub fn approve_tokens(
        &mut self,
        signer: Pubkey,
        option: Outcome,
        spender: Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.tokens[option].approve(&signer, &spender, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRECISION;
    use crate::errors::MarketError;
    use crate::test_utils::*;

    #[test]
    fn test_holders_move_their_own_tokens() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let friend = Pubkey::new_unique();

        market
            .transfer_tokens(lp, Outcome::No, friend, 3 * PRECISION)
            .unwrap();
        assert_eq!(market.token(Outcome::No).balance_of(&friend), 3 * PRECISION);
        assert_eq!(market.token(Outcome::No).balance_of(&lp), 5 * PRECISION);

        let err = market
            .transfer_tokens(friend, Outcome::No, lp, 4 * PRECISION)
            .unwrap_err();
        assert_eq!(err, MarketError::InsufficientBalance.into());
    }

    #[test]
    fn test_approval_is_per_outcome() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;
        let address = market.address;

        market
            .approve_tokens(lp, Outcome::Yes, address, PRECISION)
            .unwrap();
        assert_eq!(market.token(Outcome::Yes).allowance(&lp, &address), PRECISION);
        assert_eq!(market.token(Outcome::No).allowance(&lp, &address), 0);
    }
}
