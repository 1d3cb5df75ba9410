//! Outcome Reporting
//!
//! The oracle declares the winning outcome exactly once. Reporting freezes
//! trading and liquidity changes and opens redemption; it cannot be undone.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::events::MarketReported;
use crate::state::{Market, MarketStatus, Outcome};

impl Market {
    pub fn report(&mut self, oracle: Pubkey, winning_option: Outcome) -> Result<MarketReported> {
        require_keys_eq!(oracle, self.oracle, MarketError::OnlyOracleCanReport);
        self.require_open()?;

        self.winning_outcome = Some(winning_option);
        self.status = MarketStatus::Reported;

        let event = MarketReported {
            oracle,
            winning_option,
            winning_token: self.tokens[winning_option].mint,
        };
        emit!(event.clone());

        msg!("Market reported: {:?} wins", winning_option);

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_report_sets_winner() {
        for outcome in Outcome::ALL {
            let (mut market, _) = scenario_a();
            let oracle = market.oracle;

            let event = market.report(oracle, outcome).unwrap();

            assert!(market.is_reported());
            assert!(!market.is_resolved());
            assert_eq!(market.winning_outcome(), Some(outcome));
            assert_eq!(market.winning_token(), Some(market.token(outcome).mint));
            assert_eq!(event.winning_token, market.token(outcome).mint);
            assert_eq!(event.oracle, oracle);
        }
    }

    #[test]
    fn test_only_oracle_can_report() {
        let (mut market, _) = scenario_a();
        let lp = market.owner;

        let err = market.report(lp, Outcome::Yes).unwrap_err();
        assert_eq!(err, MarketError::OnlyOracleCanReport.into());
        assert!(!market.is_reported());
    }

    #[test]
    fn test_report_is_once_only() {
        let (mut market, _) = scenario_a();
        let oracle = market.oracle;
        market.report(oracle, Outcome::Yes).unwrap();

        let err = market.report(oracle, Outcome::No).unwrap_err();
        assert_eq!(err, MarketError::PredictionAlreadyResolved.into());
        assert_eq!(market.winning_outcome(), Some(Outcome::Yes));
    }
}
