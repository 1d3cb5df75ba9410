//! Outcome Token Ledger
//!
//! A minimal fungible-balance ledger for one outcome's shares. Supply only
//! changes through `mint` / `burn`, which are crate-private so the market
//! engine is the only minter. Holders move balances with `transfer` and the
//! allowance-gated `transfer_from`.
//!
//! ```text
//!   total_supply == Σ balances      (holds after every call)
//! ```

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::errors::MarketError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutcomeLedger {
    /// Identity of this token series
    pub mint: Pubkey,
    total_supply: u128,
    balances: BTreeMap<Pubkey, u128>,
    /// (owner, spender) -> remaining allowance
    allowances: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl OutcomeLedger {
    pub fn new(mint: Pubkey) -> Self {
        Self {
            mint,
            ..Self::default()
        }
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Non-zero balances, ordered by holder.
    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, &u128)> {
        self.balances.iter()
    }

    pub(crate) fn mint(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;

        self.total_supply = total_supply;
        self.set_balance(to, balance);
        Ok(())
    }

    pub(crate) fn burn(&mut self, from: &Pubkey, amount: u128) -> Result<()> {
        let balance = self.balance_of(from);
        require_gte!(balance, amount, MarketError::InsufficientBalance);

        self.set_balance(from, balance - amount);
        self.total_supply -= amount;
        Ok(())
    }

    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        let from_balance = self.balance_of(from);
        require_gte!(from_balance, amount, MarketError::InsufficientBalance);

        self.set_balance(from, from_balance - amount);
        // Cannot overflow: the sum of all balances equals total_supply.
        let to_balance = self.balance_of(to) + amount;
        self.set_balance(to, to_balance);
        Ok(())
    }

    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        if amount == 0 {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance. An allowance of `u128::MAX` is never decremented.
    pub fn transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = self.allowance(from, spender);
        require_gte!(allowance, amount, MarketError::InsufficientAllowance);

        self.transfer(from, to, amount)?;

        if allowance != u128::MAX {
            self.approve(from, spender, allowance - amount)?;
        }
        Ok(())
    }

    fn set_balance(&mut self, owner: &Pubkey, balance: u128) {
        if balance == 0 {
            self.balances.remove(owner);
        } else {
            self.balances.insert(*owner, balance);
        }
    }
}
