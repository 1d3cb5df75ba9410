use anchor_lang::prelude::*;

/// Outbound collateral transfer supplied by the host ledger.
///
/// Must either move exactly `amount` to `to` or fail without moving anything.
/// The engine calls it only after its own accounting is updated, and restores
/// that accounting if the transfer fails.
pub trait CollateralTransfer {
    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<()>;
}
