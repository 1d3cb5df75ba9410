//! # Binary Market: Two-Outcome Prediction Market Engine
//!
//! Users bet on whether an event resolves YES or NO by trading outcome tokens
//! against a constant-liquidity automated market maker.
//!
//! ## Overview
//!
//! - A liquidity provider seeds the market with collateral and receives a
//!   locked allocation of both outcome tokens.
//! - Traders buy and sell outcome tokens. Prices follow the implied
//!   probability curve (see [`amm`]).
//! - An oracle reports the winning outcome once.
//! - The liquidity provider settles and withdraws its share; holders redeem
//!   winning tokens for collateral.
//!
//! ## Lifecycle
//!
//! ```text
//!   create ──▶ Open ──report──▶ Reported ──resolve_market_and_withdraw──▶ Resolved
//!               │                  │                                       │
//!               ├ add/remove       └ redeem_winning_tokens ◀───────────────┘
//!               │ liquidity
//!               └ buy/sell tokens
//! ```
//!
//! The engine is a pure request/response state machine. The host supplies the
//! caller identity, attached collateral and a [`CollateralTransfer`] for
//! outbound payments, and persists the Borsh-encoded [`Market`] between calls.

pub mod amm;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use amm::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;
