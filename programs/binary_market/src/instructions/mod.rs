//! Entry points of the prediction market engine
//!
//! Each file adds one family of operations to [`Market`](crate::state::Market):
//! - `create_market` - Seed a market (LP, once)
//! - `liquidity` - Add/remove liquidity (LP only, while open)
//! - `trade` - Quote, buy and sell outcome tokens
//! - `token` - Holder transfers and approvals
//! - `report` - Declare the winning outcome (oracle only, once)
//! - `resolve` - LP settlement and withdrawal (after report, once)
//! - `redeem` - Convert winning tokens to collateral (after report)

pub mod create_market;
pub mod liquidity;
pub mod redeem;
pub mod report;
pub mod resolve;
pub mod token;
pub mod trade;

pub use create_market::*;
