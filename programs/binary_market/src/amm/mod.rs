//! # Automated Market Maker (AMM) Module
//!
//! This module implements the **implied-probability curve** used to price
//! YES/NO outcome tokens.
//!
//! ## The Probability Curve
//!
//! Tokens that left the market's reserve (bought by traders or locked to the
//! liquidity provider) are "sold". Each side's implied probability is its
//! share of everything sold:
//!
//! ```text
//!                    sold[option]
//!   p(option) = ─────────────────────────
//!               sold[option] + sold[other]
//!
//!   ┌────────────────────────────────────────┐
//!   │  p ▲                                    │
//!   │  1 ┤                  ╭─────────        │
//!   │    │            ╭─────╯                 │
//!   │    │      ╭─────╯   buying `option`     │
//!   │    │╭─────╯         moves right         │
//!   │  0 ┼──────────────────────▶ sold[option]│
//!   └────────────────────────────────────────┘
//! ```
//!
//! A block of tokens is priced at the average of the probability just before
//! and just after the trade, times the per-token collateral value.

pub mod pricing;

pub use pricing::*;
