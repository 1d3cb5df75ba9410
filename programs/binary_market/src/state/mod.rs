//! State structures for the prediction market engine

pub mod collateral;
pub mod ledger;
pub mod market;
pub mod outcome;

pub use collateral::*;
pub use ledger::*;
pub use market::*;
pub use outcome::*;
