//! Outcome selector and the per-outcome pair container

use std::ops::{Index, IndexMut};

use anchor_lang::prelude::*;

use crate::errors::MarketError;

/// One side of a binary market. Index 0 is the yes-like side.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Yes, Outcome::No];

    pub fn index(self) -> u8 {
        match self {
            Outcome::Yes => 0,
            Outcome::No => 1,
        }
    }

    pub fn other(self) -> Outcome {
        match self {
            Outcome::Yes => Outcome::No,
            Outcome::No => Outcome::Yes,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = anchor_lang::error::Error;

    fn try_from(option: u8) -> Result<Self> {
        match option {
            0 => Ok(Outcome::Yes),
            1 => Ok(Outcome::No),
            _ => err!(MarketError::InvalidOption),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.index()
    }
}

/// A value held once per outcome, indexed by [`Outcome`].
///
/// Formulas are written once over `option` / `option.other()` instead of
/// duplicating yes/no fields.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomePair<T> {
    pub yes: T,
    pub no: T,
}

impl<T> OutcomePair<T> {
    pub fn new(yes: T, no: T) -> Self {
        Self { yes, no }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Outcome, &T) -> U) -> OutcomePair<U> {
        OutcomePair {
            yes: f(Outcome::Yes, &self.yes),
            no: f(Outcome::No, &self.no),
        }
    }
}

impl<T> Index<Outcome> for OutcomePair<T> {
    type Output = T;

    fn index(&self, outcome: Outcome) -> &T {
        match outcome {
            Outcome::Yes => &self.yes,
            Outcome::No => &self.no,
        }
    }
}

impl<T> IndexMut<Outcome> for OutcomePair<T> {
    fn index_mut(&mut self, outcome: Outcome) -> &mut T {
        match outcome {
            Outcome::Yes => &mut self.yes,
            Outcome::No => &mut self.no,
        }
    }
}
