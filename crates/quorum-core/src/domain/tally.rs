//! Tally model: accumulated vote weight for a proposal.

use serde::{Deserialize, Serialize};

use super::errors::PolicyError;
use crate::math::NonNegativeDec;

/// A voter's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOption {
    Yes,
    No,
    Abstain,
    NoWithVeto,
}

/// Weighted vote counts for a single proposal.
///
/// Policies only read a tally. Building one up from ballots is the caller's job
/// (see [`Tally::add`] / [`Tally::sub`]), and updates to a given tally must be
/// serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    #[serde(default)]
    pub yes: NonNegativeDec,
    #[serde(default)]
    pub no: NonNegativeDec,
    #[serde(default)]
    pub abstain: NonNegativeDec,
    #[serde(default)]
    pub veto: NonNegativeDec,
}

impl Tally {
    pub fn new(
        yes: NonNegativeDec,
        no: NonNegativeDec,
        abstain: NonNegativeDec,
        veto: NonNegativeDec,
    ) -> Self {
        Self {
            yes,
            no,
            abstain,
            veto,
        }
    }

    /// Sum of all four counters.
    pub fn total_counts(&self) -> Result<NonNegativeDec, PolicyError> {
        self.yes
            .checked_add(&self.no)?
            .checked_add(&self.abstain)?
            .checked_add(&self.veto)
    }

    /// Count `weight` towards `option`.
    ///
    /// On error the tally is left untouched.
    pub fn add(&mut self, option: VoteOption, weight: &NonNegativeDec) -> Result<(), PolicyError> {
        let counter = self.counter_mut(option);
        *counter = counter.checked_add(weight)?;
        Ok(())
    }

    /// Withdraw `weight` from `option`, e.g. when a voter changes their vote.
    ///
    /// Fails with `NegativeResult` rather than letting a counter drop below zero.
    pub fn sub(&mut self, option: VoteOption, weight: &NonNegativeDec) -> Result<(), PolicyError> {
        let counter = self.counter_mut(option);
        *counter = counter.checked_sub(weight)?;
        Ok(())
    }

    pub fn count(&self, option: VoteOption) -> &NonNegativeDec {
        match option {
            VoteOption::Yes => &self.yes,
            VoteOption::No => &self.no,
            VoteOption::Abstain => &self.abstain,
            VoteOption::NoWithVeto => &self.veto,
        }
    }

    fn counter_mut(&mut self, option: VoteOption) -> &mut NonNegativeDec {
        match option {
            VoteOption::Yes => &mut self.yes,
            VoteOption::No => &mut self.no,
            VoteOption::Abstain => &mut self.abstain,
            VoteOption::NoWithVeto => &mut self.veto,
        }
    }
}
