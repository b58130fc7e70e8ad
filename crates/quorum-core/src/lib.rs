//! quorum-core
//!
//! Decision-policy evaluation for weighted group votes.
//!
//! Given a [`Tally`](domain::Tally), the total voting power and how long the
//! proposal has been open, a policy answers one of three things: passed for
//! good, rejected for good, or still pending. All arithmetic is exact decimal
//! so every node computes the same answer from the same inputs.
//!
//! # Modules
//! - **math**: sign-constrained exact decimals ([`NonNegativeDec`](math::NonNegativeDec), [`PositiveDec`](math::PositiveDec))
//! - **domain**: Tally, DecisionPolicyResult, DecisionPolicy, ThresholdPolicy, PercentagePolicy, errors
//! - **ports**: Clock (SystemClock, FixedClock)
//! - **app**: Evaluator (voting window + policy)

pub mod app;
pub mod domain;
pub mod math;
pub mod ports;

#[cfg(test)]
mod proptests;

pub use domain::{
    DecisionPolicy, DecisionPolicyResult, ErrorKind, PercentagePolicy, Policy, PolicyError, Tally,
    ThresholdPolicy, Verdict, VoteOption,
};
pub use math::{NonNegativeDec, PositiveDec};
