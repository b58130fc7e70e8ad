//! Domain model (tally, policies, results, errors).
//!
//! Everything in here is pure: no clock, no I/O. Time enters only as the
//! elapsed voting duration handed to [`DecisionPolicy::allow`].

pub mod decision;
pub mod errors;
pub mod outcome;
pub mod percentage;
pub mod tally;
pub mod threshold;

pub use decision::{DecisionPolicy, Policy};
pub use errors::{ErrorKind, PolicyError};
pub use outcome::{DecisionPolicyResult, Verdict};
pub use percentage::PercentagePolicy;
pub use tally::{Tally, VoteOption};
pub use threshold::ThresholdPolicy;
