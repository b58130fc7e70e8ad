//! Decision model: how a tally turns into a verdict.
//!
//! This module defines the DecisionPolicy trait (evaluate a tally against total
//! power and elapsed time) and the serializable Policy sum type over the
//! concrete variants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::errors::PolicyError;
use super::outcome::DecisionPolicyResult;
use super::percentage::PercentagePolicy;
use super::tally::Tally;
use super::threshold::ThresholdPolicy;
use crate::math::NonNegativeDec;

/// A rule deciding when a tally passes, fails for good, or stays open.
///
/// Policies are pure: given the same tally, total power and elapsed time they
/// return the same result, and they never mutate their inputs. Every variant
/// checks its timeout first, so a closed voting window rejects even a tally
/// that would otherwise pass.
pub trait DecisionPolicy: Send + Sync {
    /// Length of the voting window.
    fn timeout(&self) -> Duration;

    /// Check the policy's own parameters. Called once when a policy is built or
    /// registered, never on the evaluation path.
    fn validate(&self) -> Result<(), PolicyError>;

    /// Evaluate with an already-validated total power.
    fn allow(
        &self,
        tally: &Tally,
        total_power: &NonNegativeDec,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError>;

    /// Evaluate with total power as it arrives at the boundary: a decimal string.
    ///
    /// A closed window rejects without looking at `total_power`. Otherwise
    /// malformed or negative input fails here, before any comparison runs.
    fn evaluate(
        &self,
        tally: &Tally,
        total_power: &str,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        if window_closed(self.timeout(), elapsed) {
            return Ok(DecisionPolicyResult::rejected());
        }
        let total_power: NonNegativeDec = total_power.parse()?;
        self.allow(tally, &total_power, elapsed)
    }
}

/// `elapsed >= timeout` closes the window.
pub(crate) fn window_closed(timeout: Duration, elapsed: Duration) -> bool {
    elapsed >= timeout
}

pub(crate) fn validate_timeout(timeout: Duration) -> Result<(), PolicyError> {
    if timeout.is_zero() {
        return Err(PolicyError::invalid("timeout", "must be greater than zero"));
    }
    Ok(())
}

/// Every decision policy the engine knows about.
///
/// Serialized as an internally tagged object, e.g.
/// `{"type":"percentage","percentage":"0.5","timeout":"1h"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Policy {
    Threshold(ThresholdPolicy),
    Percentage(PercentagePolicy),
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Threshold(_) => "threshold",
            Policy::Percentage(_) => "percentage",
        }
    }

    fn inner(&self) -> &dyn DecisionPolicy {
        match self {
            Policy::Threshold(p) => p,
            Policy::Percentage(p) => p,
        }
    }
}

impl DecisionPolicy for Policy {
    fn timeout(&self) -> Duration {
        self.inner().timeout()
    }

    fn validate(&self) -> Result<(), PolicyError> {
        self.inner().validate()
    }

    fn allow(
        &self,
        tally: &Tally,
        total_power: &NonNegativeDec,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        self.inner().allow(tally, total_power, elapsed)
    }
}

impl From<ThresholdPolicy> for Policy {
    fn from(policy: ThresholdPolicy) -> Self {
        Policy::Threshold(policy)
    }
}

impl From<PercentagePolicy> for Policy {
    fn from(policy: PercentagePolicy) -> Self {
        Policy::Percentage(policy)
    }
}
