//! Threshold policy: pass once yes-weight reaches a fixed amount.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::decision::{DecisionPolicy, validate_timeout, window_closed};
use super::errors::PolicyError;
use super::outcome::DecisionPolicyResult;
use super::tally::Tally;
use crate::math::{NonNegativeDec, PositiveDec};

/// Passes as soon as `yes >= threshold`.
///
/// Fails for good when the window has closed or when the whole group's power
/// is below the threshold (even a unanimous yes could not reach it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    threshold: PositiveDec,

    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl ThresholdPolicy {
    pub fn new(threshold: &str, timeout: Duration) -> Result<Self, PolicyError> {
        let policy = Self {
            threshold: threshold.parse()?,
            timeout,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn threshold(&self) -> &PositiveDec {
        &self.threshold
    }
}

impl DecisionPolicy for ThresholdPolicy {
    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.threshold.as_decimal() <= Decimal::ZERO {
            return Err(PolicyError::invalid("threshold", "must be greater than zero"));
        }
        validate_timeout(self.timeout)
    }

    fn allow(
        &self,
        tally: &Tally,
        total_power: &NonNegativeDec,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        trace!(threshold = %self.threshold, %total_power, ?elapsed, "evaluating threshold policy");

        if window_closed(self.timeout, elapsed) {
            debug!(timeout = ?self.timeout, ?elapsed, "voting window closed");
            return Ok(DecisionPolicyResult::rejected());
        }

        let threshold = self.threshold.to_non_negative();

        if tally.yes >= threshold {
            debug!(yes = %tally.yes, %threshold, "threshold reached");
            return Ok(DecisionPolicyResult::accepted());
        }

        if *total_power < threshold {
            debug!(%total_power, %threshold, "threshold unreachable");
            return Ok(DecisionPolicyResult::rejected());
        }

        debug!(yes = %tally.yes, %threshold, "threshold pending");
        Ok(DecisionPolicyResult::pending())
    }
}
