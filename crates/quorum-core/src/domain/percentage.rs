//! Percentage policy: pass once yes-weight reaches a share of total power.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::decision::{DecisionPolicy, validate_timeout, window_closed};
use super::errors::PolicyError;
use super::outcome::DecisionPolicyResult;
use super::tally::Tally;
use crate::math::{NonNegativeDec, PositiveDec};

/// Passes once `yes / total_power >= percentage`, with `percentage` in `(0, 1]`.
///
/// The outcome is a final rejection when even the best case cannot reach the
/// percentage, i.e. when every unit of power that has not voted yet switching to
/// yes would still leave the share strictly below it. A best case that lands
/// exactly on the percentage keeps the decision open.
///
/// Shares are never divided out. Both checks multiply the percentage by the
/// total power instead, which stays exact whenever the product fits in 28
/// significant digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentagePolicy {
    percentage: PositiveDec,

    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl PercentagePolicy {
    pub fn new(percentage: &str, timeout: Duration) -> Result<Self, PolicyError> {
        let policy = Self {
            percentage: percentage.parse()?,
            timeout,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn percentage(&self) -> &PositiveDec {
        &self.percentage
    }
}

impl DecisionPolicy for PercentagePolicy {
    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn validate(&self) -> Result<(), PolicyError> {
        let percentage = self.percentage.as_decimal();
        if percentage <= Decimal::ZERO || percentage > Decimal::ONE {
            return Err(PolicyError::invalid(
                "percentage",
                format!("must be in (0, 1], got {percentage}"),
            ));
        }
        validate_timeout(self.timeout)
    }

    fn allow(
        &self,
        tally: &Tally,
        total_power: &NonNegativeDec,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        trace!(percentage = %self.percentage, %total_power, ?elapsed, "evaluating percentage policy");

        if window_closed(self.timeout, elapsed) {
            debug!(timeout = ?self.timeout, ?elapsed, "voting window closed");
            return Ok(DecisionPolicyResult::rejected());
        }

        if total_power.is_zero() {
            return Err(PolicyError::DivisionByZero);
        }

        let required = self.percentage.to_non_negative().checked_mul(total_power)?;

        if tally.yes >= required {
            debug!(yes = %tally.yes, %required, "percentage reached");
            return Ok(DecisionPolicyResult::accepted());
        }

        let undecided = total_power.checked_sub(&tally.total_counts()?)?;
        let best_case = tally.yes.checked_add(&undecided)?;
        if best_case < required {
            debug!(%best_case, %required, "percentage unreachable");
            return Ok(DecisionPolicyResult::rejected());
        }

        debug!(yes = %tally.yes, %best_case, %required, "percentage pending");
        Ok(DecisionPolicyResult::pending())
    }
}
