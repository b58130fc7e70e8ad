//! Evaluator - ties a policy to the voting window
//!
//! Policies take the elapsed voting duration as an input. The Evaluator derives
//! it from the proposal's submit time and a Clock, then hands off to the policy.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{DecisionPolicy, DecisionPolicyResult, PolicyError, Tally};
use crate::ports::Clock;

/// Evaluates proposals against the time reported by `C`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use quorum_core::app::Evaluator;
/// use quorum_core::domain::{Policy, PercentagePolicy, Tally, Verdict};
/// use quorum_core::ports::FixedClock;
/// use std::time::Duration;
///
/// let submitted_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 50).unwrap();
/// let evaluator = Evaluator::new(FixedClock::new(now));
///
/// let policy: Policy = PercentagePolicy::new("0.5", Duration::from_secs(100)).unwrap().into();
/// let tally = Tally { yes: "2".parse().unwrap(), ..Tally::default() };
///
/// let result = evaluator.evaluate(&policy, &tally, "3", submitted_at).unwrap();
/// assert_eq!(result.verdict(), Verdict::Accepted);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator<C> {
    clock: C,
}

impl<C: Clock> Evaluator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Time since `submitted_at`. A submit time in the future is an error.
    pub fn elapsed_since(&self, submitted_at: DateTime<Utc>) -> Result<Duration, PolicyError> {
        let now = self.clock.now();
        now.signed_duration_since(submitted_at)
            .to_std()
            .map_err(|_| PolicyError::SubmittedInFuture { submitted_at, now })
    }

    pub fn evaluate<P: DecisionPolicy + ?Sized>(
        &self,
        policy: &P,
        tally: &Tally,
        total_power: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        let elapsed = self.elapsed_since(submitted_at)?;
        self.evaluate_elapsed(policy, tally, total_power, elapsed)
    }

    /// Skip the clock when the caller already knows the elapsed duration.
    pub fn evaluate_elapsed<P: DecisionPolicy + ?Sized>(
        &self,
        policy: &P,
        tally: &Tally,
        total_power: &str,
        elapsed: Duration,
    ) -> Result<DecisionPolicyResult, PolicyError> {
        let result = policy.evaluate(tally, total_power, elapsed)?;
        debug!(
            ?elapsed,
            allow = result.allow,
            is_final = result.is_final,
            verdict = ?result.verdict(),
            "policy evaluated"
        );
        Ok(result)
    }
}
