//! Evaluation request / report documents.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use quorum_core::app::Evaluator;
use quorum_core::ports::{Clock, FixedClock, SystemClock};
use quorum_core::{DecisionPolicy, DecisionPolicyResult, Policy, Tally, Verdict};
use serde::{Deserialize, Serialize};

/// One proposal to evaluate.
///
/// The voting time is given either directly as `elapsed` ("50s", "2h") or as
/// `submitted_at` (RFC 3339), measured against `now` or, when `now` is absent,
/// the system clock.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub policy: Policy,

    #[serde(default)]
    pub tally: Tally,

    /// Kept as the raw string so malformed input fails in the engine's parser.
    pub total_power: String,

    #[serde(default, with = "humantime_serde")]
    pub elapsed: Option<Duration>,

    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// What `quorum evaluate` prints.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub policy: &'static str,

    #[serde(flatten)]
    pub result: DecisionPolicyResult,

    pub verdict: Verdict,
}

impl EvaluationRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("failed to parse evaluation request")
    }

    pub fn evaluate(&self) -> Result<EvaluationReport> {
        self.policy
            .validate()
            .context("decision policy failed validation")?;

        let fixed;
        let clock: &dyn Clock = match self.now {
            Some(now) => {
                fixed = FixedClock::new(now);
                &fixed
            }
            None => &SystemClock,
        };
        let evaluator = Evaluator::new(clock);

        let result = match (self.elapsed, self.submitted_at) {
            (Some(elapsed), None) => {
                if self.now.is_some() {
                    bail!("`now` only applies together with `submitted_at`");
                }
                evaluator.evaluate_elapsed(&self.policy, &self.tally, &self.total_power, elapsed)
            }
            (None, Some(submitted_at)) => {
                evaluator.evaluate(&self.policy, &self.tally, &self.total_power, submitted_at)
            }
            (Some(_), Some(_)) => bail!("set either `elapsed` or `submitted_at`, not both"),
            (None, None) => bail!("missing voting time: set `elapsed` or `submitted_at`"),
        }
        .context("policy evaluation failed")?;

        Ok(EvaluationReport {
            policy: self.policy.name(),
            result,
            verdict: result.verdict(),
        })
    }
}
