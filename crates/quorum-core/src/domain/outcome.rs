//! Outcome model: the result of evaluating a decision policy.

use serde::{Deserialize, Serialize};

/// The `(allow, final)` pair returned by every policy evaluation.
///
/// - `final = true`: no further vote or elapsed time can change the outcome,
///   and `allow` is the permanent verdict.
/// - `final = false`: still waiting on votes or time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionPolicyResult {
    pub allow: bool,

    #[serde(rename = "final")]
    pub is_final: bool,
}

/// A one-word reading of a [`DecisionPolicyResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Accepted,
    Rejected,
    Pending,
}

impl DecisionPolicyResult {
    pub fn accepted() -> Self {
        Self {
            allow: true,
            is_final: true,
        }
    }

    pub fn rejected() -> Self {
        Self {
            allow: false,
            is_final: true,
        }
    }

    pub fn pending() -> Self {
        Self {
            allow: false,
            is_final: false,
        }
    }

    /// Non-final results are always `Pending`, whatever `allow` says.
    pub fn verdict(&self) -> Verdict {
        match (self.is_final, self.allow) {
            (true, true) => Verdict::Accepted,
            (true, false) => Verdict::Rejected,
            (false, _) => Verdict::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::accepted(DecisionPolicyResult::accepted(), Verdict::Accepted)]
    #[case::rejected(DecisionPolicyResult::rejected(), Verdict::Rejected)]
    #[case::pending(DecisionPolicyResult::pending(), Verdict::Pending)]
    #[case::allow_without_final(DecisionPolicyResult { allow: true, is_final: false }, Verdict::Pending)]
    fn verdict_reads_the_pair(#[case] result: DecisionPolicyResult, #[case] expected: Verdict) {
        assert_eq!(result.verdict(), expected);
    }

    #[test]
    fn result_serializes_with_final_key() {
        let v = serde_json::to_value(DecisionPolicyResult::rejected()).unwrap();
        assert_eq!(v, serde_json::json!({ "allow": false, "final": true }));
    }

    #[test]
    fn verdict_serializes_as_screaming_snake_case() {
        let s = serde_json::to_string(&Verdict::Pending).unwrap();
        assert_eq!(s, "\"PENDING\"");
    }
}
