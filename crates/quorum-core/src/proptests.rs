//! Property-based tests for decision policies
//!
//! Tests for:
//! - Timeout override: a closed window always rejects, finally
//! - Threshold trichotomy: accepted / unreachable / pending
//! - Percentage bounds: actual share passes, best-case shortfall rejects
//! - Determinism: same inputs, same result

use std::time::Duration;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{
    DecisionPolicy, DecisionPolicyResult, PercentagePolicy, Policy, Tally, ThresholdPolicy,
};
use crate::math::NonNegativeDec;

fn weight(units: u32) -> NonNegativeDec {
    NonNegativeDec::new(Decimal::from(units)).unwrap()
}

/// A tally whose counters add up to at most `total_power`, plus that power.
fn arb_tally_and_power() -> impl Strategy<Value = (Tally, u32)> {
    (0u32..50, 0u32..50, 0u32..50, 0u32..50, 1u32..50).prop_map(|(y, n, a, v, spare)| {
        let tally = Tally::new(weight(y), weight(n), weight(a), weight(v));
        (tally, y + n + a + v + spare)
    })
}

/// Percentages with two decimal places in (0, 1].
fn arb_percentage() -> impl Strategy<Value = String> {
    (1u32..=100).prop_map(|hundredths| Decimal::new(hundredths.into(), 2).to_string())
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        (1u32..100, 1u64..1000).prop_map(|(t, secs)| {
            Policy::from(ThresholdPolicy::new(&t.to_string(), Duration::from_secs(secs)).unwrap())
        }),
        (arb_percentage(), 1u64..1000).prop_map(|(p, secs)| {
            Policy::from(PercentagePolicy::new(&p, Duration::from_secs(secs)).unwrap())
        }),
    ]
}

proptest! {
    /// Once elapsed >= timeout nothing else matters.
    #[test]
    fn prop_closed_window_rejects(
        policy in arb_policy(),
        (tally, power) in arb_tally_and_power(),
        overshoot in 0u64..1000,
    ) {
        let elapsed = policy.timeout() + Duration::from_secs(overshoot);
        let result = policy.allow(&tally, &weight(power), elapsed).unwrap();
        prop_assert_eq!(result, DecisionPolicyResult::rejected());
    }

    /// Evaluating twice gives the same answer.
    #[test]
    fn prop_evaluation_is_deterministic(
        policy in arb_policy(),
        (tally, power) in arb_tally_and_power(),
        elapsed in 0u64..2000,
    ) {
        let elapsed = Duration::from_secs(elapsed);
        let power = weight(power);
        let first = policy.allow(&tally, &power, elapsed).unwrap();
        let second = policy.allow(&tally, &power, elapsed).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Threshold: yes >= t passes, power < t fails, t in (yes, power] is pending.
    #[test]
    fn prop_threshold_trichotomy(
        threshold in 1u32..100,
        (tally, power) in arb_tally_and_power(),
    ) {
        let policy = ThresholdPolicy::new(&threshold.to_string(), Duration::from_secs(100)).unwrap();
        let t = weight(threshold);
        let result = policy.allow(&tally, &weight(power), Duration::from_secs(1)).unwrap();

        let expected = if tally.yes >= t {
            DecisionPolicyResult::accepted()
        } else if weight(power) < t {
            DecisionPolicyResult::rejected()
        } else {
            DecisionPolicyResult::pending()
        };
        prop_assert_eq!(result, expected);
    }

    /// Percentage: a final rejection means every undecided unit voting yes
    /// still falls short, and an acceptance means yes already reached it.
    /// Checked with integer cross-multiplication instead of division.
    #[test]
    fn prop_percentage_bounds(
        hundredths in 1u32..=100,
        (tally, power) in arb_tally_and_power(),
    ) {
        let percentage = Decimal::new(hundredths.into(), 2).to_string();
        let policy = PercentagePolicy::new(&percentage, Duration::from_secs(100)).unwrap();
        let result = policy.allow(&tally, &weight(power), Duration::from_secs(1)).unwrap();

        let yes = tally.yes.as_decimal();
        let counted = tally.total_counts().unwrap().as_decimal();
        let power = Decimal::from(power);
        let best = yes + (power - counted);
        let target = Decimal::from(hundredths) * power;

        if yes * Decimal::from(100) >= target {
            prop_assert_eq!(result, DecisionPolicyResult::accepted());
        } else if best * Decimal::from(100) < target {
            prop_assert_eq!(result, DecisionPolicyResult::rejected());
        } else {
            prop_assert_eq!(result, DecisionPolicyResult::pending());
        }
    }
}
