//! Rolling a parsed specification.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::DiceSpec;
use super::parser::RollRequest;
use crate::config::RollConfig;
use crate::format::roll_breakdown;

/// Result of a comparison clause.
///
/// `NotApplicable` means the expression had no comparison; it is neither a
/// success nor a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The comparison held.
    Success,
    /// The comparison did not hold.
    Failure,
    /// There was no comparison to evaluate.
    NotApplicable,
}

impl Verdict {
    /// `Some(true)` on success, `Some(false)` on failure, `None` otherwise.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Success => Some(true),
            Self::Failure => Some(false),
            Self::NotApplicable => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Success } else { Self::Failure }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// The outcome of rolling one [`DiceSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Canonical notation of the rolled spec (without comparison).
    pub expression: String,
    /// Individual die values in the order they were rolled.
    pub rolls: Vec<u32>,
    /// Flat modifier applied to the sum.
    pub modifier: i64,
    /// Sum of `rolls` plus `modifier`.
    pub total: i64,
    /// A d20 showed the configured critical-success value.
    pub is_critical_success: bool,
    /// A d20 showed the configured critical-fail value.
    pub is_critical_fail: bool,
    /// Result of the comparison clause.
    pub comparison: Verdict,
}

impl DiceSpec {
    /// Roll this spec once.
    ///
    /// Critical flags are only raised for 20-sided dice.
    pub fn roll<R: Rng + ?Sized>(&self, config: &RollConfig, rng: &mut R) -> RollOutcome {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        self.outcome_from(rolls, config)
    }

    /// Build an outcome from already-rolled values.
    pub fn outcome_from(&self, rolls: Vec<u32>, config: &RollConfig) -> RollOutcome {
        let total = rolls
            .iter()
            .fold(self.modifier, |acc, &r| acc.saturating_add(i64::from(r)));
        let d20 = self.sides == 20;
        let is_critical_success = d20 && rolls.contains(&config.critical_success);
        let is_critical_fail = d20 && rolls.contains(&config.critical_fail);
        let comparison = match self.comparison {
            Some(cmp) => Verdict::from(cmp.op.test(total, cmp.threshold)),
            None => Verdict::NotApplicable,
        };

        tracing::debug!(spec = %self, ?rolls, total, "rolled dice");

        RollOutcome {
            expression: self.to_string(),
            rolls,
            modifier: self.modifier,
            total,
            is_critical_success,
            is_critical_fail,
            comparison,
        }
    }
}

impl RollRequest {
    /// Roll every repeat independently.
    pub fn roll<R: Rng + ?Sized>(&self, config: &RollConfig, rng: &mut R) -> Vec<RollOutcome> {
        let spec = self.spec();
        (0..self.times()).map(|_| spec.roll(config, rng)).collect()
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.expression, roll_breakdown(self))?;
        if self.is_critical_success {
            write!(f, " [critical success]")?;
        }
        if self.is_critical_fail {
            write!(f, " [critical failure]")?;
        }
        match self.comparison {
            Verdict::NotApplicable => Ok(()),
            verdict => write!(f, " [{verdict}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::CompareOp;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn cfg() -> RollConfig {
        RollConfig::default()
    }

    #[test]
    fn roll_produces_count_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = DiceSpec::new(10, 6, 3).roll(&cfg(), &mut rng);
        assert_eq!(out.rolls.len(), 10);
        assert!(out.rolls.iter().all(|r| (1..=6).contains(r)));
        assert_eq!(out.total, out.rolls.iter().map(|&r| i64::from(r)).sum::<i64>() + 3);
        assert_eq!(out.expression, "10d6+3");
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let spec = DiceSpec::new(4, 20, 0);
        let a = spec.roll(&cfg(), &mut StdRng::seed_from_u64(99));
        let b = spec.roll(&cfg(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn d20_criticals() {
        let spec = DiceSpec::new(2, 20, 0);
        let out = spec.outcome_from(vec![20, 7], &cfg());
        assert!(out.is_critical_success);
        assert!(!out.is_critical_fail);

        let out = spec.outcome_from(vec![1, 20], &cfg());
        assert!(out.is_critical_success);
        assert!(out.is_critical_fail);
    }

    #[test]
    fn criticals_only_for_d20() {
        let spec = DiceSpec::new(2, 100, 0);
        let out = spec.outcome_from(vec![20, 1], &cfg());
        assert!(!out.is_critical_success);
        assert!(!out.is_critical_fail);
    }

    #[test]
    fn configured_critical_values() {
        let config = RollConfig::default().with_criticals(19, 2);
        let spec = DiceSpec::new(1, 20, 0);
        assert!(spec.outcome_from(vec![19], &config).is_critical_success);
        assert!(!spec.outcome_from(vec![20], &config).is_critical_success);
        assert!(spec.outcome_from(vec![2], &config).is_critical_fail);
        assert!(!spec.outcome_from(vec![1], &config).is_critical_fail);
    }

    #[test]
    fn comparison_verdicts() {
        let spec = DiceSpec::new(1, 20, 2).with_comparison(CompareOp::Ge, 15);
        assert_eq!(spec.outcome_from(vec![13], &cfg()).comparison, Verdict::Success);
        assert_eq!(spec.outcome_from(vec![12], &cfg()).comparison, Verdict::Failure);
    }

    #[test]
    fn missing_comparison_is_not_applicable() {
        let out = DiceSpec::new(1, 6, 0).outcome_from(vec![6], &cfg());
        assert_eq!(out.comparison, Verdict::NotApplicable);
        assert_eq!(out.comparison.as_bool(), None);
    }

    #[test]
    fn request_rolls_each_repeat() {
        let req = RollRequest::Repeated {
            times: 5,
            spec: DiceSpec::new(1, 6, 0),
        };
        let mut rng = StdRng::seed_from_u64(7);
        let outs = req.roll(&cfg(), &mut rng);
        assert_eq!(outs.len(), 5);
        assert!(outs.iter().all(|o| o.rolls.len() == 1));
    }

    #[test]
    fn extreme_modifier_saturates() {
        let spec = DiceSpec::new(1, 6, i64::MAX);
        let out = spec.outcome_from(vec![6], &cfg());
        assert_eq!(out.total, i64::MAX);
    }

    #[test]
    fn rolls_through_trait_object() {
        let mut rng = StdRng::seed_from_u64(11);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let out = DiceSpec::new(3, 6, 0).roll(&cfg(), dyn_rng);
        assert_eq!(out.rolls.len(), 3);
    }

    #[test]
    fn outcome_display() {
        let spec = DiceSpec::new(2, 20, 1).with_comparison(CompareOp::Gt, 10);
        let out = spec.outcome_from(vec![20, 4], &cfg());
        assert_eq!(
            out.to_string(),
            "2d20+1: (20 + 4) + 1 = 25 [critical success] [success]"
        );
    }
}
