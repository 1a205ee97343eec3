//! Dice engine for tabletop RPG groups.
//!
//! Resolves dice notation (`2d6+1`, `d20>=15`, `3 d6`) under a generic
//! modifier/comparison engine and percentile checks under Call of Cthulhu
//! 7th edition rules. Every operation is a pure function of its inputs, a
//! [`RollConfig`] snapshot, and a caller-supplied random source.

pub mod coc;
pub mod config;
pub mod critical;
pub mod dice;
pub mod error;
pub mod format;
pub mod summary;

pub use coc::{CocOutcome, MAX_COC_TIMES, SuccessTier, classify, resolve_coc};
pub use config::RollConfig;
pub use critical::{CriticalEvent, CriticalKind, Criticals, critical_events};
pub use dice::{CompareOp, Comparison, DiceSpec, RollOutcome, RollRequest, Verdict};
pub use error::{Bound, DiceError, DiceResult};
pub use summary::CocSummary;

use rand::Rng;

/// Parse `expression` and roll it.
///
/// A leading repeat count (`"3 d6"`) is capped by `max_rolls`, falling back to
/// the config's dice count cap when no override is given.
pub fn parse_and_evaluate<R: Rng + ?Sized>(
    expression: &str,
    max_rolls: Option<u32>,
    config: &RollConfig,
    rng: &mut R,
) -> DiceResult<Vec<RollOutcome>> {
    config.validate()?;
    let max_rolls = max_rolls.unwrap_or(config.max_dice_count);
    let request = dice::parse(expression, config, max_rolls)?;
    Ok(request.roll(config, rng))
}

/// Re-classify a known percentile roll against a skill.
pub fn classify_coc(roll: u32, skill: u32, config: &RollConfig) -> SuccessTier {
    classify(roll, skill, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn single_expression() {
        let mut rng = StdRng::seed_from_u64(42);
        let outs = parse_and_evaluate("2d6+1", None, &RollConfig::default(), &mut rng).unwrap();
        assert_eq!(outs.len(), 1);
        assert_eq!(outs[0].expression, "2d6+1");
        assert_eq!(outs[0].rolls.len(), 2);
    }

    #[test]
    fn repeated_expression() {
        let mut rng = StdRng::seed_from_u64(42);
        let outs = parse_and_evaluate("+3 d6", Some(10), &RollConfig::default(), &mut rng).unwrap();
        assert_eq!(outs.len(), 3);
        assert!(outs.iter().all(|o| o.rolls.len() == 1 && o.expression == "1d6"));
    }

    #[test]
    fn repeat_cap_override() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = RollConfig::default();
        assert!(matches!(
            parse_and_evaluate("11 d6", Some(10), &cfg, &mut rng),
            Err(DiceError::OutOfRange { bound: Bound::RollCount, .. })
        ));
        assert_eq!(
            parse_and_evaluate("11 d6", None, &cfg, &mut rng).unwrap().len(),
            11
        );
    }

    #[test]
    fn bad_expression_does_not_poison_later_calls() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = RollConfig::default();
        assert!(parse_and_evaluate("abc", None, &cfg, &mut rng).is_err());
        assert!(parse_and_evaluate("d20", None, &cfg, &mut rng).is_ok());
    }

    #[test]
    fn huge_modifier_is_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = RollConfig::default();
        for text in ["d6+9223372036854775807", "3 d6-9223372036854775807"] {
            assert!(matches!(
                parse_and_evaluate(text, None, &cfg, &mut rng),
                Err(DiceError::OutOfRange { bound: Bound::Modifier, .. })
            ));
        }
    }

    #[test]
    fn accepts_trait_object_rng() {
        let mut rng = StdRng::seed_from_u64(42);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let outs = parse_and_evaluate("2 d8", None, &RollConfig::default(), dyn_rng).unwrap();
        assert_eq!(outs.len(), 2);
    }

    #[test]
    fn classify_examples() {
        let cfg = RollConfig::default();
        assert_eq!(classify_coc(1, 30, &cfg), SuccessTier::CriticalSuccess);
        assert_eq!(classify_coc(97, 40, &cfg), SuccessTier::CriticalFailure);
        assert_eq!(classify_coc(100, 60, &cfg), SuccessTier::CriticalFailure);
        assert_eq!(classify_coc(50, 50, &cfg), SuccessTier::RegularSuccess);
        assert_eq!(classify_coc(10, 50, &cfg), SuccessTier::ExtremeSuccess);
    }
}
