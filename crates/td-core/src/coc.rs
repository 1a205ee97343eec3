//! Call of Cthulhu 7th edition percentile resolution.
//!
//! A d100 is rolled against a skill value and classified into one of six
//! tiers. Checks run in strict priority order:
//!
//! 1. the configured critical-success value
//! 2. critical failure: 96-100 when the skill is below 50, otherwise only
//!    the configured critical-fail value
//! 3. extreme success: a natural 100, or at most skill / extreme divisor
//! 4. hard success: at most skill / hard divisor
//! 5. regular success: at most the skill
//! 6. failure

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::RollConfig;
use crate::error::{Bound, DiceResult};

/// Largest number of rolls in one CoC batch.
pub const MAX_COC_TIMES: u32 = 10;

/// Skill value below which 96-100 all count as critical failures.
const LOW_SKILL: u32 = 50;

/// Lowest roll that is a critical failure for low skills.
const LOW_SKILL_FUMBLE: u32 = 96;

/// One of the six ranked CoC outcomes, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SuccessTier {
    /// The configured critical-success roll.
    CriticalSuccess,
    /// At most one fifth of the skill (by default).
    ExtremeSuccess,
    /// At most half the skill (by default).
    HardSuccess,
    /// At most the skill.
    RegularSuccess,
    /// Above the skill.
    Failure,
    /// A fumble.
    CriticalFailure,
}

impl SuccessTier {
    /// All tiers from best to worst.
    pub const ALL: [SuccessTier; 6] = [
        Self::CriticalSuccess,
        Self::ExtremeSuccess,
        Self::HardSuccess,
        Self::RegularSuccess,
        Self::Failure,
        Self::CriticalFailure,
    ];

    /// Numeric rank, 1 (critical success) through 6 (critical failure).
    pub fn rank(self) -> u8 {
        match self {
            Self::CriticalSuccess => 1,
            Self::ExtremeSuccess => 2,
            Self::HardSuccess => 3,
            Self::RegularSuccess => 4,
            Self::Failure => 5,
            Self::CriticalFailure => 6,
        }
    }

    /// Whether this tier counts as passing the check.
    pub fn is_success(self) -> bool {
        self.rank() <= 4
    }

    /// Default display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "Critical Success",
            Self::ExtremeSuccess => "Extreme Success",
            Self::HardSuccess => "Hard Success",
            Self::RegularSuccess => "Regular Success",
            Self::Failure => "Failure",
            Self::CriticalFailure => "Critical Failure",
        }
    }
}

impl fmt::Display for SuccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one percentile roll against a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocOutcome {
    /// The skill rolled against.
    pub skill: u32,
    /// The d100 result, 1-100.
    pub roll: u32,
    /// Classified tier.
    pub tier: SuccessTier,
    /// The roll equals the configured critical-success value.
    pub is_critical_success: bool,
    /// The roll is a fumble for this skill.
    pub is_critical_fail: bool,
}

impl CocOutcome {
    /// Classify an already-known roll.
    pub fn from_roll(roll: u32, skill: u32, config: &RollConfig) -> Self {
        Self {
            skill,
            roll,
            tier: classify(roll, skill, config),
            is_critical_success: roll == config.coc_critical_success,
            is_critical_fail: is_critical_failure(roll, skill, config),
        }
    }

    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        self.tier.is_success()
    }
}

impl fmt::Display for CocOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.roll, self.skill, self.tier)
    }
}

/// Critical-failure test.
pub fn is_critical_failure(roll: u32, skill: u32, config: &RollConfig) -> bool {
    if skill < LOW_SKILL {
        roll >= LOW_SKILL_FUMBLE
    } else {
        roll == config.coc_critical_fail
    }
}

/// Classify a roll against a skill value.
///
/// Pure: the same inputs always give the same tier. A zero divisor yields a
/// threshold of zero, which no roll reaches.
pub fn classify(roll: u32, skill: u32, config: &RollConfig) -> SuccessTier {
    if roll == config.coc_critical_success {
        return SuccessTier::CriticalSuccess;
    }
    if is_critical_failure(roll, skill, config) {
        return SuccessTier::CriticalFailure;
    }

    let extreme = skill.checked_div(config.coc_extreme_divisor).unwrap_or(0);
    let hard = skill.checked_div(config.coc_hard_divisor).unwrap_or(0);

    if roll == 100 || roll <= extreme {
        SuccessTier::ExtremeSuccess
    } else if roll <= hard {
        SuccessTier::HardSuccess
    } else if roll <= skill {
        SuccessTier::RegularSuccess
    } else {
        SuccessTier::Failure
    }
}

/// Roll d100 against `skill` once.
pub fn roll_coc<R: Rng + ?Sized>(skill: u32, config: &RollConfig, rng: &mut R) -> CocOutcome {
    let roll = rng.random_range(1..=100);
    let outcome = CocOutcome::from_roll(roll, skill, config);
    tracing::trace!(skill, roll, tier = %outcome.tier, "coc roll");
    outcome
}

/// Roll d100 against `skill` `times` times independently.
///
/// `skill` must be 1-100 and `times` 1-[`MAX_COC_TIMES`].
pub fn resolve_coc<R: Rng + ?Sized>(
    skill: u32,
    times: u32,
    config: &RollConfig,
    rng: &mut R,
) -> DiceResult<Vec<CocOutcome>> {
    config.validate()?;
    Bound::SkillValue.check(u64::from(skill), 1, 100)?;
    Bound::CocTimes.check(u64::from(times), 1, u64::from(MAX_COC_TIMES))?;

    let outcomes: Vec<CocOutcome> = (0..times).map(|_| roll_coc(skill, config, rng)).collect();
    tracing::debug!(skill, times, "resolved coc batch");
    Ok(outcomes)
}
