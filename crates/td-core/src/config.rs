//! Tunable thresholds for both rule systems.
//!
//! A `RollConfig` is a read-only snapshot for the duration of a roll. Callers
//! that store per-group settings replace the whole value on update rather
//! than mutating fields of a config another roll may be reading.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Per-group roll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Maximum number of dice summed into one roll.
    pub max_dice_count: u32,
    /// Maximum number of sides on a die.
    pub max_dice_sides: u32,
    /// Natural d20 value flagged as a critical success.
    pub critical_success: u32,
    /// Natural d20 value flagged as a critical failure.
    pub critical_fail: u32,
    /// Percentile roll that is always a critical success.
    pub coc_critical_success: u32,
    /// Percentile roll that is a critical failure for skills of 50 or more.
    pub coc_critical_fail: u32,
    /// Divisor of the skill value giving the hard-success threshold.
    pub coc_hard_divisor: u32,
    /// Divisor of the skill value giving the extreme-success threshold.
    pub coc_extreme_divisor: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            max_dice_count: 50,
            max_dice_sides: 1000,
            critical_success: 20,
            critical_fail: 1,
            coc_critical_success: 1,
            coc_critical_fail: 100,
            coc_hard_divisor: 2,
            coc_extreme_divisor: 5,
        }
    }
}

impl RollConfig {
    /// Set the dice count cap.
    pub fn with_max_dice_count(mut self, max: u32) -> Self {
        self.max_dice_count = max;
        self
    }

    /// Set the dice sides cap.
    pub fn with_max_dice_sides(mut self, max: u32) -> Self {
        self.max_dice_sides = max;
        self
    }

    /// Set the d20 critical values.
    pub fn with_criticals(mut self, success: u32, fail: u32) -> Self {
        self.critical_success = success;
        self.critical_fail = fail;
        self
    }

    /// Set the CoC critical values.
    pub fn with_coc_criticals(mut self, success: u32, fail: u32) -> Self {
        self.coc_critical_success = success;
        self.coc_critical_fail = fail;
        self
    }

    /// Set the CoC hard and extreme divisors.
    pub fn with_coc_divisors(mut self, hard: u32, extreme: u32) -> Self {
        self.coc_hard_divisor = hard;
        self.coc_extreme_divisor = extreme;
        self
    }

    /// Check the caps and divisors.
    pub fn validate(&self) -> DiceResult<()> {
        if self.max_dice_count < 1 {
            return Err(DiceError::InvalidConfig(
                "max_dice_count must be at least 1".into(),
            ));
        }
        if self.max_dice_sides < 2 {
            return Err(DiceError::InvalidConfig(
                "max_dice_sides must be at least 2".into(),
            ));
        }
        if self.coc_hard_divisor == 0 {
            return Err(DiceError::InvalidConfig(
                "coc_hard_divisor must be greater than 0".into(),
            ));
        }
        if self.coc_extreme_divisor == 0 {
            return Err(DiceError::InvalidConfig(
                "coc_extreme_divisor must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RollConfig::default();
        assert_eq!(cfg.max_dice_count, 50);
        assert_eq!(cfg.max_dice_sides, 1000);
        assert_eq!(cfg.critical_success, 20);
        assert_eq!(cfg.critical_fail, 1);
        assert_eq!(cfg.coc_critical_success, 1);
        assert_eq!(cfg.coc_critical_fail, 100);
        assert_eq!(cfg.coc_hard_divisor, 2);
        assert_eq!(cfg.coc_extreme_divisor, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = RollConfig::default()
            .with_max_dice_count(10)
            .with_max_dice_sides(100)
            .with_criticals(19, 2)
            .with_coc_criticals(5, 99)
            .with_coc_divisors(3, 4);
        assert_eq!(cfg.max_dice_count, 10);
        assert_eq!(cfg.max_dice_sides, 100);
        assert_eq!(cfg.critical_success, 19);
        assert_eq!(cfg.critical_fail, 2);
        assert_eq!(cfg.coc_critical_success, 5);
        assert_eq!(cfg.coc_critical_fail, 99);
        assert_eq!(cfg.coc_hard_divisor, 3);
        assert_eq!(cfg.coc_extreme_divisor, 4);
    }

    #[test]
    fn zero_divisor_rejected() {
        let cfg = RollConfig::default().with_coc_divisors(0, 5);
        assert!(matches!(cfg.validate(), Err(DiceError::InvalidConfig(_))));
        let cfg = RollConfig::default().with_coc_divisors(2, 0);
        assert!(matches!(cfg.validate(), Err(DiceError::InvalidConfig(_))));
    }

    #[test]
    fn zero_caps_rejected() {
        let cfg = RollConfig::default().with_max_dice_count(0);
        assert!(cfg.validate().is_err());
        let cfg = RollConfig::default().with_max_dice_sides(1);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: RollConfig = serde_json::from_str(r#"{"max_dice_count": 12}"#).unwrap();
        assert_eq!(cfg.max_dice_count, 12);
        assert_eq!(cfg.max_dice_sides, 1000);
        assert_eq!(cfg.coc_extreme_divisor, 5);
    }
}
