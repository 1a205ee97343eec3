//! Error types for the dice engine.

use std::fmt;

/// A numeric bound that an input can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Number of dice summed into one roll.
    DiceCount,
    /// Number of sides on each die.
    DiceSides,
    /// Magnitude of the flat modifier.
    Modifier,
    /// Number of independent repeats in a multi-roll expression.
    RollCount,
    /// CoC skill value.
    SkillValue,
    /// A known d100 result being classified.
    CocRoll,
    /// Number of CoC rolls in one batch.
    CocTimes,
}

impl Bound {
    /// Fail with [`DiceError::OutOfRange`] unless `min <= value <= max`.
    pub fn check(self, value: u64, min: u64, max: u64) -> DiceResult<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(DiceError::OutOfRange {
                bound: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiceCount => write!(f, "dice count"),
            Self::DiceSides => write!(f, "dice sides"),
            Self::Modifier => write!(f, "modifier"),
            Self::RollCount => write!(f, "roll count"),
            Self::SkillValue => write!(f, "skill value"),
            Self::CocRoll => write!(f, "roll"),
            Self::CocTimes => write!(f, "roll times"),
        }
    }
}

/// Errors that can occur while parsing or resolving a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression does not match the dice grammar.
    #[error("invalid dice expression: {0}")]
    InvalidExpression(String),

    /// A numeric value lies outside its configured bounds.
    #[error("{bound} {value} is out of range ({min}..={max})")]
    OutOfRange {
        /// Which bound was violated.
        bound: Bound,
        /// The offending value.
        value: u64,
        /// Smallest accepted value.
        min: u64,
        /// Largest accepted value.
        max: u64,
    },

    /// The roll configuration breaks one of its invariants.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
