//! Generic dice engine: notation, parsing, and rolling.
//!
//! Notation follows the familiar `[count]d<sides>[+|-modifier][ op threshold]`
//! form, e.g. `2d6+1`, `d20>=15`. A leading repeat count such as `3 d6`
//! rolls the same expression several times independently.

/// Tokenizer for dice notation.
pub mod lexer;
pub mod parser;
pub mod roll;

pub use parser::{RollRequest, parse, parse_dice};
pub use roll::{RollOutcome, Verdict};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator in a dice check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// `>=`
    Ge,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `<`
    Lt,
}

impl CompareOp {
    /// Apply the operator to `lhs <op> rhs`.
    pub fn test(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Ge => lhs >= rhs,
            Self::Gt => lhs > rhs,
            Self::Le => lhs <= rhs,
            Self::Lt => lhs < rhs,
        }
    }

    /// The operator as written in notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ge => ">=",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Lt => "<",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A comparison of a roll total against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// The operator.
    pub op: CompareOp,
    /// The value the total is compared against.
    pub threshold: i64,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.threshold)
    }
}

/// A validated single-roll specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    /// Number of dice summed into the roll.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Flat modifier added to the sum.
    pub modifier: i64,
    /// Optional check against the total.
    pub comparison: Option<Comparison>,
}

impl DiceSpec {
    /// Create a spec without a comparison.
    pub fn new(count: u32, sides: u32, modifier: i64) -> Self {
        Self {
            count,
            sides,
            modifier,
            comparison: None,
        }
    }

    /// Attach a comparison.
    pub fn with_comparison(mut self, op: CompareOp, threshold: i64) -> Self {
        self.comparison = Some(Comparison { op, threshold });
        self
    }

    /// Canonical notation including the comparison clause, if any.
    pub fn notation_with_comparison(&self) -> String {
        match &self.comparison {
            Some(cmp) => format!("{self}{cmp}"),
            None => self.to_string(),
        }
    }
}

/// Canonical notation without the comparison, e.g. `2d6+1`, `1d20`, `3d8-2`.
impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_op_test() {
        assert!(CompareOp::Ge.test(15, 15));
        assert!(!CompareOp::Gt.test(15, 15));
        assert!(CompareOp::Le.test(3, 15));
        assert!(!CompareOp::Lt.test(15, 15));
    }

    #[test]
    fn spec_display() {
        assert_eq!(DiceSpec::new(2, 6, 1).to_string(), "2d6+1");
        assert_eq!(DiceSpec::new(1, 20, 0).to_string(), "1d20");
        assert_eq!(DiceSpec::new(3, 8, -2).to_string(), "3d8-2");
    }

    #[test]
    fn spec_display_omits_comparison() {
        let spec = DiceSpec::new(1, 20, 0).with_comparison(CompareOp::Ge, 15);
        assert_eq!(spec.to_string(), "1d20");
        assert_eq!(spec.notation_with_comparison(), "1d20>=15");
    }
}
