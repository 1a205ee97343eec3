//! Plain-text rendering of results.
//!
//! Decoration (emoji, colours, localisation) is left to the caller.

use crate::coc::{CocOutcome, SuccessTier};
use crate::dice::RollOutcome;

/// Default label for a tier.
pub fn tier_label(tier: SuccessTier) -> &'static str {
    tier.label()
}

/// `"3 + 4 = 7"`, or `"(3 + 4) + 1 = 8"` when a modifier applies.
pub fn roll_breakdown(outcome: &RollOutcome) -> String {
    let rolls = outcome
        .rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" + ");

    match outcome.modifier {
        0 => format!("{rolls} = {}", outcome.total),
        m if m > 0 => format!("({rolls}) + {m} = {}", outcome.total),
        m => format!("({rolls}) - {} = {}", m.unsigned_abs(), outcome.total),
    }
}

/// Numbered list of a dice batch, one line per roll.
pub fn roll_listing(outcomes: &[RollOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}. {o}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of a CoC batch, one line per roll.
pub fn coc_listing(outcomes: &[CocOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}. {} -> {}", i + 1, o.roll, o.tier))
        .collect::<Vec<_>>()
        .join("\n")
}
