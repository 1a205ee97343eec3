//! Aggregate statistics over a CoC batch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coc::CocOutcome;

/// Counts over a batch of CoC outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocSummary {
    /// Number of rolls.
    pub total: usize,
    /// Rolls whose tier counts as a success.
    pub successes: usize,
    /// Critical successes.
    pub critical_successes: usize,
    /// Critical failures.
    pub critical_failures: usize,
}

impl CocSummary {
    /// Tally a batch.
    pub fn from_outcomes(outcomes: &[CocOutcome]) -> Self {
        Self {
            total: outcomes.len(),
            successes: outcomes.iter().filter(|o| o.is_success()).count(),
            critical_successes: outcomes.iter().filter(|o| o.is_critical_success).count(),
            critical_failures: outcomes.iter().filter(|o| o.is_critical_fail).count(),
        }
    }

    /// Successes as a percentage of the batch, 0 for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.successes as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for CocSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} succeeded ({:.1}%), critical successes: {}, critical failures: {}",
            self.successes,
            self.total,
            self.success_rate(),
            self.critical_successes,
            self.critical_failures
        )
    }
}
