//! Picking critical results out of a batch.
//!
//! Callers that keep a log of memorable rolls use this to find which entries
//! of a batch were criticals without re-deriving the rules themselves.

use serde::{Deserialize, Serialize};

use crate::coc::CocOutcome;
use crate::dice::RollOutcome;

/// Which kind of critical a roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriticalKind {
    /// A critical success.
    Success,
    /// A critical failure.
    Failure,
}

/// A critical result at a position in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalEvent {
    /// Zero-based position of the outcome in its batch.
    pub index: usize,
    /// The kind of critical.
    pub kind: CriticalKind,
}

/// An outcome that can carry critical flags.
pub trait Criticals {
    /// The outcome is a critical success.
    fn critical_success(&self) -> bool;
    /// The outcome is a critical failure.
    fn critical_failure(&self) -> bool;
}

impl Criticals for RollOutcome {
    fn critical_success(&self) -> bool {
        self.is_critical_success
    }

    fn critical_failure(&self) -> bool {
        self.is_critical_fail
    }
}

impl Criticals for CocOutcome {
    fn critical_success(&self) -> bool {
        self.is_critical_success
    }

    fn critical_failure(&self) -> bool {
        self.is_critical_fail
    }
}

/// List every critical in `outcomes`, in batch order.
///
/// A multi-die d20 roll can show both a natural 20 and a natural 1, so one
/// outcome may contribute two events (success first).
pub fn critical_events<T: Criticals>(outcomes: &[T]) -> Vec<CriticalEvent> {
    let mut events = Vec::new();
    for (index, outcome) in outcomes.iter().enumerate() {
        if outcome.critical_success() {
            events.push(CriticalEvent {
                index,
                kind: CriticalKind::Success,
            });
        }
        if outcome.critical_failure() {
            events.push(CriticalEvent {
                index,
                kind: CriticalKind::Failure,
            });
        }
    }
    events
}
