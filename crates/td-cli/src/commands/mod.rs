pub mod classify;
pub mod coc;
pub mod config;
pub mod roll;

use std::path::Path;
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use td_core::{CriticalKind, Criticals, RollConfig, critical_events};

use crate::store::SettingsStore;

/// Load the settings snapshot for `group`.
fn group_config(path: &Path, group: &str) -> Result<Arc<RollConfig>, String> {
    let store = SettingsStore::open(path)?;
    let config = store.get(group);
    tracing::debug!(group, ?config, "using group settings");
    Ok(config)
}

/// A seeded RNG when a seed is given, otherwise one seeded from the OS.
fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Log every critical result in `outcomes` and return how many there were.
fn log_criticals<T: Criticals>(group: &str, source: &str, outcomes: &[T]) -> usize {
    let events = critical_events(outcomes);
    for event in &events {
        let kind = match event.kind {
            CriticalKind::Success => "success",
            CriticalKind::Failure => "failure",
        };
        tracing::info!(group, source, index = event.index + 1, kind, "critical roll");
    }
    events.len()
}

/// Append the user's note, if any, below the rendered result.
fn with_note(body: String, note: Option<&str>) -> String {
    match note.map(str::trim) {
        Some(text) if !text.is_empty() => format!("{body}\n  note: {text}"),
        _ => body,
    }
}
