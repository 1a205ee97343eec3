//! Per-group settings persisted as JSON.
//!
//! Entries are handed out as `Arc` snapshots and replaced wholesale, so a
//! roll holding a snapshot never sees a half-applied update.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use td_core::RollConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    groups: BTreeMap<String, RollConfig>,
}

/// Group name to roll configuration, backed by a JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    groups: BTreeMap<String, Arc<RollConfig>>,
}

impl SettingsStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, String> {
        let file = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str::<SettingsFile>(&content)
                .map_err(|e| format!("cannot parse {}: {e}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            SettingsFile::default()
        };

        let groups = file
            .groups
            .into_iter()
            .map(|(name, config)| (name, Arc::new(config)))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            groups,
        })
    }

    /// Snapshot of a group's config, or the defaults if it has none.
    pub fn get(&self, group: &str) -> Arc<RollConfig> {
        self.groups
            .get(group)
            .cloned()
            .unwrap_or_else(|| Arc::new(RollConfig::default()))
    }

    /// Replace a group's config after validating it.
    pub fn replace(&mut self, group: &str, config: RollConfig) -> Result<(), String> {
        config.validate().map_err(|e| e.to_string())?;
        self.groups.insert(group.to_string(), Arc::new(config));
        Ok(())
    }

    /// Drop a group's config. Returns whether it existed.
    pub fn remove(&mut self, group: &str) -> bool {
        self.groups.remove(group).is_some()
    }

    /// Write the store back to its file.
    pub fn save(&self) -> Result<(), String> {
        let file = SettingsFile {
            groups: self
                .groups
                .iter()
                .map(|(name, config)| (name.clone(), RollConfig::clone(config)))
                .collect(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(|e| e.to_string())?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("cannot write {}: {e}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), groups = self.groups.len(), "saved settings");
        Ok(())
    }
}
