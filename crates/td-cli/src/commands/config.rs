use std::path::Path;

use td_core::RollConfig;

use crate::store::SettingsStore;

pub fn show(path: &Path, group: &str) -> Result<(), String> {
    let store = SettingsStore::open(path)?;
    let config = store.get(group);
    let out = serde_json::to_string_pretty(&*config).map_err(|e| e.to_string())?;
    println!("  Settings for '{group}':");
    println!("{out}");
    Ok(())
}

pub fn set(path: &Path, group: &str, key: &str, value: u32) -> Result<(), String> {
    let mut store = SettingsStore::open(path)?;
    let updated = with_setting(&store.get(group), key, value)?;
    store.replace(group, updated)?;
    store.save()?;
    println!("  Set {key} = {value} for '{group}'");
    Ok(())
}

pub fn reset(path: &Path, group: &str) -> Result<(), String> {
    let mut store = SettingsStore::open(path)?;
    if store.remove(group) {
        store.save()?;
        println!("  Reset '{group}' to defaults");
    } else {
        println!("  '{group}' already uses defaults");
    }
    Ok(())
}

/// Copy of `current` with one field changed.
fn with_setting(current: &RollConfig, key: &str, value: u32) -> Result<RollConfig, String> {
    let mut config = current.clone();
    let field = match key {
        "max_dice_count" => &mut config.max_dice_count,
        "max_dice_sides" => &mut config.max_dice_sides,
        "critical_success" => &mut config.critical_success,
        "critical_fail" => &mut config.critical_fail,
        "coc_critical_success" => &mut config.coc_critical_success,
        "coc_critical_fail" => &mut config.coc_critical_fail,
        "coc_hard_divisor" => &mut config.coc_hard_divisor,
        "coc_extreme_divisor" => &mut config.coc_extreme_divisor,
        other => return Err(format!("unknown setting: {other}")),
    };
    *field = value;
    Ok(config)
}
