use std::path::Path;

use td_core::{Bound, classify_coc};

pub fn run(path: &Path, group: &str, roll: u32, skill: u32) -> Result<(), String> {
    Bound::CocRoll
        .check(u64::from(roll), 1, 100)
        .map_err(|e| e.to_string())?;
    Bound::SkillValue
        .check(u64::from(skill), 1, 100)
        .map_err(|e| e.to_string())?;

    let config = super::group_config(path, group)?;
    let tier = classify_coc(roll, skill, &config);
    println!(
        "  {roll}/{skill}: {tier} ({})",
        if tier.is_success() { "pass" } else { "fail" }
    );
    Ok(())
}
