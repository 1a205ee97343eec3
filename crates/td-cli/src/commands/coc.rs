use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use td_core::{CocOutcome, CocSummary, resolve_coc};

pub fn run(
    path: &Path,
    group: &str,
    skill: u32,
    times: u32,
    seed: Option<u64>,
    json: bool,
    note: Option<&str>,
) -> Result<(), String> {
    let config = super::group_config(path, group)?;
    let mut rng = super::rng(seed);

    let outcomes = resolve_coc(skill, times, &config, &mut rng).map_err(|e| e.to_string())?;
    super::log_criticals(group, &format!("coc {skill}"), &outcomes);

    if json {
        let out = serde_json::to_string_pretty(&outcomes).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let body = match outcomes.as_slice() {
        [single] => format!(
            "  Skill {skill} | Roll {} | {}",
            single.roll,
            render_tier(single)
        ),
        many => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Roll", "Result"]);
            for (i, outcome) in many.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    outcome.roll.to_string(),
                    outcome.tier.to_string(),
                ]);
            }
            let summary = CocSummary::from_outcomes(many);
            format!("  Skill {skill} x{}\n{table}\n  {summary}", many.len())
        }
    };
    println!("{}", super::with_note(body, note));

    Ok(())
}

fn render_tier(outcome: &CocOutcome) -> String {
    let label = outcome.tier.label();
    if outcome.is_critical_success {
        label.green().bold().to_string()
    } else if outcome.is_critical_fail {
        label.red().bold().to_string()
    } else if outcome.is_success() {
        label.green().to_string()
    } else {
        label.yellow().to_string()
    }
}
