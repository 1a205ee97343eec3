use std::path::Path;

use colored::Colorize;
use td_core::format::roll_breakdown;
use td_core::{RollOutcome, Verdict};

pub fn run(
    path: &Path,
    group: &str,
    expression: &str,
    max_rolls: Option<u32>,
    seed: Option<u64>,
    json: bool,
    note: Option<&str>,
) -> Result<(), String> {
    let config = super::group_config(path, group)?;
    let mut rng = super::rng(seed);

    let outcomes = td_core::parse_and_evaluate(expression, max_rolls, &config, &mut rng)
        .map_err(|e| e.to_string())?;

    super::log_criticals(group, expression, &outcomes);

    if json {
        let out = serde_json::to_string_pretty(&outcomes).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let body = match outcomes.as_slice() {
        [single] => format!("  {}", render(single)),
        many => {
            let notation = many.first().map_or("", |o| o.expression.as_str());
            let mut lines = vec![format!("  {} rolls of {notation}", many.len())];
            for (i, outcome) in many.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, render(outcome)));
            }
            lines.join("\n")
        }
    };
    println!("{}", super::with_note(body, note));

    Ok(())
}

fn render(outcome: &RollOutcome) -> String {
    let mut line = format!("{}: {}", outcome.expression.bold(), roll_breakdown(outcome));
    if outcome.is_critical_success {
        line.push_str(&format!(" {}", "critical success".green().bold()));
    }
    if outcome.is_critical_fail {
        line.push_str(&format!(" {}", "critical failure".red().bold()));
    }
    match outcome.comparison {
        Verdict::Success => line.push_str(&format!(" {}", "success".green())),
        Verdict::Failure => line.push_str(&format!(" {}", "failure".red())),
        Verdict::NotApplicable => {}
    }
    line
}
