//! Command-line dice roller for tabletop RPG groups.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "td",
    about = "Dice notation and Call of Cthulhu 7e roller",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file holding per-group configuration
    #[arg(long, global = true, env = "TD_CONFIG", default_value = "td.json")]
    config: PathBuf,

    /// Group whose settings apply
    #[arg(short, long, global = true, default_value = "default")]
    group: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation, e.g. `2d6+1`, `d20>=15`, `3 d6`
    Roll {
        /// The expression (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,

        /// Cap on the leading repeat count (default: the group's dice count cap)
        #[arg(long)]
        max_rolls: Option<u32>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Free-text note shown under the result
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Roll d100 against a skill under CoC 7e rules
    Coc {
        /// Skill value (1-100)
        skill: u32,

        /// Number of rolls (1-10)
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Free-text note shown under the result
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Classify a known d100 roll against a skill
    Classify {
        /// The d100 result
        roll: u32,

        /// Skill value
        skill: u32,
    },

    /// Show or change a group's settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the group's settings
    Show,

    /// Change one setting
    Set {
        /// Setting name, e.g. max_dice_count, coc_hard_divisor
        key: String,

        /// New value
        value: u32,
    },

    /// Restore the defaults for the group
    Reset,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            expression,
            max_rolls,
            seed,
            json,
            note,
        } => commands::roll::run(
            &cli.config,
            &cli.group,
            &expression.join(" "),
            max_rolls,
            seed,
            json,
            note.as_deref(),
        ),
        Commands::Coc {
            skill,
            times,
            seed,
            json,
            note,
        } => commands::coc::run(
            &cli.config,
            &cli.group,
            skill,
            times,
            seed,
            json,
            note.as_deref(),
        ),
        Commands::Classify { roll, skill } => {
            commands::classify::run(&cli.config, &cli.group, roll, skill)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&cli.config, &cli.group),
            ConfigAction::Set { key, value } => {
                commands::config::set(&cli.config, &cli.group, &key, value)
            }
            ConfigAction::Reset => commands::config::reset(&cli.config, &cli.group),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
