//! Command-line front end for the state registry.
//!
//! Prints states, senatorial districts and LGAs as plain text, or as JSON
//! with `--json`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ng_states::{Registry, StateRecord};

#[derive(Parser, Debug)]
#[command(name = "ng-states")]
#[command(about = "Look up Nigerian states, senatorial districts and LGAs")]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every state with its senatorial districts and LGAs
    All,
    /// State names only
    States,
    /// Senatorial districts of a state
    Districts {
        /// State name, case-insensitive ("abuja" and "fct" also work)
        state: String,
    },
    /// Full record of a state, including its LGAs
    Lgas {
        /// State name, case-insensitive ("abuja" and "fct" also work)
        state: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only data
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!("Running {:?}", args.command);

    let output = render(&args.command, args.json)?;
    print!("{}", output);

    Ok(())
}

/// Render a command's output as text, or as pretty JSON when `json` is set.
///
/// Lookup failures come back as errors so the process exits non-zero.
fn render(command: &Command, json: bool) -> Result<String> {
    let registry = Registry::embedded();

    match command {
        Command::All => {
            let records = registry.list_all();
            if json {
                to_json(&records)
            } else {
                Ok(records
                    .iter()
                    .map(|record| format!("{}\n", format_record(record)))
                    .collect())
            }
        }
        Command::States => {
            let names = registry.list_names();
            if json {
                to_json(&names)
            } else {
                Ok(lines(&names))
            }
        }
        Command::Districts { state } => {
            let districts = registry
                .districts_of(state)
                .context("Senatorial district lookup failed")?;
            if json {
                to_json(&districts)
            } else {
                Ok(lines(districts))
            }
        }
        Command::Lgas { state } => {
            let record = registry
                .record_of(state)
                .context("LGA lookup failed")?;
            if json {
                to_json(record)
            } else {
                Ok(format_record(record))
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    Ok(format!("{}\n", json))
}

fn lines<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("{}\n", item.as_ref()))
        .collect()
}

fn format_record(record: &StateRecord) -> String {
    format!(
        "{}\n  Senatorial districts: {}\n  LGAs ({}): {}\n",
        record.name,
        record.senatorial_districts.join(", "),
        record.lgas.len(),
        record.lgas.join(", ")
    )
}
