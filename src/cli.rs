//! Command-line interface: `clap`-derived argument parsing plus human and
//! JSON renderers shared by the `estimate` and `batch` subcommands.

use clap::{Parser, Subcommand};

use crate::data;
use crate::error::CrackTimeError;
use crate::orchestrator::{self, EstimateResult};

#[derive(Parser)]
#[command(name = "crack-time", version, about = "Estimate how long a password would take to crack")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate a single password.
    Estimate {
        password: String,
        #[arg(long, default_value = orchestrator::DEFAULT_ALGORITHM)]
        hash: String,
        #[arg(long, default_value = orchestrator::DEFAULT_HARDWARE_TIER)]
        hardware: String,
        #[arg(long)]
        json: bool,
    },
    /// Estimate many passwords in one run.
    Batch {
        passwords: Vec<String>,
        #[arg(long, default_value = orchestrator::DEFAULT_ALGORITHM)]
        hash: String,
        #[arg(long, default_value = orchestrator::DEFAULT_HARDWARE_TIER)]
        hardware: String,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<(), CrackTimeError> {
    check_data_files()?;
    match cli.command {
        Command::Estimate { password, hash, hardware, json } => {
            let result = orchestrator::estimate(&password, &hash, &hardware)?;
            if json {
                println!("{}", result.to_json());
            } else {
                println!("{}", render_human(&result));
            }
        }
        Command::Batch { passwords, hash, hardware, json } => {
            let results = orchestrator::estimate_batch(&passwords, &hash, &hardware)?;
            if json {
                let values: Vec<_> = results.iter().map(EstimateResult::to_json).collect();
                println!("{}", serde_json::Value::Array(values));
            } else {
                for result in &results {
                    println!("{}", render_human(result));
                }
            }
        }
    }
    Ok(())
}

/// Every data file this process expects is packaged with `include_str!`, so
/// this is normally a no-op; it exists so a startup misconfiguration (a
/// build with data assets stripped out, say) surfaces as a real error
/// instead of a silent empty wordlist.
fn check_data_files() -> Result<(), CrackTimeError> {
    if let Some(path) = data::validate_data_files().into_iter().next() {
        return Err(CrackTimeError::MissingDataFile { path });
    }
    Ok(())
}

fn render_human(result: &EstimateResult) -> String {
    format!(
        "password: {}\nguesses: {}\nwinning attack: {}\nalgorithm: {} on {} hardware\ncrack time: {}\nrating: {}",
        result.password,
        result.guess_number,
        result.winning_attack,
        result.algorithm,
        result.hardware_tier,
        result.crack_time_display,
        result.rating.label(),
    )
}
