mod cli;
mod error;
mod logging;
mod report;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::report::Report;
use anyhow::Context;
use clap::Parser;
use protparam::core::params::pk_model::PkModel;
use protparam::workflows::analyze::{self, AnalysisConfig};
use std::io::{BufRead, IsTerminal, Write};
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ProtParam CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = build_config(&cli)?;
    let raw = read_sequence(&cli)?;

    let analysis = analyze::run(&raw, &config)?;
    print!("{}", Report(&analysis));

    Ok(())
}

fn build_config(cli: &Cli) -> Result<AnalysisConfig> {
    let pk_model = match &cli.pka_model {
        Some(path) => {
            info!("Loading pKa model from {:?}.", path);
            PkModel::load(path).map_err(|e| CliError::PkModel {
                path: path.clone(),
                source: e,
            })?
        }
        None => PkModel::default(),
    };
    Ok(AnalysisConfig { pk_model })
}

fn read_sequence(cli: &Cli) -> Result<String> {
    if let Some(sequence) = &cli.sequence {
        return Ok(sequence.clone());
    }

    if let Some(path) = &cli.input {
        info!("Reading sequence from {:?}.", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sequence file '{}'", path.display()))?;
        return Ok(content);
    }

    // Interactive fallback: one line from stdin, with a prompt when a human
    // is typing.
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        print!("Enter the protein sequence (single-letter amino acid codes): ");
        std::io::stdout().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line)
}
