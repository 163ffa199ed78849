use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ProtParam CLI - Computes physicochemical properties of a protein from its amino-acid sequence: molecular weight, composition, extinction coefficient, and theoretical pI.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Protein sequence in one-letter amino-acid codes (case-insensitive;
    /// unrecognized characters are stripped). Read from stdin when neither
    /// this nor --input is given.
    #[arg(value_name = "SEQUENCE", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the sequence from a text file instead of the command line.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Use an alternative pKa model from a TOML file instead of the built-in
    /// table.
    #[arg(long, value_name = "PATH")]
    pub pka_model: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
