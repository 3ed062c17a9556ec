//! # flexconf CLI entry point
//!
//! Parses command-line arguments, initialises logging from the `-v` count,
//! and dispatches to the subcommand handlers. Logs go to stderr so command
//! output on stdout stays machine-readable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flexconf_cli::inspect::{run_get, run_label, GetArgs, LabelArgs};
use flexconf_cli::set::{run_set, SetArgs};
use flexconf_cli::source::Sources;
use flexconf_cli::validate::{run_validate, ValidateArgs};

/// flexconf: schema-validated configuration files.
///
/// Every command reads a schema declaration (JSON, or YAML by extension)
/// and a JSON configuration file validated against it.
#[derive(Parser, Debug)]
#[command(name = "flexconf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Schema declaration file.
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the configuration file against the schema.
    Validate(ValidateArgs),

    /// Print the effective value of a top-level parameter.
    Get(GetArgs),

    /// Print the label of a top-level parameter.
    Label(LabelArgs),

    /// Validate a new value for a top-level parameter and save it.
    Set(SetArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Sources::from_flags(cli.schema, cli.config).and_then(|sources| {
        let mut out = std::io::stdout().lock();
        match &cli.command {
            Commands::Validate(args) => run_validate(args, &sources, &mut out),
            Commands::Get(args) => run_get(args, &sources, &mut out),
            Commands::Label(args) => run_label(args, &sources, &mut out),
            Commands::Set(args) => run_set(args, &sources, &mut out),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
