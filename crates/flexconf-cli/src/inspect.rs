//! # Get and Label Subcommands
//!
//! Read-only queries on a loaded configuration.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use crate::source::Sources;

/// Arguments for the `flexconf get` subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Top-level parameter name.
    pub name: String,
}

/// Arguments for the `flexconf label` subcommand.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Top-level parameter name.
    pub name: String,
}

/// Print the effective value of a parameter as JSON. Unset parameters
/// print their default, or `null`.
pub fn run_get(args: &GetArgs, sources: &Sources, out: &mut impl Write) -> Result<u8> {
    let store = sources.load_store()?;
    let value = store.parameter_value(&args.name)?;
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(0)
}

/// Print the label of a parameter. Prints nothing when it has none.
pub fn run_label(args: &LabelArgs, sources: &Sources, out: &mut impl Write) -> Result<u8> {
    let store = sources.load_store()?;
    if let Some(label) = store.parameter_label(&args.name)? {
        writeln!(out, "{label}")?;
    }
    Ok(0)
}
