//! # Set Subcommand
//!
//! Applies one validated write to the configuration file. The value is
//! given as JSON (`'"fr"'`, `42`, `'["a", "b"]'`). The new tree is checked
//! against the whole schema before anything is written.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use flexconf_store::ConfigError;
use serde_json::Value;

use crate::source::Sources;

/// Arguments for the `flexconf set` subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Top-level parameter name.
    pub name: String,

    /// New value, as a JSON document.
    pub value: String,

    /// Validate the write without saving the file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run `flexconf set`. Returns 1 when the write is rejected by the schema.
pub fn run_set(args: &SetArgs, sources: &Sources, out: &mut impl Write) -> Result<u8> {
    let value: Value = serde_json::from_str(&args.value).with_context(|| {
        format!(
            "value for \"{}\" is not valid JSON (quote strings: '\"{}\"')",
            args.name, args.value
        )
    })?;

    let mut store = sources.load_store()?;
    match store.set_parameter_value(&args.name, value) {
        Ok(()) => {}
        Err(ConfigError::Validation(e)) => {
            writeln!(out, "{e}")?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    }

    if args.dry_run {
        store.discard_changes();
        writeln!(out, "OK (dry run, {} not modified)", sources.config.display())?;
        return Ok(0);
    }

    store
        .save_file()
        .with_context(|| format!("cannot save {}", sources.config.display()))?;
    writeln!(out, "OK")?;
    Ok(0)
}
