//! # Validate Subcommand
//!
//! Loads the configuration file through the store and reports the first
//! schema violation, either as its message or as a JSON report.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use flexconf_schema::{ErrorKind, ValidationError};
use flexconf_store::ConfigError;
use serde::Serialize;

use crate::source::Sources;

/// Arguments for the `flexconf validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Print a JSON report instead of a one-line message.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of validating one configuration file.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

/// The first violation found, flattened for machine consumption.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub param: String,
    pub path: String,
    pub message: String,
}

impl From<&ValidationError> for ErrorReport {
    fn from(e: &ValidationError) -> Self {
        Self {
            kind: e.kind(),
            param: e.param().to_string(),
            path: e.path().to_string(),
            message: e.to_string(),
        }
    }
}

/// Run `flexconf validate`. Returns 0 when the file is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, sources: &Sources, out: &mut impl Write) -> Result<u8> {
    let mut store = sources.open_store()?;

    let report = match store.load_file(&sources.config) {
        Ok(()) => ValidationReport {
            valid: true,
            error: None,
        },
        Err(ConfigError::Validation(e)) => ValidationReport {
            valid: false,
            error: Some(ErrorReport::from(&e)),
        },
        Err(e) => {
            return Err(e).with_context(|| format!("cannot load {}", sources.config.display()))
        }
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        match &report.error {
            None => writeln!(out, "OK")?,
            Some(error) => writeln!(out, "{}", error.message)?,
        }
    }

    Ok(if report.valid { 0 } else { 1 })
}
