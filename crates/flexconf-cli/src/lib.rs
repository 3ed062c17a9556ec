//! # flexconf-cli: Configuration Command-Line Interface
//!
//! Thin clap front end over [`flexconf_store::ConfigStore`]. Every command
//! reads the schema named by `--schema` and the configuration file named by
//! `--config`.
//!
//! ## Subcommands
//!
//! - `validate`: check the configuration file against the schema
//! - `get`: print the effective value of a top-level parameter
//! - `label`: print the label of a top-level parameter
//! - `set`: validate a new value and write it back to the file
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here take parsed args and
//!   an output writer and return the process exit code.
//! - Validation rejections are reported on the output and map to exit
//!   code 1. Anything else (unreadable files, malformed schemas) is an
//!   `anyhow` error logged by the binary.

pub mod inspect;
pub mod set;
pub mod source;
pub mod validate;
