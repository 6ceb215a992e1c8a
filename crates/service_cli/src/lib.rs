//! Command line front end for deal underwriting.
//!
//! Loads a deal file, runs the analysis or price search and writes JSON to
//! stdout. Configuration is resolved from CLI arguments, `UNDERWRITE_*`
//! environment variables and an optional TOML file, in that order of
//! precedence.
//!
//! # Commands
//!
//! - `underwrite analyse --deal <file>` - Full deal metrics
//! - `underwrite optimise --deal <file>` - Maximum feasible purchase price
//! - `underwrite check` - Resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the model,
//! risk and optimiser layers. It is the only place inputs are validated and
//! the only place a tracing subscriber is installed.

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod deal;
pub mod error;

pub use error::{CliError, Result};
