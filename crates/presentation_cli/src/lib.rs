//! GeoNames CLI library
//!
//! Argument parsing, configuration layering and subcommand execution for the
//! `geonames-cli` binary.

pub mod cli;
pub mod commands;
pub mod settings;

pub use cli::{Cli, log_filter_from_verbosity};
pub use commands::{Command, run};
pub use settings::Overrides;
