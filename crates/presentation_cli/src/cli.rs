//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::{commands::Command, settings::Overrides};

/// GeoNames CLI
#[derive(Debug, Parser)]
#[command(name = "geonames-cli")]
#[command(author, version, about = "GeoNames web service lookups", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./geonames.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// GeoNames account name, overrides GEONAMES_USER
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Web service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Values given on the command line, applied over file and environment
    pub fn overrides(&self) -> Overrides {
        Overrides {
            username: self.username.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(255), "trace");
    }
}
