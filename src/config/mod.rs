pub mod toml_config;

pub use toml_config::ToolConfig;

#[cfg(feature = "cli")]
use crate::utils::dates::date_arg;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "alpha-utils")]
#[command(about = "Small date, list and name helpers")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Subtract a number of days from a YYYY-MM-DD date
    SubtractDays {
        #[arg(value_parser = date_arg)]
        date: String,
        /// Negative values move the date forward
        #[arg(allow_hyphen_values = true)]
        ndays: i64,
    },

    /// Check that a string is a YYYY-MM-DD date
    ValidDate { date: String },

    /// Check that a string is an identifier-like name
    ValidName { name: String },

    /// Remove items from a comma separated list
    RemoveItems {
        #[arg(long, value_delimiter = ',')]
        remove: Vec<String>,
        #[arg(value_delimiter = ',')]
        items: Vec<String>,
    },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SubtractDays { .. } => "subtract-days",
            Command::ValidDate { .. } => "valid-date",
            Command::ValidName { .. } => "valid-name",
            Command::RemoveItems { .. } => "remove-items",
        }
    }
}
