//! CLI argument definitions using clap
//!
//! Commands:
//! - ruledesk serve --config <path>
//! - ruledesk list --config <path> [--filter "Field=Value"]...
//! - ruledesk options <field> --config <path>
//! - ruledesk export --config <path> [--output <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ruledesk - administration core for regulatory rule records
#[derive(Parser, Debug)]
#[command(name = "ruledesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the rules table API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./ruledesk.json")]
        config: PathBuf,
    },

    /// Print the (optionally filtered) rule list as JSON lines
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./ruledesk.json")]
        config: PathBuf,

        /// Constraint of the form "Field=Value"; repeat to add values
        /// (repeats on one field OR together, fields AND together)
        #[arg(long = "filter", value_name = "FIELD=VALUE")]
        filters: Vec<String>,
    },

    /// Print distinct values observed for a field
    Options {
        /// Field name, e.g. "Drug Schedule"
        field: String,

        /// Path to configuration file
        #[arg(long, default_value = "./ruledesk.json")]
        config: PathBuf,
    },

    /// Write the CSV export to disk
    Export {
        /// Path to configuration file
        #[arg(long, default_value = "./ruledesk.json")]
        config: PathBuf,

        /// Output path (defaults to ./regulatory-rules.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from([
            "ruledesk",
            "list",
            "--filter",
            "MD State=NY",
            "--filter",
            "MD State=CA",
        ]);
        match cli.command {
            Command::List { filters, .. } => {
                assert_eq!(filters, ["MD State=NY", "MD State=CA"]);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_options_field() {
        let cli = Cli::parse_from(["ruledesk", "options", "Drug Schedule"]);
        match cli.command {
            Command::Options { field, .. } => assert_eq!(field, "Drug Schedule"),
            other => panic!("expected options, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["ruledesk", "serve"]);
        match cli.command {
            Command::Serve { config } => {
                assert_eq!(config, PathBuf::from("./ruledesk.json"));
            }
            other => panic!("expected serve, got {:?}", other),
        }
    }
}
