use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for strongdash
/// Summarize a Strong app CSV export from the terminal
#[derive(Parser)]
#[command(
    name = "strongdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workout dashboard for Strong app exports: workout days, best month, durations and personal records",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.strongdash/strongdash.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic messages on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpreadKind {
    /// Weight per month and exercise
    Weight,
    /// Workout duration per month and workout name
    Duration,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show key metrics and personal records of an export
    Report {
        /// Strong CSV export
        file: String,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Convert free-text durations ("1hr 3", "4m", "30") into minutes
    Duration {
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<String>,
    },

    /// Show the weight progression of each exercise
    Progress {
        /// Strong CSV export
        file: String,

        #[arg(long, short = 'e', help = "Only show this exercise (case-insensitive)")]
        exercise: Option<String>,
    },

    /// Show monthly spreads (min, quartiles, max)
    Spread {
        /// Strong CSV export
        file: String,

        #[arg(long, value_enum, default_value = "weight")]
        by: SpreadKind,
    },

    /// Export parsed sets (csv) or the full report (json)
    Export {
        /// Strong CSV export
        file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Show or validate the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration")]
        check: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}
