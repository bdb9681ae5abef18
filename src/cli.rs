use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "airdrop-manager")]
#[command(about = "Airdrop points portfolio tracker and valuation simulator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project table to use instead of discovering .airdrop.toml
    #[arg(long, global = true, env = "AIRDROP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tracked projects and their default assumptions
    Projects,

    /// Evaluate a single project card
    Evaluate {
        /// Project id
        #[arg(short, long)]
        project: String,

        /// Points earned (thousands separators allowed)
        #[arg(long, default_value = "")]
        points: String,

        /// Money spent earning the points
        #[arg(long, default_value = "")]
        expenses: String,

        /// Target fully diluted valuation (defaults to the project's)
        #[arg(long)]
        fdv: Option<String>,

        /// Override the share of FDV allocated to the airdrop (0-100)
        #[arg(long)]
        airdrop_percent: Option<String>,

        /// Override the estimated total points
        #[arg(long)]
        total_points: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Apply edits in order and report every card plus the portfolio totals
    Portfolio {
        /// Edit as PROJECT.FIELD=VALUE (repeatable, applied in order)
        #[arg(short, long = "set", value_name = "PROJECT.FIELD=VALUE")]
        set: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read edit commands from stdin and re-render after each one
    Session {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a starter .airdrop.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
