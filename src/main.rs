use airdrop_manager::cli::{Cli, Commands};
use airdrop_manager::commands::{self, CommandContext, EvaluateConfig, PortfolioConfig};
use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    airdrop_manager::observability::init_logging(cli.verbosity);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        command => {
            let context = build_context(cli.config.as_deref(), cli.plain)?;
            run_command(&context, command)
        }
    }
}

// Side effect: resolve configuration from disk (I/O at edges)
fn build_context(config_path: Option<&Path>, plain: bool) -> Result<CommandContext> {
    let config = airdrop_manager::config::load_config(config_path)?;
    Ok(CommandContext::new(config, plain))
}

fn run_command(context: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Projects => commands::list_projects(context),
        Commands::Evaluate {
            project,
            points,
            expenses,
            fdv,
            airdrop_percent,
            total_points,
            format,
        } => commands::evaluate_project(
            context,
            EvaluateConfig {
                project,
                points,
                expenses,
                fdv,
                airdrop_percent,
                total_points,
                format,
            },
        ),
        Commands::Portfolio {
            set,
            format,
            output,
        } => commands::report_portfolio(
            context,
            PortfolioConfig {
                assignments: set,
                format,
                output,
            },
        ),
        Commands::Session { format } => commands::run_session(context, format),
        Commands::Init { force } => commands::init_config(force),
    }
}
