//! CLI command implementations.
//!
//! Available commands:
//! - **projects**: List the tracked projects and their default assumptions
//! - **evaluate**: Evaluate a single project card
//! - **portfolio**: Apply edits in order and report every card plus totals
//! - **session**: Interactive line-oriented editing on stdin
//! - **init**: Write a starter configuration file

pub mod context;
pub mod evaluate;
pub mod init;
pub mod interactive;
pub mod portfolio;
pub mod projects;

pub use context::CommandContext;
pub use evaluate::{evaluate_project, EvaluateConfig};
pub use init::init_config;
pub use interactive::run_session;
pub use portfolio::{report_portfolio, PortfolioConfig};
pub use projects::list_projects;
