// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod portfolio;
pub mod session;
pub mod valuation;

// Re-export commonly used types
pub use crate::core::{
    parse_amount, Error, PortfolioMetrics, ProjectAssumptions, ProjectDefinition,
    ProjectMetrics, Result, UserProjectState, MIN_FDV,
};

pub use crate::config::{default_projects, load_config, AirdropConfig};

pub use crate::portfolio::{aggregate, FieldValue, PortfolioState, ProjectEdit, ProjectField};

pub use crate::session::{ProjectView, Renderer, Session, SessionCommand, Snapshot};

pub use crate::valuation::{evaluate, evaluate_amounts};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};
