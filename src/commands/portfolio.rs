use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::CommandContext;
use crate::output::{create_writer, write_snapshot_file, OutputFormat};
use crate::portfolio::ProjectEdit;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    pub assignments: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Parse every `PROJECT.FIELD=VALUE` assignment before touching state,
/// so a typo late in the list does not leave a half-applied portfolio.
pub fn parse_assignments(assignments: &[String]) -> Result<Vec<ProjectEdit>> {
    assignments
        .iter()
        .map(|raw| {
            ProjectEdit::parse_assignment(raw).with_context(|| format!("Invalid --set '{}'", raw))
        })
        .collect()
}

pub fn build_session(context: &CommandContext, edits: Vec<ProjectEdit>) -> Result<Session> {
    let mut session = Session::new(context.config.projects.clone());
    for edit in edits {
        debug!(project = %edit.project_id, field = %edit.field, "applying edit");
        session.apply(edit)?;
    }
    Ok(session)
}

pub fn report_portfolio(context: &CommandContext, config: PortfolioConfig) -> Result<()> {
    let edits = parse_assignments(&config.assignments)?;
    let session = build_session(context, edits)?;
    let snapshot = session.snapshot();
    info!(
        projects = snapshot.projects.len(),
        total_value = snapshot.portfolio.total_value,
        "portfolio computed"
    );

    let format = context.output_format(config.format);
    match config.output {
        Some(path) => write_snapshot_file(&path, &snapshot, format),
        None => {
            let mut writer =
                create_writer(format, context.formatting, Box::new(std::io::stdout()));
            writer.write_snapshot(&snapshot)
        }
    }
}
