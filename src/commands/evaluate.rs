use anyhow::Result;
use tracing::info;

use super::CommandContext;
use crate::output::{create_writer, OutputFormat};
use crate::portfolio::{FieldValue, ProjectEdit, ProjectField};
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub project: String,
    pub points: String,
    pub expenses: String,
    pub fdv: Option<String>,
    pub airdrop_percent: Option<String>,
    pub total_points: Option<String>,
    pub format: Option<OutputFormat>,
}

impl EvaluateConfig {
    /// The edits this invocation stands for, in application order.
    pub fn edits(&self) -> Vec<ProjectEdit> {
        let text = |field, value: &str| {
            ProjectEdit::new(&self.project, field, FieldValue::Text(value.to_string()))
        };
        let mut edits = vec![
            text(ProjectField::Points, &self.points),
            text(ProjectField::Expenses, &self.expenses),
        ];
        let optional = [
            (ProjectField::Fdv, &self.fdv),
            (ProjectField::AirdropPercent, &self.airdrop_percent),
            (ProjectField::TotalPoints, &self.total_points),
        ];
        edits.extend(
            optional
                .into_iter()
                .filter_map(|(field, value)| value.as_deref().map(|v| text(field, v))),
        );
        edits
    }
}

/// Build a session restricted to one project and render its card.
pub fn evaluate_project(context: &CommandContext, config: EvaluateConfig) -> Result<()> {
    let definition = context
        .config
        .project(&config.project)
        .cloned()
        .ok_or_else(|| crate::core::Error::UnknownProject(config.project.clone()))?;

    let mut session = Session::new(vec![definition]);
    for edit in config.edits() {
        session.apply(edit)?;
    }
    info!(project = %config.project, "evaluated project card");

    let format = context.output_format(config.format);
    let mut writer = create_writer(format, context.formatting, Box::new(std::io::stdout()));
    writer.write_snapshot(&session.snapshot())
}
