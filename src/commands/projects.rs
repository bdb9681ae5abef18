use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};

use super::CommandContext;
use crate::core::ProjectDefinition;
use crate::formatting::{format_currency, format_number};

pub fn list_projects(context: &CommandContext) -> Result<()> {
    println!("{}", projects_table(&context.config.projects));
    Ok(())
}

pub(crate) fn projects_table(projects: &[ProjectDefinition]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).force_no_tty().set_header(vec![
        "Id",
        "Project",
        "Airdrop %",
        "Total Points",
        "Default FDV",
        "FDV Range",
    ]);
    for project in projects {
        table.add_row(vec![
            project.id.clone(),
            format!("{} ({})", project.name, project.ticker),
            format!("{}%", project.airdrop_percent),
            format_number(project.estimated_total_points, 0),
            format_currency(project.default_fdv),
            format!(
                "{} - {}",
                format_currency(crate::core::MIN_FDV),
                format_currency(project.slider_max)
            ),
        ]);
    }
    for column in table.column_iter_mut().skip(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}
