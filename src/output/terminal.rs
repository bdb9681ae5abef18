use std::io::Write;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use super::OutputWriter;
use crate::formatting::{
    format_currency, format_number, format_per_point, format_roi, format_signed_currency,
    formatter_for, FormattingConfig, OutputFormatter,
};
use crate::session::{ProjectView, Snapshot};

/// Human-readable tables: the portfolio summary followed by one row per card.
pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatting,
            formatter: formatter_for(formatting),
        }
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.formatting.color.should_use_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn write_summary(&mut self, snapshot: &Snapshot) -> Result<()> {
        let portfolio = &snapshot.portfolio;
        let mut table = self.new_table();
        table.set_header(vec!["Total Spend", "Proj. Value", "Net Profit", "Total ROI"]);
        table.add_row(vec![
            Cell::new(format!("${}", format_number(portfolio.total_expenses, 0))),
            Cell::new(format!("${}", format_number(portfolio.total_value, 0))),
            signed_cell(
                format_signed_currency(portfolio.net_profit),
                portfolio.net_profit >= 0.0,
            ),
            signed_cell(format_roi(portfolio.total_roi), portfolio.total_roi >= 0.0),
        ]);

        writeln!(self.writer, "{}", self.formatter.header("Airdrop Portfolio"))?;
        writeln!(self.writer, "{}", table)?;
        Ok(())
    }

    fn write_projects(&mut self, snapshot: &Snapshot) -> Result<()> {
        let mut table = self.new_table();
        table.set_header(vec![
            "Project",
            "Points",
            "Expenses",
            "Target FDV",
            "Value",
            "Profit",
            "ROI",
            "Cost / Point",
            "Price / Point",
            "Break Even FDV",
        ]);
        for view in &snapshot.projects {
            table.add_row(project_row(view));
        }
        for column in table.column_iter_mut().skip(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }

        writeln!(self.writer, "{}", table)?;

        let overridden: Vec<_> = snapshot
            .projects
            .iter()
            .filter(|view| has_overrides(view))
            .map(|view| view.definition.name.as_str())
            .collect();
        if !overridden.is_empty() {
            let note = format!(
                "Custom assumptions on {}; portfolio totals use project defaults.",
                overridden.join(", ")
            );
            writeln!(self.writer, "{}", self.formatter.dim(&note))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.write_summary(snapshot)?;
        self.write_projects(snapshot)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn project_row(view: &ProjectView) -> Vec<Cell> {
    let metrics = &view.metrics;
    vec![
        Cell::new(format!("{} ({})", view.definition.name, view.definition.ticker)),
        Cell::new(format_number(view.state.my_points(), 0)),
        Cell::new(format!("${}", format_number(view.state.my_expenses(), 0))),
        Cell::new(format_currency(view.state.fdv)),
        Cell::new(format!("${}", format_number(metrics.my_value, 0))),
        signed_cell(
            format_signed_currency(metrics.net_profit),
            metrics.net_profit >= 0.0,
        ),
        signed_cell(format_roi(metrics.roi), metrics.roi >= 0.0),
        Cell::new(format_per_point(metrics.cost_per_point)),
        Cell::new(format_per_point(metrics.value_per_point)),
        signed_cell(format_currency(metrics.break_even_fdv), view.profitable),
    ]
}

fn signed_cell(text: String, good: bool) -> Cell {
    Cell::new(text).fg(if good { Color::Green } else { Color::Red })
}

fn has_overrides(view: &ProjectView) -> bool {
    view.assumptions != view.definition.default_assumptions()
}
