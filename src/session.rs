//! Top-level coordinator for an editing session.
//!
//! A [`Session`] owns the project table, the shared [`PortfolioState`] and
//! each card's local [`ProjectAssumptions`]. Every edit is applied and then
//! the registered renderers are called synchronously with a freshly
//! computed [`Snapshot`]. Nothing is cached between edits.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::core::{
    Error, PortfolioMetrics, ProjectAssumptions, ProjectDefinition, ProjectMetrics, Result,
    UserProjectState,
};
use crate::portfolio::{aggregate, FieldValue, PortfolioState, ProjectEdit, ProjectField};
use crate::valuation::evaluate;

/// Receives the latest metrics after every state change.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot),
{
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// One project card as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub definition: ProjectDefinition,
    pub assumptions: ProjectAssumptions,
    pub state: UserProjectState,
    pub metrics: ProjectMetrics,
    /// Break-even is at or below the current valuation.
    pub profitable: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub projects: Vec<ProjectView>,
    pub portfolio: PortfolioMetrics,
}

impl Snapshot {
    pub fn project(&self, project_id: &str) -> Option<&ProjectView> {
        self.projects.iter().find(|p| p.definition.id == project_id)
    }
}

pub struct Session {
    definitions: Vec<ProjectDefinition>,
    state: PortfolioState,
    assumptions: BTreeMap<String, ProjectAssumptions>,
    renderers: Vec<Box<dyn Renderer>>,
}

impl Session {
    pub fn new(definitions: Vec<ProjectDefinition>) -> Self {
        let state = PortfolioState::seeded(&definitions);
        let assumptions = definitions
            .iter()
            .map(|def| (def.id.clone(), def.default_assumptions()))
            .collect();
        Self {
            definitions,
            state,
            assumptions,
            renderers: Vec::new(),
        }
    }

    pub fn definitions(&self) -> &[ProjectDefinition] {
        &self.definitions
    }

    pub fn state(&self) -> &PortfolioState {
        &self.state
    }

    /// The assumptions the card for `project_id` currently evaluates with.
    pub fn assumptions(&self, project_id: &str) -> Option<&ProjectAssumptions> {
        self.assumptions.get(project_id)
    }

    pub fn add_renderer(&mut self, renderer: impl Renderer + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    /// Apply one edit and re-render.
    ///
    /// `points`, `expenses` and `fdv` go to the shared portfolio state.
    /// `airdrop_percent` and `total_points` only change the addressed card;
    /// the portfolio totals keep using the definition defaults.
    pub fn apply(&mut self, edit: ProjectEdit) -> Result<()> {
        let _span = debug_span!("apply_edit", project = %edit.project_id, field = %edit.field)
            .entered();

        if edit.field.is_assumption() {
            self.apply_override(&edit)?;
        } else {
            self.state.apply(&self.definitions, edit)?;
        }

        self.notify();
        Ok(())
    }

    /// Update a card-local assumption. A non-finite value leaves the
    /// previous assumption in place.
    fn apply_override(&mut self, edit: &ProjectEdit) -> Result<()> {
        let value = edit.value.as_number();
        let assumptions = self.card_assumptions_mut(&edit.project_id)?;
        if !value.is_finite() {
            warn!(
                "Ignoring non-finite {} for {}; keeping previous value",
                edit.field, edit.project_id
            );
            return Ok(());
        }

        match edit.field {
            ProjectField::AirdropPercent => assumptions.airdrop_percent = value,
            ProjectField::TotalPoints => assumptions.total_points = value,
            ProjectField::Points | ProjectField::Expenses | ProjectField::Fdv => {
                return Err(Error::invalid_command(format!(
                    "{} is portfolio state, not a card assumption",
                    edit.field
                )));
            }
        }
        debug!(field = %edit.field, value, "card assumption updated");
        Ok(())
    }

    fn card_assumptions_mut(&mut self, project_id: &str) -> Result<&mut ProjectAssumptions> {
        self.assumptions
            .get_mut(project_id)
            .ok_or_else(|| Error::UnknownProject(project_id.to_string()))
    }

    /// Convenience wrapper around [`Session::apply`].
    pub fn set(
        &mut self,
        project_id: &str,
        field: ProjectField,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        self.apply(ProjectEdit::new(project_id, field, value.into()))
    }

    /// Restore a card's assumptions to the definition defaults and re-render.
    pub fn reset_assumptions(&mut self, project_id: &str) -> Result<()> {
        let definition = self
            .definitions
            .iter()
            .find(|def| def.id == project_id)
            .ok_or_else(|| Error::UnknownProject(project_id.to_string()))?;
        self.assumptions
            .insert(definition.id.clone(), definition.default_assumptions());
        debug!(project = project_id, "card assumptions reset");
        self.notify();
        Ok(())
    }

    /// Compute metrics for one card with its current assumptions.
    pub fn project_metrics(&self, project_id: &str) -> Option<ProjectMetrics> {
        let state = self.state.get(project_id)?;
        let assumptions = self.assumptions.get(project_id)?;
        Some(evaluate(assumptions, state))
    }

    pub fn portfolio_metrics(&self) -> PortfolioMetrics {
        aggregate(&self.definitions, &self.state)
    }

    /// Recompute every card and the portfolio totals.
    pub fn snapshot(&self) -> Snapshot {
        let projects = self
            .definitions
            .iter()
            .filter_map(|def| {
                let state = self.state.get(&def.id)?;
                let assumptions = self
                    .assumptions
                    .get(&def.id)
                    .copied()
                    .unwrap_or_else(|| def.default_assumptions());
                let metrics = evaluate(&assumptions, state);
                Some(ProjectView {
                    definition: def.clone(),
                    assumptions,
                    state: state.clone(),
                    profitable: metrics.is_profitable_at(state.fdv),
                    metrics,
                })
            })
            .collect();

        Snapshot {
            projects,
            portfolio: self.portfolio_metrics(),
        }
    }

    /// Call every renderer with the current snapshot.
    pub fn notify(&mut self) {
        if self.renderers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for renderer in &mut self.renderers {
            renderer.render(&snapshot);
        }
    }

    /// Execute one parsed line of the interactive command grammar.
    ///
    /// Returns `false` once the session should end.
    pub fn execute(&mut self, command: SessionCommand) -> Result<bool> {
        match command {
            SessionCommand::Set(edit) => self.apply(edit)?,
            SessionCommand::Reset(project_id) => self.reset_assumptions(&project_id)?,
            SessionCommand::Show => self.notify(),
            SessionCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// A line of the interactive session grammar.
///
/// ```text
/// set <project> <field> <value>
/// reset <project>
/// show
/// quit
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set(ProjectEdit),
    Reset(String),
    Show,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "set" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let project = parts.next().unwrap_or_default();
                let field = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default().trim();
                if project.is_empty() || field.is_empty() {
                    return Err(Error::invalid_command(
                        "usage: set <project> <field> <value>",
                    ));
                }
                Ok(Self::Set(ProjectEdit::new(
                    project,
                    field.parse()?,
                    FieldValue::Text(value.to_string()),
                )))
            }
            "reset" if !rest.is_empty() => Ok(Self::Reset(rest.to_string())),
            "reset" => Err(Error::invalid_command("usage: reset <project>")),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(Error::invalid_command(format!("unknown command '{}'", other))),
        }
    }
}
