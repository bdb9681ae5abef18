//! Portfolio state and aggregation.
//!
//! [`PortfolioState`] is the single owner of every project's user input.
//! It is created eagerly for the whole project list and mutated one field
//! at a time through [`ProjectEdit`]s. [`aggregate`] sums the per-project
//! results across the list.
//!
//! The aggregate always values each project with the definition defaults
//! for `airdrop_percent` and `estimated_total_points`. Per-card overrides
//! live outside this state and do not reach the portfolio totals.

pub mod edit;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{
    parse_amount, Error, PortfolioMetrics, ProjectDefinition, Result, UserProjectState,
};
use crate::valuation::{evaluate, roi_percent};

pub use edit::{FieldValue, ProjectEdit, ProjectField};

/// User input for every project, keyed by project id.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PortfolioState {
    entries: BTreeMap<String, UserProjectState>,
}

impl PortfolioState {
    /// Seed one entry per definition.
    pub fn seeded(definitions: &[ProjectDefinition]) -> Self {
        let entries = definitions
            .iter()
            .map(|def| (def.id.clone(), UserProjectState::seeded(def)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, project_id: &str) -> Option<&UserProjectState> {
        self.entries.get(project_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply a single-field edit to the state of one project.
    ///
    /// Valuation edits are clamped into `[MIN_FDV, slider_max]`; a
    /// non-finite valuation leaves the previous value in place. Override
    /// fields (`airdrop_percent`, `total_points`) are not part of the
    /// shared state and are rejected here.
    pub fn apply(&mut self, definitions: &[ProjectDefinition], edit: ProjectEdit) -> Result<()> {
        let definition = definitions
            .iter()
            .find(|def| def.id == edit.project_id)
            .ok_or_else(|| Error::UnknownProject(edit.project_id.clone()))?;
        let state = self
            .entries
            .entry(definition.id.clone())
            .or_insert_with(|| UserProjectState::seeded(definition));

        match edit.field {
            ProjectField::Points => state.points = edit.value.into_text(),
            ProjectField::Expenses => state.expenses = edit.value.into_text(),
            ProjectField::Fdv => {
                let fdv = edit.value.as_number();
                if fdv.is_finite() {
                    state.fdv = definition.clamp_fdv(fdv);
                } else {
                    log::warn!(
                        "Ignoring non-finite valuation for {}; keeping {}",
                        definition.id,
                        state.fdv
                    );
                }
            }
            ProjectField::AirdropPercent | ProjectField::TotalPoints => {
                return Err(Error::invalid_command(format!(
                    "{} is a per-card assumption, not portfolio state",
                    edit.field
                )));
            }
        }
        Ok(())
    }
}

/// Sum expenses and projected value across the project list.
///
/// Projects without a state entry contribute nothing.
pub fn aggregate(definitions: &[ProjectDefinition], state: &PortfolioState) -> PortfolioMetrics {
    let (total_expenses, total_value) = definitions
        .iter()
        .filter_map(|def| state.get(&def.id).map(|s| (def, s)))
        .fold((0.0, 0.0), |(expenses, value), (def, s)| {
            let metrics = evaluate(&def.default_assumptions(), s);
            (expenses + parse_amount(&s.expenses), value + metrics.my_value)
        });

    let net_profit = total_value - total_expenses;
    PortfolioMetrics {
        total_expenses,
        total_value,
        net_profit,
        total_roi: roi_percent(net_profit, total_expenses),
    }
}
