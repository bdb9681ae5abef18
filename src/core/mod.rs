pub mod errors;
pub mod parsing;

use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};
pub use parsing::parse_amount;

/// Lower bound of the adjustable valuation input.
pub const MIN_FDV: f64 = 100_000_000.0;

/// A tracked reward program, seeded once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub id: String,
    pub name: String,
    pub ticker: String,
    /// Share of the fully diluted valuation paid out to point holders, 0-100.
    pub airdrop_percent: f64,
    /// Units that will ever be distributed across all participants.
    pub estimated_total_points: f64,
    pub default_fdv: f64,
    /// Upper bound of the adjustable valuation input.
    pub slider_max: f64,
}

impl ProjectDefinition {
    /// Clamp a valuation into the adjustable range `[MIN_FDV, slider_max]`.
    ///
    /// A `slider_max` below `MIN_FDV` collapses the range onto `MIN_FDV`.
    pub fn clamp_fdv(&self, fdv: f64) -> f64 {
        fdv.clamp(MIN_FDV, self.slider_max.max(MIN_FDV))
    }

    pub fn default_assumptions(&self) -> ProjectAssumptions {
        ProjectAssumptions::from(self)
    }
}

/// The per-project inputs the valuation depends on besides the user's own numbers.
///
/// Starts equal to the definition defaults and may be overridden per card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectAssumptions {
    pub airdrop_percent: f64,
    pub total_points: f64,
}

impl From<&ProjectDefinition> for ProjectAssumptions {
    fn from(definition: &ProjectDefinition) -> Self {
        Self {
            airdrop_percent: definition.airdrop_percent,
            total_points: definition.estimated_total_points,
        }
    }
}

/// Mutable per-project user input, keyed by `ProjectDefinition::id`.
///
/// `points` and `expenses` hold the raw text as entered; they are coerced
/// to numbers only when metrics are computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProjectState {
    pub points: String,
    pub expenses: String,
    pub fdv: f64,
}

impl UserProjectState {
    pub fn seeded(definition: &ProjectDefinition) -> Self {
        Self {
            points: String::new(),
            expenses: String::new(),
            fdv: definition.default_fdv,
        }
    }

    pub fn my_points(&self) -> f64 {
        parse_amount(&self.points)
    }

    pub fn my_expenses(&self) -> f64 {
        parse_amount(&self.expenses)
    }
}

/// Derived metrics for a single project. Values are exact and unrounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub total_airdrop_value: f64,
    pub value_per_point: f64,
    pub my_value: f64,
    pub cost_per_point: f64,
    pub net_profit: f64,
    /// Return on investment in percent.
    pub roi: f64,
    /// Valuation at which the payout equals expenses; 0 when not computable.
    pub break_even_fdv: f64,
}

impl ProjectMetrics {
    /// Whether the position breaks even at `fdv`.
    ///
    /// A break-even of 0 ("not computable") counts as already met.
    pub fn is_profitable_at(&self, fdv: f64) -> bool {
        !(self.break_even_fdv > fdv)
    }
}

/// Totals across the whole project list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_expenses: f64,
    pub total_value: f64,
    pub net_profit: f64,
    /// Return on investment in percent.
    pub total_roi: f64,
}
