//! Project valuation engine.
//!
//! Maps one project's assumptions and one user's inputs to the derived
//! payout metrics. Every division is guarded, so finite inputs always give
//! finite outputs. The valuation is taken as given: range limits on the
//! adjustable FDV are enforced where state is edited, not here.
//!
//! # Example
//!
//! ```rust
//! use airdrop_manager::core::{ProjectAssumptions, UserProjectState};
//! use airdrop_manager::valuation::evaluate;
//!
//! let assumptions = ProjectAssumptions {
//!     airdrop_percent: 25.0,
//!     total_points: 12_500_000.0,
//! };
//! let state = UserProjectState {
//!     points: "10,000".to_string(),
//!     expenses: "500".to_string(),
//!     fdv: 3_500_000_000.0,
//! };
//!
//! let metrics = evaluate(&assumptions, &state);
//! assert_eq!(metrics.my_value, 700_000.0);
//! assert_eq!(metrics.break_even_fdv, 2_500_000.0);
//! ```

use crate::core::{ProjectAssumptions, ProjectMetrics, UserProjectState};

/// Evaluate a project from the user's raw text inputs.
pub fn evaluate(assumptions: &ProjectAssumptions, state: &UserProjectState) -> ProjectMetrics {
    evaluate_amounts(
        assumptions,
        state.fdv,
        state.my_points(),
        state.my_expenses(),
    )
}

/// Evaluate a project from already-parsed amounts.
pub fn evaluate_amounts(
    assumptions: &ProjectAssumptions,
    fdv: f64,
    my_points: f64,
    my_expenses: f64,
) -> ProjectMetrics {
    let share = assumptions.airdrop_percent / 100.0;
    let total_airdrop_value = fdv * share;
    let value_per_point = per_unit(total_airdrop_value, assumptions.total_points);
    let my_value = my_points * value_per_point;
    let net_profit = my_value - my_expenses;

    ProjectMetrics {
        total_airdrop_value,
        value_per_point,
        my_value,
        cost_per_point: per_unit(my_expenses, my_points),
        net_profit,
        roi: roi_percent(net_profit, my_expenses),
        break_even_fdv: break_even_fdv(assumptions, my_points, my_expenses),
    }
}

/// Return on investment in percent; 0 when nothing was spent.
pub fn roi_percent(net_profit: f64, expenses: f64) -> f64 {
    if expenses > 0.0 {
        (net_profit / expenses) * 100.0
    } else {
        0.0
    }
}

/// Valuation at which `my_points` are worth exactly `my_expenses`.
///
/// Returns 0 when either the user holds no points or nothing is allocated
/// to the airdrop, meaning "not computable".
pub fn break_even_fdv(assumptions: &ProjectAssumptions, my_points: f64, my_expenses: f64) -> f64 {
    if my_points > 0.0 && assumptions.airdrop_percent > 0.0 {
        (my_expenses * assumptions.total_points)
            / (my_points * (assumptions.airdrop_percent / 100.0))
    } else {
        0.0
    }
}

fn per_unit(amount: f64, units: f64) -> f64 {
    if units > 0.0 {
        amount / units
    } else {
        0.0
    }
}
