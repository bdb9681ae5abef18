//! End-to-end checks of the valuation engine and portfolio aggregator
//! through the public library API.

use airdrop_manager::{
    aggregate, default_projects, evaluate, evaluate_amounts, PortfolioState, ProjectAssumptions,
    ProjectEdit, ProjectField, Session, UserProjectState,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lighter_assumptions() -> ProjectAssumptions {
    ProjectAssumptions {
        airdrop_percent: 25.0,
        total_points: 12_500_000.0,
    }
}

#[test]
fn scenario_a_single_profitable_project() {
    let state = UserProjectState {
        points: "10,000".to_string(),
        expenses: "500".to_string(),
        fdv: 3_500_000_000.0,
    };
    let metrics = evaluate(&lighter_assumptions(), &state);

    assert_eq!(metrics.total_airdrop_value, 875_000_000.0);
    assert_eq!(metrics.value_per_point, 70.0);
    assert_eq!(metrics.my_value, 700_000.0);
    assert_eq!(metrics.net_profit, 699_500.0);
    assert_eq!(metrics.roi, 139_900.0);
    assert_eq!(metrics.break_even_fdv, 2_500_000.0);
    assert!(metrics.is_profitable_at(state.fdv));
}

#[test]
fn scenario_b_nothing_entered_on_any_project() {
    for definition in default_projects() {
        let state = UserProjectState::seeded(&definition);
        let metrics = evaluate(&definition.default_assumptions(), &state);

        assert_eq!(metrics.my_value, 0.0, "{}", definition.id);
        assert_eq!(metrics.cost_per_point, 0.0);
        assert_eq!(metrics.net_profit, 0.0);
        assert_eq!(metrics.roi, 0.0);
        assert_eq!(metrics.break_even_fdv, 0.0);
    }
}

#[test]
fn scenario_c_two_project_portfolio() {
    let definitions = default_projects();
    let mut state = PortfolioState::seeded(&definitions);
    for raw in [
        "lighter.points=10000",
        "lighter.expenses=500",
        "extended.expenses=1000",
    ] {
        state
            .apply(&definitions, ProjectEdit::parse_assignment(raw).unwrap())
            .unwrap();
    }

    let totals = aggregate(&definitions, &state);
    assert_eq!(totals.total_expenses, 1500.0);
    assert_eq!(totals.total_value, 700_000.0);
    assert_eq!(totals.net_profit, 698_500.0);
    assert!((totals.total_roi - 46_566.7).abs() < 0.05);
}

#[test]
fn card_overrides_never_reach_the_portfolio_summary() {
    let mut session = Session::new(default_projects());
    session.set("lighter", ProjectField::Points, "10,000").unwrap();
    session.set("lighter", ProjectField::Expenses, "500").unwrap();
    let baseline = session.portfolio_metrics();

    session
        .set("lighter", ProjectField::AirdropPercent, 50.0)
        .unwrap();
    session
        .set("lighter", ProjectField::TotalPoints, "1,000,000")
        .unwrap();

    let snapshot = session.snapshot();
    let card = snapshot.project("lighter").unwrap();
    assert_eq!(card.metrics.my_value, 17_500_000.0);
    assert_eq!(snapshot.portfolio, baseline);
}

#[test]
fn text_inputs_parse_at_the_boundary() {
    let assumptions = lighter_assumptions();
    let from_text = evaluate(
        &assumptions,
        &UserProjectState {
            points: "1,234.5".to_string(),
            expenses: "abc".to_string(),
            fdv: 1e9,
        },
    );
    let from_numbers = evaluate_amounts(&assumptions, 1e9, 1234.5, 0.0);
    assert_eq!(from_text, from_numbers);
}

fn amount_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000_000).prop_map(|n| n.to_string()),
        Just(String::new()),
        "[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn portfolio_value_is_sum_of_default_card_values(
        inputs in proptest::collection::vec((amount_text(), amount_text(), 1e8..1e10f64), 3),
        override_percent in 0.0..100.0f64,
    ) {
        let definitions = default_projects();
        let mut session = Session::new(definitions.clone());
        for (definition, (points, expenses, fdv)) in definitions.iter().zip(&inputs) {
            session.set(&definition.id, ProjectField::Points, points.as_str()).unwrap();
            session.set(&definition.id, ProjectField::Expenses, expenses.as_str()).unwrap();
            session.set(&definition.id, ProjectField::Fdv, *fdv).unwrap();
            session.set(&definition.id, ProjectField::AirdropPercent, override_percent).unwrap();
        }

        let expected: f64 = definitions
            .iter()
            .map(|def| {
                let state = session.state().get(&def.id).unwrap();
                evaluate(&def.default_assumptions(), state).my_value
            })
            .sum();
        let totals = session.portfolio_metrics();

        prop_assert!((totals.total_value - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert!(totals.total_roi.is_finite());
    }
}
