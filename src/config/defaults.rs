use crate::core::ProjectDefinition;

/// The project table used when no configuration file provides one.
pub fn default_projects() -> Vec<ProjectDefinition> {
    vec![
        project(
            "lighter",
            "Lighter",
            "LIT",
            25.0,
            12_500_000.0,
            3_500_000_000.0,
            10_000_000_000.0,
        ),
        project(
            "extended",
            "Extended",
            "EXT",
            30.0,
            70_000_000.0,
            500_000_000.0,
            2_000_000_000.0,
        ),
        project(
            "paradex",
            "Paradex",
            "DIME",
            20.0,
            217_000_000.0,
            500_000_000.0,
            2_000_000_000.0,
        ),
    ]
}

fn project(
    id: &str,
    name: &str,
    ticker: &str,
    airdrop_percent: f64,
    estimated_total_points: f64,
    default_fdv: f64,
    slider_max: f64,
) -> ProjectDefinition {
    ProjectDefinition {
        id: id.to_string(),
        name: name.to_string(),
        ticker: ticker.to_string(),
        airdrop_percent,
        estimated_total_points,
        default_fdv,
        slider_max,
    }
}

/// Commented starter file written by `airdrop-manager init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Airdrop Manager Configuration

[display]
default_format = "terminal"

[[projects]]
id = "lighter"
name = "Lighter"
ticker = "LIT"
airdrop_percent = 25.0
estimated_total_points = 12_500_000.0
default_fdv = 3_500_000_000.0
slider_max = 10_000_000_000.0

[[projects]]
id = "extended"
name = "Extended"
ticker = "EXT"
airdrop_percent = 30.0
estimated_total_points = 70_000_000.0
default_fdv = 500_000_000.0
slider_max = 2_000_000_000.0

[[projects]]
id = "paradex"
name = "Paradex"
ticker = "DIME"
airdrop_percent = 20.0
estimated_total_points = 217_000_000.0
default_fdv = 500_000_000.0
slider_max = 2_000_000_000.0
"#;
