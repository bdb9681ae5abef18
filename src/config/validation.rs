//! Validation of project tables with error accumulation.
//!
//! Every issue is collected before reporting so a broken configuration
//! file can be fixed in one pass.

use std::collections::HashSet;
use std::path::Path;

use crate::core::{Error, ProjectDefinition, Result, MIN_FDV};

use super::AirdropConfig;

/// Collect every problem with a project table.
pub fn project_issues(projects: &[ProjectDefinition]) -> Vec<String> {
    if projects.is_empty() {
        return vec!["projects: at least one project is required".to_string()];
    }

    let mut seen = HashSet::new();
    projects
        .iter()
        .enumerate()
        .flat_map(|(index, project)| {
            let mut issues = definition_issues(index, project);
            if !project.id.trim().is_empty() && !seen.insert(project.id.as_str()) {
                issues.push(format!("projects[{}].id: duplicate id '{}'", index, project.id));
            }
            issues
        })
        .collect()
}

fn definition_issues(index: usize, project: &ProjectDefinition) -> Vec<String> {
    let field = |name: &str| format!("projects[{}].{}", index, name);
    let mut issues = Vec::new();

    if project.id.trim().is_empty() {
        issues.push(format!("{}: must not be empty", field("id")));
    }
    if !(0.0..=100.0).contains(&project.airdrop_percent) {
        issues.push(format!(
            "{}: out of range (expected: 0-100, got: {})",
            field("airdrop_percent"),
            project.airdrop_percent
        ));
    }
    if !project.estimated_total_points.is_finite() || project.estimated_total_points < 0.0 {
        issues.push(format!(
            "{}: must be a non-negative number (got: {})",
            field("estimated_total_points"),
            project.estimated_total_points
        ));
    }
    if !project.slider_max.is_finite() || project.slider_max < MIN_FDV {
        issues.push(format!(
            "{}: must be at least {} (got: {})",
            field("slider_max"),
            MIN_FDV,
            project.slider_max
        ));
    } else if !(MIN_FDV..=project.slider_max).contains(&project.default_fdv) {
        issues.push(format!(
            "{}: out of range (expected: {}-{}, got: {})",
            field("default_fdv"),
            MIN_FDV,
            project.slider_max,
            project.default_fdv
        ));
    }

    issues
}

/// Validate a whole configuration, reporting all issues at once.
pub fn validate_config(config: &AirdropConfig, path: Option<&Path>) -> Result<()> {
    let issues = project_issues(&config.projects);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::ConfigIssues {
            path: path.map(Path::to_path_buf),
            issues,
        })
    }
}
