//! Single-field edit events addressed by project id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{parse_amount, Error};

/// The editable fields of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Points,
    Expenses,
    Fdv,
    /// Card-local override of the definition's airdrop percent
    AirdropPercent,
    /// Card-local override of the definition's estimated total points
    TotalPoints,
}

impl ProjectField {
    pub const ALL: [ProjectField; 5] = [
        ProjectField::Points,
        ProjectField::Expenses,
        ProjectField::Fdv,
        ProjectField::AirdropPercent,
        ProjectField::TotalPoints,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Expenses => "expenses",
            Self::Fdv => "fdv",
            Self::AirdropPercent => "airdrop_percent",
            Self::TotalPoints => "total_points",
        }
    }

    /// Whether the field lives in the card's local assumptions rather
    /// than the shared portfolio state.
    pub fn is_assumption(self) -> bool {
        matches!(self, Self::AirdropPercent | Self::TotalPoints)
    }
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "points" => Ok(Self::Points),
            "expenses" => Ok(Self::Expenses),
            "fdv" => Ok(Self::Fdv),
            "airdrop_percent" | "airdrop" => Ok(Self::AirdropPercent),
            "total_points" => Ok(Self::TotalPoints),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

/// New value carried by an edit: raw text from an input box or a number
/// from a slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce to a number, treating malformed text as zero.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_amount(text),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A `(project_id, field, value)` edit event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEdit {
    pub project_id: String,
    pub field: ProjectField,
    pub value: FieldValue,
}

impl ProjectEdit {
    pub fn new(project_id: impl Into<String>, field: ProjectField, value: FieldValue) -> Self {
        Self {
            project_id: project_id.into(),
            field,
            value,
        }
    }

    /// Parse an assignment of the form `project.field=value`.
    ///
    /// ```rust
    /// use airdrop_manager::portfolio::{ProjectEdit, ProjectField};
    ///
    /// let edit = ProjectEdit::parse_assignment("lighter.points=10,000").unwrap();
    /// assert_eq!(edit.project_id, "lighter");
    /// assert_eq!(edit.field, ProjectField::Points);
    /// ```
    pub fn parse_assignment(input: &str) -> Result<Self, Error> {
        let (target, value) = input.split_once('=').ok_or_else(|| {
            Error::invalid_command(format!("expected PROJECT.FIELD=VALUE, got '{}'", input))
        })?;
        let (project_id, field) = target.trim().split_once('.').ok_or_else(|| {
            Error::invalid_command(format!("expected PROJECT.FIELD before '=', got '{}'", target))
        })?;
        if project_id.is_empty() {
            return Err(Error::invalid_command(format!(
                "missing project id in '{}'",
                input
            )));
        }
        Ok(Self::new(
            project_id,
            field.parse()?,
            FieldValue::Text(value.trim().to_string()),
        ))
    }
}
