use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A `Project` groups together `Task`s
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// The `User` who created this `Project`
    pub created_by: ID,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Planning")]
    Planning,
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid project status: {0}")]
pub struct InvalidProjectStatusError(pub String);

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = InvalidProjectStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(Self::Planning),
            "Active" => Ok(Self::Active),
            "On Hold" => Ok(Self::OnHold),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidProjectStatusError(s.to_string())),
        }
    }
}

impl Project {
    pub fn new(name: String, created_by: ID, created_at: i64) -> Self {
        Self {
            id: Default::default(),
            name,
            description: None,
            status: Default::default(),
            start_date: None,
            end_date: None,
            created_by,
            created_at,
        }
    }
}

impl Entity for Project {
    fn id(&self) -> &ID {
        &self.id
    }
}
