use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taskdeck_domain::{Project, ProjectStatus, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectDTO {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: ID,
    pub created_at: i64,
}

impl ProjectDTO {
    pub fn new(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            status: project.status,
            start_date: project.start_date,
            end_date: project.end_date,
            created_by: project.created_by,
            created_at: project.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectSummaryDTO {
    pub id: ID,
    pub name: String,
    pub status: ProjectStatus,
}

impl ProjectSummaryDTO {
    pub fn new(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            status: project.status,
        }
    }
}
