use crate::dtos::ProjectDTO;
use serde::{Deserialize, Serialize};
use taskdeck_domain::{ProjectStatus, ID};

pub mod get_projects {
    use super::*;

    pub type APIResponse = Vec<ProjectDTO>;
}

pub mod create_project {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: Option<String>,
        pub description: Option<String>,
        pub status: Option<ProjectStatus>,
        /// Formatted as `YYYY-MM-DD`
        pub start_date: Option<String>,
        /// Formatted as `YYYY-MM-DD`
        pub end_date: Option<String>,
        pub created_by: Option<ID>,
    }

    pub type APIResponse = ProjectDTO;
}
