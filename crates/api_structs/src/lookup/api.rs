use crate::dtos::{ProjectSummaryDTO, UserDTO};
use serde::{Deserialize, Serialize};

pub mod get_lookup {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub projects: Vec<ProjectSummaryDTO>,
        pub users: Vec<UserDTO>,
    }
}
