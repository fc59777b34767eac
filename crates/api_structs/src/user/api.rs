use crate::dtos::UserDTO;

pub mod get_users {
    use super::*;

    /// Active `User`s ordered by name
    pub type APIResponse = Vec<UserDTO>;
}
