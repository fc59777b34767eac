use serde::{Deserialize, Serialize};
use taskdeck_domain::{User, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            active: user.active,
        }
    }
}
