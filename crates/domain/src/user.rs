use crate::shared::entity::{Entity, ID};

/// A `User` of the dashboard. Users are managed by the authentication system,
/// this service only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
            role: "member".into(),
            active: true,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
