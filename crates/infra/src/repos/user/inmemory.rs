use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use taskdeck_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        insert(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_active(&self) -> anyhow::Result<Vec<User>> {
        let mut users = find_by(&self.users, |u| u.active);
        users.sort_by(|u1, u2| u1.name.cmp(&u2.name));
        Ok(users)
    }
}
