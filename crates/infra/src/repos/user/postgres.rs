use super::IUserRepo;
use sqlx::{types::Uuid, FromRow, PgPool};
use taskdeck_domain::{User, ID};
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    full_name: String,
    email: String,
    role: String,
    active: bool,
}

impl From<UserRaw> for User {
    fn from(u: UserRaw) -> Self {
        Self {
            id: u.user_uid.into(),
            name: u.full_name,
            email: u.email,
            role: u.role,
            active: u.active,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, full_name, email, role, active)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.role)
        .bind(user.active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert user: {:?}. DB returned error: {:?}", user, e);
            e
        })?;
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        let res: Option<UserRaw> = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find user with id: {:?} failed. DB returned error: {:?}",
                user_id, e
            );
            e
        })
        .ok()?;
        res.map(|user| user.into())
    }

    async fn find_active(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE active
            ORDER BY full_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find active users failed. DB returned error: {:?}", e);
            e
        })?;

        Ok(rows.into_iter().map(|user| user.into()).collect())
    }
}
