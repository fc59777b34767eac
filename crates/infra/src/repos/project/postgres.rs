use super::IProjectRepo;
use chrono::NaiveDate;
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::TryFrom;
use taskdeck_domain::{Project, ID};
use tracing::error;

pub struct PostgresProjectRepo {
    pool: PgPool,
}

impl PostgresProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRaw {
    project_uid: Uuid,
    name: String,
    description: Option<String>,
    status: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_by: Uuid,
    created_at: i64,
}

impl TryFrom<ProjectRaw> for Project {
    type Error = anyhow::Error;

    fn try_from(p: ProjectRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            id: p.project_uid.into(),
            name: p.name,
            description: p.description,
            status: p.status.parse()?,
            start_date: p.start_date,
            end_date: p.end_date,
            created_by: p.created_by.into(),
            created_at: p.created_at,
        })
    }
}

#[async_trait::async_trait]
impl IProjectRepo for PostgresProjectRepo {
    async fn insert(&self, project: &Project) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO projects
            (project_uid, name, description, status, start_date, end_date, created_by, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(project.id.inner_ref())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.status.as_str())
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.created_by.inner_ref())
        .bind(project.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert project: {:?}. DB returned error: {:?}",
                project, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, project_id: &ID) -> Option<Project> {
        let res: Option<ProjectRaw> = sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            WHERE project_uid = $1
            "#,
        )
        .bind(project_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find project with id: {:?} failed. DB returned error: {:?}",
                project_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|project| Project::try_from(project).ok())
    }

    async fn find_many(&self, project_ids: &[ID]) -> anyhow::Result<Vec<Project>> {
        let ids = project_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let rows = sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            WHERE project_uid = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find projects with ids: {:?} failed. DB returned error: {:?}",
                project_ids, e
            );
            e
        })?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRaw>(
            r#"
            SELECT * FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all projects failed. DB returned error: {:?}", e);
            e
        })?;

        rows.into_iter().map(Project::try_from).collect()
    }
}
