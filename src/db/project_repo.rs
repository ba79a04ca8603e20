// src/db/project_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        db_utils::map_write_error,
        error::{AppError, Resource},
    },
    models::projects::{project_code, Project, ProjectRecord, ProjectStatus, ProjectWithClient},
};

const WITH_CLIENT_SELECT: &str = r#"
    SELECT p.*, c.name AS client_name
    FROM projects p
    LEFT JOIN clients c ON c.id = p.client_id
"#;

#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cria o projeto com o próximo código da sequência (PRJ-0001...).
    pub async fn create_project(&self, input: &ProjectRecord) -> Result<Project, AppError> {
        let mut tx = self.pool.begin().await?;

        let seq: i64 = sqlx::query_scalar("SELECT nextval('project_code_seq')")
            .fetch_one(&mut *tx)
            .await?;

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (code, name, description, client_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(project_code(seq))
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.client_id)
        .bind(input.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, Resource::Client))?;

        tx.commit().await?;
        Ok(project)
    }

    /// Projetos mais recentes primeiro.
    pub async fn list_projects(&self) -> Result<Vec<ProjectWithClient>, AppError> {
        let sql = format!("{} ORDER BY p.created_at DESC", WITH_CLIENT_SELECT);
        let rows = sqlx::query_as::<_, ProjectWithClient>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_project(&self, id: Uuid) -> Result<Option<ProjectWithClient>, AppError> {
        let sql = format!("{} WHERE p.id = $1", WITH_CLIENT_SELECT);
        let row = sqlx::query_as::<_, ProjectWithClient>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update_status(&self, id: Uuid, status: ProjectStatus) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            "UPDATE projects SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(project)
    }
}
