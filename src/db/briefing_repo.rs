// src/db/briefing_repo.rs

use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{
    common::{
        db_utils::map_write_error,
        error::{AppError, Resource},
    },
    models::briefing::{Module, ModuleRecord, ProjectEnvironment},
};

#[derive(Clone)]
pub struct BriefingRepository {
    pool: PgPool,
}

impl BriefingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  AMBIENTES
    // =========================================================================

    pub async fn create_environment(
        &self,
        project_id: Uuid,
        name: &str,
        kind: Option<&str>,
    ) -> Result<ProjectEnvironment, AppError> {
        sqlx::query_as::<_, ProjectEnvironment>(
            r#"
            INSERT INTO project_environments (project_id, name, type)
            VALUES ($1, $2, $3)
            RETURNING id, project_id, name, type, created_at
            "#,
        )
        .bind(project_id)
        .bind(name)
        .bind(kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Resource::Project))
    }

    pub async fn list_environments(&self, project_id: Uuid) -> Result<Vec<ProjectEnvironment>, AppError> {
        let envs = sqlx::query_as::<_, ProjectEnvironment>(
            r#"
            SELECT id, project_id, name, type, created_at
            FROM project_environments
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(envs)
    }

    pub async fn find_environment(&self, id: Uuid) -> Result<Option<ProjectEnvironment>, AppError> {
        let env = sqlx::query_as::<_, ProjectEnvironment>(
            "SELECT id, project_id, name, type, created_at FROM project_environments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(env)
    }

    /// Remove o ambiente. Módulos e paredes caem junto (cascade).
    pub async fn delete_environment(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM project_environments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    //  MÓDULOS
    // =========================================================================

    pub async fn create_module(&self, environment_id: Uuid, input: &ModuleRecord) -> Result<Module, AppError> {
        sqlx::query_as::<_, Module>(
            r#"
            INSERT INTO modules (
                environment_id, name, has_doors, door_count,
                door_type, countertop_type, preferences, hardware
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(environment_id)
        .bind(&input.name)
        .bind(input.has_doors)
        .bind(input.door_count)
        .bind(input.door_type)
        .bind(input.countertop_type)
        .bind(input.preferences.as_deref())
        .bind(Json(&input.hardware))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Resource::Environment))
    }

    pub async fn update_module(&self, id: Uuid, input: &ModuleRecord) -> Result<Option<Module>, AppError> {
        let module = sqlx::query_as::<_, Module>(
            r#"
            UPDATE modules
            SET name = $2,
                has_doors = $3,
                door_count = $4,
                door_type = $5,
                countertop_type = $6,
                preferences = $7,
                hardware = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.has_doors)
        .bind(input.door_count)
        .bind(input.door_type)
        .bind(input.countertop_type)
        .bind(input.preferences.as_deref())
        .bind(Json(&input.hardware))
        .fetch_optional(&self.pool)
        .await?;
        Ok(module)
    }

    pub async fn list_modules(&self, environment_id: Uuid) -> Result<Vec<Module>, AppError> {
        let modules = sqlx::query_as::<_, Module>(
            "SELECT * FROM modules WHERE environment_id = $1 ORDER BY created_at ASC",
        )
        .bind(environment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(modules)
    }

    pub async fn delete_module(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
