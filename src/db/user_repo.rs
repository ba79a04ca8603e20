// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        auth::User,
        settings::{UpdatePreferencesRequest, UserPreferences},
    },
};

// O repositório de usuários, responsável pelas tabelas 'users' e 'user_preferences'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte erro de violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })
    }

    pub async fn get_preferences(&self, user_id: Uuid) -> Result<Option<UserPreferences>, AppError> {
        let prefs = sqlx::query_as::<_, UserPreferences>(
            "SELECT * FROM user_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(prefs)
    }

    /// Grava as preferências e marca o quiz como concluído, juntos.
    pub async fn save_preferences(
        &self,
        user_id: Uuid,
        input: &UpdatePreferencesRequest,
    ) -> Result<UserPreferences, AppError> {
        let mut tx = self.pool.begin().await?;

        // UPSERT (Insert or Update)
        let prefs = sqlx::query_as::<_, UserPreferences>(
            r#"
            INSERT INTO user_preferences (user_id, material_type, measurement_unit, work_style)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET
                material_type = EXCLUDED.material_type,
                measurement_unit = EXCLUDED.measurement_unit,
                work_style = EXCLUDED.work_style,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(input.material_type)
        .bind(input.measurement_unit)
        .bind(&input.work_style)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE users SET has_completed_quiz = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(prefs)
    }
}
