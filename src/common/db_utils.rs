// src/common/db_utils.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::common::error::{AppError, Resource};
use crate::config::Config;

/// Abre a pool de conexões com o Postgres.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

/// Erro de escrita: FK quebrada vira referência inválida ao pai.
pub(crate) fn map_write_error(e: sqlx::Error, parent: Resource) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::InvalidReference(parent);
        }
    }
    e.into()
}
