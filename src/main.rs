// src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use marcenaria::{
    common::db_utils::connect,
    config::{AppState, Config},
    router::build_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; padrão "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Sem DATABASE_URL / JWT_SECRET a aplicação nem sobe
    let config = Config::from_env()?;

    let pool = connect(&config).await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app_state = AppState::new(pool, config.jwt_secret.clone(), config.bcrypt_cost);
    let app = build_router(app_state, &config.cors_origins)?;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
