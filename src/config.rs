// src/config.rs

use anyhow::Context;
use sqlx::PgPool;
use std::env;

use crate::{
    db::{
        AppointmentRepository, BriefingRepository, ClientRepository, MeasurementRepository,
        ProjectRepository, UserRepository,
    },
    services::{
        agenda_service::AgendaService, auth::AuthService, briefing_service::BriefingService,
        client_service::ClientService, measurement_service::MeasurementService,
        project_service::ProjectService, settings_service::SettingsService,
    },
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuração lida do ambiente (.env opcional).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub bcrypt_cost: u32,
    // Vazio = qualquer origem
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} deve ser definida", key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {}", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("BCRYPT_COST inválido: {}", raw))?,
            None => bcrypt::DEFAULT_COST,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            db_max_connections,
            bcrypt_cost,
            cors_origins,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub agenda_service: AgendaService,
    pub project_service: ProjectService,
    pub briefing_service: BriefingService,
    pub measurement_service: MeasurementService,
    pub settings_service: SettingsService,
}

impl AppState {
    // --- Monta o gráfico de dependências ---
    pub fn new(pool: PgPool, jwt_secret: String, bcrypt_cost: u32) -> Self {
        let user_repo = UserRepository::new(pool.clone());
        let client_repo = ClientRepository::new(pool.clone());
        let agenda_repo = AppointmentRepository::new(pool.clone());
        let project_repo = ProjectRepository::new(pool.clone());
        let briefing_repo = BriefingRepository::new(pool.clone());
        let measurement_repo = MeasurementRepository::new(pool);

        Self {
            auth_service: AuthService::new(user_repo.clone(), jwt_secret, bcrypt_cost),
            client_service: ClientService::new(client_repo.clone()),
            agenda_service: AgendaService::new(agenda_repo, client_repo),
            project_service: ProjectService::new(project_repo.clone(), briefing_repo.clone()),
            briefing_service: BriefingService::new(briefing_repo.clone(), project_repo),
            measurement_service: MeasurementService::new(measurement_repo, briefing_repo),
            settings_service: SettingsService::new(user_repo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/marcenaria"),
            ("JWT_SECRET", "segredo"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn missing_secret_fails_fast() {
        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        assert!(Config::from_lookup(lookup(&[("DATABASE_URL", "  "), ("JWT_SECRET", "s")])).is_err());
    }

    #[test]
    fn parses_origins_and_numbers() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "s"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("CORS_ORIGINS", "http://localhost:5173, https://app.exemplo.com,"),
        ]))
        .unwrap();

        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173", "https://app.exemplo.com"]);
    }

    #[test]
    fn rejects_garbage_numbers() {
        assert!(Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "s"),
            ("BCRYPT_COST", "alto"),
        ]))
        .is_err());
    }
}
