// src/router.rs

//! Monta o router completo. O binário e os testes de integração usam a mesma função.

use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{
        header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn build_router(app_state: AppState, cors_origins: &[String]) -> anyhow::Result<Router> {
    // Rotas públicas
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Tudo abaixo exige token
    let protected = Router::new()
        .route("/users/me", get(handlers::auth::get_me))
        .route(
            "/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        // Clientes
        .route(
            "/clients",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route("/clients/{id}", get(handlers::clients::get_client))
        // Agenda
        .route(
            "/appointments",
            post(handlers::agenda::create_appointment).get(handlers::agenda::list_appointments),
        )
        .route(
            "/appointments/{id}",
            get(handlers::agenda::get_appointment)
                .put(handlers::agenda::update_appointment)
                .delete(handlers::agenda::delete_appointment),
        )
        // Projetos
        .route(
            "/projects",
            post(handlers::projects::create_project).get(handlers::projects::list_projects),
        )
        .route("/projects/{id}", get(handlers::projects::get_project))
        .route(
            "/projects/{id}/measurements/start",
            post(handlers::projects::start_measurements),
        )
        .route("/projects/{id}/report", get(handlers::projects::project_report))
        // Briefing
        .route(
            "/projects/{id}/environments",
            post(handlers::briefing::create_environment).get(handlers::briefing::list_environments),
        )
        .route("/environments/{id}", delete(handlers::briefing::delete_environment))
        .route(
            "/environments/{id}/modules",
            post(handlers::briefing::create_module).get(handlers::briefing::list_modules),
        )
        .route(
            "/modules/{id}",
            put(handlers::briefing::update_module).delete(handlers::briefing::delete_module),
        )
        // Medições
        .route(
            "/environments/{id}/walls",
            post(handlers::measurements::create_wall).get(handlers::measurements::list_walls),
        )
        .route(
            "/walls/{id}",
            get(handlers::measurements::get_wall).delete(handlers::measurements::delete_wall),
        )
        .route("/walls/{id}/openings", post(handlers::measurements::create_opening))
        .route(
            "/walls/{id}/hydraulic-points",
            post(handlers::measurements::create_hydraulic_point),
        )
        .route(
            "/walls/{id}/electrical-points",
            post(handlers::measurements::create_electrical_point),
        )
        .route("/openings/{id}", delete(handlers::measurements::delete_opening))
        .route(
            "/hydraulic-points/{id}",
            delete(handlers::measurements::delete_hydraulic_point),
        )
        .route(
            "/electrical-points/{id}",
            delete(handlers::measurements::delete_electrical_point),
        )
        .layer(axum_middleware::from_fn_with_state(app_state.clone(), auth_guard));

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/session", get(handlers::auth::session))
        .nest("/api/auth", auth_routes)
        .nest("/api", protected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(cors_origins)?)
        .with_state(app_state);

    Ok(app)
}

/// CORS do front. Lista vazia libera qualquer origem.
pub fn build_cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed = origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Origem CORS inválida: {}", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(parsed)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT_LANGUAGE])
        .max_age(Duration::from_secs(3600)))
}
