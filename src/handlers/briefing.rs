// src/handlers/briefing.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        validation::{non_empty, not_blank},
    },
    config::AppState,
    handlers::DeleteConfirmation,
    middleware::i18n::Locale,
    models::briefing::{CountertopType, DoorType, Hardware, Module, ModuleRecord, ProjectEnvironment},
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnvironmentPayload {
    #[validate(custom(function = "not_blank", message = "Nome do ambiente é obrigatório"))]
    #[schema(example = "Cozinha")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "cozinha")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModulePayload {
    #[validate(custom(function = "not_blank", message = "Nome do módulo é obrigatório"))]
    #[schema(example = "Balcões")]
    pub name: String,
    #[serde(default)]
    pub has_doors: bool,
    #[serde(default)]
    #[validate(range(min = 0, message = "Quantidade de portas inválida"))]
    #[schema(example = 4)]
    pub door_count: i32,
    pub door_type: Option<DoorType>,
    pub countertop_type: Option<CountertopType>,
    pub preferences: Option<String>,
    #[serde(default)]
    pub hardware: Hardware,
}

impl From<ModulePayload> for ModuleRecord {
    fn from(p: ModulePayload) -> Self {
        Self {
            name: p.name.trim().to_string(),
            has_doors: p.has_doors,
            door_count: p.door_count,
            door_type: p.door_type,
            countertop_type: p.countertop_type,
            preferences: non_empty(p.preferences),
            hardware: p.hardware,
        }
    }
}

// =============================================================================
//  AMBIENTES
// =============================================================================

// POST /api/projects/{id}/environments
#[utoipa::path(
    post,
    path = "/api/projects/{id}/environments",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    request_body = CreateEnvironmentPayload,
    responses(
        (status = 201, description = "Ambiente criado", body = ProjectEnvironment),
        (status = 404, description = "Projeto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_environment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(project_id): Path<Uuid>,
    Json(payload): Json<CreateEnvironmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let kind = non_empty(payload.kind);
    let env = app_state
        .briefing_service
        .add_environment(project_id, &payload.name, kind.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(env)))
}

// GET /api/projects/{id}/environments
#[utoipa::path(
    get,
    path = "/api/projects/{id}/environments",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses(
        (status = 200, description = "Ambientes na ordem de criação", body = Vec<ProjectEnvironment>),
        (status = 404, description = "Projeto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_environments(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let envs = app_state
        .briefing_service
        .list_environments(project_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(envs)))
}

// DELETE /api/environments/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/environments/{id}",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do ambiente"), DeleteConfirmation),
    responses(
        (status = 204, description = "Ambiente removido com módulos e paredes"),
        (status = 404, description = "Ambiente não encontrado"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_environment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .briefing_service
        .delete_environment(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  MÓDULOS
// =============================================================================

// POST /api/environments/{id}/modules
#[utoipa::path(
    post,
    path = "/api/environments/{id}/modules",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do ambiente")),
    request_body = ModulePayload,
    responses(
        (status = 201, description = "Módulo criado", body = Module),
        (status = 404, description = "Ambiente não encontrado"),
        (status = 409, description = "Este módulo já existe neste ambiente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_module(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(environment_id): Path<Uuid>,
    Json(payload): Json<ModulePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let module = app_state
        .briefing_service
        .add_module(environment_id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(module)))
}

// GET /api/environments/{id}/modules
#[utoipa::path(
    get,
    path = "/api/environments/{id}/modules",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do ambiente")),
    responses(
        (status = 200, description = "Módulos na ordem de criação", body = Vec<Module>),
        (status = 404, description = "Ambiente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_modules(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(environment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let modules = app_state
        .briefing_service
        .list_modules(environment_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(modules)))
}

// PUT /api/modules/{id}
#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do módulo")),
    request_body = ModulePayload,
    responses(
        (status = 200, description = "Módulo atualizado", body = Module),
        (status = 404, description = "Módulo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_module(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModulePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let module = app_state
        .briefing_service
        .update_module(id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(module)))
}

// DELETE /api/modules/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    tag = "Briefing",
    params(("id" = Uuid, Path, description = "ID do módulo"), DeleteConfirmation),
    responses(
        (status = 204, description = "Módulo removido"),
        (status = 404, description = "Módulo não encontrado"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_module(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .briefing_service
        .delete_module(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
