// src/handlers/projects.rs

use axum::{
    extract::{Path, State},
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
    middleware::i18n::Locale,
    models::projects::{ProjectRecord, ProjectStatus, ProjectView},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    #[validate(custom(function = "not_blank", message = "Nome do projeto é obrigatório"))]
    #[schema(example = "Cozinha planejada - Ap. 32")]
    pub name: String,
    pub description: Option<String>,
    pub client_id: Uuid,
    /// Padrão: rascunho.
    pub status: Option<ProjectStatus>,
}

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 201, description = "Projeto criado com código PRJ-XXXX", body = ProjectView),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Cliente informado não existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateProjectPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let input = ProjectRecord {
        name: payload.name.trim().to_string(),
        description: non_empty(payload.description),
        client_id: payload.client_id,
        status: payload.status.unwrap_or_default(),
    };

    let project = app_state
        .project_service
        .create_project(input)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(project)))
}

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Projetos, mais recentes primeiro", body = Vec<ProjectView>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let projects = app_state
        .project_service
        .list_projects()
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(projects)))
}

// GET /api/projects/{id}
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses(
        (status = 200, description = "Projeto com o nome do cliente", body = ProjectView),
        (status = 404, description = "Projeto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_project(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let project = app_state
        .project_service
        .get_project(id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(project)))
}

// POST /api/projects/{id}/measurements/start
#[utoipa::path(
    post,
    path = "/api/projects/{id}/measurements/start",
    tag = "Projects",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses(
        (status = 200, description = "Briefing concluído, projeto em medição", body = ProjectView),
        (status = 404, description = "Projeto não encontrado"),
        (status = 422, description = "Projeto sem ambientes")
    ),
    security(("api_jwt" = []))
)]
pub async fn start_measurements(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let project = app_state
        .project_service
        .start_measurements(id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(project)))
}

// GET /api/projects/{id}/report
#[utoipa::path(
    get,
    path = "/api/projects/{id}/report",
    tag = "Projects",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses(
        (status = 501, description = "Funcionalidade de PDF em desenvolvimento")
    ),
    security(("api_jwt" = []))
)]
pub async fn project_report(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app_state
        .project_service
        .report(id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::OK)
}
