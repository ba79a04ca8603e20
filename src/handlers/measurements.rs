// src/handlers/measurements.rs

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
        measure::{fits_column, measure, MeasureInput},
        validation::non_empty,
    },
    config::AppState,
    handlers::DeleteConfirmation,
    middleware::i18n::Locale,
    models::measurements::{
        ElectricalPoint, ElectricalPointRecord, ElectricalPointType, HydraulicPoint,
        HydraulicPointRecord, HydraulicPointType, Opening, OpeningRecord, OpeningType,
        ReferenceSide, Wall, WallDetail, WallRecord,
    },
};

// =============================================================================
//  PAYLOADS
// =============================================================================
// Medidas aceitam número ou texto ("2,50"). O que não dá para ler vira null;
// o que não cabe na coluna é recusado.

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WallPayload {
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub height: Option<MeasureInput>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub width: Option<MeasureInput>,
    pub photo_url: Option<String>,
}

impl From<WallPayload> for WallRecord {
    fn from(p: WallPayload) -> Self {
        Self {
            height: measure(&p.height),
            width: measure(&p.width),
            photo_url: non_empty(p.photo_url),
        }
    }
}

fn default_internal() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpeningPayload {
    #[serde(rename = "type")]
    pub kind: OpeningType,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub width: Option<MeasureInput>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub height: Option<MeasureInput>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub height_from_floor: Option<MeasureInput>,
    pub molding_measurements: Option<String>,
    #[serde(default = "default_internal")]
    pub is_internal: bool,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub distance_from_side: Option<MeasureInput>,
    #[serde(default)]
    pub reference_side: ReferenceSide,
}

impl From<OpeningPayload> for OpeningRecord {
    fn from(p: OpeningPayload) -> Self {
        Self {
            kind: p.kind,
            width: measure(&p.width),
            height: measure(&p.height),
            height_from_floor: measure(&p.height_from_floor),
            molding_measurements: non_empty(p.molding_measurements),
            is_internal: p.is_internal,
            distance_from_side: measure(&p.distance_from_side),
            reference_side: p.reference_side,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HydraulicPointPayload {
    #[serde(rename = "type")]
    pub kind: HydraulicPointType,
    #[schema(example = "3/4\"")]
    pub diameter: Option<String>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub distance_from_side: Option<MeasureInput>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub height_from_floor: Option<MeasureInput>,
}

impl From<HydraulicPointPayload> for HydraulicPointRecord {
    fn from(p: HydraulicPointPayload) -> Self {
        Self {
            kind: p.kind,
            diameter: non_empty(p.diameter),
            distance_from_side: measure(&p.distance_from_side),
            height_from_floor: measure(&p.height_from_floor),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectricalPointPayload {
    #[serde(rename = "type")]
    pub kind: ElectricalPointType,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub height_from_floor: Option<MeasureInput>,
    #[validate(custom(function = "fits_column", message = "Medida acima do limite (9999999,999)"))]
    pub distance_from_side: Option<MeasureInput>,
    #[serde(default)]
    pub reference_side: ReferenceSide,
}

impl From<ElectricalPointPayload> for ElectricalPointRecord {
    fn from(p: ElectricalPointPayload) -> Self {
        Self {
            kind: p.kind,
            height_from_floor: measure(&p.height_from_floor),
            distance_from_side: measure(&p.distance_from_side),
            reference_side: p.reference_side,
        }
    }
}

// =============================================================================
//  PAREDES
// =============================================================================

// POST /api/environments/{id}/walls
#[utoipa::path(
    post,
    path = "/api/environments/{id}/walls",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID do ambiente")),
    request_body = WallPayload,
    responses(
        (status = 201, description = "Parede criada com o próximo número (W1, W2...)", body = Wall),
        (status = 400, description = "Medida acima do limite da coluna"),
        (status = 404, description = "Ambiente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_wall(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(environment_id): Path<Uuid>,
    Json(payload): Json<WallPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let wall = app_state
        .measurement_service
        .add_wall(environment_id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(wall)))
}

// GET /api/environments/{id}/walls
#[utoipa::path(
    get,
    path = "/api/environments/{id}/walls",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID do ambiente")),
    responses(
        (status = 200, description = "Paredes do ambiente", body = Vec<Wall>),
        (status = 404, description = "Ambiente não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_walls(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(environment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let walls = app_state
        .measurement_service
        .list_walls(environment_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(walls)))
}

// GET /api/walls/{id}
#[utoipa::path(
    get,
    path = "/api/walls/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da parede")),
    responses(
        (status = 200, description = "Parede com aberturas e pontos", body = WallDetail),
        (status = 404, description = "Parede não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_wall(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = app_state
        .measurement_service
        .wall_detail(id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(detail)))
}

// DELETE /api/walls/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/walls/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da parede"), DeleteConfirmation),
    responses(
        (status = 204, description = "Parede removida com aberturas e pontos"),
        (status = 404, description = "Parede não encontrada"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_wall(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .measurement_service
        .delete_wall(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ABERTURAS
// =============================================================================

// POST /api/walls/{id}/openings
#[utoipa::path(
    post,
    path = "/api/walls/{id}/openings",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da parede")),
    request_body = OpeningPayload,
    responses(
        (status = 201, description = "Abertura registrada", body = Opening),
        (status = 400, description = "Medida acima do limite da coluna"),
        (status = 404, description = "Parede não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_opening(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(wall_id): Path<Uuid>,
    Json(payload): Json<OpeningPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let opening = app_state
        .measurement_service
        .add_opening(wall_id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(opening)))
}

// DELETE /api/openings/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/openings/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da abertura"), DeleteConfirmation),
    responses(
        (status = 204, description = "Abertura removida"),
        (status = 404, description = "Abertura não encontrada"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_opening(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .measurement_service
        .delete_opening(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PONTOS HIDRÁULICOS
// =============================================================================

// POST /api/walls/{id}/hydraulic-points
#[utoipa::path(
    post,
    path = "/api/walls/{id}/hydraulic-points",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da parede")),
    request_body = HydraulicPointPayload,
    responses(
        (status = 201, description = "Ponto hidráulico registrado", body = HydraulicPoint),
        (status = 400, description = "Medida acima do limite da coluna"),
        (status = 404, description = "Parede não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_hydraulic_point(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(wall_id): Path<Uuid>,
    Json(payload): Json<HydraulicPointPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let point = app_state
        .measurement_service
        .add_hydraulic_point(wall_id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(point)))
}

// DELETE /api/hydraulic-points/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/hydraulic-points/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID do ponto"), DeleteConfirmation),
    responses(
        (status = 204, description = "Ponto removido"),
        (status = 404, description = "Ponto não encontrado"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_hydraulic_point(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .measurement_service
        .delete_hydraulic_point(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PONTOS ELÉTRICOS
// =============================================================================

// POST /api/walls/{id}/electrical-points
#[utoipa::path(
    post,
    path = "/api/walls/{id}/electrical-points",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID da parede")),
    request_body = ElectricalPointPayload,
    responses(
        (status = 201, description = "Ponto elétrico numerado por tipo (T1, I1, D1...)", body = ElectricalPoint),
        (status = 400, description = "Medida acima do limite da coluna"),
        (status = 404, description = "Parede não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_electrical_point(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(wall_id): Path<Uuid>,
    Json(payload): Json<ElectricalPointPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let point = app_state
        .measurement_service
        .add_electrical_point(wall_id, payload.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(point)))
}

// DELETE /api/electrical-points/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/electrical-points/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "ID do ponto"), DeleteConfirmation),
    responses(
        (status = 204, description = "Ponto removido"),
        (status = 404, description = "Ponto não encontrado"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_electrical_point(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .measurement_service
        .delete_electrical_point(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
