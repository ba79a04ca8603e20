// src/handlers/agenda.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::{
        error::{ApiError, AppError},
        validation::{field_error, non_empty},
    },
    config::AppState,
    handlers::DeleteConfirmation,
    middleware::i18n::Locale,
    models::agenda::{
        combine, parse_time, AppointmentChanges, AppointmentDetail, AppointmentDraft,
        AppointmentStatus, ClientSelection,
    },
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    /// Cliente já cadastrado (`kind: existing`) ou novo (`kind: new`).
    pub client: ClientSelection,
    #[schema(example = "Cozinha")]
    pub environment_type: Option<String>,
    #[schema(value_type = String, example = "2025-03-10")]
    pub scheduled_date: NaiveDate,
    #[schema(example = "14:30")]
    pub scheduled_time: String,
    #[schema(value_type = Option<String>, example = "2025-03-12T09:00:00")]
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentPayload {
    pub environment_type: Option<String>,
    #[schema(value_type = String, example = "2025-03-10")]
    pub scheduled_date: NaiveDate,
    #[schema(example = "14:30")]
    pub scheduled_time: String,
    #[schema(value_type = Option<String>)]
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    /// Omitido = mantém o status atual.
    pub status: Option<AppointmentStatus>,
}

// Data do formulário + "HH:MM" -> timestamp local
fn scheduled_at(date: NaiveDate, time: &str) -> Result<NaiveDateTime, AppError> {
    parse_time(time)
        .map(|t| combine(date, t))
        .ok_or_else(|| AppError::ValidationError(field_error("scheduledTime", "Horário inválido")))
}

// =============================================================================
//  ROTAS
// =============================================================================

// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Agenda",
    request_body = CreateAppointmentPayload,
    responses(
        (status = 201, description = "Agendamento criado", body = AppointmentDetail),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Cliente informado não existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let scheduled_date = scheduled_at(payload.scheduled_date, &payload.scheduled_time)
        .map_err(|e| e.to_api_error(&locale))?;

    let draft = AppointmentDraft {
        environment_type: non_empty(payload.environment_type),
        scheduled_date,
        rescheduled_date: payload.rescheduled_date,
        notes: non_empty(payload.notes),
        status: AppointmentStatus::default(),
    };

    let appointment = app_state
        .agenda_service
        .create_appointment(payload.client, draft)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// GET /api/appointments
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Agenda",
    responses(
        (status = 200, description = "Agenda por data (mais cedo primeiro)", body = Vec<AppointmentDetail>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let rows = app_state
        .agenda_service
        .list_appointments()
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/appointments/{id}
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = "Agenda",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento", body = AppointmentDetail),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = app_state
        .agenda_service
        .get_appointment(id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(row)))
}

// PUT /api/appointments/{id}
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "Agenda",
    params(("id" = Uuid, Path, description = "ID do agendamento")),
    request_body = UpdateAppointmentPayload,
    responses(
        (status = 200, description = "Agendamento atualizado", body = AppointmentDetail),
        (status = 404, description = "Agendamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let scheduled_date = scheduled_at(payload.scheduled_date, &payload.scheduled_time)
        .map_err(|e| e.to_api_error(&locale))?;

    let changes = AppointmentChanges {
        environment_type: non_empty(payload.environment_type),
        scheduled_date,
        rescheduled_date: payload.rescheduled_date,
        notes: non_empty(payload.notes),
        status: payload.status,
    };

    let row = app_state
        .agenda_service
        .update_appointment(id, changes)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(row)))
}

// DELETE /api/appointments/{id}?confirm=true
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Agenda",
    params(
        ("id" = Uuid, Path, description = "ID do agendamento"),
        DeleteConfirmation
    ),
    responses(
        (status = 204, description = "Agendamento removido"),
        (status = 404, description = "Agendamento não encontrado"),
        (status = 428, description = "Exclusão não confirmada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
    Query(confirmation): Query<DeleteConfirmation>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .agenda_service
        .delete_appointment(id, confirmation.confirm)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
