// src/models/agenda.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::clients::NewClient;

// Mapeia o CREATE TYPE appointment_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    #[schema(example = "Cozinha")]
    pub environment_type: Option<String>,
    #[schema(value_type = String, example = "2025-03-10T14:30:00")]
    pub scheduled_date: NaiveDateTime,
    #[schema(value_type = Option<String>)]
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Agendamento com os dados do cliente embutidos (lista da agenda).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub appointment: Appointment,
    pub client_name: String,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
}

/// Cliente do agendamento: um já cadastrado ou um novo criado junto.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientSelection {
    Existing {
        #[serde(rename = "clientId")]
        client_id: Uuid,
    },
    New(NewClient),
}

// O que o repositório grava (já validado e com data/hora combinadas)
#[derive(Debug, Clone)]
pub struct AppointmentRecord {
    pub client_id: Uuid,
    pub environment_type: Option<String>,
    pub scheduled_date: NaiveDateTime,
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

// Formulário já interpretado, antes de saber qual cliente será vinculado
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub environment_type: Option<String>,
    pub scheduled_date: NaiveDateTime,
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

impl AppointmentDraft {
    pub fn for_client(self, client_id: Uuid) -> AppointmentRecord {
        AppointmentRecord {
            client_id,
            environment_type: self.environment_type,
            scheduled_date: self.scheduled_date,
            rescheduled_date: self.rescheduled_date,
            notes: self.notes,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppointmentChanges {
    pub environment_type: Option<String>,
    pub scheduled_date: NaiveDateTime,
    pub rescheduled_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub status: Option<AppointmentStatus>,
}

/// "HH:MM" ou "HH:MM:SS" -> horário.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_times() {
        assert_eq!(parse_time("14:30"), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("08:05:10"), NaiveTime::from_hms_opt(8, 5, 10));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn client_selection_is_tagged() {
        let existing: ClientSelection = serde_json::from_str(
            r#"{"kind":"existing","clientId":"6f1c1f5e-1d2b-4a7a-9a55-0b7c9a1b2c3d"}"#,
        )
        .unwrap();
        assert!(matches!(existing, ClientSelection::Existing { .. }));

        let new: ClientSelection =
            serde_json::from_str(r#"{"kind":"new","name":"João","phone":"119999"}"#).unwrap();
        match new {
            ClientSelection::New(c) => assert_eq!(c.name, "João"),
            _ => panic!("esperava cliente novo"),
        }
    }
}
