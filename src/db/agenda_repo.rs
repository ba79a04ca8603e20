// src/db/agenda_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        db_utils::map_write_error,
        error::{AppError, Resource},
    },
    models::agenda::{Appointment, AppointmentChanges, AppointmentDetail, AppointmentRecord},
};

const DETAIL_SELECT: &str = r#"
    SELECT
        a.*,
        c.name AS client_name,
        c.phone AS client_phone,
        c.address AS client_address
    FROM appointments a
    INNER JOIN clients c ON c.id = a.client_id
"#;

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_appointment(&self, input: &AppointmentRecord) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (
                client_id, environment_type, scheduled_date, rescheduled_date, notes, status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(input.client_id)
        .bind(input.environment_type.as_deref())
        .bind(input.scheduled_date)
        .bind(input.rescheduled_date)
        .bind(input.notes.as_deref())
        .bind(input.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Resource::Client))
    }

    /// Sobrescreve os campos editáveis. O cliente vinculado nunca muda aqui.
    pub async fn update_appointment(
        &self,
        id: Uuid,
        changes: &AppointmentChanges,
    ) -> Result<Option<Appointment>, AppError> {
        let updated = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET environment_type = $2,
                scheduled_date = $3,
                rescheduled_date = $4,
                notes = $5,
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.environment_type.as_deref())
        .bind(changes.scheduled_date)
        .bind(changes.rescheduled_date)
        .bind(changes.notes.as_deref())
        .bind(changes.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Agenda inteira, por data marcada (mais cedo primeiro).
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentDetail>, AppError> {
        let sql = format!("{} ORDER BY a.scheduled_date ASC", DETAIL_SELECT);
        let rows = sqlx::query_as::<_, AppointmentDetail>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_appointment(&self, id: Uuid) -> Result<Option<AppointmentDetail>, AppError> {
        let sql = format!("{} WHERE a.id = $1", DETAIL_SELECT);
        let row = sqlx::query_as::<_, AppointmentDetail>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
