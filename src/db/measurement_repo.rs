// src/db/measurement_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{
        db_utils::map_write_error,
        error::{AppError, Resource},
    },
    models::measurements::{
        point_label, wall_label, ElectricalPoint, ElectricalPointRecord, HydraulicPoint,
        HydraulicPointRecord, Opening, OpeningRecord, Wall, WallRecord,
    },
};

#[derive(Clone)]
pub struct MeasurementRepository {
    pool: PgPool,
}

impl MeasurementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, table: &str, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    //  PAREDES
    // =========================================================================

    /// Cria a parede com o próximo número do contador do ambiente (W1, W2...).
    pub async fn create_wall(&self, environment_id: Uuid, input: &WallRecord) -> Result<Wall, AppError> {
        let mut tx = self.pool.begin().await?;

        // O UPDATE trava a linha do ambiente: duas paredes simultâneas não pegam o mesmo número
        let seq: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE project_environments
            SET wall_seq = wall_seq + 1
            WHERE id = $1
            RETURNING wall_seq
            "#,
        )
        .bind(environment_id)
        .fetch_optional(&mut *tx)
        .await?;

        let seq = seq.ok_or(AppError::NotFound(Resource::Environment))?;

        let wall = sqlx::query_as::<_, Wall>(
            r#"
            INSERT INTO walls (environment_id, wall_number, seq, height, width, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(environment_id)
        .bind(wall_label(seq))
        .bind(seq)
        .bind(input.height)
        .bind(input.width)
        .bind(input.photo_url.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(wall)
    }

    pub async fn list_walls(&self, environment_id: Uuid) -> Result<Vec<Wall>, AppError> {
        let walls = sqlx::query_as::<_, Wall>(
            "SELECT * FROM walls WHERE environment_id = $1 ORDER BY seq ASC",
        )
        .bind(environment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(walls)
    }

    pub async fn find_wall(&self, id: Uuid) -> Result<Option<Wall>, AppError> {
        let wall = sqlx::query_as::<_, Wall>("SELECT * FROM walls WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(wall)
    }

    pub async fn delete_wall(&self, id: Uuid) -> Result<bool, AppError> {
        self.delete_by_id("walls", id).await
    }

    // =========================================================================
    //  ABERTURAS / PONTOS
    // =========================================================================

    pub async fn create_opening(&self, wall_id: Uuid, input: &OpeningRecord) -> Result<Opening, AppError> {
        sqlx::query_as::<_, Opening>(
            r#"
            INSERT INTO openings (
                wall_id, type, width, height, height_from_floor,
                molding_measurements, is_internal, distance_from_side, reference_side
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(wall_id)
        .bind(input.kind)
        .bind(input.width)
        .bind(input.height)
        .bind(input.height_from_floor)
        .bind(input.molding_measurements.as_deref())
        .bind(input.is_internal)
        .bind(input.distance_from_side)
        .bind(input.reference_side)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Resource::Wall))
    }

    pub async fn list_openings(&self, wall_id: Uuid) -> Result<Vec<Opening>, AppError> {
        let rows = sqlx::query_as::<_, Opening>(
            "SELECT * FROM openings WHERE wall_id = $1 ORDER BY created_at ASC",
        )
        .bind(wall_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_opening(&self, id: Uuid) -> Result<bool, AppError> {
        self.delete_by_id("openings", id).await
    }

    pub async fn create_hydraulic_point(
        &self,
        wall_id: Uuid,
        input: &HydraulicPointRecord,
    ) -> Result<HydraulicPoint, AppError> {
        sqlx::query_as::<_, HydraulicPoint>(
            r#"
            INSERT INTO hydraulic_points (wall_id, type, diameter, distance_from_side, height_from_floor)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(wall_id)
        .bind(input.kind)
        .bind(input.diameter.as_deref())
        .bind(input.distance_from_side)
        .bind(input.height_from_floor)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, Resource::Wall))
    }

    pub async fn list_hydraulic_points(&self, wall_id: Uuid) -> Result<Vec<HydraulicPoint>, AppError> {
        let rows = sqlx::query_as::<_, HydraulicPoint>(
            "SELECT * FROM hydraulic_points WHERE wall_id = $1 ORDER BY created_at ASC",
        )
        .bind(wall_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_hydraulic_point(&self, id: Uuid) -> Result<bool, AppError> {
        self.delete_by_id("hydraulic_points", id).await
    }

    /// Numera pelo contador (parede, prefixo): T1, T2, I1, D1...
    pub async fn create_electrical_point(
        &self,
        wall_id: Uuid,
        input: &ElectricalPointRecord,
    ) -> Result<ElectricalPoint, AppError> {
        let prefix = input.kind.prefix();
        let mut tx = self.pool.begin().await?;

        let seq: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO electrical_point_counters (wall_id, prefix, last_value)
            VALUES ($1, $2, 1)
            ON CONFLICT (wall_id, prefix)
            DO UPDATE SET last_value = electrical_point_counters.last_value + 1
            RETURNING last_value
            "#,
        )
        .bind(wall_id)
        .bind(prefix)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, Resource::Wall))?;

        let point = sqlx::query_as::<_, ElectricalPoint>(
            r#"
            INSERT INTO electrical_points (
                wall_id, type, point_number, height_from_floor, distance_from_side, reference_side
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(wall_id)
        .bind(input.kind)
        .bind(point_label(prefix, seq))
        .bind(input.height_from_floor)
        .bind(input.distance_from_side)
        .bind(input.reference_side)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(point)
    }

    pub async fn list_electrical_points(&self, wall_id: Uuid) -> Result<Vec<ElectricalPoint>, AppError> {
        let rows = sqlx::query_as::<_, ElectricalPoint>(
            "SELECT * FROM electrical_points WHERE wall_id = $1 ORDER BY created_at ASC",
        )
        .bind(wall_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete_electrical_point(&self, id: Uuid) -> Result<bool, AppError> {
        self.delete_by_id("electrical_points", id).await
    }
}
