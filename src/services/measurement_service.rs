// src/services/measurement_service.rs

use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::{BriefingRepository, MeasurementRepository},
    models::measurements::{
        ElectricalPoint, ElectricalPointRecord, HydraulicPoint, HydraulicPointRecord, Opening,
        OpeningRecord, Wall, WallDetail, WallRecord,
    },
};

#[derive(Clone)]
pub struct MeasurementService {
    repo: MeasurementRepository,
    briefing: BriefingRepository,
}

impl MeasurementService {
    pub fn new(repo: MeasurementRepository, briefing: BriefingRepository) -> Self {
        Self { repo, briefing }
    }

    // =========================================================================
    //  PAREDES
    // =========================================================================

    pub async fn add_wall(&self, environment_id: Uuid, input: WallRecord) -> Result<Wall, AppError> {
        self.ensure_environment(environment_id).await?;
        let wall = self.repo.create_wall(environment_id, &input).await?;
        tracing::info!("🧱 Parede {} criada no ambiente {}", wall.wall_number, environment_id);
        Ok(wall)
    }

    /// Paredes na ordem de criação (W1, W2, ... W10).
    pub async fn list_walls(&self, environment_id: Uuid) -> Result<Vec<Wall>, AppError> {
        self.ensure_environment(environment_id).await?;
        self.repo.list_walls(environment_id).await
    }

    pub async fn wall_detail(&self, id: Uuid) -> Result<WallDetail, AppError> {
        let wall = self.ensure_wall(id).await?;
        let (openings, hydraulic_points, electrical_points) = tokio::try_join!(
            self.repo.list_openings(id),
            self.repo.list_hydraulic_points(id),
            self.repo.list_electrical_points(id),
        )?;

        Ok(WallDetail { wall, openings, hydraulic_points, electrical_points })
    }

    pub async fn delete_wall(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        confirm(confirmed)?;
        if !self.repo.delete_wall(id).await? {
            return Err(AppError::NotFound(Resource::Wall));
        }
        tracing::info!("🗑️ Parede removida: {}", id);
        Ok(())
    }

    // =========================================================================
    //  ABERTURAS / PONTOS
    // =========================================================================

    pub async fn add_opening(&self, wall_id: Uuid, input: OpeningRecord) -> Result<Opening, AppError> {
        self.ensure_wall(wall_id).await?;
        self.repo.create_opening(wall_id, &input).await
    }

    pub async fn delete_opening(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        confirm(confirmed)?;
        if !self.repo.delete_opening(id).await? {
            return Err(AppError::NotFound(Resource::Opening));
        }
        Ok(())
    }

    pub async fn add_hydraulic_point(
        &self,
        wall_id: Uuid,
        input: HydraulicPointRecord,
    ) -> Result<HydraulicPoint, AppError> {
        self.ensure_wall(wall_id).await?;
        self.repo.create_hydraulic_point(wall_id, &input).await
    }

    pub async fn delete_hydraulic_point(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        confirm(confirmed)?;
        if !self.repo.delete_hydraulic_point(id).await? {
            return Err(AppError::NotFound(Resource::HydraulicPoint));
        }
        Ok(())
    }

    pub async fn add_electrical_point(
        &self,
        wall_id: Uuid,
        input: ElectricalPointRecord,
    ) -> Result<ElectricalPoint, AppError> {
        self.ensure_wall(wall_id).await?;
        let point = self.repo.create_electrical_point(wall_id, &input).await?;
        tracing::info!("🔌 Ponto {} criado na parede {}", point.point_number, wall_id);
        Ok(point)
    }

    pub async fn delete_electrical_point(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        confirm(confirmed)?;
        if !self.repo.delete_electrical_point(id).await? {
            return Err(AppError::NotFound(Resource::ElectricalPoint));
        }
        Ok(())
    }

    async fn ensure_environment(&self, id: Uuid) -> Result<(), AppError> {
        match self.briefing.find_environment(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(Resource::Environment)),
        }
    }

    async fn ensure_wall(&self, id: Uuid) -> Result<Wall, AppError> {
        self.repo
            .find_wall(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Wall))
    }
}

fn confirm(confirmed: bool) -> Result<(), AppError> {
    if confirmed { Ok(()) } else { Err(AppError::ConfirmationRequired) }
}
