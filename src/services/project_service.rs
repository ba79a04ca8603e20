// src/services/project_service.rs

use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::{BriefingRepository, ProjectRepository},
    models::projects::{ProjectRecord, ProjectStatus, ProjectView},
};

#[derive(Clone)]
pub struct ProjectService {
    repo: ProjectRepository,
    briefing: BriefingRepository,
}

impl ProjectService {
    pub fn new(repo: ProjectRepository, briefing: BriefingRepository) -> Self {
        Self { repo, briefing }
    }

    pub async fn create_project(&self, input: ProjectRecord) -> Result<ProjectView, AppError> {
        let project = self.repo.create_project(&input).await?;
        tracing::info!("📁 Projeto {} criado ({})", project.code, project.id);
        self.get_project(project.id).await
    }

    /// Mais recentes primeiro, já com rótulo e cor do status.
    pub async fn list_projects(&self) -> Result<Vec<ProjectView>, AppError> {
        let rows = self.repo.list_projects().await?;
        Ok(rows.into_iter().map(ProjectView::from).collect())
    }

    pub async fn get_project(&self, id: Uuid) -> Result<ProjectView, AppError> {
        self.repo
            .find_project(id)
            .await?
            .map(ProjectView::from)
            .ok_or(AppError::NotFound(Resource::Project))
    }

    /// Fecha o briefing: exige ao menos um ambiente e passa o projeto para "medindo".
    pub async fn start_measurements(&self, id: Uuid) -> Result<ProjectView, AppError> {
        self.get_project(id).await?;

        if self.briefing.list_environments(id).await?.is_empty() {
            return Err(AppError::EnvironmentRequired);
        }

        self.repo
            .update_status(id, ProjectStatus::Measuring)
            .await?
            .ok_or(AppError::NotFound(Resource::Project))?;
        tracing::info!("📐 Projeto {} em medição", id);

        self.get_project(id).await
    }

    // Relatório/croqui em PDF ainda não existe
    pub async fn report(&self, id: Uuid) -> Result<(), AppError> {
        self.get_project(id).await?;
        Err(AppError::NotImplemented("PDF"))
    }
}
