// src/services/briefing_service.rs

use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::{BriefingRepository, ProjectRepository},
    models::briefing::{same_module_name, Module, ModuleRecord, ProjectEnvironment},
};

#[derive(Clone)]
pub struct BriefingService {
    repo: BriefingRepository,
    projects: ProjectRepository,
}

impl BriefingService {
    pub fn new(repo: BriefingRepository, projects: ProjectRepository) -> Self {
        Self { repo, projects }
    }

    // =========================================================================
    //  AMBIENTES
    // =========================================================================

    pub async fn add_environment(
        &self,
        project_id: Uuid,
        name: &str,
        kind: Option<&str>,
    ) -> Result<ProjectEnvironment, AppError> {
        self.ensure_project(project_id).await?;
        let env = self.repo.create_environment(project_id, name.trim(), kind).await?;
        tracing::info!("🏠 Ambiente '{}' adicionado ao projeto {}", env.name, project_id);
        Ok(env)
    }

    pub async fn list_environments(&self, project_id: Uuid) -> Result<Vec<ProjectEnvironment>, AppError> {
        self.ensure_project(project_id).await?;
        self.repo.list_environments(project_id).await
    }

    pub async fn delete_environment(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        if !confirmed {
            return Err(AppError::ConfirmationRequired);
        }
        if !self.repo.delete_environment(id).await? {
            return Err(AppError::NotFound(Resource::Environment));
        }
        tracing::info!("🗑️ Ambiente removido: {}", id);
        Ok(())
    }

    // =========================================================================
    //  MÓDULOS
    // =========================================================================

    /// Cria o módulo. Nome repetido entre os irmãos (sem diferenciar maiúsculas) é recusado.
    pub async fn add_module(&self, environment_id: Uuid, input: ModuleRecord) -> Result<Module, AppError> {
        self.ensure_environment(environment_id).await?;

        let siblings = self.repo.list_modules(environment_id).await?;
        if siblings.iter().any(|m| same_module_name(&m.name, &input.name)) {
            return Err(AppError::DuplicateModule(input.name));
        }

        let module = self.repo.create_module(environment_id, &input).await?;
        tracing::info!("🧱 Módulo '{}' criado no ambiente {}", module.name, environment_id);
        Ok(module)
    }

    // A edição não checa duplicidade: renomear para um nome já usado é aceito
    pub async fn update_module(&self, id: Uuid, input: ModuleRecord) -> Result<Module, AppError> {
        self.repo
            .update_module(id, &input)
            .await?
            .ok_or(AppError::NotFound(Resource::Module))
    }

    pub async fn list_modules(&self, environment_id: Uuid) -> Result<Vec<Module>, AppError> {
        self.ensure_environment(environment_id).await?;
        self.repo.list_modules(environment_id).await
    }

    pub async fn delete_module(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        if !confirmed {
            return Err(AppError::ConfirmationRequired);
        }
        if !self.repo.delete_module(id).await? {
            return Err(AppError::NotFound(Resource::Module));
        }
        tracing::info!("🗑️ Módulo removido: {}", id);
        Ok(())
    }

    async fn ensure_project(&self, id: Uuid) -> Result<(), AppError> {
        match self.projects.find_project(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(Resource::Project)),
        }
    }

    async fn ensure_environment(&self, id: Uuid) -> Result<(), AppError> {
        match self.repo.find_environment(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(Resource::Environment)),
        }
    }
}
