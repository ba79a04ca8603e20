// src/services/client_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{AppError, Resource},
    db::ClientRepository,
    models::clients::{Client, NewClient},
};

#[derive(Clone)]
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    pub fn new(repo: ClientRepository) -> Self {
        Self { repo }
    }

    pub async fn create_client(&self, input: NewClient) -> Result<Client, AppError> {
        input.validate()?;
        let client = self.repo.create_client(&input).await?;
        tracing::info!("🧑 Cliente cadastrado: {} ({})", client.name, client.id);
        Ok(client)
    }

    /// Todos os clientes, por nome.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repo.list_clients().await
    }

    pub async fn get_client(&self, id: Uuid) -> Result<Client, AppError> {
        self.repo
            .find_client(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Client))
    }
}
