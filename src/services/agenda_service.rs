// src/services/agenda_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{AppError, Resource},
    db::{AppointmentRepository, ClientRepository},
    models::agenda::{AppointmentChanges, AppointmentDetail, AppointmentDraft, ClientSelection},
};

#[derive(Clone)]
pub struct AgendaService {
    repo: AppointmentRepository,
    clients: ClientRepository,
}

impl AgendaService {
    pub fn new(repo: AppointmentRepository, clients: ClientRepository) -> Self {
        Self { repo, clients }
    }

    /// Agenda uma visita. No caminho "cliente novo" o cliente é criado antes;
    /// se isso falhar, nada é gravado.
    pub async fn create_appointment(
        &self,
        client: ClientSelection,
        draft: AppointmentDraft,
    ) -> Result<AppointmentDetail, AppError> {
        let client_id = match client {
            ClientSelection::Existing { client_id } => client_id,
            ClientSelection::New(new_client) => {
                new_client.validate()?;
                let created = self.clients.create_client(&new_client).await?;
                tracing::info!("🧑 Cliente criado pelo agendamento: {}", created.id);
                created.id
            }
        };

        let appointment = self.repo.create_appointment(&draft.for_client(client_id)).await?;
        tracing::info!("📅 Agendamento criado: {} para {}", appointment.id, appointment.scheduled_date);

        self.get_appointment(appointment.id).await
    }

    pub async fn list_appointments(&self) -> Result<Vec<AppointmentDetail>, AppError> {
        self.repo.list_appointments().await
    }

    pub async fn get_appointment(&self, id: Uuid) -> Result<AppointmentDetail, AppError> {
        self.repo
            .find_appointment(id)
            .await?
            .ok_or(AppError::NotFound(Resource::Appointment))
    }

    pub async fn update_appointment(
        &self,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<AppointmentDetail, AppError> {
        self.repo
            .update_appointment(id, &changes)
            .await?
            .ok_or(AppError::NotFound(Resource::Appointment))?;

        self.get_appointment(id).await
    }

    pub async fn delete_appointment(&self, id: Uuid, confirmed: bool) -> Result<(), AppError> {
        if !confirmed {
            return Err(AppError::ConfirmationRequired);
        }
        if !self.repo.delete_appointment(id).await? {
            return Err(AppError::NotFound(Resource::Appointment));
        }
        tracing::info!("🗑️ Agendamento removido: {}", id);
        Ok(())
    }
}
