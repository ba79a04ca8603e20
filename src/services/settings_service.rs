// src/services/settings_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{AppError, Resource},
    db::UserRepository,
    models::settings::{PreferencesView, UpdatePreferencesRequest},
};

#[derive(Clone)]
pub struct SettingsService {
    repo: UserRepository,
}

impl SettingsService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn get_preferences(&self, user_id: Uuid) -> Result<PreferencesView, AppError> {
        self.repo
            .get_preferences(user_id)
            .await?
            .map(PreferencesView::from)
            .ok_or(AppError::NotFound(Resource::Preferences))
    }

    /// Respostas do quiz. Gravar conclui o onboarding.
    pub async fn save_preferences(
        &self,
        user_id: Uuid,
        input: UpdatePreferencesRequest,
    ) -> Result<PreferencesView, AppError> {
        input.validate()?;
        let prefs = self.repo.save_preferences(user_id, &input).await?;
        tracing::info!("⚙️ Preferências salvas para {}", user_id);
        Ok(prefs.into())
    }
}
