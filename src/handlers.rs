// src/handlers.rs

use serde::Deserialize;
use utoipa::IntoParams;

pub mod auth;
pub mod clients;
pub mod agenda;
pub mod projects;
pub mod briefing;
pub mod measurements;
pub mod settings;

/// `?confirm=true`: toda exclusão precisa ser confirmada.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub confirm: bool,
}
