// src/services.rs

pub mod auth;
pub mod client_service;
pub mod agenda_service;
pub mod project_service;
pub mod briefing_service;
pub mod measurement_service;
pub mod settings_service;
