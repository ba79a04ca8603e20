// src/models.rs

pub mod auth;
pub mod clients;
pub mod agenda;
pub mod projects;
pub mod briefing;
pub mod measurements;
pub mod settings;
