// src/db.rs

pub mod user_repo;
pub use user_repo::UserRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod agenda_repo;
pub use agenda_repo::AppointmentRepository;
pub mod project_repo;
pub use project_repo::ProjectRepository;
pub mod briefing_repo;
pub use briefing_repo::BriefingRepository;
pub mod measurement_repo;
pub use measurement_repo::MeasurementRepository;
