// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::common;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::session,
        handlers::auth::get_me,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,

        // --- Clients ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,

        // --- Agenda ---
        handlers::agenda::create_appointment,
        handlers::agenda::list_appointments,
        handlers::agenda::get_appointment,
        handlers::agenda::update_appointment,
        handlers::agenda::delete_appointment,

        // --- Projects ---
        handlers::projects::create_project,
        handlers::projects::list_projects,
        handlers::projects::get_project,
        handlers::projects::start_measurements,
        handlers::projects::project_report,

        // --- Briefing ---
        handlers::briefing::create_environment,
        handlers::briefing::list_environments,
        handlers::briefing::delete_environment,
        handlers::briefing::create_module,
        handlers::briefing::list_modules,
        handlers::briefing::update_module,
        handlers::briefing::delete_module,

        // --- Measurements ---
        handlers::measurements::create_wall,
        handlers::measurements::list_walls,
        handlers::measurements::get_wall,
        handlers::measurements::delete_wall,
        handlers::measurements::create_opening,
        handlers::measurements::delete_opening,
        handlers::measurements::create_hydraulic_point,
        handlers::measurements::delete_hydraulic_point,
        handlers::measurements::create_electrical_point,
        handlers::measurements::delete_electrical_point,
    ),
    components(
        schemas(
            common::measure::MeasureInput,

            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,
            models::auth::SessionStep,
            models::auth::SessionResponse,

            // --- Settings ---
            models::settings::MaterialType,
            models::settings::MeasurementUnit,
            models::settings::UserPreferences,
            models::settings::PreferencesView,
            models::settings::UpdatePreferencesRequest,

            // --- Clients / Agenda ---
            models::clients::Client,
            models::clients::NewClient,
            models::agenda::AppointmentStatus,
            models::agenda::Appointment,
            models::agenda::AppointmentDetail,
            models::agenda::ClientSelection,

            // --- Projects ---
            models::projects::ProjectStatus,
            models::projects::Project,
            models::projects::ProjectView,

            // --- Briefing ---
            models::briefing::DoorType,
            models::briefing::CountertopType,
            models::briefing::Hardware,
            models::briefing::ProjectEnvironment,
            models::briefing::Module,

            // --- Measurements ---
            models::measurements::OpeningType,
            models::measurements::ReferenceSide,
            models::measurements::HydraulicPointType,
            models::measurements::ElectricalPointType,
            models::measurements::Wall,
            models::measurements::Opening,
            models::measurements::HydraulicPoint,
            models::measurements::ElectricalPoint,
            models::measurements::WallDetail,

            // --- Payloads ---
            handlers::agenda::CreateAppointmentPayload,
            handlers::agenda::UpdateAppointmentPayload,
            handlers::projects::CreateProjectPayload,
            handlers::briefing::CreateEnvironmentPayload,
            handlers::briefing::ModulePayload,
            handlers::measurements::WallPayload,
            handlers::measurements::OpeningPayload,
            handlers::measurements::HydraulicPointPayload,
            handlers::measurements::ElectricalPointPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Login, registro e fluxo de sessão"),
        (name = "Settings", description = "Preferências do quiz de boas-vindas"),
        (name = "Clients", description = "Cadastro de clientes"),
        (name = "Agenda", description = "Visitas agendadas"),
        (name = "Projects", description = "Projetos e status"),
        (name = "Briefing", description = "Ambientes e módulos do projeto"),
        (name = "Measurements", description = "Paredes, aberturas e pontos hidráulicos/elétricos")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
