// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::middleware::i18n::Locale;

// Recursos que podem faltar (404) ou ser referenciados por FK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Client,
    Appointment,
    Project,
    Environment,
    Module,
    Wall,
    Opening,
    HydraulicPoint,
    ElectricalPoint,
    Preferences,
}

impl Resource {
    pub fn label(&self, lang: &str) -> &'static str {
        let en = lang == "en";
        match self {
            Resource::User => if en { "User" } else { "Usuário" },
            Resource::Client => if en { "Client" } else { "Cliente" },
            Resource::Appointment => if en { "Appointment" } else { "Agendamento" },
            Resource::Project => if en { "Project" } else { "Projeto" },
            Resource::Environment => if en { "Environment" } else { "Ambiente" },
            Resource::Module => if en { "Module" } else { "Módulo" },
            Resource::Wall => if en { "Wall" } else { "Parede" },
            Resource::Opening => if en { "Opening" } else { "Abertura" },
            Resource::HydraulicPoint => if en { "Hydraulic point" } else { "Ponto hidráulico" },
            Resource::ElectricalPoint => if en { "Electrical point" } else { "Ponto elétrico" },
            Resource::Preferences => if en { "Preferences" } else { "Preferências" },
        }
    }

    // Concordância do particípio em português
    fn pt_ending(&self) -> &'static str {
        match self {
            Resource::Wall | Resource::Opening => "a",
            Resource::Preferences => "as",
            _ => "o",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("{0:?} não encontrado")]
    NotFound(Resource),

    // FK apontando para um registro inexistente
    #[error("Referência inválida para {0:?}")]
    InvalidReference(Resource),

    #[error("Módulo duplicado: {0}")]
    DuplicateModule(String),

    #[error("Confirmação de exclusão ausente")]
    ConfirmationRequired,

    #[error("Projeto sem ambientes")]
    EnvironmentRequired,

    #[error("Funcionalidade não implementada: {0}")]
    NotImplemented(&'static str),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// A resposta que vai para o cliente (toast)
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DuplicateModule(_) => StatusCode::CONFLICT,
            AppError::ConfirmationRequired => StatusCode::PRECONDITION_REQUIRED,
            AppError::EnvironmentRequired => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converte o erro numa resposta com a mensagem no idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let lang = locale.0.as_str();
        let en = lang == "en";

        let (error, details) = match self {
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                let msg = if en { "One or more fields are invalid." } else { "Um ou mais campos são inválidos." };
                (msg.to_string(), Some(Value::Object(details)))
            }
            AppError::EmailAlreadyExists => {
                (if en { "This e-mail is already in use." } else { "Este e-mail já está em uso." }.to_string(), None)
            }
            AppError::InvalidCredentials => {
                (if en { "Invalid e-mail or password." } else { "E-mail ou senha inválidos." }.to_string(), None)
            }
            AppError::InvalidToken => (
                if en { "Invalid or missing authentication token." } else { "Token de autenticação inválido ou ausente." }
                    .to_string(),
                None,
            ),
            AppError::UserNotFound => {
                (if en { "User not found." } else { "Usuário não encontrado." }.to_string(), None)
            }
            AppError::NotFound(resource) => {
                let msg = if en {
                    format!("{} not found.", resource.label(lang))
                } else {
                    format!("{} não encontrad{}.", resource.label(lang), resource.pt_ending())
                };
                (msg, None)
            }
            AppError::InvalidReference(resource) => {
                let msg = if en {
                    format!("{} referenced does not exist.", resource.label(lang))
                } else {
                    format!("{} informad{} não existe.", resource.label(lang), resource.pt_ending())
                };
                (msg, None)
            }
            AppError::DuplicateModule(name) => {
                let msg = if en {
                    "This module already exists in this environment."
                } else {
                    "Este módulo já existe neste ambiente"
                };
                (msg.to_string(), Some(json!({ "name": name })))
            }
            AppError::ConfirmationRequired => (
                if en { "Deletion must be confirmed (confirm=true)." } else { "Confirme a exclusão (confirm=true)." }
                    .to_string(),
                None,
            ),
            AppError::EnvironmentRequired => (
                if en {
                    "Add at least one environment before continuing."
                } else {
                    "Adicione pelo menos um ambiente antes de continuar"
                }
                .to_string(),
                None,
            ),
            AppError::NotImplemented(feature) => {
                let msg = if en {
                    format!("{} feature under development", feature)
                } else {
                    format!("Funcionalidade de {} em desenvolvimento", feature)
                };
                (msg, None)
            }
            AppError::DatabaseError(e) => {
                tracing::error!("Erro de banco de dados: {}", e);
                let backend = match e {
                    sqlx::Error::Database(db_err) => db_err.message().to_string(),
                    other => other.to_string(),
                };
                let msg = if en { "Database error." } else { "Erro ao acessar o banco de dados." };
                (msg.to_string(), Some(json!({ "message": backend })))
            }
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (if en { "An unexpected error occurred." } else { "Ocorreu um erro inesperado." }.to_string(), None)
            }
        };

        ApiError { status: self.status(), error, details }
    }
}

// Fora dos handlers (middleware) respondemos no idioma padrão
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}
