// src/models/clients.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    #[schema(example = "João da Silva")]
    pub name: String,
    #[schema(example = "(11) 98888-7777")]
    pub phone: Option<String>,
    #[schema(example = "Rua das Acácias, 45")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[validate(custom(function = "not_blank", message = "Nome do cliente é obrigatório"))]
    #[schema(example = "João da Silva")]
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}
