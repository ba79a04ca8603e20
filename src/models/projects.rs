// src/models/projects.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Briefing,
    Measuring,
    AwaitingQuote,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Rascunho",
            ProjectStatus::Briefing => "Em Briefing",
            ProjectStatus::Measuring => "Medindo",
            ProjectStatus::AwaitingQuote => "Aguardando Orçamento",
            ProjectStatus::Completed => "Finalizado",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ProjectStatus::Briefing => "blue",
            ProjectStatus::Measuring => "yellow",
            ProjectStatus::AwaitingQuote => "orange",
            ProjectStatus::Completed => "green",
            ProjectStatus::Draft => "gray",
        }
    }
}

/// Código de exibição gerado a partir da sequência do banco.
pub fn project_code(seq: i64) -> String {
    format!("PRJ-{:04}", seq)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[schema(example = "PRJ-0042")]
    pub code: String,
    #[schema(example = "Cozinha planejada - Ap. 32")]
    pub name: String,
    pub description: Option<String>,
    pub client_id: Uuid,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProjectWithClient {
    #[sqlx(flatten)]
    pub project: Project,
    pub client_name: Option<String>,
}

/// Projeto pronto para a listagem: cliente e rótulo/cor do status.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub client_name: Option<String>,
    #[schema(example = "Em Briefing")]
    pub status_label: &'static str,
    #[schema(example = "blue")]
    pub status_color: &'static str,
}

impl From<ProjectWithClient> for ProjectView {
    fn from(row: ProjectWithClient) -> Self {
        let status = row.project.status;
        Self {
            project: row.project,
            client_name: row.client_name,
            status_label: status.label(),
            status_color: status.color(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub name: String,
    pub description: Option<String>,
    pub client_id: Uuid,
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lookup_table() {
        assert_eq!(ProjectStatus::AwaitingQuote.label(), "Aguardando Orçamento");
        assert_eq!(ProjectStatus::AwaitingQuote.color(), "orange");
        assert_eq!(ProjectStatus::Draft.color(), "gray");
        assert_eq!(
            serde_json::to_value(ProjectStatus::AwaitingQuote).unwrap(),
            serde_json::json!("awaiting_quote")
        );
    }

    #[test]
    fn codes_are_zero_padded() {
        assert_eq!(project_code(7), "PRJ-0007");
        assert_eq!(project_code(12345), "PRJ-12345");
    }
}
