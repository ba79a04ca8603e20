// src/models/briefing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "door_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DoorType {
    Lisa,
    Provencal,
    Vidro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "countertop_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CountertopType {
    Marmore,
    Granito,
    Mdf,
}

// --- AMBIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEnvironment {
    pub id: Uuid,
    pub project_id: Uuid,
    #[schema(example = "Cozinha")]
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    #[schema(example = "cozinha")]
    pub kind: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- MÓDULO ---

/// Ferragens do módulo. Guardado como JSONB, formato fixo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Hardware {
    pub dobradica: bool,
    pub amortecida: bool,
    pub corredica_telescopica: bool,
    pub corredica_oculta: bool,
    pub cantoneiras: bool,
    #[schema(example = "Perfil alumínio preto")]
    pub puxadores: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: Uuid,
    pub environment_id: Uuid,
    #[schema(example = "Balcões")]
    pub name: String,
    pub has_doors: bool,
    #[schema(example = 4)]
    pub door_count: i32,
    pub door_type: Option<DoorType>,
    pub countertop_type: Option<CountertopType>,
    pub preferences: Option<String>,
    #[schema(value_type = Hardware)]
    pub hardware: Json<Hardware>,
    pub created_at: DateTime<Utc>,
}

// Campos editáveis do módulo (criação e edição gravam o mesmo formulário)
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    pub name: String,
    pub has_doors: bool,
    pub door_count: i32,
    pub door_type: Option<DoorType>,
    pub countertop_type: Option<CountertopType>,
    pub preferences: Option<String>,
    pub hardware: Hardware,
}

/// Comparação de nomes entre módulos irmãos, sem diferenciar maiúsculas.
pub fn same_module_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare_case_insensitively() {
        assert!(same_module_name("Balcões", "BALCÕES"));
        assert!(same_module_name("ilha", "Ilha"));
        assert!(!same_module_name("Ilha", "Ilha 2"));
    }

    #[test]
    fn hardware_fills_missing_flags() {
        let hw: Hardware = serde_json::from_str(r#"{"dobradica":true}"#).unwrap();
        assert!(hw.dobradica);
        assert!(!hw.cantoneiras);
        assert_eq!(hw.puxadores, "");
    }
}
