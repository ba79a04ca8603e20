// src/models/measurements.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "opening_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    Porta,
    Janela,
    Passagem,
    VidroFixo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "reference_side", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSide {
    #[default]
    Esquerda,
    Direita,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "hydraulic_point_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum HydraulicPointType {
    EntradaAgua,
    Saida,
    Esgoto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "electrical_point_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ElectricalPointType {
    Tomada,
    Interruptor,
    Disjuntor,
    Antena,
    Rede,
    Telefone,
}

impl ElectricalPointType {
    /// Prefixo do número do ponto. Tudo que não é tomada/interruptor usa "D".
    pub fn prefix(&self) -> &'static str {
        match self {
            ElectricalPointType::Tomada => "T",
            ElectricalPointType::Interruptor => "I",
            _ => "D",
        }
    }
}

// --- NUMERAÇÃO ---
// Os números vêm de contadores persistidos (nunca da contagem de linhas),
// então um número excluído não volta a ser usado.

pub fn wall_label(seq: i32) -> String {
    format!("W{}", seq)
}

pub fn point_label(prefix: &str, seq: i32) -> String {
    format!("{}{}", prefix, seq)
}

// --- PAREDE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: Uuid,
    pub environment_id: Uuid,
    #[schema(example = "W1")]
    pub wall_number: String,
    #[schema(example = 1)]
    pub seq: i32,
    #[schema(example = 2.7)]
    pub height: Option<Decimal>,
    #[schema(example = 3.45)]
    pub width: Option<Decimal>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WallRecord {
    pub height: Option<Decimal>,
    pub width: Option<Decimal>,
    pub photo_url: Option<String>,
}

// --- ABERTURA ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub id: Uuid,
    pub wall_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: OpeningType,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub height_from_floor: Option<Decimal>,
    pub molding_measurements: Option<String>,
    pub is_internal: bool,
    pub distance_from_side: Option<Decimal>,
    pub reference_side: ReferenceSide,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OpeningRecord {
    pub kind: OpeningType,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    pub height_from_floor: Option<Decimal>,
    pub molding_measurements: Option<String>,
    pub is_internal: bool,
    pub distance_from_side: Option<Decimal>,
    pub reference_side: ReferenceSide,
}

// --- PONTO HIDRÁULICO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HydraulicPoint {
    pub id: Uuid,
    pub wall_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: HydraulicPointType,
    #[schema(example = "1/2\"")]
    pub diameter: Option<String>,
    pub distance_from_side: Option<Decimal>,
    pub height_from_floor: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct HydraulicPointRecord {
    pub kind: HydraulicPointType,
    pub diameter: Option<String>,
    pub distance_from_side: Option<Decimal>,
    pub height_from_floor: Option<Decimal>,
}

// --- PONTO ELÉTRICO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectricalPoint {
    pub id: Uuid,
    pub wall_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: ElectricalPointType,
    #[schema(example = "T1")]
    pub point_number: String,
    pub height_from_floor: Option<Decimal>,
    pub distance_from_side: Option<Decimal>,
    pub reference_side: ReferenceSide,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ElectricalPointRecord {
    pub kind: ElectricalPointType,
    pub height_from_floor: Option<Decimal>,
    pub distance_from_side: Option<Decimal>,
    pub reference_side: ReferenceSide,
}

/// Parede com tudo que foi medido nela (abas do levantamento).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WallDetail {
    #[serde(flatten)]
    pub wall: Wall,
    pub openings: Vec<Opening>,
    pub hydraulic_points: Vec<HydraulicPoint>,
    pub electrical_points: Vec<ElectricalPoint>,
}
