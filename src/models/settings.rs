// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::not_blank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "material_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaterialType {
    Mdf,
    Mdp,
    Compensado,
    MadeiraMacica,
    Misto,
}

impl MaterialType {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Mdf => "MDF",
            MaterialType::Mdp => "MDP",
            MaterialType::Compensado => "Compensado",
            MaterialType::MadeiraMacica => "Madeira Maciça",
            MaterialType::Misto => "Vários materiais",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "measurement_unit", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    M,
    Cm,
    Mm,
}

impl MeasurementUnit {
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementUnit::M => "Metros (m)",
            MeasurementUnit::Cm => "Centímetros (cm)",
            MeasurementUnit::Mm => "Milímetros (mm)",
        }
    }
}

// Preferências respondidas no quiz de boas-vindas
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[schema(ignore)]
    pub user_id: Uuid,
    pub material_type: MaterialType,
    pub measurement_unit: MeasurementUnit,
    #[schema(example = "Cozinhas sob medida, acabamento em laca")]
    pub work_style: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesView {
    #[serde(flatten)]
    pub preferences: UserPreferences,
    #[schema(example = "Madeira Maciça")]
    pub material_label: &'static str,
    #[schema(example = "Centímetros (cm)")]
    pub measurement_label: &'static str,
}

impl From<UserPreferences> for PreferencesView {
    fn from(preferences: UserPreferences) -> Self {
        Self {
            material_label: preferences.material_type.label(),
            measurement_label: preferences.measurement_unit.label(),
            preferences,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    pub material_type: MaterialType,
    pub measurement_unit: MeasurementUnit,
    #[validate(custom(function = "not_blank", message = "Descreva seu estilo de trabalho"))]
    pub work_style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_quiz_options() {
        assert_eq!(MaterialType::MadeiraMacica.label(), "Madeira Maciça");
        assert_eq!(MeasurementUnit::Cm.label(), "Centímetros (cm)");
        assert_eq!(serde_json::to_value(MeasurementUnit::Mm).unwrap(), "mm");
    }
}
