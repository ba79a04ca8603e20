// src/common/measure.rs

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

// Casas decimais guardadas no banco (NUMERIC(10,3))
const SCALE: u32 = 3;
// Maior valor que cabe em NUMERIC(10,3)
// 9_999_999_999 = 2 * 2^32 + 0x540B_E3FF (Decimal::new não é const)
const MAX_MEASURE: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, SCALE);

/// Medida vinda de um campo de formulário: número JSON ou texto digitado.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum MeasureInput {
    Number(f64),
    Text(String),
}

impl MeasureInput {
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            MeasureInput::Number(value) => Decimal::from_f64(*value).map(|d| d.round_dp(SCALE).normalize()),
            MeasureInput::Text(raw) => parse_measure(raw),
        }
    }
}

/// Texto -> medida. Vazio ou inválido vira `None` (null no banco).
pub fn parse_measure(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .ok()
        .map(|d| d.round_dp(SCALE).normalize())
}

pub fn measure(input: &Option<MeasureInput>) -> Option<Decimal> {
    input.as_ref().and_then(MeasureInput::to_decimal)
}

/// Validador: a medida precisa caber na coluna. Texto ilegível continua virando null.
pub fn fits_column(input: &MeasureInput) -> Result<(), ValidationError> {
    let fits = match input {
        MeasureInput::Number(value) => Decimal::from_f64(*value)
            .is_some_and(|d| d.round_dp(SCALE).abs() <= MAX_MEASURE),
        MeasureInput::Text(raw) => parse_measure(raw).is_none_or(|d| d.abs() <= MAX_MEASURE),
    };

    if fits {
        Ok(())
    } else {
        Err(ValidationError::new("out_of_range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dot_and_comma() {
        assert_eq!(parse_measure("2.50"), Some(Decimal::new(25, 1)));
        assert_eq!(parse_measure(" 2,50 "), Some(Decimal::new(25, 1)));
    }

    #[test]
    fn garbage_becomes_none() {
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("   "), None);
        assert_eq!(parse_measure("abc"), None);
        assert_eq!(parse_measure("1,2,3"), None);
    }

    #[test]
    fn zero_is_kept() {
        assert_eq!(parse_measure("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn column_limit() {
        assert_eq!(MAX_MEASURE.to_string(), "9999999.999");
        assert!(fits_column(&MeasureInput::Text("9999999,999".into())).is_ok());
        assert!(fits_column(&MeasureInput::Text("-9999999.999".into())).is_ok());
        assert!(fits_column(&MeasureInput::Text("123456789".into())).is_err());
        assert!(fits_column(&MeasureInput::Number(10_000_000.0)).is_err());
        assert!(fits_column(&MeasureInput::Number(1e30)).is_err());
        assert!(fits_column(&MeasureInput::Text("abc".into())).is_ok());
    }

    #[test]
    fn json_numbers_and_text_deserialize() {
        let n: Option<MeasureInput> = serde_json::from_str("1.2").unwrap();
        assert_eq!(measure(&n), Some(Decimal::new(12, 1)));

        let t: Option<MeasureInput> = serde_json::from_str("\"0,9\"").unwrap();
        assert_eq!(measure(&t), Some(Decimal::new(9, 1)));

        let null: Option<MeasureInput> = serde_json::from_str("null").unwrap();
        assert_eq!(measure(&null), None);
    }
}
