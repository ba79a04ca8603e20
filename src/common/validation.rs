// src/common/validation.rs

use validator::ValidationError;

/// Nome obrigatório: vazio ou só espaços não passa.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Texto opcional vindo do formulário: "" vira `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Erro de campo montado fora do derive (ex.: horário mal formatado)
pub fn field_error(field: &'static str, code: &'static str) -> validator::ValidationErrors {
    let mut errors = validator::ValidationErrors::new();
    let mut err = ValidationError::new(code);
    err.message = Some(code.into());
    errors.add(field, err);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("Cozinha").is_ok());
    }

    #[test]
    fn empty_optionals_collapse() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
