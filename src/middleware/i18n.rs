// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

const SUPPORTED: [&str; 2] = ["pt", "en"];
const DEFAULT_LANG: &str = "pt";

// Idioma das mensagens de erro (toasts)
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl Locale {
    /// "pt-BR,pt;q=0.9,en;q=0.8" -> "pt". Idiomas sem tradução caem no padrão.
    pub fn from_header(header_str: &str) -> Self {
        let lang = accept_language::parse(header_str)
            .into_iter()
            .map(|tag| tag.split('-').next().unwrap_or(&tag).to_lowercase())
            .find(|lang| SUPPORTED.contains(&lang.as_str()))
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Locale(lang)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_header)
            .unwrap_or_default();

        Ok(locale)
    }
}
