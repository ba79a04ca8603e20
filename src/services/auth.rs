// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{AuthResponse, Claims, SessionResponse, SessionStep, User},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, bcrypt_cost: u32) -> Self {
        Self { user_repo, jwt_secret, bcrypt_cost }
    }

    pub async fn register_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        // Hashing é CPU-bound: roda fora do executor
        let password_clone = password.to_owned();
        let cost = self.bcrypt_cost;
        let hashed_password = tokio::task::spawn_blocking(move || hash(&password_clone, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let new_user = self.user_repo.create_user(email, &hashed_password).await?;
        tracing::info!("👤 Novo usuário registrado: {}", new_user.id);

        self.auth_response(&new_user)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.auth_response(&user)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// Próxima tela a partir do token (se houver). Token inválido = login.
    pub async fn session(&self, token: Option<&str>) -> Result<SessionResponse, AppError> {
        let user = match token {
            Some(token) => match self.validate_token(token).await {
                Ok(user) => Some(user),
                Err(AppError::InvalidToken | AppError::UserNotFound) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };

        Ok(SessionResponse { next: SessionStep::for_user(user.as_ref()), user })
    }

    fn auth_response(&self, user: &User) -> Result<AuthResponse, AppError> {
        Ok(AuthResponse {
            token: self.create_token(user.id)?,
            next: SessionStep::for_user(Some(user)),
        })
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
